use crate::core::{
    loc::{Loc, BOARD_LEN},
    piece::Piece,
};

/// A single cell of the grid. `loc` and `playable` are fixed at generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Square {
    pub loc: Loc,
    pub playable: bool,
    pub occupant: Option<Piece>,
}

impl Square {
    pub fn new(loc: Loc) -> Self {
        Self {
            loc,
            playable: loc.is_playable(),
            occupant: None,
        }
    }

    /// Checkerboard shade used by renderers
    pub fn is_light(&self) -> bool {
        (self.loc.x + self.loc.y) % 2 == 0
    }
}

/// The 16×16 cross board, indexed `[y][x]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub(super) squares: [[Square; BOARD_LEN]; BOARD_LEN],
}
