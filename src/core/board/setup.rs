//! Starting armies

use anyhow::{ensure, Context, Result};
use tracing::debug;

use crate::core::{
    color::Color,
    loc::{Loc, BAND_END, BAND_LEN, BAND_START, BOARD_LEN},
    piece::{Piece, PieceId, PieceKind},
};

use super::Board;

/// Back line of every army, read along increasing x (top and bottom edges)
/// or increasing y (left and right edges)
pub const ARMY_BACK_LINE: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Back line plus one pawn in front of each back-line piece
pub const ARMY_SIZE: usize = 2 * ARMY_BACK_LINE.len();

/// Board edge an army starts on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Bottom,
    Top,
    Left,
    Right,
}

impl Edge {
    /// Row (top/bottom) or column (left/right) of the back line
    pub const fn back_line(self) -> i32 {
        match self {
            Edge::Bottom | Edge::Right => BOARD_LEN as i32 - 1,
            Edge::Top | Edge::Left => 0,
        }
    }

    /// Step from the back line towards the center
    pub const fn inward(self) -> i32 {
        match self {
            Edge::Bottom | Edge::Right => -1,
            Edge::Top | Edge::Left => 1,
        }
    }

    /// Square `along` cells into the edge, `depth` lines in from the back line
    pub const fn loc(self, depth: i32, along: i32) -> Loc {
        let line = self.back_line() + depth * self.inward();
        match self {
            Edge::Bottom | Edge::Top => Loc::new(along, line),
            Edge::Left | Edge::Right => Loc::new(line, along),
        }
    }
}

impl Color {
    pub const fn home_edge(self) -> Edge {
        match self {
            Color::White => Edge::Bottom,
            Color::Black => Edge::Top,
            Color::Red => Edge::Left,
            Color::Blue => Edge::Right,
        }
    }
}

/// Starting squares of one army, back line first and pawns after, each in
/// band order
pub fn army_layout(color: Color) -> Result<Vec<(Loc, PieceKind)>> {
    ensure!(
        BAND_LEN == ARMY_BACK_LINE.len(),
        "Central band has {} cells, an army needs {}",
        BAND_LEN,
        ARMY_BACK_LINE.len()
    );
    let band: Vec<i32> = (BAND_START..=BAND_END).collect();

    let edge = color.home_edge();
    let back_line = band.iter()
        .zip(ARMY_BACK_LINE)
        .map(|(&along, kind)| (edge.loc(0, along), kind));
    let pawns = band.iter()
        .map(|&along| (edge.loc(1, along), PieceKind::Pawn));

    Ok(back_line.chain(pawns).collect())
}

/// Id of the `slot`-th piece of an army as laid out by [`army_layout`]
pub fn army_piece_id(color: Color, slot: usize) -> PieceId {
    PieceId((color.index() * ARMY_SIZE + slot) as u16)
}

impl Board {
    /// Board with the cross topology and all four armies in place
    pub fn start() -> Result<Self> {
        place(Board::new())
    }

    pub fn place_army(&mut self, color: Color) -> Result<()> {
        for (slot, (loc, kind)) in army_layout(color)?.into_iter().enumerate() {
            let piece = Piece::new(army_piece_id(color, slot), color, kind);
            self.add_piece(loc, piece)
                .with_context(|| format!("Failed to place the {} army", color))?;
        }

        debug!(%color, "placed army");
        Ok(())
    }

    pub fn place_armies(&mut self) -> Result<()> {
        for color in Color::all() {
            self.place_army(color)?;
        }
        Ok(())
    }
}

/// Place all four armies on a fresh board. Squares that are already occupied
/// make the placement fail.
pub fn place(board: Board) -> Result<Board> {
    let mut board = board;
    board.place_armies()?;
    Ok(board)
}
