//! Board representation: topology, army placement and piece relocation

pub mod definitions;
pub mod fen;
pub mod moves;
pub mod setup;

pub use definitions::{Board, Square};
pub use fen::START_FEN;
pub use moves::{apply_move, apply_move_with, MoveOutcome, OccupiedPolicy};
pub use setup::{place, Edge, ARMY_BACK_LINE, ARMY_SIZE};

use std::collections::HashSet;
use anyhow::{bail, ensure, Context, Result};

use super::{
    color::{Color, ColorArray},
    loc::{Loc, BOARD_LEN},
    piece::{Piece, PieceKind},
};

/// Build the empty cross topology
pub fn generate() -> Board {
    Board::new()
}

impl Board {
    /// Create a new empty board with the cross topology
    pub fn new() -> Self {
        Self {
            squares: std::array::from_fn(|y| {
                std::array::from_fn(|x| Square::new(Loc::new(x as i32, y as i32)))
            }),
        }
    }

    pub fn square(&self, loc: &Loc) -> Result<&Square> {
        ensure!(loc.in_bounds(), "Square {} is off the board", loc);
        Ok(&self.squares[loc.y as usize][loc.x as usize])
    }

    pub(crate) fn square_mut(&mut self, loc: &Loc) -> Result<&mut Square> {
        ensure!(loc.in_bounds(), "Square {} is off the board", loc);
        Ok(&mut self.squares[loc.y as usize][loc.x as usize])
    }

    pub fn get_piece(&self, loc: &Loc) -> Option<&Piece> {
        self.square(loc).ok()?.occupant.as_ref()
    }

    pub fn is_playable(&self, loc: &Loc) -> bool {
        self.square(loc).map(|sq| sq.playable).unwrap_or(false)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Square; BOARD_LEN]> {
        self.squares.iter()
    }

    pub fn squares(&self) -> impl Iterator<Item = &Square> {
        self.squares.iter().flatten()
    }

    /// All pieces with their squares, row-major
    pub fn pieces(&self) -> impl Iterator<Item = (Loc, &Piece)> {
        self.squares()
            .filter_map(|sq| sq.occupant.as_ref().map(|piece| (sq.loc, piece)))
    }

    pub fn piece_count(&self) -> usize {
        self.pieces().count()
    }

    pub fn count_by_color(&self) -> ColorArray<usize> {
        ColorArray::from_fn(|color| self.pieces().filter(|(_, p)| p.color == color).count())
    }

    /// Where this exact piece (id included) currently stands
    pub fn find_piece(&self, piece: &Piece) -> Option<Loc> {
        self.pieces()
            .find(|(_, p)| *p == piece)
            .map(|(loc, _)| loc)
    }

    /// First piece of a color and kind, scanning row-major
    pub fn find_first(&self, color: Color, kind: PieceKind) -> Option<(Loc, &Piece)> {
        self.pieces()
            .find(|(_, p)| p.color == color && p.kind == kind)
    }

    /// Put a piece on an empty playable square
    pub fn add_piece(&mut self, loc: Loc, piece: Piece) -> Result<()> {
        let square = self.square_mut(&loc)?;
        ensure!(square.playable, "Cannot place {} on non-playable square {}", piece, loc);
        if let Some(existing) = square.occupant {
            bail!("Cannot place {} on {}, already occupied by {}", piece, loc, existing);
        }
        square.occupant = Some(piece);
        Ok(())
    }

    pub fn remove_piece(&mut self, loc: &Loc) -> Option<Piece> {
        self.square_mut(loc).ok()?.occupant.take()
    }

    /// Check the board invariants: squares know their own coordinates,
    /// playability follows the cross, non-playable squares are empty and no
    /// piece id appears twice.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();

        for (index, square) in self.squares().enumerate() {
            let loc = Loc::from_index(index);
            ensure!(square.loc == loc, "Square at {} reports loc {}", loc, square.loc);
            ensure!(
                square.playable == loc.is_playable(),
                "Square {} has wrong playability",
                loc
            );

            if let Some(piece) = &square.occupant {
                ensure!(square.playable, "Piece {} on non-playable square {}", piece, loc);
                ensure!(
                    seen.insert(piece.id),
                    "Piece id {} appears more than once",
                    piece.id
                );
            }
        }

        Ok(())
    }

    /// The occupant of `loc`, as an error when empty
    pub fn piece_at(&self, loc: &Loc) -> Result<&Piece> {
        self.square(loc)?
            .occupant
            .as_ref()
            .with_context(|| format!("No piece at {}", loc))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
