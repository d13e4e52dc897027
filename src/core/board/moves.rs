//! Piece relocation

use std::{fmt, str::FromStr};
use anyhow::{bail, ensure, Result};
use tracing::{debug, warn};

use crate::core::{loc::Loc, piece::Piece};

use super::Board;

/// What to do when the target square already holds a different piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OccupiedPolicy {
    /// The occupant is dropped from the board and reported as displaced
    #[default]
    Overwrite,
    /// The move fails and the board is left alone
    Reject,
    /// The occupant takes the square the moving piece left
    Swap,
}

impl FromStr for OccupiedPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "overwrite" => Ok(OccupiedPolicy::Overwrite),
            "reject" => Ok(OccupiedPolicy::Reject),
            "swap" => Ok(OccupiedPolicy::Swap),
            _ => bail!("Unknown occupied policy: {}", s),
        }
    }
}

impl fmt::Display for OccupiedPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OccupiedPolicy::Overwrite => write!(f, "overwrite"),
            OccupiedPolicy::Reject => write!(f, "reject"),
            OccupiedPolicy::Swap => write!(f, "swap"),
        }
    }
}

/// Result of a successful move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub piece: Piece,
    /// `None` when the piece was not on the board before the move
    pub from: Option<Loc>,
    pub to: Loc,
    /// Piece that stood on `to` and is no longer on the board
    pub displaced: Option<Piece>,
    /// Piece that stood on `to` and now stands on `from`
    pub swapped: Option<Piece>,
}

impl MoveOutcome {
    pub fn is_noop(&self) -> bool {
        self.from == Some(self.to)
    }
}

impl fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "moved {} ", self.piece)?;
        match self.from {
            Some(from) => write!(f, "{}", from)?,
            None => write!(f, "none")?,
        }
        write!(f, " {}", self.to)?;

        if let Some(displaced) = &self.displaced {
            write!(f, " displaced {}", displaced)?;
        }
        if let Some(swapped) = &self.swapped {
            write!(f, " swapped {}", swapped)?;
        }

        Ok(())
    }
}

impl Board {
    /// Move `piece` to `target` using the default occupied policy
    pub fn move_piece(&mut self, piece: &Piece, target: Loc) -> Result<MoveOutcome> {
        self.move_piece_with(piece, target, OccupiedPolicy::default())
    }

    /// Move `piece` to `target`. Only topology is checked: any piece may go to
    /// any playable square. On error the board is unchanged.
    pub fn move_piece_with(
        &mut self,
        piece: &Piece,
        target: Loc,
        policy: OccupiedPolicy,
    ) -> Result<MoveOutcome> {
        ensure!(target.in_bounds(), "Target {} is off the board", target);
        ensure!(self.is_playable(&target), "Target {} is not a playable square", target);

        let occupant = self.get_piece(&target)
            .copied()
            .filter(|other| other != piece);

        if let (OccupiedPolicy::Reject, Some(other)) = (policy, occupant) {
            bail!("Target {} is occupied by {}", target, other);
        }

        // Clear every square holding this piece, so a duplicated piece cannot
        // survive a move.
        let mut from = None;
        for row in self.squares.iter_mut() {
            for square in row.iter_mut() {
                if square.occupant.as_ref() == Some(piece) {
                    square.occupant = None;
                    from.get_or_insert(square.loc);
                }
            }
        }

        if from.is_none() {
            warn!(%piece, id = %piece.id, %target, "moved piece was not on the board");
        }

        let (displaced, swapped) = match (policy, occupant, from) {
            (OccupiedPolicy::Swap, Some(other), Some(from)) => {
                self.square_mut(&from)?.occupant = Some(other);
                (None, Some(other))
            }
            (_, other, _) => (other, None),
        };

        self.square_mut(&target)?.occupant = Some(*piece);

        let outcome = MoveOutcome {
            piece: *piece,
            from,
            to: target,
            displaced,
            swapped,
        };

        if let Some(displaced) = &outcome.displaced {
            warn!(%piece, %displaced, %target, "move overwrote a piece");
        }
        debug!(%outcome, "applied move");

        Ok(outcome)
    }
}

/// Copy-on-write move: returns the new board and leaves `board` untouched
pub fn apply_move(board: &Board, piece: &Piece, target: Loc) -> Result<(Board, MoveOutcome)> {
    apply_move_with(board, piece, target, OccupiedPolicy::default())
}

pub fn apply_move_with(
    board: &Board,
    piece: &Piece,
    target: Loc,
    policy: OccupiedPolicy,
) -> Result<(Board, MoveOutcome)> {
    let mut next = board.clone();
    let outcome = next.move_piece_with(piece, target, policy)?;
    Ok((next, outcome))
}
