use anyhow::{ensure, Result};
use tracing::{debug, info};

use crate::core::{
    apply_move_with, AssetResolver, Board, Loc, MoveOutcome, NoAssets, Piece,
};

use super::{options::EngineOptions, render::RenderConfig};

/// Engine owns the current board and turns drag gestures into moves
#[derive(Debug, Clone)]
pub struct Engine {
    pub board: Board,
    pub options: EngineOptions,
    pub render: RenderConfig,
    /// Piece captured at pick-up time, waiting for a drop
    held: Option<Piece>,
}

impl Engine {
    /// Create an engine on the starting position with default options
    pub fn new() -> Result<Self> {
        Self::with_options(EngineOptions::default())
    }

    pub fn with_options(options: EngineOptions) -> Result<Self> {
        Ok(Self {
            board: Board::start()?,
            options,
            render: RenderConfig::default(),
            held: None,
        })
    }

    pub fn reset_game(&mut self) -> Result<()> {
        self.set_board(Board::start()?);
        Ok(())
    }

    /// Replace the board, dropping any gesture in progress
    pub fn set_board(&mut self, board: Board) {
        self.board = board;
        self.held = None;
    }

    pub fn load_fen(&mut self, fen: &str) -> Result<()> {
        let board = Board::from_fen(fen)?;
        self.set_board(board);
        Ok(())
    }

    pub fn get_fen(&self) -> String {
        self.board.to_fen()
    }

    pub fn set_option(&mut self, name: &str, value: &str) -> Result<()> {
        if RenderConfig::OPTION_NAMES.contains(&name) {
            self.render.set_option(name, value)
        } else {
            self.options.set_option(name, value)
        }
    }

    pub fn held(&self) -> Option<&Piece> {
        self.held.as_ref()
    }

    /// Start dragging the piece on `loc`. A previous gesture is abandoned.
    pub fn pick_up(&mut self, loc: Loc) -> Result<Piece> {
        ensure!(self.board.is_playable(&loc), "Cannot pick up from {}", loc);
        let piece = *self.board.piece_at(&loc)?;

        if let Some(previous) = self.held.replace(piece) {
            debug!(%previous, "abandoned previous drag");
        }
        debug!(%piece, %loc, "picked up");

        Ok(piece)
    }

    /// Whether the drop target accepts a piece
    pub fn can_drop(&self, loc: &Loc) -> bool {
        self.board.is_playable(loc)
    }

    /// Finish the gesture on `loc`. Returns `None` when nothing was held or
    /// the square does not accept drops; either way the gesture ends.
    pub fn drop_on(&mut self, loc: Loc) -> Result<Option<MoveOutcome>> {
        let Some(piece) = self.held.take() else {
            debug!(%loc, "drop with nothing held");
            return Ok(None);
        };

        if !self.can_drop(&loc) {
            debug!(%piece, %loc, "drop refused");
            return Ok(None);
        }

        let (board, outcome) =
            apply_move_with(&self.board, &piece, loc, self.options.occupied_policy)?;
        self.board = board;
        info!(%outcome, "move");

        Ok(Some(outcome))
    }

    /// Abandon the gesture without moving anything
    pub fn cancel(&mut self) -> Option<Piece> {
        self.held.take()
    }

    /// Pick up from one square and drop on another
    pub fn move_from(&mut self, from: Loc, to: Loc) -> Result<Option<MoveOutcome>> {
        self.pick_up(from)?;
        self.drop_on(to)
    }

    /// Asset of the piece on `loc`, or the placeholder
    pub fn resolve_asset(&self, loc: &Loc) -> Result<String> {
        let piece = self.board.piece_at(loc)?;
        Ok(match &self.options.assets {
            Some(assets) => assets.resolve_or_placeholder(piece),
            None => NoAssets.resolve_or_placeholder(piece),
        })
    }
}
