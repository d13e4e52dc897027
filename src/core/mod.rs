//! Core board model: topology, armies, moves and their text forms

pub mod assets;
pub mod board;
pub mod color;
pub mod display;
pub mod loc;
pub mod piece;

pub use assets::{asset_code, AssetResolver, DirAssets, NoAssets, PLACEHOLDER};
pub use board::{
    apply_move, apply_move_with, generate, place, Board, MoveOutcome, OccupiedPolicy, Square,
    START_FEN,
};
pub use color::{Color, ColorArray};
pub use display::paint;
pub use loc::{is_playable, Loc, BOARD_LEN, PLAYABLE_LOCS};
pub use piece::{Piece, PieceId, PieceKind};
