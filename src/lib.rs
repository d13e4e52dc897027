//! Masterdrez - board state engine for the four-player cross chess variant

pub mod core;
pub mod engine;
pub mod mdi;
pub mod utils;

// Re-export commonly used items
pub use crate::core::{Board, Loc, Piece};
pub use engine::Engine;
