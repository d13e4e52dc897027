use anyhow::{anyhow, Context, Result};
use std::fmt;

use super::color::Color;

/// Kinds of chess pieces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::King,
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Pawn,
    ];

    pub const fn to_char(self) -> char {
        match self {
            PieceKind::King => 'K',
            PieceKind::Queen => 'Q',
            PieceKind::Rook => 'R',
            PieceKind::Bishop => 'B',
            PieceKind::Knight => 'N',
            PieceKind::Pawn => 'P',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'K' => Some(PieceKind::King),
            'Q' => Some(PieceKind::Queen),
            'R' => Some(PieceKind::Rook),
            'B' => Some(PieceKind::Bishop),
            'N' => Some(PieceKind::Knight),
            'P' => Some(PieceKind::Pawn),
            _ => None,
        }
    }
}

/// Identity of a piece on a board. Two pieces with the same color and kind
/// are still different pieces when their ids differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub u16);

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A piece on the board. Moves are addressed by the whole value, id
/// included, never by color and kind alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub id: PieceId,
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub fn new(id: PieceId, color: Color, kind: PieceKind) -> Self {
        Self { id, color, kind }
    }

    /// Two-letter code such as `wK` or `uP`
    pub fn code(&self) -> String {
        self.to_string()
    }

    /// Same color and kind, regardless of identity
    pub fn same_class(&self, other: &Piece) -> bool {
        self.color == other.color && self.kind == other.kind
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.color.letter(), self.kind.to_char())
    }
}

/// Parses a piece code into its color and kind
pub fn parse_code(code: &str) -> Result<(Color, PieceKind)> {
    let mut chars = code.chars();
    let (Some(c), Some(k), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(anyhow!("Invalid piece code '{}', expected two letters", code));
    };

    let color = Color::from_letter(c)
        .with_context(|| format!("Invalid color letter '{}' in '{}'", c, code))?;
    let kind = PieceKind::from_char(k)
        .with_context(|| format!("Invalid piece letter '{}' in '{}'", k, code))?;

    Ok((color, kind))
}
