use std::fmt;
use colored::{ColoredString, Colorize};

use super::{
    board::{Board, Square},
    color::Color,
    loc::BOARD_LEN,
    piece::Piece,
};

/// Piece code in its army's terminal color
pub fn paint(piece: &Piece) -> ColoredString {
    let code = piece.code();
    match piece.color {
        Color::White => code.bright_white().bold(),
        Color::Black => code.bright_black().bold(),
        Color::Red => code.bright_red(),
        Color::Blue => code.bright_blue(),
    }
}

fn cell(square: &Square) -> String {
    match &square.occupant {
        Some(piece) => paint(piece).to_string(),
        None if !square.playable => "  ".to_string(),
        None if square.is_light() => "··".to_string(),
        None => "::".dimmed().to_string(),
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for x in 0..BOARD_LEN {
            write!(f, " {:>2}", x)?;
        }
        writeln!(f)?;

        for (y, row) in self.rows().enumerate() {
            let mut line = format!("{:>2}", y);
            for square in row {
                line.push(' ');
                line.push_str(&cell(square));
            }
            writeln!(f, "{}", line.trim_end())?;
        }

        Ok(())
    }
}
