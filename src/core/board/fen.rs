use std::str::FromStr;
use anyhow::{ensure, Context, Result};

use crate::core::{
    loc::{Loc, BOARD_LEN},
    piece::{parse_code, Piece, PieceId},
};

use super::Board;

/// Notation of the starting position, rows from top (y = 0) to bottom
pub const START_FEN: &str = "4bRbNbBbQbKbBbNbR4/4bPbPbPbPbPbPbPbP4/16/16/\
rRrP12uPuR/rNrP12uPuN/rBrP12uPuB/rQrP12uPuQ/\
rKrP12uPuK/rBrP12uPuB/rNrP12uPuN/rRrP12uPuR/\
16/16/4wPwPwPwPwPwPwPwP4/4wRwNwBwQwKwBwNwR4";

impl Board {
    /// Convert the board to notation. Empty runs are counted over every
    /// square, playable or not.
    pub fn to_fen(&self) -> String {
        let mut fen = String::new();
        for (y, row) in self.rows().enumerate() {
            let mut empty_squares = 0;
            for square in row {
                if let Some(piece) = &square.occupant {
                    if empty_squares > 0 {
                        fen.push_str(&empty_squares.to_string());
                        empty_squares = 0;
                    }
                    fen.push(piece.color.letter());
                    fen.push(piece.kind.to_char());
                } else {
                    empty_squares += 1;
                }
            }
            if empty_squares > 0 {
                fen.push_str(&empty_squares.to_string());
            }
            if y < BOARD_LEN - 1 {
                fen.push('/');
            }
        }
        fen
    }

    /// Create a board from notation. Pieces get ids in reading order.
    pub fn from_fen(fen: &str) -> Result<Self> {
        let rows: Vec<&str> = fen.trim().split('/').collect();
        ensure!(
            rows.len() == BOARD_LEN,
            "Expected {} rows, found {}",
            BOARD_LEN,
            rows.len()
        );

        let mut board = Board::new();
        let mut next_id = 0;

        for (y, row) in rows.into_iter().enumerate() {
            let mut x = 0;
            let mut chars = row.chars().peekable();

            while let Some(c) = chars.next() {
                if let Some(digit) = c.to_digit(10) {
                    let mut run = digit as usize;
                    while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
                        run = run * 10 + digit as usize;
                        ensure!(
                            run <= BOARD_LEN,
                            "Empty run longer than {} squares in row {}",
                            BOARD_LEN,
                            y
                        );
                        chars.next();
                    }
                    ensure!(run > 0, "Empty run of zero squares in row {}", y);
                    ensure!(
                        x + run <= BOARD_LEN,
                        "Row {} is longer than {} squares",
                        y,
                        BOARD_LEN
                    );
                    x += run;
                } else {
                    let code: String = std::iter::once(c).chain(chars.next()).collect();
                    let (color, kind) = parse_code(&code)
                        .with_context(|| format!("Invalid piece '{}' in row {}", code, y))?;

                    ensure!(x < BOARD_LEN, "Row {} is longer than {} squares", y, BOARD_LEN);
                    let loc = Loc::new(x as i32, y as i32);
                    board.add_piece(loc, Piece::new(PieceId(next_id), color, kind))?;
                    next_id += 1;
                    x += 1;
                }
            }

            ensure!(
                x == BOARD_LEN,
                "Row {} covers {} squares, expected {}",
                y,
                x,
                BOARD_LEN
            );
        }

        Ok(board)
    }
}

impl FromStr for Board {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_fen(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{color::Color, piece::PieceKind};
    use test_case::test_case;

    #[test]
    fn test_fen_empty_board() {
        let board = Board::new();
        let fen = board.to_fen();
        assert_eq!(fen, vec!["16"; 16].join("/"));
        assert_eq!(Board::from_fen(&fen).unwrap(), board);
    }

    #[test]
    fn test_start_fen_matches_placement() {
        let board = Board::start().unwrap();
        assert_eq!(board.to_fen(), START_FEN);
    }

    #[test]
    fn test_start_fen_loads_all_pieces() {
        let loaded = Board::from_fen(START_FEN).unwrap();
        let placed = Board::start().unwrap();

        assert_eq!(loaded.piece_count(), 64);
        loaded.validate().unwrap();
        for (loc, piece) in placed.pieces() {
            let other = loaded.get_piece(&loc).unwrap();
            assert!(piece.same_class(other), "mismatch at {}", loc);
        }
    }

    #[test]
    fn test_fen_after_move() {
        let mut board = Board::start().unwrap();
        let (_, king) = board.find_first(Color::White, PieceKind::King).unwrap();
        let king = *king;
        board.move_piece(&king, Loc::new(5, 5)).unwrap();

        let fen = board.to_fen();
        let rows: Vec<&str> = fen.split('/').collect();
        assert_eq!(rows[5], "rNrP3wK8uPuN");
        assert_eq!(rows[15], "4wRwNwBwQ1wBwNwR4");
        assert_eq!(Board::from_fen(&fen).unwrap().to_fen(), fen);
    }

    #[test]
    fn test_fen_parse_via_from_str() {
        let board: Board = START_FEN.parse().unwrap();
        assert_eq!(board.piece_count(), 64);
    }

    #[test_case("16/16" ; "too few rows")]
    #[test_case("17/16/16/16/16/16/16/16/16/16/16/16/16/16/16/16" ; "row too long")]
    #[test_case("15/16/16/16/16/16/16/16/16/16/16/16/16/16/16/16" ; "row too short")]
    #[test_case("wK15/16/16/16/16/16/16/16/16/16/16/16/16/16/16/16" ; "piece in corner")]
    #[test_case("4xK11/16/16/16/16/16/16/16/16/16/16/16/16/16/16/16" ; "bad color")]
    #[test_case("4wZ11/16/16/16/16/16/16/16/16/16/16/16/16/16/16/16" ; "bad kind")]
    #[test_case("4w/16/16/16/16/16/16/16/16/16/16/16/16/16/16/16" ; "truncated piece")]
    #[test_case("0/16/16/16/16/16/16/16/16/16/16/16/16/16/16/16" ; "zero run")]
    #[test_case("99999999999999999999999/16/16/16/16/16/16/16/16/16/16/16/16/16/16/16" ; "run overflows")]
    #[test_case("9/16/16/16/16/16/16/16/16/16/16/16/16/16/16/16" ; "runs past the edge")]
    #[test_case("12wK5/16/16/16/16/16/16/16/16/16/16/16/16/16/16/16" ; "run after piece past the edge")]
    #[test_case("16wK/16/16/16/16/16/16/16/16/16/16/16/16/16/16/16" ; "piece past the edge")]
    fn test_invalid_fen(fen: &str) {
        assert!(Board::from_fen(fen).is_err());
    }
}
