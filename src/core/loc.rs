use std::{fmt::Display, str::FromStr};
use anyhow::Context;
use lazy_static::lazy_static;

pub const BOARD_LEN: usize = 16;
pub const BOARD_SIZE: usize = BOARD_LEN * BOARD_LEN;

/// First and last index of the central band shared by both arms of the cross
pub const BAND_START: i32 = 4;
pub const BAND_END: i32 = 11;
pub const BAND_LEN: usize = (BAND_END - BAND_START + 1) as usize;

/// Whether a single coordinate falls inside the central band
pub const fn in_band(v: i32) -> bool {
    v >= BAND_START && v <= BAND_END
}

/// The cross predicate: a square is playable when either coordinate lies in
/// the central band. Off-board coordinates are never playable.
pub const fn is_playable(x: i32, y: i32) -> bool {
    x >= 0 && x < BOARD_LEN as i32 &&
    y >= 0 && y < BOARD_LEN as i32 &&
    (in_band(x) || in_band(y))
}

/// A square on the board. `x` grows to the right, `y` grows downwards, so
/// row 0 is the top edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Loc {
    pub x: i32,
    pub y: i32,
}

impl Loc {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn in_bounds(&self) -> bool {
        self.x >= 0 && self.x < BOARD_LEN as i32 &&
        self.y >= 0 && self.y < BOARD_LEN as i32
    }

    pub const fn is_playable(&self) -> bool {
        is_playable(self.x, self.y)
    }

    pub fn from_index(index: usize) -> Self {
        Self {
            x: (index % BOARD_LEN) as i32,
            y: (index / BOARD_LEN) as i32,
        }
    }

    pub fn index(&self) -> usize {
        (self.y as usize) * BOARD_LEN + (self.x as usize)
    }

    /// Every square of the grid in row-major order
    pub fn all() -> impl Iterator<Item = Loc> {
        (0..BOARD_SIZE).map(Loc::from_index)
    }
}

impl From<(i32, i32)> for Loc {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl FromStr for Loc {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s.trim().split_once(',')
            .with_context(|| format!("Invalid loc '{}', expected x,y", s))?;

        Ok(Loc {
            x: x.trim().parse().with_context(|| format!("Invalid x in '{}'", s))?,
            y: y.trim().parse().with_context(|| format!("Invalid y in '{}'", s))?,
        })
    }
}

impl Display for Loc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

lazy_static!(
    /// All squares inside the cross, row-major
    pub static ref PLAYABLE_LOCS: Vec<Loc> = Loc::all()
        .filter(Loc::is_playable)
        .collect();
);

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_playable_predicate_matches_bands() {
        for loc in Loc::all() {
            let expected = (4..=11).contains(&loc.x) || (4..=11).contains(&loc.y);
            assert_eq!(loc.is_playable(), expected, "mismatch at {}", loc);
        }
    }

    #[test]
    fn test_playable_count() {
        assert_eq!(PLAYABLE_LOCS.len(), 176);
        assert_eq!(BOARD_SIZE - PLAYABLE_LOCS.len(), 80);
    }

    #[test_case(0, 0, false ; "top left corner")]
    #[test_case(3, 3, false ; "inner corner edge")]
    #[test_case(4, 0, true ; "top arm")]
    #[test_case(0, 4, true ; "left arm")]
    #[test_case(15, 11, true ; "right arm")]
    #[test_case(12, 12, false ; "bottom right corner")]
    #[test_case(7, 7, true ; "center")]
    #[test_case(-1, 5, false ; "off board left")]
    #[test_case(5, 16, false ; "off board bottom")]
    fn test_is_playable(x: i32, y: i32, expected: bool) {
        assert_eq!(Loc::new(x, y).is_playable(), expected);
    }

    #[test]
    fn test_index_round_trip() {
        for index in 0..BOARD_SIZE {
            assert_eq!(Loc::from_index(index).index(), index);
        }
        assert_eq!(Loc::new(3, 2).index(), 35);
    }

    #[test]
    fn test_parse_loc() {
        assert_eq!("8,15".parse::<Loc>().unwrap(), Loc::new(8, 15));
        assert_eq!(" 5 , 5 ".parse::<Loc>().unwrap(), Loc::new(5, 5));
        assert!("8".parse::<Loc>().is_err());
        assert!("a,1".parse::<Loc>().is_err());
        assert_eq!(Loc::new(0, 12).to_string(), "0,12");
    }
}
