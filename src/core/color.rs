use anyhow::{bail, Result};
use std::{fmt, ops::{Index, IndexMut}, str::FromStr};

/// One of the four armies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
    Red,
    Blue,
}

impl Color {
    pub const ALL: [Color; 4] = [Color::White, Color::Black, Color::Red, Color::Blue];

    pub fn all() -> [Color; 4] {
        Self::ALL
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Single-letter prefix used in piece codes. Blue is `u` so it does not
    /// clash with black.
    pub const fn letter(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
            Color::Red => 'r',
            Color::Blue => 'u',
        }
    }

    pub fn from_letter(c: char) -> Option<Self> {
        match c {
            'w' => Some(Color::White),
            'b' => Some(Color::Black),
            'r' => Some(Color::Red),
            'u' => Some(Color::Blue),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
            Color::Red => "red",
            Color::Blue => "blue",
        }
    }
}

impl FromStr for Color {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "white" | "w" => Ok(Color::White),
            "black" | "b" => Ok(Color::Black),
            "red" | "r" => Ok(Color::Red),
            "blue" | "u" => Ok(Color::Blue),
            _ => bail!("Unknown color: {}", s),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Array indexed by army color
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorArray<T> {
    pub values: [T; 4],
}

impl<T> ColorArray<T> {
    pub fn from_fn(f: impl FnMut(Color) -> T) -> Self {
        Self {
            values: Color::ALL.map(f),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Color, &T)> {
        Color::ALL.into_iter().zip(self.values.iter())
    }
}

impl<T> Index<Color> for ColorArray<T> {
    type Output = T;

    fn index(&self, color: Color) -> &Self::Output {
        &self.values[color.index()]
    }
}

impl<T> IndexMut<Color> for ColorArray<T> {
    fn index_mut(&mut self, color: Color) -> &mut Self::Output {
        &mut self.values[color.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_index() {
        for (i, color) in Color::all().into_iter().enumerate() {
            assert_eq!(color.index(), i);
        }
    }

    #[test]
    fn test_color_letters() {
        for color in Color::all() {
            assert_eq!(Color::from_letter(color.letter()), Some(color));
        }
        assert_eq!(Color::Blue.letter(), 'u');
        assert_eq!(Color::from_letter('x'), None);
    }

    #[test]
    fn test_color_parse() {
        assert_eq!("Red".parse::<Color>().unwrap(), Color::Red);
        assert_eq!("u".parse::<Color>().unwrap(), Color::Blue);
        assert!("green".parse::<Color>().is_err());
    }

    #[test]
    fn test_color_array() {
        let mut array = ColorArray::from_fn(|c| c.index() + 1);
        assert_eq!(array[Color::Red], 3);

        array[Color::Black] = 20;
        let values: Vec<_> = array.iter().map(|(_, v)| *v).collect();
        assert_eq!(values, vec![1, 20, 3, 4]);

        let names = ColorArray::from_fn(Color::name);
        assert_eq!(names[Color::Blue], "blue");
    }
}
