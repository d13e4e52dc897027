use anyhow::{bail, Result};
use std::fmt;

use crate::core::Color;

/// Board widget settings handed to the renderer. Descriptive only: nothing
/// in the engine enforces turn or movable color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Army shown at the bottom of the screen
    pub orientation: Color,
    pub turn_color: Color,
    pub movable_color: Color,
    /// Free movement: the widget lets any piece go to any square
    pub free: bool,
}

impl RenderConfig {
    pub const OPTION_NAMES: [&'static str; 4] = ["orientation", "turncolor", "movablecolor", "free"];

    pub fn set_option(&mut self, name: &str, value: &str) -> Result<()> {
        match name {
            "orientation" => self.orientation = value.parse()?,
            "turncolor" => self.turn_color = value.parse()?,
            "movablecolor" => self.movable_color = value.parse()?,
            "free" => self.free = value.parse()?,
            _ => bail!("Unknown render option: {}", name),
        }
        Ok(())
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            orientation: Color::White,
            turn_color: Color::White,
            movable_color: Color::White,
            free: true,
        }
    }
}

impl fmt::Display for RenderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "orientation {} turncolor {} movablecolor {} free {}",
            self.orientation, self.turn_color, self.movable_color, self.free
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        assert_eq!(
            RenderConfig::default().to_string(),
            "orientation white turncolor white movablecolor white free true"
        );
    }

    #[test]
    fn test_set_render_option() {
        let mut config = RenderConfig::default();
        config.set_option("orientation", "red").unwrap();
        config.set_option("free", "false").unwrap();
        assert_eq!(config.orientation, Color::Red);
        assert!(!config.free);
        assert!(config.set_option("turncolor", "green").is_err());
        assert!(config.set_option("size", "400").is_err());
    }
}
