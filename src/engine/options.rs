//! Configuration options for the engine

use anyhow::{bail, Result};

use crate::core::{DirAssets, OccupiedPolicy};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineOptions {
    /// How a drop onto an occupied square is resolved
    pub occupied_policy: OccupiedPolicy,
    /// Whether protocol errors abort the process
    pub strict_mode: bool,
    /// Directory holding `pieces/<code>.svg`
    pub assets: Option<DirAssets>,
}

impl EngineOptions {
    /// Defaults, with the assets directory taken from the environment
    pub fn from_env() -> Self {
        Self {
            assets: DirAssets::from_env(),
            ..Self::default()
        }
    }

    pub fn set_option(&mut self, name: &str, value: &str) -> Result<()> {
        match name {
            "occupied" => self.occupied_policy = value.parse()?,
            "strictmode" => self.strict_mode = value.parse()?,
            "assets" => {
                self.assets = match value {
                    "" | "none" => None,
                    dir => Some(DirAssets::new(dir)),
                }
            }
            _ => bail!("Unknown option: {}", name),
        }

        Ok(())
    }
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            occupied_policy: OccupiedPolicy::Overwrite,
            strict_mode: false,
            assets: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_option() {
        let mut options = EngineOptions::default();

        options.set_option("occupied", "reject").unwrap();
        options.set_option("strictmode", "true").unwrap();
        options.set_option("assets", "/tmp/pieces").unwrap();

        assert_eq!(options.occupied_policy, OccupiedPolicy::Reject);
        assert!(options.strict_mode);
        assert_eq!(options.assets, Some(DirAssets::new("/tmp/pieces")));

        options.set_option("assets", "none").unwrap();
        assert_eq!(options.assets, None);
    }

    #[test]
    fn test_set_option_errors() {
        let mut options = EngineOptions::default();
        assert!(options.set_option("occupied", "capture").is_err());
        assert!(options.set_option("strictmode", "yes").is_err());
        assert!(options.set_option("turnorder", "on").is_err());
        assert_eq!(options, EngineOptions::default());
    }
}
