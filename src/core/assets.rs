//! Mapping pieces to visual resources

use std::{
    env,
    path::{Path, PathBuf},
};
use tracing::debug;

use super::piece::Piece;

/// Resource returned when a piece has no image
pub const PLACEHOLDER: &str = "";

/// Environment variable naming the default asset directory
pub const ASSETS_ENV: &str = "MASTERDREZ_ASSETS";

/// Resource identifier of a piece, e.g. `wK` or `rP`
pub fn asset_code(piece: &Piece) -> String {
    piece.code()
}

pub trait AssetResolver {
    fn resolve(&self, piece: &Piece) -> Option<String>;

    /// Never fails: a missing resource becomes [`PLACEHOLDER`]
    fn resolve_or_placeholder(&self, piece: &Piece) -> String {
        self.resolve(piece).unwrap_or_else(|| {
            debug!(code = %asset_code(piece), "no asset for piece, using placeholder");
            PLACEHOLDER.to_string()
        })
    }
}

/// Resolver with no resources at all
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAssets;

impl AssetResolver for NoAssets {
    fn resolve(&self, _piece: &Piece) -> Option<String> {
        None
    }
}

/// SVG files laid out as `<root>/pieces/<code>.svg`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirAssets {
    root: PathBuf,
}

impl DirAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn from_env() -> Option<Self> {
        env::var_os(ASSETS_ENV).map(Self::new)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, piece: &Piece) -> PathBuf {
        self.root
            .join("pieces")
            .join(format!("{}.svg", asset_code(piece)))
    }
}

impl AssetResolver for DirAssets {
    fn resolve(&self, piece: &Piece) -> Option<String> {
        let path = self.path_for(piece);
        if path.is_file() {
            Some(path.to_string_lossy().into_owned())
        } else {
            None
        }
    }
}
