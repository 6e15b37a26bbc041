//! Startup errors. All of them are fatal: the window never opens.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Error)]
pub enum AssetError {
    /// A piece image could not be read. There is no fallback artwork.
    #[error("Missing image for piece {id} at {}: {source}", .path.display())]
    Missing {
        id: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Unsupported piece image format {0:?} (expected svg, png, jpg, gif or bmp)")]
    UnsupportedFormat(String),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Asset(#[from] AssetError),

    #[error(transparent)]
    Gui(#[from] iced::Error),
}
