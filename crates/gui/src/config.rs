//! Display settings, read from an optional TOML file.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Environment variable naming a config file. When set, the file must exist.
pub const CONFIG_ENV: &str = "CHESS_SIM_CONFIG";
/// Config file picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "chess_sim.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    pub window_title: String,
    /// Edge length of one board square in logical pixels
    pub square_size: f32,
    /// Directory holding the twelve piece images, named by identity (`wp`, `bK`, ...)
    pub asset_dir: PathBuf,
    pub asset_extension: String,
    pub light_square: [f32; 3],
    pub dark_square: [f32; 3],
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            window_title: "Chess".to_string(),
            square_size: 64.0,
            asset_dir: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/pieces")),
            asset_extension: "svg".to_string(),
            light_square: [0.83, 0.83, 0.83], // Light gray
            dark_square: [0.55, 0.0, 0.0],    // Dark red
        }
    }
}

impl DisplayConfig {
    /// Parse a config document; `origin` is only used in error messages.
    pub fn from_toml(contents: &str, origin: &Path) -> Result<Self, ConfigError> {
        let config: DisplayConfig = toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents, path)
    }

    /// `$CHESS_SIM_CONFIG` if set, else `chess_sim.toml` if it exists, else
    /// the defaults.
    pub fn discover() -> Result<Self, ConfigError> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Self::load(Path::new(&path));
        }
        let local = Path::new(DEFAULT_CONFIG_FILE);
        if local.is_file() {
            return Self::load(local);
        }
        Ok(Self::default())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.square_size.is_finite() && self.square_size >= 16.0) {
            return Err(ConfigError::Invalid(format!(
                "square_size must be at least 16, got {}",
                self.square_size
            )));
        }
        for (name, rgb) in [("light_square", self.light_square), ("dark_square", self.dark_square)] {
            if rgb.iter().any(|c| !(0.0..=1.0).contains(c)) {
                return Err(ConfigError::Invalid(format!(
                    "{name} components must be in 0.0..=1.0, got {rgb:?}"
                )));
            }
        }
        Ok(())
    }

    pub fn light_color(&self) -> iced::Color {
        let [r, g, b] = self.light_square;
        iced::Color::from_rgb(r, g, b)
    }

    pub fn dark_color(&self) -> iced::Color {
        let [r, g, b] = self.dark_square;
        iced::Color::from_rgb(r, g, b)
    }
}
