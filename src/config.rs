//! Configuration file handling for ascii-art.
//!
//! Loads configuration from `<config dir>/ascii-art/config.toml` or a custom path.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::ascii::{ResizeFilter, DEFAULT_CELL_ASPECT};

/// Width used when none is given or the given one is not a number.
pub const DEFAULT_WIDTH: u32 = 100;

/// File the rendering is saved to, relative to the working directory.
pub const DEFAULT_OUTPUT_FILE: &str = "ascii_image.txt";

/// Configuration file structure for ascii-art.
/// Loaded from the user config dir (or custom path via --config).
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_cell_aspect")]
    pub cell_aspect: f64,
    #[serde(default)]
    pub filter: ResizeFilter,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            cell_aspect: DEFAULT_CELL_ASPECT,
            filter: ResizeFilter::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_file")]
    pub file: PathBuf,
    #[serde(default = "default_true")]
    pub save: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            file: default_output_file(),
            save: true,
        }
    }
}

fn default_width() -> u32 {
    DEFAULT_WIDTH
}

fn default_cell_aspect() -> f64 {
    DEFAULT_CELL_ASPECT
}

fn default_output_file() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_FILE)
}

fn default_true() -> bool {
    true
}

/// Commented template written by `config init`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# ascii-art configuration

[render]
# Columns used when no width is given or the input is not a number
width = 100
# Row compensation for the character cell (glyphs are taller than wide)
cell_aspect = 0.55
# Resampling filter: nearest, triangle, catmull-rom, gaussian, lanczos3
filter = "catmull-rom"

[output]
# File the rendering is saved to (relative to the working directory)
file = "ascii_image.txt"
# Set to false to only print to stdout
save = true
"#;

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io {
                path: path.clone(),
                source: e,
            })?;
            let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
                path: path.clone(),
                source: e,
            })?;
            log::debug!("Loaded config from {}", path.display());
            Ok(config)
        } else {
            log::debug!("No config at {}, using defaults", path.display());
            Ok(Config::default())
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("ascii-art").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/ascii-art/config.toml")
        })
}
