//! Configuration file handling for ascii-cam.
//!
//! Loads configuration from `<config dir>/ascii-cam/config.toml` or a custom path.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::ascii::{AsciiError, CharSet, RowColor};

/// Default number of output columns.
pub const DEFAULT_COLUMNS: u32 = 80;

/// Default frame-rate limit for live sources.
pub const DEFAULT_FPS: u32 = 30;

/// Configuration file structure for ascii-cam.
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub ascii: AsciiConfig,
    #[serde(default)]
    pub stream: StreamConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AsciiConfig {
    /// Named charset: simple, detailed or blocks
    #[serde(default)]
    pub charset: Option<String>,
    /// Custom glyph ramp, darkest first; overrides `charset`
    #[serde(default)]
    pub custom_charset: Option<String>,
    #[serde(default = "default_columns")]
    pub columns: u32,
    #[serde(default)]
    pub invert: bool,
    #[serde(default)]
    pub color: bool,
    #[serde(default)]
    pub row_color: RowColor,
}

impl Default for AsciiConfig {
    fn default() -> Self {
        Self {
            charset: None,
            custom_charset: None,
            columns: DEFAULT_COLUMNS,
            invert: false,
            color: false,
            row_color: RowColor::default(),
        }
    }
}

impl AsciiConfig {
    /// Glyphs selected by this config: the custom ramp if set, else the
    /// named charset, else `simple`.
    pub fn glyphs(&self) -> Result<Vec<char>, AsciiError> {
        if let Some(custom) = &self.custom_charset {
            return Ok(custom.chars().collect());
        }
        let set = match &self.charset {
            Some(name) => CharSet::from_name(name)?,
            None => CharSet::default(),
        };
        Ok(set.chars().to_vec())
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct StreamConfig {
    #[serde(default = "default_fps")]
    pub fps: u32,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub mirror: bool,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            fps: DEFAULT_FPS,
            width: None,
            height: None,
            mirror: false,
        }
    }
}

fn default_columns() -> u32 {
    DEFAULT_COLUMNS
}

fn default_fps() -> u32 {
    DEFAULT_FPS
}

/// Commented starter file written by `config init`.
pub const DEFAULT_CONFIG_TOML: &str = r#"# ascii-cam configuration

[ascii]
# Character set: simple, detailed, blocks
charset = "simple"
# Custom ramp, darkest glyph first (overrides charset)
# custom_charset = " .oO@"
# Output width in characters
columns = 80
# Invert brightness (for light themes)
invert = false
# Emit one color per row
color = false
# Row color: "last-cell" or "average"
row_color = "last-cell"

[stream]
# Maximum frames converted per second (0 = unlimited)
fps = 30
# Raw frame size for `ascii-cam stream`
# width = 640
# height = 480
# Mirror horizontally (selfie mode)
mirror = false
"#;

impl Config {
    /// Load configuration.
    ///
    /// With an explicit `path` the file must exist. Without one, the default
    /// path is tried and a missing file yields the default config.
    /// Returns an error if a file exists but cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_from(path),
            None => {
                let path = default_path();
                if path.exists() {
                    Self::load_from(&path)
                } else {
                    log::debug!("No config file at {}, using defaults", path.display());
                    Ok(Config::default())
                }
            }
        }
    }

    /// Load configuration from a file that must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config = Self::parse(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError { path, source } => {
                write!(
                    f,
                    "Failed to read config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::ParseError { path, source } => {
                write!(
                    f,
                    "Failed to parse config file '{}': {}",
                    path.display(),
                    source
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError { source, .. } => Some(source),
            ConfigError::ParseError { source, .. } => Some(source),
        }
    }
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("ascii-cam").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/ascii-cam/config.toml")
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.ascii.columns, 80);
        assert_eq!(config.stream.fps, 30);
        assert_eq!(config.ascii.row_color, RowColor::LastCell);
        assert!(!config.ascii.invert);
    }

    #[test]
    fn test_parse_empty_uses_defaults() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_starter_file() {
        let config = Config::parse(DEFAULT_CONFIG_TOML).unwrap();
        assert_eq!(config.ascii.charset.as_deref(), Some("simple"));
        assert_eq!(config.ascii.columns, 80);
        assert_eq!(config.stream.fps, 30);
    }

    #[test]
    fn test_parse_row_color_average() {
        let config = Config::parse("[ascii]\nrow_color = \"average\"\n").unwrap();
        assert_eq!(config.ascii.row_color, RowColor::Average);
    }

    #[test]
    fn test_glyphs_selection() {
        let mut ascii = AsciiConfig::default();
        assert_eq!(ascii.glyphs().unwrap(), CharSet::Simple.chars().to_vec());

        ascii.charset = Some("blocks".to_string());
        assert_eq!(ascii.glyphs().unwrap(), CharSet::Blocks.chars().to_vec());

        ascii.custom_charset = Some("ab".to_string());
        assert_eq!(ascii.glyphs().unwrap(), vec!['a', 'b']);

        ascii.custom_charset = None;
        ascii.charset = Some("nope".to_string());
        assert!(ascii.glyphs().is_err());
    }

    #[test]
    fn test_load_explicit_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        assert!(matches!(
            Config::load(Some(&path)),
            Err(ConfigError::IoError { .. })
        ));
    }

    #[test]
    fn test_load_invalid_toml_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[ascii]\ncolumns = \"wide\"").unwrap();
        let err = Config::load(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_default_path_ends_with_config_toml() {
        let path = default_path();
        assert!(path.ends_with("ascii-cam/config.toml"));
    }
}
