//! TOML-backed configuration for embedding hosts and the demo binary.
//!
//! The library itself never reads configuration implicitly; hosts load a
//! `Config` and apply it when constructing a converter.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::PinyinError;
use crate::tone::ToneMode;

/// Converter configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Integer encoding of the initial tone display mode:
    /// 1 = tone numbers, 2 = tone marks, 3 = no tones.
    pub tone_mode: u8,

    /// Optional path to a replacement hanzi table: a JSON object mapping
    /// glyph sequences to numbered syllables. When unset the embedded
    /// dictionary is used.
    pub hanzi_table: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tone_mode: ToneMode::default().value(),
            hanzi_table: None,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// The configured tone mode, validating the stored encoding.
    pub fn tone_mode(&self) -> Result<ToneMode, PinyinError> {
        ToneMode::from_value(i64::from(self.tone_mode))
    }
}
