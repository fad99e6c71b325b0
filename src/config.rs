//! Project settings (pgm.yaml).
//!
//! Every key is optional; a missing file means defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::codec::DecodeOptions;
use crate::error::{PgmError, Result};
use crate::transform::FlipMode;

/// Settings file looked up in the working directory.
pub const CONFIG_FILENAME: &str = "pgm.yaml";

/// Settings loaded from pgm.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Characters for `pgm view`, darkest first.
    #[serde(default = "default_glyphs")]
    pub glyphs: String,

    /// Store the comment line of decoded files.
    pub keep_comment: bool,

    /// Index arithmetic for the flip effects.
    pub flip_mode: FlipMode,

    /// Write the fixed banner instead of the image comment when saving
    /// effect and mark results.
    #[serde(default = "default_standard_comment")]
    pub standard_comment: bool,
}

fn default_glyphs() -> String {
    " .:-=+*#%@".to_string()
}

fn default_standard_comment() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            glyphs: default_glyphs(),
            keep_comment: false,
            flip_mode: FlipMode::default(),
            standard_comment: default_standard_comment(),
        }
    }
}

impl Settings {
    /// Load settings from a pgm.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| PgmError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read settings: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse settings from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        let settings: Settings = serde_yaml::from_str(content).map_err(|e| PgmError::Config {
            message: format!("Invalid settings: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })?;

        if settings.glyphs.is_empty() {
            return Err(PgmError::Config {
                message: "glyphs must not be empty".to_string(),
                help: Some("Remove the key to use the default ramp".to_string()),
            });
        }

        Ok(settings)
    }

    /// Resolve settings: an explicit path must exist, otherwise
    /// `pgm.yaml` in `dir` is used when present.
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let path: PathBuf = dir.join(CONFIG_FILENAME);
                if path.exists() {
                    Self::load(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn decode_options(&self) -> DecodeOptions {
        DecodeOptions::default().keep_comment(self.keep_comment)
    }
}
