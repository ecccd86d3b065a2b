//! TOML configuration for segmentation
//!
//! ```toml
//! [segmentation]
//! context_chars = 100
//!
//! [markup]
//! open_prefix = "<span"
//! close_token = "</span>"
//! id_attribute = "id"
//! ```

use crate::api::Config;
use crate::error::{Result, SegmentError};
use crate::markup::MarkupSyntax;
use crate::window::ContextWindow;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default configuration constants
pub mod defaults {
    /// Characters of context kept around each flagged region in previews
    pub const CONTEXT_CHARS: usize = 100;
}

/// File-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SegmentationConfig {
    /// Context window settings
    #[serde(default)]
    pub segmentation: SegmentationSection,

    /// Marker token syntax
    #[serde(default)]
    pub markup: MarkupSyntax,
}

/// `[segmentation]` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentationSection {
    /// Characters of context around each flagged region; negative values are rejected
    pub context_chars: i64,
}

impl Default for SegmentationSection {
    fn default() -> Self {
        Self {
            context_chars: defaults::CONTEXT_CHARS as i64,
        }
    }
}

impl SegmentationConfig {
    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| {
            SegmentError::Configuration(format!("Failed to parse configuration: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            SegmentError::Configuration(format!("Failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// Serialize back to TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| {
            SegmentError::Configuration(format!("Failed to serialize configuration: {e}"))
        })
    }

    /// Check every value without building anything
    pub fn validate(&self) -> Result<()> {
        self.context_window()?;
        self.markup.validate()
    }

    /// The configured context window
    pub fn context_window(&self) -> Result<ContextWindow> {
        ContextWindow::try_from(self.segmentation.context_chars)
    }

    /// Convert into an API configuration
    pub fn to_config(&self) -> Result<Config> {
        Config::builder()
            .context_window(self.context_window()?)
            .syntax(self.markup.clone())
            .build()
    }
}
