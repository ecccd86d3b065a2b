//! CLI configuration file
//!
//! Extends the core `[segmentation]` and `[markup]` tables with output and
//! performance settings that only the command-line front end reads.

use anyhow::{Context, Result};
use markseg_core::config::SegmentationSection;
use markseg_core::{MarkupSyntax, SegmentationConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Context window settings
    #[serde(default)]
    pub segmentation: SegmentationSection,

    /// Marker token syntax
    #[serde(default)]
    pub markup: MarkupSyntax,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

/// Output-related configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Include processing metadata in output
    pub include_metadata: bool,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            include_metadata: false,
            pretty_json: true,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Number of worker threads for parallel file processing (0 = auto)
    pub worker_threads: usize,
}

impl PerformanceConfig {
    /// Resolved thread count
    pub fn threads(&self) -> usize {
        if self.worker_threads == 0 {
            num_cpus::get()
        } else {
            self.worker_threads
        }
    }
}

impl CliConfig {
    /// Load a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.segmentation()?;
        Ok(config)
    }

    /// Core segmentation settings, validated
    pub fn segmentation(&self) -> Result<SegmentationConfig> {
        let config = SegmentationConfig {
            segmentation: self.segmentation.clone(),
            markup: self.markup.clone(),
        };
        config.validate()?;
        Ok(config)
    }
}
