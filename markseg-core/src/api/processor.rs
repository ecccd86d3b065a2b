//! Segment processor

use std::time::Instant;

use crate::api::{Config, Input, Output, ProcessingMetadata};
use crate::error::Result;
use crate::segmenter::Segmenter;
use log::debug;

/// Produces condensed and lossless segmentations of marked-up documents
#[derive(Debug, Clone)]
pub struct SegmentProcessor {
    segmenter: Segmenter,
    config: Config,
}

impl SegmentProcessor {
    /// Create a new processor with default configuration
    pub fn new() -> Self {
        Self {
            segmenter: Segmenter::default(),
            config: Config::default(),
        }
    }

    /// Create a processor with custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let segmenter = Segmenter::new(config.syntax.clone())?;
        Ok(Self { segmenter, config })
    }

    /// Create a processor with a specific context window size
    pub fn with_context_chars(chars: i64) -> Result<Self> {
        Self::with_config(Config::builder().context_chars(chars).build()?)
    }

    /// Read `input` and segment it both ways
    pub fn process(&self, input: Input) -> Result<Output> {
        debug!("reading {}", input.describe());
        let text = input.into_text()?;
        Ok(self.process_text(&text))
    }

    /// Segment text directly
    pub fn process_text(&self, text: &str) -> Output {
        let start = Instant::now();
        let window = self.config.context_window;

        let condensed = self.segmenter.segment(text, window);
        let lossless = self.segmenter.segment_lossless(text);
        let metadata = ProcessingMetadata::new(text, window, &condensed, &lossless, start.elapsed());

        debug!(
            "segmented {} bytes: {} markers, {} condensed segments ({} flagged)",
            metadata.bytes_processed,
            metadata.marker_count,
            condensed.len(),
            metadata.flagged_segments
        );

        Output {
            condensed,
            lossless,
            metadata,
        }
    }

    /// The underlying segmenter
    pub fn segmenter(&self) -> &Segmenter {
        &self.segmenter
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Default for SegmentProcessor {
    fn default() -> Self {
        Self::new()
    }
}
