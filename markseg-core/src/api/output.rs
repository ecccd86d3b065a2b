//! Output types for the processing API

use crate::error::{Result, SegmentError};
use crate::segment::Segment;
use crate::window::ContextWindow;
use serde::Serialize;
use std::time::Duration;

/// Both views of one document
#[derive(Debug, Clone, Serialize)]
pub struct Output {
    /// Condensed sequence built with the configured context window
    pub condensed: Vec<Segment>,
    /// Zero-window sequence: one flagged segment per region, nothing dropped
    pub lossless: Vec<Segment>,
    /// Processing metadata
    pub metadata: ProcessingMetadata,
}

/// Metadata about the processing
#[derive(Debug, Clone, Serialize)]
pub struct ProcessingMetadata {
    /// Total processing duration
    pub duration: Duration,
    /// Context window used for the condensed view
    pub context_window: ContextWindow,
    /// Total bytes of marked-up input
    pub bytes_processed: usize,
    /// Total characters of marked-up input
    pub chars_processed: usize,
    /// Matched marker regions
    pub marker_count: usize,
    /// Flagged segments in the condensed view
    pub flagged_segments: usize,
    /// Plain segments in the condensed view
    pub plain_segments: usize,
}

impl ProcessingMetadata {
    pub(crate) fn new(
        text: &str,
        context_window: ContextWindow,
        condensed: &[Segment],
        lossless: &[Segment],
        duration: Duration,
    ) -> Self {
        let flagged_segments = condensed.iter().filter(|s| s.is_flagged()).count();
        Self {
            duration,
            context_window,
            bytes_processed: text.len(),
            chars_processed: text.chars().count(),
            marker_count: lossless.iter().map(|s| s.markers.len()).sum(),
            flagged_segments,
            plain_segments: condensed.len() - flagged_segments,
        }
    }
}

impl Output {
    /// Lossless segments behind the condensed flagged segment at `index`
    ///
    /// The returned slice starts and ends with flagged segments and includes
    /// the plain text between merged regions.
    pub fn expand(&self, index: usize) -> Result<&[Segment]> {
        let target = self
            .condensed
            .get(index)
            .filter(|s| s.is_flagged())
            .ok_or(SegmentError::InvalidSegmentIndex { index })?;

        let first_region: usize = self.condensed[..index]
            .iter()
            .map(|s| s.markers.len())
            .sum();
        let region_count = target.markers.len().max(1);

        let flagged_positions: Vec<usize> = self
            .lossless
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_flagged())
            .map(|(i, _)| i)
            .collect();

        match (
            flagged_positions.get(first_region),
            flagged_positions.get(first_region + region_count - 1),
        ) {
            (Some(&start), Some(&end)) => Ok(&self.lossless[start..=end]),
            _ => Err(SegmentError::InvalidSegmentIndex { index }),
        }
    }

    /// Number of flagged segments in the condensed view
    pub fn flagged_count(&self) -> usize {
        self.metadata.flagged_segments
    }
}
