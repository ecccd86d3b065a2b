//! Output formatting

use anyhow::Result;
use markseg_core::{ProcessingMetadata, Segment};

/// Renders segmented documents
pub trait OutputFormatter: Send {
    /// Start a new document
    fn begin_document(&mut self, name: &str) -> Result<()>;

    /// Render one segment of the current document
    fn format_segment(&mut self, segment: &Segment) -> Result<()>;

    /// Close the current document
    fn end_document(&mut self, metadata: &ProcessingMetadata) -> Result<()>;

    /// Flush everything that is still buffered
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Comma-separated marker ids of a segment, e.g. `0,1`
pub(crate) fn id_list(segment: &Segment) -> String {
    segment
        .marker_ids()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
