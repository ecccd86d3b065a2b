//! Segmentation of marked-up text into plain and flagged passages
//!
//! Input text carries inline marker regions such as
//! `<span id="3">copied passage</span>`. The segmenter turns it into an
//! ordered sequence of [`Segment`]s: plain text, and flagged passages with a
//! configurable amount of surrounding context. Windows that overlap are merged,
//! cuts are placed on word boundaries, and the marker tokens are stripped but
//! recorded so the original markup can always be rebuilt.
//!
//! # Example
//!
//! ```rust
//! use markseg_core::{segment, SegmentKind};
//!
//! let text = r#"Some text <span id="0">flagged</span> and more text."#;
//! let segments = segment(text, 0);
//!
//! assert_eq!(segments.len(), 3);
//! assert_eq!(segments[1].kind, SegmentKind::Flagged);
//! assert_eq!(segments[1].text, "flagged");
//! ```

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod export;
pub mod markup;
pub mod segment;
pub mod segmenter;
pub mod window;

pub use api::{Config, ConfigBuilder, Input, Output, ProcessingMetadata, SegmentProcessor};
pub use config::SegmentationConfig;
pub use error::{Result, SegmentError};
pub use export::{ExportDocument, ExportPassage};
pub use markup::{strip_markup, MarkerId, MarkerRegion, MarkupDiagnostic, MarkupScanner, MarkupSyntax};
pub use segment::{marker_ids, reconstruct, MarkerSpan, Segment, SegmentKind};
pub use segmenter::{segment, try_segment, Segmenter};
pub use window::ContextWindow;
