//! High-level processing API
//!
//! Wraps the segmenter for callers that want both views of a document at
//! once: a condensed preview built with a context window and the lossless
//! zero-window sequence that renderers expand into and exporters consume.

mod config;
mod input;
mod output;
mod processor;

#[cfg(test)]
mod tests;

pub use config::{Config, ConfigBuilder};
pub use input::Input;
pub use output::{Output, ProcessingMetadata};
pub use processor::SegmentProcessor;
