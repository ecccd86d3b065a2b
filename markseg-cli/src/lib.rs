//! markseg CLI library
//!
//! This library provides the command-line interface for segmenting
//! marked-up documents into plain and flagged passages.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
