//! File reading utilities

use crate::error::CliError;
use anyhow::{Context, Result};
use markseg_core::{Input, SegmentError};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Reads marked-up documents as UTF-8 text
pub struct FileReader;

impl FileReader {
    /// Read a document, rejecting files that are not valid UTF-8
    pub fn read_document(path: &Path) -> Result<String> {
        match Input::from_file(path).into_text() {
            Ok(text) => Ok(text),
            Err(SegmentError::Io(e)) if e.kind() == ErrorKind::NotFound => {
                Err(CliError::FileNotFound(path.display().to_string()).into())
            }
            Err(e) => Err(e).with_context(|| format!("Failed to read file: {}", path.display())),
        }
    }

    /// Combined size of the given files in bytes
    pub fn total_size(paths: &[impl AsRef<Path>]) -> Result<u64> {
        paths.iter().try_fold(0, |total, path| {
            let path = path.as_ref();
            let metadata = fs::metadata(path)
                .with_context(|| format!("Failed to get metadata for: {}", path.display()))?;
            Ok(total + metadata.len())
        })
    }
}
