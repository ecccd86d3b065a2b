//! Where a marked-up document comes from

use crate::error::Result;
use std::fmt;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Source of marked-up text, resolved to a `String` before segmentation
pub enum Input {
    /// Text already in memory
    Text(String),
    /// UTF-8 file on disk
    File(PathBuf),
    /// Raw UTF-8 bytes, e.g. an HTTP response body
    Bytes(Vec<u8>),
    /// Any reader, drained to the end
    Reader(Box<dyn Read + Send + Sync>),
}

impl Input {
    /// Wrap in-memory text
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Read from `path` when processed
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }

    /// Decode `bytes` as UTF-8 when processed
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }

    /// Drain `reader` when processed
    pub fn from_reader(reader: impl Read + Send + Sync + 'static) -> Self {
        Self::Reader(Box::new(reader))
    }

    /// Short human-readable description for logs
    pub fn describe(&self) -> String {
        match self {
            Self::Text(text) => format!("text ({} bytes)", text.len()),
            Self::File(path) => format!("file {}", path.display()),
            Self::Bytes(bytes) => format!("bytes ({} bytes)", bytes.len()),
            Self::Reader(_) => "reader".to_string(),
        }
    }

    /// Resolve to text; files and readers are read here, bytes must be UTF-8
    pub fn into_text(self) -> Result<String> {
        let bytes = match self {
            Self::Text(text) => return Ok(text),
            Self::File(path) => fs::read(path)?,
            Self::Bytes(bytes) => bytes,
            Self::Reader(mut reader) => {
                let mut buffer = Vec::new();
                reader.read_to_end(&mut buffer)?;
                buffer
            }
        };
        Ok(String::from_utf8(bytes)?)
    }
}

impl fmt::Debug for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Input({})", self.describe())
    }
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<PathBuf> for Input {
    fn from(path: PathBuf) -> Self {
        Self::File(path)
    }
}

impl From<Vec<u8>> for Input {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}
