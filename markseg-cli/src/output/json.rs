//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use markseg_core::{ProcessingMetadata, Segment};
use serde::Serialize;
use std::io::Write;

/// JSON formatter - one array entry per document
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    include_metadata: bool,
    documents: Vec<DocumentData>,
}

/// One document in the JSON output
#[derive(Debug, Serialize)]
pub struct DocumentData {
    /// Source file name
    pub file: String,
    /// Condensed segments
    pub segments: Vec<Segment>,
    /// Processing metadata, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ProcessingMetadata>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pretty: true,
            include_metadata: false,
            documents: Vec::new(),
        }
    }

    /// Toggle pretty printing
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Attach processing metadata to each document
    pub fn include_metadata(mut self, include: bool) -> Self {
        self.include_metadata = include;
        self
    }
}

impl<W: Write + Send> OutputFormatter for JsonFormatter<W> {
    fn begin_document(&mut self, name: &str) -> Result<()> {
        self.documents.push(DocumentData {
            file: name.to_string(),
            segments: Vec::new(),
            metadata: None,
        });
        Ok(())
    }

    fn format_segment(&mut self, segment: &Segment) -> Result<()> {
        match self.documents.last_mut() {
            Some(document) => document.segments.push(segment.clone()),
            None => anyhow::bail!("segment written before any document was started"),
        }
        Ok(())
    }

    fn end_document(&mut self, metadata: &ProcessingMetadata) -> Result<()> {
        if self.include_metadata {
            if let Some(document) = self.documents.last_mut() {
                document.metadata = Some(metadata.clone());
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.documents)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.documents)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
