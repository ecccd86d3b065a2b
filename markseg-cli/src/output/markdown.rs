//! Markdown output formatter

use super::{id_list, OutputFormatter};
use anyhow::Result;
use markseg_core::{ProcessingMetadata, Segment};
use std::io::Write;

/// Markdown formatter - flagged passages in bold, followed by their marker ids
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    flagged_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            flagged_count: 0,
        }
    }
}

impl<W: Write + Send> OutputFormatter for MarkdownFormatter<W> {
    fn begin_document(&mut self, name: &str) -> Result<()> {
        writeln!(self.writer, "## {name}")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn format_segment(&mut self, segment: &Segment) -> Result<()> {
        if segment.is_flagged() {
            self.flagged_count += 1;
            let text = segment.text.trim();
            if text.is_empty() {
                write!(self.writer, "<sup>[{}]</sup>", id_list(segment))?;
            } else {
                // keep surrounding whitespace outside the emphasis markers
                let lead = &segment.text[..segment.text.len() - segment.text.trim_start().len()];
                let trail = &segment.text[segment.text.trim_end().len()..];
                write!(
                    self.writer,
                    "{lead}**{text}**<sup>[{}]</sup>{trail}",
                    id_list(segment)
                )?;
            }
        } else {
            write!(self.writer, "{}", segment.text)?;
        }
        Ok(())
    }

    fn end_document(&mut self, metadata: &ProcessingMetadata) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "*{} marker(s) in {} flagged passage(s), context {}*",
            metadata.marker_count, metadata.flagged_segments, metadata.context_window
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total flagged passages: {}*", self.flagged_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
