//! Plain text output formatter

use super::{id_list, OutputFormatter};
use anyhow::Result;
use markseg_core::{ProcessingMetadata, Segment};
use std::io::Write;

/// Plain text formatter
///
/// Writes the document text back out with flagged passages delimited as
/// `[[#ids: text]]`. With `collapse` set, segments that are not expanded are
/// replaced by a short placeholder.
pub struct TextFormatter<W: Write> {
    writer: W,
    collapse: bool,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            collapse: false,
        }
    }

    /// Render collapsed segments as placeholders
    pub fn with_collapse(mut self, collapse: bool) -> Self {
        self.collapse = collapse;
        self
    }
}

impl<W: Write + Send> OutputFormatter for TextFormatter<W> {
    fn begin_document(&mut self, name: &str) -> Result<()> {
        writeln!(self.writer, "==> {name} <==")?;
        Ok(())
    }

    fn format_segment(&mut self, segment: &Segment) -> Result<()> {
        if self.collapse && !segment.expanded {
            write!(self.writer, "[... {} chars ...]", segment.text.chars().count())?;
        } else if segment.is_flagged() {
            write!(self.writer, "[[#{}: {}]]", id_list(segment), segment.text)?;
        } else {
            write!(self.writer, "{}", segment.text)?;
        }
        Ok(())
    }

    fn end_document(&mut self, _metadata: &ProcessingMetadata) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use markseg_core::SegmentProcessor;

    fn render(collapse: bool) -> String {
        let output = SegmentProcessor::with_context_chars(0)
            .unwrap()
            .process_text(r#"before <span id="4">copied</span> after"#);
        let mut formatter = TextFormatter::new(Vec::new()).with_collapse(collapse);
        formatter.begin_document("doc.html").unwrap();
        for segment in &output.condensed {
            formatter.format_segment(segment).unwrap();
        }
        formatter.end_document(&output.metadata).unwrap();
        formatter.finish().unwrap();
        String::from_utf8(formatter.writer).unwrap()
    }

    #[test]
    fn test_flagged_passages_delimited() {
        assert_eq!(render(false), "==> doc.html <==\nbefore [[#4: copied]] after\n\n");
    }

    #[test]
    fn test_collapsed_plain_segments() {
        assert_eq!(
            render(true),
            "==> doc.html <==\n[... 7 chars ...][[#4: copied]][... 6 chars ...]\n\n"
        );
    }
}
