//! Tests for the processing API

#[cfg(test)]
mod api_tests {
    use crate::api::*;
    use crate::error::SegmentError;
    use crate::markup::MarkupSyntax;
    use crate::segment::SegmentKind;
    use crate::window::ContextWindow;
    use std::io::Cursor;

    const DOC: &str = r#"Das ist ein Satz. <span id="0">Kopierter Text</span> und dann <span id="1">noch mehr</span> am Ende des Dokuments steht noch etwas."#;

    #[test]
    fn test_processor_creation() {
        let processor = SegmentProcessor::new();
        assert_eq!(processor.config().context_window(), ContextWindow::new(100));

        let processor = SegmentProcessor::with_context_chars(12).unwrap();
        assert_eq!(processor.config().context_window(), ContextWindow::new(12));

        assert!(matches!(
            SegmentProcessor::with_context_chars(-1),
            Err(SegmentError::InvalidContextWindow { value: -1 })
        ));
    }

    #[test]
    fn test_builder_validates_syntax() {
        let result = Config::builder()
            .syntax(MarkupSyntax {
                id_attribute: String::new(),
                ..Default::default()
            })
            .build();
        assert!(matches!(result, Err(SegmentError::Configuration(_))));
    }

    #[test]
    fn test_builder_last_window_setting_wins() {
        let config = Config::builder()
            .context_chars(-4)
            .context_window(ContextWindow::ZERO)
            .build()
            .unwrap();
        assert!(config.context_window().is_zero());
    }

    #[test]
    fn test_input_variants() {
        assert_eq!(Input::from_text("a").into_text().unwrap(), "a");
        assert_eq!(Input::from_bytes(b"b".to_vec()).into_text().unwrap(), "b");
        assert_eq!(
            Input::from_reader(Cursor::new(b"c".to_vec())).into_text().unwrap(),
            "c"
        );
        assert!(matches!(
            Input::from_bytes(vec![0xc3, 0x28]).into_text(),
            Err(SegmentError::Utf8(_))
        ));
        assert!(matches!(
            Input::from_file("/nonexistent/input.txt").into_text(),
            Err(SegmentError::Io(_))
        ));
    }

    #[test]
    fn test_input_conversions_and_description() {
        let input: Input = "abc".into();
        assert_eq!(input.describe(), "text (3 bytes)");
        assert_eq!(format!("{input:?}"), "Input(text (3 bytes))");

        let input: Input = std::path::PathBuf::from("doc.html").into();
        assert_eq!(input.describe(), "file doc.html");

        let input: Input = vec![0xe2, 0x82, 0xac].into();
        assert_eq!(input.into_text().unwrap(), "€");
        assert_eq!(Input::from_reader(Cursor::new(Vec::new())).describe(), "reader");
    }

    #[test]
    fn test_file_input_must_be_utf8() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, &[b'a', 0xff]).unwrap();
        assert!(matches!(
            Input::from_file(file.path()).into_text(),
            Err(SegmentError::Utf8(_))
        ));

        let mut ok = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut ok, "Grüße".as_bytes()).unwrap();
        assert_eq!(Input::from_file(ok.path()).into_text().unwrap(), "Grüße");
    }

    #[test]
    fn test_process_produces_both_views() {
        let processor = SegmentProcessor::with_context_chars(10).unwrap();
        let output = processor.process(Input::from_text(DOC)).unwrap();

        assert_eq!(output.metadata.marker_count, 2);
        assert_eq!(output.metadata.bytes_processed, DOC.len());

        // Regions 10 chars apart merge in the condensed view
        assert_eq!(output.flagged_count(), 1);
        let flagged: Vec<_> = output.condensed.iter().filter(|s| s.is_flagged()).collect();
        assert_eq!(flagged[0].marker_ids().collect::<Vec<_>>(), vec![0, 1]);

        // The lossless view keeps one flagged segment per region
        let lossless_kinds: Vec<_> = output.lossless.iter().map(|s| s.kind).collect();
        assert_eq!(
            lossless_kinds,
            vec![
                SegmentKind::Plain,
                SegmentKind::Flagged,
                SegmentKind::Plain,
                SegmentKind::Flagged,
                SegmentKind::Plain
            ]
        );
    }

    #[test]
    fn test_expand_condensed_segment() {
        let processor = SegmentProcessor::with_context_chars(10).unwrap();
        let output = processor.process_text(DOC);

        let index = output.condensed.iter().position(|s| s.is_flagged()).unwrap();
        let expanded = output.expand(index).unwrap();
        let texts: Vec<_> = expanded.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["Kopierter Text", " und dann ", "noch mehr"]);
    }

    #[test]
    fn test_expand_rejects_plain_and_out_of_range() {
        let output = SegmentProcessor::new().process_text(DOC);
        let plain = output.condensed.iter().position(|s| !s.is_flagged());
        if let Some(index) = plain {
            assert!(output.expand(index).is_err());
        }
        assert!(matches!(
            output.expand(99),
            Err(SegmentError::InvalidSegmentIndex { index: 99 })
        ));
    }

    #[test]
    fn test_process_empty_document() {
        let output = SegmentProcessor::new().process_text("");
        assert!(output.condensed.is_empty());
        assert!(output.lossless.is_empty());
        assert_eq!(output.metadata.marker_count, 0);
    }
}
