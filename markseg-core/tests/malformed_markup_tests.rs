//! Degradation on unbalanced or irregular markup

use markseg_core::markup::DiagnosticKind;
use markseg_core::{marker_ids, reconstruct, segment, MarkupScanner, Segment, SegmentKind};

#[test]
fn test_start_without_end_is_plain() {
    let text = r#"head <span id="0">tail without end"#;
    for ctx in [0, 3, 100] {
        assert_eq!(segment(text, ctx), vec![Segment::plain(text)]);
    }
}

#[test]
fn test_matched_region_before_unclosed_start() {
    let text = r#"<span id="0">ok</span> then <span id="1">open"#;
    let segments = segment(text, 0);
    assert_eq!(segments[0].text, "ok");
    assert_eq!(segments[1], Segment::plain(r#" then <span id="1">open"#));
    assert_eq!(segments.len(), 2);
}

#[test]
fn test_nested_start_skips_outer() {
    let text = r#"a <span id="0">outer <span id="1">inner</span> rest"#;
    let segments = segment(text, 0);

    assert_eq!(marker_ids(&segments), vec![1]);
    assert_eq!(segments[0], Segment::plain(r#"a <span id="0">outer "#));
    assert_eq!(segments[1].text, "inner");
    assert_eq!(reconstruct(&segments, &Default::default()), text);
}

#[test]
fn test_orphan_end_token_stays_in_plain_text() {
    let text = r#"stray </span> here <span id="0">x</span>"#;
    let segments = segment(text, 0);
    assert_eq!(segments[0], Segment::plain("stray </span> here "));
    assert_eq!(segments[1].text, "x");
}

#[test]
fn test_start_prefix_without_id_is_text() {
    let text = r#"<spanner>no</spanner> <span class="x">no id</span>"#;
    let segments = segment(text, 0);
    assert_eq!(segments, vec![Segment::plain(text)]);
}

#[test]
fn test_diagnose_reports_unbalanced_tokens() {
    let scanner = MarkupScanner::default();
    let text = r#"</span> <span id="0">a <span id="1">b</span> <span id="2">c"#;
    let kinds: Vec<_> = scanner.diagnose(text).into_iter().map(|d| d.kind).collect();

    assert_eq!(
        kinds,
        vec![
            DiagnosticKind::OrphanEnd,
            DiagnosticKind::UnmatchedStart { id: 0 },
            DiagnosticKind::UnmatchedStart { id: 2 },
        ]
    );
}

#[test]
fn test_diagnose_reports_id_irregularities_as_warnings() {
    let scanner = MarkupScanner::default();
    let text = r#"<span id="3">a</span><span id="1">b</span><span id="3">c</span>"#;
    let diagnostics = scanner.diagnose(text);

    assert_eq!(diagnostics.len(), 2);
    assert_eq!(
        diagnostics[0].kind,
        DiagnosticKind::IdOutOfOrder { id: 1, previous: 3 }
    );
    assert_eq!(diagnostics[1].kind, DiagnosticKind::DuplicateId { id: 3 });
    assert!(diagnostics.iter().all(|d| !d.is_error()));

    // irregular ids still segment normally
    let segments = segment(text, 0);
    assert_eq!(marker_ids(&segments), vec![3, 1, 3]);
    assert!(segments.iter().all(|s| s.kind == SegmentKind::Flagged));
}

#[test]
fn test_well_formed_document_has_no_diagnostics() {
    let text = r#"x <span id="0">a</span> y <span id="1">b</span>"#;
    assert!(MarkupScanner::default().diagnose(text).is_empty());
}

#[test]
fn test_many_unclosed_starts_share_one_end_token() {
    let n: u64 = 5000;
    let mut text: String = (0..n).map(|i| format!(r#"<span id="{i}">word "#)).collect();
    text.push_str("</span>");

    let region = MarkupScanner::default().next_region(&text, 0).unwrap();
    assert_eq!(region.id, n - 1);
    assert_eq!(region.content(&text), "word ");
    assert_eq!(region.end, text.len());

    for ctx in [0, 10] {
        let segments = segment(&text, ctx);
        assert_eq!(marker_ids(&segments), vec![n - 1], "window {ctx}");
        assert_eq!(reconstruct(&segments, &Default::default()), text, "window {ctx}");
    }
}
