//! Inline marker syntax and scanning
//!
//! Flagged passages arrive wrapped in start/end tokens, by default
//! `<span id="N">…</span>`. The scanner locates matched regions left to right
//! and tolerates malformed markup: a start token without a matching end token
//! is literal text, and so is a stray end token.

use crate::error::{Result, SegmentError};
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::sync::OnceLock;

/// Identifier carried by a start token, assigned upstream and never re-derived
pub type MarkerId = u64;

static TAG_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Token syntax of marker regions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkupSyntax {
    /// Literal that opens a start token, e.g. `<span`
    pub open_prefix: String,
    /// Literal end token, e.g. `</span>`
    pub close_token: String,
    /// Attribute holding the numeric marker id
    pub id_attribute: String,
}

impl Default for MarkupSyntax {
    fn default() -> Self {
        Self {
            open_prefix: "<span".to_string(),
            close_token: "</span>".to_string(),
            id_attribute: "id".to_string(),
        }
    }
}

impl MarkupSyntax {
    /// Validate the syntax definition
    pub fn validate(&self) -> Result<()> {
        if !self.open_prefix.starts_with('<') || self.open_prefix.len() < 2 {
            return Err(SegmentError::Configuration(format!(
                "open_prefix must start with '<' and name a tag, got {:?}",
                self.open_prefix
            )));
        }
        if self.open_prefix.contains('>') {
            return Err(SegmentError::Configuration(
                "open_prefix must not contain '>'".into(),
            ));
        }
        if self.close_token.is_empty() {
            return Err(SegmentError::Configuration(
                "close_token must not be empty".into(),
            ));
        }
        if self.id_attribute.is_empty() || self.id_attribute.chars().any(char::is_whitespace) {
            return Err(SegmentError::Configuration(format!(
                "id_attribute must be a non-empty attribute name, got {:?}",
                self.id_attribute
            )));
        }
        Ok(())
    }

    /// Canonical start token for `id`
    pub fn open_token(&self, id: MarkerId) -> String {
        format!("{} {}=\"{}\">", self.open_prefix, self.id_attribute, id)
    }

    /// Wrap `content` in a canonical marker region
    pub fn wrap(&self, id: MarkerId, content: &str) -> String {
        format!("{}{}{}", self.open_token(id), content, self.close_token)
    }
}

/// A recognised start token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartToken {
    /// Byte offset of the opening `<`
    pub start: usize,
    /// Byte offset just past the closing `>`
    pub end: usize,
    /// Marker id parsed from the id attribute
    pub id: MarkerId,
}

/// A matched marker region, all offsets in bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerRegion {
    /// Marker id
    pub id: MarkerId,
    /// Start of the start token
    pub start: usize,
    /// First byte of the flagged content
    pub content_start: usize,
    /// One past the last byte of the flagged content (start of the end token)
    pub content_end: usize,
    /// One past the end token
    pub end: usize,
}

impl MarkerRegion {
    /// Flagged content with delimiters stripped
    pub fn content<'a>(&self, text: &'a str) -> &'a str {
        &text[self.content_start..self.content_end]
    }

    /// Verbatim start token
    pub fn open_token<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.content_start]
    }
}

/// Locates marker regions in text
#[derive(Debug, Clone)]
pub struct MarkupScanner {
    syntax: MarkupSyntax,
    id_pattern: Regex,
}

impl Default for MarkupScanner {
    fn default() -> Self {
        // The default syntax always validates and yields a well-formed pattern
        Self::new(MarkupSyntax::default()).expect("default markup syntax is valid")
    }
}

impl MarkupScanner {
    /// Create a scanner for the given syntax
    pub fn new(syntax: MarkupSyntax) -> Result<Self> {
        syntax.validate()?;
        let pattern = format!(
            r#"(?:^|\s){}\s*=\s*(?:"(\d+)"|'(\d+)'|(\d+)(?:\s|/|$))"#,
            regex::escape(&syntax.id_attribute)
        );
        let id_pattern = Regex::new(&pattern).map_err(|e| {
            SegmentError::Configuration(format!("Invalid id attribute pattern: {e}"))
        })?;
        Ok(Self { syntax, id_pattern })
    }

    /// The syntax this scanner recognises
    pub fn syntax(&self) -> &MarkupSyntax {
        &self.syntax
    }

    /// Find the next start token at or after `from`
    pub fn find_start(&self, text: &str, from: usize) -> Option<StartToken> {
        self.find_start_within(text, from, text.len())
    }

    /// Find the next start token lying entirely inside `from..until`
    fn find_start_within(&self, text: &str, from: usize, until: usize) -> Option<StartToken> {
        let prefix = self.syntax.open_prefix.as_str();
        let mut at = from;

        while at < until {
            let start = at + text[at..until].find(prefix)?;
            let after = start + prefix.len();
            if let Some(token) = self.parse_start(text, start, after, until) {
                return Some(token);
            }
            at = after;
        }

        None
    }

    fn parse_start(&self, text: &str, start: usize, after: usize, until: usize) -> Option<StartToken> {
        let rest = &text[after..until];
        let first = rest.chars().next()?;
        if !(first.is_whitespace() || first == '>') {
            return None;
        }

        let close = rest.find('>')?;
        let attributes = &rest[..close];
        if attributes.contains('<') {
            return None;
        }

        let captures = self.id_pattern.captures(attributes)?;
        let digits = captures
            .get(1)
            .or_else(|| captures.get(2))
            .or_else(|| captures.get(3))?;
        let id = digits.as_str().parse::<MarkerId>().ok()?;

        Some(StartToken {
            start,
            end: after + close + 1,
            id,
        })
    }

    /// Find the next matched region at or after `from`
    ///
    /// A start token followed by another start token before any end token is
    /// unmatched and skipped. Returns `None` once a start token has no end
    /// token after it, leaving the remainder to be treated as plain text.
    pub fn next_region(&self, text: &str, from: usize) -> Option<MarkerRegion> {
        let close_token = self.syntax.close_token.as_str();
        let mut token = self.find_start(text, from)?;
        // every start token before this end token pairs with it, so the last one wins
        let close = token.end + text[token.end..].find(close_token)?;

        while let Some(inner) = self.find_start_within(text, token.end, close) {
            debug!(
                "skipping unmatched start token (id {}) at byte {}",
                token.id, token.start
            );
            token = inner;
        }

        Some(MarkerRegion {
            id: token.id,
            start: token.start,
            content_start: token.end,
            content_end: close,
            end: close + close_token.len(),
        })
    }

    /// Iterate over all matched regions in document order
    pub fn regions<'s, 't>(&'s self, text: &'t str) -> Regions<'s, 't> {
        Regions {
            scanner: self,
            text,
            cursor: 0,
        }
    }

    /// Lint the markup without changing how it segments
    pub fn diagnose(&self, text: &str) -> Vec<MarkupDiagnostic> {
        let mut events: Vec<(usize, Option<MarkerId>)> = Vec::new();
        let mut at = 0;
        while let Some(token) = self.find_start(text, at) {
            events.push((token.start, Some(token.id)));
            at = token.end;
        }
        events.extend(
            text.match_indices(self.syntax.close_token.as_str())
                .map(|(offset, _)| (offset, None)),
        );
        events.sort_by_key(|(offset, _)| *offset);

        let mut diagnostics = Vec::new();
        let mut open: Option<(usize, MarkerId)> = None;
        let mut seen = HashSet::new();
        let mut previous: Option<MarkerId> = None;

        for (offset, event) in events {
            match event {
                Some(id) => {
                    if let Some((unmatched_at, unmatched_id)) = open.replace((offset, id)) {
                        diagnostics.push(MarkupDiagnostic {
                            offset: unmatched_at,
                            kind: DiagnosticKind::UnmatchedStart { id: unmatched_id },
                        });
                    }
                    if !seen.insert(id) {
                        diagnostics.push(MarkupDiagnostic {
                            offset,
                            kind: DiagnosticKind::DuplicateId { id },
                        });
                    } else if let Some(previous) = previous.filter(|&p| id < p) {
                        diagnostics.push(MarkupDiagnostic {
                            offset,
                            kind: DiagnosticKind::IdOutOfOrder { id, previous },
                        });
                    }
                    previous = Some(id);
                }
                None => {
                    if open.take().is_none() {
                        diagnostics.push(MarkupDiagnostic {
                            offset,
                            kind: DiagnosticKind::OrphanEnd,
                        });
                    }
                }
            }
        }

        if let Some((offset, id)) = open {
            diagnostics.push(MarkupDiagnostic {
                offset,
                kind: DiagnosticKind::UnmatchedStart { id },
            });
        }

        diagnostics.sort_by_key(|d| d.offset);
        diagnostics
    }
}

/// Iterator over matched regions
#[derive(Debug)]
pub struct Regions<'s, 't> {
    scanner: &'s MarkupScanner,
    text: &'t str,
    cursor: usize,
}

impl Iterator for Regions<'_, '_> {
    type Item = MarkerRegion;

    fn next(&mut self) -> Option<Self::Item> {
        let region = self.scanner.next_region(self.text, self.cursor)?;
        self.cursor = region.end;
        Some(region)
    }
}

/// Kind of markup problem found by [`MarkupScanner::diagnose`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// Start token without a matching end token
    UnmatchedStart {
        /// Id carried by the start token
        id: MarkerId,
    },
    /// End token without a preceding start token
    OrphanEnd,
    /// Id used by more than one start token
    DuplicateId {
        /// The repeated id
        id: MarkerId,
    },
    /// Id smaller than the one before it
    IdOutOfOrder {
        /// The id found
        id: MarkerId,
        /// The id of the preceding start token
        previous: MarkerId,
    },
}

/// A markup problem at a byte offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MarkupDiagnostic {
    /// Byte offset of the offending token
    pub offset: usize,
    /// What is wrong
    #[serde(flatten)]
    pub kind: DiagnosticKind,
}

impl MarkupDiagnostic {
    /// Unbalanced tokens are errors; id irregularities are warnings
    pub fn is_error(&self) -> bool {
        matches!(
            self.kind,
            DiagnosticKind::UnmatchedStart { .. } | DiagnosticKind::OrphanEnd
        )
    }
}

impl fmt::Display for MarkupDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DiagnosticKind::UnmatchedStart { id } => {
                write!(f, "byte {}: start token for marker {id} is never closed", self.offset)
            }
            DiagnosticKind::OrphanEnd => {
                write!(f, "byte {}: end token without a start token", self.offset)
            }
            DiagnosticKind::DuplicateId { id } => {
                write!(f, "byte {}: marker id {id} is used more than once", self.offset)
            }
            DiagnosticKind::IdOutOfOrder { id, previous } => write!(
                f,
                "byte {}: marker id {id} follows larger id {previous}",
                self.offset
            ),
        }
    }
}

/// Remove any residual tag-like markup, e.g. before handing text to a layout engine
pub fn strip_markup(text: &str) -> String {
    let pattern = TAG_PATTERN.get_or_init(|| Regex::new(r"<[^>]+>").expect("valid tag pattern"));
    pattern.replace_all(text, "").into_owned()
}
