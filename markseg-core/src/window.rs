//! Context windows measured in characters
//!
//! All positions are byte offsets into the input; all distances are counted in
//! characters so multi-byte text is never split inside a code point.

use crate::error::SegmentError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of characters of surrounding text kept on each side of a flagged region
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContextWindow(usize);

impl ContextWindow {
    /// No surrounding text: each flagged segment is exactly one region
    pub const ZERO: Self = Self(0);

    /// Unbounded window covering any document
    pub const FULL: Self = Self(usize::MAX);

    /// Create a window of `chars` characters
    pub const fn new(chars: usize) -> Self {
        Self(chars)
    }

    /// Window size in characters
    pub const fn chars(self) -> usize {
        self.0
    }

    /// Whether this window keeps no context at all
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Largest character gap across which two regions' windows still touch
    pub const fn merge_reach(self) -> usize {
        self.0.saturating_mul(2)
    }
}

impl From<usize> for ContextWindow {
    fn from(chars: usize) -> Self {
        Self(chars)
    }
}

impl TryFrom<i64> for ContextWindow {
    type Error = SegmentError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        usize::try_from(value)
            .map(Self)
            .map_err(|_| SegmentError::InvalidContextWindow { value })
    }
}

impl fmt::Display for ContextWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::FULL {
            write!(f, "full")
        } else {
            write!(f, "{} chars", self.0)
        }
    }
}

/// Move back from `from` by up to `chars` characters, never before `floor`
pub fn step_back(text: &str, floor: usize, from: usize, chars: usize) -> usize {
    if chars == 0 {
        return from;
    }
    text[floor..from]
        .char_indices()
        .rev()
        .take(chars)
        .last()
        .map_or(from, |(offset, _)| floor + offset)
}

/// Move forward from `from` by up to `chars` characters, never past the end
pub fn step_forward(text: &str, from: usize, chars: usize) -> usize {
    text[from..]
        .char_indices()
        .nth(chars)
        .map_or(text.len(), |(offset, _)| from + offset)
}

/// Whether `span` holds at most `limit` characters, counting no further than needed
pub fn within_chars(span: &str, limit: usize) -> bool {
    span.chars().take(limit.saturating_add(1)).count() <= limit
}

/// Whether a cut at `pos` falls between words rather than inside one
pub fn is_word_boundary(text: &str, pos: usize) -> bool {
    if pos == 0 || pos >= text.len() {
        return true;
    }
    let before = text[..pos].chars().next_back().is_some_and(char::is_whitespace);
    let after = text[pos..].chars().next().is_some_and(char::is_whitespace);
    before || after
}

/// Trim a left extension `left..limit` forward so it does not begin mid-word
///
/// The cut lands on the first whitespace character of the extension, which
/// stays inside the window. Without whitespace the extension is dropped and
/// the window begins at `limit`.
pub fn trim_left(text: &str, left: usize, limit: usize) -> usize {
    if left >= limit || is_word_boundary(text, left) {
        return left;
    }
    text[left..limit]
        .find(char::is_whitespace)
        .map_or(limit, |offset| left + offset)
}

/// Trim a right extension `limit..right` back so it does not end mid-word
///
/// The cut lands on the last whitespace character of the extension, which is
/// left outside the window. Without whitespace the extension is dropped and
/// the window ends at `limit`.
pub fn trim_right(text: &str, limit: usize, right: usize) -> usize {
    if right <= limit || is_word_boundary(text, right) {
        return right;
    }
    text[limit..right]
        .rfind(char::is_whitespace)
        .map_or(limit, |offset| limit + offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_from_rejects_negative() {
        assert_eq!(ContextWindow::try_from(5_i64).unwrap(), ContextWindow::new(5));
        assert!(matches!(
            ContextWindow::try_from(-1_i64),
            Err(SegmentError::InvalidContextWindow { value: -1 })
        ));
    }

    #[test]
    fn test_merge_reach_saturates() {
        assert_eq!(ContextWindow::new(4).merge_reach(), 8);
        assert_eq!(ContextWindow::FULL.merge_reach(), usize::MAX);
        assert_eq!(ContextWindow::ZERO.merge_reach(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(ContextWindow::new(100).to_string(), "100 chars");
        assert_eq!(ContextWindow::FULL.to_string(), "full");
    }

    #[test]
    fn test_step_back_saturates_at_floor() {
        let text = "abcdef";
        assert_eq!(step_back(text, 0, 4, 2), 2);
        assert_eq!(step_back(text, 0, 4, 10), 0);
        assert_eq!(step_back(text, 3, 4, 10), 3);
        assert_eq!(step_back(text, 0, 4, 0), 4);
    }

    #[test]
    fn test_step_forward_saturates_at_end() {
        let text = "abcdef";
        assert_eq!(step_forward(text, 2, 3), 5);
        assert_eq!(step_forward(text, 2, 50), 6);
        assert_eq!(step_forward(text, 6, 1), 6);
        assert_eq!(step_forward(text, 2, 0), 2);
    }

    #[test]
    fn test_steps_count_characters_not_bytes() {
        let text = "aé日🎉b";
        let end = text.len();
        let back = step_back(text, 0, end, 2);
        assert_eq!(&text[back..], "🎉b");
        let forward = step_forward(text, 0, 3);
        assert_eq!(&text[..forward], "aé日");
    }

    #[test]
    fn test_within_chars() {
        assert!(within_chars("abc", 3));
        assert!(!within_chars("abcd", 3));
        assert!(within_chars("", 0));
        assert!(within_chars("日本語", 3));
        assert!(within_chars("anything at all", usize::MAX));
    }

    #[test]
    fn test_word_boundary() {
        let text = "one two";
        assert!(is_word_boundary(text, 0));
        assert!(is_word_boundary(text, 3));
        assert!(is_word_boundary(text, 4));
        assert!(!is_word_boundary(text, 1));
        assert!(is_word_boundary(text, text.len()));
    }

    #[test]
    fn test_trim_left_moves_to_first_whitespace() {
        let text = "alpha beta gamma";
        // extension "pha beta " starts mid-word
        assert_eq!(trim_left(text, 2, 11), 5);
        // extension already starts on a word
        assert_eq!(trim_left(text, 6, 11), 6);
        // no whitespace inside the extension
        assert_eq!(trim_left(text, 7, 10), 10);
    }

    #[test]
    fn test_trim_right_moves_to_last_whitespace() {
        let text = "alpha beta gamma";
        // extension " beta ga" ends mid-word
        assert_eq!(trim_right(text, 5, 13), 10);
        // extension ends right before whitespace
        assert_eq!(trim_right(text, 5, 10), 10);
        // no whitespace inside the extension
        assert_eq!(trim_right(text, 11, 13), 11);
    }

    #[test]
    fn test_whitespace_runs_are_preserved() {
        let text = "ab   cd";
        assert_eq!(trim_left(text, 1, 5), 2);
        assert_eq!(trim_right(text, 0, 6), 4);
    }
}
