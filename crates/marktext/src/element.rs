//! The element contract.
//!
//! An element recognizes one markup construct and rewrites the buffer for
//! every occurrence: syntax markers are deleted and the surviving content
//! receives the element's attributes.

use std::ops::Range;

use attributed::{StyledText, TextRangeError};
use regex::{Captures, Regex};

/// A unit of markup recognition and rewriting.
///
/// Elements run one after another against the same buffer; each gets
/// exclusive access for its turn and communicates with the others only
/// through the buffer's text and attributes.
pub trait MarkdownElement: Send + Sync {
    /// Rewrite every occurrence of this element in `text`.
    fn parse(&self, text: &mut StyledText);

    /// Name used in log output.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Byte ranges of one regex match, detached from the haystack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Match {
    groups: Vec<Option<Range<usize>>>,
}

impl Match {
    fn from_captures(captures: &Captures<'_>) -> Self {
        Self {
            groups: captures
                .iter()
                .map(|group| group.map(|m| m.range()))
                .collect(),
        }
    }

    /// Range of the whole match.
    pub fn range(&self) -> Range<usize> {
        self.group(0).unwrap_or_default()
    }

    /// Range of capture group `index`, if it participated in the match.
    pub fn group(&self, index: usize) -> Option<Range<usize>> {
        self.groups.get(index).cloned().flatten()
    }
}

/// A regex-driven element.
///
/// Implementors declare a pattern and how to rewrite a single match;
/// [`PatternElement::scan`] drives the left-to-right, non-overlapping loop.
pub trait PatternElement {
    /// Pattern recognizing the construct.
    fn regex(&self) -> &Regex;

    /// Rewrite the buffer for one match.
    ///
    /// Edits must stay inside `m.range()`. Deletions go from the highest
    /// offset to the lowest so the remaining group ranges stay valid.
    fn rewrite(&self, text: &mut StyledText, m: &Match) -> Result<(), TextRangeError>;

    /// Find and rewrite every match, resuming after each replacement.
    fn scan(&self, text: &mut StyledText) {
        let mut location = 0;

        while location <= text.len() {
            let Some(m) = self
                .regex()
                .captures_at(text.text(), location)
                .map(|captures| Match::from_captures(&captures))
            else {
                break;
            };

            let range = m.range();
            let old_len = text.len();
            if let Err(err) = self.rewrite(text, &m) {
                log::warn!("rewrite of {:?} failed: {}", range, err);
                break;
            }

            // Text after the match is untouched, so the replacement ends
            // where that suffix now begins.
            let suffix = old_len - range.end;
            let resume = text.len().saturating_sub(suffix);
            location = if range.is_empty() && resume <= location {
                next_char_boundary(text.text(), location)
            } else {
                resume
            };
        }
    }
}

/// Offset of the character after the one starting at `offset`.
pub(crate) fn next_char_boundary(text: &str, offset: usize) -> usize {
    text[offset..]
        .chars()
        .next()
        .map_or(offset + 1, |c| offset + c.len_utf8())
}

/// Remove `open` and `close` markers around a content range.
///
/// Returns where the content sits once the markers are gone.
pub(crate) fn strip_markers(
    text: &mut StyledText,
    open: Range<usize>,
    close: Range<usize>,
) -> Result<Range<usize>, TextRangeError> {
    text.delete_range(close.clone())?;
    text.delete_range(open.clone())?;
    Ok(open.start..close.start - open.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use attributed::Attributes;
    use once_cell::sync::Lazy;

    static TILDE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"~(\w+)~").unwrap());

    /// Strips `~x~` down to `x` and indents it.
    struct Tilde;

    impl PatternElement for Tilde {
        fn regex(&self) -> &Regex {
            &TILDE_REGEX
        }

        fn rewrite(&self, text: &mut StyledText, m: &Match) -> Result<(), TextRangeError> {
            let content = m.group(1).unwrap();
            let range = m.range();
            let content = strip_markers(text, range.start..content.start, content.end..range.end)?;
            text.add_attributes(content, Attributes::new().with_indent(1))
        }
    }

    #[test]
    fn scan_rewrites_every_match() {
        let mut text = StyledText::plain("~a~ and ~b~");
        Tilde.scan(&mut text);

        assert_eq!(text.text(), "a and b");
        assert_eq!(text.spans().len(), 2);
        assert_eq!(text.spans()[0].range(), 0..1);
        assert_eq!(text.spans()[1].range(), 6..7);
    }

    #[test]
    fn scan_does_not_reenter_replacement() {
        // After "~~a~~" loses its inner markers the outer ones are adjacent
        // to the replacement, which must not be matched again.
        let mut text = StyledText::plain("~~a~~");
        Tilde.scan(&mut text);
        assert_eq!(text.text(), "~a~");
    }

    #[test]
    fn scan_is_idempotent() {
        let mut text = StyledText::plain("~a~ ~b~");
        Tilde.scan(&mut text);
        let once = text.clone();
        Tilde.scan(&mut text);
        assert_eq!(text, once);
    }

    #[test]
    fn match_groups() {
        let captures = TILDE_REGEX.captures("x ~ab~").unwrap();
        let m = Match::from_captures(&captures);
        assert_eq!(m.range(), 2..6);
        assert_eq!(m.group(1), Some(3..5));
        assert_eq!(m.group(2), None);
    }

    #[test]
    fn strip_markers_returns_content_range() {
        let mut text = StyledText::plain("[[abc]]");
        let content = strip_markers(&mut text, 0..2, 5..7).unwrap();
        assert_eq!(text.text(), "abc");
        assert_eq!(content, 0..3);
    }

    #[test]
    fn next_char_boundary_steps_over_multibyte() {
        assert_eq!(next_char_boundary("éa", 0), 2);
        assert_eq!(next_char_boundary("ab", 1), 2);
        assert_eq!(next_char_boundary("ab", 2), 3);
    }
}
