//! The attributed text buffer.

use std::ops::Range;

use crate::attributes::Attributes;
use crate::error::TextRangeError;
use crate::span::Span;

/// Text paired with attributed spans.
///
/// Edits made through [`StyledText::replace_range`] keep every span anchored
/// to the characters it covered, so a sequence of rewrites can operate on the
/// same buffer without recomputing earlier styling.
///
/// # Examples
///
/// ```
/// use attributed::{Attributes, Color, StyledText};
///
/// let mut text = StyledText::plain("**Hello** World");
/// text.add_attributes(0..9, Attributes::new().with_color(Color::RED)).unwrap();
/// text.delete_range(7..9).unwrap();
/// text.delete_range(0..2).unwrap();
///
/// assert_eq!(text.text(), "Hello World");
/// assert_eq!(text.spans()[0].range(), 0..5);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyledText {
    text: String,
    /// Spans in the order they were added; later spans win.
    spans: Vec<Span>,
}

impl StyledText {
    /// Create a buffer with the given text and spans.
    pub fn new(text: impl Into<String>, spans: Vec<Span>) -> Self {
        Self {
            text: text.into(),
            spans,
        }
    }

    /// Create a buffer from plain text (no spans).
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Vec::new())
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Length of the text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns true if no span has been attached.
    pub fn is_plain(&self) -> bool {
        self.spans.is_empty()
    }

    /// Attach `attributes` to `range`.
    ///
    /// Empty ranges and empty attribute sets are accepted and ignored.
    pub fn add_attributes(
        &mut self,
        range: Range<usize>,
        attributes: Attributes,
    ) -> Result<(), TextRangeError> {
        self.check_range(&range)?;
        if range.is_empty() || attributes.is_empty() {
            return Ok(());
        }
        self.spans.push(Span::new(range.start, range.end, attributes));
        Ok(())
    }

    /// Replace the text in `range` with `replacement`.
    ///
    /// Spans after the edit shift by the length delta; spans overlapping the
    /// edited region are clipped to it, so inserted text takes the attributes
    /// of the text it replaced. Spans left without any text are dropped.
    pub fn replace_range(
        &mut self,
        range: Range<usize>,
        replacement: &str,
    ) -> Result<(), TextRangeError> {
        self.check_range(&range)?;
        self.text.replace_range(range.clone(), replacement);
        self.spans
            .retain_mut(|span| span.reanchor(&range, replacement.len()));
        Ok(())
    }

    /// Remove the text in `range`.
    pub fn delete_range(&mut self, range: Range<usize>) -> Result<(), TextRangeError> {
        self.replace_range(range, "")
    }

    /// Text in `range`, if it is a valid range.
    pub fn slice(&self, range: Range<usize>) -> Option<&str> {
        self.text.get(range)
    }

    /// Get the attributes at a specific byte offset.
    ///
    /// Returns the layered attributes of all spans that contain the offset.
    pub fn attributes_at(&self, offset: usize) -> Attributes {
        self.spans
            .iter()
            .filter(|span| span.contains(offset))
            .fold(Attributes::default(), |acc, span| acc.apply(&span.attributes))
    }

    /// Returns true if any span in the buffer sets a link over part of `range`.
    pub fn has_link_in(&self, range: &Range<usize>) -> bool {
        self.spans
            .iter()
            .any(|span| span.attributes.link.is_some() && span.overlaps(range))
    }

    /// Iterate over runs of uniformly attributed text.
    pub fn runs(&self) -> Runs<'_> {
        Runs { text: self, pos: 0 }
    }

    fn check_range(&self, range: &Range<usize>) -> Result<(), TextRangeError> {
        if range.start > range.end {
            return Err(TextRangeError::Inverted {
                start: range.start,
                end: range.end,
            });
        }
        if range.end > self.text.len() {
            return Err(TextRangeError::OutOfBounds {
                start: range.start,
                end: range.end,
                len: self.text.len(),
            });
        }
        for offset in [range.start, range.end] {
            if !self.text.is_char_boundary(offset) {
                return Err(TextRangeError::NotCharBoundary(offset));
            }
        }
        Ok(())
    }
}

impl From<&str> for StyledText {
    fn from(text: &str) -> Self {
        Self::plain(text)
    }
}

impl From<String> for StyledText {
    fn from(text: String) -> Self {
        Self::plain(text)
    }
}

/// Iterator over attributed runs of a [`StyledText`].
///
/// Yields `(text_slice, attributes)` for each maximal region where the set
/// of covering spans does not change. Uncovered regions come with empty
/// attributes.
pub struct Runs<'a> {
    text: &'a StyledText,
    pos: usize,
}

impl<'a> Iterator for Runs<'a> {
    type Item = (&'a str, Attributes);

    fn next(&mut self) -> Option<Self::Item> {
        let len = self.text.len();
        if self.pos >= len {
            return None;
        }

        // Find the next boundary (where attributes change)
        let end = self
            .text
            .spans
            .iter()
            .flat_map(|span| [span.start, span.end])
            .filter(|&offset| offset > self.pos && offset < len)
            .min()
            .unwrap_or(len);

        let attributes = self.text.attributes_at(self.pos);
        let slice = &self.text.text[self.pos..end];
        self.pos = end;

        Some((slice, attributes))
    }
}
