//! Span type for attributed regions of text.

use std::ops::Range;

use crate::attributes::Attributes;

/// An attributed region within a [`StyledText`](crate::StyledText).
///
/// Spans reference byte positions in the text. They may overlap; when they
/// do, the later span wins for the attributes it sets.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Span {
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
    /// Attributes applied to this region.
    pub attributes: Attributes,
}

impl Span {
    pub fn new(start: usize, end: usize, attributes: Attributes) -> Self {
        Self {
            start,
            end,
            attributes,
        }
    }

    /// Returns true if this span covers a zero-length range.
    pub fn is_zero_length(&self) -> bool {
        self.start >= self.end
    }

    /// Returns the length of this span in bytes.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Check if this span contains a given byte offset.
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset < self.end
    }

    /// Check if this span overlaps a byte range.
    pub fn overlaps(&self, range: &Range<usize>) -> bool {
        self.start < range.end && range.start < self.end
    }

    /// Re-anchor this span after `replaced` became `inserted_len` bytes long.
    ///
    /// Offsets before the edit stay put, offsets after it shift by the length
    /// delta, and offsets inside it snap to the edges of the inserted text.
    /// Returns false when the span collapsed to nothing.
    pub(crate) fn reanchor(&mut self, replaced: &Range<usize>, inserted_len: usize) -> bool {
        let map = |offset: usize, inside: usize| {
            if offset <= replaced.start {
                offset
            } else if offset >= replaced.end {
                offset - replaced.len() + inserted_len
            } else {
                inside
            }
        };

        self.start = map(self.start, replaced.start);
        self.end = map(self.end, replaced.start + inserted_len);
        !self.is_zero_length()
    }
}
