//! Attribute sets attached to text ranges.

use crate::color::Color;
use crate::font::Font;

/// A set of text attributes.
///
/// Every field is optional: an unset field leaves whatever an earlier span
/// established for the same range.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Attributes {
    /// Font descriptor.
    pub font: Option<Font>,
    /// Foreground (text) color.
    pub color: Option<Color>,
    /// Background color.
    pub background: Option<Color>,
    /// Hyperlink target.
    pub link: Option<String>,
    /// Paragraph indentation level.
    pub indent: Option<u8>,
}

impl Attributes {
    /// Create an empty attribute set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attributes carrying only a font.
    pub fn font(font: Font) -> Self {
        Self {
            font: Some(font),
            ..Self::default()
        }
    }

    pub fn with_color(mut self, color: impl Into<Option<Color>>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_background(mut self, color: impl Into<Option<Color>>) -> Self {
        self.background = color.into();
        self
    }

    pub fn with_link(mut self, url: impl Into<String>) -> Self {
        self.link = Some(url.into());
        self
    }

    pub fn with_indent(mut self, level: u8) -> Self {
        self.indent = Some(level);
        self
    }

    /// Returns true if no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.font.is_none()
            && self.color.is_none()
            && self.background.is_none()
            && self.link.is_none()
            && self.indent.is_none()
    }

    /// Apply another attribute set on top of this one.
    ///
    /// Set values in `other` override values in `self`; fonts are merged
    /// with [`Font::merge`].
    pub fn apply(&self, other: &Attributes) -> Attributes {
        let font = match (&self.font, &other.font) {
            (Some(below), Some(top)) => Some(below.merge(top)),
            (below, top) => top.clone().or_else(|| below.clone()),
        };

        Attributes {
            font,
            color: other.color.or(self.color),
            background: other.background.or(self.background),
            link: other.link.clone().or_else(|| self.link.clone()),
            indent: other.indent.or(self.indent),
        }
    }
}
