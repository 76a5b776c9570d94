//! Parser configuration.

use attributed::{Color, Font};

/// Base style and switches for a [`MarkdownParser`](crate::MarkdownParser).
///
/// # Examples
///
/// ```
/// use marktext::{Color, Font, ParserConfig};
///
/// let config = ParserConfig::default()
///     .with_font(Font::system(16.0))
///     .with_color(Color::rgb(40, 40, 40))
///     .with_automatic_link_detection(false);
/// assert!(!config.automatic_link_detection);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ParserConfig {
    /// Font applied to the whole text before any element runs.
    pub font: Font,
    /// Color applied to the whole text before any element runs.
    pub color: Color,
    /// Link bare URLs found in the text.
    pub automatic_link_detection: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            font: Font::default(),
            color: Color::BLACK,
            automatic_link_detection: true,
        }
    }
}

impl ParserConfig {
    pub fn with_font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_automatic_link_detection(mut self, enabled: bool) -> Self {
        self.automatic_link_detection = enabled;
        self
    }
}
