//! List items: `- item`, `* item`, `+ item` and `1. item`.

use attributed::{Attributes, Color, Font, StyledText, TextRangeError};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::element::{MarkdownElement, Match, PatternElement};

/// Glyph shown in place of a bullet marker.
pub const DEFAULT_INDICATOR: &str = "•";

static LIST_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^([ \t]*)([-*+]|\d{1,9}\.)[ \t]+(\S[^\n]*)$").expect("valid list regex")
});

/// Line-initial bullet or number followed by blanks.
///
/// Bullets are replaced by [`List::indicator`]; numbers are kept. Leading
/// indentation is folded into the `indent` attribute (two columns per
/// level, a tab counting as four) and the item line gets `indent = level + 1`.
#[derive(Clone, Debug)]
pub struct List {
    pub font: Font,
    pub color: Option<Color>,
    pub indicator: String,
}

impl List {
    pub fn new(base: &Font) -> Self {
        Self {
            font: base.clone(),
            color: None,
            indicator: DEFAULT_INDICATOR.to_string(),
        }
    }

    pub fn set_base_font(&mut self, base: &Font) {
        self.font = base.clone();
    }
}

impl Default for List {
    fn default() -> Self {
        Self::new(&Font::default())
    }
}

fn nesting_level(indentation: &str) -> u8 {
    let columns: usize = indentation
        .chars()
        .map(|c| if c == '\t' { 4 } else { 1 })
        .sum();
    u8::try_from(columns / 2).unwrap_or(u8::MAX - 1)
}

impl PatternElement for List {
    fn regex(&self) -> &Regex {
        &LIST_REGEX
    }

    fn rewrite(&self, text: &mut StyledText, m: &Match) -> Result<(), TextRangeError> {
        let (Some(indentation), Some(marker), Some(content)) = (m.group(1), m.group(2), m.group(3))
        else {
            return Ok(());
        };

        let level = nesting_level(text.slice(indentation.clone()).unwrap_or_default());
        let marker_text = text.slice(marker.clone()).unwrap_or_default();
        let glyph = if marker_text.ends_with('.') {
            marker_text.to_string()
        } else {
            self.indicator.clone()
        };

        let replacement = format!("{glyph} ");
        text.replace_range(indentation.start..content.start, &replacement)?;

        let line_end = content.end - (content.start - indentation.start) + replacement.len();
        let attributes = Attributes::font(self.font.clone())
            .with_color(self.color)
            .with_indent(level.saturating_add(1));
        text.add_attributes(indentation.start..line_end, attributes)
    }
}

impl MarkdownElement for List {
    fn parse(&self, text: &mut StyledText) {
        self.scan(text);
    }
}
