//! Block quotes: `> quoted text`.

use attributed::{Attributes, Color, Font, FontVariant, StyledText, TextRangeError, derive_variant};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::element::{MarkdownElement, Match, PatternElement};

static QUOTE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^(>+)[ \t]+(\S[^\n]*)$").expect("valid quote regex"));

/// Line-initial `>` run followed by blanks.
///
/// The marker run is removed and the line is set in italics, indented by
/// the number of `>` characters.
#[derive(Clone, Debug)]
pub struct Quote {
    pub font: Font,
    pub color: Option<Color>,
    /// Deeper quotes are left as literal text.
    pub max_level: usize,
}

impl Quote {
    pub fn new(base: &Font) -> Self {
        Self {
            font: derive_variant(base, FontVariant::Italic),
            color: None,
            max_level: 6,
        }
    }

    pub fn set_base_font(&mut self, base: &Font) {
        self.font = derive_variant(base, FontVariant::Italic);
    }
}

impl Default for Quote {
    fn default() -> Self {
        Self::new(&Font::default())
    }
}

impl PatternElement for Quote {
    fn regex(&self) -> &Regex {
        &QUOTE_REGEX
    }

    fn rewrite(&self, text: &mut StyledText, m: &Match) -> Result<(), TextRangeError> {
        let (Some(marker), Some(content)) = (m.group(1), m.group(2)) else {
            return Ok(());
        };
        let depth = marker.len();
        if depth > self.max_level {
            return Ok(());
        }

        text.delete_range(marker.start..content.start)?;
        let removed = content.start - marker.start;
        let attributes = Attributes::font(self.font.clone())
            .with_color(self.color)
            .with_indent(u8::try_from(depth).unwrap_or(u8::MAX));
        text.add_attributes(content.start - removed..content.end - removed, attributes)
    }
}

impl MarkdownElement for Quote {
    fn parse(&self, text: &mut StyledText) {
        self.scan(text);
    }
}
