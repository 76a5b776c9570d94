//! ATX headers: `# Title` through `###### Title`.

use attributed::{Attributes, Color, Font, FontVariant, StyledText, TextRangeError, derive_variant};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::element::{MarkdownElement, Match, PatternElement};

/// Deepest header level the syntax allows.
pub const MAX_HEADER_LEVEL: usize = 6;

static HEADER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^(#{1,6})[ \t]+(\S[^\n]*)$").expect("valid header regex"));

/// Line-initial `#` run followed by blanks and content.
///
/// The marker run and the blanks after it are removed; the rest of the line
/// gets a bold font sized by level.
#[derive(Clone, Debug)]
pub struct Header {
    pub font: Font,
    pub color: Option<Color>,
    /// Headers deeper than this are left as literal text.
    pub max_level: usize,
}

impl Header {
    pub fn new(base: &Font) -> Self {
        Self {
            font: base.clone(),
            color: None,
            max_level: MAX_HEADER_LEVEL,
        }
    }

    pub fn set_base_font(&mut self, base: &Font) {
        self.font = base.clone();
    }

    fn attributes(&self, level: usize) -> Attributes {
        let level = u8::try_from(level).unwrap_or(u8::MAX);
        Attributes::font(derive_variant(&self.font, FontVariant::Heading(level)))
            .with_color(self.color)
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new(&Font::default())
    }
}

impl PatternElement for Header {
    fn regex(&self) -> &Regex {
        &HEADER_REGEX
    }

    fn rewrite(&self, text: &mut StyledText, m: &Match) -> Result<(), TextRangeError> {
        let (Some(marker), Some(content)) = (m.group(1), m.group(2)) else {
            return Ok(());
        };
        let level = marker.len();
        if level > self.max_level {
            return Ok(());
        }

        text.delete_range(marker.start..content.start)?;
        let removed = content.start - marker.start;
        text.add_attributes(content.start - removed..content.end - removed, self.attributes(level))
    }
}

impl MarkdownElement for Header {
    fn parse(&self, text: &mut StyledText) {
        self.scan(text);
    }
}
