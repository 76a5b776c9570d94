//! Bare URLs in running text.

use attributed::{Attributes, Color, Font, StyledText, TextRangeError};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::element::{MarkdownElement, Match, PatternElement};
use crate::elements::link::normalize_url;
use crate::escape::{escape_char, restore};

// Trailing sentence punctuation and emphasis markers are not part of the URL.
static URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)\b(?:(?:https?|ftp)://|www\.)[^\s<>"]*[^\s<>"'.,;:!?)\]*]"#)
        .expect("valid url regex")
});

/// Emphasis markers that must survive inside a URL.
const PROTECTED_MARKERS: [char; 2] = ['*', '_'];

/// Links URL-shaped text without changing it.
///
/// Ranges that already carry a link, such as the label of a `[text](url)`
/// link, are left alone. Emphasis markers inside the URL are swapped for
/// placeholders so `Bold` and `Italic` cannot rewrite them.
#[derive(Clone, Debug)]
pub struct AutomaticLink {
    pub font: Font,
    pub color: Option<Color>,
}

impl AutomaticLink {
    pub fn new(base: &Font) -> Self {
        Self {
            font: base.clone(),
            color: Some(Color::BLUE),
        }
    }

    pub fn set_base_font(&mut self, base: &Font) {
        self.font = base.clone();
    }
}

impl Default for AutomaticLink {
    fn default() -> Self {
        Self::new(&Font::default())
    }
}

impl PatternElement for AutomaticLink {
    fn regex(&self) -> &Regex {
        &URL_REGEX
    }

    fn rewrite(&self, text: &mut StyledText, m: &Match) -> Result<(), TextRangeError> {
        let range = m.range();
        if text.has_link_in(&range) {
            return Ok(());
        }

        let url = text.slice(range.clone()).unwrap_or_default();
        let target = normalize_url(&restore(url));
        let markers: Vec<(usize, char)> = url
            .char_indices()
            .filter(|(_, c)| PROTECTED_MARKERS.contains(c))
            .map(|(offset, c)| (range.start + offset, c))
            .collect();

        let old_len = text.len();
        for (offset, c) in markers.into_iter().rev() {
            if let Some(placeholder) = escape_char(c) {
                text.replace_range(offset..offset + 1, placeholder.encode_utf8(&mut [0; 4]))?;
            }
        }

        let end = range.end + (text.len() - old_len);
        let attributes = Attributes::font(self.font.clone())
            .with_color(self.color)
            .with_link(target);
        text.add_attributes(range.start..end, attributes)
    }
}

impl MarkdownElement for AutomaticLink {
    fn parse(&self, text: &mut StyledText) {
        self.scan(text);
    }
}
