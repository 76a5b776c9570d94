//! Strong emphasis: `**text**` and `__text__`.

use attributed::{Attributes, Font, FontVariant, StyledText, TextRangeError, derive_variant};
use once_cell::sync::Lazy;
use regex::Regex;

use super::rewrite_emphasis;
use crate::element::{MarkdownElement, Match, PatternElement};

// An `__` opener preceded by a word character is part of an identifier.
static BOLD_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)\*\*(\S(?:[^\n]*?\S)??)\*\*|(^|[^\p{L}\p{N}_])__(\S(?:[^\n]*?\S)??)__")
        .expect("valid bold regex")
});

/// Must run before [`Italic`](super::Italic): a single-delimiter pass would
/// otherwise eat one character of each double delimiter.
#[derive(Clone, Debug)]
pub struct Bold {
    pub font: Font,
}

impl Bold {
    pub fn new(base: &Font) -> Self {
        Self {
            font: derive_variant(base, FontVariant::Bold),
        }
    }

    pub fn set_base_font(&mut self, base: &Font) {
        self.font = derive_variant(base, FontVariant::Bold);
    }
}

impl Default for Bold {
    fn default() -> Self {
        Self::new(&Font::default())
    }
}

impl PatternElement for Bold {
    fn regex(&self) -> &Regex {
        &BOLD_REGEX
    }

    fn rewrite(&self, text: &mut StyledText, m: &Match) -> Result<(), TextRangeError> {
        rewrite_emphasis(text, m, 2, Attributes::font(self.font.clone()))
    }
}

impl MarkdownElement for Bold {
    fn parse(&self, text: &mut StyledText) {
        self.scan(text);
    }
}
