//! Emphasis: `*text*` and `_text_`.

use attributed::{Attributes, Font, FontVariant, StyledText, TextRangeError, derive_variant};
use once_cell::sync::Lazy;
use regex::Regex;

use super::rewrite_emphasis;
use crate::element::{MarkdownElement, Match, PatternElement};

static ITALIC_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)\*(\S(?:[^\n]*?\S)??)\*|(^|[^\p{L}\p{N}_])_(\S(?:[^\n]*?\S)??)_")
        .expect("valid italic regex")
});

#[derive(Clone, Debug)]
pub struct Italic {
    pub font: Font,
}

impl Italic {
    pub fn new(base: &Font) -> Self {
        Self {
            font: derive_variant(base, FontVariant::Italic),
        }
    }

    pub fn set_base_font(&mut self, base: &Font) {
        self.font = derive_variant(base, FontVariant::Italic);
    }
}

impl Default for Italic {
    fn default() -> Self {
        Self::new(&Font::default())
    }
}

impl PatternElement for Italic {
    fn regex(&self) -> &Regex {
        &ITALIC_REGEX
    }

    fn rewrite(&self, text: &mut StyledText, m: &Match) -> Result<(), TextRangeError> {
        rewrite_emphasis(text, m, 1, Attributes::font(self.font.clone()))
    }
}

impl MarkdownElement for Italic {
    fn parse(&self, text: &mut StyledText) {
        self.scan(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> StyledText {
        let mut text = StyledText::plain(input);
        Italic::default().parse(&mut text);
        text
    }

    #[test]
    fn stars_and_underscores() {
        let text = parse("*a* _b_");
        assert_eq!(text.text(), "a b");
        assert!(text.attributes_at(0).font.unwrap().is_italic());
        assert!(text.attributes_at(2).font.unwrap().is_italic());
    }

    #[test]
    fn spaced_stars_are_literal() {
        assert_eq!(parse("2 * 3 * 4").text(), "2 * 3 * 4");
    }

    #[test]
    fn identifiers_keep_underscores() {
        assert_eq!(parse("snake_case_name").text(), "snake_case_name");
        assert_eq!(
            parse("http://a.io/x_y_z").text(),
            "http://a.io/x_y_z"
        );
    }

    #[test]
    fn multiple_on_one_line() {
        let text = parse("*a* b *c*");
        assert_eq!(text.text(), "a b c");
        assert!(text.attributes_at(4).font.unwrap().is_italic());
        assert!(text.attributes_at(2).font.is_none());
    }
}
