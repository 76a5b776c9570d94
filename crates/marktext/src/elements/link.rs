//! Inline links: `[text](url)`.

use attributed::{Attributes, Color, Font, StyledText, TextRangeError};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::element::{MarkdownElement, Match, PatternElement, strip_markers};
use crate::escape::restore;

static LINK_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[([^\[\]\n]+)\]\(([^()\s]+)\)").expect("valid link regex")
});

/// Give scheme-less `www.` addresses an `http://` scheme.
pub(crate) fn normalize_url(url: &str) -> String {
    if url.get(..4).is_some_and(|prefix| prefix.eq_ignore_ascii_case("www.")) {
        format!("http://{url}")
    } else {
        url.to_string()
    }
}

/// `[text](url)`: keeps `text`, drops the brackets and the URL, and links
/// `text` to the URL.
#[derive(Clone, Debug)]
pub struct Link {
    pub font: Font,
    pub color: Option<Color>,
}

impl Link {
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

impl Default for Link {
    fn default() -> Self {
        Self::new(&Font::default())
    }
}

impl PatternElement for Link {
    fn regex(&self) -> &Regex {
        &LINK_REGEX
    }

    fn rewrite(&self, text: &mut StyledText, m: &Match) -> Result<(), TextRangeError> {
        let (Some(label), Some(url)) = (m.group(1), m.group(2)) else {
            return Ok(());
        };
        let range = m.range();
        let target = normalize_url(&restore(text.slice(url).unwrap_or_default()));

        let label = strip_markers(text, range.start..label.start, label.end..range.end)?;
        let attributes = Attributes::font(self.font.clone())
            .with_color(self.color)
            .with_link(target);
        text.add_attributes(label, attributes)
    }
}

impl MarkdownElement for Link {
    fn parse(&self, text: &mut StyledText) {
        self.scan(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> StyledText {
        let mut text = StyledText::plain(input);
        Link::default().parse(&mut text);
        text
    }

    #[test]
    fn extracts_label_and_url() {
        let text = parse("go [here](http://x) now");
        assert_eq!(text.text(), "go here now");

        let attributes = text.attributes_at(3);
        assert_eq!(attributes.link.as_deref(), Some("http://x"));
        assert_eq!(attributes.color, Some(Color::BLUE));
        assert!(text.attributes_at(8).link.is_none());
    }

    #[test]
    fn several_links() {
        let text = parse("[a](http://a) [b](http://b)");
        assert_eq!(text.text(), "a b");
        assert_eq!(text.attributes_at(2).link.as_deref(), Some("http://b"));
    }

    #[test]
    fn www_urls_get_scheme() {
        let text = parse("[site](www.example.com)");
        assert_eq!(
            text.attributes_at(0).link.as_deref(),
            Some("http://www.example.com")
        );
    }

    #[test]
    fn incomplete_syntax_is_literal() {
        assert_eq!(parse("[text]").text(), "[text]");
        assert_eq!(parse("[text] (http://x)").text(), "[text] (http://x)");
        assert_eq!(parse("[](http://x)").text(), "[](http://x)");
    }

    #[test]
    fn normalize() {
        assert_eq!(normalize_url("WWW.a.com"), "http://WWW.a.com");
        assert_eq!(normalize_url("https://a.com"), "https://a.com");
        assert_eq!(normalize_url("ww"), "ww");
    }
}
