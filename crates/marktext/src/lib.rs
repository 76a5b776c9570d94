//! Markdown to attributed text.
//!
//! This crate converts lightweight markdown into a
//! [`StyledText`](attributed::StyledText): the markup characters are removed
//! and the text they marked up is given fonts, colors and links instead.
//!
//! # Overview
//!
//! A [`MarkdownParser`] runs a fixed list of [elements](MarkdownElement)
//! over one buffer:
//!
//! - `` `code` `` spans and `\`-escaped characters are first swapped for
//!   private-use placeholders so no other element can see them,
//! - headers, list items, quotes, links, bare URLs, bold and italic are
//!   recognized and rewritten in that order,
//! - custom elements run next, in the order they were added,
//! - code spans are styled and every placeholder is restored.
//!
//! Malformed markup is never an error; it stays in the output as literal
//! text.
//!
//! # Usage
//!
//! ```
//! use marktext::MarkdownParser;
//!
//! let parser = MarkdownParser::new();
//! let text = parser.parse("**_both_** and \\*literal\\*");
//! assert_eq!(text.text(), "both and *literal*");
//!
//! let font = text.attributes_at(0).font.unwrap();
//! assert!(font.is_bold() && font.is_italic());
//! ```
//!
//! # Custom elements
//!
//! Implement [`PatternElement`] for a regex-driven element, or
//! [`MarkdownElement`] directly for anything else:
//!
//! ```
//! use marktext::{
//!     Attributes, Color, MarkdownElement, MarkdownParser, Match, PatternElement, StyledText,
//!     TextRangeError,
//! };
//! use regex::Regex;
//!
//! struct Mention(Regex);
//!
//! impl PatternElement for Mention {
//!     fn regex(&self) -> &Regex {
//!         &self.0
//!     }
//!
//!     fn rewrite(&self, text: &mut StyledText, m: &Match) -> Result<(), TextRangeError> {
//!         text.add_attributes(m.range(), Attributes::new().with_color(Color::GREEN))
//!     }
//! }
//!
//! impl MarkdownElement for Mention {
//!     fn parse(&self, text: &mut StyledText) {
//!         self.scan(text);
//!     }
//! }
//!
//! let mut parser = MarkdownParser::new();
//! let handle = parser.add_custom_element(Box::new(Mention(Regex::new(r"@\w+").unwrap())));
//! let text = parser.parse("hi @ana");
//! assert_eq!(text.attributes_at(3).color, Some(Color::GREEN));
//!
//! parser.remove_custom_element(handle);
//! ```

pub mod config;
pub mod element;
pub mod elements;
pub mod escape;
pub mod parser;

pub use config::ParserConfig;
pub use element::{MarkdownElement, Match, PatternElement};
pub use elements::{AutomaticLink, Bold, Code, CodeEscaping, Header, Italic, Link, List, Quote};
pub use escape::{Escaping, Unescaping};
pub use parser::{ElementHandle, Elements, MarkdownParser};

// The buffer and attribute vocabulary, so callers need only one dependency.
pub use attributed::{
    Attributes, Color, Font, FontFamily, FontTraits, FontVariant, Span, StyledText,
    TextRangeError, derive_variant,
};
