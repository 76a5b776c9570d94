//! Markdown to attributed text.
//!
//! Re-exports the parser ([`marktext`]) and the attributed text buffer it
//! produces ([`attributed`]).
//!
//! ```
//! use marktext_rs::MarkdownParser;
//!
//! let text = MarkdownParser::new().parse("> *quoted*");
//! assert_eq!(text.text(), "quoted");
//! ```

pub use attributed;
pub use marktext;

pub use marktext::{
    Attributes, Color, ElementHandle, Elements, Font, FontVariant, MarkdownElement,
    MarkdownParser, ParserConfig, PatternElement, StyledText, derive_variant,
};
