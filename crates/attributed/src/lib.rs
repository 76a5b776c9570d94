//! Attributed text for styled rendering.
//!
//! This crate provides [`StyledText`], a string paired with attributed
//! [`Span`]s, together with the attribute vocabulary the spans carry:
//! [`Font`], [`Color`], links and paragraph indentation.
//!
//! # Overview
//!
//! - [`StyledText::add_attributes`] layers attributes over a byte range.
//!   Later layers override earlier ones only for the fields they set.
//! - [`StyledText::replace_range`] edits the text in place and re-anchors
//!   every span, so rewriting passes can strip syntax characters without
//!   losing styling applied earlier.
//! - [`derive_variant`] derives bold, italic, monospace and heading fonts
//!   from a base font.
//!
//! # Usage
//!
//! ```
//! use attributed::{Attributes, Font, FontVariant, StyledText, derive_variant};
//!
//! let mut text = StyledText::plain("_Hello_ World");
//! let italic = derive_variant(&Font::default(), FontVariant::Italic);
//! text.add_attributes(0..7, Attributes::font(italic)).unwrap();
//! text.delete_range(6..7).unwrap();
//! text.delete_range(0..1).unwrap();
//!
//! assert_eq!(text.text(), "Hello World");
//! assert!(text.attributes_at(0).font.unwrap().is_italic());
//! ```

pub mod attributes;
pub mod color;
pub mod error;
pub mod font;
pub mod span;
pub mod text;

// Re-export main types at crate root
pub use attributes::Attributes;
pub use color::Color;
pub use error::TextRangeError;
pub use font::{Font, FontFamily, FontTraits, FontVariant, derive_variant};
pub use span::Span;
pub use text::{Runs, StyledText};
