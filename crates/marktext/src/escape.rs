//! Placeholder escaping.
//!
//! Characters that must reach the output literally are swapped for code
//! points in the Supplementary Private Use Area-A before the structural
//! elements run, and swapped back once they are done. No structural pattern
//! matches a placeholder, so an escaped `*` can never open emphasis.

use attributed::{StyledText, TextRangeError};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::element::{MarkdownElement, Match, PatternElement};

/// First placeholder; ASCII `c` is stored as `PLACEHOLDER_BASE + c`.
const PLACEHOLDER_BASE: u32 = 0xF0000;

/// Stands in for a backtick run delimiting a protected code span.
pub const CODE_DELIMITER: char = '\u{F0100}';

static ESCAPE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\([[:punct:]])").expect("valid escape regex"));

static PLACEHOLDER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\x{F0000}-\x{F007F}\x{F0100}]").expect("valid placeholder regex")
});

/// Placeholder for an ASCII character, `None` for anything else.
pub fn escape_char(c: char) -> Option<char> {
    c.is_ascii()
        .then(|| char::from_u32(PLACEHOLDER_BASE + c as u32))
        .flatten()
}

/// Literal character behind a placeholder, `None` if `c` is not one.
pub fn unescape_char(c: char) -> Option<char> {
    if c == CODE_DELIMITER {
        return Some('`');
    }
    (c as u32)
        .checked_sub(PLACEHOLDER_BASE)
        .filter(|offset| *offset < 0x80)
        .and_then(char::from_u32)
}

pub fn is_placeholder(c: char) -> bool {
    unescape_char(c).is_some()
}

/// Replace every placeholder in `s` with its literal character.
///
/// Used for attribute values, such as link targets, captured while their
/// text was still escaped.
pub fn restore(s: &str) -> String {
    s.chars().map(|c| unescape_char(c).unwrap_or(c)).collect()
}

/// Replace `\` followed by ASCII punctuation with one placeholder.
#[derive(Clone, Debug, Default)]
pub struct Escaping;

impl Escaping {
    pub fn new() -> Self {
        Self
    }
}

impl PatternElement for Escaping {
    fn regex(&self) -> &Regex {
        &ESCAPE_REGEX
    }

    fn rewrite(&self, text: &mut StyledText, m: &Match) -> Result<(), TextRangeError> {
        let range = m.range();
        let escaped = text
            .slice(range.clone())
            .and_then(|s| s.chars().nth(1))
            .and_then(escape_char);

        match escaped {
            Some(placeholder) => text.replace_range(range, placeholder.encode_utf8(&mut [0; 4])),
            None => Ok(()),
        }
    }
}

impl MarkdownElement for Escaping {
    fn parse(&self, text: &mut StyledText) {
        self.scan(text);
    }
}

/// Turn every placeholder back into the character it stands for.
#[derive(Clone, Debug, Default)]
pub struct Unescaping;

impl Unescaping {
    pub fn new() -> Self {
        Self
    }
}

impl PatternElement for Unescaping {
    fn regex(&self) -> &Regex {
        &PLACEHOLDER_REGEX
    }

    fn rewrite(&self, text: &mut StyledText, m: &Match) -> Result<(), TextRangeError> {
        let range = m.range();
        let literal = text
            .slice(range.clone())
            .and_then(|s| s.chars().next())
            .and_then(unescape_char);

        match literal {
            Some(c) => text.replace_range(range, c.encode_utf8(&mut [0; 4])),
            None => Ok(()),
        }
    }
}

impl MarkdownElement for Unescaping {
    fn parse(&self, text: &mut StyledText) {
        self.scan(text);
    }
}
