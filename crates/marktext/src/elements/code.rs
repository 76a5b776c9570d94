//! Inline code spans.
//!
//! [`CodeEscaping`] runs first and hides code spans from every structural
//! element; [`Code`] runs near the end and styles what it protected.

use std::ops::Range;

use attributed::{Attributes, Color, Font, FontVariant, StyledText, TextRangeError, derive_variant};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::element::{MarkdownElement, Match, PatternElement, strip_markers};
use crate::escape::{CODE_DELIMITER, escape_char};

static PROTECTED_CODE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\x{F0100}([^\x{F0100}]*)\x{F0100}").expect("valid code regex")
});

/// Location of a backtick code span.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct CodeSpan {
    pub open: Range<usize>,
    pub close: Range<usize>,
}

impl CodeSpan {
    pub fn content(&self) -> Range<usize> {
        self.open.end..self.close.start
    }
}

/// Find the first backtick code span at or after `from`.
///
/// The opening run must not be backslash-escaped; the closing run is the
/// next run of exactly the same length. An opening run without a closing
/// one is literal text.
pub(crate) fn find_code_span(text: &str, from: usize) -> Option<CodeSpan> {
    let bytes = text.as_bytes();
    let run_end = |start: usize| {
        bytes[start..]
            .iter()
            .position(|&b| b != b'`')
            .map_or(bytes.len(), |n| start + n)
    };

    let mut i = from;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'`' => {
                let open = i..run_end(i);
                let mut j = open.end;
                while let Some(offset) = bytes[j..].iter().position(|&b| b == b'`') {
                    let start = j + offset;
                    let close = start..run_end(start);
                    if close.len() == open.len() {
                        return Some(CodeSpan { open, close });
                    }
                    j = close.end;
                }
                i = open.end;
            }
            _ => i += 1,
        }
    }
    None
}

/// Hide code spans from structural elements.
///
/// Each delimiter run becomes [`CODE_DELIMITER`] and every ASCII
/// punctuation character inside becomes a placeholder; letters, digits and
/// everything else stay as they are.
#[derive(Clone, Debug, Default)]
pub struct CodeEscaping;

impl CodeEscaping {
    pub fn new() -> Self {
        Self
    }

    fn protect(&self, text: &mut StyledText, span: &CodeSpan) -> Result<(), TextRangeError> {
        let delimiter = CODE_DELIMITER.to_string();
        text.replace_range(span.close.clone(), &delimiter)?;

        let content = span.content();
        let punctuation: Vec<(usize, char)> = text
            .slice(content.clone())
            .unwrap_or_default()
            .char_indices()
            .filter(|(_, c)| c.is_ascii_punctuation())
            .map(|(offset, c)| (content.start + offset, c))
            .collect();

        for (offset, c) in punctuation.into_iter().rev() {
            if let Some(placeholder) = escape_char(c) {
                text.replace_range(offset..offset + 1, placeholder.encode_utf8(&mut [0; 4]))?;
            }
        }

        text.replace_range(span.open.clone(), &delimiter)
    }
}

impl MarkdownElement for CodeEscaping {
    fn parse(&self, text: &mut StyledText) {
        let mut location = 0;
        while let Some(span) = find_code_span(text.text(), location) {
            let old_len = text.len();
            if let Err(err) = self.protect(text, &span) {
                log::warn!("code span {:?} left unprotected: {}", span, err);
                return;
            }
            location = text.len() - (old_len - span.close.end);
        }
    }
}

/// Style code spans with a monospace font.
///
/// Handles spans protected by [`CodeEscaping`] and, as a second pass, any
/// literal backtick span that still remains.
#[derive(Clone, Debug)]
pub struct Code {
    pub font: Font,
    pub color: Option<Color>,
    pub background: Option<Color>,
}

impl Code {
    pub fn new(base: &Font) -> Self {
        Self {
            font: derive_variant(base, FontVariant::Monospace),
            color: None,
            background: None,
        }
    }

    pub fn set_base_font(&mut self, base: &Font) {
        self.font = derive_variant(base, FontVariant::Monospace);
    }

    fn attributes(&self) -> Attributes {
        Attributes::font(self.font.clone())
            .with_color(self.color)
            .with_background(self.background)
    }

    fn style(
        &self,
        text: &mut StyledText,
        open: Range<usize>,
        close: Range<usize>,
    ) -> Result<(), TextRangeError> {
        let content = strip_markers(text, open, close)?;
        text.add_attributes(content, self.attributes())
    }
}

impl Default for Code {
    fn default() -> Self {
        Self::new(&Font::default())
    }
}

impl PatternElement for Code {
    fn regex(&self) -> &Regex {
        &PROTECTED_CODE_REGEX
    }

    fn rewrite(&self, text: &mut StyledText, m: &Match) -> Result<(), TextRangeError> {
        let range = m.range();
        let content = m.group(1).unwrap_or(range.clone());
        self.style(text, range.start..content.start, content.end..range.end)
    }
}

impl MarkdownElement for Code {
    fn parse(&self, text: &mut StyledText) {
        self.scan(text);

        let mut location = 0;
        while let Some(span) = find_code_span(text.text(), location) {
            if let Err(err) = self.style(text, span.open.clone(), span.close.clone()) {
                log::warn!("code span {:?} left unstyled: {}", span, err);
                return;
            }
            location = span.close.start - span.open.len();
        }
    }
}
