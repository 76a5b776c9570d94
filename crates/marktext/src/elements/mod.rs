//! Built-in markdown elements.

mod automatic_link;
mod bold;
mod code;
mod header;
mod italic;
mod link;
mod list;
mod quote;

pub use automatic_link::AutomaticLink;
pub use bold::Bold;
pub use code::{Code, CodeEscaping};
pub use header::{Header, MAX_HEADER_LEVEL};
pub use italic::Italic;
pub use link::Link;
pub use list::{DEFAULT_INDICATOR, List};
pub use quote::Quote;

use attributed::{Attributes, StyledText, TextRangeError};

use crate::element::{Match, strip_markers};

/// Shared rewrite for delimiter-wrapped emphasis.
///
/// Groups 1 and 3 hold the content of the `*` and `_` alternatives; group 2
/// is the character before an `_` opener, which stays in the text.
fn rewrite_emphasis(
    text: &mut StyledText,
    m: &Match,
    marker_len: usize,
    attributes: Attributes,
) -> Result<(), TextRangeError> {
    let Some(content) = m.group(1).or_else(|| m.group(3)) else {
        return Ok(());
    };
    let content = strip_markers(
        text,
        content.start - marker_len..content.start,
        content.end..content.end + marker_len,
    )?;
    text.add_attributes(content, attributes)
}
