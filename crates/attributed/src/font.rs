//! Font descriptors and variant derivation.

use std::fmt;

use bitflags::bitflags;

/// Point size of the default font.
pub const SMALL_SYSTEM_FONT_SIZE: f32 = 12.0;

bitflags! {
    /// Symbolic traits carried by a font.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct FontTraits: u8 {
        const BOLD = 0b01;
        const ITALIC = 0b10;
    }
}

/// Font family selector.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// The platform's default UI face.
    #[default]
    System,
    /// The platform's default fixed-width face.
    Monospace,
    /// A family requested by name.
    Named(String),
}

/// A font descriptor: family, point size and traits.
#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    pub family: FontFamily,
    pub size: f32,
    pub traits: FontTraits,
}

impl Default for Font {
    fn default() -> Self {
        Self::system(SMALL_SYSTEM_FONT_SIZE)
    }
}

impl Font {
    /// System font at the given size.
    pub fn system(size: f32) -> Self {
        Self {
            family: FontFamily::System,
            size,
            traits: FontTraits::empty(),
        }
    }

    /// Named family at the given size.
    pub fn named(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: FontFamily::Named(family.into()),
            size,
            traits: FontTraits::empty(),
        }
    }

    pub fn is_bold(&self) -> bool {
        self.traits.contains(FontTraits::BOLD)
    }

    pub fn is_italic(&self) -> bool {
        self.traits.contains(FontTraits::ITALIC)
    }

    pub fn is_monospace(&self) -> bool {
        self.family == FontFamily::Monospace
    }

    /// Layer `top` over this font.
    ///
    /// Family and size come from `top`; traits accumulate so that nested
    /// emphasis keeps every trait applied to the range.
    pub fn merge(&self, top: &Font) -> Font {
        Font {
            family: top.family.clone(),
            size: top.size,
            traits: self.traits | top.traits,
        }
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.family {
            FontFamily::System => write!(f, "system")?,
            FontFamily::Monospace => write!(f, "monospace")?,
            FontFamily::Named(name) => write!(f, "{name}")?,
        }
        write!(f, " {}", self.size)?;
        if self.is_bold() {
            write!(f, " bold")?;
        }
        if self.is_italic() {
            write!(f, " italic")?;
        }
        Ok(())
    }
}

/// A variant derived from a base font.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontVariant {
    Bold,
    Italic,
    Monospace,
    /// Header font for a level between 1 and 6.
    Heading(u8),
}

/// Derive a font variant from `base`.
///
/// Headings are bold, and each level above six adds two points:
/// level 1 is `base.size + 12`, level 6 is `base.size + 2`.
///
/// ```
/// use attributed::{Font, FontVariant, derive_variant};
///
/// let h1 = derive_variant(&Font::system(12.0), FontVariant::Heading(1));
/// assert_eq!(h1.size, 24.0);
/// assert!(h1.is_bold());
/// ```
pub fn derive_variant(base: &Font, variant: FontVariant) -> Font {
    let mut font = base.clone();
    match variant {
        FontVariant::Bold => font.traits |= FontTraits::BOLD,
        FontVariant::Italic => font.traits |= FontTraits::ITALIC,
        FontVariant::Monospace => font.family = FontFamily::Monospace,
        FontVariant::Heading(level) => {
            let level = level.clamp(1, 6);
            font.size = base.size + 2.0 * f32::from(7 - level);
            font.traits |= FontTraits::BOLD;
        }
    }
    font
}
