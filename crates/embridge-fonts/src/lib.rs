//! Named font-family keys used by email documents.
//!
//! The editor's layout block stores a named key (e.g. `MODERN_SANS`)
//! rather than a raw CSS stack; mail-client-safe stacks are resolved at
//! render time. Keys form an open set: documents may carry keys this
//! crate does not know, and they must be preserved verbatim.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFamily {
    ModernSans,
    BookSans,
    OrganicSans,
    GeometricSans,
    HeavySans,
    RoundedSans,
    ModernSerif,
    BookSerif,
    Monospace,
}

/// Default family for synthesized layout roots.
pub const DEFAULT_FAMILY: FontFamily = FontFamily::ModernSans;

impl FontFamily {
    /// The key as stored in document JSON.
    pub const fn as_key(self) -> &'static str {
        match self {
            FontFamily::ModernSans => "MODERN_SANS",
            FontFamily::BookSans => "BOOK_SANS",
            FontFamily::OrganicSans => "ORGANIC_SANS",
            FontFamily::GeometricSans => "GEOMETRIC_SANS",
            FontFamily::HeavySans => "HEAVY_SANS",
            FontFamily::RoundedSans => "ROUNDED_SANS",
            FontFamily::ModernSerif => "MODERN_SERIF",
            FontFamily::BookSerif => "BOOK_SERIF",
            FontFamily::Monospace => "MONOSPACE",
        }
    }

    /// Mail-client-safe CSS stack for the key.
    pub const fn css_stack(self) -> &'static str {
        match self {
            FontFamily::ModernSans => r#""Helvetica Neue", "Arial Nova", "Nimbus Sans", Arial, sans-serif"#,
            FontFamily::BookSans => r#"Optima, Candara, "Noto Sans", source-sans-pro, sans-serif"#,
            FontFamily::OrganicSans => r#"Seravek, "Gill Sans Nova", Ubuntu, Calibri, sans-serif"#,
            FontFamily::GeometricSans => r#"Avenir, "Avenir Next LT Pro", Montserrat, Corbel, sans-serif"#,
            FontFamily::HeavySans => r#"Bahnschrift, "DIN Alternate", "Franklin Gothic Medium", sans-serif"#,
            FontFamily::RoundedSans => r#"ui-rounded, "Hiragino Maru Gothic ProN", Quicksand, Comfortaa, sans-serif"#,
            FontFamily::ModernSerif => r#"Charter, "Bitstream Charter", "Sitka Text", Cambria, serif"#,
            FontFamily::BookSerif => r#""Iowan Old Style", "Palatino Linotype", "URW Palladio L", serif"#,
            FontFamily::Monospace => r#""Nimbus Mono PS", "Courier New", monospace"#,
        }
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).as_key())
    }
}

/// Parse a document key back into a known family.
///
/// Returns `None` for unknown keys; callers keep the raw string in that
/// case rather than rejecting the document.
pub fn from_key(key: &str) -> Option<FontFamily> {
    Some(match key {
        "MODERN_SANS" => FontFamily::ModernSans,
        "BOOK_SANS" => FontFamily::BookSans,
        "ORGANIC_SANS" => FontFamily::OrganicSans,
        "GEOMETRIC_SANS" => FontFamily::GeometricSans,
        "HEAVY_SANS" => FontFamily::HeavySans,
        "ROUNDED_SANS" => FontFamily::RoundedSans,
        "MODERN_SERIF" => FontFamily::ModernSerif,
        "BOOK_SERIF" => FontFamily::BookSerif,
        "MONOSPACE" => FontFamily::Monospace,
        _ => return None,
    })
}

/// Resolve a document key to a CSS stack, falling back to the default
/// stack for unknown keys.
pub fn stack_for_key(key: &str) -> &'static str {
    from_key(key).unwrap_or(DEFAULT_FAMILY).css_stack()
}

pub fn is_known_key(key: &str) -> bool {
    from_key(key).is_some()
}
