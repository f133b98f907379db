//! The zodiac sign catalog and input validation.
//!
//! The catalog is a fixed table of twelve signs mapping a canonical lowercase
//! key to a symbol-decorated display label. It is defined once as a constant
//! and never mutated; at twelve entries a linear scan beats any map.

use crate::error::AppError;

/// A validated zodiac sign from the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sign {
    /// Canonical lowercase key, e.g. `"aries"`
    pub key: &'static str,
    /// Human-readable display label, e.g. `"♈ Aries"`
    pub label: &'static str,
}

/// The twelve zodiac signs, keyed by canonical lowercase name.
pub const CATALOG: [Sign; 12] = [
    Sign { key: "aries", label: "♈ Aries" },
    Sign { key: "taurus", label: "♉ Taurus" },
    Sign { key: "gemini", label: "♊ Gemini" },
    Sign { key: "cancer", label: "♋ Cancer" },
    Sign { key: "leo", label: "♌ Leo" },
    Sign { key: "virgo", label: "♍ Virgo" },
    Sign { key: "libra", label: "♎ Libra" },
    Sign { key: "scorpio", label: "♏ Scorpio" },
    Sign { key: "sagittarius", label: "♐ Sagittarius" },
    Sign { key: "capricorn", label: "♑ Capricorn" },
    Sign { key: "aquarius", label: "♒ Aquarius" },
    Sign { key: "pisces", label: "♓ Pisces" },
];

/// Validate a raw user-supplied sign against the catalog.
///
/// Input is trimmed and ASCII-lowercased before lookup, so `" Leo "` and
/// `"LEO"` both resolve to the `leo` entry. Anything not in the catalog,
/// including the empty string from a missing request field, is rejected
/// with [`AppError::InvalidSign`].
pub fn validate(raw: &str) -> Result<Sign, AppError> {
    let normalized = raw.trim().to_ascii_lowercase();

    CATALOG
        .iter()
        .find(|sign| sign.key == normalized)
        .copied()
        .ok_or(AppError::InvalidSign(normalized))
}
