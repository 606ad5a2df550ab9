//! Structural rules for SWIFT/BIC codes
//!
//! A code is `BBBB CC LL [bbb]`: 4-letter bank code, 2-letter country,
//! 2-character location and an optional 3-character branch. Headquarters
//! carry the branch marker `XXX`, and every record sharing the first six
//! characters belongs to the same institution.

use once_cell::sync::Lazy;
use regex::Regex;

/// Branch segment that marks the head office of an institution
pub const HEADQUARTER_MARKER: &str = "XXX";

/// Number of leading characters shared by a headquarters and its branches
pub const INSTITUTION_PREFIX_LEN: usize = 6;

static SWIFT_CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{6}[A-Z0-9]{2}([A-Z0-9]{3})?$").expect("valid regex"));

/// Check whether `code` is a structurally valid 8 or 11 character SWIFT code
pub fn is_valid_code(code: &str) -> bool {
    if code.len() != 8 && code.len() != 11 {
        return false;
    }

    SWIFT_CODE_RE.is_match(code)
}

/// Whether the code's branch segment is the headquarters marker
pub fn is_headquarter_code(code: &str) -> bool {
    code.ends_with(HEADQUARTER_MARKER)
}

/// First six characters of the code, or `None` when the code is too short
pub fn institution_prefix(code: &str) -> Option<&str> {
    code.get(..INSTITUTION_PREFIX_LEN)
}

/// Exactly two uppercase ASCII letters
pub fn is_valid_country_iso2(country: &str) -> bool {
    country.len() == 2 && country.bytes().all(|b| b.is_ascii_uppercase())
}
