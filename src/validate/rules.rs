//! Compiled regular-expression rules for the form fields.
//!
//! Character classes are spelled out in ASCII (`[0-9]`, `[A-Za-z]`) because the
//! `regex` crate's `\d` and `\w` are Unicode-aware, while the rules only accept
//! ASCII digits and letters.

use regex::Regex;
use std::sync::LazyLock;

/// Letters and whitespace only, at least two characters.
pub const NAME_PATTERN: &str = r"^[A-Za-z\s]{2,}$";

/// `local@domain.tld` with a top-level part of at least two characters.
///
/// Deliberately permissive: no RFC 5322 parsing, quoted locals, or IP literals.
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]{2,}$";

/// Seven to fifteen digits, nothing else.
pub const PHONE_PATTERN: &str = r"^[0-9]{7,15}$";

/// Minimum password length, counted in characters.
pub const PASSWORD_MIN_LEN: usize = 8;

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(NAME_PATTERN).expect("name pattern is a valid regex"));

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PHONE_PATTERN).expect("phone pattern is a valid regex"));

static LOWER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[a-z]").expect("lowercase pattern is a valid regex"));

static UPPER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[A-Z]").expect("uppercase pattern is a valid regex"));

static DIGIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[0-9]").expect("digit pattern is a valid regex"));

// Anything outside [A-Za-z0-9], underscore included.
static SPECIAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[^A-Za-z0-9]").expect("special pattern is a valid regex"));

/// Does the (already trimmed) value look like a person's name?
pub fn is_name(value: &str) -> bool {
    NAME_RE.is_match(value)
}

/// Does the (already trimmed) value look like an email address?
pub fn is_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Is the (already trimmed) value a bare phone number?
pub fn is_phone(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

pub fn has_min_len(value: &str) -> bool {
    value.chars().count() >= PASSWORD_MIN_LEN
}

pub fn has_lowercase(value: &str) -> bool {
    LOWER_RE.is_match(value)
}

pub fn has_uppercase(value: &str) -> bool {
    UPPER_RE.is_match(value)
}

pub fn has_digit(value: &str) -> bool {
    DIGIT_RE.is_match(value)
}

pub fn has_special(value: &str) -> bool {
    SPECIAL_RE.is_match(value)
}
