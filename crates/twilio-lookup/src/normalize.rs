//! Freeform text → E.164.
//!
//! Only explicitly international input is accepted: after cleanup the text must start with a
//! single `+`. No default region is ever assumed.

use std::fmt;

use phonenumber::Mode;
use thiserror::Error;

/// A phone number in E.164 form (`+<country code><national number>`).
///
/// Only [`normalize`] produces values of this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalNumber(String);

impl CanonicalNumber {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Why a piece of text was rejected. Callers usually only care that it was.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidNumber {
    #[error("no digits or '+' in input")]
    Empty,
    #[error("number must start with '+' and a country code")]
    MissingPlus,
    #[error("number contains letters")]
    ContainsLetters,
    #[error("number contains more than one '+'")]
    MultiplePlus,
    #[error("not a valid international phone number")]
    Unparseable,
}

/// Normalizes user text to a [`CanonicalNumber`].
///
/// Whitespace and punctuation are dropped, Arabic-Indic digits are read as ASCII digits, and the
/// remainder is parsed with libphonenumber rules without a default region. Never panics.
pub fn normalize(raw: &str) -> Result<CanonicalNumber, InvalidNumber> {
    let trimmed = raw.trim();
    if trimmed.chars().any(char::is_alphabetic) {
        return Err(InvalidNumber::ContainsLetters);
    }

    let cleaned: String = trimmed
        .chars()
        .filter_map(|c| if c == '+' { Some('+') } else { ascii_digit(c) })
        .collect();

    if cleaned.is_empty() {
        return Err(InvalidNumber::Empty);
    }
    if !cleaned.starts_with('+') {
        return Err(InvalidNumber::MissingPlus);
    }
    if cleaned.matches('+').count() > 1 {
        return Err(InvalidNumber::MultiplePlus);
    }
    if cleaned.len() == 1 {
        return Err(InvalidNumber::Unparseable);
    }

    let parsed = phonenumber::parse(None, &cleaned).map_err(|_| InvalidNumber::Unparseable)?;
    Ok(CanonicalNumber(parsed.format().mode(Mode::E164).to_string()))
}

/// ASCII digit for `c`, accepting Arabic-Indic (U+0660..) and Eastern Arabic-Indic (U+06F0..) digits.
fn ascii_digit(c: char) -> Option<char> {
    let offset = match c {
        '0'..='9' => return Some(c),
        '\u{0660}'..='\u{0669}' => c as u32 - 0x0660,
        '\u{06F0}'..='\u{06F9}' => c as u32 - 0x06F0,
        _ => return None,
    };
    char::from_digit(offset, 10)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_whitespace_and_spaces() {
        let number = normalize(" +1 415 555 2671 ").unwrap();
        assert_eq!(number.as_str(), "+14155552671");
    }

    #[test]
    fn test_strips_punctuation() {
        assert_eq!(
            normalize("+1 (415) 555-2671").unwrap().to_string(),
            "+14155552671"
        );
        assert_eq!(
            normalize("+44 20.7946.0958").unwrap().to_string(),
            "+442079460958"
        );
    }

    #[test]
    fn test_canonical_input_is_idempotent() {
        for raw in ["+14155552671", "+442079460958", "+971501234567"] {
            let once = normalize(raw).unwrap();
            let twice = normalize(once.as_str()).unwrap();
            assert_eq!(once.as_str(), raw);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_arabic_indic_digits() {
        assert_eq!(
            normalize("+١٤١٥٥٥٥٢٦٧١").unwrap().as_str(),
            "+14155552671"
        );
        assert_eq!(
            normalize("+۱۴۱۵۵۵۵۲۶۷۱").unwrap().as_str(),
            "+14155552671"
        );
    }

    #[test]
    fn test_rejects_empty_and_lone_plus() {
        assert_eq!(normalize(""), Err(InvalidNumber::Empty));
        assert_eq!(normalize("   "), Err(InvalidNumber::Empty));
        assert_eq!(normalize("+"), Err(InvalidNumber::Unparseable));
        assert_eq!(normalize(" + "), Err(InvalidNumber::Unparseable));
    }

    #[test]
    fn test_rejects_text() {
        assert_eq!(normalize("hello"), Err(InvalidNumber::ContainsLetters));
        assert_eq!(normalize("not a number"), Err(InvalidNumber::ContainsLetters));
        assert_eq!(
            normalize("+1 415 CALL NOW"),
            Err(InvalidNumber::ContainsLetters)
        );
        assert_eq!(normalize("مرحبا"), Err(InvalidNumber::ContainsLetters));
    }

    #[test]
    fn test_rejects_missing_plus() {
        assert_eq!(normalize("14155552671"), Err(InvalidNumber::MissingPlus));
        assert_eq!(normalize("(415) 555-2671"), Err(InvalidNumber::MissingPlus));
        assert_eq!(normalize("00 1 415 555 2671"), Err(InvalidNumber::MissingPlus));
        // Plus after the first digit.
        assert_eq!(normalize("1+4155552671"), Err(InvalidNumber::MissingPlus));
    }

    #[test]
    fn test_rejects_multiple_plus() {
        assert_eq!(normalize("++14155552671"), Err(InvalidNumber::MultiplePlus));
        assert_eq!(normalize("+1415+5552671"), Err(InvalidNumber::MultiplePlus));
    }

    #[test]
    fn test_rejects_punctuation_only() {
        assert_eq!(normalize("()-. /"), Err(InvalidNumber::Empty));
        assert_eq!(normalize("+()-"), Err(InvalidNumber::Unparseable));
    }
}
