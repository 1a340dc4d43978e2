//! Senegalese mobile number parsing and formatting.
//!
//! The platform only delivers to Senegalese mobiles (country code +221,
//! prefixes 70/75/76/77/78). All three common input shapes normalize to the
//! same canonical E.164 value:
//!
//! - `771234567`
//! - `221771234567`
//! - `+221771234567`
//!
//! Separators (spaces, dashes, dots, parentheses) are tolerated on input.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;
use thiserror::Error;

/// Country code for Senegal, digits only.
const COUNTRY_CODE: &str = "221";

/// Length of a local (national) number: `7X XXX XX XX`.
const LOCAL_LEN: usize = 9;

/// A validated Senegalese mobile number in canonical E.164 form
/// (`+2217XXXXXXXX`).
///
/// Serializes transparently as a JSON string. Construction goes through
/// [`PhoneNumber::parse`]; deserialization is transparent because server-side
/// records are already normalized.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

/// Why an input string is not a valid Senegalese mobile number.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PhoneError {
    #[error("empty phone number")]
    Empty,

    #[error("phone number contains non-digit characters")]
    NonDigit,

    #[error("expected {LOCAL_LEN} local digits, got {0}")]
    BadLength(usize),

    #[error("not a Senegalese mobile prefix (70/75/76/77/78)")]
    BadPrefix,
}

impl PhoneNumber {
    /// Parse and normalize an input string.
    pub fn parse(input: &str) -> Result<Self, PhoneError> {
        let cleaned: String = input
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '.' | '(' | ')'))
            .collect();

        if cleaned.is_empty() {
            return Err(PhoneError::Empty);
        }

        let digits = cleaned.strip_prefix('+').unwrap_or(&cleaned);
        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(PhoneError::NonDigit);
        }

        let local = digits.strip_prefix(COUNTRY_CODE).filter(|rest| {
            // "221..." with 9 trailing digits is a prefixed number; a bare
            // local number never has 12 digits, so this cannot misfire.
            rest.len() == LOCAL_LEN
        });
        let local = match local {
            Some(rest) => rest,
            None => digits,
        };

        if local.len() != LOCAL_LEN {
            return Err(PhoneError::BadLength(local.len()));
        }

        let mut chars = local.chars();
        let first = chars.next();
        let second = chars.next();
        let valid_prefix = first == Some('7')
            && matches!(second, Some('0') | Some('5') | Some('6') | Some('7') | Some('8'));
        if !valid_prefix {
            return Err(PhoneError::BadPrefix);
        }

        Ok(Self(format!("+{}{}", COUNTRY_CODE, local)))
    }

    /// Canonical E.164 representation: `+221771234567`.
    pub fn as_e164(&self) -> &str {
        &self.0
    }

    /// Local number without the country code: `771234567`.
    pub fn local(&self) -> &str {
        &self.0[1 + COUNTRY_CODE.len()..]
    }

    /// Grouped display form: `+221 77 123 45 67`.
    pub fn display(&self) -> String {
        let local = self.local();
        format!(
            "+{} {} {} {} {}",
            COUNTRY_CODE,
            &local[..2],
            &local[2..5],
            &local[5..7],
            &local[7..]
        )
    }
}

impl std::fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PhoneNumber {
    type Err = PhoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PhoneNumber::parse(s)
    }
}

impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(PhoneNumber(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_input_shapes_normalize_identically() {
        for input in ["771234567", "221771234567", "+221771234567"] {
            let phone = PhoneNumber::parse(input).unwrap();
            assert_eq!(phone.as_e164(), "+221771234567", "input: {input}");
            assert_eq!(phone.display(), "+221 77 123 45 67", "input: {input}");
        }
    }

    #[test]
    fn test_separators_are_tolerated() {
        let phone = PhoneNumber::parse("+221 77 123-45.67").unwrap();
        assert_eq!(phone.as_e164(), "+221771234567");
        let phone = PhoneNumber::parse("(77) 123 45 67").unwrap();
        assert_eq!(phone.as_e164(), "+221771234567");
    }

    #[test]
    fn test_all_valid_prefixes() {
        for prefix in ["70", "75", "76", "77", "78"] {
            let input = format!("{}1234567", prefix);
            assert!(PhoneNumber::parse(&input).is_ok(), "prefix {prefix}");
        }
    }

    #[test]
    fn test_invalid_prefixes_rejected() {
        for input in ["791234567", "711234567", "661234567", "801234567"] {
            assert_eq!(
                PhoneNumber::parse(input),
                Err(PhoneError::BadPrefix),
                "input {input}"
            );
        }
    }

    #[test]
    fn test_bad_lengths_rejected() {
        assert_eq!(
            PhoneNumber::parse("77123456"),
            Err(PhoneError::BadLength(8))
        );
        assert_eq!(
            PhoneNumber::parse("7712345678"),
            Err(PhoneError::BadLength(10))
        );
    }

    #[test]
    fn test_empty_and_garbage_rejected() {
        assert_eq!(PhoneNumber::parse(""), Err(PhoneError::Empty));
        assert_eq!(PhoneNumber::parse("   "), Err(PhoneError::Empty));
        assert_eq!(PhoneNumber::parse("77abc4567"), Err(PhoneError::NonDigit));
    }

    #[test]
    fn test_local_accessor() {
        let phone = PhoneNumber::parse("+221761112233").unwrap();
        assert_eq!(phone.local(), "761112233");
    }

    #[test]
    fn test_serde_transparent() {
        let phone = PhoneNumber::parse("771234567").unwrap();
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"+221771234567\"");
        let back: PhoneNumber = serde_json::from_str(&json).unwrap();
        assert_eq!(back, phone);
    }
}
