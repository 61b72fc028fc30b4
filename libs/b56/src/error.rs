//! Error types for base-56 decoding and prefix validation.

use thiserror::Error;

/// Errors that can occur when decoding a base-56 value or validating a prefix.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum B56Error {
    /// A typed ID string is empty.
    #[error("ID cannot be empty")]
    Empty,

    /// A character is not part of the base-56 alphabet.
    #[error("invalid base-56 symbol {symbol:?} at position {position}")]
    InvalidSymbol { symbol: char, position: usize },

    /// A prefixed value has no `-` delimiter.
    #[error("malformed prefixed value '{input}': missing '-' delimiter")]
    MalformedInput { input: String },

    /// The decoded value does not fit in a `u64`.
    #[error("encoded value exceeds the 64-bit range")]
    Overflow,

    /// The domain prefix cannot be used for encoding.
    #[error("invalid prefix '{prefix}': {reason}")]
    InvalidPrefix {
        prefix: String,
        reason: &'static str,
    },

    /// The prefix segment does not match the expected domain.
    #[error("prefix mismatch: expected '{expected}', got '{actual}'")]
    PrefixMismatch { expected: String, actual: String },
}

impl B56Error {
    /// Returns true if this error indicates the input was empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, B56Error::Empty)
    }

    /// Returns true if this error concerns the domain prefix rather than the digits.
    pub fn is_prefix_error(&self) -> bool {
        matches!(
            self,
            B56Error::MalformedInput { .. }
                | B56Error::InvalidPrefix { .. }
                | B56Error::PrefixMismatch { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_errors_classified() {
        let malformed = B56Error::MalformedInput {
            input: "abc".to_string(),
        };
        assert!(malformed.is_prefix_error());
        assert!(!B56Error::Overflow.is_prefix_error());
        assert!(B56Error::Empty.is_empty());
    }

    #[test]
    fn test_invalid_symbol_message() {
        let err = B56Error::InvalidSymbol {
            symbol: 'l',
            position: 3,
        };
        assert_eq!(err.to_string(), "invalid base-56 symbol 'l' at position 3");
    }
}
