//! Validated domain prefixes.

use crate::codec::{self, DELIMITER};
use crate::B56Error;

/// Returns true if `prefix` can tag an encoding: non-empty, without the delimiter.
///
/// Usable in const context so ID macros can check their prefix at compile time.
pub const fn is_valid_prefix(prefix: &str) -> bool {
    let bytes = prefix.as_bytes();
    if bytes.is_empty() {
        return false;
    }
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == DELIMITER as u8 {
            return false;
        }
        i += 1;
    }
    true
}

/// A domain prefix that is known to round-trip through the prefixed encoding.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Prefix(String);

impl Prefix {
    /// Validates and wraps a prefix.
    pub fn new(prefix: impl Into<String>) -> Result<Self, B56Error> {
        let prefix = prefix.into();

        if prefix.is_empty() {
            return Err(B56Error::InvalidPrefix {
                prefix,
                reason: "prefix cannot be empty",
            });
        }

        if prefix.contains(DELIMITER) {
            return Err(B56Error::InvalidPrefix {
                prefix,
                reason: "prefix cannot contain '-'",
            });
        }

        Ok(Self(prefix))
    }

    /// Returns the prefix text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Encodes `value` tagged with this prefix.
    #[must_use]
    pub fn encode(&self, value: u64) -> String {
        codec::encode_with_prefix(value, &self.0)
    }

    /// Decodes a value tagged with this prefix, rejecting any other prefix.
    pub fn decode(&self, encoded: &str) -> Result<u64, B56Error> {
        let (actual, value) = codec::decode_with_prefix_parts(encoded)?;
        if actual != self.0 {
            return Err(B56Error::PrefixMismatch {
                expected: self.0.clone(),
                actual: actual.to_string(),
            });
        }
        Ok(value)
    }
}

impl std::fmt::Display for Prefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Prefix {
    type Err = B56Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Prefix {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_rejects_delimiter() {
        let err = Prefix::new("ord-v2").unwrap_err();
        assert!(err.is_prefix_error());
        assert!(!is_valid_prefix("ord-v2"));
    }

    #[test]
    fn test_prefix_rejects_empty() {
        assert!(matches!(
            Prefix::new(""),
            Err(B56Error::InvalidPrefix { .. })
        ));
        assert!(!is_valid_prefix(""));
    }

    #[test]
    fn test_prefix_encode_decode() {
        let prefix: Prefix = "inv".parse().unwrap();
        let encoded = prefix.encode(55);
        assert_eq!(encoded, "inv-00000000000Z");
        assert_eq!(prefix.decode(&encoded), Ok(55));
    }

    #[test]
    fn test_prefix_decode_other_domain() {
        let prefix = Prefix::new("inv").unwrap();
        let result = prefix.decode("ord-00000000000Z");
        assert_eq!(
            result,
            Err(B56Error::PrefixMismatch {
                expected: "inv".to_string(),
                actual: "ord".to_string(),
            })
        );
    }
}
