//! Macros for defining typed short IDs.

/// Macro to define a typed short ID with a specific prefix.
///
/// This generates a newtype wrapper around `u64` with:
/// - A `PREFIX` constant, checked at compile time
/// - `new()` and `value()`
/// - `parse()` that requires the matching prefix
/// - `Display` and `FromStr` implementations using `{prefix}-{encoding}`
/// - `Serialize` and `Deserialize` implementations
/// - `Ord`, `Hash`, and conversions to and from `u64`
///
/// # Example
///
/// ```
/// b56::define_short_id!(OrderId, "ord");
///
/// let id = OrderId::new(3136);
/// assert_eq!(id.to_string(), "ord-000000000100");
///
/// let parsed: OrderId = "ord-000000000100".parse().unwrap();
/// assert_eq!(parsed, id);
/// ```
#[macro_export]
macro_rules! define_short_id {
    ($name:ident, $prefix:literal) => {
        /// A typed short ID for this domain.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(u64);

        const _: () = assert!(
            $crate::is_valid_prefix($prefix),
            "short ID prefix must be non-empty and must not contain '-'"
        );

        impl $name {
            /// The prefix for this ID type.
            pub const PREFIX: &'static str = $prefix;

            /// Creates an ID from its numeric value.
            #[must_use]
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            /// Returns the numeric value.
            #[must_use]
            pub const fn value(&self) -> u64 {
                self.0
            }

            /// Parses an ID from a string.
            ///
            /// The string must be in the format `{prefix}-{encoding}`.
            pub fn parse(s: &str) -> Result<Self, $crate::B56Error> {
                if s.is_empty() {
                    return Err($crate::B56Error::Empty);
                }

                let (prefix, value) = $crate::decode_with_prefix_parts(s)?;

                if prefix != Self::PREFIX {
                    return Err($crate::B56Error::PrefixMismatch {
                        expected: Self::PREFIX.to_string(),
                        actual: prefix.to_string(),
                    });
                }

                Ok(Self(value))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&$crate::encode_with_prefix(self.0, Self::PREFIX))
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::B56Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl $crate::__serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: $crate::__serde::Serializer,
            {
                serializer.collect_str(self)
            }
        }

        impl<'de> $crate::__serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: $crate::__serde::Deserializer<'de>,
            {
                let s = <String as $crate::__serde::Deserialize>::deserialize(deserializer)?;
                Self::parse(&s).map_err($crate::__serde::de::Error::custom)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::B56Error;

    crate::define_short_id!(TicketId, "tkt");
    crate::define_short_id!(InvoiceId, "inv");

    #[test]
    fn test_short_id_roundtrip() {
        let id = TicketId::new(u64::MAX);
        let s = id.to_string();
        assert_eq!(s, "tkt-14PSsSsyWstf");
        let parsed: TicketId = s.parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_short_id_wrong_prefix() {
        let s = InvoiceId::new(7).to_string();
        let result: Result<TicketId, _> = s.parse();
        assert!(matches!(
            result.unwrap_err(),
            B56Error::PrefixMismatch { .. }
        ));
    }

    #[test]
    fn test_short_id_missing_delimiter() {
        let result: Result<TicketId, _> = "tkt000000000007".parse();
        assert!(matches!(
            result.unwrap_err(),
            B56Error::MalformedInput { .. }
        ));
    }

    #[test]
    fn test_short_id_empty() {
        let result: Result<TicketId, _> = "".parse();
        assert!(matches!(result.unwrap_err(), B56Error::Empty));
    }

    #[test]
    fn test_short_id_json_roundtrip() {
        let id = TicketId::from(123_456_789);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"tkt-0000000cxZAw\"");
        let parsed: TicketId = serde_json::from_str(&json).unwrap();
        assert_eq!(u64::from(parsed), 123_456_789);
    }

    #[test]
    fn test_short_id_json_rejects_garbage() {
        let result: Result<TicketId, _> = serde_json::from_str("\"tkt-!!\"");
        assert!(result.is_err());
    }
}
