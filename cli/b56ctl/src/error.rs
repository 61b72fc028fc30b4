//! Error handling and display for the CLI.

use b56::B56Error;
use colored::Colorize;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Round-trip mismatch for {value}: '{encoded}' decoded to {decoded}")]
    Mismatch {
        value: u64,
        encoded: String,
        decoded: u64,
    },

    #[error("Failed to decode '{encoded}' (encoded from {value}): {source}")]
    RoundTrip {
        value: u64,
        encoded: String,
        #[source]
        source: B56Error,
    },

    #[error("Failed to decode '{input}': {source}")]
    Decode {
        input: String,
        #[source]
        source: B56Error,
    },

    #[error("Invalid prefix: {0}")]
    Prefix(#[source] B56Error),

    #[error("Invalid range: start {start} is greater than end {end}")]
    InvalidRange { start: u64, end: u64 },
}

impl CliError {
    /// Create a decode error for user-supplied input.
    pub fn decode(input: impl Into<String>, source: B56Error) -> Self {
        Self::Decode {
            input: input.into(),
            source,
        }
    }
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    // Check for specific error types and provide hints
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        if let Some(hint) = hint(cli_err) {
            eprintln!("\n{}", format!("Hint: {hint}").yellow());
        }
    }
}

fn hint(err: &CliError) -> Option<&'static str> {
    match err {
        CliError::Decode {
            source: B56Error::MalformedInput { .. },
            ..
        } => Some("Prefixed values look like `ord-000000000100`. Drop --prefixed for plain values."),
        CliError::Decode {
            source: B56Error::InvalidSymbol { .. },
            ..
        } => Some("Symbols are 0-9 and letters except i, l, o, I, L, O."),
        CliError::Decode {
            source: B56Error::Overflow,
            ..
        } => Some("Values are limited to 64 bits (at most 12 symbols, up to `14PSsSsyWstf`)."),
        CliError::Prefix(_) => Some("Prefixes must be non-empty and must not contain '-'."),
        CliError::Mismatch { .. } | CliError::RoundTrip { .. } => {
            Some("This is a codec bug. Re-run with -vv to trace the failing value.")
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_message() {
        let source = B56Error::InvalidSymbol {
            symbol: '!',
            position: 2,
        };
        let err = CliError::decode("ab!", source);
        assert_eq!(
            err.to_string(),
            "Failed to decode 'ab!': invalid base-56 symbol '!' at position 2"
        );
        assert!(hint(&err).is_some());
    }

    #[test]
    fn test_cli_error_downcasts_from_anyhow() {
        let err: anyhow::Error = CliError::InvalidRange { start: 5, end: 1 }.into();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::InvalidRange { start: 5, end: 1 })
        ));
    }

    #[test]
    fn test_range_error_has_no_hint() {
        let err = CliError::InvalidRange { start: 5, end: 1 };
        assert!(hint(&err).is_none());
    }
}
