//! CLI commands.

mod alphabet;
mod decode;
mod encode;
mod verify;

use anyhow::Result;
use b56::{B56Error, Prefix};
use clap::{ArgAction, Parser, Subcommand};
use tracing::warn;

use crate::error::CliError;
use crate::output::OutputFormat;

/// b56 - Encode integers as compact base-56 short IDs.
#[derive(Debug, Parser)]
#[command(name = "b56")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (table or json).
    #[arg(long, global = true, default_value = "table")]
    format: String,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Encode decimal values.
    Encode(encode::EncodeCommand),

    /// Decode base-56 values.
    Decode(decode::DecodeCommand),

    /// Round-trip every value in a range and report throughput.
    Verify(verify::VerifyCommand),

    /// Show the symbol table.
    Alphabet,

    /// Show CLI version.
    Version,
}

impl Cli {
    /// Number of `-v` flags given.
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }

    /// Run the CLI command.
    pub fn run(self) -> Result<()> {
        let ctx = CommandContext {
            format: OutputFormat::from_flag(&self.format),
        };

        match self.command {
            Commands::Encode(cmd) => cmd.run(ctx),
            Commands::Decode(cmd) => cmd.run(ctx),
            Commands::Verify(cmd) => cmd.run(ctx),
            Commands::Alphabet => alphabet::run(ctx),
            Commands::Version => {
                println!("b56 {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub format: OutputFormat,
}

/// How values are turned into strings and back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodingMode {
    /// Bare encoding, padded to full width or trimmed.
    Plain { pad: bool },
    /// `{prefix}-{encoding}`, always padded.
    Prefixed(Prefix),
}

impl EncodingMode {
    /// Build the mode from the shared `--pad` / `--prefix` flags.
    pub fn from_flags(pad: bool, prefix: Option<String>) -> Result<Self, CliError> {
        match prefix {
            None => Ok(Self::Plain { pad }),
            Some(prefix) => {
                if pad {
                    warn!("--pad has no effect with --prefix; prefixed values are always padded");
                }
                let prefix = Prefix::new(prefix).map_err(CliError::Prefix)?;
                Ok(Self::Prefixed(prefix))
            }
        }
    }

    pub fn encode(&self, value: u64) -> String {
        match self {
            Self::Plain { pad } => b56::encode(value, *pad),
            Self::Prefixed(prefix) => prefix.encode(value),
        }
    }

    pub fn decode(&self, encoded: &str) -> Result<u64, B56Error> {
        match self {
            Self::Plain { .. } => b56::decode(encoded),
            Self::Prefixed(_) => b56::decode_with_prefix(encoded),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_verify_flags() {
        let cli = Cli::try_parse_from([
            "b56", "-vv", "verify", "--start", "10", "--end", "20", "--metrics",
        ])
        .unwrap();
        assert_eq!(cli.verbosity(), 2);
        assert!(matches!(cli.command, Commands::Verify(_)));
    }

    #[test]
    fn test_parse_rejects_negative_value() {
        assert!(Cli::try_parse_from(["b56", "encode", "-5"]).is_err());
    }

    #[test]
    fn test_mode_plain() {
        let mode = EncodingMode::from_flags(false, None).unwrap();
        assert_eq!(mode.encode(56), "10");
        assert_eq!(mode.decode("10"), Ok(56));
    }

    #[test]
    fn test_mode_prefixed_ignores_pad() {
        let mode = EncodingMode::from_flags(false, Some("ord".to_string())).unwrap();
        assert_eq!(mode.encode(56), "ord-000000000010");
        assert_eq!(mode.decode("ord-000000000010"), Ok(56));
    }

    #[test]
    fn test_mode_rejects_delimiter_in_prefix() {
        let result = EncodingMode::from_flags(false, Some("a-b".to_string()));
        assert!(matches!(result, Err(CliError::Prefix(_))));
    }
}
