//! Decode command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use tracing::debug;

use crate::error::CliError;
use crate::output::print_output;

use super::CommandContext;

/// Decode base-56 values back to decimal.
#[derive(Debug, Args)]
pub struct DecodeCommand {
    /// Encoded values, padded or not.
    #[arg(required = true)]
    encoded: Vec<String>,

    /// Inputs carry a domain prefix (`{prefix}-{encoding}`).
    #[arg(long)]
    prefixed: bool,
}

#[derive(Debug, Serialize, Tabled)]
struct DecodedRow {
    #[tabled(rename = "Encoded")]
    encoded: String,

    #[tabled(rename = "Prefix", display = "display_option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    prefix: Option<String>,

    #[tabled(rename = "Value")]
    value: u64,
}

fn display_option(opt: &Option<String>) -> String {
    opt.clone().unwrap_or_else(|| "-".to_string())
}

impl DecodeCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let prefixed = self.prefixed;
        debug!(count = self.encoded.len(), prefixed, "Decoding values");

        let rows = self
            .encoded
            .into_iter()
            .map(|input| decode_row(input, prefixed))
            .collect::<Result<Vec<_>, _>>()?;

        print_output(&rows, ctx.format);
        Ok(())
    }
}

fn decode_row(input: String, prefixed: bool) -> Result<DecodedRow, CliError> {
    let (prefix, value) = if prefixed {
        let (prefix, value) =
            b56::decode_with_prefix_parts(&input).map_err(|e| CliError::decode(&input, e))?;
        (Some(prefix.to_string()), value)
    } else {
        let value = b56::decode(&input).map_err(|e| CliError::decode(&input, e))?;
        (None, value)
    };

    Ok(DecodedRow {
        encoded: input,
        prefix,
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use b56::B56Error;

    #[test]
    fn test_decode_row_plain() {
        let row = decode_row("100".to_string(), false).unwrap();
        assert_eq!(row.value, 3136);
        assert!(row.prefix.is_none());
    }

    #[test]
    fn test_decode_row_prefixed() {
        let row = decode_row("ord-000000000100".to_string(), true).unwrap();
        assert_eq!(row.value, 3136);
        assert_eq!(row.prefix.as_deref(), Some("ord"));
    }

    #[test]
    fn test_decoded_rows_render_missing_prefix_as_dash() {
        let rows = vec![
            decode_row("Z".to_string(), false).unwrap(),
            decode_row("ord-000000000010".to_string(), true).unwrap(),
        ];
        let table = tabled::Table::new(&rows).to_string();
        assert!(table.contains("Prefix"));
        assert!(table.contains(" - "));
        assert!(table.contains("ord"));
    }

    #[test]
    fn test_decode_row_missing_delimiter() {
        let err = decode_row("noDelimiterHere".to_string(), true).unwrap_err();
        assert!(matches!(
            err,
            CliError::Decode {
                source: B56Error::MalformedInput { .. },
                ..
            }
        ));
    }
}
