//! Encode command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use tracing::debug;

use crate::output::print_output;

use super::{CommandContext, EncodingMode};

/// Encode decimal values as base-56.
#[derive(Debug, Args)]
pub struct EncodeCommand {
    /// Values to encode.
    #[arg(required = true)]
    values: Vec<u64>,

    /// Pad to the full 12-symbol width.
    #[arg(long)]
    pad: bool,

    /// Domain prefix; prefixed values are always padded.
    #[arg(long, env = "B56_PREFIX")]
    prefix: Option<String>,
}

#[derive(Debug, Serialize, Tabled)]
struct EncodedRow {
    #[tabled(rename = "Value")]
    value: u64,

    #[tabled(rename = "Encoded")]
    encoded: String,
}

impl EncodeCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let mode = EncodingMode::from_flags(self.pad, self.prefix)?;
        debug!(?mode, count = self.values.len(), "Encoding values");

        let rows: Vec<EncodedRow> = self
            .values
            .into_iter()
            .map(|value| EncodedRow {
                value,
                encoded: mode.encode(value),
            })
            .collect();

        print_output(&rows, ctx.format);
        Ok(())
    }
}
