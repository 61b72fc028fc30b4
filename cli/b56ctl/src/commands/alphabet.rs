//! Alphabet command.

use anyhow::Result;
use serde::Serialize;
use tabled::Tabled;

use crate::output::print_output;

use super::CommandContext;

#[derive(Debug, Serialize, Tabled)]
struct SymbolRow {
    #[tabled(rename = "Symbol")]
    symbol: char,

    #[tabled(rename = "Value")]
    value: usize,
}

fn rows() -> Vec<SymbolRow> {
    b56::SYMBOLS
        .iter()
        .enumerate()
        .map(|(value, &symbol)| SymbolRow {
            symbol: symbol as char,
            value,
        })
        .collect()
}

pub fn run(ctx: CommandContext) -> Result<()> {
    print_output(&rows(), ctx.format);
    Ok(())
}
