//! Verify command: round-trip every value in a range.
//!
//! Any decode error or mismatch stops the run; nothing is skipped.

use std::ops::RangeInclusive;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tracing::{debug, info, trace, warn, Level};

use crate::error::CliError;
use crate::output::{print_info, print_single, print_success, OutputFormat};

use super::{CommandContext, EncodingMode};

/// Ranges larger than this print throughput when debug logging is on.
const DEBUG_METRICS_THRESHOLD: u64 = 9999;

/// Round-trip every value in an inclusive range.
#[derive(Debug, Args)]
pub struct VerifyCommand {
    /// First value (inclusive).
    #[arg(long, default_value_t = 0)]
    start: u64,

    /// Last value (inclusive).
    #[arg(long, default_value_t = 100_000)]
    end: u64,

    /// Pad to the full 12-symbol width.
    #[arg(long)]
    pad: bool,

    /// Domain prefix; prefixed values are always padded.
    #[arg(long, env = "B56_PREFIX")]
    prefix: Option<String>,

    /// Print elapsed time and throughput.
    #[arg(long)]
    metrics: bool,

    /// Print every value as `value => encoded` and `decoded <= encoded` (table format only).
    #[arg(long)]
    print: bool,
}

/// Result of a successful run.
#[derive(Debug, Clone, Serialize)]
pub struct VerifyReport {
    pub start: u64,
    pub end: u64,
    pub count: u64,
    #[serde(rename = "elapsed_ms", serialize_with = "serialize_duration_ms")]
    pub elapsed: Duration,
    /// Values per second, rounded.
    pub rate: u64,
}

fn serialize_duration_ms<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_f64(duration.as_secs_f64() * 1000.0)
}

impl VerifyReport {
    fn new(range: &RangeInclusive<u64>, count: u64, elapsed: Duration) -> Self {
        let secs = elapsed.as_secs_f64();
        let rate = if secs > 0.0 {
            (count as f64 / secs).round() as u64
        } else {
            count
        };

        Self {
            start: *range.start(),
            end: *range.end(),
            count,
            elapsed,
            rate,
        }
    }
}

impl VerifyCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        if self.start > self.end {
            return Err(CliError::InvalidRange {
                start: self.start,
                end: self.end,
            }
            .into());
        }

        let mode = EncodingMode::from_flags(self.pad, self.prefix)?;
        let range = self.start..=self.end;
        let echo = echoes_values(self.print, ctx.format);

        info!(start = self.start, end = self.end, ?mode, "Verifying range");

        let report = verify_range(range, &mode, |value, encoded, decoded| {
            if echo {
                println!("{value} => {encoded}");
                println!("{decoded} <= {encoded}");
            }
        })?;

        info!(
            count = report.count,
            elapsed_ms = report.elapsed.as_millis() as u64,
            rate = report.rate,
            "Range verified"
        );

        let show_metrics = self.metrics
            || (tracing::enabled!(Level::DEBUG) && report.count > DEBUG_METRICS_THRESHOLD);

        match ctx.format {
            OutputFormat::Json => print_single(&report),
            OutputFormat::Table => {
                print_success(&format!(
                    "Verified {} values ({}..={})",
                    report.count, report.start, report.end
                ));
                if show_metrics {
                    print_info(&format!(
                        "Generated {} base-56 IDs in {:?} at a rate of {} per second",
                        report.count, report.elapsed, report.rate
                    ));
                }
            }
        }

        Ok(())
    }
}

/// Whether `--print` lines go to stdout; JSON output stays parseable.
fn echoes_values(print: bool, format: OutputFormat) -> bool {
    if print && format == OutputFormat::Json {
        warn!("--print has no effect with --format json");
        return false;
    }
    print
}

/// Encode and decode every value in `range`, calling `on_value` after each
/// successful round-trip.
pub fn verify_range(
    range: RangeInclusive<u64>,
    mode: &EncodingMode,
    mut on_value: impl FnMut(u64, &str, u64),
) -> Result<VerifyReport, CliError> {
    let started = Instant::now();
    let mut count = 0u64;

    for value in range.clone() {
        let encoded = mode.encode(value);
        let decoded = mode.decode(&encoded).map_err(|source| CliError::RoundTrip {
            value,
            encoded: encoded.clone(),
            source,
        })?;

        trace!(value, %encoded, decoded, "Round-trip");

        if decoded != value {
            debug!(value, %encoded, decoded, "Round-trip mismatch");
            return Err(CliError::Mismatch {
                value,
                encoded,
                decoded,
            });
        }

        on_value(value, &encoded, decoded);
        count = count.saturating_add(1);
    }

    Ok(VerifyReport::new(&range, count, started.elapsed()))
}
