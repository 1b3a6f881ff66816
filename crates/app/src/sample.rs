use anyhow::{Context, Result};
use epochms_core::ports::Clock;
use epochms_core::{now_millis_from, Timestamp};
use std::io::{self, ErrorKind, Write};
use tracing::debug;

use crate::cli::Unit;
use crate::config::OutputConfig;

pub fn format_timestamp(ts: Timestamp, unit: Unit) -> String {
    match unit {
        Unit::Millis => ts.as_millis().to_string(),
        Unit::Seconds => ts.as_secs().to_string(),
    }
}

/// Sample `clock` `output.count` times, one line per sample
///
/// A reader that hangs up early (`epochms --count 1000 | head -1`) ends the
/// output without an error.
pub fn write_samples<W: Write>(
    clock: &dyn Clock,
    output: &OutputConfig,
    out: &mut W,
) -> Result<()> {
    for i in 0..output.count {
        let ts = now_millis_from(clock).context("Failed to read the realtime clock")?;
        debug!(sample = i, millis = ts.as_millis(), "Sampled clock");
        let written = writeln!(out, "{}", format_timestamp(ts, output.unit));
        if closed_early(written).context("Failed to write timestamp")? {
            debug!(sample = i, "Output closed, stopping");
            return Ok(());
        }
    }
    closed_early(out.flush()).context("Failed to flush output")?;
    Ok(())
}

fn closed_early(result: io::Result<()>) -> io::Result<bool> {
    match result {
        Ok(()) => Ok(false),
        Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(true),
        Err(e) => Err(e),
    }
}
