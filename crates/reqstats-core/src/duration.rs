//! Human-readable duration rendering.
//!
//! Output follows the Go `time.Duration` text convention that existing stats
//! consumers already parse: `0s`, `850ns`, `1.5µs`, `12.25ms`, `1.5s`,
//! `2m3s`, `1h0m5.5s`. Trailing fractional zeros are trimmed.

use std::fmt::Write;
use std::time::Duration;

const NANOS_PER_MICRO: u128 = 1_000;
const NANOS_PER_MILLI: u128 = 1_000_000;
const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Render a duration as text.
pub fn format_duration(d: Duration) -> String {
    let nanos = d.as_nanos();
    if nanos == 0 {
        return "0s".to_string();
    }

    let mut out = String::new();

    // Sub-second values use the largest unit that keeps the integer part non-zero.
    if nanos < NANOS_PER_SEC {
        let (scale, unit) = if nanos < NANOS_PER_MICRO {
            (1, "ns")
        } else if nanos < NANOS_PER_MILLI {
            (NANOS_PER_MICRO, "µs")
        } else {
            (NANOS_PER_MILLI, "ms")
        };
        let _ = write!(out, "{}{}{}", nanos / scale, fraction(nanos % scale, scale), unit);
        return out;
    }

    let secs = nanos / NANOS_PER_SEC;
    let hours = secs / 3600;
    let mins = (secs / 60) % 60;

    if hours > 0 {
        let _ = write!(out, "{hours}h");
    }
    if hours > 0 || mins > 0 {
        let _ = write!(out, "{mins}m");
    }
    let _ = write!(
        out,
        "{}{}s",
        secs % 60,
        fraction(nanos % NANOS_PER_SEC, NANOS_PER_SEC)
    );
    out
}

/// Build a `Duration` from a nanosecond count wider than `u64`.
pub fn duration_from_nanos(nanos: u128) -> Duration {
    let secs = (nanos / NANOS_PER_SEC).min(u64::MAX as u128) as u64;
    let sub = (nanos % NANOS_PER_SEC) as u32;
    Duration::new(secs, sub)
}

/// `.5`, `.25`, ... for `rem / scale`; empty when there is no remainder.
fn fraction(rem: u128, scale: u128) -> String {
    if rem == 0 || scale == 1 {
        return String::new();
    }
    let width = scale.ilog10() as usize;
    let digits = format!("{rem:0width$}");
    format!(".{}", digits.trim_end_matches('0'))
}
