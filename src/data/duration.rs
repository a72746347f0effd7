//! Reveal delay parsing and display.

use std::time::Duration;

use anyhow::{bail, Context, Result};

/// Suffix to milliseconds multiplier (longer suffixes first so "ms" wins over "s").
const UNITS: &[(&str, f64)] = &[("ms", 1.0), ("s", 1_000.0), ("m", 60_000.0)];

/// Parse a delay such as "1500ms", "2.2s", "1m" or a bare millisecond
/// count like "3000".
pub fn parse_delay(s: &str) -> Result<Duration> {
    let s = s.trim();
    if s.is_empty() {
        bail!("empty delay");
    }

    let (number, multiplier) = UNITS
        .iter()
        .find_map(|(suffix, multiplier)| s.strip_suffix(suffix).map(|n| (n.trim(), *multiplier)))
        .unwrap_or((s, 1.0));

    let value: f64 = number
        .parse()
        .with_context(|| format!("invalid delay: {s}"))?;
    if !value.is_finite() || value < 0.0 {
        bail!("delay must be a non-negative number: {s}");
    }

    Ok(Duration::from_micros((value * multiplier * 1_000.0).round() as u64))
}

/// Format a delay for display: "3s" and "2.2s" for whole seconds and
/// tenths, milliseconds for anything finer ("800ms", "2250ms").
pub fn format_delay(d: Duration) -> String {
    let millis = d.as_millis();
    if millis < 1_000 || millis % 100 != 0 {
        format!("{millis}ms")
    } else if millis % 1_000 == 0 {
        format!("{}s", millis / 1_000)
    } else {
        format!("{}.{}s", millis / 1_000, millis % 1_000 / 100)
    }
}
