//! Time utilities: HH:MM:SS formatting, duration-spec parsing, compact
//! human-readable durations.

use crate::errors::{AppError, AppResult};

/// Format seconds as zero-padded `HH:MM:SS`. Hours are unbounded (a
/// 120-hour total renders as `120:00:00`, never wrapped).
pub fn format_hms(secs: i64) -> String {
    let s = secs.max(0);
    format!("{:02}:{:02}:{:02}", s / 3600, (s % 3600) / 60, s % 60)
}

/// Compact rendering for stats output, e.g. `2h 05m` or `45m`.
pub fn format_compact(secs: i64) -> String {
    let s = secs.max(0);
    let hours = s / 3600;
    let minutes = (s % 3600) / 60;
    if hours > 0 {
        format!("{}h {:02}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}

/// Parse a duration spec into seconds.
///
/// Accepted forms:
/// - bare seconds: `"90"`
/// - unit suffixes, combinable in h→m→s order: `"2h"`, `"45m"`, `"1h30m"`,
///   `"1h30m15s"`, `"90s"`
pub fn parse_duration_spec(spec: &str) -> AppResult<i64> {
    let s = spec.trim();
    if s.is_empty() {
        return Err(AppError::InvalidDuration(spec.to_string()));
    }

    // Bare integer → seconds.
    if let Ok(n) = s.parse::<i64>() {
        if n < 0 {
            return Err(AppError::InvalidDuration(spec.to_string()));
        }
        return Ok(n);
    }

    let mut total: i64 = 0;
    let mut number = String::new();
    let mut seen_unit = false;

    for c in s.chars() {
        if c.is_ascii_digit() {
            number.push(c);
            continue;
        }

        let value: i64 = number
            .parse()
            .map_err(|_| AppError::InvalidDuration(spec.to_string()))?;
        number.clear();

        let factor = match c {
            'h' | 'H' => 3600,
            'm' | 'M' => 60,
            's' | 'S' => 1,
            _ => return Err(AppError::InvalidDuration(spec.to_string())),
        };

        total += value * factor;
        seen_unit = true;
    }

    // Trailing digits without a unit ("1h30") are rejected.
    if !number.is_empty() || !seen_unit {
        return Err(AppError::InvalidDuration(spec.to_string()));
    }

    Ok(total)
}
