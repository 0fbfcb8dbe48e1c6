//! Rendering and parsing of the `"72h3m0.5s"` duration grammar.
//!
//! Formatting walks the tick count with exact integer arithmetic, so every
//! representable fraction down to a quarter nanosecond prints with its full
//! value and nothing more ("0.25ns", "55.00000000025s"). Parsing accepts an
//! optional sign followed by either `inf`, a bare `0`, or a nonempty
//! sequence of `<number><unit>` tokens with units `ns`, `us`, `ms`, `s`,
//! `m`, `h` in any order. No whitespace anywhere; anything else fails.

use crate::constants::{
    TICKS_PER_HOUR, TICKS_PER_MICROSECOND, TICKS_PER_MILLISECOND, TICKS_PER_MINUTE,
    TICKS_PER_NANOSECOND, TICKS_PER_SECOND,
};
use crate::duration::Duration;
use crate::errors::ParseDurationError;
use std::fmt;
use std::str::FromStr;

/// Returns a string like `"72h3m0.5s"`, `"1ns"`, `"-0.25ns"`, `"inf"`.
///
/// Magnitudes of at least one second print as hours, minutes, and
/// fractional seconds with zero components omitted. Magnitudes under one
/// second print as a fraction of the largest of `ns`/`us`/`ms` in which the
/// value is at least one (or `ns` for anything below a nanosecond). Zero is
/// `"0"`.
pub fn format_duration(d: Duration) -> String {
    if d == Duration::INFINITE {
        return "inf".to_string();
    }
    if d == Duration::NEG_INFINITE {
        return "-inf".to_string();
    }
    if d == Duration::ZERO {
        return "0".to_string();
    }

    let mut out = String::new();
    if d.ticks() < 0 {
        out.push('-');
    }
    let mut mag = d.ticks().unsigned_abs();

    if mag < TICKS_PER_SECOND as u128 {
        let (unit_ticks, suffix) = if mag < TICKS_PER_MICROSECOND as u128 {
            (TICKS_PER_NANOSECOND as u128, "ns")
        } else if mag < TICKS_PER_MILLISECOND as u128 {
            (TICKS_PER_MICROSECOND as u128, "us")
        } else {
            (TICKS_PER_MILLISECOND as u128, "ms")
        };
        append_number_unit(&mut out, mag / unit_ticks, mag % unit_ticks, unit_ticks, suffix);
        return out;
    }

    let hours = mag / TICKS_PER_HOUR as u128;
    mag %= TICKS_PER_HOUR as u128;
    let minutes = mag / TICKS_PER_MINUTE as u128;
    mag %= TICKS_PER_MINUTE as u128;
    if hours != 0 {
        out.push_str(&hours.to_string());
        out.push('h');
    }
    if minutes != 0 {
        out.push_str(&minutes.to_string());
        out.push('m');
    }
    append_number_unit(
        &mut out,
        mag / TICKS_PER_SECOND as u128,
        mag % TICKS_PER_SECOND as u128,
        TICKS_PER_SECOND as u128,
        "s",
    );
    out
}

// Appends "<int>[.<fraction>]<suffix>", or nothing when the value is zero.
// The fraction frac_ticks / unit_ticks always terminates in decimal because
// every unit tick count is 4 * 10^k.
fn append_number_unit(out: &mut String, int_part: u128, frac_ticks: u128, unit_ticks: u128, suffix: &str) {
    if int_part == 0 && frac_ticks == 0 {
        return;
    }
    out.push_str(&int_part.to_string());
    if frac_ticks != 0 {
        out.push('.');
        let mut digits = String::new();
        let mut r = frac_ticks;
        while r != 0 {
            r *= 10;
            digits.push((b'0' + (r / unit_ticks) as u8) as char);
            r %= unit_ticks;
        }
        out.push_str(&digits);
    }
    out.push_str(suffix);
}

/// Parses the grammar produced by [`format_duration`].
///
/// Also reachable through `str::parse::<Duration>()`. Out-of-range values
/// saturate to the infinities; the round trip through [`format_duration`]
/// is exact for every finite duration.
pub fn parse_duration(s: &str) -> Result<Duration, ParseDurationError> {
    let bytes = s.as_bytes();
    let mut pos = 0;
    let mut negative = false;
    if let Some(&sign) = bytes.first() {
        if sign == b'+' || sign == b'-' {
            negative = sign == b'-';
            pos = 1;
        }
    }

    match &s[pos..] {
        "" => return Err(ParseDurationError::Empty),
        "0" => return Ok(Duration::ZERO),
        "inf" => {
            return Ok(if negative {
                Duration::NEG_INFINITE
            } else {
                Duration::INFINITE
            })
        }
        _ => {}
    }

    let mut total_ticks: i128 = 0;
    while pos < bytes.len() {
        let token_start = pos;

        let mut int_part: u128 = 0;
        let mut int_digits = 0usize;
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            int_part = int_part
                .saturating_mul(10)
                .saturating_add((bytes[pos] - b'0') as u128);
            int_digits += 1;
            pos += 1;
        }

        let mut frac_num: u128 = 0;
        let mut frac_den: u128 = 1;
        let mut frac_digits = 0usize;
        if pos < bytes.len() && bytes[pos] == b'.' {
            pos += 1;
            while pos < bytes.len() && bytes[pos].is_ascii_digit() {
                // Digits beyond what a tick can resolve are consumed but
                // contribute nothing.
                if frac_den <= 10u128.pow(18) {
                    frac_num = frac_num * 10 + (bytes[pos] - b'0') as u128;
                    frac_den *= 10;
                }
                frac_digits += 1;
                pos += 1;
            }
        }
        if int_digits == 0 && frac_digits == 0 {
            return Err(ParseDurationError::InvalidNumber(s[token_start..].to_string()));
        }

        let rest = &s[pos..];
        let unit_ticks: u128 = if let Some(r) = rest.strip_prefix("ns") {
            pos = s.len() - r.len();
            TICKS_PER_NANOSECOND as u128
        } else if let Some(r) = rest.strip_prefix("us") {
            pos = s.len() - r.len();
            TICKS_PER_MICROSECOND as u128
        } else if let Some(r) = rest.strip_prefix("ms") {
            pos = s.len() - r.len();
            TICKS_PER_MILLISECOND as u128
        } else if let Some(r) = rest.strip_prefix('s') {
            pos = s.len() - r.len();
            TICKS_PER_SECOND as u128
        } else if let Some(r) = rest.strip_prefix('m') {
            pos = s.len() - r.len();
            TICKS_PER_MINUTE as u128
        } else if let Some(r) = rest.strip_prefix('h') {
            pos = s.len() - r.len();
            TICKS_PER_HOUR as u128
        } else if rest.is_empty() {
            return Err(ParseDurationError::MissingUnit(s[token_start..].to_string()));
        } else {
            return Err(ParseDurationError::UnknownUnit(rest.to_string()));
        };

        let int_ticks = int_part.saturating_mul(unit_ticks);
        // frac_num < 10^19 and unit_ticks <= 1.44e13, so this product fits
        // u128 comfortably; round half up.
        let frac_ticks = (frac_num * unit_ticks + frac_den / 2) / frac_den;
        let token_ticks = int_ticks.saturating_add(frac_ticks);
        total_ticks =
            total_ticks.saturating_add(i128::try_from(token_ticks).unwrap_or(i128::MAX));
    }

    let d = Duration::from_ticks(total_ticks);
    Ok(if negative { -d } else { d })
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_duration(*self))
    }
}

impl fmt::Debug for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_duration(*self))
    }
}

impl FromStr for Duration {
    type Err = ParseDurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_duration(s)
    }
}
