//! Wall-clock rendering of TAI, GPST, and smeared-UTC instants.
//!
//! Default formatting treats a timescale's own count as if it were a UTC
//! calendar count and appends the timescale label verbatim. That
//! reinterpretation is unsound across timescales by construction, but the
//! label makes the output unambiguous, which is all a wall-clock string is
//! for. Infinite pseudo-times render as fixed names such as
//! `"tai-infinite-future"`.
//!
//! [`format_time_with`] accepts a `strftime`-style format string, rendered
//! through chrono after `%Z` is replaced by the timescale label (`%%Z`
//! stays literal, surviving as the two-character sequence `%Z`). Instants
//! outside chrono's representable range fall back to the default format.

use crate::instant::{TtInstant, TaiTime, GpsTime};
use crate::utc::UtcTime;
use chrono::{DateTime, Utc};
use smeartime_core::constants::TICKS_PER_SECOND;
use smeartime_core::Duration;
use std::fmt::{self, Write as _};

const UTC_LABEL: &str = "UTC";
const UTC_INFINITE_FUTURE_NAME: &str = "utc-infinite-future";
const UTC_INFINITE_PAST_NAME: &str = "utc-infinite-past";

/// Formats a TT-based timepoint as `"1980-01-06 00:00:19 TAI"`.
pub fn format_time<T: TtInstant>(t: T) -> String {
    if t == T::infinite_future() {
        return T::INFINITE_FUTURE_NAME.to_string();
    }
    if t == T::infinite_past() {
        return T::INFINITE_PAST_NAME.to_string();
    }
    render_default(t.offset() + T::UNIX_EPOCH_SHIFT, T::LABEL)
}

/// Formats a TT-based timepoint with a user format string; `%Z` becomes
/// the timescale label, `%%Z` stays literal.
pub fn format_time_with<T: TtInstant>(format: &str, t: T) -> String {
    if t == T::infinite_future() {
        return T::INFINITE_FUTURE_NAME.to_string();
    }
    if t == T::infinite_past() {
        return T::INFINITE_PAST_NAME.to_string();
    }
    render_with(format, t.offset() + T::UNIX_EPOCH_SHIFT, T::LABEL)
}

/// Formats a smeared-UTC instant as `"1972-01-01 00:00:00 UTC"`.
pub fn format_utc(t: UtcTime) -> String {
    if t == UtcTime::infinite_future() {
        return UTC_INFINITE_FUTURE_NAME.to_string();
    }
    if t == UtcTime::infinite_past() {
        return UTC_INFINITE_PAST_NAME.to_string();
    }
    render_default(t.offset(), UTC_LABEL)
}

/// Formats a smeared-UTC instant with a user format string.
pub fn format_utc_with(format: &str, t: UtcTime) -> String {
    if t == UtcTime::infinite_future() {
        return UTC_INFINITE_FUTURE_NAME.to_string();
    }
    if t == UtcTime::infinite_past() {
        return UTC_INFINITE_PAST_NAME.to_string();
    }
    render_with(format, t.offset(), UTC_LABEL)
}

fn render_default(unix_like: Duration, label: &str) -> String {
    let civil = UtcTime::from_offset(unix_like).to_civil();
    let mut out = String::with_capacity(32);
    let _ = write!(
        out,
        "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
        civil.year, civil.month, civil.day, civil.hour, civil.minute, civil.second
    );
    if civil.subsec_ticks != 0 {
        out.push('.');
        let mut r = civil.subsec_ticks as u128;
        while r != 0 {
            r *= 10;
            out.push((b'0' + (r / TICKS_PER_SECOND as u128) as u8) as char);
            r %= TICKS_PER_SECOND as u128;
        }
    }
    out.push(' ');
    out.push_str(label);
    out
}

fn render_with(format: &str, unix_like: Duration, label: &str) -> String {
    let expanded = expand_zone(format, label);

    let secs = unix_like.floor(Duration::seconds(1)).to_int64_seconds();
    let subsec = unix_like - Duration::seconds(secs);
    let nanos = subsec.to_int64_nanoseconds() as u32;

    if let Some(dt) = DateTime::<Utc>::from_timestamp(secs, nanos) {
        let mut out = String::new();
        if write!(out, "{}", dt.format(&expanded)).is_ok() {
            return out;
        }
    }
    // Out of chrono's range, or an unrenderable specifier.
    render_default(unix_like, label)
}

// Replaces %Z with the label while leaving every other specifier, %%
// included, for the formatter. A trailing lone '%' is kept.
fn expand_zone(format: &str, label: &str) -> String {
    let mut out = String::with_capacity(format.len() + label.len());
    let mut saw_percent = false;
    for c in format.chars() {
        if saw_percent {
            if c == 'Z' {
                out.push_str(label);
            } else {
                out.push('%');
                out.push(c);
            }
            saw_percent = false;
        } else if c == '%' {
            saw_percent = true;
        } else {
            out.push(c);
        }
    }
    if saw_percent {
        out.push('%');
    }
    out
}

impl fmt::Display for TaiTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_time(*self))
    }
}

impl fmt::Debug for TaiTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_time(*self))
    }
}

impl fmt::Display for GpsTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_time(*self))
    }
}

impl fmt::Debug for GpsTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_time(*self))
    }
}

impl fmt::Display for UtcTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_utc(*self))
    }
}

impl fmt::Debug for UtcTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_utc(*self))
    }
}
