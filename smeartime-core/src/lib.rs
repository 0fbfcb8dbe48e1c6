//! Saturating fixed-point durations of Terrestrial Time.
//!
//! A [`Duration`] is a signed span of constant-length SI seconds, the base
//! unit shared by the TAI and GPST timescales. Unlike civil durations it
//! never ticks in smeared seconds; conversions between the two worlds go
//! through a leap table, never through this type.
//!
//! # Representation
//!
//! Durations count quarter-nanosecond ticks in an `i128`. The finite range
//! spans `-2^63` seconds through `2^63` seconds minus one tick, and two
//! sentinel values represent [`Duration::INFINITE`] and
//! [`Duration::NEG_INFINITE`]. Every operation saturates at the infinities
//! instead of wrapping, so arithmetic on out-of-range values degrades to a
//! signed "forever" rather than a wrong sign:
//!
//! ```
//! use smeartime_core::Duration;
//!
//! let max = Duration::seconds(i64::MAX);
//! assert_eq!(max + Duration::seconds(1), Duration::INFINITE);
//! assert_eq!(Duration::INFINITE + -Duration::INFINITE, Duration::INFINITE);
//! ```
//!
//! # Formatting and parsing
//!
//! [`format_duration`] renders the conventional `"72h3m0.5s"` grammar and
//! [`parse_duration`] accepts it back, bit-exactly:
//!
//! ```
//! use smeartime_core::{format_duration, parse_duration, Duration};
//!
//! let d = Duration::hours(72) + Duration::minutes(3) + Duration::milliseconds(500);
//! assert_eq!(format_duration(d), "72h3m0.5s");
//! assert_eq!(parse_duration("72h3m0.5s").unwrap(), d);
//! ```

pub mod constants;
mod duration;
mod errors;
mod format;

pub use duration::Duration;
pub use errors::ParseDurationError;
pub use format::{format_duration, parse_duration};
