//! Timepoints for the TAI, GPST, and smeared-UTC timescales.
//!
//! # Core types
//!
//! - [`TaiTime`] — International Atomic Time, epoch 1958-01-01 00:00:00 TAI.
//! - [`GpsTime`] — GPS Time, epoch 1980-01-06 00:00:00 GPST
//!   (= 1980-01-06 00:00:19 TAI).
//! - [`UtcTime`] — smeared civil time as an offset from the Unix epoch.
//! - [`TtInstant`] — the trait seam shared by the two TT-based timescales.
//!
//! TAI and GPST are both monotonic counts of SI seconds; converting
//! between them ([`to_tai_time`], [`to_gps_time`]) is a constant epoch
//! offset and needs no leap data. Converting either of them to [`UtcTime`]
//! does need leap data and lives in the leap-table crate.
//!
//! # Calendars and JDN
//!
//! The [`civil`] module holds the proleptic-Gregorian day arithmetic, and
//! [`jdn_to_time`] / [`time_to_jdn`] map integer Julian Day Numbers to the
//! noon-UTC instants the leap-second catalogs are written in:
//!
//! ```
//! use smeartime_scales::{jdn_to_time, UtcTime};
//!
//! assert_eq!(jdn_to_time(2_441_318), UtcTime::from_civil(1972, 1, 1, 12, 0, 0));
//! ```

pub mod civil;
mod format;
mod instant;
mod utc;

pub use civil::CivilDateTime;
pub use format::{format_time, format_time_with, format_utc, format_utc_with};
pub use instant::{
    tai_gps_epoch, tai_modern_utc_epoch, to_gps_time, to_tai_time, GpsTime, TaiTime, TtInstant,
    GPS_TAI_EPOCH_OFFSET,
};
pub use utc::{jdn_to_time, time_to_jdn, UtcTime, UNIX_EPOCH_JDN};
