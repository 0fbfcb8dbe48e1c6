//! The smeared civil timescale.
//!
//! A [`UtcTime`] is an offset from the Unix epoch measured in *smeared*
//! seconds: during a leap smear its seconds are fractionally longer or
//! shorter than SI seconds, which is exactly what makes the civil day
//! always 86 400 of them. Because of that, arithmetic between `UtcTime`
//! and [`Duration`] is pure bookkeeping on the offset; relating a
//! `UtcTime` to TAI or GPST requires a leap table.
//!
//! Conversions below the modern UTC epoch (1972-01-01) are never smeared:
//! earlier UTC had rubber seconds and a 107.758 ms discontinuity at the
//! 1972 switchover.

use crate::civil::{civil_from_days, days_from_civil, CivilDateTime};
use smeartime_core::constants::{SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use smeartime_core::Duration;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Julian Day Number whose noon is the Unix epoch plus 12 hours.
pub const UNIX_EPOCH_JDN: i64 = 2_440_588;

/// An instant of smeared civil time, stored as a [`Duration`] offset from
/// 1970-01-01 00:00:00 UTC.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UtcTime(Duration);

impl UtcTime {
    /// 1970-01-01 00:00:00 UTC.
    pub const UNIX_EPOCH: UtcTime = UtcTime(Duration::ZERO);

    /// 1972-01-01 00:00:00 UTC, the start of leap-second UTC and the
    /// earliest unsmearable instant.
    pub const MODERN_UTC_EPOCH: UtcTime = UtcTime(Duration::seconds(63_072_000));

    /// 1980-01-06 00:00:00 UTC, the civil instant of the GPS epoch.
    pub const GPS_EPOCH: UtcTime = UtcTime(Duration::seconds(315_964_800));

    pub const fn from_offset(offset: Duration) -> UtcTime {
        UtcTime(offset)
    }

    /// Offset from the Unix epoch.
    pub const fn offset(self) -> Duration {
        self.0
    }

    pub fn infinite_future() -> UtcTime {
        UtcTime(Duration::INFINITE)
    }

    pub fn infinite_past() -> UtcTime {
        UtcTime(Duration::NEG_INFINITE)
    }

    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    /// Builds a UTC instant from proleptic-Gregorian civil fields.
    pub fn from_civil(year: i64, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> UtcTime {
        let days = days_from_civil(year, month, day);
        let seconds = days * SECONDS_PER_DAY
            + hour as i64 * SECONDS_PER_HOUR
            + minute as i64 * SECONDS_PER_MINUTE
            + second as i64;
        UtcTime(Duration::seconds(seconds))
    }

    /// Breaks a finite UTC instant into civil fields.
    pub fn to_civil(self) -> CivilDateTime {
        debug_assert!(self.is_finite());
        let secs = self.0.floor(Duration::seconds(1)).to_int64_seconds();
        let subsec_ticks = (self.0 - Duration::seconds(secs)) / (Duration::nanoseconds(1) / 4);

        let days = secs.div_euclid(SECONDS_PER_DAY);
        let second_of_day = secs.rem_euclid(SECONDS_PER_DAY);
        let (year, month, day) = civil_from_days(days);
        CivilDateTime {
            year,
            month,
            day,
            hour: (second_of_day / SECONDS_PER_HOUR) as u32,
            minute: (second_of_day % SECONDS_PER_HOUR / SECONDS_PER_MINUTE) as u32,
            second: (second_of_day % SECONDS_PER_MINUTE) as u32,
            subsec_ticks: subsec_ticks as u32,
        }
    }
}

/// Noon UTC of the day labeled by the given Julian Day Number.
///
/// Computed in 64-bit arithmetic so the whole signed 32-bit JDN range maps
/// without overflow.
pub fn jdn_to_time(jdn: i32) -> UtcTime {
    UtcTime(Duration::seconds(
        (jdn as i64 - UNIX_EPOCH_JDN) * SECONDS_PER_DAY + SECONDS_PER_DAY / 2,
    ))
}

/// Julian Day Number of a noon-aligned UTC instant. Meaningful only for
/// times at UTC noon.
pub fn time_to_jdn(t: UtcTime) -> i64 {
    let secs = t.0.floor(Duration::seconds(1)).to_int64_seconds();
    (secs - SECONDS_PER_DAY / 2).div_euclid(SECONDS_PER_DAY) + UNIX_EPOCH_JDN
}

impl Add<Duration> for UtcTime {
    type Output = UtcTime;

    fn add(self, rhs: Duration) -> UtcTime {
        UtcTime(self.0 + rhs)
    }
}

impl Add<UtcTime> for Duration {
    type Output = UtcTime;

    fn add(self, rhs: UtcTime) -> UtcTime {
        rhs + self
    }
}

impl Sub<Duration> for UtcTime {
    type Output = UtcTime;

    fn sub(self, rhs: Duration) -> UtcTime {
        UtcTime(self.0 - rhs)
    }
}

impl Sub for UtcTime {
    type Output = Duration;

    fn sub(self, rhs: UtcTime) -> Duration {
        self.0 - rhs.0
    }
}

impl AddAssign<Duration> for UtcTime {
    fn add_assign(&mut self, rhs: Duration) {
        *self = *self + rhs;
    }
}

impl SubAssign<Duration> for UtcTime {
    fn sub_assign(&mut self, rhs: Duration) {
        *self = *self - rhs;
    }
}
