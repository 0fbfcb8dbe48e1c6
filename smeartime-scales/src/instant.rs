//! TAI and GPST timepoints.
//!
//! Both timescales tick in SI seconds of Terrestrial Time and differ only
//! in their epoch: TAI begins 1958-01-01 00:00:00 TAI, GPST begins
//! 1980-01-06 00:00:00 GPST, which is exactly 1980-01-06 00:00:19 TAI.
//! The two types are deliberately not interchangeable; conversion goes
//! through [`to_tai_time`] / [`to_gps_time`], which only add the constant
//! epoch offset and never consult a leap table.
//!
//! Proleptic values (before the epoch) exist for arithmetic convenience,
//! but the leap-table conversions will not smear them. Each timescale also
//! carries infinite-past and infinite-future pseudo-times, which propagate
//! through arithmetic via the saturating [`Duration`] algebra.
//!
//! ```
//! use smeartime_scales::{to_tai_time, GpsTime, TaiTime, TtInstant};
//! use smeartime_core::Duration;
//!
//! let gps = GpsTime::epoch() + Duration::hours(24);
//! let tai = to_tai_time(gps);
//! assert_eq!(tai - TaiTime::epoch(), Duration::seconds(8_040 * 86_400 + 19) + Duration::hours(24));
//! ```

use smeartime_core::Duration;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// The TAI time of the GPS epoch: 8 040 days after the TAI epoch, plus the
/// 10 s of TAI−UTC at the start of modern UTC and the 9 leap seconds
/// accumulated between 1972 and 1980.
pub const GPS_TAI_EPOCH_OFFSET: Duration = Duration::seconds(8_040 * 86_400 + 19);

/// A timepoint in a Terrestrial-Time-based timescale: an epoch plus a
/// [`Duration`] offset.
///
/// This is the trait seam between the two nominal timepoint types. It
/// carries the per-timescale constants (labels, epoch offsets) so that
/// conversions and formatting can be written once, generically.
pub trait TtInstant: Copy + Ord {
    /// Timescale label used by the formatter ("TAI", "GPST").
    const LABEL: &'static str;

    const INFINITE_FUTURE_NAME: &'static str;

    const INFINITE_PAST_NAME: &'static str;

    /// TAI time of this timescale's epoch, as an offset from the TAI epoch.
    const TAI_EPOCH_OFFSET: Duration;

    /// Shift from this timescale's epoch to the Unix epoch when the count
    /// is (deliberately, unsoundly) reinterpreted as a UTC calendar count
    /// for formatting. Whole days only; the seconds of TAI−UTC drift are
    /// not included, so the epoch formats as its conventional civil label.
    const UNIX_EPOCH_SHIFT: Duration;

    fn from_offset(offset: Duration) -> Self;

    /// Offset from this timescale's own epoch.
    fn offset(self) -> Duration;

    fn epoch() -> Self {
        Self::from_offset(Duration::ZERO)
    }

    fn infinite_future() -> Self {
        Self::from_offset(Duration::INFINITE)
    }

    fn infinite_past() -> Self {
        Self::from_offset(Duration::NEG_INFINITE)
    }

    fn is_finite(self) -> bool {
        self.offset().is_finite()
    }
}

/// An instant of International Atomic Time.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaiTime(Duration);

/// An instant of GPS Time.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GpsTime(Duration);

impl TtInstant for TaiTime {
    const LABEL: &'static str = "TAI";
    const INFINITE_FUTURE_NAME: &'static str = "tai-infinite-future";
    const INFINITE_PAST_NAME: &'static str = "tai-infinite-past";
    const TAI_EPOCH_OFFSET: Duration = Duration::ZERO;
    // The TAI epoch is 4 383 days before the Unix epoch.
    const UNIX_EPOCH_SHIFT: Duration = Duration::seconds(-4_383 * 86_400);

    fn from_offset(offset: Duration) -> Self {
        TaiTime(offset)
    }

    fn offset(self) -> Duration {
        self.0
    }
}

impl TtInstant for GpsTime {
    const LABEL: &'static str = "GPST";
    const INFINITE_FUTURE_NAME: &'static str = "gpst-infinite-future";
    const INFINITE_PAST_NAME: &'static str = "gpst-infinite-past";
    const TAI_EPOCH_OFFSET: Duration = GPS_TAI_EPOCH_OFFSET;
    // The GPS epoch is 3 657 days after the Unix epoch.
    const UNIX_EPOCH_SHIFT: Duration = Duration::seconds(3_657 * 86_400);

    fn from_offset(offset: Duration) -> Self {
        GpsTime(offset)
    }

    fn offset(self) -> Duration {
        self.0
    }
}

/// Converts any TT-based timepoint to TAI. Infinities map to the TAI
/// infinity of the same sign.
pub fn to_tai_time<T: TtInstant>(t: T) -> TaiTime {
    TaiTime(T::TAI_EPOCH_OFFSET + t.offset())
}

/// Converts any TT-based timepoint to GPST. Infinities map to the GPST
/// infinity of the same sign.
pub fn to_gps_time<T: TtInstant>(t: T) -> GpsTime {
    GpsTime(to_tai_time(t).0 - GPS_TAI_EPOCH_OFFSET)
}

/// The GPS epoch expressed in TAI: 1980-01-06 00:00:19 TAI.
pub fn tai_gps_epoch() -> TaiTime {
    TaiTime(GPS_TAI_EPOCH_OFFSET)
}

/// The modern UTC epoch expressed in TAI: 1972-01-01 00:00:10 TAI.
pub fn tai_modern_utc_epoch() -> TaiTime {
    TaiTime(Duration::seconds(5_113 * 86_400 + 10))
}

macro_rules! tt_instant_ops {
    ($t:ty) => {
        impl Add<Duration> for $t {
            type Output = $t;

            fn add(self, rhs: Duration) -> $t {
                Self(self.0 + rhs)
            }
        }

        impl Add<$t> for Duration {
            type Output = $t;

            fn add(self, rhs: $t) -> $t {
                rhs + self
            }
        }

        impl Sub<Duration> for $t {
            type Output = $t;

            fn sub(self, rhs: Duration) -> $t {
                Self(self.0 - rhs)
            }
        }

        impl Sub for $t {
            type Output = Duration;

            fn sub(self, rhs: $t) -> Duration {
                self.0 - rhs.0
            }
        }

        impl AddAssign<Duration> for $t {
            fn add_assign(&mut self, rhs: Duration) {
                *self = *self + rhs;
            }
        }

        impl SubAssign<Duration> for $t {
            fn sub_assign(&mut self, rhs: Duration) {
                *self = *self - rhs;
            }
        }
    };
}

tt_instant_ops!(TaiTime);
tt_instant_ops!(GpsTime);
