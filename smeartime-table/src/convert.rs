//! The conversion queries: smear, unsmear, and their future-proof forms.
//!
//! Each pair of consecutive entries bounds a *segment*. In an unsmeared
//! segment `utc - tai` is constant; in a smear segment the UTC span is
//! 86 400 smeared seconds while the TAI span is `86 400 + smear` SI
//! seconds, and the maps interpolate linearly between the endpoints. The
//! interpolation correction is computed with exact tick arithmetic
//! ([`Duration::div_rounded`]), which keeps round trips bit-exact.
//!
//! Past the expiration, the future-proof queries extend the table with two
//! hypothetical continuations, one assuming a negative leap second at
//! every month end since expiration and one assuming a positive one, and
//! interpolate in both. The exact queries simply demand that the interval
//! collapse to a point.

use crate::table::{LeapTable, LeapTableEntry};
use smeartime_core::constants::SECONDS_PER_DAY;
use smeartime_core::Duration;
use smeartime_scales::civil::{civil_from_days, days_from_civil, last_day_of_month, CivilDateTime};
use smeartime_scales::{tai_gps_epoch, to_gps_time, to_tai_time, GpsTime, TaiTime, TtInstant, UtcTime};

impl LeapTable {
    /// Converts a smeared UTC time to TAI, if it is within the table.
    pub fn unsmear(&self, utc: UtcTime) -> Option<TaiTime> {
        let (lo, hi) = self.future_proof_unsmear(utc);
        (lo == hi).then_some(lo)
    }

    /// Converts a smeared UTC time to GPST, if it is within the table and
    /// not before the GPS epoch.
    pub fn unsmear_to_gps(&self, utc: UtcTime) -> Option<GpsTime> {
        let (lo, hi) = self.future_proof_unsmear_to_gps(utc);
        (lo == hi).then_some(lo)
    }

    /// Converts a TAI or GPST time to smeared UTC, if it is within the
    /// table.
    pub fn smear<T: TtInstant>(&self, t: T) -> Option<UtcTime> {
        let (lo, hi) = self.future_proof_smear(t);
        (lo == hi).then_some(lo)
    }

    /// The earliest and latest TAI times consistent with the given UTC
    /// time. Inside the table the endpoints are equal; past the
    /// expiration each possible leap month widens the interval by ±1 s
    /// (accruing at ±250 ms per 6 h across a potential smear window);
    /// before the modern UTC epoch the interval is universal.
    pub fn future_proof_unsmear(&self, utc: UtcTime) -> (TaiTime, TaiTime) {
        if utc == UtcTime::infinite_future() {
            return (TaiTime::infinite_future(), TaiTime::infinite_future());
        }
        if utc == UtcTime::infinite_past() {
            return (TaiTime::infinite_past(), TaiTime::infinite_past());
        }

        let expiration = self.entries[0];
        if utc <= expiration.utc {
            for i in 1..self.entries.len() {
                if utc >= self.entries[i].utc {
                    let tai = unsmear_in_segment(&self.entries[i - 1], utc);
                    return (tai, tai);
                }
            }
            // Ran past the modern UTC epoch; not convertible.
            return (TaiTime::infinite_past(), TaiTime::infinite_future());
        }

        let (neg, pos) = advance(&expiration, utc);
        (
            unsmear_in_segment(&neg, utc),
            unsmear_in_segment(&pos, utc),
        )
    }

    /// [`LeapTable::future_proof_unsmear`] continued to GPST; intervals
    /// reaching below the GPS epoch become universal.
    pub fn future_proof_unsmear_to_gps(&self, utc: UtcTime) -> (GpsTime, GpsTime) {
        if utc == UtcTime::infinite_future() {
            return (GpsTime::infinite_future(), GpsTime::infinite_future());
        }
        if utc == UtcTime::infinite_past() {
            return (GpsTime::infinite_past(), GpsTime::infinite_past());
        }
        let (lo, hi) = self.future_proof_unsmear(utc);
        if lo < tai_gps_epoch() {
            // GPST does not extend to times before its epoch.
            return (GpsTime::infinite_past(), GpsTime::infinite_future());
        }
        (to_gps_time(lo), to_gps_time(hi))
    }

    /// The earliest and latest smeared UTC times consistent with the given
    /// TAI or GPST time.
    pub fn future_proof_smear<T: TtInstant>(&self, t: T) -> (UtcTime, UtcTime) {
        if t == T::infinite_future() {
            return (UtcTime::infinite_future(), UtcTime::infinite_future());
        }
        if t == T::infinite_past() {
            return (UtcTime::infinite_past(), UtcTime::infinite_past());
        }
        // Proleptic times cannot be smeared.
        if t < T::epoch() {
            return (UtcTime::infinite_past(), UtcTime::infinite_future());
        }

        let tai = to_tai_time(t);
        let expiration = self.entries[0];
        if tai <= expiration.tai {
            for i in 1..self.entries.len() {
                if tai >= self.entries[i].tai {
                    let utc = smear_in_segment(&self.entries[i - 1], tai);
                    return (utc, utc);
                }
            }
            return (UtcTime::infinite_past(), UtcTime::infinite_future());
        }

        // Project the TAI displacement onto the UTC axis to pick the
        // hypothetical boundary, then interpolate against both
        // continuations.
        let (neg, pos) = advance(&expiration, expiration.utc + (tai - expiration.tai));
        (
            smear_in_segment(&pos, tai),
            smear_in_segment(&neg, tai),
        )
    }
}

// UTC -> TAI within the segment ending at `e`. The fractional position of
// `utc` in a smear window is its displacement over 86 400 smeared seconds.
fn unsmear_in_segment(e: &LeapTableEntry, utc: UtcTime) -> TaiTime {
    let d = e.utc - utc;
    let mut tai = e.tai - d;
    if e.smear != 0 {
        let correction = d.div_rounded(SECONDS_PER_DAY);
        if e.smear > 0 {
            tai -= correction;
        } else {
            tai += correction;
        }
    }
    tai
}

// TAI -> UTC within the segment ending at `e`. A smear window spans
// 86 400 + smear SI seconds. The displacement may be slightly negative
// for hypothetical post-expiration windows, where the boundary's TAI
// already carries the accumulated month uncertainty.
fn smear_in_segment(e: &LeapTableEntry, tai: TaiTime) -> UtcTime {
    let d = e.tai - tai;
    let mut utc = e.utc - d;
    if e.smear != 0 {
        let correction = d.div_rounded(SECONDS_PER_DAY + e.smear as i64);
        if e.smear > 0 {
            utc += correction;
        } else {
            utc -= correction;
        }
    }
    utc
}

// True within the last twelve hours of a month, i.e. the first half of a
// potential smear window.
fn is_just_before_month_end(c: &CivilDateTime) -> bool {
    c.hour >= 12 && c.day == last_day_of_month(c.year, c.month)
}

// Extends the expiration entry `e` to cover `t`, returning hypothetical
// boundary entries as if a leap second happened at every month end in
// between: one table where they were all negative, one where they were
// all positive.
fn advance(e: &LeapTableEntry, t: UtcTime) -> (LeapTableEntry, LeapTableEntry) {
    debug_assert!(t > e.utc);
    debug_assert!(e.smear == 0);

    let e_civil = e.utc.to_civil();
    let t_civil = t.to_civil();

    let mut leaps =
        (t_civil.year - e_civil.year) * 12 + t_civil.month as i64 - e_civil.month as i64;

    let (boundary, smear) = if is_just_before_month_end(&t_civil) {
        // First half of a possible smear window: it ends at noon on the
        // first day of the next month, and that month end counts.
        leaps += 1;
        let (year, month) = if t_civil.month == 12 {
            (t_civil.year + 1, 1)
        } else {
            (t_civil.year, t_civil.month + 1)
        };
        (UtcTime::from_civil(year, month, 1, 12, 0, 0), 1i8)
    } else if t_civil.day == 1 && t_civil.hour < 12 {
        // Second half of a possible smear window: it ends at noon today.
        (
            UtcTime::from_civil(t_civil.year, t_civil.month, 1, 12, 0, 0),
            1,
        )
    } else {
        // Not inside a window; anchor at noon of the following day.
        let (year, month, day) =
            civil_from_days(days_from_civil(t_civil.year, t_civil.month, t_civil.day) + 1);
        (UtcTime::from_civil(year, month, day, 12, 0, 0), 0)
    };

    let advanced = boundary - e.utc;
    let neg = LeapTableEntry {
        utc: boundary,
        tai: e.tai + advanced - Duration::seconds(leaps),
        smear: -smear,
    };
    let pos = LeapTableEntry {
        utc: boundary,
        tai: e.tai + advanced + Duration::seconds(leaps),
        smear,
    };
    (neg, pos)
}
