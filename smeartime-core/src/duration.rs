//! The saturating fixed-point duration type.
//!
//! Internally a [`Duration`] is a single `i128` count of quarter-nanosecond
//! ticks. `i128::MAX` and `i128::MIN` are reserved as the infinity
//! sentinels, which keeps the derived total ordering correct without a
//! custom comparator. Finite values occupy
//! `[i64::MIN * 4e9, i64::MAX * 4e9 + (4e9 - 1)]`, i.e. exactly −2⁶³
//! seconds through 2⁶³ seconds minus one tick.
//!
//! All arithmetic saturates: any result past the finite range becomes the
//! infinity of the correct sign, and any operation with an infinite operand
//! stays infinite. Mixed-sign infinite sums keep the left operand's sign,
//! so `INFINITE + -INFINITE == INFINITE` (there is no NaN duration).

use crate::constants::{
    TICKS_PER_HOUR, TICKS_PER_MICROSECOND, TICKS_PER_MILLISECOND, TICKS_PER_MINUTE,
    TICKS_PER_NANOSECOND, TICKS_PER_SECOND,
};
use std::ops::{Add, AddAssign, Div, Mul, Neg, Rem, Sub, SubAssign};

const MAX_FINITE_TICKS: i128 = i64::MAX as i128 * TICKS_PER_SECOND + (TICKS_PER_SECOND - 1);
const MIN_FINITE_TICKS: i128 = i64::MIN as i128 * TICKS_PER_SECOND;

const INFINITE_TICKS: i128 = i128::MAX;
const NEG_INFINITE_TICKS: i128 = i128::MIN;

/// A signed span of Terrestrial Time with quarter-nanosecond resolution.
///
/// See the [crate docs](crate) for the representation and saturation rules.
/// The default value is the zero duration.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Duration {
    ticks: i128,
}

impl Duration {
    /// The zero-length duration.
    pub const ZERO: Duration = Duration { ticks: 0 };

    /// The duration longer than every finite duration.
    pub const INFINITE: Duration = Duration {
        ticks: INFINITE_TICKS,
    };

    /// The duration shorter than every finite duration.
    pub const NEG_INFINITE: Duration = Duration {
        ticks: NEG_INFINITE_TICKS,
    };

    pub(crate) const fn from_ticks(ticks: i128) -> Duration {
        if ticks > MAX_FINITE_TICKS {
            Duration::INFINITE
        } else if ticks < MIN_FINITE_TICKS {
            Duration::NEG_INFINITE
        } else {
            Duration { ticks }
        }
    }

    pub(crate) const fn ticks(self) -> i128 {
        self.ticks
    }

    // Integer factories. Seconds and finer cannot overflow the finite
    // range; minutes and hours saturate.

    pub const fn nanoseconds(n: i64) -> Duration {
        Duration {
            ticks: n as i128 * TICKS_PER_NANOSECOND,
        }
    }

    pub const fn microseconds(n: i64) -> Duration {
        Duration {
            ticks: n as i128 * TICKS_PER_MICROSECOND,
        }
    }

    pub const fn milliseconds(n: i64) -> Duration {
        Duration {
            ticks: n as i128 * TICKS_PER_MILLISECOND,
        }
    }

    pub const fn seconds(n: i64) -> Duration {
        Duration {
            ticks: n as i128 * TICKS_PER_SECOND,
        }
    }

    pub const fn minutes(n: i64) -> Duration {
        Duration::from_ticks(n as i128 * TICKS_PER_MINUTE)
    }

    pub const fn hours(n: i64) -> Duration {
        Duration::from_ticks(n as i128 * TICKS_PER_HOUR)
    }

    // Floating factories, rounding half away from zero to the nearest tick.
    // `seconds_f64(0.125e-9)` is one tick; anything closer to zero is zero.

    pub fn nanoseconds_f64(n: f64) -> Duration {
        Duration::from_f64_ticks(n * TICKS_PER_NANOSECOND as f64)
    }

    pub fn microseconds_f64(n: f64) -> Duration {
        Duration::from_f64_ticks(n * TICKS_PER_MICROSECOND as f64)
    }

    pub fn milliseconds_f64(n: f64) -> Duration {
        Duration::from_f64_ticks(n * TICKS_PER_MILLISECOND as f64)
    }

    pub fn seconds_f64(n: f64) -> Duration {
        Duration::from_f64_ticks(n * TICKS_PER_SECOND as f64)
    }

    pub fn minutes_f64(n: f64) -> Duration {
        Duration::from_f64_ticks(n * TICKS_PER_MINUTE as f64)
    }

    pub fn hours_f64(n: f64) -> Duration {
        Duration::from_f64_ticks(n * TICKS_PER_HOUR as f64)
    }

    fn from_f64_ticks(t: f64) -> Duration {
        if t.is_nan() {
            return Duration::INFINITE;
        }
        // MAX_FINITE_TICKS rounds up when cast to f64, so >= catches every
        // value past the finite range. MIN_FINITE_TICKS is exactly
        // representable and itself finite.
        if t >= MAX_FINITE_TICKS as f64 {
            return Duration::INFINITE;
        }
        if t < MIN_FINITE_TICKS as f64 {
            return Duration::NEG_INFINITE;
        }
        Duration::from_ticks(t.round() as i128)
    }

    pub const fn is_finite(self) -> bool {
        self.ticks != INFINITE_TICKS && self.ticks != NEG_INFINITE_TICKS
    }

    pub const fn is_infinite(self) -> bool {
        !self.is_finite()
    }

    // Truncating integer converters. Infinities saturate to the i64 limits;
    // finite out-of-range nanosecond counts do too.

    pub fn to_int64_nanoseconds(self) -> i64 {
        self.to_int64(TICKS_PER_NANOSECOND)
    }

    pub fn to_int64_microseconds(self) -> i64 {
        self.to_int64(TICKS_PER_MICROSECOND)
    }

    pub fn to_int64_milliseconds(self) -> i64 {
        self.to_int64(TICKS_PER_MILLISECOND)
    }

    pub fn to_int64_seconds(self) -> i64 {
        self.to_int64(TICKS_PER_SECOND)
    }

    pub fn to_int64_minutes(self) -> i64 {
        self.to_int64(TICKS_PER_MINUTE)
    }

    pub fn to_int64_hours(self) -> i64 {
        self.to_int64(TICKS_PER_HOUR)
    }

    fn to_int64(self, unit_ticks: i128) -> i64 {
        if self.ticks == INFINITE_TICKS {
            return i64::MAX;
        }
        if self.ticks == NEG_INFINITE_TICKS {
            return i64::MIN;
        }
        (self.ticks / unit_ticks).clamp(i64::MIN as i128, i64::MAX as i128) as i64
    }

    pub fn to_f64_nanoseconds(self) -> f64 {
        self.to_f64(TICKS_PER_NANOSECOND)
    }

    pub fn to_f64_microseconds(self) -> f64 {
        self.to_f64(TICKS_PER_MICROSECOND)
    }

    pub fn to_f64_milliseconds(self) -> f64 {
        self.to_f64(TICKS_PER_MILLISECOND)
    }

    pub fn to_f64_seconds(self) -> f64 {
        self.to_f64(TICKS_PER_SECOND)
    }

    pub fn to_f64_minutes(self) -> f64 {
        self.to_f64(TICKS_PER_MINUTE)
    }

    pub fn to_f64_hours(self) -> f64 {
        self.to_f64(TICKS_PER_HOUR)
    }

    fn to_f64(self, unit_ticks: i128) -> f64 {
        if self.ticks == INFINITE_TICKS {
            return f64::INFINITY;
        }
        if self.ticks == NEG_INFINITE_TICKS {
            return f64::NEG_INFINITY;
        }
        self.ticks as f64 / unit_ticks as f64
    }

    /// Integer division with remainder: `num == q * den + rem` with the
    /// quotient truncated toward zero and clamped to the `i64` range.
    ///
    /// Degenerate operands follow the saturation rules: an infinite
    /// dividend keeps itself as the remainder and yields `i64::MAX` when
    /// the operand signs agree (else `i64::MIN`); a finite dividend over an
    /// infinite divisor is `(0, num)`; division by zero yields the
    /// saturated quotient with an infinite remainder signed like the
    /// dividend.
    pub fn idiv(self, den: Duration) -> (i64, Duration) {
        if self.is_infinite() {
            let q = if (self.ticks > 0) == (den.ticks >= 0) {
                i64::MAX
            } else {
                i64::MIN
            };
            return (q, self);
        }
        if den.is_infinite() {
            return (0, self);
        }
        if den.ticks == 0 {
            return if self.ticks >= 0 {
                (i64::MAX, Duration::INFINITE)
            } else {
                (i64::MIN, Duration::NEG_INFINITE)
            };
        }
        let q = self.ticks / den.ticks;
        if (i64::MIN as i128..=i64::MAX as i128).contains(&q) {
            return (
                q as i64,
                Duration {
                    ticks: self.ticks % den.ticks,
                },
            );
        }
        // Quotient saturates. A clamped quotient implies |den| < 1 s, so
        // the products below stay well inside i128.
        let q = if q > 0 { i64::MAX } else { i64::MIN };
        (q, Duration::from_ticks(self.ticks - q as i128 * den.ticks))
    }

    /// Floating division. IEEE semantics, except that a zero divisor and
    /// the indeterminate `INF / INF` forms return infinities (by dividend
    /// sign and sign agreement respectively) instead of NaN.
    pub fn fdiv(self, den: Duration) -> f64 {
        if den.ticks == 0 {
            return if self.ticks >= 0 {
                f64::INFINITY
            } else {
                f64::NEG_INFINITY
            };
        }
        if self.is_infinite() {
            return if (self.ticks > 0) == (den.ticks > 0) {
                f64::INFINITY
            } else {
                f64::NEG_INFINITY
            };
        }
        if den.is_infinite() {
            return 0.0;
        }
        self.ticks as f64 / den.ticks as f64
    }

    /// Scalar division rounded half away from zero to the nearest tick,
    /// where `/` truncates. This is the exact interpolation primitive the
    /// smear engine uses for `displacement / window_seconds`.
    pub fn div_rounded(self, rhs: i64) -> Duration {
        if self.is_infinite() {
            return if rhs < 0 { -self } else { self };
        }
        if rhs == 0 {
            return if self.ticks < 0 {
                Duration::NEG_INFINITE
            } else {
                Duration::INFINITE
            };
        }
        let den = rhs as i128;
        let q = self.ticks / den;
        let r = self.ticks % den;
        if 2 * r.abs() >= den.abs() {
            let bump = if (self.ticks < 0) != (den < 0) { -1 } else { 1 };
            Duration { ticks: q + bump }
        } else {
            Duration { ticks: q }
        }
    }

    /// Truncates toward zero to a multiple of `unit`.
    pub fn trunc(self, unit: Duration) -> Duration {
        self - self % unit
    }

    /// Rounds down to a multiple of `unit`.
    pub fn floor(self, unit: Duration) -> Duration {
        let t = self.trunc(unit);
        if t <= self {
            t
        } else {
            t - unit.abs()
        }
    }

    /// Rounds up to a multiple of `unit`.
    pub fn ceil(self, unit: Duration) -> Duration {
        let t = self.trunc(unit);
        if t >= self {
            t
        } else {
            t + unit.abs()
        }
    }

    /// Absolute value. The minimum finite duration saturates to
    /// [`Duration::INFINITE`].
    pub fn abs(self) -> Duration {
        if self < Duration::ZERO {
            -self
        } else {
            self
        }
    }
}

impl Add for Duration {
    type Output = Duration;

    fn add(self, rhs: Duration) -> Duration {
        if self.is_infinite() {
            return self;
        }
        if rhs.is_infinite() {
            return rhs;
        }
        Duration::from_ticks(self.ticks + rhs.ticks)
    }
}

impl Sub for Duration {
    type Output = Duration;

    fn sub(self, rhs: Duration) -> Duration {
        if self.is_infinite() {
            return self;
        }
        if rhs.is_infinite() {
            return -rhs;
        }
        Duration::from_ticks(self.ticks - rhs.ticks)
    }
}

impl AddAssign for Duration {
    fn add_assign(&mut self, rhs: Duration) {
        *self = *self + rhs;
    }
}

impl SubAssign for Duration {
    fn sub_assign(&mut self, rhs: Duration) {
        *self = *self - rhs;
    }
}

impl Neg for Duration {
    type Output = Duration;

    fn neg(self) -> Duration {
        match self.ticks {
            INFINITE_TICKS => Duration::NEG_INFINITE,
            NEG_INFINITE_TICKS => Duration::INFINITE,
            t => Duration::from_ticks(-t),
        }
    }
}

impl Mul<i64> for Duration {
    type Output = Duration;

    fn mul(self, rhs: i64) -> Duration {
        if self.is_infinite() {
            // A zero scalar keeps the infinity; only the sign can change.
            return if rhs < 0 { -self } else { self };
        }
        match self.ticks.checked_mul(rhs as i128) {
            Some(t) => Duration::from_ticks(t),
            None => {
                if (self.ticks < 0) != (rhs < 0) {
                    Duration::NEG_INFINITE
                } else {
                    Duration::INFINITE
                }
            }
        }
    }
}

impl Mul<Duration> for i64 {
    type Output = Duration;

    fn mul(self, rhs: Duration) -> Duration {
        rhs * self
    }
}

impl Mul<f64> for Duration {
    type Output = Duration;

    fn mul(self, rhs: f64) -> Duration {
        if self.is_infinite() {
            return if rhs.is_sign_negative() { -self } else { self };
        }
        Duration::from_f64_ticks(self.ticks as f64 * rhs)
    }
}

impl Mul<Duration> for f64 {
    type Output = Duration;

    fn mul(self, rhs: Duration) -> Duration {
        rhs * self
    }
}

impl Div<i64> for Duration {
    type Output = Duration;

    fn div(self, rhs: i64) -> Duration {
        if self.is_infinite() {
            return if rhs < 0 { -self } else { self };
        }
        if rhs == 0 {
            return if self.ticks < 0 {
                Duration::NEG_INFINITE
            } else {
                Duration::INFINITE
            };
        }
        Duration {
            ticks: self.ticks / rhs as i128,
        }
    }
}

impl Div<f64> for Duration {
    type Output = Duration;

    fn div(self, rhs: f64) -> Duration {
        if self.is_infinite() {
            return if rhs.is_sign_negative() { -self } else { self };
        }
        if rhs == 0.0 {
            // The zero's own sign participates, as in IEEE division.
            let negative = (self.ticks < 0) != rhs.is_sign_negative();
            return if negative {
                Duration::NEG_INFINITE
            } else {
                Duration::INFINITE
            };
        }
        Duration::from_f64_ticks(self.ticks as f64 / rhs)
    }
}

/// Quotient of two durations, truncated toward zero; the companion of
/// [`Duration::idiv`].
impl Div<Duration> for Duration {
    type Output = i64;

    fn div(self, rhs: Duration) -> i64 {
        self.idiv(rhs).0
    }
}

/// Remainder of [`Duration::idiv`]: `a % b` has the sign of `a`, and
/// `a % ±INFINITE == a` while `±INFINITE % b == ±INFINITE`.
impl Rem for Duration {
    type Output = Duration;

    fn rem(self, rhs: Duration) -> Duration {
        self.idiv(rhs).1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ANY: Duration = Duration::seconds(1);
    const INF: Duration = Duration::INFINITE;

    fn qns() -> Duration {
        Duration::nanoseconds(1) / 4
    }

    #[test]
    fn test_factories_agree_across_units() {
        assert_eq!(Duration::ZERO, Duration::seconds(0));
        assert_eq!(Duration::ZERO, Duration::default());
        assert_eq!(Duration::nanoseconds(1_000), Duration::microseconds(1));
        assert_eq!(Duration::microseconds(1_000), Duration::milliseconds(1));
        assert_eq!(Duration::milliseconds(1_000), Duration::seconds(1));
        assert_eq!(Duration::seconds(60), Duration::minutes(1));
        assert_eq!(Duration::minutes(60), Duration::hours(1));
    }

    #[test]
    fn test_factory_saturation() {
        assert!(INF > Duration::seconds(i64::MAX));
        assert!(-INF < Duration::seconds(i64::MIN));

        assert_eq!(INF, Duration::minutes(i64::MAX));
        assert_eq!(-INF, Duration::minutes(i64::MIN));
        assert!(INF > Duration::minutes(i64::MAX / 60));
        assert!(-INF < Duration::minutes(i64::MIN / 60));

        assert_eq!(INF, Duration::hours(i64::MAX));
        assert_eq!(-INF, Duration::hours(i64::MIN));
        assert!(INF > Duration::hours(i64::MAX / 3_600));
        assert!(-INF < Duration::hours(i64::MIN / 3_600));
    }

    #[test]
    fn test_group_axioms_for_finite_values() {
        let a = Duration::seconds(7) + Duration::nanoseconds(3);
        let b = Duration::milliseconds(-41);
        let c = Duration::hours(2);

        assert_eq!(a + b, b + a);
        assert_eq!((a + b) + c, a + (b + c));
        assert_eq!(a + Duration::ZERO, a);
        assert_eq!(a - a, Duration::ZERO);
        assert_eq!(a + -a, Duration::ZERO);
        assert_eq!(-(-a), a);
    }

    #[test]
    fn test_infinity_addition_and_subtraction() {
        let sec_max = Duration::seconds(i64::MAX);
        let sec_min = Duration::seconds(i64::MIN);

        assert_eq!(INF, INF + INF);
        assert_eq!(INF, INF + -INF);
        assert_eq!(-INF, -INF + INF);
        assert_eq!(-INF, -INF + -INF);
        assert_eq!(INF, INF + ANY);
        assert_eq!(INF, ANY + INF);
        assert_eq!(-INF, ANY + -INF);

        assert_eq!(INF, INF - INF);
        assert_eq!(-INF, ANY - INF);
        assert_eq!(INF, ANY - -INF);

        assert_eq!(INF, sec_max + Duration::seconds(1));
        assert_eq!(INF, sec_max + sec_max);
        assert_eq!(-INF, sec_min + -Duration::seconds(1));
        assert_eq!(-INF, sec_min - Duration::seconds(1));
        assert_eq!(INF, sec_max - -sec_max);

        let almost_inf = sec_max + Duration::nanoseconds(999_999_999);
        assert!(almost_inf < INF);
    }

    #[test]
    fn test_negation_saturates_at_the_finite_floor() {
        assert_eq!(-(-INF), INF);
        assert_eq!(-INF, -Duration::INFINITE);
        assert_eq!(INF, -Duration::seconds(i64::MIN));
        assert_eq!(INF, Duration::seconds(i64::MIN).abs());
        assert_eq!(ANY, (-ANY).abs());
        assert_eq!(ANY, ANY.abs());
    }

    #[test]
    fn test_scalar_multiplication() {
        assert_eq!(Duration::seconds(6), Duration::seconds(2) * 3);
        assert_eq!(Duration::seconds(6), 3 * Duration::seconds(2));
        assert_eq!(Duration::nanoseconds(6), 1.5 * Duration::nanoseconds(4));
        assert_eq!(Duration::seconds(-6), Duration::seconds(2) * -3);

        assert_eq!(INF, INF * 2);
        assert_eq!(-INF, INF * -2);
        assert_eq!(INF, INF * 0);
        assert_eq!(-INF, -INF * 0);
        assert_eq!(INF, INF * 0.0);

        let sec_max = Duration::seconds(i64::MAX);
        let sec_min = Duration::seconds(i64::MIN);
        assert_eq!(INF, sec_max * 2);
        assert_eq!(-INF, sec_max * -2);
        assert_eq!(-INF, sec_min * 2);
        assert_eq!(INF, sec_min * -2);
        assert_eq!(INF, ANY * 1e100);
        assert_eq!(-INF, ANY * -1e100);
        assert_eq!(INF, ANY * f64::INFINITY);
        assert_eq!(-INF, ANY * f64::NEG_INFINITY);

        // Fixed-point multiplication stays finite where the double path
        // overflows to the 53-bit rounding of 2^63.
        assert_ne!(INF, Duration::seconds(1) * i64::MAX);
        assert_eq!(INF, Duration::seconds(1) * i64::MAX as f64);
        assert_ne!(INF, sec_max * 1);
        assert_eq!(INF, sec_max * 1.0);
    }

    #[test]
    fn test_scalar_division() {
        assert_eq!(Duration::seconds(2), Duration::seconds(6) / 3);
        assert_eq!(Duration::milliseconds(500), Duration::seconds(1) / 2.0);
        // Integer scalar division truncates at the tick level.
        assert_eq!(Duration::nanoseconds(9) / 4, Duration::nanoseconds(7) / 3);
        assert_eq!(-(Duration::nanoseconds(9) / 4), Duration::nanoseconds(-7) / 3);

        assert_eq!(INF, INF / 2);
        assert_eq!(-INF, INF / -2);
        assert_eq!(INF, INF / 2.0);
        assert_eq!(-INF, -INF / 2.0);
        assert_eq!(INF, INF / f64::INFINITY);
        assert_eq!(-INF, INF / f64::NEG_INFINITY);
        assert_eq!(Duration::ZERO, ANY / f64::INFINITY);
        assert_eq!(Duration::ZERO, -ANY / f64::NEG_INFINITY);

        let sec_max = Duration::seconds(i64::MAX);
        let sec_min = Duration::seconds(i64::MIN);
        assert_eq!(INF, sec_max / 0.5);
        assert_eq!(-INF, sec_max / -0.5);
        assert_eq!(-INF, sec_min / 0.5);
        assert_eq!(INF, sec_min / -0.5);
        assert_eq!(INF, sec_max / 1.0);
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(INF, ANY / 0);
        assert_eq!(-INF, -ANY / 0);
        assert_eq!(INF, Duration::ZERO / 0);

        assert_eq!(INF, Duration::ZERO / 0.0);
        assert_eq!(-INF, Duration::ZERO / -0.0);
        assert_eq!(INF, ANY / 0.0);
        assert_eq!(-INF, ANY / -0.0);
        assert_eq!(-INF, -ANY / 0.0);
        assert_eq!(INF, -ANY / -0.0);

        let denorm = f64::MIN_POSITIVE * f64::EPSILON;
        assert_eq!(Duration::ZERO, Duration::ZERO / denorm);
        assert_eq!(INF, ANY / denorm);
        assert_eq!(-INF, ANY / -denorm);

        assert_eq!((i64::MAX, INF), Duration::ZERO.idiv(Duration::ZERO));
        assert_eq!((i64::MAX, INF), ANY.idiv(Duration::ZERO));
        assert_eq!((i64::MIN, -INF), (-ANY).idiv(Duration::ZERO));
        assert_eq!(i64::MAX, ANY / Duration::ZERO);
        assert_eq!(i64::MIN, -ANY / Duration::ZERO);

        assert_eq!(f64::INFINITY, Duration::ZERO.fdiv(Duration::ZERO));
        assert_eq!(f64::INFINITY, ANY.fdiv(Duration::ZERO));
        assert_eq!(f64::NEG_INFINITY, (-ANY).fdiv(Duration::ZERO));
    }

    #[test]
    fn test_idiv_identity_and_remainder_sign() {
        let cases = [
            (Duration::seconds(0), Duration::seconds(2)),
            (Duration::seconds(1), Duration::seconds(1)),
            (Duration::seconds(1), Duration::seconds(2)),
            (Duration::seconds(2), Duration::seconds(1)),
            (Duration::seconds(-2), Duration::seconds(1)),
            (Duration::seconds(2), Duration::seconds(-1)),
            (Duration::seconds(-2), Duration::seconds(-1)),
            (
                Duration::seconds(1) + Duration::nanoseconds(2),
                Duration::seconds(1) + Duration::nanoseconds(3),
            ),
            (
                -(Duration::seconds(1) + Duration::nanoseconds(2)),
                Duration::seconds(1) + Duration::nanoseconds(3),
            ),
            (Duration::milliseconds(123_456_789), Duration::minutes(7)),
        ];
        for (num, den) in cases {
            let (q, rem) = num.idiv(den);
            assert_eq!(num, q * den + rem, "identity for {q}");
            assert!(
                rem == Duration::ZERO || (rem < Duration::ZERO) == (num < Duration::ZERO),
                "remainder sign for {q}"
            );
            assert_eq!(num / den, q);
            assert_eq!(num % den, rem);
        }
    }

    #[test]
    fn test_idiv_infinities() {
        assert_eq!((i64::MAX, INF), INF.idiv(INF));
        assert_eq!((i64::MAX, -INF), (-INF).idiv(-INF));
        assert_eq!((i64::MIN, -INF), (-INF).idiv(INF));
        assert_eq!((i64::MIN, INF), INF.idiv(-INF));
        assert_eq!((i64::MAX, INF), INF.idiv(ANY));
        assert_eq!((i64::MIN, -INF), (-INF).idiv(ANY));
        assert_eq!((0, ANY), ANY.idiv(INF));
        assert_eq!((0, -ANY), (-ANY).idiv(-INF));
    }

    #[test]
    fn test_idiv_quotient_saturation() {
        let sec_max = Duration::seconds(i64::MAX);
        let (q, rem) = sec_max.idiv(Duration::milliseconds(1));
        assert_eq!(q, i64::MAX);
        assert_eq!(rem, sec_max - Duration::milliseconds(i64::MAX));

        let (q, rem) = (-sec_max).idiv(Duration::milliseconds(1));
        assert_eq!(q, i64::MIN);
        assert_eq!(rem, -sec_max - Duration::milliseconds(i64::MIN));

        let (q, rem) = sec_max.idiv(qns());
        assert_eq!(q, i64::MAX);
        assert_eq!(rem, sec_max - Duration::nanoseconds(i64::MAX) / 4);
    }

    #[test]
    fn test_modulus_infinities() {
        assert_eq!(INF, INF % INF);
        assert_eq!(INF, INF % -INF);
        assert_eq!(-INF, -INF % INF);
        assert_eq!(ANY, ANY % INF);
        assert_eq!(ANY, ANY % -INF);
        assert_eq!(-ANY, -ANY % INF);
        assert_eq!(INF, INF % ANY);
        assert_eq!(-INF, -INF % ANY);

        let sec_max = Duration::seconds(i64::MAX);
        assert_eq!(Duration::ZERO, sec_max % Duration::seconds(1));
        assert_eq!(Duration::ZERO, sec_max % Duration::nanoseconds(1));
        assert_eq!(Duration::ZERO, sec_max % qns());
    }

    #[test]
    fn test_fdiv() {
        assert_eq!(1.5, Duration::milliseconds(1_500).fdiv(Duration::seconds(1)));
        assert_eq!(f64::INFINITY, INF.fdiv(INF));
        assert_eq!(f64::INFINITY, (-INF).fdiv(-INF));
        assert_eq!(f64::NEG_INFINITY, (-INF).fdiv(INF));
        assert_eq!(f64::NEG_INFINITY, INF.fdiv(-INF));
        assert_eq!(f64::INFINITY, INF.fdiv(ANY));
        assert_eq!(f64::NEG_INFINITY, INF.fdiv(-ANY));
        assert_eq!(0.0, ANY.fdiv(INF));
        assert_eq!(0.0, (-ANY).fdiv(-INF));
    }

    #[test]
    fn test_div_rounded() {
        // 12h / 86_400 is exactly half a second.
        assert_eq!(
            Duration::milliseconds(500),
            Duration::hours(12).div_rounded(86_400)
        );
        // 6h / 86_400 is exactly a quarter second.
        assert_eq!(
            Duration::milliseconds(250),
            Duration::hours(6).div_rounded(86_400)
        );
        // Rounds half away from zero at the tick level, where / truncates.
        assert_eq!(Duration::ZERO, Duration::nanoseconds(1) / 8);
        assert_eq!(Duration::nanoseconds(1) / 4, Duration::nanoseconds(1).div_rounded(8));
        assert_eq!(
            -(Duration::nanoseconds(1) / 4),
            Duration::nanoseconds(-1).div_rounded(8)
        );
        assert_eq!(
            3 * (Duration::nanoseconds(1) / 4),
            Duration::nanoseconds(5).div_rounded(8)
        );
        assert_eq!(Duration::nanoseconds(1) / 4, Duration::nanoseconds(1).div_rounded(3));
        assert_eq!(INF, INF.div_rounded(3));
        assert_eq!(-INF, INF.div_rounded(-3));
        assert_eq!(INF, ANY.div_rounded(0));
        assert_eq!(-INF, (-ANY).div_rounded(0));
    }

    #[test]
    fn test_trunc_floor_ceil() {
        let d = Duration::nanoseconds(1_234_567_890);
        for unit_sign in [1i64, -1] {
            assert_eq!(
                Duration::microseconds(1_234_567),
                d.trunc(unit_sign * Duration::microseconds(1))
            );
            assert_eq!(
                Duration::seconds(1),
                d.trunc(unit_sign * Duration::seconds(1))
            );
            assert_eq!(
                Duration::seconds(-1),
                (-d).trunc(unit_sign * Duration::seconds(1))
            );
            assert_eq!(INF, INF.trunc(unit_sign * Duration::seconds(1)));

            assert_eq!(
                Duration::microseconds(1_234_567),
                d.floor(unit_sign * Duration::microseconds(1))
            );
            assert_eq!(
                Duration::microseconds(-1_234_568),
                (-d).floor(unit_sign * Duration::microseconds(1))
            );
            assert_eq!(
                Duration::seconds(-2),
                (-d).floor(unit_sign * Duration::seconds(1))
            );
            assert_eq!(-INF, (-INF).floor(unit_sign * Duration::seconds(1)));

            assert_eq!(
                Duration::microseconds(1_234_568),
                d.ceil(unit_sign * Duration::microseconds(1))
            );
            assert_eq!(
                Duration::seconds(2),
                d.ceil(unit_sign * Duration::seconds(1))
            );
            assert_eq!(
                Duration::microseconds(-1_234_567),
                (-d).ceil(unit_sign * Duration::microseconds(1))
            );
            assert_eq!(INF, INF.ceil(unit_sign * Duration::seconds(1)));
        }
    }

    #[test]
    fn test_small_float_conversions() {
        assert_eq!(Duration::ZERO, Duration::seconds_f64(0.124_999_999e-9));
        assert_eq!(qns(), Duration::seconds_f64(0.125e-9));
        assert_eq!(qns(), Duration::seconds_f64(0.250e-9));
        assert_eq!(Duration::nanoseconds(1) / 2, Duration::seconds_f64(0.375e-9));
        assert_eq!(Duration::nanoseconds(1) / 2, Duration::seconds_f64(0.500e-9));
        assert_eq!(3 * qns(), Duration::seconds_f64(0.625e-9));
        assert_eq!(3 * qns(), Duration::seconds_f64(0.750e-9));
        assert_eq!(Duration::nanoseconds(1), Duration::seconds_f64(0.875e-9));
        assert_eq!(Duration::nanoseconds(1), Duration::seconds_f64(1.000e-9));
    }

    #[test]
    fn test_int64_and_f64_converters() {
        let d = Duration::milliseconds(1_500);
        assert_eq!(1, d.to_int64_seconds());
        assert_eq!(-1, (-d).to_int64_seconds());
        assert_eq!(1_500, d.to_int64_milliseconds());
        assert_eq!(0, d.to_int64_minutes());
        assert_eq!(1.5, d.to_f64_seconds());
        assert_eq!(-1.5, (-d).to_f64_seconds());
        assert_eq!(1_500_000.0, d.to_f64_microseconds());

        assert_eq!(i64::MAX, INF.to_int64_seconds());
        assert_eq!(i64::MIN, (-INF).to_int64_nanoseconds());
        assert_eq!(f64::INFINITY, INF.to_f64_hours());
        assert_eq!(f64::NEG_INFINITY, (-INF).to_f64_hours());

        // Nanosecond counts past i64 saturate rather than wrap.
        assert_eq!(i64::MAX, Duration::seconds(i64::MAX).to_int64_nanoseconds());
    }

    #[test]
    fn test_ordering() {
        assert!(Duration::seconds(1) < Duration::seconds(2));
        assert!(Duration::nanoseconds(-1) < Duration::ZERO);
        assert!(-INF < Duration::seconds(i64::MIN));
        assert!(INF > Duration::seconds(i64::MAX));
        assert!(-INF < INF);

        let range = Duration::hours(24) * 365 * 100_000_000_000i64;
        assert!(range < INF);
        assert!(-range > -INF);
        assert_eq!(-(range - -range), -range - range);
    }
}
