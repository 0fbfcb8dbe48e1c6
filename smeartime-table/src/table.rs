//! Leap table construction and validation.
//!
//! A table is a latest-first list of segment boundaries. Each leap second
//! contributes two boundaries (the start of its 24-hour smear window and
//! its end, tagged with the smear direction), bracketed by the expiration
//! at the front and the modern UTC epoch at the back, so the entry count
//! is always even. TAI values are derived oldest-first from the anchor
//! `1972-01-01 00:00:00 UTC == 1972-01-01 00:00:10 TAI` and the invariant
//! that a smear window holds `86 400 + smear` SI seconds.

use crate::proto::LeapTableProto;
use smeartime_core::Duration;
use smeartime_scales::{
    format_time, format_utc, jdn_to_time, tai_modern_utc_epoch, time_to_jdn, TaiTime, TtInstant,
    UtcTime,
};
use std::fmt::{self, Write as _};
use thiserror::Error;

/// The earliest accepted JDN: the 24-hour period ending 1972-01-31
/// 12:00 UTC, the first possible smear window of modern UTC.
pub const MIN_JDN: i32 = 2_441_347;

/// The latest accepted JDN: the 24-hour period ending 9999-12-31
/// 12:00 UTC. Catalogs claiming later content are presumed corrupt; in
/// the very far future whole months of inserted seconds could even shift
/// which days are month ends.
pub const MAX_JDN: i32 = 5_373_483;

/// A segment boundary: a UTC instant, the same instant in TAI, and the
/// smear direction of the segment that *ends* here. `smear` is `+1` at the
/// end of an insertion window, `-1` at the end of a removal window, and
/// `0` where the segment below is unsmeared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LeapTableEntry {
    pub utc: UtcTime,
    pub tai: TaiTime,
    pub smear: i8,
}

/// Why a catalog failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LeapTableError {
    #[error("end_jdn is missing from the catalog")]
    MissingEndJdn,

    #[error("end_jdn {0} is not in the valid range [{MIN_JDN}, {MAX_JDN}]")]
    EndJdnOutOfRange(i32),

    #[error("end_jdn {0} does not end the table at the last noon of a month")]
    ExpirationNotAtMonthEnd(i32),

    #[error("leap day {0} is not in the valid range [{MIN_JDN}, {MAX_JDN}]")]
    LeapOutOfRange(i32),

    #[error("a leap second falls after end_jdn")]
    LeapAfterExpiration,

    #[error("a leap second falls before the modern UTC epoch")]
    LeapBeforeModernUtc,

    #[error("duplicate or sign-conflicting leap seconds")]
    DuplicateLeap,

    #[error("leap second on {0} is not at the end of a month")]
    LeapNotAtMonthEnd(String),
}

/// A validated, immutable catalog of leap seconds.
///
/// Construction happens once through [`LeapTable::from_proto`]; afterwards
/// the table is read-only and can be shared freely between threads. The
/// conversion queries live in [the crate docs](crate) and are implemented
/// on this type.
#[derive(Clone, PartialEq, Eq)]
pub struct LeapTable {
    /// Latest-first boundaries; always an even count.
    pub(crate) entries: Vec<LeapTableEntry>,
}

impl LeapTable {
    /// Builds and validates a table from its serialized catalog.
    pub fn from_proto(proto: &LeapTableProto) -> Result<LeapTable, LeapTableError> {
        let end_jdn = proto.end_jdn.ok_or(LeapTableError::MissingEndJdn)?;
        if !(MIN_JDN..=MAX_JDN).contains(&end_jdn) {
            return Err(LeapTableError::EndJdnOutOfRange(end_jdn));
        }

        // The expiration sits immediately before what might be the start
        // of the next leap smear, so the day after it must open a month.
        let expiration = jdn_to_time(end_jdn + 1);
        if (expiration + Duration::hours(24)).to_civil().day != 1 {
            return Err(LeapTableError::ExpirationNotAtMonthEnd(end_jdn));
        }

        let leap_count = proto.positive_leaps.len() + proto.negative_leaps.len();
        let mut entries = Vec::with_capacity(2 * leap_count + 2);
        entries.push(LeapTableEntry {
            utc: expiration,
            tai: TaiTime::epoch(),
            smear: 0,
        });
        let signed_leaps = proto
            .positive_leaps
            .iter()
            .map(|&jdn| (jdn, 1i8))
            .chain(proto.negative_leaps.iter().map(|&jdn| (jdn, -1)));
        for (jdn, sign) in signed_leaps {
            if !(MIN_JDN..=MAX_JDN).contains(&jdn) {
                return Err(LeapTableError::LeapOutOfRange(jdn));
            }
            entries.push(LeapTableEntry {
                utc: jdn_to_time(jdn),
                tai: TaiTime::epoch(),
                smear: 0,
            });
            entries.push(LeapTableEntry {
                utc: jdn_to_time(jdn + 1),
                tai: TaiTime::epoch(),
                smear: sign,
            });
        }
        entries.push(LeapTableEntry {
            utc: UtcTime::MODERN_UTC_EPOCH,
            tai: tai_modern_utc_epoch(),
            smear: 0,
        });

        entries.sort_unstable_by(|a, b| b.utc.cmp(&a.utc));

        let front = entries[0];
        if front.utc != expiration || front.smear != 0 {
            return Err(LeapTableError::LeapAfterExpiration);
        }
        if entries[entries.len() - 1].utc < UtcTime::MODERN_UTC_EPOCH {
            return Err(LeapTableError::LeapBeforeModernUtc);
        }

        // Walk oldest-first, deriving TAI and rejecting inconsistencies.
        for i in (0..entries.len() - 1).rev() {
            let below = entries[i + 1];
            if entries[i].utc == below.utc {
                return Err(LeapTableError::DuplicateLeap);
            }
            if entries[i].smear != 0 {
                let upper = entries[i].utc.to_civil();
                let lower = below.utc.to_civil();
                if (upper.year, upper.month) == (lower.year, lower.month) {
                    return Err(LeapTableError::LeapNotAtMonthEnd(format_utc(below.utc)));
                }
            }
            entries[i].tai = below.tai
                + (entries[i].utc - below.utc)
                + Duration::seconds(entries[i].smear as i64);
        }

        Ok(LeapTable { entries })
    }

    /// The latest time the table converts without widening. The earliest
    /// is always the modern UTC epoch, 1972-01-01 00:00:00 UTC.
    pub fn expiration(&self) -> UtcTime {
        self.entries[0].utc
    }

    /// Serializes back to the catalog form. Reconstructing from the result
    /// yields an equal table.
    pub fn to_proto(&self) -> LeapTableProto {
        let mut proto = LeapTableProto::default();
        for entry in self.entries.iter().skip(1).rev() {
            match entry.smear {
                1 => proto
                    .positive_leaps
                    .push((time_to_jdn(entry.utc) - 1) as i32),
                -1 => proto
                    .negative_leaps
                    .push((time_to_jdn(entry.utc) - 1) as i32),
                _ => {}
            }
        }
        proto.end_jdn = Some((time_to_jdn(self.entries[0].utc) - 1) as i32);
        proto
    }

    /// A human-readable dump for debugging. Not a stable format; do not
    /// parse it.
    pub fn debug_string(&self) -> String {
        let mut out = format!("LeapTable expires {}\n", format_utc(self.expiration()));
        let mut tai_utc: i64 = 10 + self.entries.iter().map(|e| e.smear as i64).sum::<i64>();
        for entry in &self.entries {
            let _ = writeln!(
                out,
                "  {}  {}  smear {}  TAI-UTC {}",
                format_utc(entry.utc),
                format_time(entry.tai),
                entry.smear,
                tai_utc
            );
            tai_utc -= entry.smear as i64;
        }
        out
    }
}

impl fmt::Debug for LeapTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.debug_string())
    }
}
