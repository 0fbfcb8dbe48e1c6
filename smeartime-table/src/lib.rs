//! Leap-second tables and the smear/unsmear engine.
//!
//! A [`LeapTable`] is built from a [`LeapTableProto`] catalog (Julian Day
//! Numbers of positive and negative leap seconds plus an expiration day),
//! validated, and frozen. It then answers six conversion queries between
//! smeared UTC and the TT-based timescales:
//!
//! | Query | Input | Output |
//! |-------|-------|--------|
//! | [`LeapTable::unsmear`] | `UtcTime` | `Option<TaiTime>` |
//! | [`LeapTable::unsmear_to_gps`] | `UtcTime` | `Option<GpsTime>` |
//! | [`LeapTable::smear`] | `TaiTime` or `GpsTime` | `Option<UtcTime>` |
//! | [`LeapTable::future_proof_unsmear`] | `UtcTime` | `(TaiTime, TaiTime)` |
//! | [`LeapTable::future_proof_unsmear_to_gps`] | `UtcTime` | `(GpsTime, GpsTime)` |
//! | [`LeapTable::future_proof_smear`] | `TaiTime` or `GpsTime` | `(UtcTime, UtcTime)` |
//!
//! The exact queries return `None` outside the table; the future-proof
//! queries instead return the tightest `[lo, hi]` interval consistent with
//! every leap second that could have been inserted since the table
//! expired, at ±1 s per elapsed month-end plus ±250 ms per 6 h inside a
//! potential smear window.
//!
//! A constructed table is immutable and freely shareable across threads.
//!
//! ```
//! use smeartime_table::{LeapTable, LeapTableProto};
//!
//! let proto = LeapTableProto {
//!     positive_leaps: vec![2441499], // 1972-06-30
//!     negative_leaps: vec![],
//!     end_jdn: Some(2442412), // expires 1974-12-31 12:00:00 UTC
//! };
//! let table = LeapTable::from_proto(&proto).unwrap();
//! assert_eq!(table.to_proto(), proto);
//! ```

pub mod codec;
mod convert;
mod proto;
mod table;

pub use proto::LeapTableProto;
pub use table::{LeapTable, LeapTableError, MAX_JDN, MIN_JDN};
