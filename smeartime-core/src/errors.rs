//! Error types for the duration algebra.

use thiserror::Error;

/// Failure modes of [`parse_duration`](crate::parse_duration).
///
/// The offending tail of the input is carried in the variant so callers can
/// point at the first byte the parser rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseDurationError {
    /// The input was empty (or a bare sign).
    #[error("empty duration string")]
    Empty,

    /// A unit token did not start with a decimal number.
    #[error("expected a number at {0:?}")]
    InvalidNumber(String),

    /// A number was not followed by one of `ns`, `us`, `ms`, `s`, `m`, `h`.
    #[error("unknown unit at {0:?} (expected ns, us, ms, s, m, or h)")]
    UnknownUnit(String),

    /// The input ended where a unit suffix was required.
    #[error("missing unit suffix after {0:?}")]
    MissingUnit(String),
}
