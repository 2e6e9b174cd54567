//! Error types for holcal.
//!
//! A single `thiserror`-derived enum covers the three failure classes of the
//! library: configuration defects, caller mistakes, and date arithmetic
//! falling outside the supported range.  The `ensure!` and `fail!` macros
//! are shorthands for the two classes raised from deep inside evaluation.

use thiserror::Error;

/// The top-level error type used throughout holcal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The holiday configuration itself is defective: duplicate sibling
    /// hierarchy ids, an unrecognized recurrence-cycle token, or an N-year
    /// cycle without a `valid_from` anchor.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The caller supplied an invalid argument (e.g. no interval for an
    /// interval-based query).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Date-related error: out-of-range components or arithmetic leaving
    /// the supported date range.
    #[error("date error: {0}")]
    Date(String),
}

/// Shorthand `Result` type used throughout holcal.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::InvalidArgument(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use hc_core::{ensure, errors::Result};
/// fn first_year(years: &[u16]) -> Result<u16> {
///     ensure!(!years.is_empty(), "at least one year is required");
///     Ok(years[0])
/// }
/// assert!(first_year(&[2024]).is_ok());
/// assert!(first_year(&[]).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidArgument(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::Configuration(...))` immediately.
///
/// # Example
/// ```
/// use hc_core::{fail, errors::Result};
/// fn reject(token: &str) -> Result<()> {
///     fail!("cannot handle cycle type '{token}'");
/// }
/// assert!(reject("7_YEARS").is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Configuration(format!($($msg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_message() {
        let e = Error::Configuration("duplicate id 'ak'".into());
        assert_eq!(e.to_string(), "configuration error: duplicate id 'ak'");
        let e = Error::InvalidArgument("interval is missing".into());
        assert_eq!(e.to_string(), "invalid argument: interval is missing");
    }

    #[test]
    fn ensure_macro() {
        fn check(flag: bool) -> Result<()> {
            crate::ensure!(flag, "flag must be set");
            Ok(())
        }
        assert!(check(true).is_ok());
        assert_eq!(
            check(false),
            Err(Error::InvalidArgument("flag must be set".into()))
        );
    }

    #[test]
    fn fail_macro() {
        fn boom() -> Result<()> {
            crate::fail!("unknown token '{}'", "X_YEARS");
        }
        assert_eq!(
            boom(),
            Err(Error::Configuration("unknown token 'X_YEARS'".into()))
        );
    }
}
