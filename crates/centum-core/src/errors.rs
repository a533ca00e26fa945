//! Error types for centum.
//!
//! Every fallible operation in the workspace returns the single
//! `thiserror`-derived [`Error`] enum below.  Errors are plain values: they are
//! built where the failure is detected and handed back to the immediate
//! caller, nothing is recovered or logged internally.  The `ensure!` and
//! `fail!` macros cover the two common shapes (a violated parameter contract
//! and a generic runtime failure).

use thiserror::Error;

/// The top-level error type used throughout centum.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// No currency is registered under the given code.
    #[error("currency {0} not found")]
    CurrencyNotFound(String),

    /// A two-operand operation was attempted on different currencies.
    #[error("currency mismatch: {left} vs {right}")]
    CurrencyMismatch {
        /// Code of the left-hand operand's currency.
        left: String,
        /// Code of the right-hand operand's currency.
        right: String,
    },

    /// The integer result would fall outside the `i64` range.
    #[error("overflow detected in {operation} operation: {lhs}, {rhs}")]
    Overflow {
        /// Name of the operation (e.g. `"addition"`).
        operation: &'static str,
        /// Left-hand operand.
        lhs: i64,
        /// Right-hand operand.
        rhs: i64,
    },

    /// A parameter or collection violated the operation's contract.
    #[error("validation error for {field}: {message}")]
    Validation {
        /// The offending parameter.
        field: &'static str,
        /// What was wrong with it.
        message: String,
    },

    /// A collaborator required by the operation was never configured.
    #[error("configuration missing: {0}")]
    ConfigurationMissing(&'static str),

    /// An exchange-rate lookup failed for one leg of a conversion.
    #[error("could not fetch rate from {from} to {to}: {source}")]
    RateLookup {
        /// Source currency code of the failing leg.
        from: String,
        /// Target currency code of the failing leg.
        to: String,
        /// The error reported by the rate source.
        source: Box<Error>,
    },

    /// General runtime error (rate sources and other collaborators).
    #[error("{0}")]
    Runtime(String),
}

impl Error {
    /// Build a [`Error::CurrencyMismatch`] from two currency codes.
    pub fn mismatch(left: impl Into<String>, right: impl Into<String>) -> Self {
        Error::CurrencyMismatch {
            left: left.into(),
            right: right.into(),
        }
    }

    /// Build a [`Error::Validation`] for `field`.
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Error::Validation {
            field,
            message: message.into(),
        }
    }
}

/// Shorthand `Result` type used throughout centum.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Validation { .. })` for `$field` if `$cond` is false.
///
/// # Example
/// ```
/// use centum_core::{ensure, errors::Error};
/// fn percentage(p: f64) -> centum_core::errors::Result<f64> {
///     ensure!((0.0..=100.0).contains(&p), "percentage", "must be between 0 and 100, got {p}");
///     Ok(p)
/// }
/// assert!(percentage(20.0).is_ok());
/// assert!(matches!(percentage(150.0), Err(Error::Validation { field: "percentage", .. })));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $field:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Validation {
                field: $field,
                message: format!($($msg)*),
            });
        }
    };
}

/// Returns `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use centum_core::{fail, errors::Error};
/// fn always_err() -> centum_core::errors::Result<()> {
///     fail!("rate not found for {} to {}", "USD", "XAU");
/// }
/// assert_eq!(
///     always_err(),
///     Err(Error::Runtime("rate not found for USD to XAU".into()))
/// );
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatch_message_names_both_codes() {
        let err = Error::mismatch("USD", "EUR");
        assert_eq!(err.to_string(), "currency mismatch: USD vs EUR");
    }

    #[test]
    fn overflow_message_carries_operands() {
        let err = Error::Overflow {
            operation: "addition",
            lhs: i64::MAX,
            rhs: 1,
        };
        assert_eq!(
            err.to_string(),
            format!("overflow detected in addition operation: {}, 1", i64::MAX)
        );
    }

    #[test]
    fn rate_lookup_wraps_source_error() {
        let err = Error::RateLookup {
            from: "EUR".into(),
            to: "USD".into(),
            source: Box::new(Error::Runtime("feed offline".into())),
        };
        assert_eq!(
            err.to_string(),
            "could not fetch rate from EUR to USD: feed offline"
        );
    }

    #[test]
    fn ensure_macro_short_circuits() {
        fn check(n: i64) -> Result<i64> {
            ensure!(n >= 0, "n", "must be non-negative, got {n}");
            Ok(n)
        }
        assert_eq!(check(3), Ok(3));
        assert_eq!(
            check(-1),
            Err(Error::validation("n", "must be non-negative, got -1"))
        );
    }
}
