//! Error types for the bizday crates.
//!
//! Every fallible operation returns the single `thiserror`-derived [`Error`]
//! enum.  Argument checks go through the [`ensure!`](crate::ensure) macro.

use thiserror::Error;

/// The top-level error type used throughout bizday.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// An argument is outside its accepted domain (zero step, `n = 0` on a
    /// holiday, a holiday rule without a name).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A value that is not date-like was supplied where a date is required.
    #[error("type mismatch: {0}")]
    TypeMismatch(String),

    /// A holiday rule name is already registered and overwriting was not
    /// allowed.
    #[error("duplicate holiday rule name: {0}")]
    DuplicateName(String),

    /// A holiday rule name is not registered.
    #[error("unknown holiday rule name: {0}")]
    UnknownName(String),

    /// A business-day scan ran off the representable date range.
    #[error("date sequence exhausted: {0}")]
    SequenceExhausted(String),
}

/// Shorthand `Result` type used throughout bizday.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::InvalidArgument(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use bizday_core::{ensure, errors::Error};
/// fn non_zero(step: i32) -> bizday_core::errors::Result<i32> {
///     ensure!(step != 0, "step must not be 0");
///     Ok(step)
/// }
/// assert!(non_zero(1).is_ok());
/// assert_eq!(
///     non_zero(0),
///     Err(Error::InvalidArgument("step must not be 0".into()))
/// );
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
