use core::fmt::{self, Display};

use super::Outcome;
use crate::types::failure::Failure;

impl<V: Display, F: Display> Display for Outcome<V, F> {
    /// Prints the live payload: the value on success, the failure otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => Display::fmt(value, f),
            Self::Failure(failure) => Display::fmt(failure, f),
        }
    }
}

/// The zero outcome is a failure holding `F::default()`, without a trace.
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// let zero: Outcome<i32> = Outcome::default();
/// assert!(zero.has_failed());
/// assert_eq!(zero.to_string(), "");
/// ```
impl<V, F: Default> Default for Outcome<V, F> {
    fn default() -> Self {
        Self::Failure(Failure::default())
    }
}

impl<V, F> From<Failure<F>> for Outcome<V, F> {
    #[inline]
    fn from(failure: Failure<F>) -> Self {
        Self::Failure(failure)
    }
}

impl<V, F> From<Result<V, F>> for Outcome<V, F> {
    #[inline]
    fn from(result: Result<V, F>) -> Self {
        match result {
            Ok(value) => Self::Value(value),
            Err(failure) => Self::fail(failure),
        }
    }
}

impl<V, F> From<Outcome<V, F>> for Result<V, Failure<F>> {
    #[inline]
    fn from(outcome: Outcome<V, F>) -> Self {
        match outcome {
            Outcome::Value(value) => Ok(value),
            Outcome::Failure(failure) => Err(failure),
        }
    }
}
