//! Extension traits for lifting `Result` and `Option` into [`Outcome`].
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::{IntoOutcome, OptionOutcomeExt};
//!
//! let parsed = "42".parse::<i32>().into_outcome();
//! assert_eq!(parsed.try_value(), Some(&42));
//!
//! let port = None::<u16>.some_or("no port configured");
//! assert!(port.has_failed());
//! ```

use crate::types::outcome::Outcome;

/// Converts a `Result` into an [`Outcome`] with the same payloads.
pub trait IntoOutcome<V, F> {
    /// Lifts `self`; the error side becomes a failure through [`Outcome::fail`].
    fn into_outcome(self) -> Outcome<V, F>;

    /// Lifts `self`, mapping the error payload on the way.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{traits::IntoOutcome, Outcome};
    ///
    /// let outcome: Outcome<i32> = "x".parse::<i32>().into_outcome_with(|e| e.to_string());
    /// assert_eq!(outcome.failure_message(), Some("invalid digit found in string"));
    /// ```
    fn into_outcome_with<G, M>(self, map: M) -> Outcome<V, G>
    where
        M: FnOnce(F) -> G;
}

impl<V, F> IntoOutcome<V, F> for Result<V, F> {
    #[inline]
    fn into_outcome(self) -> Outcome<V, F> {
        Outcome::from(self)
    }

    #[inline]
    fn into_outcome_with<G, M>(self, map: M) -> Outcome<V, G>
    where
        M: FnOnce(F) -> G,
    {
        match self {
            Ok(value) => Outcome::Value(value),
            Err(error) => Outcome::fail(map(error)),
        }
    }
}

/// Converts an `Option` into an [`Outcome`], supplying the failure for `None`.
pub trait OptionOutcomeExt<V> {
    /// Fails with `failure` when `None`.
    fn some_or<F>(self, failure: F) -> Outcome<V, F>;

    /// Fails with the result of `factory` when `None`; `factory` is lazy.
    fn some_or_else<F, M>(self, factory: M) -> Outcome<V, F>
    where
        M: FnOnce() -> F;
}

impl<V> OptionOutcomeExt<V> for Option<V> {
    #[inline]
    fn some_or<F>(self, failure: F) -> Outcome<V, F> {
        Outcome::some_not_null(self, failure)
    }

    #[inline]
    fn some_or_else<F, M>(self, factory: M) -> Outcome<V, F>
    where
        M: FnOnce() -> F,
    {
        match self {
            Some(value) => Outcome::Value(value),
            None => Outcome::fail(factory()),
        }
    }
}
