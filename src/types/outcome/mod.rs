//! The dual-state container.
//!
//! [`Outcome<V, F>`] holds either a success value `V` or a [`Failure<F>`].
//! The failure type defaults to `String`, so `Outcome<V>` is the
//! text-failure form (see [`crate::text`]).
//!
//! An outcome is fixed at construction and never mutated by its API: every
//! combinator consumes `self` and returns a new outcome.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! fn parse_port(raw: &str) -> Outcome<u16, String> {
//!     match raw.parse() {
//!         Ok(port) => Outcome::some(port),
//!         Err(_) => Outcome::fail(format!("invalid port: {raw}")),
//!     }
//! }
//!
//! assert_eq!(parse_port("8080"), Outcome::some(8080));
//! assert_eq!(parse_port("http").to_string(), "invalid port: http");
//! ```
use crate::bridge::{raise_failed, raise_has_value};
use crate::config::TracePolicy;
use crate::types::error::{HasFailed, HasValue, ValueIsNull};
use crate::types::failure::Failure;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod combinators;
mod iter;
mod traits;

pub use iter::{partition, transpose, IntoIter, Iter};

/// Either a success value or a failure payload, never both, never neither.
///
/// # Type Parameters
///
/// * `V` - The success value type
/// * `F` - The failure payload type, `String` unless stated otherwise
///
/// # Variants
///
/// * `Value(V)` - The success branch
/// * `Failure(Failure<F>)` - The failure branch, payload plus optional trace
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome<V, F = crate::types::alloc_type::String> {
    Value(V),
    Failure(Failure<F>),
}

/// Creates a success. Shorthand for [`Outcome::some`].
#[inline]
pub fn some<V, F>(value: V) -> Outcome<V, F> {
    Outcome::Value(value)
}

/// Creates a failure. Shorthand for [`Outcome::fail`].
#[inline]
pub fn fail<V, F>(failure: F) -> Outcome<V, F> {
    Outcome::fail(failure)
}

impl<V, F> Outcome<V, F> {
    /// Creates a success holding `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let ok = Outcome::<i32, &str>::some(42);
    /// assert_eq!(ok.try_value(), Some(&42));
    /// ```
    #[inline]
    pub fn some(value: V) -> Self {
        Self::Value(value)
    }

    /// Creates a failure holding `failure`.
    ///
    /// A diagnostic trace is attached iff global capture is enabled at call
    /// time, see [`crate::config`].
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let failed = Outcome::<i32, &str>::fail("not found");
    /// assert!(failed.has_failed());
    /// ```
    #[inline]
    pub fn fail(failure: F) -> Self {
        Self::Failure(Failure::new(failure))
    }

    /// Creates a failure whose trace is governed by `policy` instead of the
    /// global flag.
    #[inline]
    pub fn fail_with_policy(failure: F, policy: TracePolicy) -> Self {
        Self::Failure(Failure::with_policy(failure, policy))
    }

    /// Creates a success from a possibly absent value.
    ///
    /// # Errors
    ///
    /// Returns [`ValueIsNull`] if `value` is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Outcome, ValueIsNull};
    ///
    /// assert_eq!(Outcome::<i32, &str>::try_some(Some(1)), Ok(Outcome::some(1)));
    /// assert_eq!(Outcome::<i32, &str>::try_some(None), Err(ValueIsNull));
    /// ```
    #[inline]
    pub fn try_some(value: Option<V>) -> Result<Self, ValueIsNull> {
        value.map(Self::Value).ok_or(ValueIsNull)
    }

    /// Creates a failure from a possibly absent payload.
    ///
    /// # Errors
    ///
    /// Returns [`ValueIsNull`] if `failure` is `None`.
    #[inline]
    pub fn try_fail(failure: Option<F>) -> Result<Self, ValueIsNull> {
        failure.map(Self::fail).ok_or(ValueIsNull)
    }

    /// Value to success conversion.
    #[inline]
    pub fn from_value(value: V) -> Self {
        Self::Value(value)
    }

    /// Payload to failure conversion. Same as [`Outcome::fail`].
    #[inline]
    pub fn from_failure(failure: F) -> Self {
        Self::fail(failure)
    }

    /// Succeeds with `value` if `predicate` holds for it, fails with `failure` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let even = Outcome::some_when(4, |n| n % 2 == 0, "odd");
    /// assert_eq!(even, Outcome::some(4));
    ///
    /// let odd = Outcome::some_when(3, |n| n % 2 == 0, "odd");
    /// assert_eq!(odd, Outcome::fail("odd"));
    /// ```
    #[inline]
    pub fn some_when<P>(value: V, predicate: P, failure: F) -> Self
    where
        P: FnOnce(&V) -> bool,
    {
        if predicate(&value) {
            Self::Value(value)
        } else {
            Self::fail(failure)
        }
    }

    /// Succeeds with the contained value, fails with `failure` on `None`.
    #[inline]
    pub fn some_not_null(value: Option<V>, failure: F) -> Self {
        match value {
            Some(value) => Self::Value(value),
            None => Self::fail(failure),
        }
    }

    #[inline]
    #[must_use]
    pub fn has_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    #[inline]
    #[must_use]
    pub fn has_failed(&self) -> bool {
        !self.has_value()
    }

    /// Borrows the value, if any.
    #[inline]
    #[must_use]
    pub fn try_value(&self) -> Option<&V> {
        match self {
            Self::Value(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Borrows the failure, if any.
    #[inline]
    #[must_use]
    pub fn try_failure(&self) -> Option<&Failure<F>> {
        match self {
            Self::Value(_) => None,
            Self::Failure(failure) => Some(failure),
        }
    }

    /// Takes the value out, or reports the failure as [`HasFailed`].
    ///
    /// # Errors
    ///
    /// Returns [`HasFailed`] carrying the failure when there is no value.
    #[inline]
    pub fn checked_value(self) -> Result<V, HasFailed<F>> {
        match self {
            Self::Value(value) => Ok(value),
            Self::Failure(failure) => Err(HasFailed::new(failure)),
        }
    }

    /// Takes the failure out, or reports the value as [`HasValue`].
    ///
    /// # Errors
    ///
    /// Returns [`HasValue`] carrying the value when there is no failure.
    #[inline]
    pub fn checked_failure(self) -> Result<Failure<F>, HasValue<V>> {
        match self {
            Self::Value(value) => Err(HasValue::new(value)),
            Self::Failure(failure) => Ok(failure),
        }
    }

    /// Borrows the value.
    ///
    /// # Panics
    ///
    /// Raises [`HasFailed`] with a copy of the failure when there is no
    /// value; a [`catch`](crate::bridge::catch) boundary turns it back into
    /// an outcome.
    #[track_caller]
    pub fn value(&self) -> &V
    where
        F: Clone + Send + 'static,
    {
        match self {
            Self::Value(value) => value,
            Self::Failure(failure) => raise_failed(HasFailed::new(failure.clone())),
        }
    }

    /// Borrows the failure.
    ///
    /// # Panics
    ///
    /// Raises [`HasValue`] with a copy of the value when there is no failure.
    #[track_caller]
    pub fn failure(&self) -> &Failure<F>
    where
        V: Clone + Send + 'static,
    {
        match self {
            Self::Value(value) => raise_has_value(HasValue::new(value.clone())),
            Self::Failure(failure) => failure,
        }
    }

    /// Outcome to value conversion, raising on failure.
    ///
    /// This is the consuming counterpart of [`Outcome::value`] and the
    /// expression-style way of writing code that is wrapped by
    /// [`catch`](crate::bridge::catch).
    ///
    /// # Panics
    ///
    /// Raises [`HasFailed`] carrying the failure.
    #[track_caller]
    pub fn into_value_or_raise(self) -> V
    where
        F: Send + 'static,
    {
        match self {
            Self::Value(value) => value,
            Self::Failure(failure) => raise_failed(HasFailed::new(failure)),
        }
    }

    /// Outcome to failure conversion, raising on success.
    ///
    /// # Panics
    ///
    /// Raises [`HasValue`] carrying the value.
    #[track_caller]
    pub fn into_failure_or_raise(self) -> Failure<F>
    where
        V: Send + 'static,
    {
        match self {
            Self::Value(value) => raise_has_value(HasValue::new(value)),
            Self::Failure(failure) => failure,
        }
    }

    /// Returns `self` on success and raises the failure otherwise.
    ///
    /// Use this to switch from functional propagation to unwinding at a
    /// chosen point.
    ///
    /// # Panics
    ///
    /// Raises [`HasFailed`] carrying the failure.
    #[track_caller]
    pub fn raise_on_fail(self) -> Self
    where
        F: Send + 'static,
    {
        match self {
            Self::Value(value) => Self::Value(value),
            Self::Failure(failure) => raise_failed(HasFailed::new(failure)),
        }
    }

    /// Converts into a standard `Result`, dropping the trace.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// fn total(a: Outcome<i32, &'static str>, b: Outcome<i32, &'static str>) -> Result<i32, &'static str> {
    ///     Ok(a.into_result()? + b.into_result()?)
    /// }
    ///
    /// assert_eq!(total(Outcome::some(1), Outcome::some(2)), Ok(3));
    /// assert_eq!(total(Outcome::some(1), Outcome::fail("nope")), Err("nope"));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<V, F> {
        match self {
            Self::Value(value) => Ok(value),
            Self::Failure(failure) => Err(failure.into_value()),
        }
    }

    #[inline]
    pub fn as_ref(&self) -> Outcome<&V, &F> {
        match self {
            Self::Value(value) => Outcome::Value(value),
            Self::Failure(failure) => Outcome::Failure(Failure::from_parts(
                failure.value(),
                failure.shared_trace(),
            )),
        }
    }
}
