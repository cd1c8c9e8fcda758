//! Errors raised when an [`Outcome`](crate::Outcome) is forced into the wrong state.
//!
//! These types double as panic payloads for the bridge between the
//! functional channel and unwinding: [`raise`](crate::bridge::raise) and the
//! raising accessors panic with one of them inside a `Raised` carrier, and
//! [`catch`](crate::bridge::catch) downcasts it back into a failure.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{HasFailed, Outcome};
//!
//! let failed: Outcome<i32, &str> = Outcome::fail("disk full");
//! let err: HasFailed<&str> = failed.checked_value().unwrap_err();
//!
//! assert_eq!(err.failure().value(), &"disk full");
//! assert_eq!(err.to_string(), "outcome has failed: disk full");
//! ```
use core::fmt::{self, Debug, Display};

use crate::types::alloc_type::String;
use crate::types::failure::Failure;
use crate::types::outcome::Outcome;

/// A success or a failure was requested from an absent (`None`) payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ValueIsNull;

impl Display for ValueIsNull {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("outcome payload must not be null")
    }
}

impl core::error::Error for ValueIsNull {}

/// The failure was requested from an outcome that holds a value.
///
/// Carries the value so the catch site can recover it.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HasValue<V> {
    value: V,
    message: Option<String>,
}

impl<V> HasValue<V> {
    #[inline]
    pub fn new(value: V) -> Self {
        Self { value, message: None }
    }

    /// Attaches a custom message used by `Display`.
    #[inline]
    pub fn with_message<M: Into<String>>(mut self, message: M) -> Self {
        self.message = Some(message.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn value(&self) -> &V {
        &self.value
    }

    #[inline]
    #[must_use]
    pub fn into_value(self) -> V {
        self.value
    }

    #[inline]
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Turns the error back into the success it was raised from.
    #[inline]
    pub fn into_outcome<F>(self) -> Outcome<V, F> {
        Outcome::Value(self.value)
    }
}

impl<V: Display> Display for HasValue<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => f.write_str(message),
            None => write!(f, "outcome unexpectedly has a value: {}", self.value),
        }
    }
}

impl<V: Debug + Display> core::error::Error for HasValue<V> {}

/// The value was requested from an outcome that has failed.
///
/// Carries the whole [`Failure`], trace included, so a
/// [`catch`](crate::bridge::catch) boundary rebuilds an equal outcome.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HasFailed<F> {
    failure: Failure<F>,
    message: Option<String>,
}

impl<F> HasFailed<F> {
    #[inline]
    pub fn new(failure: Failure<F>) -> Self {
        Self { failure, message: None }
    }

    /// Attaches a custom message used by `Display`.
    #[inline]
    pub fn with_message<M: Into<String>>(mut self, message: M) -> Self {
        self.message = Some(message.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn failure(&self) -> &Failure<F> {
        &self.failure
    }

    #[inline]
    #[must_use]
    pub fn into_failure(self) -> Failure<F> {
        self.failure
    }

    #[inline]
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Turns the error back into the failure it was raised from.
    #[inline]
    pub fn into_outcome<V>(self) -> Outcome<V, F> {
        Outcome::Failure(self.failure)
    }
}

impl<F: Display> Display for HasFailed<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => f.write_str(message),
            None => write!(f, "outcome has failed: {}", self.failure),
        }
    }
}

impl<F: Debug + Display> core::error::Error for HasFailed<F> {}

impl<F> From<Failure<F>> for HasFailed<F> {
    #[inline]
    fn from(failure: Failure<F>) -> Self {
        Self::new(failure)
    }
}

/// Every way of forcing an outcome can go wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutcomeError<V, F> {
    ValueIsNull(ValueIsNull),
    HasValue(HasValue<V>),
    HasFailed(HasFailed<F>),
}

impl<V: Display, F: Display> Display for OutcomeError<V, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ValueIsNull(err) => Display::fmt(err, f),
            Self::HasValue(err) => Display::fmt(err, f),
            Self::HasFailed(err) => Display::fmt(err, f),
        }
    }
}

impl<V, F> core::error::Error for OutcomeError<V, F>
where
    V: Debug + Display + 'static,
    F: Debug + Display + 'static,
{
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::ValueIsNull(err) => Some(err),
            Self::HasValue(err) => Some(err),
            Self::HasFailed(err) => Some(err),
        }
    }
}

impl<V, F> From<ValueIsNull> for OutcomeError<V, F> {
    #[inline]
    fn from(err: ValueIsNull) -> Self {
        Self::ValueIsNull(err)
    }
}

impl<V, F> From<HasValue<V>> for OutcomeError<V, F> {
    #[inline]
    fn from(err: HasValue<V>) -> Self {
        Self::HasValue(err)
    }
}

impl<V, F> From<HasFailed<F>> for OutcomeError<V, F> {
    #[inline]
    fn from(err: HasFailed<F>) -> Self {
        Self::HasFailed(err)
    }
}
