//! Bridge between outcomes and unwinding.
//!
//! Code inside a boundary may force outcomes with
//! [`Outcome::into_value_or_raise`] and friends, which panic with a
//! [`Raised`] payload wrapping the typed [`HasFailed`] or [`HasValue`].
//! [`catch`] at the boundary turns a raised `HasFailed<F>` back into an
//! equal failure, so callers keep writing expression-style code while the
//! outer API stays functional.
//!
//! Panics from anywhere else are not touched by [`catch`]. [`catch_all`]
//! also converts them, through a caller-supplied message mapping.
//!
//! Recovery needs unwinding; with `panic = "abort"` every raise terminates
//! the process.
//!
//! # Panic hook output
//!
//! A raise is a real panic, so the panic hook runs before [`catch`] gets
//! to recover it. The default hook prints `panicked at ...: Box<dyn Any>`
//! to stderr for every raise, including the ones that are recovered. Code
//! that raises on a hot path can install its own hook with
//! [`std::panic::set_hook`], for example one that stays quiet when
//! `info.payload().is::<Raised>()`.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{bridge::catch, Outcome};
//!
//! fn lookup(key: &str) -> Outcome<u32, String> {
//!     match key {
//!         "a" => Outcome::some(1),
//!         "b" => Outcome::some(2),
//!         other => Outcome::fail(format!("unknown key {other}")),
//!     }
//! }
//!
//! let sum = catch(|| {
//!     let a = lookup("a").into_value_or_raise();
//!     let z = lookup("z").into_value_or_raise();
//!     Outcome::some(a + z)
//! });
//!
//! assert_eq!(sum, Outcome::fail("unknown key z".to_string()));
//! ```
use crate::types::error::{HasFailed, HasValue};
use crate::types::failure::Failure;
#[cfg(feature = "std")]
use crate::config::TracePolicy;
#[cfg(feature = "std")]
use crate::types::{
    alloc_type::{Arc, String},
    outcome::Outcome,
};
#[cfg(feature = "std")]
use std::any::Any;
#[cfg(feature = "std")]
use std::panic::{catch_unwind, resume_unwind, AssertUnwindSafe};

/// Message used when a foreign panic payload is neither `&str` nor `String`.
pub const UNKNOWN_PANIC: &str = "unknown panic";

/// Message of a raised [`HasFailed`] that carries no message of its own.
pub const RAISED_FAILURE: &str = "outcome has failed";

/// Message of a raised [`HasValue`] that carries no message of its own.
pub const RAISED_VALUE: &str = "outcome unexpectedly has a value";

/// Panic payload of every raise.
///
/// Holds the typed error (`HasFailed<F>` or `HasValue<V>`) next to its text
/// and the trace of the raise, so a boundary that does not know the type
/// still gets a message and a trace.
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct Raised {
    message: String,
    trace: Option<Arc<str>>,
    payload: Box<dyn Any + Send>,
}

#[cfg(feature = "std")]
impl Raised {
    fn new<T: Any + Send>(message: String, trace: Option<Arc<str>>, payload: T) -> Self {
        Self { message, trace, payload: Box::new(payload) }
    }

    /// The raise message, or the default text of the raised error.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Trace of the raised failure, or one captured at the raise.
    #[must_use]
    pub fn trace(&self) -> Option<&str> {
        self.trace.as_deref()
    }

    #[must_use]
    pub fn is<T: Any>(&self) -> bool {
        self.payload.is::<T>()
    }

    /// Borrows the typed error if it is a `T`.
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.payload.downcast_ref::<T>()
    }

    /// Takes the typed error out if it is a `T`, handing `self` back otherwise.
    ///
    /// # Errors
    ///
    /// Returns `self` unchanged when the payload is not a `T`.
    pub fn downcast<T: Any>(self) -> Result<T, Self> {
        match self.payload.downcast::<T>() {
            Ok(typed) => Ok(*typed),
            Err(payload) => Err(Self { message: self.message, trace: self.trace, payload }),
        }
    }
}

#[cfg(feature = "std")]
impl core::fmt::Display for Raised {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Raises `failure` as a [`HasFailed`] panic.
///
/// # Panics
///
/// Always.
#[track_caller]
pub fn raise<F>(failure: Failure<F>) -> !
where
    F: Send + 'static,
{
    raise_failed(HasFailed::new(failure))
}

#[cfg(feature = "std")]
#[track_caller]
pub(crate) fn raise_failed<F>(err: HasFailed<F>) -> !
where
    F: Send + 'static,
{
    let message = err.message().unwrap_or(RAISED_FAILURE).to_string();
    let trace = err.failure().shared_trace().or_else(|| TracePolicy::Global.capture());
    std::panic::panic_any(Raised::new(message, trace, err))
}

#[cfg(not(feature = "std"))]
#[track_caller]
pub(crate) fn raise_failed<F>(err: HasFailed<F>) -> !
where
    F: Send + 'static,
{
    panic!("{}", err.message().unwrap_or(RAISED_FAILURE))
}

#[cfg(feature = "std")]
#[track_caller]
pub(crate) fn raise_has_value<V>(err: HasValue<V>) -> !
where
    V: Send + 'static,
{
    let message = err.message().unwrap_or(RAISED_VALUE).to_string();
    std::panic::panic_any(Raised::new(message, TracePolicy::Global.capture(), err))
}

#[cfg(not(feature = "std"))]
#[track_caller]
pub(crate) fn raise_has_value<V>(err: HasValue<V>) -> !
where
    V: Send + 'static,
{
    panic!("{}", err.message().unwrap_or(RAISED_VALUE))
}

/// Runs `func`, converting a raised [`HasFailed<F>`] back into a failure.
///
/// A normal return is passed through untouched. Any other panic, including
/// a `HasFailed` of a different failure type, keeps unwinding.
#[cfg(feature = "std")]
pub fn catch<V, F, Func>(func: Func) -> Outcome<V, F>
where
    Func: FnOnce() -> Outcome<V, F>,
    F: Send + 'static,
{
    match catch_unwind(AssertUnwindSafe(func)) {
        Ok(outcome) => outcome,
        Err(payload) => match payload.downcast::<Raised>() {
            Ok(raised) => match (*raised).downcast::<HasFailed<F>>() {
                Ok(err) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(
                        target: "outcome_rail::bridge",
                        traced = err.failure().has_trace(),
                        "recovered raised failure"
                    );
                    err.into_outcome()
                }
                Err(other) => resume_unwind(Box::new(other)),
            },
            Err(other) => resume_unwind(other),
        },
    }
}

/// Runs `func`, converting every panic into a failure.
///
/// A raised [`HasFailed<F>`] is recovered exactly as in [`catch`]. Any other
/// panic has its message passed through `mapping`: the raise message for
/// raises of other types, the panic text for foreign panics.
///
/// The resulting failure always carries a trace. Raises bring the trace of
/// the raised failure, or one taken at the raise when capture is enabled.
/// Otherwise the trace is captured here, after unwinding, so it shows the
/// boundary and not the frames inside `func` that panicked.
///
/// # Examples
///
/// ```
/// use outcome_rail::{bridge::catch_all, Outcome};
///
/// #[derive(Debug, PartialEq)]
/// enum AppError {
///     Crashed(String),
/// }
///
/// let outcome: Outcome<i32, AppError> = catch_all(|| panic!("index out of range"), AppError::Crashed);
///
/// let failure = outcome.try_failure().unwrap();
/// assert_eq!(failure.value(), &AppError::Crashed("index out of range".to_string()));
/// assert!(failure.has_trace());
/// ```
#[cfg(feature = "std")]
pub fn catch_all<V, F, Func, Mapping>(func: Func, mapping: Mapping) -> Outcome<V, F>
where
    Func: FnOnce() -> Outcome<V, F>,
    Mapping: FnOnce(String) -> F,
    F: Send + 'static,
{
    let payload = match catch_unwind(AssertUnwindSafe(func)) {
        Ok(outcome) => return outcome,
        Err(payload) => payload,
    };

    let (message, trace) = match payload.downcast::<Raised>() {
        Ok(raised) => match (*raised).downcast::<HasFailed<F>>() {
            Ok(err) => return err.into_outcome(),
            Err(other) => (other.message, other.trace),
        },
        Err(other) => (panic_message(other.as_ref()), None),
    };

    #[cfg(feature = "tracing")]
    tracing::warn!(
        target: "outcome_rail::bridge",
        panic = %message,
        "converted panic into failure"
    );
    let trace = trace.or_else(crate::config::capture_trace);
    Outcome::Failure(Failure::from_parts(mapping(message), trace))
}

/// Extracts the text of a panic payload.
///
/// Raises yield their message; foreign panics their `&str` or `String`
/// text, or [`UNKNOWN_PANIC`].
#[cfg(feature = "std")]
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(raised) = payload.downcast_ref::<Raised>() {
        raised.message.clone()
    } else if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        UNKNOWN_PANIC.to_string()
    }
}
