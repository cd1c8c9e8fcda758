//! Failure payload paired with an optional diagnostic trace.
//!
//! [`Failure`] is what an [`Outcome`](crate::Outcome) stores on its failure
//! branch. The trace is a side channel: equality, ordering and hashing look
//! at the payload only.
use core::cmp::Ordering;
use core::fmt::{self, Display};
use core::hash::{Hash, Hasher};
use core::ops::Deref;

use crate::config::TracePolicy;
use crate::types::alloc_type::Arc;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A failure payload with an optional captured stack trace.
///
/// # Examples
///
/// ```
/// use outcome_rail::Failure;
///
/// let a = Failure::untraced("timeout");
/// let b = Failure::with_trace("timeout", "frame 0: main");
///
/// assert_eq!(a, b);
/// assert!(!a.has_trace());
/// assert_eq!(b.trace(), Some("frame 0: main"));
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
pub struct Failure<F> {
    value: F,
    #[cfg_attr(feature = "serde", serde(skip))]
    trace: Option<Arc<str>>,
}

impl<F> Failure<F> {
    /// Wraps `value`, capturing a trace iff global capture is enabled.
    #[inline]
    pub fn new(value: F) -> Self {
        Self::with_policy(value, TracePolicy::Global)
    }

    /// Wraps `value`, deciding about the trace through `policy`.
    #[inline]
    pub fn with_policy(value: F, policy: TracePolicy) -> Self {
        Self { value, trace: policy.capture() }
    }

    /// Wraps `value` without a trace, ignoring the global setting.
    #[inline]
    pub fn untraced(value: F) -> Self {
        Self { value, trace: None }
    }

    /// Wraps `value` with an explicitly supplied trace.
    #[inline]
    pub fn with_trace<T>(value: F, trace: T) -> Self
    where
        T: Into<Arc<str>>,
    {
        Self { value, trace: Some(trace.into()) }
    }

    /// Returns the payload.
    #[inline]
    #[must_use]
    pub fn value(&self) -> &F {
        &self.value
    }

    /// Consumes the wrapper and returns the payload, dropping the trace.
    #[inline]
    #[must_use]
    pub fn into_value(self) -> F {
        self.value
    }

    /// Splits the wrapper into payload and trace.
    #[inline]
    #[must_use]
    pub fn into_parts(self) -> (F, Option<Arc<str>>) {
        (self.value, self.trace)
    }

    /// Returns the captured trace, if any.
    #[inline]
    #[must_use]
    pub fn trace(&self) -> Option<&str> {
        self.trace.as_deref()
    }

    #[inline]
    #[must_use]
    pub fn has_trace(&self) -> bool {
        self.trace.is_some()
    }

    /// Transforms the payload, keeping the trace.
    #[inline]
    pub fn map<G, M>(self, f: M) -> Failure<G>
    where
        M: FnOnce(F) -> G,
    {
        Failure { value: f(self.value), trace: self.trace }
    }

    pub(crate) fn from_parts(value: F, trace: Option<Arc<str>>) -> Self {
        Self { value, trace }
    }

    pub(crate) fn shared_trace(&self) -> Option<Arc<str>> {
        self.trace.clone()
    }
}

impl<F> Deref for Failure<F> {
    type Target = F;

    #[inline]
    fn deref(&self) -> &F {
        &self.value
    }
}

impl<F: PartialEq> PartialEq for Failure<F> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<F: Eq> Eq for Failure<F> {}

impl<F: PartialOrd> PartialOrd for Failure<F> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<F: Ord> Ord for Failure<F> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<F: Hash> Hash for Failure<F> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<F: Default> Default for Failure<F> {
    fn default() -> Self {
        Self::untraced(F::default())
    }
}

impl<F: Display> Display for Failure<F> {
    /// Prints the payload; the alternate form (`{:#}`) appends the trace.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value, f)?;
        if f.alternate() {
            if let Some(trace) = &self.trace {
                write!(f, "\ntrace:\n{}", trace)?;
            }
        }
        Ok(())
    }
}

impl<F> From<F> for Failure<F> {
    #[inline]
    fn from(value: F) -> Self {
        Self::new(value)
    }
}
