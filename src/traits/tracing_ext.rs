//! Tracing integration for outcome-rail.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.1", features = ["tracing"] }
//! ```

use core::fmt::Display;

use tracing::Span;

use crate::types::outcome::Outcome;

/// Logs failures as they flow past, leaving the outcome untouched.
///
/// # Example
///
/// ```rust,ignore
/// use outcome_rail::traits::OutcomeTracingExt;
///
/// let user = load_user(id).trace_failure().map(render);
/// ```
pub trait OutcomeTracingExt: Sized {
    /// Emits a `warn` event for a failure in the current span.
    fn trace_failure(self) -> Self;

    /// Emits a `warn` event for a failure inside `span`.
    fn trace_failure_in(self, span: &Span) -> Self;
}

impl<V, F: Display> OutcomeTracingExt for Outcome<V, F> {
    fn trace_failure(self) -> Self {
        if let Outcome::Failure(failure) = &self {
            tracing::warn!(
                target: "outcome_rail",
                failure = %failure,
                traced = failure.has_trace(),
                "outcome failed"
            );
        }
        self
    }

    fn trace_failure_in(self, span: &Span) -> Self {
        span.in_scope(|| self.trace_failure())
    }
}
