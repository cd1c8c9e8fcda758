//! Process-wide diagnostic trace capture.
//!
//! Constructing a failure may attach a captured stack trace. Whether that
//! happens is decided by a single global flag, off by default, that is read
//! (never written) at failure-construction time.
//!
//! The flag is process-wide and carries no concurrency guarantee beyond
//! atomicity: toggling it while other threads build failures only changes
//! whether those failures get a trace, never their payloads. Set it once at
//! start-up, or use [`TraceCaptureGuard`] in tests so the previous value is
//! restored.
//!
//! Call sites that want to ignore the global setting pass a
//! [`TracePolicy`] explicitly, see [`Failure::with_policy`](crate::Failure::with_policy).
//!
//! # Examples
//!
//! ```
//! use outcome_rail::config::{trace_capture_enabled, TraceCaptureGuard};
//!
//! assert!(!trace_capture_enabled());
//! {
//!     let _guard = TraceCaptureGuard::enable();
//!     assert!(trace_capture_enabled());
//! }
//! assert!(!trace_capture_enabled());
//! ```
use core::sync::atomic::{AtomicBool, Ordering};

use crate::types::alloc_type::Arc;

static CAPTURE_TRACES: AtomicBool = AtomicBool::new(false);

/// Returns `true` if failures built with [`TracePolicy::Global`] capture a trace.
#[inline]
#[must_use]
pub fn trace_capture_enabled() -> bool {
    CAPTURE_TRACES.load(Ordering::Relaxed)
}

/// Sets the global capture flag and returns its previous value.
#[inline]
pub fn set_trace_capture(enabled: bool) -> bool {
    let previous = CAPTURE_TRACES.swap(enabled, Ordering::Relaxed);
    #[cfg(feature = "tracing")]
    {
        if previous != enabled {
            tracing::trace!(target: "outcome_rail::config", enabled, "trace capture toggled");
        }
    }
    previous
}

/// Turns global trace capture on.
#[inline]
pub fn enable_trace_capture() {
    set_trace_capture(true);
}

/// Turns global trace capture off.
#[inline]
pub fn disable_trace_capture() {
    set_trace_capture(false);
}

/// Scoped override of the global capture flag.
///
/// The previous value is restored when the guard is dropped. Guards nest
/// correctly as long as they are dropped in reverse order of creation.
///
/// # Examples
///
/// ```
/// use outcome_rail::{config::TraceCaptureGuard, Outcome};
///
/// let _guard = TraceCaptureGuard::enable();
/// let failed: Outcome<i32, &str> = Outcome::fail("boom");
/// # #[cfg(feature = "std")]
/// assert!(failed.try_failure().unwrap().has_trace());
/// ```
#[must_use = "the previous setting is restored as soon as the guard is dropped"]
#[derive(Debug)]
pub struct TraceCaptureGuard {
    previous: bool,
}

impl TraceCaptureGuard {
    /// Sets the flag to `enabled` until the guard is dropped.
    pub fn new(enabled: bool) -> Self {
        Self { previous: set_trace_capture(enabled) }
    }

    /// Enables capture until the guard is dropped.
    pub fn enable() -> Self {
        Self::new(true)
    }

    /// Disables capture until the guard is dropped.
    pub fn disable() -> Self {
        Self::new(false)
    }
}

impl Drop for TraceCaptureGuard {
    fn drop(&mut self) {
        set_trace_capture(self.previous);
    }
}

/// How a failure decides whether to capture a diagnostic trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TracePolicy {
    /// Follow the process-wide flag.
    #[default]
    Global,
    /// Always capture, regardless of the flag.
    Always,
    /// Never capture.
    Never,
}

impl TracePolicy {
    /// Returns `true` if this policy captures a trace right now.
    #[inline]
    #[must_use]
    pub fn is_active(self) -> bool {
        match self {
            Self::Global => trace_capture_enabled(),
            Self::Always => true,
            Self::Never => false,
        }
    }

    /// Captures the current stack as text when the policy is active.
    ///
    /// Without the `std` feature there is no way to walk the stack, so this
    /// always returns `None`.
    #[must_use]
    pub fn capture(self) -> Option<Arc<str>> {
        if !self.is_active() {
            return None;
        }
        capture_trace()
    }
}

#[cfg(feature = "std")]
pub(crate) fn capture_trace() -> Option<Arc<str>> {
    let trace = std::backtrace::Backtrace::force_capture().to_string();
    #[cfg(feature = "tracing")]
    tracing::trace!(
        target: "outcome_rail::config",
        frames = trace.lines().count(),
        "captured diagnostic trace"
    );
    Some(Arc::from(trace))
}

#[cfg(not(feature = "std"))]
pub(crate) fn capture_trace() -> Option<Arc<str>> {
    None
}
