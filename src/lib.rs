//! Railway-style outcomes: a value or a failure, with an optional diagnostic trace.
//!
//! [`Outcome<V, F>`] holds exactly one of a success value `V` or a
//! [`Failure<F>`]. `Outcome<V>` defaults the failure payload to `String`,
//! the text form most call sites want. Combinators keep code on the rails;
//! the [`bridge`] module lets expression-style code force values and
//! recover the failure at a boundary.
//!
//! # Examples
//!
//! ## Chaining
//!
//! ```
//! use outcome_rail::{fail, Outcome};
//!
//! fn parse_port(raw: &str) -> Outcome<u16> {
//!     match raw.parse::<u16>() {
//!         Ok(port) => Outcome::some(port),
//!         Err(err) => fail!("bad port {raw:?}: {err}"),
//!     }
//! }
//!
//! let port = parse_port("8080")
//!     .filter_msg(|port| *port >= 1024, "privileged port")
//!     .map(|port| port + 1);
//!
//! assert_eq!(port, Outcome::some(8081));
//! assert_eq!(parse_port("80").filter_msg(|p| *p >= 1024, "privileged port").failure_message(), Some("privileged port"));
//! ```
//!
//! ## Collecting
//!
//! ```
//! use outcome_rail::{transpose, FailureVec, Outcome};
//!
//! let all: Outcome<Vec<i32>, FailureVec<&str>> =
//!     transpose(vec![Outcome::some(1), Outcome::fail("a"), Outcome::fail("b")]);
//!
//! assert_eq!(all.try_failure().map(|f| f.value().as_slice()), Some(&["a", "b"][..]));
//! ```
//!
//! ## Boundaries
//!
//! ```
//! use outcome_rail::{catch, Outcome};
//!
//! let outcome: Outcome<i32> = catch(|| {
//!     let n = Outcome::<i32>::failed("disk full").into_value_or_raise();
//!     Outcome::some(n + 1)
//! });
//!
//! assert_eq!(outcome.failure_message(), Some("disk full"));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Raising outcomes as panics and catching them back at a boundary
pub mod bridge;
/// Process-wide trace capture switch and per-call policies
pub mod config;
/// Conversions between outcomes, `Result`, `Option` and failure batches
pub mod convert;
/// Macros for building and propagating outcomes
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// The text-failure form `Outcome<V>`
pub mod text;
/// Extension traits for lifting foreign types and logging failures
pub mod traits;
/// Outcome, failure and error types
pub mod types;

pub use config::{TraceCaptureGuard, TracePolicy};
pub use convert::*;
pub use traits::*;
pub use types::*;

#[cfg(feature = "std")]
pub use bridge::{catch, catch_all};
pub use bridge::raise;

#[doc(hidden)]
pub mod __private {
    #[cfg(not(feature = "std"))]
    pub use alloc::format;
    #[cfg(feature = "std")]
    pub use std::format;
}
