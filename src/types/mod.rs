//! Container, failure and error types.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{Failure, Outcome};
//!
//! let failed: Outcome<u32, &str> = Failure::untraced("offline").into();
//! assert_eq!(failed.map(|n| n + 1).to_string(), "offline");
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod error;
pub mod failure;
pub mod outcome;

pub use error::*;
pub use failure::*;
pub use outcome::*;

/// SmallVec-backed collection used for accumulating failures.
///
/// Uses inline storage for 1 element, the common case when a batch fails
/// for a single reason.
pub type FailureVec<F> = SmallVec<[F; 1]>;
