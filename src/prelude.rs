//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use outcome_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`fail!`], [`try_value!`], [`ensure!`]
//! - **Types**: [`Outcome`], [`Failure`], [`FailureVec`], [`HasFailed`], [`HasValue`], [`ValueIsNull`]
//! - **Functions**: [`some`], [`fail()`], [`transpose`], [`catch`], [`catch_all`]
//! - **Traits**: [`IntoOutcome`], [`OptionOutcomeExt`]
//!
//! # Examples
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! fn find_user(id: u64) -> Outcome<&'static str> {
//!     match id {
//!         1 => some("ada"),
//!         _ => fail!("no user {id}"),
//!     }
//! }
//!
//! assert_eq!(find_user(1).value_or("anonymous"), "ada");
//! assert_eq!(find_user(2).value_or("anonymous"), "anonymous");
//! ```

// Macros; `fail` also brings the function of the same name
pub use crate::{ensure, fail, try_value};

// Core types
pub use crate::types::{
    some, transpose, Failure, FailureVec, HasFailed, HasValue, Outcome, ValueIsNull,
};

// Bridge
#[cfg(feature = "std")]
pub use crate::bridge::{catch, catch_all};

// Traits
pub use crate::traits::{IntoOutcome, OptionOutcomeExt};
