//! Extension traits that connect outcomes to the rest of the ecosystem.
//!
//! - [`IntoOutcome`]: lift a `Result` into an [`Outcome`](crate::Outcome)
//! - [`OptionOutcomeExt`]: lift an `Option`, supplying the failure for `None`
//! - `OutcomeTracingExt`: log failures through `tracing` (requires the `tracing` feature)

pub mod into_outcome;
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use into_outcome::{IntoOutcome, OptionOutcomeExt};
#[cfg(feature = "tracing")]
pub use tracing_ext::OutcomeTracingExt;
