//! Conversion helpers between `Outcome`, `Result`, and `Option`.
//!
//! These adapters make it straightforward to adopt `outcome-rail`
//! incrementally: wrap results coming from existing APIs, and flatten
//! outcomes back into plain results when handing data to code that does not
//! know about them.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::convert::*;
//!
//! let outcome = result_to_outcome(Ok::<i32, &str>(42));
//! assert!(outcome.has_value());
//!
//! let back = outcome_to_result(outcome);
//! assert_eq!(back, Ok(42));
//! ```

use crate::types::failure::Failure;
use crate::types::outcome::Outcome;
use crate::FailureVec;
use core::iter::FusedIterator;

/// Converts an `Outcome` into a `Result`, dropping any trace.
///
/// # Examples
///
/// ```
/// use outcome_rail::{convert::outcome_to_result, Outcome};
///
/// assert_eq!(outcome_to_result(Outcome::<i32, &str>::some(7)), Ok(7));
/// assert_eq!(outcome_to_result(Outcome::<i32, &str>::fail("boom")), Err("boom"));
/// ```
#[inline]
pub fn outcome_to_result<V, F>(outcome: Outcome<V, F>) -> Result<V, F> {
    outcome.into_result()
}

/// Converts a `Result` into an `Outcome`.
///
/// The error side goes through [`Outcome::fail`], so it picks up a trace when
/// global capture is on.
#[inline]
pub fn result_to_outcome<V, F>(result: Result<V, F>) -> Outcome<V, F> {
    result.into()
}

/// Converts an `Option` into an `Outcome`, failing with `failure` on `None`.
///
/// # Examples
///
/// ```
/// use outcome_rail::{convert::option_to_outcome, Outcome};
///
/// assert_eq!(option_to_outcome(Some(1), "absent"), Outcome::some(1));
/// assert_eq!(option_to_outcome(None::<i32>, "absent"), Outcome::fail("absent"));
/// ```
#[inline]
pub fn option_to_outcome<V, F>(option: Option<V>, failure: F) -> Outcome<V, F> {
    Outcome::some_not_null(option, failure)
}

/// Strips the failure wrapper from a `Result<V, Failure<F>>`.
///
/// # Examples
///
/// ```
/// use outcome_rail::{convert::flatten_failure_result, Failure};
///
/// let wrapped: Result<i32, Failure<&str>> = Err(Failure::with_trace("gone", "frame 0"));
/// assert_eq!(flatten_failure_result(wrapped), Err("gone"));
/// ```
#[inline]
pub fn flatten_failure_result<V, F>(result: Result<V, Failure<F>>) -> Result<V, F> {
    result.map_err(Failure::into_value)
}

/// Collects failure payloads into a single `Outcome`.
///
/// # Returns
///
/// * `Outcome::Value(())` if there are no failures
/// * A failure holding all of them, in order, otherwise
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::collect_failures;
///
/// assert!(collect_failures(Vec::<&str>::new()).has_value());
/// assert!(collect_failures(vec!["a", "b"]).has_failed());
/// ```
#[inline]
pub fn collect_failures<F, I>(failures: I) -> Outcome<(), FailureVec<F>>
where
    I: IntoIterator<Item = F>,
{
    let failures: FailureVec<F> = failures.into_iter().collect();
    if failures.is_empty() {
        Outcome::Value(())
    } else {
        Outcome::fail(failures)
    }
}

/// Iterator returned by [`split_outcome_failures`].
pub enum SplitOutcomeIter<V, F> {
    Value(Option<V>),
    Failures(<FailureVec<F> as IntoIterator>::IntoIter),
}

impl<V, F> Iterator for SplitOutcomeIter<V, F> {
    type Item = Result<V, F>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Value(value) => value.take().map(Ok),
            Self::Failures(iter) => iter.next().map(Err),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Value(value) => {
                let len = usize::from(value.is_some());
                (len, Some(len))
            }
            Self::Failures(iter) => iter.size_hint(),
        }
    }
}

impl<V, F> ExactSizeIterator for SplitOutcomeIter<V, F> {}
impl<V, F> FusedIterator for SplitOutcomeIter<V, F> {}

/// Splits an accumulated outcome into individual `Result` values.
///
/// Yields a single `Ok(value)` on success, or one `Err` per accumulated
/// failure payload.
///
/// # Examples
///
/// ```
/// use outcome_rail::{convert::split_outcome_failures, transpose, Outcome};
///
/// let combined = transpose(vec![Outcome::<i32, &str>::fail("e1"), Outcome::fail("e2")]);
/// let results: Vec<_> = split_outcome_failures(combined).collect();
/// assert_eq!(results, vec![Err("e1"), Err("e2")]);
/// ```
pub fn split_outcome_failures<V, F>(outcome: Outcome<V, FailureVec<F>>) -> SplitOutcomeIter<V, F> {
    match outcome {
        Outcome::Value(value) => SplitOutcomeIter::Value(Some(value)),
        Outcome::Failure(failure) => SplitOutcomeIter::Failures(failure.into_value().into_iter()),
    }
}
