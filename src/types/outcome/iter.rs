use core::iter::FusedIterator;

use super::Outcome;
use crate::types::alloc_type::{Arc, Vec};
use crate::types::failure::Failure;
use crate::types::FailureVec;

/// Borrowing iterator over the value of an outcome (zero or one item).
pub struct Iter<'a, V> {
    inner: Option<&'a V>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::from(self.inner.is_some());
        (len, Some(len))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}
impl<V> FusedIterator for Iter<'_, V> {}

/// Owning iterator over the value of an outcome (zero or one item).
pub struct IntoIter<V> {
    inner: Option<V>,
}

impl<V> Iterator for IntoIter<V> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::from(self.inner.is_some());
        (len, Some(len))
    }
}

impl<V> ExactSizeIterator for IntoIter<V> {}
impl<V> FusedIterator for IntoIter<V> {}

impl<V, F> Outcome<V, F> {
    /// Iterates over the value, if any.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter { inner: self.try_value() }
    }
}

impl<V, F> IntoIterator for Outcome<V, F> {
    type Item = V;
    type IntoIter = IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        match self {
            Outcome::Value(value) => IntoIter { inner: Some(value) },
            Outcome::Failure(_) => IntoIter { inner: None },
        }
    }
}

impl<'a, V, F> IntoIterator for &'a Outcome<V, F> {
    type Item = &'a V;
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Collects outcomes all-or-nothing.
///
/// If every outcome succeeded the values are collected into `C`. Otherwise
/// the result is a single failure holding every failure payload, in input
/// order; the successful values are dropped. The combined failure keeps the
/// trace of the first failure encountered.
///
/// # Examples
///
/// ```
/// use outcome_rail::{FailureVec, Outcome};
///
/// let all_ok: Outcome<Vec<i32>, FailureVec<&str>> =
///     vec![Outcome::some(1), Outcome::some(2)].into_iter().collect();
/// assert_eq!(all_ok.try_value(), Some(&vec![1, 2]));
///
/// let mixed: Outcome<Vec<i32>, FailureVec<&str>> =
///     vec![Outcome::some(1), Outcome::fail("a"), Outcome::fail("b")].into_iter().collect();
/// assert_eq!(mixed.try_failure().unwrap().as_slice(), &["a", "b"]);
/// ```
impl<V, F, C> FromIterator<Outcome<V, F>> for Outcome<C, FailureVec<F>>
where
    C: FromIterator<V>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Outcome<V, F>>,
    {
        let mut values: Vec<V> = Vec::new();
        let mut failures = FailureVec::new();
        let mut first_trace: Option<Arc<str>> = None;

        for outcome in iter {
            match outcome {
                Outcome::Value(value) if failures.is_empty() => values.push(value),
                Outcome::Value(_) => {}
                Outcome::Failure(failure) => {
                    let (payload, trace) = failure.into_parts();
                    if failures.is_empty() {
                        first_trace = trace;
                        values.clear();
                    }
                    failures.push(payload);
                }
            }
        }

        if failures.is_empty() {
            Outcome::Value(values.into_iter().collect())
        } else {
            Outcome::Failure(Failure::from_parts(failures, first_trace))
        }
    }
}

/// Collapses a sequence of outcomes into one outcome of a sequence.
///
/// See the [`FromIterator`] implementation for the exact semantics.
///
/// # Examples
///
/// ```
/// use outcome_rail::{transpose, Outcome};
///
/// let failed = transpose(vec![
///     Outcome::some(1),
///     Outcome::fail("e1"),
///     Outcome::fail("e2"),
/// ]);
/// assert_eq!(failed.try_failure().unwrap().as_slice(), &["e1", "e2"]);
/// ```
pub fn transpose<V, F, I>(outcomes: I) -> Outcome<Vec<V>, FailureVec<F>>
where
    I: IntoIterator<Item = Outcome<V, F>>,
{
    outcomes.into_iter().collect()
}

/// Splits outcomes into successful values and failures, keeping both.
///
/// Unlike [`transpose`] nothing is discarded.
///
/// # Examples
///
/// ```
/// use outcome_rail::{partition, Outcome};
///
/// let (values, failures) = partition(vec![
///     Outcome::some(1),
///     Outcome::fail("bad"),
///     Outcome::some(3),
/// ]);
/// assert_eq!(values, vec![1, 3]);
/// assert_eq!(failures.len(), 1);
/// ```
pub fn partition<V, F, I>(outcomes: I) -> (Vec<V>, FailureVec<Failure<F>>)
where
    I: IntoIterator<Item = Outcome<V, F>>,
{
    let mut values = Vec::new();
    let mut failures = FailureVec::new();
    for outcome in outcomes {
        match outcome {
            Outcome::Value(value) => values.push(value),
            Outcome::Failure(failure) => failures.push(failure),
        }
    }
    (values, failures)
}
