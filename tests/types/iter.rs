use outcome_rail::{partition, transpose, FailureVec, Outcome, TracePolicy};
use std::collections::BTreeSet;

#[test]
fn transpose_collects_all_values() {
    let all = transpose(vec![
        Outcome::<i32, &str>::some(1),
        Outcome::some(2),
        Outcome::some(3),
    ]);

    assert_eq!(all, Outcome::some(vec![1, 2, 3]));
}

#[test]
fn transpose_keeps_every_failure_in_order() {
    let mixed = transpose(vec![
        Outcome::some(1),
        Outcome::fail("e1"),
        Outcome::fail("e2"),
    ]);

    let failure = mixed.try_failure().unwrap();
    assert_eq!(failure.as_slice(), &["e1", "e2"]);
}

#[test]
fn transpose_of_nothing_is_an_empty_success() {
    let empty: Vec<Outcome<i32, &str>> = Vec::new();
    assert_eq!(transpose(empty), Outcome::some(Vec::new()));
}

#[test]
fn transpose_keeps_the_first_failure_trace() {
    let combined = transpose(vec![
        Outcome::<i32, &str>::some(0),
        Outcome::Failure(outcome_rail::Failure::with_trace("a", "first")),
        Outcome::Failure(outcome_rail::Failure::with_trace("b", "second")),
    ]);

    assert_eq!(combined.try_failure().and_then(|f| f.trace()), Some("first"));
}

#[test]
fn collect_supports_any_target_collection() {
    let unique: Outcome<BTreeSet<u8>, FailureVec<&str>> =
        [3u8, 1, 3, 2].into_iter().map(Outcome::some).collect();
    assert_eq!(unique.value_or(BTreeSet::new()).into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[test]
fn partition_keeps_values_and_failures() {
    let (values, failures) = partition(vec![
        Outcome::<i32, &str>::some(1),
        Outcome::fail_with_policy("bad", TracePolicy::Always),
        Outcome::some(3),
    ]);

    assert_eq!(values, vec![1, 3]);
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].value(), &"bad");
    assert!(failures[0].has_trace());
}

#[test]
fn iterating_an_outcome_yields_at_most_one_value() {
    let ok = Outcome::<i32, &str>::some(4);
    assert_eq!(ok.iter().len(), 1);
    assert_eq!((&ok).into_iter().copied().collect::<Vec<_>>(), vec![4]);
    assert_eq!(ok.into_iter().collect::<Vec<_>>(), vec![4]);

    let failed = Outcome::<i32, &str>::fail("x");
    assert_eq!(failed.iter().next(), None);
    assert_eq!(failed.into_iter().len(), 0);
}

#[test]
fn flat_map_over_iterators_skips_failures() {
    let total: i32 = vec![Outcome::<i32, &str>::some(1), Outcome::fail("x"), Outcome::some(5)]
        .into_iter()
        .flatten()
        .sum();

    assert_eq!(total, 6);
}
