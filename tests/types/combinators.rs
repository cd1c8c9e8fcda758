use outcome_rail::{Outcome, TracePolicy};
use std::cell::Cell;

#[test]
fn map_transforms_only_values() {
    let calls = Cell::new(0);

    let doubled = Outcome::<i32, &str>::some(21).map(|n| {
        calls.set(calls.get() + 1);
        n * 2
    });
    assert_eq!(doubled, Outcome::some(42));

    let skipped = Outcome::<i32, &str>::fail("boom").map(|n| {
        calls.set(calls.get() + 1);
        n * 2
    });
    assert_eq!(skipped, Outcome::fail("boom"));
    assert_eq!(calls.get(), 1);
}

#[test]
fn map_keeps_the_failure_trace() {
    let failed = Outcome::<i32, &str>::fail_with_policy("boom", TracePolicy::Always);
    let mapped = failed.map(|n| n.to_string());

    assert!(mapped.try_failure().is_some_and(|f| f.has_trace()));
}

#[test]
fn map_fail_transforms_only_failures_and_keeps_trace() {
    let failed = Outcome::<i32, &str>::fail_with_policy("404", TracePolicy::Always);
    let trace = failed.try_failure().and_then(|f| f.trace()).map(str::to_owned);

    let mapped = failed.map_fail(|code| code.parse::<u16>().unwrap_or(500));
    let failure = mapped.try_failure().unwrap();
    assert_eq!(failure.value(), &404);
    assert_eq!(failure.trace().map(str::to_owned), trace);

    let ok = Outcome::<i32, &str>::some(1).map_fail(|e| e.len());
    assert_eq!(ok, Outcome::some(1));
}

#[test]
fn flat_map_chains_fallible_steps() {
    fn half(n: i32) -> Outcome<i32, String> {
        if n % 2 == 0 {
            Outcome::some(n / 2)
        } else {
            Outcome::fail(format!("{n} is odd"))
        }
    }

    assert_eq!(Outcome::some(8).flat_map(half).flat_map(half), Outcome::some(2));
    assert_eq!(
        Outcome::some(6).flat_map(half).flat_map(half),
        Outcome::fail("3 is odd".to_string())
    );
    assert_eq!(
        Outcome::<i32, String>::fail("start".to_string()).flat_map(half),
        Outcome::fail("start".to_string())
    );
}

#[test]
fn flatten_removes_one_level() {
    let nested: Outcome<Outcome<i32, &str>, &str> = Outcome::some(Outcome::some(1));
    assert_eq!(nested.flatten(), Outcome::some(1));

    let inner_failed: Outcome<Outcome<i32, &str>, &str> = Outcome::some(Outcome::fail("inner"));
    assert_eq!(inner_failed.flatten(), Outcome::fail("inner"));

    let outer_failed: Outcome<Outcome<i32, &str>, &str> = Outcome::fail("outer");
    assert_eq!(outer_failed.flatten(), Outcome::fail("outer"));
}

#[test]
fn match_with_runs_exactly_one_branch() {
    let describe = |o: Outcome<i32, &str>| {
        o.match_with(|v| format!("value {v}"), |f| format!("failure {}", f.value()))
    };

    assert_eq!(describe(Outcome::some(3)), "value 3");
    assert_eq!(describe(Outcome::fail("eof")), "failure eof");
}

#[test]
fn match_do_runs_side_effects() {
    let seen = Cell::new((0, 0));

    Outcome::<i32, &str>::some(1).match_do(
        |_| seen.set((seen.get().0 + 1, seen.get().1)),
        |_| seen.set((seen.get().0, seen.get().1 + 1)),
    );
    Outcome::<i32, &str>::fail("x").match_do(
        |_| seen.set((seen.get().0 + 1, seen.get().1)),
        |_| seen.set((seen.get().0, seen.get().1 + 1)),
    );

    assert_eq!(seen.get(), (1, 1));
}

#[test]
fn filter_fails_when_predicate_rejects() {
    let kept = Outcome::<i32, &str>::some(10).filter(|n| *n > 5, "too small");
    assert_eq!(kept, Outcome::some(10));

    let rejected = Outcome::<i32, &str>::some(3).filter(|n| *n > 5, "too small");
    assert_eq!(rejected, Outcome::fail("too small"));

    let already_failed = Outcome::<i32, &str>::fail("earlier").filter(|_| false, "later");
    assert_eq!(already_failed, Outcome::fail("earlier"));
}

#[test]
fn filter_with_builds_failure_lazily() {
    let built = Cell::new(false);

    let kept = Outcome::<i32, &str>::some(1).filter_with(
        |_| true,
        || {
            built.set(true);
            "rejected"
        },
    );
    assert_eq!(kept, Outcome::some(1));
    assert!(!built.get());

    let rejected = Outcome::<i32, &str>::some(1).filter_with(
        |_| false,
        || {
            built.set(true);
            "rejected"
        },
    );
    assert_eq!(rejected, Outcome::fail("rejected"));
    assert!(built.get());
}

#[test]
fn or_replaces_failures_only() {
    assert_eq!(Outcome::<i32, &str>::some(1).or(Outcome::some(2)), Outcome::some(1));
    assert_eq!(Outcome::<i32, &str>::fail("x").or(Outcome::some(2)), Outcome::some(2));
    assert_eq!(Outcome::<i32, &str>::fail("x").or(Outcome::fail("y")), Outcome::fail("y"));
}

#[test]
fn or_else_is_lazy() {
    let calls = Cell::new(0);
    let fallback = || {
        calls.set(calls.get() + 1);
        Outcome::some(0)
    };

    assert_eq!(Outcome::<i32, &str>::some(1).or_else(fallback), Outcome::some(1));
    assert_eq!(calls.get(), 0);
    assert_eq!(Outcome::<i32, &str>::fail("x").or_else(fallback), Outcome::some(0));
    assert_eq!(calls.get(), 1);
}

#[test]
fn value_or_returns_alternative_on_failure() {
    assert_eq!(Outcome::<i32, &str>::some(5).value_or(0), 5);
    assert_eq!(Outcome::<i32, &str>::fail("x").value_or(0), 0);
}

#[test]
fn value_or_else_factory_runs_only_on_failure() {
    let calls = Cell::new(0);
    let factory = || {
        calls.set(calls.get() + 1);
        -1
    };

    assert_eq!(Outcome::<i32, &str>::some(5).value_or_else(factory), 5);
    assert_eq!(calls.get(), 0);

    assert_eq!(Outcome::<i32, &str>::fail("x").value_or_else(factory), -1);
    assert_eq!(calls.get(), 1);
}

#[test]
fn value_or_recover_reads_the_payload() {
    let recovered = Outcome::<usize, &str>::fail("four").value_or_recover(|f| f.len());
    assert_eq!(recovered, 4);
    assert_eq!(Outcome::<usize, &str>::some(9).value_or_recover(|f| f.len()), 9);
}

#[test]
fn inspect_hooks_see_the_matching_branch() {
    let value_seen = Cell::new(None);
    let failure_seen = Cell::new(None);

    let ok = Outcome::<i32, &str>::some(3)
        .inspect(|v| value_seen.set(Some(*v)))
        .inspect_failure(|f| failure_seen.set(Some(*f.value())));
    assert_eq!(ok, Outcome::some(3));
    assert_eq!(value_seen.get(), Some(3));
    assert_eq!(failure_seen.get(), None);

    let failed = Outcome::<i32, &str>::fail("e")
        .inspect(|v| value_seen.set(Some(*v + 100)))
        .inspect_failure(|f| failure_seen.set(Some(*f.value())));
    assert_eq!(failed, Outcome::fail("e"));
    assert_eq!(value_seen.get(), Some(3));
    assert_eq!(failure_seen.get(), Some("e"));
}

#[test]
fn try_unwrap_splits_exactly_one_side() {
    assert_eq!(Outcome::<&str, &str>::some("v").try_unwrap(), (Some("v"), None));
    assert_eq!(Outcome::<&str, &str>::fail("f").try_unwrap(), (None, Some("f")));
}

#[test]
fn try_unwrap_into_fills_slots() {
    let mut value = 99;
    let mut failure = Some("stale");

    assert!(Outcome::<i32, &str>::some(7).try_unwrap_into(&mut value, &mut failure));
    assert_eq!((value, failure), (7, None));

    assert!(!Outcome::<i32, &str>::fail("bad").try_unwrap_into(&mut value, &mut failure));
    assert_eq!((value, failure), (0, Some("bad")));
}

#[test]
fn value_or_raise_passes_values_through() {
    assert_eq!(Outcome::<i32, &str>::some(1).value_or_raise("unused"), 1);
    assert_eq!(Outcome::<i32, &str>::some(2).value_or_raise_with(|f| f.to_string()), 2);
}

#[test]
fn failure_or_raise_passes_failures_through() {
    let failure = Outcome::<i32, &str>::fail("e").failure_or_raise("unused");
    assert_eq!(failure.value(), &"e");

    let failure = Outcome::<i32, &str>::fail("e").failure_or_raise_with(|v| v.to_string());
    assert_eq!(failure.into_value(), "e");
}

#[test]
#[should_panic]
fn failure_or_raise_panics_on_value() {
    let _ = Outcome::<i32, &str>::some(1).failure_or_raise("expected a failure");
}

#[test]
#[should_panic]
fn raise_on_fail_panics_on_failure() {
    let _ = Outcome::<i32, &str>::fail("bad").raise_on_fail();
}

#[test]
fn raise_on_fail_returns_successes() {
    assert_eq!(Outcome::<i32, &str>::some(1).raise_on_fail(), Outcome::some(1));
}
