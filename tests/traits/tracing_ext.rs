use crate::common::Recorder;
use outcome_rail::traits::OutcomeTracingExt;
use outcome_rail::{Outcome, TracePolicy};
use tracing::{info_span, Level};

#[test]
fn trace_failure_leaves_outcomes_untouched() {
    let ok = Outcome::<i32, &str>::some(1).trace_failure();
    assert_eq!(ok, Outcome::some(1));

    let failed = Outcome::<i32, &str>::fail("timeout").trace_failure();
    assert_eq!(failed, Outcome::fail("timeout"));
}

#[test]
fn trace_failure_warns_with_the_failure() {
    let recorder = Recorder::default();

    recorder.record(|| {
        let _ = Outcome::<i32, &str>::some(1).trace_failure();
        let _ = Outcome::<i32, &str>::fail_with_policy("timeout", TracePolicy::Always).trace_failure();
    });

    let warnings: Vec<_> = recorder.events().into_iter().filter(|e| e.level == Level::WARN).collect();
    assert_eq!(warnings.len(), 1);

    let event = &warnings[0];
    assert_eq!(event.level, Level::WARN);
    assert_eq!(event.target, "outcome_rail");
    assert_eq!(event.message(), Some("outcome failed"));
    assert_eq!(event.field("failure"), Some("timeout"));
    assert_eq!(event.field("traced"), Some("true"));
    assert!(event.span.is_none());
}

#[test]
fn trace_failure_in_runs_inside_span() {
    let recorder = Recorder::default();

    let failed = recorder.record(|| {
        let span = info_span!("load_profile", user_id = 42);
        Outcome::<i32, String>::failed("not found").trace_failure_in(&span)
    });

    assert_eq!(failed.failure_message(), Some("not found"));

    let event = recorder.find(Level::WARN, "outcome_rail").unwrap();
    assert_eq!(event.span.as_deref(), Some("load_profile"));
    assert_eq!(event.field("failure"), Some("not found"));
}
