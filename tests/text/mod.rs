use outcome_rail::Outcome;
use std::io;

#[test]
fn failed_accepts_str_and_string() {
    let from_str: Outcome<i32> = Outcome::failed("bad input");
    let from_string: Outcome<i32> = Outcome::failed(String::from("bad input"));

    assert_eq!(from_str, from_string);
    assert_eq!(from_str.failure_message(), Some("bad input"));
}

#[test]
fn failure_message_is_none_for_values() {
    assert_eq!(Outcome::<i32>::some(1).failure_message(), None);
}

#[test]
fn from_error_uses_display_text() {
    let err = io::Error::new(io::ErrorKind::NotFound, "config.toml missing");
    let outcome: Outcome<()> = Outcome::from_error(&err);

    assert_eq!(outcome.failure_message(), Some("config.toml missing"));
}

#[test]
fn from_error_accepts_trait_objects() {
    let err: Box<dyn std::error::Error> = "nope".parse::<f64>().unwrap_err().into();
    let outcome: Outcome<f64> = Outcome::from_error(err.as_ref());

    assert_eq!(outcome.failure_message(), Some("invalid float literal"));
}

#[test]
fn filter_msg_rejects_with_text() {
    let name = Outcome::<&str>::some("").filter_msg(|s| !s.is_empty(), "name is empty");
    assert_eq!(name.failure_message(), Some("name is empty"));

    let kept = Outcome::<&str>::some("ada").filter_msg(|s| !s.is_empty(), String::from("unused"));
    assert_eq!(kept, Outcome::some("ada"));
}

#[test]
fn catch_text_turns_panics_into_text_failures() {
    let outcome: Outcome<u32> = Outcome::catch_text(|| {
        let divisor = "0".parse::<u32>().unwrap_or(1);
        Outcome::some(10 / divisor)
    });

    let message = outcome.failure_message().unwrap();
    assert!(message.contains("divide by zero"));
    assert!(outcome.try_failure().is_some_and(|f| f.has_trace()));
}

#[test]
fn catch_text_recovers_raised_text_failures() {
    let outcome: Outcome<u32> = Outcome::catch_text(|| {
        let n = Outcome::<u32>::failed("not configured").into_value_or_raise();
        Outcome::some(n)
    });

    assert_eq!(outcome, Outcome::failed("not configured"));
}
