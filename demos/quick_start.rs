//! Quick Start
//!
//! Parsing and validating user input without leaving the happy path.

use outcome_rail::prelude::*;

#[derive(Debug)]
struct Signup {
    name: String,
    age: u8,
}

fn parse_age(raw: &str) -> Outcome<u8> {
    match raw.trim().parse::<u8>() {
        Ok(age) => some(age),
        Err(err) => fail!("age {raw:?}: {err}"),
    }
}

fn parse_signup(line: &str) -> Outcome<Signup> {
    let (name, age) = try_value!(line.split_once(':').some_or("expected name:age".to_string()));
    ensure!(!name.trim().is_empty(), "name is empty".to_string());

    parse_age(age)
        .filter_msg(|age| *age >= 13, "must be 13 or older")
        .map(|age| Signup { name: name.trim().to_string(), age })
}

fn main() {
    let lines = ["ada:36", "bob:eleven", ":40", "carol", "dave:12"];

    for line in lines {
        parse_signup(line).match_do(
            |signup| println!("✓ {line:<12} -> {} ({})", signup.name, signup.age),
            |failure| println!("✗ {line:<12} -> {failure}"),
        );
    }

    let batch = transpose(lines.iter().map(|line| parse_signup(line)));
    match batch {
        Outcome::Value(signups) => println!("\nall {} signups accepted", signups.len()),
        Outcome::Failure(failures) => {
            println!("\n{} of {} lines rejected:", failures.len(), lines.len());
            for reason in failures.iter() {
                println!("  - {reason}");
            }
        }
    }
}
