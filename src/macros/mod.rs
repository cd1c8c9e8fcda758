//! Ergonomic macros for building and propagating outcomes.
//!
//! - [`macro@crate::fail`] - Builds a text failure from a format string.
//! - [`macro@crate::try_value`] - Unwraps a value or returns the failure from
//!   the enclosing function, the outcome counterpart of `?`.
//! - [`macro@crate::ensure`] - Returns a failure early when a condition does
//!   not hold.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{ensure, fail, try_value, Outcome};
//!
//! fn parse_ratio(raw: &str) -> Outcome<f64> {
//!     let (num, den) = match raw.split_once('/') {
//!         Some(parts) => parts,
//!         None => return fail!("expected a/b, got {raw:?}"),
//!     };
//!     let num: f64 = try_value!(Outcome::from(num.parse::<f64>().map_err(|e| e.to_string())));
//!     let den: f64 = try_value!(Outcome::from(den.parse::<f64>().map_err(|e| e.to_string())));
//!     ensure!(den != 0.0, "division by zero".to_string());
//!     Outcome::some(num / den)
//! }
//!
//! assert_eq!(parse_ratio("1/4"), Outcome::some(0.25));
//! assert_eq!(parse_ratio("1/0").failure_message(), Some("division by zero"));
//! assert_eq!(parse_ratio("14").failure_message(), Some("expected a/b, got \"14\""));
//! ```

/// Creates a text failure, formatting its arguments like `format!`.
///
/// Expands to an `Outcome<_, String>`.
///
/// # Examples
///
/// ```
/// use outcome_rail::{fail, Outcome};
///
/// let key = "user_id";
/// let missing: Outcome<u64> = fail!("missing field `{}`", key);
/// assert_eq!(missing.failure_message(), Some("missing field `user_id`"));
/// ```
#[macro_export]
macro_rules! fail {
    ($($arg:tt)*) => {
        $crate::Outcome::fail($crate::__private::format!($($arg)*))
    };
}

/// Evaluates an outcome, yielding its value or returning its failure.
///
/// The enclosing function must return an `Outcome` with the same failure
/// type. The failure, trace included, is moved out unchanged.
///
/// # Examples
///
/// ```
/// use outcome_rail::{try_value, Outcome};
///
/// fn double(input: Outcome<i32, &'static str>) -> Outcome<i32, &'static str> {
///     let n = try_value!(input);
///     Outcome::some(n * 2)
/// }
///
/// assert_eq!(double(Outcome::some(4)), Outcome::some(8));
/// assert_eq!(double(Outcome::fail("nan")), Outcome::fail("nan"));
/// ```
#[macro_export]
macro_rules! try_value {
    ($outcome:expr $(,)?) => {
        match $outcome {
            $crate::Outcome::Value(value) => value,
            $crate::Outcome::Failure(failure) => return $crate::Outcome::Failure(failure),
        }
    };
}

/// Returns `Outcome::fail(failure)` from the enclosing function unless `cond` holds.
///
/// The failure expression is only evaluated when the condition fails.
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $failure:expr $(,)?) => {
        if !$cond {
            return $crate::Outcome::fail($failure);
        }
    };
}
