//! The text-failure form, `Outcome<V>`.
//!
//! `Outcome<V>` is `Outcome<V, String>`: the failure payload is a
//! human-readable reason. Everything on the generalized form applies; this
//! module adds the conveniences that only make sense for text.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{fail, Outcome};
//!
//! fn read_limit(raw: &str) -> Outcome<u32> {
//!     match raw.parse::<u32>() {
//!         Ok(limit) => Outcome::some(limit),
//!         Err(err) => fail!("limit {raw:?}: {err}"),
//!     }
//! }
//!
//! assert_eq!(read_limit("10"), Outcome::some(10));
//! assert_eq!(
//!     read_limit("ten").failure_message(),
//!     Some("limit \"ten\": invalid digit found in string")
//! );
//! ```
use crate::types::alloc_type::String;
use crate::types::outcome::Outcome;

impl<V> Outcome<V, String> {
    /// Creates a failure from anything convertible into text.
    #[inline]
    pub fn failed<M>(message: M) -> Self
    where
        M: Into<String>,
    {
        Self::fail(message.into())
    }

    /// Creates a failure holding the display text of `error`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let err = "x".parse::<i32>().unwrap_err();
    /// let failed: Outcome<i32> = Outcome::from_error(&err);
    /// assert_eq!(failed.failure_message(), Some("invalid digit found in string"));
    /// ```
    #[inline]
    pub fn from_error<E>(error: &E) -> Self
    where
        E: core::error::Error + ?Sized,
    {
        use core::fmt::Write;

        let mut message = String::new();
        let _ = write!(message, "{}", error);
        Self::fail(message)
    }

    /// Returns the failure text, if any.
    #[inline]
    #[must_use]
    pub fn failure_message(&self) -> Option<&str> {
        self.try_failure().map(|failure| failure.value().as_str())
    }

    /// [`Outcome::filter`] taking anything convertible into text.
    #[inline]
    pub fn filter_msg<P, M>(self, predicate: P, message: M) -> Self
    where
        P: FnOnce(&V) -> bool,
        M: Into<String>,
    {
        self.filter_with(predicate, move || message.into())
    }

    /// Runs `func` and turns any panic into a text failure.
    ///
    /// Shorthand for [`catch_all`](crate::bridge::catch_all) with the panic
    /// message used as is.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome: Outcome<u8> = Outcome::catch_text(|| {
    ///     let bytes: Vec<u8> = Vec::new();
    ///     Outcome::some(bytes[3])
    /// });
    /// assert!(outcome.failure_message().unwrap().contains("index out of bounds"));
    /// ```
    #[cfg(feature = "std")]
    pub fn catch_text<Func>(func: Func) -> Self
    where
        Func: FnOnce() -> Self,
    {
        crate::bridge::catch_all(func, core::convert::identity)
    }
}
