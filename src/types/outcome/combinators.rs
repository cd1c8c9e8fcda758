use super::Outcome;
use crate::bridge::{raise_failed, raise_has_value};
use crate::types::alloc_type::String;
use crate::types::error::{HasFailed, HasValue};
use crate::types::failure::Failure;

impl<V, F> Outcome<V, F> {
    /// Maps the value using the provided function.
    ///
    /// A failure passes through unchanged and `f` is not called.
    ///
    /// # Arguments
    ///
    /// * `f` - A function that transforms the success value from type `V` to type `T`
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let doubled = Outcome::<i32, &str>::some(21).map(|x| x * 2);
    /// assert_eq!(doubled, Outcome::some(42));
    ///
    /// let failed = Outcome::<i32, &str>::fail("boom").map(|x| x * 2);
    /// assert_eq!(failed, Outcome::fail("boom"));
    /// ```
    #[inline]
    pub fn map<T, M>(self, f: M) -> Outcome<T, F>
    where
        M: FnOnce(V) -> T,
    {
        match self {
            Self::Value(value) => Outcome::Value(f(value)),
            Self::Failure(failure) => Outcome::Failure(failure),
        }
    }

    /// Maps the failure payload, keeping any trace. A success passes through.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let failed = Outcome::<i32, u16>::fail(404).map_fail(|code| format!("HTTP {code}"));
    /// assert_eq!(failed.to_string(), "HTTP 404");
    /// ```
    #[inline]
    pub fn map_fail<G, M>(self, f: M) -> Outcome<V, G>
    where
        M: FnOnce(F) -> G,
    {
        match self {
            Self::Value(value) => Outcome::Value(value),
            Self::Failure(failure) => Outcome::Failure(failure.map(f)),
        }
    }

    /// Chains a computation that may itself fail.
    ///
    /// On success the result of `f` is returned as is, so outcomes are never
    /// nested. On failure `f` is not called.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// fn half(n: i32) -> Outcome<i32, &'static str> {
    ///     Outcome::some_when(n, |n| n % 2 == 0, "odd").map(|n| n / 2)
    /// }
    ///
    /// assert_eq!(Outcome::some(8).flat_map(half).flat_map(half), Outcome::some(2));
    /// assert_eq!(Outcome::some(6).flat_map(half).flat_map(half), Outcome::fail("odd"));
    /// ```
    #[inline]
    pub fn flat_map<T, M>(self, f: M) -> Outcome<T, F>
    where
        M: FnOnce(V) -> Outcome<T, F>,
    {
        match self {
            Self::Value(value) => f(value),
            Self::Failure(failure) => Outcome::Failure(failure),
        }
    }

    /// Runs `on_value` or `on_failure`, whichever matches, and returns its result.
    ///
    /// Exactly one of the two closures is invoked.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let text = Outcome::<i32, &str>::fail("missing")
    ///     .match_with(|n| format!("got {n}"), |f| format!("failed: {f}"));
    /// assert_eq!(text, "failed: missing");
    /// ```
    #[inline]
    pub fn match_with<T, OnValue, OnFailure>(self, on_value: OnValue, on_failure: OnFailure) -> T
    where
        OnValue: FnOnce(V) -> T,
        OnFailure: FnOnce(Failure<F>) -> T,
    {
        match self {
            Self::Value(value) => on_value(value),
            Self::Failure(failure) => on_failure(failure),
        }
    }

    /// Side-effecting form of [`Outcome::match_with`].
    #[inline]
    pub fn match_do<OnValue, OnFailure>(self, on_value: OnValue, on_failure: OnFailure)
    where
        OnValue: FnOnce(V),
        OnFailure: FnOnce(Failure<F>),
    {
        self.match_with(on_value, on_failure)
    }

    /// Turns a success into a failure with `failure` when `predicate` does not hold.
    ///
    /// Failures and successes that satisfy the predicate are returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let adult = Outcome::<u8, &str>::some(17).filter(|age| *age >= 18, "minor");
    /// assert_eq!(adult, Outcome::fail("minor"));
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P, failure: F) -> Self
    where
        P: FnOnce(&V) -> bool,
    {
        self.filter_with(predicate, move || failure)
    }

    /// Like [`Outcome::filter`], building the failure only when the predicate fails.
    #[inline]
    pub fn filter_with<P, M>(self, predicate: P, make_failure: M) -> Self
    where
        P: FnOnce(&V) -> bool,
        M: FnOnce() -> F,
    {
        match self {
            Self::Value(value) => {
                if predicate(&value) {
                    Self::Value(value)
                } else {
                    Self::fail(make_failure())
                }
            }
            Self::Failure(failure) => Self::Failure(failure),
        }
    }

    /// Returns `self` on success, `alternative` otherwise.
    #[inline]
    pub fn or(self, alternative: Self) -> Self {
        match self {
            Self::Value(value) => Self::Value(value),
            Self::Failure(_) => alternative,
        }
    }

    /// Returns `self` on success, otherwise calls `factory`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let primary = Outcome::<&str, &str>::fail("cache miss");
    /// let resolved = primary.or_else(|| Outcome::some("from origin"));
    /// assert_eq!(resolved, Outcome::some("from origin"));
    /// ```
    #[inline]
    pub fn or_else<M>(self, factory: M) -> Self
    where
        M: FnOnce() -> Self,
    {
        match self {
            Self::Value(value) => Self::Value(value),
            Self::Failure(_) => factory(),
        }
    }

    /// Returns the value, or `alternative` on failure.
    #[inline]
    pub fn value_or(self, alternative: V) -> V {
        match self {
            Self::Value(value) => value,
            Self::Failure(_) => alternative,
        }
    }

    /// Returns the value, or the result of `factory` on failure.
    ///
    /// `factory` is never called on success.
    #[inline]
    pub fn value_or_else<M>(self, factory: M) -> V
    where
        M: FnOnce() -> V,
    {
        match self {
            Self::Value(value) => value,
            Self::Failure(_) => factory(),
        }
    }

    /// Returns the value, or derives one from the failure payload.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let len = Outcome::<usize, &str>::fail("four").value_or_recover(|f| f.len());
    /// assert_eq!(len, 4);
    /// ```
    #[inline]
    pub fn value_or_recover<M>(self, recover: M) -> V
    where
        M: FnOnce(F) -> V,
    {
        match self {
            Self::Value(value) => value,
            Self::Failure(failure) => recover(failure.into_value()),
        }
    }

    /// Calls `action` with the value, then returns `self` unchanged.
    ///
    /// Does nothing on failure.
    #[inline]
    pub fn inspect<A>(self, action: A) -> Self
    where
        A: FnOnce(&V),
    {
        if let Self::Value(value) = &self {
            action(value);
        }
        self
    }

    /// Calls `action` with the failure, then returns `self` unchanged.
    #[inline]
    pub fn inspect_failure<A>(self, action: A) -> Self
    where
        A: FnOnce(&Failure<F>),
    {
        if let Self::Failure(failure) = &self {
            action(failure);
        }
        self
    }

    /// Splits the outcome into its two optional halves.
    ///
    /// Exactly one side is `Some`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::some(1).try_unwrap(), (Some(1), None));
    /// assert_eq!(Outcome::<i32, &str>::fail("x").try_unwrap(), (None, Some("x")));
    /// ```
    #[inline]
    pub fn try_unwrap(self) -> (Option<V>, Option<F>) {
        match self {
            Self::Value(value) => (Some(value), None),
            Self::Failure(failure) => (None, Some(failure.into_value())),
        }
    }

    /// Writes both halves into caller-provided slots and reports success.
    ///
    /// On failure `value` is reset to `V::default()`; on success `failure`
    /// is reset to `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let mut value = 0;
    /// let mut failure = None;
    ///
    /// assert!(!Outcome::<i32, &str>::fail("bad").try_unwrap_into(&mut value, &mut failure));
    /// assert_eq!((value, failure), (0, Some("bad")));
    /// ```
    pub fn try_unwrap_into(self, value: &mut V, failure: &mut Option<F>) -> bool
    where
        V: Default,
    {
        match self {
            Self::Value(v) => {
                *value = v;
                *failure = None;
                true
            }
            Self::Failure(f) => {
                *value = V::default();
                *failure = Some(f.into_value());
                false
            }
        }
    }

    /// Returns the value or raises [`HasFailed`] with `message`.
    ///
    /// # Panics
    ///
    /// Raises on failure. The payload still carries the original failure.
    #[track_caller]
    pub fn value_or_raise<M>(self, message: M) -> V
    where
        M: Into<String>,
        F: Send + 'static,
    {
        match self {
            Self::Value(value) => value,
            Self::Failure(failure) => raise_failed(HasFailed::new(failure).with_message(message)),
        }
    }

    /// Returns the value or raises [`HasFailed`] with a message built from the failure.
    ///
    /// `message` only runs when raising, so it can afford to format the payload.
    ///
    /// # Panics
    ///
    /// Raises on failure.
    #[track_caller]
    pub fn value_or_raise_with<M>(self, message: M) -> V
    where
        M: FnOnce(&F) -> String,
        F: Send + 'static,
    {
        match self {
            Self::Value(value) => value,
            Self::Failure(failure) => {
                let text = message(failure.value());
                raise_failed(HasFailed::new(failure).with_message(text))
            }
        }
    }

    /// Returns the failure or raises [`HasValue`] with `message`.
    ///
    /// # Panics
    ///
    /// Raises on success.
    #[track_caller]
    pub fn failure_or_raise<M>(self, message: M) -> Failure<F>
    where
        M: Into<String>,
        V: Send + 'static,
    {
        match self {
            Self::Value(value) => raise_has_value(HasValue::new(value).with_message(message)),
            Self::Failure(failure) => failure,
        }
    }

    /// Returns the failure or raises [`HasValue`] with a message built from the value.
    ///
    /// # Panics
    ///
    /// Raises on success.
    #[track_caller]
    pub fn failure_or_raise_with<M>(self, message: M) -> Failure<F>
    where
        M: FnOnce(&V) -> String,
        V: Send + 'static,
    {
        match self {
            Self::Value(value) => {
                let text = message(&value);
                raise_has_value(HasValue::new(value).with_message(text))
            }
            Self::Failure(failure) => failure,
        }
    }
}

impl<V, F> Outcome<Outcome<V, F>, F> {
    /// Removes one level of nesting.
    #[inline]
    pub fn flatten(self) -> Outcome<V, F> {
        self.flat_map(core::convert::identity)
    }
}
