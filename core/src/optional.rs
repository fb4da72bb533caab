//! Presence or absence of a value, as a first-class sum type.
//!
//! [`Optional<T>`] has exactly two variants: [`Some`](Optional::Some) holds
//! one value of `T`, [`None`](Optional::None) holds nothing. There is no
//! third state and no uninitialized representation observable to callers.
//! "Mutation" means producing a new `Optional`, never rewriting the variant
//! in place.
//!
//! # Example
//!
//! ```
//! use powder_core::optional::Optional;
//!
//! let found = Optional::Some(5);
//! let missing: Optional<i64> = Optional::None;
//!
//! assert_eq!(found.value_or_default(0), 5);
//! assert_eq!(missing.value_or_default(0), 0);
//!
//! // The lazy fallback only runs on the `None` path.
//! assert_eq!(missing.value_or(|| expensive_lookup()), 42);
//! # fn expensive_lookup() -> i64 { 42 }
//! ```

/// A value of type `T`, or nothing.
///
/// Exactly one variant is active at any time. Extraction methods consume the
/// receiver; ownership of a `Some` payload transfers to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Optional<T> {
    /// Holds exactly one value of `T`.
    Some(T),
    /// Holds nothing.
    None,
}

impl<T> Optional<T> {
    /// Returns true iff the receiver is the `Some` variant.
    ///
    /// No side effects, never fails.
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Optional::Some(_))
    }

    /// Returns the logical negation of [`is_some`](Optional::is_some).
    ///
    /// Defined in terms of `is_some` so the identity
    /// `x.is_none() == !x.is_some()` holds by construction.
    #[inline]
    pub const fn is_none(&self) -> bool {
        !self.is_some()
    }

    /// Returns the held value if `Some`, else returns `default`.
    ///
    /// `default` is a plain value the caller has already computed. When the
    /// fallback is expensive to produce or has side effects that should only
    /// occur on the `None` path, use [`value_or`](Optional::value_or)
    /// instead.
    pub fn value_or_default(self, default: T) -> T {
        match self {
            Optional::Some(value) => value,
            Optional::None => default,
        }
    }

    /// Returns the held value if `Some`; otherwise invokes `default_fn`
    /// exactly once and returns its result.
    ///
    /// `default_fn` is never invoked when the receiver is `Some`. This is
    /// the contract that distinguishes this method from
    /// [`value_or_default`](Optional::value_or_default) and the reason both
    /// exist.
    pub fn value_or<F>(self, default_fn: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Optional::Some(value) => value,
            Optional::None => default_fn(),
        }
    }

    /// Borrows the payload, converting `&Optional<T>` to `Optional<&T>`.
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Optional::Some(value) => Optional::Some(value),
            Optional::None => Optional::None,
        }
    }

    /// Mutably borrows the payload, converting `&mut Optional<T>` to
    /// `Optional<&mut T>`.
    pub fn as_mut(&mut self) -> Optional<&mut T> {
        match self {
            Optional::Some(value) => Optional::Some(value),
            Optional::None => Optional::None,
        }
    }

    /// Applies `f` to the held value, if any.
    pub fn map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Optional::Some(value) => Optional::Some(f(value)),
            Optional::None => Optional::None,
        }
    }

    /// Takes the value out of the receiver, leaving `None` behind.
    ///
    /// This is what stateful iterator implementations use to retire a
    /// pending element.
    pub fn take(&mut self) -> Optional<T> {
        core::mem::replace(self, Optional::None)
    }

    /// Converts into the host `Option<T>`.
    pub fn into_option(self) -> Option<T> {
        self.into()
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Optional::None
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Optional::Some(value),
            None => Optional::None,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        match value {
            Optional::Some(value) => Some(value),
            Optional::None => None,
        }
    }
}

// Two variants, one of them payload-free: the discriminant fits the
// pointer niche, so an optional reference costs nothing over the reference.
static_assertions::assert_eq_size!(Optional<&u8>, usize);

#[cfg(test)]
#[path = "optional_test.rs"]
mod optional_test;
