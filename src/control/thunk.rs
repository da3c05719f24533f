//! Stack-safe recursion by driving thunk chains.
//!
//! A [`Thunk<T>`] is either finished ([`Thunk::Done`]) or holds the next
//! deferred step ([`Thunk::More`]). [`linear`] calls a callback once and then
//! keeps invoking deferred steps until one of them finishes, so a logically
//! recursive algorithm runs in constant stack space.
//!
//! The caller defers its own recursive calls by wrapping them in
//! [`Thunk::more`]; the driver never rewrites the caller's recursion.
//!
//! # Examples
//!
//! ## Factorial
//!
//! ```rust
//! use lambdascript::control::{Thunk, linear};
//!
//! fn factorial(n: u64, accumulator: u64) -> Thunk<u64> {
//!     if n <= 1 {
//!         Thunk::done(accumulator)
//!     } else {
//!         Thunk::more(move || factorial(n - 1, n * accumulator))
//!     }
//! }
//!
//! assert_eq!(linear(|n| factorial(n, 1), 5), 120);
//! assert_eq!(linear(|n| factorial(n, 1), 20), 2_432_902_008_176_640_000);
//! ```
//!
//! ## Mutual Recursion
//!
//! ```rust
//! use lambdascript::control::Thunk;
//!
//! fn is_even(n: u64) -> Thunk<bool> {
//!     if n == 0 {
//!         Thunk::done(true)
//!     } else {
//!         Thunk::more(move || is_odd(n - 1))
//!     }
//! }
//!
//! fn is_odd(n: u64) -> Thunk<bool> {
//!     if n == 0 {
//!         Thunk::done(false)
//!     } else {
//!         Thunk::more(move || is_even(n - 1))
//!     }
//! }
//!
//! assert!(is_even(100_000).run());
//! assert!(!is_odd(100_000).run());
//! ```

use std::fmt;

/// A deferred computation step.
///
/// Each [`Thunk::More`] step is an `FnOnce`, so the driver invokes it at most
/// once and drops it before moving on to the step it produced.
pub enum Thunk<T> {
    /// The computation has finished.
    Done(T),
    /// More work to do: calling the step yields the next state.
    More(Box<dyn FnOnce() -> Self>),
}

impl<T> Thunk<T> {
    /// Creates a finished thunk.
    #[inline]
    pub const fn done(value: T) -> Self {
        Self::Done(value)
    }

    /// Defers `step` until the chain is driven.
    ///
    /// ```rust
    /// use lambdascript::control::Thunk;
    ///
    /// let thunk = Thunk::more(|| Thunk::more(|| Thunk::done(42)));
    /// assert!(!thunk.is_done());
    /// assert_eq!(thunk.run(), 42);
    /// ```
    #[inline]
    pub fn more<F>(step: F) -> Self
    where
        F: FnOnce() -> Self + 'static,
    {
        Self::More(Box::new(step))
    }

    /// Returns `true` if no work is left.
    #[inline]
    pub const fn is_done(&self) -> bool {
        matches!(self, Self::Done(_))
    }

    /// Drives the chain to its final value in constant stack space.
    pub fn run(self) -> T {
        let mut current = self;
        loop {
            match current {
                Self::Done(value) => return value,
                Self::More(step) => current = step(),
            }
        }
    }
}

impl<T: 'static> Thunk<T> {
    /// Applies `function` to the final value once the chain finishes.
    ///
    /// ```rust
    /// use lambdascript::control::Thunk;
    ///
    /// let doubled = Thunk::more(|| Thunk::done(21)).map(|x| x * 2);
    /// assert_eq!(doubled.run(), 42);
    /// ```
    pub fn map<U, F>(self, function: F) -> Thunk<U>
    where
        F: FnOnce(T) -> U + 'static,
        U: 'static,
    {
        match self {
            Self::Done(value) => Thunk::Done(function(value)),
            Self::More(step) => Thunk::more(move || step().map(function)),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Thunk<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Done(value) => formatter.debug_tuple("Done").field(value).finish(),
            Self::More(_) => formatter.debug_tuple("More").field(&"<thunk>").finish(),
        }
    }
}

/// Calls `callback` with `arguments`, then drives the returned chain.
///
/// Multiple arguments are passed as a tuple. A callback returning
/// [`Thunk::Done`] right away finishes without any further step. A chain
/// that never finishes never returns.
pub fn linear<A, T, F>(callback: F, arguments: A) -> T
where
    F: FnOnce(A) -> Thunk<T>,
{
    callback(arguments).run()
}

/// Short alias of [`linear`].
#[inline]
pub fn ltr<A, T, F>(callback: F, arguments: A) -> T
where
    F: FnOnce(A) -> Thunk<T>,
{
    linear(callback, arguments)
}
