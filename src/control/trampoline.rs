//! Iterative tail recursion by rebinding arguments.
//!
//! [`trampoline`] turns a single step function into a function that loops
//! until the step declares it is done. On every iteration the step receives a
//! [`Continuation`] handle and the current arguments. It asks for another
//! round by recording new arguments on the handle and returning
//! [`Bounce::Pending`]; it finishes by returning [`Bounce::Done`].
//!
//! Updating the arguments and declaring termination are separate signals, so
//! one callback body can express a whole iterative recursion.
//!
//! # Examples
//!
//! ```rust
//! use lambdascript::control::{Bounce, trampoline};
//!
//! let fibonacci = trampoline(|next, &(n, a, b): &(u32, u64, u64)| {
//!     if n == 0 {
//!         Bounce::Done(a)
//!     } else {
//!         next.again((n - 1, b, a + b))
//!     }
//! });
//!
//! assert_eq!(fibonacci((6, 0, 1)), 8);
//! assert_eq!(fibonacci((90, 0, 1)), 2_880_067_194_370_816_120);
//! ```

/// Result of one trampoline step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Bounce<T> {
    /// Not done yet: run the step again.
    Pending,
    /// Finished with the final value.
    Done(T),
}

impl<T> Bounce<T> {
    /// Returns `true` for [`Bounce::Pending`].
    #[inline]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

/// Handle a step uses to request the arguments of the next round.
///
/// The handle belongs to a single call of a trampolined function; the slot
/// is replaced, never merged, on each request.
#[derive(Debug)]
pub struct Continuation<A> {
    next: Option<A>,
}

impl<A> Continuation<A> {
    const fn new() -> Self {
        Self { next: None }
    }

    /// Records the arguments for the next round. The last request wins.
    #[inline]
    pub fn with(&mut self, arguments: A) {
        self.next = Some(arguments);
    }

    /// Records the arguments for the next round and returns
    /// [`Bounce::Pending`].
    #[inline]
    pub fn again<T>(&mut self, arguments: A) -> Bounce<T> {
        self.with(arguments);
        Bounce::Pending
    }
}

/// Wraps `callback` into a function looping until the callback is done.
///
/// The returned function owns one argument slot per call, so it can be
/// called repeatedly, and even reentrantly from inside another callback,
/// without calls sharing state. If the first invocation already returns
/// [`Bounce::Done`] the value is returned immediately. Returning
/// [`Bounce::Pending`] without recording new arguments repeats the round with
/// the same arguments; a callback that never finishes never returns.
pub fn trampoline<A, T, F>(callback: F) -> impl Fn(A) -> T
where
    F: Fn(&mut Continuation<A>, &A) -> Bounce<T>,
{
    move |arguments| {
        let mut current = arguments;
        let mut continuation = Continuation::new();
        let mut rounds: usize = 1;
        loop {
            match callback(&mut continuation, &current) {
                Bounce::Done(value) => {
                    tracing::trace!(target: "lambdascript::control", rounds, "trampoline finished");
                    return value;
                }
                Bounce::Pending => {
                    if let Some(next) = continuation.next.take() {
                        current = next;
                    }
                    rounds += 1;
                }
            }
        }
    }
}

/// Short alias of [`trampoline`].
#[inline]
pub fn toc<A, T, F>(callback: F) -> impl Fn(A) -> T
where
    F: Fn(&mut Continuation<A>, &A) -> Bounce<T>,
{
    trampoline(callback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_first_round_done_skips_continuation() {
        let requests = Cell::new(0);
        let identity = trampoline(|next: &mut Continuation<i32>, &value: &i32| {
            if value < 0 {
                requests.set(requests.get() + 1);
                next.again(-value)
            } else {
                Bounce::Done(value)
            }
        });

        assert_eq!(identity(7), 7);
        assert_eq!(requests.get(), 0);
    }

    #[rstest]
    fn test_last_request_wins() {
        let run = trampoline(|next: &mut Continuation<u32>, &value: &u32| {
            if value == 0 {
                next.with(100);
                next.with(1);
                Bounce::Pending
            } else {
                Bounce::Done(value)
            }
        });

        assert_eq!(run(0), 1);
    }

    #[rstest]
    fn test_pending_without_request_repeats_arguments() {
        let rounds = Cell::new(0);
        let run = trampoline(|_: &mut Continuation<&str>, &label: &&str| {
            rounds.set(rounds.get() + 1);
            if rounds.get() < 3 {
                Bounce::Pending
            } else {
                Bounce::Done(label.len())
            }
        });

        assert_eq!(run("same"), 4);
        assert_eq!(rounds.get(), 3);
    }

    #[rstest]
    fn test_independent_calls() {
        let sum_to = toc(|next, &(n, accumulator): &(u64, u64)| {
            if n == 0 {
                Bounce::Done(accumulator)
            } else {
                next.again((n - 1, accumulator + n))
            }
        });

        assert_eq!(sum_to((10, 0)), 55);
        assert_eq!(sum_to((100, 0)), 5050);
        assert_eq!(sum_to((1_000_000, 0)), 500_000_500_000);
    }
}
