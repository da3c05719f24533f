//! Tail-Call Execution Engine.
//!
//! Two independent strategies run a logically recursive computation without
//! growing the call stack:
//!
//! - [`linear`]: calls a callback once, then drives the returned [`Thunk`]
//!   chain until it is [`Thunk::Done`]
//! - [`trampoline`]: wraps a step function that receives a [`Continuation`]
//!   and the current arguments, looping until it returns [`Bounce::Done`]
//!
//! Neither strategy detects non-terminating callbacks, and neither performs
//! type assertions; validate inputs with [`crate::exc`] beforehand if needed.
//!
//! # Examples
//!
//! ## Linear
//!
//! ```rust
//! use lambdascript::control::{Thunk, linear};
//!
//! fn factorial(n: u64) -> Thunk<u64> {
//!     factorial_helper(n, 1)
//! }
//!
//! fn factorial_helper(n: u64, accumulator: u64) -> Thunk<u64> {
//!     if n <= 1 {
//!         Thunk::done(accumulator)
//!     } else {
//!         Thunk::more(move || factorial_helper(n - 1, n * accumulator))
//!     }
//! }
//!
//! assert_eq!(linear(factorial, 10), 3_628_800);
//! ```
//!
//! ## Trampoline
//!
//! ```rust
//! use lambdascript::control::{Bounce, trampoline};
//!
//! let gcd = trampoline(|next, &(a, b): &(u64, u64)| {
//!     if b == 0 { Bounce::Done(a) } else { next.again((b, a % b)) }
//! });
//!
//! assert_eq!(gcd((48, 18)), 6);
//! ```

mod thunk;
mod trampoline;

pub use thunk::{Thunk, linear, ltr};
pub use trampoline::{Bounce, Continuation, toc, trampoline};
