//! # lambdascript
//!
//! Small functional programming helpers for Rust.
//!
//! ## Overview
//!
//! - **Type Predicates**: classify a dynamic [`Value`](value::Value) into a
//!   closed set of categories ([`types`])
//! - **Type Assertions**: check a value against an ordered list of categories
//!   and report the first failure silently, as a warning, or as an error
//!   ([`exc`])
//! - **Safe Coercion**: return a value or a fallback that satisfies a
//!   predicate ([`safe`])
//! - **Function Composition**: [`comp`](compose::comp), [`pipe`](compose::pipe),
//!   `compose!` and `pipe!` ([`compose`])
//! - **Tail-Call Execution**: [`linear`](control::linear) thunk driving and
//!   [`trampoline`](control::trampoline) argument rebinding ([`control`])
//!
//! ## Feature Flags
//!
//! - `types`: Type predicate registry
//! - `exc`: Type assertion engine (implies `types`)
//! - `safe`: Safe coercion guards (implies `types`)
//! - `compose`: Function composition utilities
//! - `control`: Tail-call execution strategies
//! - `full`: Enable all features
//!
//! ## Logging
//!
//! Diagnostics are emitted through [`tracing`]; the library never installs a
//! subscriber.
//!
//! ## Example
//!
//! ```rust
//! use lambdascript::prelude::*;
//!
//! fn factorial(n: u64, accumulator: u64) -> Thunk<u64> {
//!     if n <= 1 {
//!         Thunk::done(accumulator)
//!     } else {
//!         Thunk::more(move || factorial(n - 1, n * accumulator))
//!     }
//! }
//!
//! let input = Value::from(5);
//! assert!(check(&input, &[TypeTag::Integer]).query(default_message));
//!
//! let n = input.as_number().map_or(0, |n| n as u64);
//! assert_eq!(linear(|n| factorial(n, 1), n), 120);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, functions and macros.
///
/// # Usage
///
/// ```rust
/// use lambdascript::prelude::*;
/// ```
pub mod prelude {
    pub use crate::value::*;

    #[cfg(feature = "types")]
    pub use crate::types::*;

    #[cfg(feature = "exc")]
    pub use crate::exc::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;
}

pub mod value;

#[cfg(feature = "types")]
pub mod types;

#[cfg(feature = "exc")]
pub mod exc;

#[cfg(feature = "safe")]
pub mod safe;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "control")]
pub mod control;
