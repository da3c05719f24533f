//! Composition Combinators.
//!
//! Two ways to build one function out of an ordered sequence of functions:
//!
//! - [`comp`] / [`compose!`]: right to left, `comp(f, g, h)(x) = f(g(h(x)))`
//! - [`pipe`] / [`pipe!`]: left to right, `pipe(f, g, h)(x) = h(g(f(x)))`
//!
//! The functions take a runtime list of same-typed stages; the macros take a
//! fixed list of stages whose types may differ from one stage to the next.
//! With no stages at all, every form yields [`identity`].
//!
//! # Laws
//!
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Identity**: `compose!(identity, f) == f == compose!(f, identity)`
//! - **Duality**: `pipe!(f, g, h) == compose!(h, g, f)`
//!
//! # Examples
//!
//! ```
//! use lambdascript::{compose, pipe};
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! assert_eq!(compose!(add_one, double)(5), 11);
//! assert_eq!(pipe!(add_one, double)(5), 12);
//! ```

mod compose_macro;
mod pipe_macro;
mod utils;

pub use utils::{Endo, comp, identity, pipe};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::compose;
pub use crate::pipe;
