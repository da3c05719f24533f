//! The `pipe!` macro for left-to-right function chaining.

/// Chains functions from left to right into a single function.
///
/// `pipe!(f, g, h)(x)` is equivalent to `h(g(f(x)))`, and to
/// `compose!(h, g, f)(x)`.
///
/// # Syntax
///
/// - `pipe!()` - Returns [`identity`](crate::compose::identity)
/// - `pipe!(f)` - Returns `f` unchanged
/// - `pipe!(f, g, ...)` - Returns `|x| ...g(f(x))`
///
/// # Examples
///
/// ```
/// use lambdascript::pipe;
///
/// let square = |x: f64| x * x;
/// let add3 = |x: f64| x + 3.0;
/// let halve = |x: f64| x / 2.0;
///
/// // halve(add3(square(4))) = halve(19) = 9.5
/// let piped = pipe!(square, add3, halve);
/// assert_eq!(piped(4.0), 9.5);
/// ```
///
/// ## Equivalence with compose
///
/// ```
/// use lambdascript::{compose, pipe};
///
/// fn f(x: i32) -> i32 { x + 1 }
/// fn g(x: i32) -> i32 { x * 2 }
/// fn h(x: i32) -> i32 { x - 3 }
///
/// assert_eq!(pipe!(f, g, h)(10), compose!(h, g, f)(10));
/// ```
#[macro_export]
macro_rules! pipe {
    () => {
        $crate::compose::identity
    };

    ($function:expr $(,)?) => {
        $function
    };

    ($first_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let first = $first_function;
        let remaining = $crate::pipe!($($remaining_functions),+);
        move |input| remaining(first(input))
    }};
}
