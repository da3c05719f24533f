//! The `compose!` macro for function composition.
//!
//! This module provides the [`compose!`] macro which composes functions
//! from right to left, following the mathematical notation for function composition.

/// Composes functions from right to left.
///
/// `compose!(f, g, h)(x)` is equivalent to `f(g(h(x)))`.
///
/// Unlike [`comp`](crate::compose::comp), the functions may change the type
/// flowing through the chain.
///
/// # Syntax
///
/// - `compose!()` - Returns [`identity`](crate::compose::identity)
/// - `compose!(f)` - Returns `f` unchanged
/// - `compose!(f, g)` - Returns `|x| f(g(x))`
/// - `compose!(f, g, h, ...)` - Composes any number of functions
///
/// # Examples
///
/// ```
/// use lambdascript::compose;
///
/// let add5 = |x: i32| x + 5;
/// let multiply_by2 = |x: i32| x * 2;
/// let subtract10 = |x: i32| x - 10;
///
/// // subtract10(multiply_by2(add5(1))) = subtract10(12) = 2
/// let composed = compose!(subtract10, multiply_by2, add5);
/// assert_eq!(composed(1), 2);
/// ```
///
/// ## Type conversion
///
/// ```
/// use lambdascript::compose;
///
/// fn to_string(x: i32) -> String { x.to_string() }
/// fn get_length(s: String) -> usize { s.len() }
///
/// let composed = compose!(get_length, to_string);
/// assert_eq!(composed(12345), 5);
/// ```
///
/// ## Empty composition
///
/// ```
/// use lambdascript::compose;
///
/// let nothing = compose!();
/// assert_eq!(nothing("unchanged"), "unchanged");
/// ```
#[macro_export]
macro_rules! compose {
    () => {
        $crate::compose::identity
    };

    ($function:expr $(,)?) => {
        $function
    };

    // compose!(f, g, h, ...) = compose!(f, compose!(g, h, ...))
    ($outer_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let outer = $outer_function;
        let inner_composed = $crate::compose!($($remaining_functions),+);
        move |input| outer(inner_composed(input))
    }};
}
