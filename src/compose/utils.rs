//! Composition over runtime lists of functions.
//!
//! - [`identity`]: the unit of composition
//! - [`comp`]: right-to-left composition of a list of functions
//! - [`pipe`]: left-to-right composition of a list of functions
//!
//! The list forms take functions of one type `T -> T`, which lets the number
//! of stages be decided at runtime. For chains that change type, use the
//! [`compose!`](crate::compose!) and [`pipe!`](crate::pipe!) macros.

/// A boxed function from `T` to `T`.
pub type Endo<T> = Box<dyn Fn(T) -> T>;

/// Returns the value unchanged.
///
/// ```
/// use lambdascript::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Composes functions right to left: `comp([f1, f2, f3])(x) == f1(f2(f3(x)))`.
///
/// An empty list yields the identity function. Each call of the returned
/// function folds over the list afresh; nothing is shared between calls.
///
/// # Examples
///
/// ```
/// use lambdascript::compose::{Endo, comp};
///
/// let stages: [Endo<i32>; 3] = [
///     Box::new(|x: i32| x - 10),
///     Box::new(|x: i32| x * 2),
///     Box::new(|x: i32| x + 5),
/// ];
///
/// let composed = comp(stages);
/// assert_eq!(composed(1), 2);
/// ```
pub fn comp<T, I>(functions: I) -> impl Fn(T) -> T
where
    I: IntoIterator<Item = Endo<T>>,
{
    let functions: Vec<Endo<T>> = functions.into_iter().collect();
    move |input| {
        functions
            .iter()
            .rev()
            .fold(input, |accumulator, function| function(accumulator))
    }
}

/// Composes functions left to right: `pipe([f1, f2, f3])(x) == f3(f2(f1(x)))`.
///
/// An empty list yields the identity function.
///
/// # Examples
///
/// ```
/// use lambdascript::compose::{Endo, pipe};
///
/// let stages: [Endo<f64>; 3] = [
///     Box::new(|x: f64| x * x),
///     Box::new(|x: f64| x + 3.0),
///     Box::new(|x: f64| x / 2.0),
/// ];
///
/// let piped = pipe(stages);
/// assert_eq!(piped(4.0), 9.5);
/// ```
pub fn pipe<T, I>(functions: I) -> impl Fn(T) -> T
where
    I: IntoIterator<Item = Endo<T>>,
{
    let functions: Vec<Endo<T>> = functions.into_iter().collect();
    move |input| {
        functions
            .iter()
            .fold(input, |accumulator, function| function(accumulator))
    }
}
