use std::fmt;
use std::sync::Arc;

use super::Value;

/// A shared callable value.
///
/// Cloning shares the same closure; equality is identity.
#[derive(Clone)]
pub struct Function(Arc<dyn Fn(&[Value]) -> Value + Send + Sync>);

impl Function {
    /// Wraps a closure taking positional arguments.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self(Arc::new(function))
    }

    /// Calls the function with the given positional arguments.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambdascript::value::{Function, Value};
    ///
    /// let length = Function::new(|arguments| Value::from(arguments.len() as u32));
    /// assert_eq!(length.call(&[Value::Null, Value::Null]), Value::from(2));
    /// ```
    pub fn call(&self, arguments: &[Value]) -> Value {
        (self.0)(arguments)
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Function").field(&"<closure>").finish()
    }
}
