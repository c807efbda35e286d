//! Callable function values.
//!
//! A [`FunctionValue`] owns its executable body and whatever lexical state
//! the body closure captured at creation. It deliberately does not own a
//! receiver: the receiver arrives fresh with every call, inside the
//! [`CallContext`] built by the dispatcher.

use std::fmt;
use std::rc::Rc;

use crate::context::CallContext;
use crate::error::RtResult;
use crate::value::Value;

/// Shared handle to a [`FunctionValue`].
///
/// Functions are immutable once created, so the handle is a plain `Rc`.
pub type FunctionRef = Rc<FunctionValue>;

type Body = Box<dyn Fn(&CallContext) -> RtResult<Value>>;

/// A callable unit with no captured receiver.
///
/// The same `FunctionValue` instance, called twice through different
/// call-site forms, may see two different receivers; neither call leaves any
/// trace on the function that could influence the other's binding.
///
/// # Examples
///
/// ```
/// use value_model::{CallContext, FunctionValue, Value};
///
/// let double = FunctionValue::new(|cx| {
///     Ok(Value::number(cx.arg(0).as_number().unwrap_or(f64::NAN) * 2.0))
/// });
///
/// let cx = CallContext::new(Value::Undefined, vec![Value::number(21.0)]);
/// assert_eq!(double.call(&cx).unwrap(), Value::number(42.0));
/// ```
pub struct FunctionValue {
    name: Option<String>,
    body: Body,
}

impl FunctionValue {
    /// Create an anonymous function from its body closure.
    pub fn new<F>(body: F) -> Self
    where
        F: Fn(&CallContext) -> RtResult<Value> + 'static,
    {
        FunctionValue {
            name: None,
            body: Box::new(body),
        }
    }

    /// Create a named function; the name only feeds diagnostics.
    pub fn named<F>(name: impl Into<String>, body: F) -> Self
    where
        F: Fn(&CallContext) -> RtResult<Value> + 'static,
    {
        FunctionValue {
            name: Some(name.into()),
            body: Box::new(body),
        }
    }

    /// The function's diagnostic name, if it has one.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Execute the body against a resolved call context.
    ///
    /// Callers do not invoke this directly in normal operation; the
    /// dispatcher resolves the receiver first and builds the context.
    pub fn call(&self, cx: &CallContext) -> RtResult<Value> {
        (self.body)(cx)
    }
}

impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionValue")
            .field("name", &self.name)
            .finish()
    }
}
