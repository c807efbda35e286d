//! Tagged runtime value representation.
//!
//! This module provides the core `Value` enum that represents every value the
//! runtime can hold. Primitives are stored inline; objects and functions are
//! shared by reference so that two values can name the same mutable record.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::function::{FunctionRef, FunctionValue};
use crate::object::{ObjectRecord, ObjectRef};

/// Pure classification of a [`Value`], as returned by [`Value::type_of`].
///
/// The capability prober keys its final check on this tag: only
/// [`TypeTag::Function`] values are invocable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeTag {
    /// The missing-value sentinel
    Undefined,
    /// The null value
    Null,
    /// true or false
    Boolean,
    /// IEEE 754 double-precision number
    Number,
    /// String value
    String,
    /// Mutable object record
    Object,
    /// Callable function value
    Function,
}

impl TypeTag {
    /// The tag name in the dynamic-language `typeof` vocabulary.
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeTag::Undefined => "undefined",
            TypeTag::Null => "null",
            TypeTag::Boolean => "boolean",
            TypeTag::Number => "number",
            TypeTag::String => "string",
            TypeTag::Object => "object",
            TypeTag::Function => "function",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A runtime value.
///
/// Objects and functions are reference types: cloning a `Value` clones the
/// handle, not the record, so mutation through one handle is visible through
/// every other handle to the same record.
///
/// # Examples
///
/// ```
/// use value_model::Value;
///
/// let a = Value::object();
/// let b = a.clone();
/// a.set("x", Value::number(1.0));
///
/// // b sees the write made through a
/// assert_eq!(b.get("x"), Value::number(1.0));
/// ```
#[derive(Clone)]
pub enum Value {
    /// Missing value; what `ObjectRecord::get` returns for an absent key
    Undefined,
    /// The null value
    Null,
    /// true or false
    Boolean(bool),
    /// IEEE 754 double-precision number
    Number(f64),
    /// String value
    String(String),
    /// Shared mutable object record
    Object(ObjectRef),
    /// Shared function value; never carries a receiver of its own
    Function(FunctionRef),
}

impl Value {
    /// Create an empty object record wrapped as a value.
    pub fn object() -> Self {
        Value::Object(Rc::new(RefCell::new(ObjectRecord::new())))
    }

    /// Wrap an existing object record handle.
    pub fn from_object(record: ObjectRef) -> Self {
        Value::Object(record)
    }

    /// Create a number value.
    pub fn number(n: f64) -> Self {
        Value::Number(n)
    }

    /// Create a string value.
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(s.into())
    }

    /// Create a boolean value.
    pub fn boolean(b: bool) -> Self {
        Value::Boolean(b)
    }

    /// Create an anonymous function value from a body closure.
    ///
    /// The body receives the per-call [`CallContext`](crate::CallContext);
    /// the receiver inside it is whatever the dispatcher resolved for that
    /// particular call, never anything remembered from an earlier call.
    pub fn function<F>(body: F) -> Self
    where
        F: Fn(&crate::CallContext) -> crate::RtResult<Value> + 'static,
    {
        Value::Function(Rc::new(FunctionValue::new(body)))
    }

    /// Create a named function value; the name only feeds diagnostics.
    pub fn named_function<F>(name: impl Into<String>, body: F) -> Self
    where
        F: Fn(&crate::CallContext) -> crate::RtResult<Value> + 'static,
    {
        Value::Function(Rc::new(FunctionValue::named(name, body)))
    }

    /// Check if value is undefined.
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Check if value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Check if value is null or undefined.
    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Null | Value::Undefined)
    }

    /// Check if value is an object record.
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Check if value is a function.
    pub fn is_function(&self) -> bool {
        matches!(self, Value::Function(_))
    }

    /// Get as number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get as string.
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the underlying object record handle, if this is an object.
    pub fn as_object(&self) -> Option<ObjectRef> {
        match self {
            Value::Object(obj) => Some(obj.clone()),
            _ => None,
        }
    }

    /// Get the underlying function handle, if this is a function.
    pub fn as_function(&self) -> Option<FunctionRef> {
        match self {
            Value::Function(f) => Some(f.clone()),
            _ => None,
        }
    }

    /// Get object property; `Undefined` for absent keys or non-objects.
    pub fn get(&self, key: &str) -> Value {
        match self {
            Value::Object(obj) => obj.borrow().get(key),
            _ => Value::Undefined,
        }
    }

    /// Set object property; no-op on non-objects.
    pub fn set(&self, key: &str, value: Value) {
        if let Value::Object(obj) = self {
            obj.borrow_mut().set(key, value);
        }
    }

    /// Check if an object has its own property; false for non-objects.
    pub fn has_own(&self, key: &str) -> bool {
        match self {
            Value::Object(obj) => obj.borrow().has(key),
            _ => false,
        }
    }

    /// Returns the type tag of this value.
    ///
    /// # Examples
    ///
    /// ```
    /// use value_model::{TypeTag, Value};
    ///
    /// assert_eq!(Value::Undefined.type_of(), TypeTag::Undefined);
    /// assert_eq!(Value::number(42.0).type_of(), TypeTag::Number);
    /// assert_eq!(Value::object().type_of(), TypeTag::Object);
    /// ```
    pub fn type_of(&self) -> TypeTag {
        match self {
            Value::Undefined => TypeTag::Undefined,
            Value::Null => TypeTag::Null,
            Value::Boolean(_) => TypeTag::Boolean,
            Value::Number(_) => TypeTag::Number,
            Value::String(_) => TypeTag::String,
            Value::Object(_) => TypeTag::Object,
            Value::Function(_) => TypeTag::Function,
        }
    }

    /// Returns whether this value is truthy.
    ///
    /// Undefined, null, false, 0, NaN and the empty string are falsy;
    /// everything else, including every object and function, is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined => false,
            Value::Null => false,
            Value::Boolean(b) => *b,
            Value::Number(n) => !n.is_nan() && *n != 0.0,
            Value::String(s) => !s.is_empty(),
            Value::Object(_) => true,
            Value::Function(_) => true,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) => true,
            (Value::Null, Value::Null) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            // NaN is not equal to itself
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            // Reference types compare by identity, not structure
            (Value::Object(a), Value::Object(b)) => Rc::ptr_eq(a, b),
            (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "Undefined"),
            Value::Null => write!(f, "Null"),
            Value::Boolean(b) => f.debug_tuple("Boolean").field(b).finish(),
            Value::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Value::String(s) => f.debug_tuple("String").field(s).finish(),
            Value::Object(obj) => write!(f, "Object({:p})", Rc::as_ptr(obj)),
            Value::Function(func) => match func.name() {
                Some(name) => f.debug_tuple("Function").field(&name).finish(),
                None => write!(f, "Function(..)"),
            },
        }
    }
}

/// String conversion for observable output.
///
/// Integral numbers display without a decimal point.
///
/// # Examples
///
/// ```
/// use value_model::Value;
///
/// assert_eq!(Value::Undefined.to_string(), "undefined");
/// assert_eq!(Value::number(10.0).to_string(), "10");
/// assert_eq!(Value::number(2.5).to_string(), "2.5");
/// assert_eq!(Value::object().to_string(), "[object Object]");
/// ```
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Boolean(b) => write!(f, "{}", if *b { "true" } else { "false" }),
            Value::Number(n) => {
                if n.is_nan() {
                    write!(f, "NaN")
                } else if n.is_infinite() {
                    if n.is_sign_positive() {
                        write!(f, "Infinity")
                    } else {
                        write!(f, "-Infinity")
                    }
                } else if n.fract() == 0.0 && n.abs() < 1e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            Value::String(s) => write!(f, "{}", s),
            Value::Object(_) => write!(f, "[object Object]"),
            Value::Function(func) => match func.name() {
                Some(name) => write!(f, "function {}() {{ [native code] }}", name),
                None => write!(f, "function () {{ [native code] }}"),
            },
        }
    }
}
