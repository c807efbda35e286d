//! Core value types for the LateBind runtime.
//!
//! This crate provides the foundational types for a dynamic object/function
//! runtime: the tagged value representation, mutable object records, callable
//! function values, and the per-call context that carries the resolved
//! receiver.
//!
//! # Overview
//!
//! - [`Value`] - Tagged representation of runtime values
//! - [`TypeTag`] - Pure type classification of a value
//! - [`ObjectRecord`] - Insertion-ordered string-keyed property storage
//! - [`FunctionValue`] - Callable unit with no captured receiver
//! - [`CallContext`] - Per-call receiver and argument record
//! - [`RuntimeError`] - Recoverable runtime errors
//!
//! # Examples
//!
//! ```
//! use value_model::{Value, TypeTag};
//!
//! let obj = Value::object();
//! obj.set("x", Value::number(5.0));
//!
//! assert_eq!(obj.get("x"), Value::number(5.0));
//! assert_eq!(obj.type_of(), TypeTag::Object);
//! assert!(obj.is_truthy());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod context;
mod error;
mod function;
mod object;
mod value;

pub use context::CallContext;
pub use error::{RtResult, RuntimeError};
pub use function::{FunctionRef, FunctionValue};
pub use object::{ObjectRecord, ObjectRef};
pub use value::{TypeTag, Value};
