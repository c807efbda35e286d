//! Call dispatch and capability probing for the LateBind runtime.
//!
//! This crate decides what a call's receiver is. The rule is syntactic and
//! applies at the call site, never at the definition site:
//!
//! - a member call `target.member(args)` binds the receiver to `target`;
//! - a bare call `callee(args)` binds the receiver to the process-wide
//!   global binding environment, owned by [`Runtime`].
//!
//! It also provides the guarded-dispatch path: [`probe_call`] runs the
//! null-check / membership-check / type-check chain and reports a
//! [`ProbeOutcome`] instead of failing.
//!
//! # Example
//!
//! ```
//! use dispatcher::Runtime;
//! use value_model::Value;
//!
//! let rt = Runtime::new();
//! let p = Value::object();
//! p.set("x", Value::number(5.0));
//! p.set(
//!     "f",
//!     Value::named_function("f", |cx| {
//!         cx.receiver().set("x", cx.arg(0));
//!         Ok(Value::Undefined)
//!     }),
//! );
//!
//! // Member call: receiver is p.
//! rt.call_member(&p, "f", vec![Value::number(10.0)]).unwrap();
//! assert_eq!(p.get("x"), Value::number(10.0));
//!
//! // Extracting the function loses the receiver; a bare call binds the
//! // global environment instead.
//! let f = p.get("f");
//! rt.call_bare(&f, vec![Value::number(20.0)]).unwrap();
//! assert_eq!(p.get("x"), Value::number(10.0));
//! assert_eq!(rt.global_value().get("x"), Value::number(20.0));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod call;
mod probe;
mod runtime;

pub use call::CallExpr;
pub use probe::{probe_call, ProbeOutcome};
pub use runtime::Runtime;
