//! Runtime handle and receiver resolution.

use value_model::{CallContext, ObjectRecord, ObjectRef, RtResult, RuntimeError, Value};

use crate::call::CallExpr;

/// Owner of the global binding environment and entry point for dispatch.
///
/// The global environment is one [`ObjectRecord`], created in
/// [`Runtime::new`] and alive for as long as the runtime handle. It is not
/// ambient state: everything that needs the fallback receiver reaches it
/// through this handle. Assigning to an unknown key on it creates the key,
/// the same as on any other record.
pub struct Runtime {
    global: ObjectRef,
}

impl Runtime {
    /// Create a runtime with a fresh, empty global binding environment.
    pub fn new() -> Self {
        Runtime {
            global: ObjectRecord::new_ref(),
        }
    }

    /// Handle to the global binding environment's record.
    pub fn global(&self) -> ObjectRef {
        self.global.clone()
    }

    /// The global binding environment as a value, usable as a receiver.
    pub fn global_value(&self) -> Value {
        Value::from_object(self.global.clone())
    }

    /// Resolve a call expression's receiver and invoke its target.
    ///
    /// Member form: the target is the receiver; the member is looked up on
    /// it via the object record. Bare form: the receiver is the global
    /// binding environment. Either way, a [`CallContext`] is built fresh for
    /// this call and discarded afterwards; nothing about the binding sticks
    /// to the function value.
    pub fn call(&self, expr: &CallExpr) -> RtResult<Value> {
        match expr {
            CallExpr::Member {
                target,
                member,
                args,
            } => self.call_member(target, member, args.clone()),
            CallExpr::Bare { callee, args } => self.call_bare(callee, args.clone()),
        }
    }

    /// Member-call form: `target.member(args...)`, receiver = `target`.
    pub fn call_member(&self, target: &Value, member: &str, args: Vec<Value>) -> RtResult<Value> {
        if !target.is_object() {
            return Err(RuntimeError::ReceiverNotObject {
                member: member.to_string(),
            });
        }
        let callee = target.get(member);
        match callee.as_function() {
            Some(func) => {
                let cx = CallContext::new(target.clone(), args);
                func.call(&cx)
            }
            None => Err(RuntimeError::NotCallable {
                name: member.to_string(),
            }),
        }
    }

    /// Bare-call form: `callee(args...)`, receiver = global environment.
    ///
    /// This is the "losing the receiver" path: a function extracted out of
    /// an object into an independent binding and called here mutates the
    /// global record, not the object it came from.
    pub fn call_bare(&self, callee: &Value, args: Vec<Value>) -> RtResult<Value> {
        match callee.as_function() {
            Some(func) => {
                let cx = CallContext::new(self.global_value(), args);
                func.call(&cx)
            }
            None => Err(RuntimeError::NotCallable {
                name: callee_name(callee),
            }),
        }
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new()
    }
}

fn callee_name(callee: &Value) -> String {
    match callee.as_function().as_ref().and_then(|f| f.name()) {
        Some(name) => name.to_string(),
        None => callee.to_string(),
    }
}
