//! Per-call context.

use crate::value::Value;

/// Ephemeral record of one call: the resolved receiver plus the arguments.
///
/// Built by the dispatcher immediately before invocation and discarded when
/// the call returns. The receiver here is the whole mechanism by which the
/// same function can mutate different objects on different calls: "set a
/// field on the receiver" inside a body writes into whichever record this
/// context carries.
#[derive(Debug, Clone)]
pub struct CallContext {
    receiver: Value,
    args: Vec<Value>,
}

impl CallContext {
    /// Build a context from a resolved receiver and argument sequence.
    pub fn new(receiver: Value, args: Vec<Value>) -> Self {
        CallContext { receiver, args }
    }

    /// The receiver resolved for this call.
    pub fn receiver(&self) -> &Value {
        &self.receiver
    }

    /// All arguments, in order.
    pub fn args(&self) -> &[Value] {
        &self.args
    }

    /// Argument by position; missing arguments read as `Undefined`.
    pub fn arg(&self, index: usize) -> Value {
        self.args.get(index).cloned().unwrap_or(Value::Undefined)
    }
}
