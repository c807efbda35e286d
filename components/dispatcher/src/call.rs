//! Call-site classification.

use value_model::Value;

/// The syntactic form of a call expression, as seen at the call site.
///
/// Receiver binding depends on nothing but this classification: the same
/// function value dispatched through both forms binds two different
/// receivers, with no persisted effect of one call on the other.
#[derive(Debug, Clone)]
pub enum CallExpr {
    /// `target.member(args...)`: carries an explicit receiver.
    Member {
        /// The evaluated receiver expression.
        target: Value,
        /// The member name looked up on the target.
        member: String,
        /// Evaluated arguments, in order.
        args: Vec<Value>,
    },
    /// `callee(args...)`: a plain bound value, carrying no receiver.
    ///
    /// The callee must have been obtained from a prior binding; if that
    /// binding was filled by pulling a function out of an object, the object
    /// does not come along.
    Bare {
        /// The evaluated callee value.
        callee: Value,
        /// Evaluated arguments, in order.
        args: Vec<Value>,
    },
}

impl CallExpr {
    /// Build a member-call form.
    pub fn member(target: Value, member: impl Into<String>, args: Vec<Value>) -> Self {
        CallExpr::Member {
            target,
            member: member.into(),
            args,
        }
    }

    /// Build a bare-call form.
    pub fn bare(callee: Value, args: Vec<Value>) -> Self {
        CallExpr::Bare { callee, args }
    }
}
