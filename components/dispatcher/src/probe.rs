//! Guarded dispatch: probe a member before invoking it.

use value_model::{CallContext, RtResult, TypeTag, Value};

/// Outcome of a capability probe.
///
/// Exactly one of the four variants is produced per probe; no variant is
/// ever collapsed into another, so callers can act differently on each.
#[derive(Debug, Clone, PartialEq)]
pub enum ProbeOutcome {
    /// The receiver itself was null or undefined; no lookup was attempted.
    ReceiverMissing,
    /// The receiver has no such member; no type check was attempted.
    MemberAbsent,
    /// The member exists but is not a function. Carries the member's actual
    /// type tag; nothing was invoked.
    MemberNotInvocable(TypeTag),
    /// All checks passed and the member was invoked with the probed
    /// receiver; carries the call's return value.
    Invoked(Value),
}

/// Invoke `member` on `receiver` only when it is safe to do so.
///
/// Three ordered, short-circuiting checks guard the call:
///
/// 1. nullish receiver → [`ProbeOutcome::ReceiverMissing`];
/// 2. member not present → [`ProbeOutcome::MemberAbsent`] (a primitive
///    receiver has no member storage and lands here too);
/// 3. member present but not a function →
///    [`ProbeOutcome::MemberNotInvocable`];
/// 4. otherwise the member is called with receiver = the probed value.
///
/// The probe itself never fails; the outer `Result` only carries whatever
/// the invoked body reports.
///
/// # Examples
///
/// ```
/// use dispatcher::{probe_call, ProbeOutcome};
/// use value_model::Value;
///
/// let p = Value::object();
/// assert_eq!(
///     probe_call(&p, "f", vec![]).unwrap(),
///     ProbeOutcome::MemberAbsent,
/// );
///
/// assert_eq!(
///     probe_call(&Value::Null, "f", vec![]).unwrap(),
///     ProbeOutcome::ReceiverMissing,
/// );
/// ```
pub fn probe_call(receiver: &Value, member: &str, args: Vec<Value>) -> RtResult<ProbeOutcome> {
    if receiver.is_nullish() {
        return Ok(ProbeOutcome::ReceiverMissing);
    }
    if !receiver.has_own(member) {
        return Ok(ProbeOutcome::MemberAbsent);
    }
    let value = receiver.get(member);
    match value.as_function() {
        Some(func) => {
            let cx = CallContext::new(receiver.clone(), args);
            let result = func.call(&cx)?;
            Ok(ProbeOutcome::Invoked(result))
        }
        None => Ok(ProbeOutcome::MemberNotInvocable(value.type_of())),
    }
}
