//! Cross-component property tests
//!
//! Checks the four load-bearing properties of the runtime over a spread of
//! object shapes rather than a single scripted sequence:
//! - member calls bind the syntactic target
//! - extraction always loses the original receiver
//! - membership is defined by assignment, not by the stored value
//! - probe checks run in order and at most one fires

use dispatcher::{probe_call, ProbeOutcome, Runtime};
use value_model::{TypeTag, Value};

/// A function that records the identity of its receiver on the receiver.
fn make_witness() -> Value {
    Value::function(|cx| {
        cx.receiver().set("seen", Value::boolean(true));
        Ok(cx.receiver().clone())
    })
}

#[test]
fn member_call_binds_the_syntactic_target() {
    let rt = Runtime::new();

    // Several distinct objects sharing one method; each call binds its own
    // syntactic target.
    let witness = make_witness();
    let objects: Vec<Value> = (0..4).map(|_| Value::object()).collect();
    for obj in &objects {
        obj.set("m", witness.clone());
    }

    for obj in &objects {
        let bound = rt.call_member(obj, "m", vec![]).unwrap();
        assert_eq!(&bound, obj);
        assert_eq!(obj.get("seen"), Value::boolean(true));
    }
    assert!(!rt.global().borrow().has("seen"));
}

#[test]
fn extraction_always_binds_global() {
    let rt = Runtime::new();

    let o = Value::object();
    o.set("m", make_witness());

    let g = o.get("m");
    let bound = rt.call_bare(&g, vec![]).unwrap();

    // Never the originating object, always the one global record.
    assert_ne!(bound, o);
    assert_eq!(bound, rt.global_value());
    assert!(!o.has_own("seen"));
    assert!(rt.global().borrow().has("seen"));
}

#[test]
fn membership_tracks_assignment_not_value() {
    let r = Value::object();

    for (key, value) in [
        ("a", Value::Undefined),
        ("b", Value::Null),
        ("c", Value::number(0.0)),
        ("d", Value::string("")),
        ("e", Value::boolean(false)),
    ] {
        assert!(!r.has_own(key));
        r.set(key, value);
        assert!(r.has_own(key), "{key} was set, has must be true");
    }

    // get alone cannot distinguish an explicit Undefined from absence.
    assert_eq!(r.get("a"), Value::Undefined);
    assert_eq!(r.get("zz"), Value::Undefined);
    assert!(r.has_own("a"));
    assert!(!r.has_own("zz"));
}

#[test]
fn probe_checks_fire_in_order() {
    // Stage 1 beats stage 2: a nullish receiver is reported before any
    // membership question could be asked.
    assert_eq!(
        probe_call(&Value::Null, "anything", vec![]).unwrap(),
        ProbeOutcome::ReceiverMissing
    );

    // Stage 2 beats stage 3: an absent member is reported even though its
    // type tag would also fail the invocability check.
    let p = Value::object();
    assert_eq!(
        probe_call(&p, "f", vec![]).unwrap(),
        ProbeOutcome::MemberAbsent
    );

    // Stage 3 only fires once both earlier stages pass.
    p.set("f", Value::string("text"));
    assert_eq!(
        probe_call(&p, "f", vec![]).unwrap(),
        ProbeOutcome::MemberNotInvocable(TypeTag::String)
    );
}

#[test]
fn binding_is_per_call_not_per_function() {
    let rt = Runtime::new();

    let o = Value::object();
    o.set("m", make_witness());
    let extracted = o.get("m");

    // Interleave the two forms; each call re-resolves from scratch.
    assert_eq!(rt.call_member(&o, "m", vec![]).unwrap(), o);
    assert_eq!(rt.call_bare(&extracted, vec![]).unwrap(), rt.global_value());
    assert_eq!(rt.call_member(&o, "m", vec![]).unwrap(), o);
    assert_eq!(rt.call_bare(&extracted, vec![]).unwrap(), rt.global_value());
}
