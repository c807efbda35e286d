//! End-to-end receiver-loss scenario
//!
//! An object whose method writes through the receiver, first called as a
//! member, then extracted into a plain binding and called bare. The member call mutates the object; the bare call
//! mutates the global binding environment instead.

use console_sink::{CaptureSink, Console};
use dispatcher::Runtime;
use value_model::Value;

/// Build `p = { x: 5, f: function(v) { this.x = v; } }`
fn make_p() -> Value {
    let p = Value::object();
    p.set("x", Value::number(5.0));
    p.set(
        "f",
        Value::named_function("f", |cx| {
            cx.receiver().set("x", cx.arg(0));
            Ok(Value::Undefined)
        }),
    );
    p
}

#[test]
fn receiver_loss_trace() {
    let rt = Runtime::new();
    let p = make_p();

    // 1. Reading p.x before any call.
    assert_eq!(p.get("x"), Value::number(5.0));

    // 2. Member call: receiver = p.
    rt.call_member(&p, "f", vec![Value::number(10.0)]).unwrap();
    assert_eq!(p.get("x"), Value::number(10.0));

    // 3. Extract the function value; no receiver comes along.
    let f = p.get("f");
    assert!(f.is_function());

    // 4. Bare call: receiver = global environment. p is untouched.
    rt.call_bare(&f, vec![Value::number(20.0)]).unwrap();
    assert_eq!(p.get("x"), Value::number(10.0));
    assert_eq!(rt.global_value().get("x"), Value::number(20.0));
}

#[test]
fn receiver_loss_observable_output() {
    let rt = Runtime::new();
    let p = make_p();

    let sink = CaptureSink::new();
    let lines = sink.lines();
    let console = Console::new(Box::new(sink));

    console.log(&[Value::string("p.x :"), p.get("x")]);
    rt.call_member(&p, "f", vec![Value::number(10.0)]).unwrap();
    console.log(&[Value::string("p.x :"), p.get("x")]);

    let f = p.get("f");
    rt.call_bare(&f, vec![Value::number(20.0)]).unwrap();
    console.log(&[Value::string("p.x :"), p.get("x")]);
    console.log(&[Value::string("globalThis.x :"), rt.global_value().get("x")]);

    assert_eq!(
        *lines.borrow(),
        vec!["p.x : 5", "p.x : 10", "p.x : 10", "globalThis.x : 20"]
    );
}

#[test]
fn global_x_is_absent_until_the_bare_call() {
    let rt = Runtime::new();
    let p = make_p();

    rt.call_member(&p, "f", vec![Value::number(10.0)]).unwrap();
    // Member call never touches the global record.
    assert!(!rt.global().borrow().has("x"));
    assert_eq!(rt.global_value().get("x"), Value::Undefined);

    let f = p.get("f");
    rt.call_bare(&f, vec![Value::number(20.0)]).unwrap();
    assert!(rt.global().borrow().has("x"));
}

#[test]
fn extracted_binding_aliases_the_same_function() {
    let p = make_p();
    let f = p.get("f");
    // Extraction copies the handle, not the function.
    assert_eq!(f, p.get("f"));
}
