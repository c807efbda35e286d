//! End-to-end capability-probe scenario
//!
//! Before invoking `p.f`, check that `p` is not null, that `f` is in `p`,
//! and that `p.f` is a function. Each
//! failed check produces its own observable line; only the fully-passing
//! chain invokes anything.

use console_sink::{CaptureSink, Console};
use dispatcher::{probe_call, ProbeOutcome};
use value_model::Value;

/// Run the guard chain over `p`, reporting through the console.
fn guarded_call(console: &Console, p: &Value) {
    match probe_call(p, "f", vec![]).unwrap() {
        ProbeOutcome::ReceiverMissing => console.log_line("p is null"),
        ProbeOutcome::MemberAbsent => console.log_line("f is not in p"),
        ProbeOutcome::MemberNotInvocable(_) => console.log_line("f is not a function"),
        ProbeOutcome::Invoked(_) => {}
    }
}

fn captured() -> (Console, std::rc::Rc<std::cell::RefCell<Vec<String>>>) {
    let sink = CaptureSink::new();
    let lines = sink.lines();
    (Console::new(Box::new(sink)), lines)
}

#[test]
fn invokes_when_member_is_a_function() {
    let (console, lines) = captured();

    let p = Value::object();
    let out = lines.clone();
    p.set(
        "f",
        Value::named_function("f", move |_| {
            out.borrow_mut().push("ok".to_string());
            Ok(Value::Undefined)
        }),
    );

    guarded_call(&console, &p);
    assert_eq!(*lines.borrow(), vec!["ok"]);
}

#[test]
fn reports_non_function_member() {
    let (console, lines) = captured();

    let p = Value::object();
    p.set("f", Value::number(1.0));

    guarded_call(&console, &p);
    assert_eq!(*lines.borrow(), vec!["f is not a function"]);
}

#[test]
fn reports_absent_member() {
    let (console, lines) = captured();

    let p = Value::object();
    guarded_call(&console, &p);
    assert_eq!(*lines.borrow(), vec!["f is not in p"]);
}

#[test]
fn reports_null_receiver() {
    let (console, lines) = captured();

    guarded_call(&console, &Value::Null);
    assert_eq!(*lines.borrow(), vec!["p is null"]);
}

#[test]
fn failure_paths_never_invoke() {
    let (console, lines) = captured();

    let p = Value::object();
    let out = lines.clone();
    p.set(
        "g",
        Value::function(move |_| {
            out.borrow_mut().push("should not run".to_string());
            Ok(Value::Undefined)
        }),
    );

    // "f" is absent even though another callable member exists.
    guarded_call(&console, &p);
    assert_eq!(*lines.borrow(), vec!["f is not in p"]);
}
