use super::*;
use crate::errors::{user_error, EvalErrorKind};
use pretty_assertions::assert_eq;

fn frame(interner: &StringInterner, module: &str, name: &str) -> CallFrame {
    CallFrame {
        function: QualifiedName::new(interner.intern(module), interner.intern(name)),
    }
}

#[test]
fn empty_stack() {
    let stack = CallStack::new(Some(100));
    assert!(stack.is_empty());
    assert_eq!(stack.depth(), 0);
    assert_eq!(stack.max_depth(), Some(100));
}

#[test]
fn push_and_pop() {
    let interner = StringInterner::new();
    let mut stack = CallStack::new(Some(100));
    stack
        .push(frame(&interner, "Main", "f"))
        .expect("push should succeed");
    assert_eq!(stack.depth(), 1);
    assert_eq!(
        stack.current_frame().map(|f| f.function.display(&interner)),
        Some("Main.f".to_string())
    );
    stack.pop();
    assert!(stack.is_empty());
}

#[test]
fn depth_limit_enforced() {
    let interner = StringInterner::new();
    let mut stack = CallStack::new(Some(3));
    for _ in 0..3 {
        stack
            .push(frame(&interner, "Main", "loop"))
            .expect("push within limit");
    }
    let err = stack
        .push(frame(&interner, "Main", "loop"))
        .expect_err("push should fail at max depth");
    assert_eq!(err.kind, EvalErrorKind::StackExhausted { depth: 3 });
    assert!(!err.is_internal());
    assert_eq!(stack.depth(), 3);
}

#[test]
fn unlimited_depth() {
    let interner = StringInterner::new();
    let mut stack = CallStack::default();
    for _ in 0..1000 {
        stack
            .push(frame(&interner, "Main", "deep"))
            .expect("unlimited stack never overflows");
    }
    assert_eq!(stack.depth(), 1000);
}

#[test]
fn capture_is_most_recent_first() {
    let interner = StringInterner::new();
    let mut stack = CallStack::new(None);
    stack.push(frame(&interner, "Main", "main")).expect("push");
    stack.push(frame(&interner, "Util", "helper")).expect("push");

    let backtrace = stack.capture(&interner);
    let names: Vec<&str> = backtrace.frames().iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["Util.helper", "Main.main"]);
    assert_eq!(backtrace.elided(), 0);
}

#[test]
fn capture_elides_deep_stacks() {
    let interner = StringInterner::new();
    let mut stack = CallStack::new(None);
    for _ in 0..37 {
        stack.push(frame(&interner, "Main", "loop")).expect("push");
    }
    let backtrace = stack.capture(&interner);
    assert_eq!(backtrace.len(), MAX_BACKTRACE_FRAMES);
    assert_eq!(backtrace.elided(), 5);
}

#[test]
fn attach_backtrace_keeps_innermost_capture() {
    let interner = StringInterner::new();
    let mut stack = CallStack::new(None);
    stack.push(frame(&interner, "Main", "main")).expect("push");
    stack.push(frame(&interner, "Main", "inner")).expect("push");
    let err = stack.attach_backtrace(user_error("boom"), &interner);

    stack.pop();
    let err = stack.attach_backtrace(err, &interner);
    assert_eq!(err.backtrace.map(|b| b.len()), Some(2));
}

#[test]
fn attach_backtrace_on_empty_stack_is_noop() {
    let interner = StringInterner::new();
    let stack = CallStack::new(None);
    let err = stack.attach_backtrace(user_error("boom"), &interner);
    assert!(err.backtrace.is_none());
}
