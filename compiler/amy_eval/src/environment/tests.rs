use super::*;
use amy_ir::StringInterner;
use pretty_assertions::assert_eq;

#[test]
fn bind_and_lookup() {
    let interner = StringInterner::new();
    let x = interner.intern("x");

    let env = Environment::new().bind(x, Value::int(42));
    assert_eq!(env.lookup(x), Some(&Value::int(42)));
    assert_eq!(env.depth(), 1);
}

#[test]
fn lookup_missing_is_none() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    assert!(Environment::new().lookup(x).is_none());
    assert!(Environment::new().is_empty());
}

#[test]
fn shadowing_leaves_parent_untouched() {
    let interner = StringInterner::new();
    let x = interner.intern("x");

    let outer = Environment::new().bind(x, Value::int(1));
    let inner = outer.bind(x, Value::int(2));

    assert_eq!(inner.lookup(x), Some(&Value::int(2)));
    assert_eq!(outer.lookup(x), Some(&Value::int(1)));
}

#[test]
fn child_sees_parent_bindings() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let y = interner.intern("y");

    let env = Environment::new()
        .bind(x, Value::int(1))
        .bind(y, Value::Bool(true));
    assert_eq!(env.lookup(x), Some(&Value::int(1)));
    assert_eq!(env.lookup(y), Some(&Value::Bool(true)));
    assert_eq!(env.depth(), 2);
}

#[test]
fn extend_adds_one_scope() {
    let interner = StringInterner::new();
    let h = interner.intern("h");
    let t = interner.intern("t");

    let env = Environment::new().extend(vec![(h, Value::int(1)), (t, Value::Unit)]);
    assert_eq!(env.depth(), 1);
    assert_eq!(env.lookup(t), Some(&Value::Unit));
}

#[test]
fn extend_with_nothing_adds_no_scope() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let env = Environment::new().bind(x, Value::int(1));
    assert_eq!(env.extend(Vec::new()).depth(), 1);
}

#[test]
fn for_call_binds_params_in_order() {
    let interner = StringInterner::new();
    let a = interner.intern("a");
    let b = interner.intern("b");

    let env = Environment::for_call(&[a, b], vec![Value::int(1), Value::int(2)]);
    assert_eq!(env.lookup(a), Some(&Value::int(1)));
    assert_eq!(env.lookup(b), Some(&Value::int(2)));
}

#[test]
fn for_call_without_params_is_empty() {
    assert!(Environment::for_call(&[], Vec::new()).is_empty());
}
