#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use crate::errors::EvalErrorKind;
use pretty_assertions::assert_eq;

fn std_fn(interner: &StringInterner, name: &str) -> BuiltinFunction {
    let registry = BuiltinRegistry::standard(interner);
    registry
        .get(QualifiedName::new(interner.intern("Std"), interner.intern(name)))
        .unwrap()
}

#[test]
fn standard_registry_has_std_entries() {
    let interner = StringInterner::new();
    let registry = BuiltinRegistry::standard(&interner);
    assert_eq!(registry.len(), 6);
    for name in ["printInt", "printString", "readInt", "readString", "intToString", "digitToString"] {
        let key = QualifiedName::new(interner.intern("Std"), interner.intern(name));
        assert!(registry.contains(key), "missing Std.{name}");
    }
    let other = QualifiedName::new(interner.intern("Main"), interner.intern("printInt"));
    assert!(!registry.contains(other));
}

#[test]
fn print_int_writes_line() {
    let interner = StringInterner::new();
    let (mut ctx, out) = ExecContext::captured("");
    let result = std_fn(&interner, "printInt")
        .call(&[Value::int(-12)], &mut ctx)
        .unwrap();
    assert!(result.is_unit());
    assert_eq!(out.contents(), "-12\n");
}

#[test]
fn print_string_writes_line() {
    let interner = StringInterner::new();
    let (mut ctx, out) = ExecContext::captured("");
    std_fn(&interner, "printString")
        .call(&[Value::string("hi")], &mut ctx)
        .unwrap();
    assert_eq!(out.contents(), "hi\n");
}

#[test]
fn read_int_parses_signed_lines() {
    let interner = StringInterner::new();
    let read_int = std_fn(&interner, "readInt");
    let (mut ctx, _) = ExecContext::captured("42\n-7\n+3\n");
    assert_eq!(read_int.call(&[], &mut ctx).unwrap(), Value::int(42));
    assert_eq!(read_int.call(&[], &mut ctx).unwrap(), Value::int(-7));
    assert_eq!(read_int.call(&[], &mut ctx).unwrap(), Value::int(3));
}

#[test]
fn read_int_rejects_malformed_lines() {
    let interner = StringInterner::new();
    let read_int = std_fn(&interner, "readInt");
    let (mut ctx, _) = ExecContext::captured("abc\n 4\n99999999999\n");
    for line in ["abc", " 4", "99999999999"] {
        let err = read_int.call(&[], &mut ctx).unwrap_err();
        assert_eq!(err.kind, EvalErrorKind::MalformedInput {
            line: line.to_string()
        });
    }
}

#[test]
fn reads_fail_at_end_of_input() {
    let interner = StringInterner::new();
    let (mut ctx, _) = ExecContext::captured("");
    let err = std_fn(&interner, "readString").call(&[], &mut ctx).unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::EndOfInput {
        function: "readString"
    });
    assert!(!err.is_internal());
}

#[test]
fn read_string_returns_raw_line() {
    let interner = StringInterner::new();
    let (mut ctx, _) = ExecContext::captured(" spaced out \r\n");
    let line = std_fn(&interner, "readString").call(&[], &mut ctx).unwrap();
    assert_eq!(line, Value::string(" spaced out "));
}

#[test]
fn int_to_string_formats_decimal() {
    let interner = StringInterner::new();
    let (mut ctx, _) = ExecContext::captured("");
    let f = std_fn(&interner, "intToString");
    assert_eq!(f.call(&[Value::int(0)], &mut ctx).unwrap(), Value::string("0"));
    assert_eq!(f.call(&[Value::int(-305)], &mut ctx).unwrap(), Value::string("-305"));
}

#[test]
fn digit_to_string_checks_range() {
    let interner = StringInterner::new();
    let (mut ctx, _) = ExecContext::captured("");
    let f = std_fn(&interner, "digitToString");
    assert_eq!(f.call(&[Value::int(7)], &mut ctx).unwrap(), Value::string("7"));
    let err = f.call(&[Value::int(10)], &mut ctx).unwrap_err();
    assert!(matches!(err.kind, EvalErrorKind::InvalidArgument { function: "digitToString", .. }));
}

#[test]
fn call_checks_arity() {
    let interner = StringInterner::new();
    let (mut ctx, _) = ExecContext::captured("");
    let err = std_fn(&interner, "printInt").call(&[], &mut ctx).unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::ArityMismatch {
        name: "Std.printInt".to_string(),
        expected: 1,
        got: 0,
    });
    assert!(err.is_internal());
}

#[test]
fn wrong_argument_type_is_internal() {
    let interner = StringInterner::new();
    let (mut ctx, _) = ExecContext::captured("");
    let err = std_fn(&interner, "printString")
        .call(&[Value::int(1)], &mut ctx)
        .unwrap_err();
    assert!(err.is_internal());
}

#[test]
fn register_adds_custom_builtins() {
    fn answer(_: &mut ExecContext) -> EvalResult {
        Ok(Value::int(42))
    }

    let interner = StringInterner::new();
    let mut registry = BuiltinRegistry::new();
    assert!(registry.is_empty());
    registry.register(&interner, BuiltinFunction::nullary("Host", "answer", answer));

    let key = QualifiedName::new(interner.intern("Host"), interner.intern("answer"));
    let builtin = registry.get(key).unwrap();
    assert_eq!(builtin.to_string(), "Host.answer");
    assert_eq!(builtin.arity(), 0);
    let (mut ctx, _) = ExecContext::captured("");
    assert_eq!(builtin.call(&[], &mut ctx).unwrap(), Value::int(42));
}
