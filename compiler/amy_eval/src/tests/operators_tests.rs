//! Tests for binary operator implementations.

#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use crate::errors::EvalErrorKind;
use crate::operators::evaluate_binary;
use crate::Value;
use amy_ir::BinaryOp;
use pretty_assertions::assert_eq;

fn int_op(a: i32, b: i32, op: BinaryOp) -> Value {
    evaluate_binary(&Value::int(a), &Value::int(b), op).unwrap()
}

#[test]
fn test_int_operations() {
    assert_eq!(int_op(2, 3, BinaryOp::Add), Value::int(5));
    assert_eq!(int_op(5, 3, BinaryOp::Sub), Value::int(2));
    assert_eq!(int_op(2, 3, BinaryOp::Mul), Value::int(6));
    assert_eq!(int_op(7, 2, BinaryOp::Div), Value::int(3));
    assert_eq!(int_op(7, 2, BinaryOp::Mod), Value::int(1));
}

#[test]
fn test_division_truncates_toward_zero() {
    assert_eq!(int_op(-7, 2, BinaryOp::Div), Value::int(-3));
    assert_eq!(int_op(7, -2, BinaryOp::Div), Value::int(-3));
}

#[test]
fn test_modulo_takes_sign_of_dividend() {
    assert_eq!(int_op(-7, 2, BinaryOp::Mod), Value::int(-1));
    assert_eq!(int_op(7, -2, BinaryOp::Mod), Value::int(1));
}

#[test]
fn test_division_by_zero() {
    for op in [BinaryOp::Div, BinaryOp::Mod] {
        let err = evaluate_binary(&Value::int(1), &Value::int(0), op).unwrap_err();
        assert_eq!(err.kind, EvalErrorKind::DivisionByZero {
            op: op.as_symbol()
        });
        assert!(!err.is_internal());
    }
}

#[test]
fn test_overflow_wraps() {
    assert_eq!(int_op(i32::MAX, 1, BinaryOp::Add), Value::int(i32::MIN));
    assert_eq!(int_op(i32::MIN, 1, BinaryOp::Sub), Value::int(i32::MAX));
    assert_eq!(int_op(i32::MAX, 2, BinaryOp::Mul), Value::int(-2));
    assert_eq!(int_op(i32::MIN, -1, BinaryOp::Div), Value::int(i32::MIN));
    assert_eq!(int_op(i32::MIN, -1, BinaryOp::Mod), Value::int(0));
}

#[test]
fn test_comparisons() {
    assert_eq!(int_op(1, 2, BinaryOp::Lt), Value::Bool(true));
    assert_eq!(int_op(2, 2, BinaryOp::Lt), Value::Bool(false));
    assert_eq!(int_op(2, 2, BinaryOp::LtEq), Value::Bool(true));
    assert_eq!(int_op(3, 2, BinaryOp::LtEq), Value::Bool(false));
}

#[test]
fn test_equality_across_types() {
    let eq = |a: Value, b: Value| evaluate_binary(&a, &b, BinaryOp::Eq).unwrap();
    assert_eq!(eq(Value::int(1), Value::int(1)), Value::Bool(true));
    assert_eq!(eq(Value::string("a"), Value::string("a")), Value::Bool(true));
    assert_eq!(eq(Value::Unit, Value::Unit), Value::Bool(true));
    assert_eq!(eq(Value::int(1), Value::Bool(true)), Value::Bool(false));
}

#[test]
fn test_string_concat() {
    let result =
        evaluate_binary(&Value::string("foo"), &Value::string("bar"), BinaryOp::Concat).unwrap();
    assert_eq!(result, Value::string("foobar"));
}

#[test]
fn test_type_mismatch_is_internal() {
    let err = evaluate_binary(&Value::int(1), &Value::string("x"), BinaryOp::Add).unwrap_err();
    assert!(err.is_internal());
    assert_eq!(
        err.to_string(),
        "operator `+` cannot be applied to Int and String"
    );
}

#[test]
fn test_short_circuit_ops_are_rejected() {
    for op in [BinaryOp::And, BinaryOp::Or] {
        let err = evaluate_binary(&Value::Bool(true), &Value::Bool(false), op).unwrap_err();
        assert!(err.is_internal());
    }
}
