//! Tests for unary operator implementations.

#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use crate::unary_operators::evaluate_unary;
use crate::Value;
use amy_ir::UnaryOp;
use pretty_assertions::assert_eq;

#[test]
fn test_neg() {
    assert_eq!(evaluate_unary(&Value::int(5), UnaryOp::Neg).unwrap(), Value::int(-5));
    assert_eq!(evaluate_unary(&Value::int(-5), UnaryOp::Neg).unwrap(), Value::int(5));
}

#[test]
fn test_neg_min_wraps() {
    assert_eq!(
        evaluate_unary(&Value::int(i32::MIN), UnaryOp::Neg).unwrap(),
        Value::int(i32::MIN)
    );
}

#[test]
fn test_not() {
    assert_eq!(
        evaluate_unary(&Value::Bool(true), UnaryOp::Not).unwrap(),
        Value::Bool(false)
    );
    assert_eq!(
        evaluate_unary(&Value::Bool(false), UnaryOp::Not).unwrap(),
        Value::Bool(true)
    );
}

#[test]
fn test_mismatched_operand_is_internal() {
    let err = evaluate_unary(&Value::Bool(true), UnaryOp::Neg).unwrap_err();
    assert!(err.is_internal());
    let err = evaluate_unary(&Value::int(0), UnaryOp::Not).unwrap_err();
    assert_eq!(err.to_string(), "operator `!` cannot be applied to Int");
}
