//! Unary operator implementations for the evaluator.

use amy_ir::UnaryOp;

use crate::errors::{invalid_unary_op, EvalResult};
use crate::Value;

/// Evaluate a unary operation; integer negation wraps.
pub fn evaluate_unary(operand: &Value, op: UnaryOp) -> EvalResult {
    match (op, operand) {
        (UnaryOp::Neg, Value::Int(n)) => Ok(Value::Int(n.wrapping_neg())),
        (UnaryOp::Not, Value::Bool(b)) => Ok(Value::Bool(!b)),
        _ => Err(invalid_unary_op(op.as_symbol(), operand.type_name())),
    }
}
