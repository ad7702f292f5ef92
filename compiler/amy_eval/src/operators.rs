//! Binary operator implementations for the evaluator.
//!
//! Direct enum-based dispatch: the operand type set is fixed, so a `match`
//! over `(left, right)` keeps every case checked for exhaustiveness.
//!
//! `&&` and `||` never reach this module; the interpreter evaluates them
//! lazily.

use amy_ir::BinaryOp;

use crate::errors::{division_by_zero, invalid_binary_op, EvalResult};
use crate::Value;

/// Division with zero guard; `i32::MIN / -1` wraps.
#[inline]
fn checked_div(a: i32, b: i32, op: BinaryOp) -> EvalResult {
    if b == 0 {
        Err(division_by_zero(op))
    } else {
        Ok(Value::Int(a.wrapping_div(b)))
    }
}

/// Remainder with zero guard; the result takes the sign of the dividend.
#[inline]
fn checked_mod(a: i32, b: i32, op: BinaryOp) -> EvalResult {
    if b == 0 {
        Err(division_by_zero(op))
    } else {
        Ok(Value::Int(a.wrapping_rem(b)))
    }
}

/// Evaluate a strict binary operation on two evaluated operands.
pub fn evaluate_binary(left: &Value, right: &Value, op: BinaryOp) -> EvalResult {
    if op == BinaryOp::Eq {
        return Ok(Value::Bool(left.equals(right)));
    }
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => eval_int_binary(*a, *b, op),
        (Value::Str(a), Value::Str(b)) if op == BinaryOp::Concat => {
            let mut joined = String::with_capacity(a.len().saturating_add(b.len()));
            joined.push_str(a);
            joined.push_str(b);
            Ok(Value::from(joined))
        }
        _ => Err(invalid_binary_op(op, left.type_name(), right.type_name())),
    }
}

fn eval_int_binary(a: i32, b: i32, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => Ok(Value::Int(a.wrapping_add(b))),
        BinaryOp::Sub => Ok(Value::Int(a.wrapping_sub(b))),
        BinaryOp::Mul => Ok(Value::Int(a.wrapping_mul(b))),
        BinaryOp::Div => checked_div(a, b, op),
        BinaryOp::Mod => checked_mod(a, b, op),
        BinaryOp::Lt => Ok(Value::Bool(a < b)),
        BinaryOp::LtEq => Ok(Value::Bool(a <= b)),
        BinaryOp::Eq => Ok(Value::Bool(a == b)),
        BinaryOp::And | BinaryOp::Or | BinaryOp::Concat => {
            Err(invalid_binary_op(op, "Int", "Int"))
        }
    }
}
