//! Tree-walking interpreter for resolved Amy programs.
//!
//! `eval` walks the expression arena of a [`LoadedProgram`] under an
//! [`Environment`], threading the [`ExecContext`] through every step. All
//! writes and reads happen inside built-ins, through the context.
//!
//! - `call.rs`: call-target resolution, argument binding, call frames
//! - `pattern.rs`: match arm patterns

mod call;
mod pattern;

use amy_ir::{BinaryOp, ExprId, ExprKind, Literal, MatchArm};

use crate::context::ExecContext;
use crate::diagnostics::CallStack;
use crate::errors::{invalid_expression, match_error, unbound_identifier, user_error, EvalResult};
use crate::operators::evaluate_binary;
use crate::program::LoadedProgram;
use crate::stack::ensure_sufficient_stack;
use crate::unary_operators::evaluate_unary;
use crate::{Environment, Value};

use pattern::try_match;

/// Evaluator over one loaded program.
///
/// Holds the live call stack; everything else it reads is immutable.
pub struct Interpreter<'a> {
    program: &'a LoadedProgram<'a>,
    call_stack: CallStack,
}

impl<'a> Interpreter<'a> {
    /// `max_call_depth` bounds nested user-function calls; `None` is unbounded.
    pub fn new(program: &'a LoadedProgram<'a>, max_call_depth: Option<usize>) -> Self {
        Self {
            program,
            call_stack: CallStack::new(max_call_depth),
        }
    }

    pub fn program(&self) -> &'a LoadedProgram<'a> {
        self.program
    }

    /// Number of user-function calls currently executing.
    pub fn call_depth(&self) -> usize {
        self.call_stack.depth()
    }

    /// Evaluate `expr` to a value.
    pub fn eval(&mut self, expr: ExprId, env: &Environment, ctx: &mut ExecContext) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_inner(expr, env, ctx))
    }

    #[tracing::instrument(level = "trace", skip(self, env, ctx))]
    fn eval_inner(&mut self, expr: ExprId, env: &Environment, ctx: &mut ExecContext) -> EvalResult {
        let interner = self.program.interner();
        let Some(node) = self.program.arena().get(expr) else {
            return Err(invalid_expression(expr.raw()));
        };
        match &node.kind {
            ExprKind::Variable(name) => env
                .lookup(*name)
                .cloned()
                .ok_or_else(|| unbound_identifier(interner.lookup(*name))),
            ExprKind::Literal(literal) => Ok(self.literal_value(*literal)),
            ExprKind::Binary { op, left, right } => self.eval_binary(*op, *left, *right, env, ctx),
            ExprKind::Unary { op, operand } => {
                let value = self.eval(*operand, env, ctx)?;
                evaluate_unary(&value, *op)
            }
            ExprKind::Call { callee, args } => self.eval_call_expr(*callee, args, env, ctx),
            ExprKind::Sequence { first, second } => {
                self.eval(*first, env, ctx)?;
                self.eval(*second, env, ctx)
            }
            ExprKind::Let { name, value, body } => {
                let value = self.eval(*value, env, ctx)?;
                self.eval(*body, &env.bind(*name, value), ctx)
            }
            ExprKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                if self.eval(*cond, env, ctx)?.as_bool()? {
                    self.eval(*then_branch, env, ctx)
                } else {
                    self.eval(*else_branch, env, ctx)
                }
            }
            ExprKind::Match { scrutinee, arms } => self.eval_match(*scrutinee, arms, env, ctx),
            ExprKind::Error { message } => {
                let message = self.eval(*message, env, ctx)?;
                Err(user_error(message.as_str()?))
            }
        }
    }

    fn literal_value(&self, literal: Literal) -> Value {
        match literal {
            Literal::Int(n) => Value::Int(n),
            Literal::Bool(b) => Value::Bool(b),
            Literal::Str(contents) => Value::string(self.program.interner().lookup(contents)),
            Literal::Unit => Value::Unit,
        }
    }

    /// Operands left to right; `&&` and `||` only evaluate the right side
    /// when the left does not decide the result.
    fn eval_binary(
        &mut self,
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
        env: &Environment,
        ctx: &mut ExecContext,
    ) -> EvalResult {
        match op {
            BinaryOp::And => {
                if !self.eval(left, env, ctx)?.as_bool()? {
                    return Ok(Value::Bool(false));
                }
                Ok(Value::Bool(self.eval(right, env, ctx)?.as_bool()?))
            }
            BinaryOp::Or => {
                if self.eval(left, env, ctx)?.as_bool()? {
                    return Ok(Value::Bool(true));
                }
                Ok(Value::Bool(self.eval(right, env, ctx)?.as_bool()?))
            }
            _ => {
                let left = self.eval(left, env, ctx)?;
                let right = self.eval(right, env, ctx)?;
                evaluate_binary(&left, &right, op)
            }
        }
    }

    /// Evaluate the scrutinee once, then try arms in order.
    fn eval_match(
        &mut self,
        scrutinee: ExprId,
        arms: &[MatchArm],
        env: &Environment,
        ctx: &mut ExecContext,
    ) -> EvalResult {
        let value = self.eval(scrutinee, env, ctx)?;
        let interner = self.program.interner();
        for arm in arms {
            if let Some(bindings) = try_match(&arm.pattern, &value, interner)? {
                return self.eval(arm.body, &env.extend(bindings), ctx);
            }
        }
        Err(match_error(value.display(interner).to_string()))
    }
}
