//! Call evaluation: constructors, built-ins and user functions.

use amy_ir::{Callee, ExprId};

use super::Interpreter;
use crate::context::ExecContext;
use crate::diagnostics::CallFrame;
use crate::errors::{arity_mismatch, not_callable, EvalError, EvalResult};
use crate::program::CallTarget;
use crate::{Environment, FunctionValue, Value};

impl Interpreter<'_> {
    /// Resolve the target, then evaluate arguments left to right and apply.
    pub(super) fn eval_call_expr(
        &mut self,
        callee: Callee,
        args: &[ExprId],
        env: &Environment,
        ctx: &mut ExecContext,
    ) -> EvalResult {
        let target = self.program.resolve_call(callee, ctx.current_module())?;
        let values = self.eval_args(args, env, ctx)?;
        match target {
            CallTarget::Constructor { constructor, arity } => {
                if values.len() != arity {
                    return Err(arity_mismatch(
                        constructor.display(self.program.interner()),
                        arity,
                        values.len(),
                    ));
                }
                Ok(Value::case_class(constructor, values))
            }
            CallTarget::Callable(func) => self.call_value(&func, values, ctx),
        }
    }

    fn eval_args(
        &mut self,
        args: &[ExprId],
        env: &Environment,
        ctx: &mut ExecContext,
    ) -> Result<Vec<Value>, EvalError> {
        let mut values = Vec::with_capacity(args.len());
        for &arg in args {
            values.push(self.eval(arg, env, ctx)?);
        }
        Ok(values)
    }

    /// Apply a function or built-in value to evaluated arguments.
    pub fn call_value(
        &mut self,
        func: &Value,
        args: Vec<Value>,
        ctx: &mut ExecContext,
    ) -> EvalResult {
        match func {
            Value::Function(f) => self.call_function(f, args, ctx),
            Value::BuiltIn(builtin) => builtin.call(&args, ctx),
            other => Err(not_callable(other.type_name())),
        }
    }

    /// Run a user function's body in a fresh environment of its parameters.
    ///
    /// The callee's module is current while the body runs and the caller's
    /// is restored afterwards, whether the body fails or not.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(function = %f.name().display(self.program.interner()))
    )]
    pub fn call_function(
        &mut self,
        f: &FunctionValue,
        args: Vec<Value>,
        ctx: &mut ExecContext,
    ) -> EvalResult {
        let interner = self.program.interner();
        if args.len() != f.arity() {
            return Err(arity_mismatch(
                f.name().display(interner),
                f.arity(),
                args.len(),
            ));
        }
        if let Err(err) = self.call_stack.push(CallFrame { function: f.name() }) {
            return Err(self.call_stack.attach_backtrace(err, interner));
        }

        let previous = ctx.set_current_module(Some(f.name().module));
        let env = Environment::for_call(f.params(), args);
        let result = self.eval(f.body(), &env, ctx);
        ctx.set_current_module(previous);

        let result = result.map_err(|err| self.call_stack.attach_backtrace(err, interner));
        self.call_stack.pop();
        result
    }
}
