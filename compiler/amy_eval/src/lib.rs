#![deny(clippy::arithmetic_side_effects)]
//! Amy Eval - tree-walking evaluator for resolved amyc programs.
//!
//! Takes a [`Program`](amy_ir::Program) that has already been parsed, name
//! resolved and type checked, and runs it.
//!
//! # Architecture
//!
//! - [`Value`]: closed sum of runtime values
//! - [`Environment`]: persistent scope chain for parameters and local bindings
//! - [`ExecContext`]: output sink, input source and current module for one run
//! - [`BuiltinRegistry`]: native `Std` functions keyed by qualified name
//! - [`LoadedProgram`]: function and constructor tables, call resolution
//! - [`Interpreter`]: the evaluator proper, with a bounded [`CallStack`]
//! - [`run`] / [`run_with`]: entry point selection per [`RunConfig`]
//!
//! Errors split into user-triggered failures and internal invariant
//! violations; see [`errors`].

mod builtins;
mod context;
pub mod diagnostics;
mod driver;
mod environment;
pub mod errors;
pub mod interpreter;
mod operators;
mod program;
mod stack;
mod unary_operators;
mod value;

pub use builtins::{BuiltinFunction, BuiltinRegistry, STD_MODULE};
pub use context::{ExecContext, InputSource, OutputSink, SharedBuffer};
pub use diagnostics::{CallFrame, CallStack};
pub use driver::{run, run_loaded, run_with, EntryPoint, RunConfig, DEFAULT_MAX_CALL_DEPTH};
pub use environment::Environment;
pub use errors::{
    BacktraceFrame, ErrorCategory, EvalBacktrace, EvalError, EvalErrorKind, EvalResult,
};
pub use interpreter::Interpreter;
pub use operators::evaluate_binary;
pub use program::{CallTarget, LoadedProgram};
pub use stack::ensure_sufficient_stack;
pub use unary_operators::evaluate_unary;
pub use value::{CaseFields, FunctionValue, Value, ValueDisplay};

#[cfg(test)]
mod tests;
