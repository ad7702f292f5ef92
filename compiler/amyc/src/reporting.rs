//! Rendering of run failures and their exit codes.

use amy_eval::{ErrorCategory, EvalError};

use crate::CliError;

pub const EXIT_SUCCESS: i32 = 0;
/// The program itself failed (`error(..)`, bad input, no matching arm, ...).
pub const EXIT_RUNTIME_ERROR: i32 = 1;
pub const EXIT_USAGE: i32 = 2;
/// An invariant the front end should have guaranteed did not hold.
pub const EXIT_INTERNAL_ERROR: i32 = 101;

/// `error: ...` or `internal error: ...`, then the backtrace if any.
pub fn render_eval_error(err: &EvalError) -> String {
    let prefix = match err.category() {
        ErrorCategory::User => "error",
        ErrorCategory::Internal => "internal error",
    };
    let mut out = format!("{prefix}: {err}\n");
    if let Some(backtrace) = &err.backtrace {
        out.push_str(&backtrace.to_string());
    }
    out
}

pub fn eval_exit_code(err: &EvalError) -> i32 {
    match err.category() {
        ErrorCategory::User => EXIT_RUNTIME_ERROR,
        ErrorCategory::Internal => EXIT_INTERNAL_ERROR,
    }
}

pub fn render_cli_error(err: &CliError) -> String {
    format!("error: {err}\n")
}
