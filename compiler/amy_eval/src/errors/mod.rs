//! Runtime errors raised by the evaluator.
//!
//! # Two tiers
//!
//! Every [`EvalErrorKind`] belongs to an [`ErrorCategory`]:
//!
//! - `User`: legitimate outcomes of a well-formed program (division by
//!   zero, no matching arm, bad input, `error(..)`, exhausted call depth).
//! - `Internal`: invariant violations that upstream checking should have
//!   ruled out (type mismatches, unbound names, unresolvable calls). These
//!   point at a bug in the front end or in the evaluator.
//!
//! Factory functions (e.g. `division_by_zero()`) are the construction API.

use std::fmt;

use amy_ir::BinaryOp;

use crate::Value;

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Which tier an error belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Triggered by the running program.
    User,
    /// A broken invariant in an upstream collaborator or the evaluator.
    Internal,
}

/// Typed error category for structured reporting.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    // User-triggered
    #[error("division by zero in `{op}`")]
    DivisionByZero { op: &'static str },

    #[error("match error: no arm matches {scrutinee}")]
    MatchError { scrutinee: String },

    #[error("malformed input: {line:?} is not an integer")]
    MalformedInput { line: String },

    #[error("{function}: end of input")]
    EndOfInput { function: &'static str },

    #[error("{function}: {reason}")]
    InvalidArgument {
        function: &'static str,
        reason: String,
    },

    #[error("{message}")]
    UserError { message: String },

    #[error("stack exhausted: call depth limit of {depth} exceeded")]
    StackExhausted { depth: usize },

    // Internal invariant violations
    #[error("type mismatch: expected {expected}, got {got}")]
    TypeMismatch {
        expected: &'static str,
        got: &'static str,
    },

    #[error("unbound identifier: {name}")]
    UnboundIdentifier { name: String },

    #[error("function not found: {name}")]
    FunctionNotFound { name: String },

    #[error("ambiguous call to {name}: defined in {}", .candidates.join(", "))]
    AmbiguousCall {
        name: String,
        candidates: Vec<String>,
    },

    #[error("{name} expects {expected} argument(s), got {got}")]
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },

    #[error("{type_name} is not callable")]
    NotCallable { type_name: &'static str },

    #[error("operator `{op}` cannot be applied to {operands}")]
    InvalidOperator { op: &'static str, operands: String },

    #[error("entry point not found: {entry}")]
    NoEntryPoint { entry: String },

    #[error("duplicate definition of {name}")]
    DuplicateDefinition { name: String },

    #[error("expression #{id} is not in the program's arena")]
    InvalidExpression { id: u32 },
}

impl EvalErrorKind {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DivisionByZero { .. }
            | Self::MatchError { .. }
            | Self::MalformedInput { .. }
            | Self::EndOfInput { .. }
            | Self::InvalidArgument { .. }
            | Self::UserError { .. }
            | Self::StackExhausted { .. } => ErrorCategory::User,
            Self::TypeMismatch { .. }
            | Self::UnboundIdentifier { .. }
            | Self::FunctionNotFound { .. }
            | Self::AmbiguousCall { .. }
            | Self::ArityMismatch { .. }
            | Self::NotCallable { .. }
            | Self::InvalidOperator { .. }
            | Self::NoEntryPoint { .. }
            | Self::DuplicateDefinition { .. }
            | Self::InvalidExpression { .. } => ErrorCategory::Internal,
        }
    }
}

/// A single frame in an evaluation backtrace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BacktraceFrame {
    /// Qualified function name, e.g. `Main.fact`.
    pub name: String,
}

/// Snapshot of the call stack taken where an error left a function call.
///
/// Frames are ordered most recent call first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EvalBacktrace {
    frames: Vec<BacktraceFrame>,
    /// Frames dropped from the middle of very deep stacks.
    elided: usize,
}

impl EvalBacktrace {
    pub fn new(frames: Vec<BacktraceFrame>, elided: usize) -> Self {
        Self { frames, elided }
    }

    pub fn frames(&self) -> &[BacktraceFrame] {
        &self.frames
    }

    pub fn elided(&self) -> usize {
        self.elided
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }
}

impl fmt::Display for EvalBacktrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.frames.is_empty() {
            return Ok(());
        }
        writeln!(f, "call backtrace:")?;
        for (i, frame) in self.frames.iter().enumerate() {
            writeln!(f, "  {i}: {}", frame.name)?;
        }
        if self.elided > 0 {
            writeln!(f, "  ... {} more frame(s)", self.elided)?;
        }
        Ok(())
    }
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Calls that were live when the error was raised, if any.
    pub backtrace: Option<EvalBacktrace>,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        Self {
            kind,
            backtrace: None,
        }
    }

    #[inline]
    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }

    #[inline]
    pub fn is_internal(&self) -> bool {
        self.category() == ErrorCategory::Internal
    }

    /// Attach a backtrace to this error.
    #[must_use]
    pub fn with_backtrace(mut self, backtrace: EvalBacktrace) -> Self {
        self.backtrace = Some(backtrace);
        self
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)
    }
}

impl std::error::Error for EvalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        Self::from_kind(kind)
    }
}

// User-triggered errors

/// Division or modulo by zero.
#[cold]
pub fn division_by_zero(op: BinaryOp) -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero {
        op: op.as_symbol(),
    })
}

/// No match arm accepted the scrutinee.
#[cold]
pub fn match_error(scrutinee: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::MatchError {
        scrutinee: scrutinee.into(),
    })
}

/// An input line could not be parsed.
#[cold]
pub fn malformed_input(line: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::MalformedInput { line: line.into() })
}

/// The input source is exhausted.
#[cold]
pub fn end_of_input(function: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::EndOfInput { function })
}

/// A built-in received a value outside its domain.
#[cold]
pub fn invalid_argument(function: &'static str, reason: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidArgument {
        function,
        reason: reason.into(),
    })
}

/// `error(message)` in the program.
#[cold]
pub fn user_error(message: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UserError {
        message: message.into(),
    })
}

/// The call depth limit was reached.
#[cold]
pub fn stack_exhausted(depth: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::StackExhausted { depth })
}

// Internal invariant violations

#[cold]
pub fn type_mismatch(expected: &'static str, got: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch { expected, got })
}

#[cold]
pub fn unbound_identifier(name: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnboundIdentifier { name: name.into() })
}

#[cold]
pub fn function_not_found(name: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::FunctionNotFound { name: name.into() })
}

#[cold]
pub fn ambiguous_call(name: impl Into<String>, candidates: Vec<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::AmbiguousCall {
        name: name.into(),
        candidates,
    })
}

#[cold]
pub fn arity_mismatch(name: impl Into<String>, expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch {
        name: name.into(),
        expected,
        got,
    })
}

#[cold]
pub fn not_callable(type_name: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotCallable { type_name })
}

#[cold]
pub fn invalid_binary_op(op: BinaryOp, left: &'static str, right: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidOperator {
        op: op.as_symbol(),
        operands: format!("{left} and {right}"),
    })
}

#[cold]
pub fn invalid_unary_op(op: &'static str, operand: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidOperator {
        op,
        operands: operand.to_string(),
    })
}

#[cold]
pub fn no_entry_point(entry: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NoEntryPoint {
        entry: entry.into(),
    })
}

#[cold]
pub fn duplicate_definition(name: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::DuplicateDefinition { name: name.into() })
}

#[cold]
pub fn invalid_expression(id: u32) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidExpression { id })
}
