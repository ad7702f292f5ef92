//! Expression nodes.

use super::{BinaryOp, Callee, MatchArm, UnaryOp};
use crate::{ExprId, Name};

/// Literal constants.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "artifact", derive(serde::Serialize, serde::Deserialize))]
pub enum Literal {
    Int(i32),
    Bool(bool),
    /// Interned string contents.
    Str(Name),
    Unit,
}

/// Expression node stored in the arena.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "artifact", derive(serde::Serialize, serde::Deserialize))]
pub struct Expr {
    pub kind: ExprKind,
}

impl Expr {
    pub fn new(kind: ExprKind) -> Self {
        Self { kind }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "artifact", derive(serde::Serialize, serde::Deserialize))]
pub enum ExprKind {
    /// Reference to a parameter or `let`/pattern-bound name.
    Variable(Name),
    Literal(Literal),
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },
    Unary {
        op: UnaryOp,
        operand: ExprId,
    },
    /// Function, built-in or constructor application.
    Call {
        callee: Callee,
        args: Vec<ExprId>,
    },
    /// `first; second`
    Sequence {
        first: ExprId,
        second: ExprId,
    },
    /// `val name = value; body`
    Let {
        name: Name,
        value: ExprId,
        body: ExprId,
    },
    If {
        cond: ExprId,
        then_branch: ExprId,
        else_branch: ExprId,
    },
    Match {
        scrutinee: ExprId,
        arms: Vec<MatchArm>,
    },
    /// `error(message)`
    Error {
        message: ExprId,
    },
}
