//! Flat storage for every expression in a program.

use crate::ast::{BinaryOp, Callee, Expr, ExprKind, Literal, MatchArm, UnaryOp};
use crate::{ExprId, Name};

/// Append-only expression arena.
///
/// Node constructors (`int`, `call`, `if_else`, ...) allocate and return the
/// new node's id; they exist for front ends and tests assembling programs by
/// hand.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "artifact", derive(serde::Serialize, serde::Deserialize))]
pub struct ExprArena {
    exprs: Vec<Expr>,
}

impl ExprArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a node.
    ///
    /// # Panics
    /// Panics if the arena already holds `u32::MAX - 1` expressions.
    pub fn alloc(&mut self, kind: ExprKind) -> ExprId {
        let index = u32::try_from(self.exprs.len())
            .ok()
            .filter(|&i| i != u32::MAX)
            .unwrap_or_else(|| panic!("expression arena exhausted"));
        self.exprs.push(Expr::new(kind));
        ExprId::new(index)
    }

    /// Look up a node, `None` for ids from another arena or `INVALID`.
    #[inline]
    pub fn get(&self, id: ExprId) -> Option<&Expr> {
        self.exprs.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }

    // Node constructors

    pub fn var(&mut self, name: Name) -> ExprId {
        self.alloc(ExprKind::Variable(name))
    }

    pub fn literal(&mut self, literal: Literal) -> ExprId {
        self.alloc(ExprKind::Literal(literal))
    }

    pub fn int(&mut self, value: i32) -> ExprId {
        self.literal(Literal::Int(value))
    }

    pub fn bool(&mut self, value: bool) -> ExprId {
        self.literal(Literal::Bool(value))
    }

    pub fn string(&mut self, contents: Name) -> ExprId {
        self.literal(Literal::Str(contents))
    }

    pub fn unit(&mut self) -> ExprId {
        self.literal(Literal::Unit)
    }

    pub fn binary(&mut self, op: BinaryOp, left: ExprId, right: ExprId) -> ExprId {
        self.alloc(ExprKind::Binary { op, left, right })
    }

    pub fn unary(&mut self, op: UnaryOp, operand: ExprId) -> ExprId {
        self.alloc(ExprKind::Unary { op, operand })
    }

    pub fn call(&mut self, callee: impl Into<Callee>, args: Vec<ExprId>) -> ExprId {
        self.alloc(ExprKind::Call {
            callee: callee.into(),
            args,
        })
    }

    pub fn sequence(&mut self, first: ExprId, second: ExprId) -> ExprId {
        self.alloc(ExprKind::Sequence { first, second })
    }

    pub fn let_in(&mut self, name: Name, value: ExprId, body: ExprId) -> ExprId {
        self.alloc(ExprKind::Let { name, value, body })
    }

    pub fn if_else(&mut self, cond: ExprId, then_branch: ExprId, else_branch: ExprId) -> ExprId {
        self.alloc(ExprKind::If {
            cond,
            then_branch,
            else_branch,
        })
    }

    pub fn match_on(&mut self, scrutinee: ExprId, arms: Vec<MatchArm>) -> ExprId {
        self.alloc(ExprKind::Match { scrutinee, arms })
    }

    pub fn error(&mut self, message: ExprId) -> ExprId {
        self.alloc(ExprKind::Error { message })
    }
}
