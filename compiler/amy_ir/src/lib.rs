//! Amy IR - resolved program representation for the amyc evaluator.
//!
//! The front end (lexer, parser, name analysis, type checker) lives outside
//! this workspace. What it hands over is described here:
//!
//! - [`Name`] / [`StringInterner`]: interned identifiers
//! - [`ExprArena`] / [`ExprId`]: flat expression storage
//! - [`Program`], [`ModuleDef`], [`Definition`]: the module tree
//! - [`ProgramBuilder`]: convenience for assembling programs by hand
//!
//! # Features
//!
//! - `artifact`: serde derives on every IR type, used by `amyc` to read and
//!   write program artifacts.

mod arena;
pub mod ast;
mod builder;
mod expr_id;
mod interner;
mod name;

pub use arena::ExprArena;
pub use ast::{
    AbstractClassDef, BinaryOp, Callee, CaseClassDef, Definition, Expr, ExprKind, FunDef,
    Literal, MatchArm, MatchPattern, ModuleDef, Program, QualifiedName, UnaryOp,
};
pub use builder::ProgramBuilder;
pub use expr_id::ExprId;
pub use interner::{InternError, StringInterner};
pub use name::Name;
