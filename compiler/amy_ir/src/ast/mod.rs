//! Module tree handed to the evaluator.
//!
//! Everything here is produced by the (external) front end after name
//! analysis and type checking. Identifiers are already resolved, so the
//! evaluator never re-validates scoping or types.

mod expr;
mod operators;
mod patterns;

pub use expr::{Expr, ExprKind, Literal};
pub use operators::{BinaryOp, UnaryOp};
pub use patterns::{MatchArm, MatchPattern};

use crate::{ExprArena, ExprId, Name, StringInterner};

/// A module-qualified symbol: `Std.printInt`, `L.Cons`.
///
/// Functions and constructors are identified by their owning module plus
/// their own name.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "artifact", derive(serde::Serialize, serde::Deserialize))]
pub struct QualifiedName {
    pub module: Name,
    pub name: Name,
}

impl QualifiedName {
    pub const fn new(module: Name, name: Name) -> Self {
        Self { module, name }
    }

    /// Render as `Module.name`.
    pub fn display(&self, interner: &StringInterner) -> String {
        format!(
            "{}.{}",
            interner.lookup(self.module),
            interner.lookup(self.name)
        )
    }
}

/// A call target as it appears at the call site.
///
/// `module` is `Some` for qualified calls (`Std.printInt(x)`) and `None`
/// for bare calls (`fact(n)`), which are resolved against the executing
/// module and then the modules it imports.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "artifact", derive(serde::Serialize, serde::Deserialize))]
pub struct Callee {
    pub module: Option<Name>,
    pub name: Name,
}

impl Callee {
    pub const fn qualified(module: Name, name: Name) -> Self {
        Self {
            module: Some(module),
            name,
        }
    }

    pub const fn bare(name: Name) -> Self {
        Self { module: None, name }
    }

    pub fn display(&self, interner: &StringInterner) -> String {
        match self.module {
            Some(module) => QualifiedName::new(module, self.name).display(interner),
            None => interner.lookup(self.name).to_string(),
        }
    }
}

impl From<QualifiedName> for Callee {
    fn from(qualified: QualifiedName) -> Self {
        Callee::qualified(qualified.module, qualified.name)
    }
}

/// A top-level function definition.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "artifact", derive(serde::Serialize, serde::Deserialize))]
pub struct FunDef {
    pub name: Name,
    pub params: Vec<Name>,
    pub body: ExprId,
}

/// A constructor of an algebraic data type (`case class Cons(h: Int, t: List)`).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "artifact", derive(serde::Serialize, serde::Deserialize))]
pub struct CaseClassDef {
    pub name: Name,
    /// Number of fields; arguments at construction sites already match it.
    pub arity: usize,
    /// The abstract class this constructor extends.
    pub parent: Name,
}

/// The type an algebraic data type's constructors extend (`abstract class List`).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "artifact", derive(serde::Serialize, serde::Deserialize))]
pub struct AbstractClassDef {
    pub name: Name,
}

/// A module-level definition.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "artifact", derive(serde::Serialize, serde::Deserialize))]
pub enum Definition {
    Function(FunDef),
    CaseClass(CaseClassDef),
    AbstractClass(AbstractClassDef),
}

/// A named module.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "artifact", derive(serde::Serialize, serde::Deserialize))]
pub struct ModuleDef {
    pub name: Name,
    /// Modules whose definitions bare calls in this module may refer to,
    /// in resolution order.
    pub imports: Vec<Name>,
    pub defs: Vec<Definition>,
    /// Optional trailing top-level expression.
    pub body: Option<ExprId>,
}

impl ModuleDef {
    pub fn new(name: Name) -> Self {
        Self {
            name,
            imports: Vec::new(),
            defs: Vec::new(),
            body: None,
        }
    }

    /// Function definitions in declaration order.
    pub fn functions(&self) -> impl Iterator<Item = &FunDef> {
        self.defs.iter().filter_map(|def| match def {
            Definition::Function(f) => Some(f),
            _ => None,
        })
    }

    /// Constructor declarations in declaration order.
    pub fn case_classes(&self) -> impl Iterator<Item = &CaseClassDef> {
        self.defs.iter().filter_map(|def| match def {
            Definition::CaseClass(c) => Some(c),
            _ => None,
        })
    }
}

/// A whole program: modules in dependency order plus the arena holding
/// every expression they reference.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "artifact", derive(serde::Serialize, serde::Deserialize))]
pub struct Program {
    pub modules: Vec<ModuleDef>,
    pub arena: ExprArena,
}

impl Program {
    pub fn module(&self, name: Name) -> Option<&ModuleDef> {
        self.modules.iter().find(|m| m.name == name)
    }
}
