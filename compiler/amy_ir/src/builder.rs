//! Hand assembly of programs.

use crate::ast::{
    AbstractClassDef, Callee, CaseClassDef, Definition, FunDef, ModuleDef, Program, QualifiedName,
};
use crate::{ExprArena, ExprId, Name, StringInterner};

/// Builds a [`Program`] module by module.
///
/// Modules are created on first mention and kept in that order.
///
/// ```text
/// let interner = StringInterner::new();
/// let mut b = ProgramBuilder::new(&interner);
/// let one = b.arena.int(1);
/// b.function("Main", "main", &[], one);
/// let program = b.finish();
/// ```
pub struct ProgramBuilder<'i> {
    interner: &'i StringInterner,
    /// Arena for the program's expressions.
    pub arena: ExprArena,
    modules: Vec<ModuleDef>,
}

impl<'i> ProgramBuilder<'i> {
    pub fn new(interner: &'i StringInterner) -> Self {
        Self {
            interner,
            arena: ExprArena::new(),
            modules: Vec::new(),
        }
    }

    /// Intern an identifier or string literal.
    pub fn name(&self, s: &str) -> Name {
        self.interner.intern(s)
    }

    pub fn qualified(&self, module: &str, name: &str) -> QualifiedName {
        QualifiedName::new(self.name(module), self.name(name))
    }

    pub fn bare(&self, name: &str) -> Callee {
        Callee::bare(self.name(name))
    }

    /// Get or create a module.
    pub fn module(&mut self, module: &str) -> &mut ModuleDef {
        let name = self.name(module);
        let index = match self.modules.iter().position(|m| m.name == name) {
            Some(index) => index,
            None => {
                self.modules.push(ModuleDef::new(name));
                self.modules.len() - 1
            }
        };
        &mut self.modules[index]
    }

    pub fn import(&mut self, module: &str, dependency: &str) -> &mut Self {
        let dependency = self.name(dependency);
        self.module(module).imports.push(dependency);
        self
    }

    pub fn function(&mut self, module: &str, name: &str, params: &[&str], body: ExprId) -> &mut Self {
        let def = FunDef {
            name: self.name(name),
            params: params.iter().map(|p| self.name(p)).collect(),
            body,
        };
        self.module(module).defs.push(Definition::Function(def));
        self
    }

    pub fn abstract_class(&mut self, module: &str, name: &str) -> &mut Self {
        let def = AbstractClassDef {
            name: self.name(name),
        };
        self.module(module).defs.push(Definition::AbstractClass(def));
        self
    }

    pub fn case_class(&mut self, module: &str, name: &str, arity: usize, parent: &str) -> &mut Self {
        let def = CaseClassDef {
            name: self.name(name),
            arity,
            parent: self.name(parent),
        };
        self.module(module).defs.push(Definition::CaseClass(def));
        self
    }

    /// Set a module's trailing top-level expression.
    pub fn body(&mut self, module: &str, body: ExprId) -> &mut Self {
        self.module(module).body = Some(body);
        self
    }

    pub fn finish(self) -> Program {
        Program {
            modules: self.modules,
            arena: self.arena,
        }
    }
}
