//! Loaded program: the function, constructor and module tables built once
//! before evaluation, plus call-target resolution over them.

use amy_ir::{Callee, ExprArena, ModuleDef, Name, Program, QualifiedName, StringInterner};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::builtins::BuiltinRegistry;
use crate::errors::{ambiguous_call, duplicate_definition, function_not_found, EvalError};
use crate::{FunctionValue, Value};

/// What a call site refers to.
#[derive(Clone, Debug)]
pub enum CallTarget {
    /// A case class constructor with its declared arity.
    Constructor {
        constructor: QualifiedName,
        arity: usize,
    },
    /// A user function or built-in.
    Callable(Value),
}

/// A [`Program`] indexed for evaluation. Read-only once built.
pub struct LoadedProgram<'p> {
    program: &'p Program,
    interner: &'p StringInterner,
    builtins: BuiltinRegistry,
    functions: FxHashMap<QualifiedName, FunctionValue>,
    constructors: FxHashMap<QualifiedName, usize>,
    modules: FxHashMap<Name, &'p ModuleDef>,
}

impl<'p> LoadedProgram<'p> {
    /// Index `program` against the standard built-ins.
    pub fn load(program: &'p Program, interner: &'p StringInterner) -> Result<Self, EvalError> {
        Self::with_builtins(program, interner, BuiltinRegistry::standard(interner))
    }

    /// Index `program`, scanning every module once.
    ///
    /// A module name or qualified definition seen twice is a
    /// `DuplicateDefinition`. Abstract classes only name a type and get no
    /// table entry.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn with_builtins(
        program: &'p Program,
        interner: &'p StringInterner,
        builtins: BuiltinRegistry,
    ) -> Result<Self, EvalError> {
        let mut functions = FxHashMap::default();
        let mut constructors = FxHashMap::default();
        let mut modules = FxHashMap::default();
        let mut seen: FxHashSet<QualifiedName> = FxHashSet::default();

        for module in &program.modules {
            if modules.insert(module.name, module).is_some() {
                return Err(duplicate_definition(interner.lookup(module.name)));
            }
            for def in module.functions() {
                let qualified = QualifiedName::new(module.name, def.name);
                if !seen.insert(qualified) {
                    return Err(duplicate_definition(qualified.display(interner)));
                }
                functions.insert(qualified, FunctionValue::from_def(module.name, def));
            }
            for def in module.case_classes() {
                let qualified = QualifiedName::new(module.name, def.name);
                if !seen.insert(qualified) {
                    return Err(duplicate_definition(qualified.display(interner)));
                }
                constructors.insert(qualified, def.arity);
            }
        }

        tracing::debug!(
            modules = modules.len(),
            functions = functions.len(),
            constructors = constructors.len(),
            builtins = builtins.len(),
            "program loaded"
        );

        Ok(Self {
            program,
            interner,
            builtins,
            functions,
            constructors,
            modules,
        })
    }

    #[inline]
    pub fn arena(&self) -> &'p ExprArena {
        &self.program.arena
    }

    #[inline]
    pub fn interner(&self) -> &'p StringInterner {
        self.interner
    }

    /// Modules in program order.
    pub fn modules(&self) -> &'p [ModuleDef] {
        &self.program.modules
    }

    pub fn module(&self, name: Name) -> Option<&'p ModuleDef> {
        self.modules.get(&name).copied()
    }

    pub fn function(&self, name: QualifiedName) -> Option<&FunctionValue> {
        self.functions.get(&name)
    }

    pub fn constructor_arity(&self, name: QualifiedName) -> Option<usize> {
        self.constructors.get(&name).copied()
    }

    pub fn builtins(&self) -> &BuiltinRegistry {
        &self.builtins
    }

    /// Resolve a call site.
    ///
    /// Inside one module the order is constructor, built-in, user function.
    /// A bare name is looked up in `current` first, then in each module
    /// `current` imports; with no current module every module is searched.
    /// More than one import defining the name is an `AmbiguousCall`.
    pub fn resolve_call(
        &self,
        callee: Callee,
        current: Option<Name>,
    ) -> Result<CallTarget, EvalError> {
        if let Some(module) = callee.module {
            return self
                .lookup_in(QualifiedName::new(module, callee.name))
                .ok_or_else(|| function_not_found(callee.display(self.interner)));
        }

        let candidates: Vec<Name> = match current {
            Some(module) => {
                if let Some(target) = self.lookup_in(QualifiedName::new(module, callee.name)) {
                    return Ok(target);
                }
                self.module(module)
                    .map(|m| m.imports.clone())
                    .unwrap_or_default()
            }
            None => self.program.modules.iter().map(|m| m.name).collect(),
        };

        let mut found = candidates.into_iter().filter_map(|module| {
            self.lookup_in(QualifiedName::new(module, callee.name))
                .map(|target| (module, target))
        });
        let Some((first_module, target)) = found.next() else {
            return Err(function_not_found(callee.display(self.interner)));
        };
        let others: Vec<Name> = found.map(|(module, _)| module).collect();
        if others.is_empty() {
            return Ok(target);
        }
        let modules = std::iter::once(first_module)
            .chain(others)
            .map(|m| self.interner.lookup(m).to_string())
            .collect();
        Err(ambiguous_call(callee.display(self.interner), modules))
    }

    fn lookup_in(&self, name: QualifiedName) -> Option<CallTarget> {
        if let Some(arity) = self.constructor_arity(name) {
            return Some(CallTarget::Constructor {
                constructor: name,
                arity,
            });
        }
        if let Some(builtin) = self.builtins.get(name) {
            return Some(CallTarget::Callable(Value::BuiltIn(builtin)));
        }
        self.function(name)
            .map(|f| CallTarget::Callable(Value::Function(f.clone())))
    }
}
