//! Variable scoping for the interpreter.
//!
//! Environments are persistent: binding a name returns a new child scope
//! that shares its parent, and no scope is ever mutated after creation.
//! Functions are top-level and closure-free, so each call starts from a
//! fresh root scope built from its parameters.

use std::sync::Arc;

use amy_ir::Name;
use rustc_hash::FxHashMap;

use crate::Value;

/// A single scope: its own bindings plus the scope it extends.
#[derive(Debug)]
struct Scope {
    bindings: FxHashMap<Name, Value>,
    parent: Option<Arc<Scope>>,
}

impl Scope {
    fn lookup(&self, name: Name) -> Option<&Value> {
        let mut scope = self;
        loop {
            if let Some(value) = scope.bindings.get(&name) {
                return Some(value);
            }
            scope = scope.parent.as_deref()?;
        }
    }
}

/// Immutable mapping from bound names to values.
///
/// Cloning is cheap: it copies one `Arc`.
#[derive(Clone, Debug, Default)]
pub struct Environment {
    head: Option<Arc<Scope>>,
}

impl Environment {
    /// The empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh root scope binding `params` to `args` pairwise.
    ///
    /// Callers check the argument count first; surplus entries on either
    /// side are ignored.
    pub fn for_call(params: &[Name], args: Vec<Value>) -> Self {
        Self::new().extend(params.iter().copied().zip(args))
    }

    /// A child environment with one extra binding, shadowing any outer one.
    #[must_use]
    pub fn bind(&self, name: Name, value: Value) -> Self {
        let mut bindings = FxHashMap::default();
        bindings.insert(name, value);
        self.child(bindings)
    }

    /// A child environment holding all of `bindings`.
    ///
    /// Later entries win on duplicate names. An empty iterator returns a
    /// clone of `self` without adding a scope.
    #[must_use]
    pub fn extend(&self, bindings: impl IntoIterator<Item = (Name, Value)>) -> Self {
        let bindings: FxHashMap<Name, Value> = bindings.into_iter().collect();
        if bindings.is_empty() {
            return self.clone();
        }
        self.child(bindings)
    }

    fn child(&self, bindings: FxHashMap<Name, Value>) -> Self {
        Self {
            head: Some(Arc::new(Scope {
                bindings,
                parent: self.head.clone(),
            })),
        }
    }

    #[inline]
    pub fn lookup(&self, name: Name) -> Option<&Value> {
        self.head.as_deref()?.lookup(name)
    }

    /// Number of scopes in the chain.
    pub fn depth(&self) -> usize {
        let mut depth = 0usize;
        let mut scope = self.head.as_deref();
        while let Some(current) = scope {
            depth = depth.saturating_add(1);
            scope = current.parent.as_deref();
        }
        depth
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }
}

#[cfg(test)]
mod tests;
