//! Function values.

use std::sync::Arc;

use amy_ir::{ExprId, FunDef, Name, QualifiedName};

/// A top-level user function, as stored in the function table.
///
/// Holds no environment: a function body only sees its own parameters.
/// Cloning shares the parameter list.
#[derive(Clone, Debug)]
pub struct FunctionValue {
    name: QualifiedName,
    params: Arc<[Name]>,
    body: ExprId,
}

impl FunctionValue {
    pub fn new(name: QualifiedName, params: Vec<Name>, body: ExprId) -> Self {
        Self {
            name,
            params: params.into(),
            body,
        }
    }

    /// Build the table entry for a definition owned by `module`.
    pub fn from_def(module: Name, def: &FunDef) -> Self {
        Self::new(
            QualifiedName::new(module, def.name),
            def.params.clone(),
            def.body,
        )
    }

    #[inline]
    pub fn name(&self) -> QualifiedName {
        self.name
    }

    #[inline]
    pub fn params(&self) -> &[Name] {
        &self.params
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    #[inline]
    pub fn body(&self) -> ExprId {
        self.body
    }
}
