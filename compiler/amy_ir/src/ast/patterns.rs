//! Match patterns.

use super::{Literal, QualifiedName};
use crate::{ExprId, Name};

/// Pattern in a match arm.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "artifact", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchPattern {
    /// `_`
    Wildcard,
    /// `x`: matches anything and binds it.
    Binding(Name),
    /// `5`, `true`, `"s"`, `()`
    Literal(Literal),
    /// `Cons(h, t)`
    Constructor {
        constructor: QualifiedName,
        args: Vec<MatchPattern>,
    },
}

/// One `pattern => body` clause.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "artifact", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchArm {
    pub pattern: MatchPattern,
    pub body: ExprId,
}
