//! Runtime values for the amyc interpreter.
//!
//! `Value` is a closed sum type: every operator and pattern over it is
//! checked for exhaustiveness at build time. Composite payloads sit behind
//! `Arc`, so cloning a value never deep-copies a list or a string.

mod fields;
mod function;

use std::fmt;
use std::sync::Arc;

use amy_ir::{QualifiedName, StringInterner};

use crate::builtins::BuiltinFunction;
use crate::errors::{type_mismatch, EvalError};
use crate::stack::ensure_sufficient_stack;

pub use fields::CaseFields;
pub use function::FunctionValue;

/// Runtime value.
#[derive(Clone, Debug)]
pub enum Value {
    /// 32-bit signed integer.
    Int(i32),
    Bool(bool),
    /// Immutable string.
    Str(Arc<str>),
    /// The unit value `()`.
    Unit,
    /// Constructor application: `Cons(1, Nil())`.
    CaseClass {
        constructor: QualifiedName,
        args: CaseFields,
    },
    /// Reference to a top-level user function.
    Function(FunctionValue),
    /// Native function from the built-in registry.
    BuiltIn(BuiltinFunction),
}

// Factory Methods

impl Value {
    #[inline]
    pub fn int(n: i32) -> Self {
        Value::Int(n)
    }

    #[inline]
    pub fn string(s: impl Into<Arc<str>>) -> Self {
        Value::Str(s.into())
    }

    /// Create a constructor value.
    ///
    /// ```text
    /// let nil = Value::case_class(nil_ctor, vec![]);
    /// let list = Value::case_class(cons_ctor, vec![Value::int(1), nil]);
    /// ```
    #[inline]
    pub fn case_class(constructor: QualifiedName, args: Vec<Value>) -> Self {
        Value::CaseClass {
            constructor,
            args: CaseFields::from(args),
        }
    }
}

// Accessors

impl Value {
    /// Name of the value's runtime type, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "Int",
            Value::Bool(_) => "Boolean",
            Value::Str(_) => "String",
            Value::Unit => "Unit",
            Value::CaseClass { .. } => "case class",
            Value::Function(_) => "function",
            Value::BuiltIn(_) => "built-in function",
        }
    }

    pub fn as_int(&self) -> Result<i32, EvalError> {
        match self {
            Value::Int(n) => Ok(*n),
            other => Err(type_mismatch("Int", other.type_name())),
        }
    }

    pub fn as_bool(&self) -> Result<bool, EvalError> {
        match self {
            Value::Bool(b) => Ok(*b),
            other => Err(type_mismatch("Boolean", other.type_name())),
        }
    }

    pub fn as_str(&self) -> Result<&str, EvalError> {
        match self {
            Value::Str(s) => Ok(&**s),
            other => Err(type_mismatch("String", other.type_name())),
        }
    }

    #[inline]
    pub fn is_unit(&self) -> bool {
        matches!(self, Value::Unit)
    }

    /// Structural equality as the source language's `==` defines it.
    ///
    /// Values of different variants are unequal. Constructor values are equal
    /// when they share a constructor and all arguments are pairwise equal.
    /// Function and built-in values never compare equal, not even to
    /// themselves.
    pub fn equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Unit, Value::Unit) => true,
            (
                Value::CaseClass {
                    constructor: c1,
                    args: a1,
                },
                Value::CaseClass {
                    constructor: c2,
                    args: a2,
                },
            ) => {
                c1 == c2
                    && a1.len() == a2.len()
                    && ensure_sufficient_stack(|| {
                        a1.iter().zip(a2.iter()).all(|(x, y)| x.equals(y))
                    })
            }
            _ => false,
        }
    }

    /// Render the value for program output and error messages.
    pub fn display<'a>(&'a self, interner: &'a StringInterner) -> ValueDisplay<'a> {
        ValueDisplay {
            value: self,
            interner,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

// Host conversions

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Value::Unit
    }
}

impl TryFrom<&Value> for i32 {
    type Error = EvalError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value.as_int()
    }
}

impl TryFrom<&Value> for bool {
    type Error = EvalError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value.as_bool()
    }
}

/// `Display` adapter returned by [`Value::display`].
///
/// Strings print raw at the top level and quoted inside constructor
/// arguments; unit prints as `()`.
pub struct ValueDisplay<'a> {
    value: &'a Value,
    interner: &'a StringInterner,
}

impl ValueDisplay<'_> {
    fn write(&self, value: &Value, nested: bool, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match value {
            Value::Int(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Str(s) if nested => write!(f, "{:?}", &**s),
            Value::Str(s) => f.write_str(s),
            Value::Unit => f.write_str("()"),
            Value::CaseClass { constructor, args } => {
                f.write_str(self.interner.lookup(constructor.name))?;
                f.write_str("(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    ensure_sufficient_stack(|| self.write(arg, true, f))?;
                }
                f.write_str(")")
            }
            Value::Function(func) => {
                write!(f, "<function {}>", func.name().display(self.interner))
            }
            Value::BuiltIn(builtin) => write!(f, "<builtin {builtin}>"),
        }
    }
}

impl fmt::Display for ValueDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write(self.value, false, f)
    }
}
