//! Native functions callable from Amy programs.
//!
//! Built-ins are looked up by module-qualified name in a
//! [`BuiltinRegistry`]. Each entry carries its arity; the argument count is
//! checked before the native body runs.

use std::fmt;

use amy_ir::{QualifiedName, StringInterner};
use rustc_hash::FxHashMap;

use crate::context::ExecContext;
use crate::errors::{
    arity_mismatch, end_of_input, invalid_argument, malformed_input, EvalResult,
};
use crate::Value;

/// Module that owns the standard built-ins.
pub const STD_MODULE: &str = "Std";

/// Native body, by arity.
#[derive(Copy, Clone)]
enum NativeFn {
    Nullary(fn(&mut ExecContext) -> EvalResult),
    Unary(fn(&Value, &mut ExecContext) -> EvalResult),
}

/// A native function exposed under a module-qualified name.
#[derive(Copy, Clone)]
pub struct BuiltinFunction {
    module: &'static str,
    name: &'static str,
    body: NativeFn,
}

impl BuiltinFunction {
    /// A built-in taking no arguments.
    pub const fn nullary(
        module: &'static str,
        name: &'static str,
        body: fn(&mut ExecContext) -> EvalResult,
    ) -> Self {
        Self {
            module,
            name,
            body: NativeFn::Nullary(body),
        }
    }

    /// A built-in taking one argument.
    pub const fn unary(
        module: &'static str,
        name: &'static str,
        body: fn(&Value, &mut ExecContext) -> EvalResult,
    ) -> Self {
        Self {
            module,
            name,
            body: NativeFn::Unary(body),
        }
    }

    pub fn module(&self) -> &'static str {
        self.module
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn arity(&self) -> usize {
        match self.body {
            NativeFn::Nullary(_) => 0,
            NativeFn::Unary(_) => 1,
        }
    }

    /// Invoke with already-evaluated arguments.
    pub fn call(&self, args: &[Value], ctx: &mut ExecContext) -> EvalResult {
        match (self.body, args) {
            (NativeFn::Nullary(f), []) => f(ctx),
            (NativeFn::Unary(f), [arg]) => f(arg, ctx),
            _ => Err(arity_mismatch(self.to_string(), self.arity(), args.len())),
        }
    }
}

impl fmt::Display for BuiltinFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.module, self.name)
    }
}

impl fmt::Debug for BuiltinFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuiltinFunction")
            .field("name", &format_args!("{self}"))
            .field("arity", &self.arity())
            .finish()
    }
}

/// Built-ins keyed by (module, name).
#[derive(Clone, Debug, Default)]
pub struct BuiltinRegistry {
    entries: FxHashMap<QualifiedName, BuiltinFunction>,
}

impl BuiltinRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The `Std` built-ins.
    pub fn standard(interner: &StringInterner) -> Self {
        let mut registry = Self::new();
        for builtin in STANDARD {
            registry.register(interner, *builtin);
        }
        tracing::debug!(count = registry.len(), "registered standard built-ins");
        registry
    }

    /// Add or replace an entry.
    pub fn register(&mut self, interner: &StringInterner, builtin: BuiltinFunction) {
        let key = QualifiedName::new(interner.intern(builtin.module), interner.intern(builtin.name));
        self.entries.insert(key, builtin);
    }

    #[inline]
    pub fn get(&self, name: QualifiedName) -> Option<BuiltinFunction> {
        self.entries.get(&name).copied()
    }

    #[inline]
    pub fn contains(&self, name: QualifiedName) -> bool {
        self.entries.contains_key(&name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

const STANDARD: &[BuiltinFunction] = &[
    BuiltinFunction::unary(STD_MODULE, "printInt", print_int),
    BuiltinFunction::unary(STD_MODULE, "printString", print_string),
    BuiltinFunction::nullary(STD_MODULE, "readInt", read_int),
    BuiltinFunction::nullary(STD_MODULE, "readString", read_string),
    BuiltinFunction::unary(STD_MODULE, "intToString", int_to_string),
    BuiltinFunction::unary(STD_MODULE, "digitToString", digit_to_string),
];

fn print_int(arg: &Value, ctx: &mut ExecContext) -> EvalResult {
    ctx.write_line(&arg.as_int()?.to_string());
    Ok(Value::Unit)
}

fn print_string(arg: &Value, ctx: &mut ExecContext) -> EvalResult {
    ctx.write_line(arg.as_str()?);
    Ok(Value::Unit)
}

fn read_int(ctx: &mut ExecContext) -> EvalResult {
    let line = ctx.read_line().ok_or_else(|| end_of_input("readInt"))?;
    match line.parse::<i32>() {
        Ok(n) => Ok(Value::Int(n)),
        Err(_) => Err(malformed_input(line)),
    }
}

fn read_string(ctx: &mut ExecContext) -> EvalResult {
    let line = ctx.read_line().ok_or_else(|| end_of_input("readString"))?;
    Ok(Value::from(line))
}

fn int_to_string(arg: &Value, _: &mut ExecContext) -> EvalResult {
    Ok(Value::from(arg.as_int()?.to_string()))
}

fn digit_to_string(arg: &Value, _: &mut ExecContext) -> EvalResult {
    let n = arg.as_int()?;
    if (0..=9).contains(&n) {
        Ok(Value::from(n.to_string()))
    } else {
        Err(invalid_argument(
            "digitToString",
            format!("{n} is not a decimal digit"),
        ))
    }
}

#[cfg(test)]
mod tests;
