//! Program driver: load, pick the entry point, run.

use std::fmt;

use amy_ir::{Program, QualifiedName, StringInterner};

use crate::context::ExecContext;
use crate::errors::{arity_mismatch, no_entry_point, EvalResult};
use crate::interpreter::Interpreter;
use crate::program::LoadedProgram;
use crate::{Environment, Value};

/// Call depth limit used unless a [`RunConfig`] says otherwise.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 10_000;

/// What a run evaluates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EntryPoint {
    /// A parameterless function, `Main.main` by default.
    Function { module: String, function: String },
    /// Every module's top-level expression, in program order.
    ModuleBodies,
}

impl EntryPoint {
    pub fn function(module: impl Into<String>, function: impl Into<String>) -> Self {
        Self::Function {
            module: module.into(),
            function: function.into(),
        }
    }
}

impl Default for EntryPoint {
    fn default() -> Self {
        Self::function("Main", "main")
    }
}

impl fmt::Display for EntryPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Function { module, function } => write!(f, "{module}.{function}"),
            Self::ModuleBodies => f.write_str("module bodies"),
        }
    }
}

/// Run settings.
///
/// ```text
/// let config = RunConfig::new()
///     .entry(EntryPoint::function("App", "start"))
///     .max_call_depth(Some(500));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    entry: EntryPoint,
    max_call_depth: Option<usize>,
}

impl RunConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn entry(mut self, entry: EntryPoint) -> Self {
        self.entry = entry;
        self
    }

    /// `None` removes the limit; host stack growth still applies.
    #[must_use]
    pub fn max_call_depth(mut self, depth: Option<usize>) -> Self {
        self.max_call_depth = depth;
        self
    }

    pub fn entry_point(&self) -> &EntryPoint {
        &self.entry
    }

    pub fn call_depth_limit(&self) -> Option<usize> {
        self.max_call_depth
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            entry: EntryPoint::default(),
            max_call_depth: Some(DEFAULT_MAX_CALL_DEPTH),
        }
    }
}

/// Run `program` from `Main.main` with the standard built-ins.
pub fn run(program: &Program, interner: &StringInterner, ctx: &mut ExecContext) -> EvalResult {
    run_with(program, interner, ctx, &RunConfig::default())
}

/// Run `program` under `config` with the standard built-ins.
pub fn run_with(
    program: &Program,
    interner: &StringInterner,
    ctx: &mut ExecContext,
    config: &RunConfig,
) -> EvalResult {
    let loaded = LoadedProgram::load(program, interner)?;
    run_loaded(&loaded, ctx, config)
}

/// Run an already loaded program, e.g. one with extra built-ins registered.
///
/// The first error aborts the run and is returned unchanged; output written
/// before it stays written.
#[tracing::instrument(level = "debug", skip_all, fields(entry = %config.entry))]
pub fn run_loaded(
    loaded: &LoadedProgram<'_>,
    ctx: &mut ExecContext,
    config: &RunConfig,
) -> EvalResult {
    let mut interpreter = Interpreter::new(loaded, config.max_call_depth);
    match &config.entry {
        EntryPoint::Function { module, function } => {
            let interner = loaded.interner();
            let entry = interner
                .get(module)
                .zip(interner.get(function))
                .map(|(m, f)| QualifiedName::new(m, f))
                .and_then(|name| loaded.function(name))
                .ok_or_else(|| no_entry_point(config.entry.to_string()))?;
            if entry.arity() != 0 {
                return Err(arity_mismatch(config.entry.to_string(), entry.arity(), 0));
            }
            let entry = entry.clone();
            interpreter.call_function(&entry, Vec::new(), ctx)
        }
        EntryPoint::ModuleBodies => {
            let mut last = Value::Unit;
            for module in loaded.modules() {
                let Some(body) = module.body else { continue };
                tracing::debug!(module = loaded.interner().lookup(module.name), "evaluating module body");
                let previous = ctx.set_current_module(Some(module.name));
                let result = interpreter.eval(body, &Environment::new(), ctx);
                ctx.set_current_module(previous);
                last = result?;
            }
            Ok(last)
        }
    }
}
