//! Command-line argument parsing.

use std::path::PathBuf;

use amy_eval::{EntryPoint, DEFAULT_MAX_CALL_DEPTH};

use crate::ArtifactError;

/// A parsed invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Run(RunOptions),
    Help,
    Version,
}

/// Options for `amyc run`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub artifact: PathBuf,
    pub entry: EntryPoint,
    /// `None` when `--max-depth 0` lifts the limit.
    pub max_depth: Option<usize>,
    /// Print the final value to stdout after the run.
    pub show_result: bool,
}

impl RunOptions {
    pub fn new(artifact: impl Into<PathBuf>) -> Self {
        Self {
            artifact: artifact.into(),
            entry: EntryPoint::default(),
            max_depth: Some(DEFAULT_MAX_CALL_DEPTH),
            show_result: false,
        }
    }
}

/// Errors surfaced by the CLI before or around evaluation.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Artifact(#[from] ArtifactError),
}

fn usage(message: impl Into<String>) -> CliError {
    CliError::Usage(message.into())
}

/// Parse the arguments after the program name.
pub fn parse_args(args: &[String]) -> Result<Command, CliError> {
    let Some(command) = args.first() else {
        return Ok(Command::Help);
    };
    match command.as_str() {
        "run" => parse_run(&args[1..]).map(Command::Run),
        "help" | "--help" | "-h" => Ok(Command::Help),
        "version" | "--version" | "-V" => Ok(Command::Version),
        other => Err(usage(format!("unknown command '{other}'"))),
    }
}

fn parse_run(args: &[String]) -> Result<RunOptions, CliError> {
    let mut artifact: Option<PathBuf> = None;
    let mut entry: Option<EntryPoint> = None;
    let mut max_depth = Some(DEFAULT_MAX_CALL_DEPTH);
    let mut show_result = false;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--entry" => {
                let value = iter
                    .next()
                    .ok_or_else(|| usage("--entry needs a Module.function argument"))?;
                set_entry(&mut entry, parse_entry(value)?)?;
            }
            "--module-bodies" => set_entry(&mut entry, EntryPoint::ModuleBodies)?,
            "--max-depth" => {
                let value = iter
                    .next()
                    .ok_or_else(|| usage("--max-depth needs a number"))?;
                max_depth = parse_depth(value)?;
            }
            "--show-result" => show_result = true,
            flag if flag.starts_with('-') => {
                return Err(usage(format!("unknown option '{flag}'")));
            }
            path => {
                if artifact.is_some() {
                    return Err(usage(format!("unexpected argument '{path}'")));
                }
                artifact = Some(PathBuf::from(path));
            }
        }
    }

    let artifact = artifact.ok_or_else(|| usage("missing artifact path"))?;
    Ok(RunOptions {
        artifact,
        entry: entry.unwrap_or_default(),
        max_depth,
        show_result,
    })
}

fn set_entry(slot: &mut Option<EntryPoint>, entry: EntryPoint) -> Result<(), CliError> {
    if slot.is_some() {
        return Err(usage(
            "--entry and --module-bodies may only be given once, and not together",
        ));
    }
    *slot = Some(entry);
    Ok(())
}

/// `Module.function`; the function is everything after the last dot.
fn parse_entry(value: &str) -> Result<EntryPoint, CliError> {
    match value.rsplit_once('.') {
        Some((module, function)) if !module.is_empty() && !function.is_empty() => {
            Ok(EntryPoint::function(module, function))
        }
        _ => Err(usage(format!(
            "invalid entry point '{value}', expected Module.function"
        ))),
    }
}

fn parse_depth(value: &str) -> Result<Option<usize>, CliError> {
    match value.parse::<usize>() {
        Ok(0) => Ok(None),
        Ok(depth) => Ok(Some(depth)),
        Err(_) => Err(usage(format!("invalid --max-depth value '{value}'"))),
    }
}

pub const USAGE: &str = "\
amyc - run resolved Amy programs

Usage: amyc <command> [options]

Commands:
  run <artifact>       Evaluate a program artifact
  help                 Show this help message
  version              Show version information

Run options:
  --entry <M.f>        Entry function (default: Main.main)
  --module-bodies      Evaluate each module's top-level expression instead
  --max-depth <N>      Call depth limit (default: 10000, 0 for none)
  --show-result        Print the final value after the run

Environment:
  AMY_LOG              Tracing filter, e.g. AMY_LOG=amy_eval=debug (falls back to RUST_LOG)

Exit status: 0 success, 1 runtime error, 2 usage or artifact error, 101 internal error";
