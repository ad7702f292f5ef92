//! The `run` command: load an artifact and evaluate it.

use std::io::Write;

use amy_eval::{run_with, EvalError, ExecContext, RunConfig};

use crate::reporting::{
    eval_exit_code, render_cli_error, render_eval_error, EXIT_SUCCESS, EXIT_USAGE,
};
use crate::{CliError, ProgramArtifact, RunOptions};

/// How an evaluated run ended.
#[derive(Debug)]
pub enum RunOutcome {
    /// The run produced a value, rendered for display.
    Finished { value: String },
    Failed(EvalError),
}

impl RunOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Finished { .. } => EXIT_SUCCESS,
            Self::Failed(err) => eval_exit_code(err),
        }
    }
}

/// Load `options.artifact` and run it against `ctx`.
///
/// `Err` means the program never started; evaluation failures come back
/// as [`RunOutcome::Failed`].
#[tracing::instrument(level = "debug", skip(ctx))]
pub fn run_artifact(options: &RunOptions, ctx: &mut ExecContext) -> Result<RunOutcome, CliError> {
    let (program, interner) = ProgramArtifact::read_from(&options.artifact)?.into_parts()?;
    let config = RunConfig::new()
        .entry(options.entry.clone())
        .max_call_depth(options.max_depth);

    let outcome = match run_with(&program, &interner, ctx, &config) {
        Ok(value) => RunOutcome::Finished {
            value: value.display(&interner).to_string(),
        },
        Err(err) => RunOutcome::Failed(err),
    };
    Ok(outcome)
}

/// `amyc run` against the process's stdio; returns the exit code.
pub fn run_command(options: &RunOptions) -> i32 {
    let mut ctx = ExecContext::stdio();
    match run_artifact(options, &mut ctx) {
        Ok(outcome) => {
            match &outcome {
                RunOutcome::Finished { value } if options.show_result => {
                    ctx.write_line(value);
                }
                RunOutcome::Finished { .. } => {}
                RunOutcome::Failed(err) => {
                    report(&render_eval_error(err));
                }
            }
            outcome.exit_code()
        }
        Err(err) => {
            report(&render_cli_error(&err));
            EXIT_USAGE
        }
    }
}

fn report(text: &str) {
    let mut stderr = std::io::stderr().lock();
    // Nothing useful is left to do if stderr is gone.
    let _ = stderr.write_all(text.as_bytes());
}
