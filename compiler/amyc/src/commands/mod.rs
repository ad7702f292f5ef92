//! Command handlers for the amyc CLI.

mod run;

pub use run::{run_artifact, run_command, RunOutcome};
