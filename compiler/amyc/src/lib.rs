//! amyc - runs resolved Amy programs.
//!
//! The front end (parsing, name analysis, type checking) hands over a
//! [`ProgramArtifact`]: a bincode file holding the program and its string
//! table. `amyc run` loads one and evaluates it against stdin and stdout.

pub mod artifact;
pub mod cli;
pub mod commands;
pub mod reporting;

pub use artifact::{ArtifactError, ProgramArtifact, ARTIFACT_VERSION};
pub use cli::{parse_args, CliError, Command, RunOptions};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the stderr tracing subscriber.
///
/// Only active when `AMY_LOG` (or, failing that, `RUST_LOG`) holds a
/// filter directive. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        let Ok(filter) =
            EnvFilter::try_from_env("AMY_LOG").or_else(|_| EnvFilter::try_from_default_env())
        else {
            return;
        };
        let layer = HierarchicalLayer::new(2)
            .with_writer(std::io::stderr)
            .with_targets(true)
            .with_indent_lines(true);
        if let Err(err) = tracing_subscriber::registry()
            .with(filter)
            .with(layer)
            .try_init()
        {
            eprintln!("warning: tracing already initialized: {err}");
        }
    });
}
