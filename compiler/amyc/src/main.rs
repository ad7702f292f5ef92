//! amyc CLI

use amyc::cli::USAGE;
use amyc::commands::run_command;
use amyc::reporting::{render_cli_error, EXIT_SUCCESS, EXIT_USAGE};
use amyc::{parse_args, Command};

fn main() {
    amyc::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let code = match parse_args(&args) {
        Ok(Command::Run(options)) => run_command(&options),
        Ok(Command::Help) => {
            println!("{USAGE}");
            EXIT_SUCCESS
        }
        Ok(Command::Version) => {
            println!("amyc {}", env!("CARGO_PKG_VERSION"));
            EXIT_SUCCESS
        }
        Err(err) => {
            eprint!("{}", render_cli_error(&err));
            eprintln!();
            eprintln!("{USAGE}");
            EXIT_USAGE
        }
    };
    std::process::exit(code);
}
