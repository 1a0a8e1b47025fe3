// ============================================================================
// Ramanujan Pi CLI
// Binary entry point
// ============================================================================

use clap::Parser;
use ramanujan_pi::cli::{self, Args};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    cli::init_logging();
    let args = Args::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    match cli::run(&args, &mut input, &mut output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "Run failed");
            eprintln!("{}", err);
            ExitCode::FAILURE
        },
    }
}
