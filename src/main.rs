use clap::Parser;
use declutter::cli::{Cli, run};
use declutter::output::OutputFormatter;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        OutputFormatter::error(&e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
