//! Command-line shell.
//!
//! A thin caller around the two boundary operations: analyze a directory and
//! (on request) execute the proposed moves. It owns argument parsing, config
//! loading, the approval seam (`--apply`), and output selection (`--json`
//! for machine consumers, formatted text otherwise). No decision logic lives
//! here.

use crate::analyze::{self, AnalysisResult};
use crate::config::FilterConfig;
use crate::executor::{self, MoveOutcome};
use crate::output::OutputFormatter;
use clap::Parser;
use std::path::PathBuf;

/// Analyze a directory tree and reorganize its files by category.
#[derive(Debug, Parser)]
#[command(name = "declutter", version, about)]
pub struct Cli {
    /// Directory to analyze.
    pub directory: PathBuf,

    /// Execute the proposed moves instead of only listing them.
    #[arg(long)]
    pub apply: bool,

    /// Print raw JSON results instead of formatted output.
    #[arg(long)]
    pub json: bool,

    /// Path to a filter configuration file.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Runs the CLI: analyze, report, and optionally apply.
///
/// Returns an error string for the caller to print; the process exit code is
/// decided in `main`.
pub fn run(cli: &Cli) -> Result<(), String> {
    let filters = FilterConfig::load(cli.config.as_deref())
        .map_err(|e| format!("Error loading configuration: {}", e))?
        .compile()
        .map_err(|e| format!("Error compiling filters: {}", e))?;

    let result = analyze::analyze(&cli.directory, &filters);
    if let Some(error) = &result.error {
        return Err(error.clone());
    }

    if cli.json && !cli.apply {
        println!("{}", render_json(&result)?);
        return Ok(());
    }

    if !cli.json {
        OutputFormatter::info(&format!("Analyzing: {}", cli.directory.display()));
        OutputFormatter::analysis_report(&result);
    }

    if !cli.apply {
        if !cli.json && !result.proposed_moves.is_empty() {
            OutputFormatter::plain(&format!(
                "\nRun 'declutter {} --apply' to execute these moves.",
                cli.directory.display()
            ));
        }
        return Ok(());
    }

    let outcome = execute_with_progress(&result);

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&outcome)
                .map_err(|e| format!("Error serializing outcome: {}", e))?
        );
    } else {
        OutputFormatter::outcome_report(&outcome);
    }

    if outcome.failed > 0 {
        return Err(format!(
            "{} of {} moves failed",
            outcome.failed,
            outcome.failed + outcome.success
        ));
    }

    Ok(())
}

fn execute_with_progress(result: &AnalysisResult) -> MoveOutcome {
    let pb = OutputFormatter::create_progress_bar(result.proposed_moves.len() as u64);
    let outcome = executor::execute_moves_with(&result.proposed_moves, |mv| {
        pb.set_message(OutputFormatter::executing_notice(mv));
        pb.inc(1);
    });
    pb.finish_and_clear();
    outcome
}

fn render_json(result: &AnalysisResult) -> Result<String, String> {
    serde_json::to_string_pretty(result).map_err(|e| format!("Error serializing result: {}", e))
}
