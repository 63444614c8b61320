//! Output formatting and styling.
//!
//! Centralizes all CLI presentation: colored status messages, the proposed
//! move listing, the category summary table, progress bars, and the move
//! outcome report. The analysis and execution engines never print; only this
//! module and the CLI do.

use crate::analyze::{AnalysisResult, ProposedMove};
use crate::executor::MoveOutcome;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashMap;

/// Formats all CLI output with consistent styling.
pub struct OutputFormatter;

impl OutputFormatter {
    /// Prints a success message in green with a checkmark.
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Prints an error message in red with an X mark.
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Prints a warning message in yellow.
    pub fn warning(message: &str) {
        println!("{} {}", "⚠".yellow(), message);
    }

    /// Prints an info message in cyan.
    pub fn info(message: &str) {
        println!("{}", message.cyan());
    }

    /// Prints a regular message without styling.
    pub fn plain(message: &str) {
        println!("{}", message);
    }

    /// Prints a section header.
    pub fn header(header: &str) {
        println!("\n{}", header.bold());
    }

    /// Creates a progress bar for move execution.
    pub fn create_progress_bar(total: u64) -> ProgressBar {
        let pb = ProgressBar::new(total);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .expect("Invalid progress bar template")
                .progress_chars("█▓░"),
        );
        pb
    }

    /// Prints the proposed moves of an analysis, grouped listing plus a
    /// per-category summary table.
    pub fn analysis_report(result: &AnalysisResult) {
        Self::header(&format!("Scanned {} files", result.total_files));

        if result.proposed_moves.is_empty() {
            Self::success("Everything is already in place. No moves proposed.");
            return;
        }

        println!("Proposed moves:");
        for mv in &result.proposed_moves {
            println!(
                " - {} {} {}",
                mv.file_name,
                "→".cyan(),
                format!("{}/", mv.category).bold()
            );
            println!("   {}", mv.reason.dimmed());
        }

        let mut category_counts: HashMap<String, usize> = HashMap::new();
        for mv in &result.proposed_moves {
            *category_counts.entry(mv.category.clone()).or_insert(0) += 1;
        }
        Self::summary_table(&category_counts, result.proposed_moves.len());
    }

    /// Prints a summary table of proposed moves by category.
    pub fn summary_table(category_counts: &HashMap<String, usize>, total_moves: usize) {
        Self::header("SUMMARY");

        let mut categories: Vec<_> = category_counts.iter().collect();
        categories.sort_by_key(|&(name, _)| name);

        let max_category_len = categories
            .iter()
            .map(|(name, _)| name.len())
            .max()
            .unwrap_or(0)
            .max(8);

        println!(
            "{:<width$} | {}",
            "Category".bold(),
            "Moves".bold(),
            width = max_category_len
        );
        println!("{}", "-".repeat(max_category_len + 10));

        for (category, count) in &categories {
            println!(
                "{:<width$} | {}",
                category,
                count.to_string().green(),
                width = max_category_len
            );
        }

        println!("{}", "-".repeat(max_category_len + 10));
        println!(
            "{:<width$} | {}",
            "Total".bold(),
            total_moves.to_string().green().bold(),
            width = max_category_len
        );
    }

    /// Prints the outcome of an executed move batch.
    pub fn outcome_report(outcome: &MoveOutcome) {
        Self::header("EXECUTION RESULT");
        Self::success(&format!("Moved: {}", outcome.success));

        if !outcome.created_folders.is_empty() {
            println!("Created folders:");
            for folder in &outcome.created_folders {
                println!(" + {}", folder);
            }
        }

        if outcome.failed > 0 {
            Self::error(&format!("Failed: {}", outcome.failed));
            for failure in &outcome.failed_files {
                eprintln!("   - {}", failure);
            }
        }
    }

    /// Formats the progress-bar message for the move being executed.
    pub fn executing_notice(mv: &ProposedMove) -> String {
        format!("{} → {}", mv.file_name, mv.category)
    }
}
