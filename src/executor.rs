//! Move execution.
//!
//! Realizes a batch of approved [`ProposedMove`]s. Each move is attempted
//! independently: a failed directory creation or rename is recorded and the
//! batch continues. Destination collisions are resolved deterministically by
//! suffixing `_1`, `_2`, ... before the extension.

use crate::analyze::ProposedMove;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Aggregate result of executing one batch of moves.
///
/// `success + failed` always equals the number of moves attempted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveOutcome {
    pub success: usize,
    pub failed: usize,
    /// One `"<fileName>: <cause>"` entry per failed move.
    pub failed_files: Vec<String>,
    /// Destination directories newly created by this batch, deduplicated.
    pub created_folders: Vec<String>,
}

/// Executes a batch of proposed moves.
pub fn execute_moves(moves: &[ProposedMove]) -> MoveOutcome {
    execute_moves_with(moves, |_| {})
}

/// Executes a batch of proposed moves, invoking `on_move` after each attempt
/// (for progress reporting).
pub fn execute_moves_with(
    moves: &[ProposedMove],
    mut on_move: impl FnMut(&ProposedMove),
) -> MoveOutcome {
    let mut outcome = MoveOutcome::default();
    let mut created_dirs: HashSet<PathBuf> = HashSet::new();

    for mv in moves {
        execute_one(mv, &mut outcome, &mut created_dirs);
        on_move(mv);
    }

    outcome
}

fn execute_one(mv: &ProposedMove, outcome: &mut MoveOutcome, created_dirs: &mut HashSet<PathBuf>) {
    let mut destination = PathBuf::from(&mv.destination_path);
    let Some(dest_dir) = destination.parent().map(Path::to_path_buf) else {
        outcome.failed += 1;
        outcome
            .failed_files
            .push(format!("{}: destination has no parent directory", mv.file_name));
        return;
    };

    if !dest_dir.exists() {
        if let Err(e) = fs::create_dir_all(&dest_dir) {
            outcome.failed += 1;
            outcome
                .failed_files
                .push(format!("{}: failed to create directory - {}", mv.file_name, e));
            return;
        }
        if created_dirs.insert(dest_dir.clone()) {
            outcome
                .created_folders
                .push(dest_dir.to_string_lossy().to_string());
        }
    }

    if destination.exists() {
        destination = unique_destination(&destination);
    }

    match fs::rename(&mv.source_path, &destination) {
        Ok(()) => outcome.success += 1,
        Err(e) => {
            outcome.failed += 1;
            outcome.failed_files.push(format!("{}: {}", mv.file_name, e));
        }
    }
}

/// Picks the lowest-numbered free path by suffixing `_1`, `_2`, ... before
/// the extension.
fn unique_destination(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let extension = path.extension().map(|e| e.to_string_lossy().to_string());
    let parent = path.parent().unwrap_or_else(|| Path::new(""));

    let mut counter = 1;
    loop {
        let candidate_name = match &extension {
            Some(ext) => format!("{}_{}.{}", stem, counter, ext),
            None => format!("{}_{}", stem, counter),
        };
        let candidate = parent.join(candidate_name);
        if !candidate.exists() {
            return candidate;
        }
        counter += 1;
    }
}
