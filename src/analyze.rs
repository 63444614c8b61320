//! Directory analysis: scan, enrich, classify, plan moves.
//!
//! This is one of the two boundary operations. It never returns an error
//! value; scan-level failures are reported through the `error` field of
//! [`AnalysisResult`] so callers always receive a JSON-shaped payload.

use crate::classify::Classifier;
use crate::config::CompiledFilters;
use crate::content;
use crate::context::DirectoryContext;
use crate::file_category::FileMapper;
use crate::scanner::{self, FileRecord, ScanError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A candidate reorganization for one file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProposedMove {
    pub source_path: String,
    pub destination_path: String,
    pub file_name: String,
    pub reason: String,
    pub category: String,
}

/// Result of analyzing one directory tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub total_files: usize,
    pub proposed_moves: Vec<ProposedMove>,
    /// Set when the root is missing or the walk could not complete; the
    /// other fields are then a best-effort partial snapshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnalysisResult {
    fn failed(error: String) -> Self {
        Self {
            total_files: 0,
            proposed_moves: Vec::new(),
            error: Some(error),
        }
    }
}

/// Analyzes `root` and proposes moves that reorganize it by category.
///
/// Phases run strictly in order: walk the tree, enrich each record with a
/// content digest and sniffed type (per-file failures tolerated), build the
/// directory context from the complete record set, then classify each file
/// and plan its move.
pub fn analyze(root: &Path, filters: &CompiledFilters) -> AnalysisResult {
    let mut records = match scanner::scan_tree(root, filters) {
        Ok(records) => records,
        Err(ScanError::RootNotFound(_)) => {
            return AnalysisResult::failed("Directory does not exist".to_string());
        }
        Err(e @ ScanError::Walk { .. }) => {
            return AnalysisResult::failed(e.to_string());
        }
    };

    for record in &mut records {
        record.content_hash = content::digest_file(&record.path).ok();
        record.mime_type = content::sniff_mime(&record.path).ok().flatten();
    }

    let classifier = Classifier::new(FileMapper::default());
    let ctx = DirectoryContext::build(&records, classifier.mapper());

    let mut proposed_moves = Vec::new();
    for record in &records {
        let verdict = classifier.classify(record, &ctx);
        if let Some(proposed) = plan_move(root, record, &verdict.label, verdict.reason) {
            proposed_moves.push(proposed);
        }
    }

    AnalysisResult {
        total_files: records.len(),
        proposed_moves,
        error: None,
    }
}

/// Plans a move for a file whose location disagrees with its label.
///
/// A file is already in place when its parent directory's base name equals
/// the label, or, for nested affinity labels ("Images/shoot"), when its
/// containing directory is exactly `root/<label>`. The second check makes
/// affinity folders round-trip instead of being re-proposed every scan.
fn plan_move(
    root: &Path,
    record: &FileRecord,
    label: &str,
    reason: String,
) -> Option<ProposedMove> {
    let target_dir = root.join(label);
    let current_dir = record.path.parent();

    if record.parent_dir == label || current_dir == Some(target_dir.as_path()) {
        return None;
    }

    Some(ProposedMove {
        source_path: record.path.to_string_lossy().to_string(),
        destination_path: target_dir.join(&record.name).to_string_lossy().to_string(),
        file_name: record.name.clone(),
        reason,
        category: label.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FilterConfig;
    use std::fs;
    use tempfile::TempDir;

    fn default_filters() -> CompiledFilters {
        FilterConfig::default().compile().unwrap()
    }

    #[test]
    fn test_empty_directory() {
        let temp = TempDir::new().unwrap();
        let result = analyze(temp.path(), &default_filters());

        assert!(result.error.is_none());
        assert_eq!(result.total_files, 0);
        assert!(result.proposed_moves.is_empty());
    }

    #[test]
    fn test_missing_root_reports_error() {
        let result = analyze(Path::new("/no/such/dir"), &default_filters());

        assert_eq!(result.error.as_deref(), Some("Directory does not exist"));
        assert_eq!(result.total_files, 0);
        assert!(result.proposed_moves.is_empty());
    }

    #[test]
    fn test_proposes_move_for_misplaced_file() {
        let temp = TempDir::new().unwrap();
        // NUL bytes keep the sniffer quiet so the extension rule decides.
        fs::write(temp.path().join("song.mp3"), [0x00u8, 0x01, 0x02, 0x00]).unwrap();

        let result = analyze(temp.path(), &default_filters());
        assert_eq!(result.total_files, 1);
        assert_eq!(result.proposed_moves.len(), 1);

        let mv = &result.proposed_moves[0];
        assert_eq!(mv.file_name, "song.mp3");
        assert_eq!(mv.category, "Audio");
        assert_eq!(
            mv.destination_path,
            temp.path()
                .join("Audio")
                .join("song.mp3")
                .to_string_lossy()
        );
    }

    #[test]
    fn test_correctly_placed_file_produces_no_move() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("Documents")).unwrap();
        fs::write(temp.path().join("Documents").join("a.txt"), b"alpha").unwrap();

        let result = analyze(temp.path(), &default_filters());
        assert_eq!(result.total_files, 1);
        assert!(result.proposed_moves.is_empty());
    }

    #[test]
    fn test_analysis_result_json_shape() {
        let result = AnalysisResult {
            total_files: 1,
            proposed_moves: vec![ProposedMove {
                source_path: "/r/a.txt".to_string(),
                destination_path: "/r/Documents/a.txt".to_string(),
                file_name: "a.txt".to_string(),
                reason: "Document file (txt)".to_string(),
                category: "Documents".to_string(),
            }],
            error: None,
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["totalFiles"], 1);
        assert_eq!(json["proposedMoves"][0]["sourcePath"], "/r/a.txt");
        assert_eq!(json["proposedMoves"][0]["fileName"], "a.txt");
        assert_eq!(json["proposedMoves"][0]["category"], "Documents");
        assert!(json.get("error").is_none());
    }
}
