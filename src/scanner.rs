//! Directory tree scanning.
//!
//! Walks a root directory recursively and produces one [`FileRecord`] per
//! regular file. Hidden entries (names starting with ".") are skipped, and a
//! hidden directory prunes its whole subtree. Unreadable entries below the
//! root are skipped silently; only a failure to read the root itself aborts
//! the scan.

use crate::config::CompiledFilters;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One regular file discovered during a scan.
///
/// Created by the walker, enriched with digest and MIME label before context
/// building, and treated as read-only from then on. Not persisted between
/// scans.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    /// Absolute path of the file.
    pub path: PathBuf,
    /// Base name including extension.
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// Lowercase extension without the dot, empty if absent.
    pub extension: String,
    /// Last-modified timestamp, formatted `%Y-%m-%d %H:%M:%S`.
    pub modified_time: String,
    /// Base name of the immediate parent directory.
    pub parent_dir: String,
    /// Hex content digest; `None` when hashing failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_hash: Option<String>,
    /// Sniffed content-type label; `None` when sniffing failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    /// Sparse per-file metadata. Unused by the current rules; reserved for
    /// future classification inputs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, String>>,
}

/// Errors that abort a scan.
#[derive(Debug)]
pub enum ScanError {
    /// The root path does not exist.
    RootNotFound(PathBuf),
    /// The traversal itself could not proceed (e.g. root unreadable).
    Walk { source: walkdir::Error },
}

impl std::fmt::Display for ScanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScanError::RootNotFound(path) => {
                write!(f, "Directory does not exist: {}", path.display())
            }
            ScanError::Walk { source } => {
                write!(f, "Error walking directory: {}", source)
            }
        }
    }
}

impl std::error::Error for ScanError {}

fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Collects a [`FileRecord`] for every regular file under `root`.
///
/// The root itself is never recorded. Files rejected by `filters` are
/// skipped. Records come back with `content_hash` and `mime_type` unset;
/// enrichment happens in a separate pass.
///
/// # Errors
///
/// Returns [`ScanError::RootNotFound`] when the root is absent and
/// [`ScanError::Walk`] when the traversal fails at the root. Failures on
/// entries below the root are tolerated by skipping the entry.
pub fn scan_tree(root: &Path, filters: &CompiledFilters) -> Result<Vec<FileRecord>, ScanError> {
    if !root.exists() {
        return Err(ScanError::RootNotFound(root.to_path_buf()));
    }

    let mut records = Vec::new();

    let walker = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            // An error at depth 0 means the root itself is unreadable.
            Err(e) if e.depth() == 0 => return Err(ScanError::Walk { source: e }),
            Err(_) => continue,
        };

        if entry.depth() == 0 || !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if !filters.should_include(path) {
            continue;
        }

        let Ok(metadata) = entry.metadata() else {
            continue;
        };

        records.push(build_record(path, &metadata));
    }

    Ok(records)
}

fn build_record(path: &Path, metadata: &std::fs::Metadata) -> FileRecord {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    let parent_dir = path
        .parent()
        .and_then(|p| p.file_name())
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    let modified_time = metadata
        .modified()
        .map(|t| DateTime::<Local>::from(t).format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_default();

    FileRecord {
        path: path.to_path_buf(),
        name,
        size: metadata.len(),
        extension,
        modified_time,
        parent_dir,
        content_hash: None,
        mime_type: None,
        metadata: None,
    }
}
