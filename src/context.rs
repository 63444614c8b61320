//! Per-scan directory context.
//!
//! Aggregates one scan's file records into the groupings the classifier
//! needs: files by containing directory, files by content digest (groups
//! larger than one mark duplicates), and each directory's dominant category.
//! Built once from the complete record set and read-only afterwards.

use crate::file_category::{Category, FileMapper};
use crate::scanner::FileRecord;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// A directory's majority category and how many of its files carry it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DominantType {
    pub category: Category,
    /// Number of files in the directory whose base category matches.
    pub count: usize,
}

/// Read-only groupings derived from one scan.
///
/// Records are referenced by index into the scan's record slice so the
/// context never clones or outlives the records it describes.
#[derive(Debug, Default)]
pub struct DirectoryContext {
    files_by_dir: HashMap<PathBuf, Vec<usize>>,
    files_by_hash: HashMap<String, Vec<usize>>,
    dominant_types: HashMap<PathBuf, DominantType>,
}

impl DirectoryContext {
    /// Builds the context from the complete record set of one scan.
    ///
    /// A directory gets a dominant type only when one extension-based
    /// category strictly exceeds half of its files; ties and mixed content
    /// leave the directory without one, so affinity never fires there.
    pub fn build(records: &[FileRecord], mapper: &FileMapper) -> Self {
        let mut ctx = DirectoryContext::default();

        for (idx, record) in records.iter().enumerate() {
            if let Some(dir) = record.path.parent() {
                ctx.files_by_dir
                    .entry(dir.to_path_buf())
                    .or_default()
                    .push(idx);
            }
            if let Some(hash) = &record.content_hash {
                ctx.files_by_hash.entry(hash.clone()).or_default().push(idx);
            }
        }

        for (dir, indices) in &ctx.files_by_dir {
            let mut counts: HashMap<Category, usize> = HashMap::new();
            for &idx in indices {
                let base = mapper.base_category(&records[idx].extension);
                *counts.entry(base).or_insert(0) += 1;
            }

            if let Some((&category, &count)) = counts.iter().max_by_key(|&(_, &count)| count)
                && count > indices.len() / 2
            {
                ctx.dominant_types
                    .insert(dir.clone(), DominantType { category, count });
            }
        }

        ctx
    }

    /// Indices of the files located directly in `dir`.
    pub fn files_in_dir(&self, dir: &Path) -> &[usize] {
        self.files_by_dir.get(dir).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Indices of the files sharing `hash`. More than one entry means the
    /// content is duplicated somewhere in the scanned tree.
    pub fn files_with_hash(&self, hash: &str) -> &[usize] {
        self.files_by_hash
            .get(hash)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The category holding a strict majority in `dir`, if any.
    pub fn dominant_type(&self, dir: &Path) -> Option<DominantType> {
        self.dominant_types.get(dir).copied()
    }
}
