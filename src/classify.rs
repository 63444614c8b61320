//! File classification.
//!
//! Decides a category label and a human-readable reason for each scanned
//! file. The rules live in one ordered list ([`Classifier::RULES`]) so their
//! precedence is stated explicitly: duplicate content beats a content-type
//! mismatch, which beats directory affinity, which beats the plain extension
//! table. The extension table is the fallback and always produces a verdict.

use crate::context::DirectoryContext;
use crate::file_category::{Category, FileMapper};
use crate::scanner::FileRecord;

/// Minimum number of same-category files a directory needs before affinity
/// keeps its files nested instead of flattening them.
const AFFINITY_MIN_FILES: usize = 3;

/// Category label reserved for files whose content is duplicated.
pub const DUPLICATES_LABEL: &str = "Duplicates";

/// The outcome of classifying one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    /// Category label; either a plain category name ("Images") or a nested
    /// affinity label ("Images/holiday-2024").
    pub label: String,
    /// Human-readable explanation of why the label was chosen.
    pub reason: String,
}

type Rule = fn(&Classifier, &FileRecord, &DirectoryContext) -> Option<Verdict>;

/// Applies the classification rules to scanned files.
pub struct Classifier {
    mapper: FileMapper,
}

impl Classifier {
    /// Rules in precedence order; the first that returns a verdict wins.
    const RULES: [Rule; 3] = [
        Classifier::duplicate_rule,
        Classifier::content_type_rule,
        Classifier::affinity_rule,
    ];

    pub fn new(mapper: FileMapper) -> Self {
        Self { mapper }
    }

    pub fn mapper(&self) -> &FileMapper {
        &self.mapper
    }

    /// Returns the (label, reason) verdict for one file.
    ///
    /// Never fails: when no override rule applies, the extension table
    /// decides, defaulting to `Other` for unrecognized extensions.
    pub fn classify(&self, record: &FileRecord, ctx: &DirectoryContext) -> Verdict {
        for rule in Self::RULES {
            if let Some(verdict) = rule(self, record, ctx) {
                return verdict;
            }
        }
        self.extension_verdict(record)
    }

    /// Files sharing their content digest with at least one other file are
    /// routed to the duplicates folder regardless of type.
    fn duplicate_rule(&self, record: &FileRecord, ctx: &DirectoryContext) -> Option<Verdict> {
        let hash = record.content_hash.as_deref()?;
        if ctx.files_with_hash(hash).len() > 1 {
            let lead = &hash[..hash.len().min(8)];
            return Some(Verdict {
                label: DUPLICATES_LABEL.to_string(),
                reason: format!("Duplicate file (hash: {}...)", lead),
            });
        }
        None
    }

    /// When the sniffed content type maps to a category that disagrees with
    /// the extension, the content wins. A file with an unknown extension and
    /// a recognized content type lands here too, since its extension
    /// category is `Other`.
    fn content_type_rule(&self, record: &FileRecord, _ctx: &DirectoryContext) -> Option<Verdict> {
        let mime = record.mime_type.as_deref()?;
        let mime_category = Category::from_mime(mime)?;
        let base_category = self.mapper.base_category(&record.extension);
        if mime_category != base_category {
            let base = self.extension_verdict(record);
            return Some(Verdict {
                label: mime_category.label().to_string(),
                reason: format!("{} (MIME: {})", base.reason, mime),
            });
        }
        None
    }

    /// A file matching its directory's dominant category stays grouped with
    /// its siblings: it is nested under `<Dominant>/<parentDir>` instead of
    /// being flattened into the top-level category folder.
    fn affinity_rule(&self, record: &FileRecord, ctx: &DirectoryContext) -> Option<Verdict> {
        let dir = record.path.parent()?;
        let dominant = ctx.dominant_type(dir)?;
        let base_category = self.mapper.base_category(&record.extension);
        if base_category != dominant.category || dominant.count < AFFINITY_MIN_FILES {
            return None;
        }
        // A directory already named after the category needs no nesting;
        // the extension rule then reports the file as correctly placed.
        if record.parent_dir == dominant.category.label() {
            return None;
        }

        Some(Verdict {
            label: format!("{}/{}", dominant.category.label(), record.parent_dir),
            reason: format!(
                "Related to {} other {} files in same directory",
                dominant.count - 1,
                dominant.category.label()
            ),
        })
    }

    /// Extension-table verdict, the unconditional fallback.
    pub fn extension_verdict(&self, record: &FileRecord) -> Verdict {
        let category = self.mapper.base_category(&record.extension);
        let ext_display = if record.extension.is_empty() {
            "none"
        } else {
            record.extension.as_str()
        };
        let reason = match category {
            Category::Other => format!("Unknown file type ({})", ext_display),
            _ => format!("{} file ({})", category.kind_name(), ext_display),
        };
        Verdict {
            label: category.label().to_string(),
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn record(path: &str, ext: &str, hash: Option<&str>, mime: Option<&str>) -> FileRecord {
        let path = PathBuf::from(path);
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let parent_dir = path
            .parent()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        FileRecord {
            path,
            name,
            size: 0,
            extension: ext.to_string(),
            modified_time: String::new(),
            parent_dir,
            content_hash: hash.map(str::to_string),
            mime_type: mime.map(str::to_string),
            metadata: None,
        }
    }

    fn classifier() -> Classifier {
        Classifier::new(FileMapper::default())
    }

    #[test]
    fn test_extension_fallback() {
        let records = vec![record("/r/photo.jpg", "jpg", None, None)];
        let ctx = DirectoryContext::build(&records, classifier().mapper());
        let verdict = classifier().classify(&records[0], &ctx);

        assert_eq!(verdict.label, "Images");
        assert_eq!(verdict.reason, "Image file (jpg)");
    }

    #[test]
    fn test_unknown_extension_is_other() {
        let records = vec![record("/r/blob.xyz", "xyz", None, None)];
        let ctx = DirectoryContext::build(&records, classifier().mapper());
        let verdict = classifier().classify(&records[0], &ctx);

        assert_eq!(verdict.label, "Other");
        assert_eq!(verdict.reason, "Unknown file type (xyz)");
    }

    #[test]
    fn test_missing_extension_reason_says_none() {
        let records = vec![record("/r/README", "", None, None)];
        let ctx = DirectoryContext::build(&records, classifier().mapper());
        let verdict = classifier().classify(&records[0], &ctx);

        assert_eq!(verdict.label, "Other");
        assert_eq!(verdict.reason, "Unknown file type (none)");
    }

    #[test]
    fn test_duplicate_beats_everything() {
        // Same hash twice, each also a recognizable image with mismatched MIME.
        let records = vec![
            record("/r/a.jpg", "jpg", Some("deadbeefcafe"), Some("application/zip")),
            record("/r/b.jpg", "jpg", Some("deadbeefcafe"), Some("application/zip")),
        ];
        let c = classifier();
        let ctx = DirectoryContext::build(&records, c.mapper());

        for r in &records {
            let verdict = c.classify(r, &ctx);
            assert_eq!(verdict.label, DUPLICATES_LABEL);
            assert_eq!(verdict.reason, "Duplicate file (hash: deadbeef...)");
        }
    }

    #[test]
    fn test_unique_hash_is_not_duplicate() {
        let records = vec![
            record("/r/a.jpg", "jpg", Some("aaaa"), None),
            record("/r/b.jpg", "jpg", Some("bbbb"), None),
        ];
        let c = classifier();
        let ctx = DirectoryContext::build(&records, c.mapper());

        assert_eq!(c.classify(&records[0], &ctx).label, "Images");
    }

    #[test]
    fn test_content_type_overrides_mismatched_extension() {
        // A zip archive renamed to .jpg: the sniffed type wins.
        let records = vec![record("/r/fake.jpg", "jpg", None, Some("application/zip"))];
        let c = classifier();
        let ctx = DirectoryContext::build(&records, c.mapper());
        let verdict = c.classify(&records[0], &ctx);

        assert_eq!(verdict.label, "Archives");
        assert_eq!(
            verdict.reason,
            "Image file (jpg) (MIME: application/zip)"
        );
    }

    #[test]
    fn test_content_type_agreeing_with_extension_falls_through() {
        let records = vec![record("/r/real.jpg", "jpg", None, Some("image/jpeg"))];
        let c = classifier();
        let ctx = DirectoryContext::build(&records, c.mapper());
        let verdict = c.classify(&records[0], &ctx);

        assert_eq!(verdict.label, "Images");
        assert_eq!(verdict.reason, "Image file (jpg)");
    }

    #[test]
    fn test_unknown_extension_with_known_content_type_wins_outright() {
        let records = vec![record("/r/notes.data", "data", None, Some("text/plain"))];
        let c = classifier();
        let ctx = DirectoryContext::build(&records, c.mapper());
        let verdict = c.classify(&records[0], &ctx);

        assert_eq!(verdict.label, "Documents");
        assert_eq!(
            verdict.reason,
            "Unknown file type (data) (MIME: text/plain)"
        );
    }

    #[test]
    fn test_affinity_nests_matching_files() {
        let records = vec![
            record("/r/shoot/a.jpg", "jpg", None, None),
            record("/r/shoot/b.jpg", "jpg", None, None),
            record("/r/shoot/c.jpg", "jpg", None, None),
            record("/r/shoot/d.jpg", "jpg", None, None),
        ];
        let c = classifier();
        let ctx = DirectoryContext::build(&records, c.mapper());
        let verdict = c.classify(&records[0], &ctx);

        assert_eq!(verdict.label, "Images/shoot");
        assert_eq!(
            verdict.reason,
            "Related to 3 other Images files in same directory"
        );
    }

    #[test]
    fn test_affinity_skips_minority_file() {
        // The txt file does not match the dominant type and keeps its own
        // category.
        let records = vec![
            record("/r/shoot/a.jpg", "jpg", None, None),
            record("/r/shoot/b.jpg", "jpg", None, None),
            record("/r/shoot/c.jpg", "jpg", None, None),
            record("/r/shoot/d.jpg", "jpg", None, None),
            record("/r/shoot/notes.txt", "txt", None, None),
        ];
        let c = classifier();
        let ctx = DirectoryContext::build(&records, c.mapper());
        let verdict = c.classify(&records[4], &ctx);

        assert_eq!(verdict.label, "Documents");
    }

    #[test]
    fn test_affinity_skips_directory_already_named_after_category() {
        let records = vec![
            record("/r/Images/a.jpg", "jpg", None, None),
            record("/r/Images/b.jpg", "jpg", None, None),
            record("/r/Images/c.jpg", "jpg", None, None),
        ];
        let c = classifier();
        let ctx = DirectoryContext::build(&records, c.mapper());
        let verdict = c.classify(&records[0], &ctx);

        assert_eq!(verdict.label, "Images");
    }

    #[test]
    fn test_affinity_requires_three_matching_files() {
        // Two images dominate (2 > 3/2) but fall short of the three-file
        // threshold, so they are flattened normally.
        let records = vec![
            record("/r/pair/a.jpg", "jpg", None, None),
            record("/r/pair/b.jpg", "jpg", None, None),
            record("/r/pair/c.txt", "txt", None, None),
        ];
        let c = classifier();
        let ctx = DirectoryContext::build(&records, c.mapper());
        let verdict = c.classify(&records[0], &ctx);

        assert_eq!(verdict.label, "Images");
    }
}
