//! declutter - directory analysis and category-based reorganization
//!
//! This library scans a directory tree, classifies every regular file into a
//! semantic category (Images, Documents, Videos, Audio, Archives, Code,
//! Applications, Duplicates, Other) using content hashing, content-type
//! sniffing and directory-affinity heuristics, and proposes move operations
//! that reorganize the tree by category. A separate executor applies an
//! approved batch of moves with conflict-safe naming and per-file failure
//! reporting.
//!
//! The boundary surface is two operations:
//! [`analyze::analyze`] and [`executor::execute_moves`].

pub mod analyze;
pub mod classify;
pub mod cli;
pub mod config;
pub mod content;
pub mod context;
pub mod executor;
pub mod file_category;
pub mod output;
pub mod scanner;

pub use analyze::{AnalysisResult, ProposedMove, analyze};
pub use classify::{Classifier, Verdict};
pub use config::{CompiledFilters, ConfigError, FilterConfig};
pub use context::DirectoryContext;
pub use executor::{MoveOutcome, execute_moves};
pub use file_category::{Category, FileMapper};
pub use scanner::{FileRecord, ScanError, scan_tree};
