//! Directory tree comparison
//!
//! `dirdiff` walks two directory trees in lock-step and sorts every file it
//! finds into one of four buckets: present only under the first root, present
//! only under the second, present on both sides but different, and identical.
//!
//! Files are considered equal when their sizes and modification times match,
//! or, with content comparison enabled, when their bytes match.
//!
//! ```no_run
//! use dirdiff::{CompareOptions, TreeDiffEngine};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let options = CompareOptions::with_content(true);
//! let report = TreeDiffEngine::new(&options)
//!     .compare(Path::new("left"), Path::new("right"))?
//!     .sorted();
//!
//! for path in &report.only_in_first {
//!     println!("only in left: {}", path);
//! }
//! # Ok(())
//! # }
//! ```

pub mod areas;
pub mod artifacts;
pub mod commands;

pub use artifacts::comparison::equality::{FileComparison, FileEqualityChecker};
pub use artifacts::comparison::filter::ReportFilter;
pub use artifacts::comparison::relative_path::RelativePath;
pub use artifacts::comparison::report::{ComparisonReport, FileDifference};
pub use artifacts::comparison::tree_diff::TreeDiffEngine;
pub use artifacts::core::{CompareError, CompareOptions, CompareResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Summary followed by colored sections
    #[default]
    Human,
    /// One `<status> <path>` line per entry
    Porcelain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}
