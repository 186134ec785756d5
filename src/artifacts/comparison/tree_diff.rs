//! Lock-step comparison of two directory trees
//!
//! Both roots are walked level by level. At each level the immediate files
//! and subdirectories of the two sides are partitioned by exact name:
//!
//! - files on one side only go straight into that side's bucket
//! - files on both sides are handed to [`FileEqualityChecker`]
//! - directories on both sides are walked recursively
//! - directories on one side only are flattened, every file below them being
//!   reported individually in that side's bucket
//!
//! Each level builds its own partial report which the parent merges once the
//! children return, so sibling subtrees may be compared on a rayon pool
//! without sharing the buckets between workers.

use crate::areas::workspace::Workspace;
use crate::artifacts::comparison::equality::{FileComparison, FileEqualityChecker};
use crate::artifacts::comparison::relative_path::RelativePath;
use crate::artifacts::comparison::report::ComparisonReport;
use crate::artifacts::core::{CompareOptions, CompareResult};
use derive_new::new;
use rayon::prelude::*;
use std::collections::HashSet;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Names at one level split into the three-way partition.
#[derive(Debug)]
struct NamePartition<'a> {
    only_first: Vec<&'a OsString>,
    both: Vec<&'a OsString>,
    only_second: Vec<&'a OsString>,
}

impl<'a> NamePartition<'a> {
    // Keeps listing order: side one for the first two groups, side two for the last.
    fn of(first: &'a [OsString], second: &'a [OsString]) -> Self {
        let first_names = first.iter().collect::<HashSet<_>>();
        let second_names = second.iter().collect::<HashSet<_>>();

        let (both, only_first) = first
            .iter()
            .partition::<Vec<_>, _>(|name| second_names.contains(name));
        let only_second = second
            .iter()
            .filter(|name| !first_names.contains(name))
            .collect();

        NamePartition {
            only_first,
            both,
            only_second,
        }
    }
}

#[derive(Debug, Clone, Copy, new)]
pub struct TreeDiffEngine<'o> {
    options: &'o CompareOptions,
}

impl<'o> TreeDiffEngine<'o> {
    /// Compares two roots, validating both before anything is read.
    pub fn compare(&self, first_root: &Path, second_root: &Path) -> CompareResult<ComparisonReport> {
        let first = Workspace::open(first_root)?;
        let second = Workspace::open(second_root)?;

        self.compare_workspaces(&first, &second)
    }

    pub fn compare_workspaces(
        &self,
        first: &Workspace,
        second: &Workspace,
    ) -> CompareResult<ComparisonReport> {
        debug!(
            first = ?first.path(),
            second = ?second.path(),
            compare_content = self.options.compare_content,
            "starting comparison"
        );

        let report = match self.options.parallelism() {
            Some(jobs) => {
                let pool = rayon::ThreadPoolBuilder::new().num_threads(jobs).build()?;
                pool.install(|| self.walk(first, second, Path::new(""), true))?
            }
            None => self.walk(first, second, Path::new(""), false)?,
        };

        info!(
            only_in_first = report.only_in_first.len(),
            only_in_second = report.only_in_second.len(),
            different = report.different.len(),
            identical = report.identical.len(),
            "comparison finished"
        );

        Ok(report)
    }

    fn walk(
        &self,
        first: &Workspace,
        second: &Workspace,
        relative: &Path,
        parallel: bool,
    ) -> CompareResult<ComparisonReport> {
        let first_listing = first.list_dir(relative)?;
        let second_listing = second.list_dir(relative)?;

        debug!(
            ?relative,
            first_files = first_listing.files.len(),
            second_files = second_listing.files.len(),
            "comparing directory"
        );

        let mut report = ComparisonReport::default();
        let checker = FileEqualityChecker::new(self.options);

        let files = NamePartition::of(&first_listing.files, &second_listing.files);

        report.only_in_first.extend(
            files
                .only_first
                .iter()
                .map(|name| Self::key(relative, name)),
        );
        report.only_in_second.extend(
            files
                .only_second
                .iter()
                .map(|name| Self::key(relative, name)),
        );

        for name in files.both {
            let path = relative.join(name);
            let key = Self::key(relative, name);

            match checker.compare_files(
                &first.file_path(&path),
                &second.file_path(&path),
                key.clone(),
            )? {
                FileComparison::Identical => report.identical.push(key),
                FileComparison::Different(difference) => report.different.push(difference),
            }
        }

        let dirs = NamePartition::of(&first_listing.dirs, &second_listing.dirs);

        let common = dirs
            .both
            .iter()
            .map(|name| relative.join(name))
            .collect::<Vec<PathBuf>>();

        let children = if parallel {
            common
                .par_iter()
                .map(|child| self.walk(first, second, child, parallel))
                .collect::<CompareResult<Vec<_>>>()?
        } else {
            common
                .iter()
                .map(|child| self.walk(first, second, child, parallel))
                .collect::<CompareResult<Vec<_>>>()?
        };

        for child in children {
            report.merge(child);
        }

        for name in dirs.only_first {
            report
                .only_in_first
                .extend(first.list_files(&relative.join(name))?);
        }

        for name in dirs.only_second {
            report
                .only_in_second
                .extend(second.list_files(&relative.join(name))?);
        }

        Ok(report)
    }

    fn key(relative: &Path, name: &OsString) -> RelativePath {
        RelativePath::from_path(relative).join(&name.to_string_lossy())
    }
}
