use crate::artifacts::comparison::file_stat::FileStat;
use crate::artifacts::comparison::relative_path::RelativePath;
use chrono::{DateTime, Utc};

/// One file present on both sides that was judged not equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDifference {
    pub relative_path: RelativePath,
    pub size1: u64,
    pub size2: u64,
    pub modified1: DateTime<Utc>,
    pub modified2: DateTime<Utc>,
    /// `Some` only when content was compared, which happens in content mode
    /// for files of equal size.
    pub content_equal: Option<bool>,
}

impl FileDifference {
    pub fn from_stats(
        relative_path: RelativePath,
        first: &FileStat,
        second: &FileStat,
        content_equal: Option<bool>,
    ) -> Self {
        FileDifference {
            relative_path,
            size1: first.size,
            size2: second.size,
            modified1: first.modified,
            modified2: second.modified,
            content_equal,
        }
    }

    pub fn sizes_match(&self) -> bool {
        self.size1 == self.size2
    }

    pub fn times_match(&self) -> bool {
        self.modified1 == self.modified2
    }

    /// The same difference seen from the other side.
    pub fn swapped(&self) -> Self {
        FileDifference {
            relative_path: self.relative_path.clone(),
            size1: self.size2,
            size2: self.size1,
            modified1: self.modified2,
            modified2: self.modified1,
            content_equal: self.content_equal,
        }
    }
}

/// Outcome of one comparison run.
///
/// Each relative path found under either root lands in exactly one bucket.
/// Bucket order follows directory-listing order; call [`ComparisonReport::sort`]
/// before relying on it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComparisonReport {
    pub only_in_first: Vec<RelativePath>,
    pub only_in_second: Vec<RelativePath>,
    pub different: Vec<FileDifference>,
    pub identical: Vec<RelativePath>,
}

impl ComparisonReport {
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    pub fn total(&self) -> usize {
        self.only_in_first.len()
            + self.only_in_second.len()
            + self.different.len()
            + self.identical.len()
    }

    /// Appends a partial report produced for a subtree.
    pub fn merge(&mut self, other: ComparisonReport) {
        self.only_in_first.extend(other.only_in_first);
        self.only_in_second.extend(other.only_in_second);
        self.different.extend(other.different);
        self.identical.extend(other.identical);
    }

    pub fn sort(&mut self) {
        self.only_in_first.sort();
        self.only_in_second.sort();
        self.different
            .sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
        self.identical.sort();
    }

    pub fn sorted(mut self) -> Self {
        self.sort();
        self
    }
}
