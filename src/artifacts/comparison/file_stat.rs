use crate::artifacts::core::{CompareError, CompareResult};
use chrono::{DateTime, Utc};
use std::fs::Metadata;
use std::path::Path;

/// The slice of file metadata the comparison looks at.
///
/// `modified` keeps whatever precision the filesystem exposes (nanoseconds on
/// most Unix filesystems) and is normalised to UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStat {
    pub size: u64,
    pub modified: DateTime<Utc>,
}

impl FileStat {
    pub fn read(path: &Path) -> CompareResult<Self> {
        let metadata = std::fs::metadata(path).map_err(|e| CompareError::io(path, e))?;

        (path, metadata).try_into()
    }

    pub fn times_match(&self, other: &FileStat) -> bool {
        self.modified == other.modified
    }
}

impl TryFrom<(&Path, Metadata)> for FileStat {
    type Error = CompareError;

    fn try_from((path, metadata): (&Path, Metadata)) -> Result<Self, Self::Error> {
        let modified = metadata.modified().map_err(|e| CompareError::io(path, e))?;

        Ok(FileStat {
            size: metadata.len(),
            modified: DateTime::<Utc>::from(modified),
        })
    }
}
