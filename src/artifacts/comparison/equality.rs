//! File equality policy
//!
//! Two regular files are equal when their sizes match and either their
//! modification times match (metadata mode) or their bytes match (content
//! mode). Sizes are always compared first so that files of different length
//! are rejected without opening them.

use crate::artifacts::comparison::file_stat::FileStat;
use crate::artifacts::comparison::relative_path::RelativePath;
use crate::artifacts::comparison::report::FileDifference;
use crate::artifacts::core::{CompareError, CompareOptions, CompareResult};
use derive_new::new;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::trace;

/// Verdict for one pair of same-named files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileComparison {
    Identical,
    Different(FileDifference),
}

#[derive(Debug, Clone, Copy, new)]
pub struct FileEqualityChecker<'o> {
    options: &'o CompareOptions,
}

impl<'o> FileEqualityChecker<'o> {
    /// Decides whether two files are the same under the configured policy.
    ///
    /// A path that is missing or not a regular file at decision time makes the
    /// pair unequal rather than failing. Errors after that point (stat, open,
    /// read) are propagated.
    pub fn are_equal(&self, first: &Path, second: &Path) -> CompareResult<bool> {
        if !first.is_file() || !second.is_file() {
            trace!(?first, ?second, "not a regular file on one side");
            return Ok(false);
        }

        let verdict = self.compare_files(first, second, RelativePath::from_path(first))?;

        Ok(verdict == FileComparison::Identical)
    }

    /// Captures size and modification time of both files, and whether their
    /// contents match when content mode is on and the sizes are equal.
    ///
    /// Runs its own content pass; [`FileEqualityChecker::compare_files`]
    /// reuses the verdict of the equality pass instead.
    pub fn describe_difference(
        &self,
        first: &Path,
        second: &Path,
        relative_path: RelativePath,
    ) -> CompareResult<FileDifference> {
        let first_stat = FileStat::read(first)?;
        let second_stat = FileStat::read(second)?;

        let content_equal = if self.options.compare_content && first_stat.size == second_stat.size {
            Some(self.contents_match(first, second)?)
        } else {
            None
        };

        Ok(FileDifference::from_stats(
            relative_path,
            &first_stat,
            &second_stat,
            content_equal,
        ))
    }

    /// Equality decision and difference record in one pass over the files.
    pub fn compare_files(
        &self,
        first: &Path,
        second: &Path,
        relative_path: RelativePath,
    ) -> CompareResult<FileComparison> {
        if !first.is_file() || !second.is_file() {
            // The pair is unequal; describing it stats both files, which fails
            // if one of them has vanished in the meantime.
            return self
                .describe_difference(first, second, relative_path)
                .map(FileComparison::Different);
        }

        let first_stat = FileStat::read(first)?;
        let second_stat = FileStat::read(second)?;

        let (equal, content_equal) = match (
            first_stat.size == second_stat.size,
            self.options.compare_content,
        ) {
            (false, _) => (false, None),
            (true, false) => (first_stat.times_match(&second_stat), None),
            (true, true) => {
                let matched = self.contents_match(first, second)?;
                (matched, Some(matched))
            }
        };

        trace!(path = %relative_path, equal, "compared files");

        if equal {
            Ok(FileComparison::Identical)
        } else {
            Ok(FileComparison::Different(FileDifference::from_stats(
                relative_path,
                &first_stat,
                &second_stat,
                content_equal,
            )))
        }
    }

    fn contents_match(&self, first: &Path, second: &Path) -> CompareResult<bool> {
        let first_file = File::open(first).map_err(|e| CompareError::io(first, e))?;
        let second_file = File::open(second).map_err(|e| CompareError::io(second, e))?;

        streams_match(first_file, second_file, self.options.chunk_size()).map_err(|e| match e {
            StreamError::First(e) => CompareError::io(first, e),
            StreamError::Second(e) => CompareError::io(second, e),
        })
    }
}

#[derive(Debug)]
enum StreamError {
    First(io::Error),
    Second(io::Error),
}

/// Compares two byte streams chunk by chunk, stopping at the first mismatch.
fn streams_match(
    mut first: impl Read,
    mut second: impl Read,
    chunk_size: usize,
) -> Result<bool, StreamError> {
    let mut first_buf = vec![0u8; chunk_size];
    let mut second_buf = vec![0u8; chunk_size];

    loop {
        let first_len = read_chunk(&mut first, &mut first_buf).map_err(StreamError::First)?;
        let second_len = read_chunk(&mut second, &mut second_buf).map_err(StreamError::Second)?;

        if first_len != second_len || first_buf[..first_len] != second_buf[..second_len] {
            return Ok(false);
        }

        if first_len == 0 {
            return Ok(true);
        }
    }
}

// Fills the buffer unless the stream ends first, so that a reader returning
// short reads does not look like a length mismatch.
fn read_chunk(reader: &mut impl Read, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;

    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }

    Ok(filled)
}
