use crate::artifacts::comparison::relative_path::RelativePath;
use crate::artifacts::core::{CompareError, CompareResult};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::trace;
use walkdir::WalkDir;

/// Immediate children of one directory, split by kind.
///
/// Names are kept as the filesystem reports them so that matching across the
/// two sides is exact and case-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirListing {
    pub files: Vec<OsString>,
    pub dirs: Vec<OsString>,
}

/// One side of a comparison: a root directory and read-only access below it.
#[derive(Debug, Clone)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    /// Validates that `path` is an existing directory before wrapping it.
    pub fn open(path: &Path) -> CompareResult<Self> {
        if !path.exists() {
            return Err(CompareError::RootNotFound(path.to_path_buf()));
        }

        if !path.is_dir() {
            return Err(CompareError::RootNotADirectory(path.to_path_buf()));
        }

        Ok(Workspace::new(path.to_path_buf().into_boxed_path()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_path(&self, relative: &Path) -> PathBuf {
        if relative.as_os_str().is_empty() {
            self.path.to_path_buf()
        } else {
            self.path.join(relative)
        }
    }

    /// Lists the files and subdirectories directly under `relative`.
    ///
    /// A directory that does not exist on this side lists as empty. Symbolic
    /// links are classified by their target; anything that is neither a
    /// regular file nor a directory is skipped.
    pub fn list_dir(&self, relative: &Path) -> CompareResult<DirListing> {
        let dir_path = self.file_path(relative);

        if !dir_path.is_dir() {
            return Ok(DirListing::default());
        }

        let mut listing = DirListing::default();

        for entry in std::fs::read_dir(&dir_path).map_err(|e| CompareError::io(&dir_path, e))? {
            let entry = entry.map_err(|e| CompareError::io(&dir_path, e))?;
            let path = entry.path();

            if path.is_file() {
                listing.files.push(entry.file_name());
            } else if path.is_dir() {
                listing.dirs.push(entry.file_name());
            }
        }

        Ok(listing)
    }

    /// Every regular file below `relative`, recursively, keyed relative to
    /// this workspace's root. Nested directories are not reported themselves.
    ///
    /// Links are followed like in [`Workspace::list_dir`]; a link whose target
    /// is gone is skipped, while loops and other I/O errors abort the walk.
    pub fn list_files(&self, relative: &Path) -> CompareResult<Vec<RelativePath>> {
        let dir_path = self.file_path(relative);
        let mut files = Vec::new();

        for entry in WalkDir::new(&dir_path).follow_links(true) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if is_dangling_link(&e) => {
                    trace!(path = ?e.path(), "skipping dangling link");
                    continue;
                }
                Err(e) => return Err(CompareError::walk(&dir_path, e)),
            };

            if !entry.file_type().is_file() {
                continue;
            }

            if let Ok(stripped) = entry.path().strip_prefix(self.path.as_ref()) {
                files.push(RelativePath::from_path(stripped));
            }
        }

        Ok(files)
    }
}

fn is_dangling_link(error: &walkdir::Error) -> bool {
    error.depth() > 0
        && error.loop_ancestor().is_none()
        && error
            .path()
            .is_some_and(|path| path.is_symlink() && !path.exists())
}
