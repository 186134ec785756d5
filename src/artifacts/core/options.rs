use derive_new::new;

/// Default chunk size used when streaming file contents.
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Comparison settings shared by the equality checker and the tree engine.
///
/// Built once per run and handed to both components by reference, so the two
/// can never disagree about the equality policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct CompareOptions {
    /// Require byte-exact content instead of the (size, mtime) heuristic.
    pub compare_content: bool,
    /// Worker count for fanning out sibling subdirectories; `None` or `Some(1)`
    /// keeps the walk on the calling thread.
    pub jobs: Option<usize>,
    #[new(value = "DEFAULT_CHUNK_SIZE")]
    chunk_size: usize,
}

impl Default for CompareOptions {
    fn default() -> Self {
        CompareOptions::new(false, None)
    }
}

impl CompareOptions {
    pub fn with_content(compare_content: bool) -> Self {
        CompareOptions::new(compare_content, None)
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Effective worker count when parallel fan-out was requested.
    pub fn parallelism(&self) -> Option<usize> {
        self.jobs.filter(|jobs| *jobs > 1)
    }
}
