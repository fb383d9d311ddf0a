//! Index locations.

use std::path::{Path, PathBuf};

use crate::markers::INDEX_FILE_NAME;

/// Memory-bank directory relative to the project root.
pub const DEFAULT_BASE_DIR: &str = "docs/memory-bank";

/// Where notes are read from and where the index is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexConfig {
    /// Directory holding the category subdirectories.
    pub base_dir: PathBuf,
    /// Destination of the generated index.
    pub output: PathBuf,
}

impl IndexConfig {
    /// Config for `base_dir` with the index at `base_dir/index.md`.
    #[must_use]
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        let base_dir = base_dir.into();
        let output = base_dir.join(INDEX_FILE_NAME);
        Self { base_dir, output }
    }

    /// Write the index somewhere other than the base directory.
    #[must_use]
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Directory notes are read from.
    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_DIR)
    }
}
