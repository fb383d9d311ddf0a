//! Memory Scanner - Collects note metadata from a memory-bank directory.
//!
//! # Layout
//!
//! ```text
//! docs/memory-bank/
//! ├── index.md          # generated, never scanned
//! ├── conventions/*.md
//! ├── solutions/*.md
//! ├── lessons/*.md
//! └── preferences/*.md
//! ```
//!
//! # Example
//!
//! ```ignore
//! use omni_memory_index::MemoryScanner;
//!
//! let records = MemoryScanner::new().scan(Path::new("docs/memory-bank"))?;
//! for record in &records {
//!     println!("{} -> {}", record.title, record.link());
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{IndexError, Result};
use crate::extractor::extract;
use crate::markers::{INDEX_FILE_NAME, NOTE_EXTENSION};
use crate::types::{MemoryCategory, MemoryRecord};

/// Memory Scanner - Reads every note under the four category directories.
///
/// Missing category directories are skipped. Any unreadable note aborts the
/// whole scan.
#[derive(Debug)]
pub struct MemoryScanner;

impl MemoryScanner {
    /// Create a new memory scanner.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Scan all categories under `base_path`, in fixed category order.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory cannot be listed or a note cannot be
    /// read as UTF-8 text.
    pub fn scan(&self, base_path: &Path) -> Result<Vec<MemoryRecord>> {
        let mut records = Vec::new();

        for category in MemoryCategory::ALL {
            records.extend(self.scan_category(base_path, category)?);
        }

        log::info!(
            "Scanned {} memory notes from {}",
            records.len(),
            base_path.display()
        );

        Ok(records)
    }

    /// Scan a single category directory.
    ///
    /// Returns an empty list when the directory does not exist.
    ///
    /// # Errors
    ///
    /// Same as [`MemoryScanner::scan`].
    pub fn scan_category(
        &self,
        base_path: &Path,
        category: MemoryCategory,
    ) -> Result<Vec<MemoryRecord>> {
        let category_dir = base_path.join(category.as_str());
        if !category_dir.is_dir() {
            log::debug!("Skipping missing category directory: {}", category_dir.display());
            return Ok(Vec::new());
        }

        let mut records = Vec::new();
        for path in note_files(&category_dir)? {
            let record = self.scan_note(&path, category.as_str())?;
            if record.title.is_empty() {
                log::debug!("Skipping untitled note: {}", path.display());
                continue;
            }
            records.push(record);
        }

        Ok(records)
    }

    /// Read and extract one note.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::Read`] or [`IndexError::Encoding`].
    pub fn scan_note(&self, path: &Path, default_category: &str) -> Result<MemoryRecord> {
        let bytes = fs::read(path).map_err(|source| IndexError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let content = String::from_utf8(bytes).map_err(|_| IndexError::Encoding {
            path: path.to_path_buf(),
        })?;

        let file = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        log::debug!("Extracting {}", path.display());
        Ok(extract(&content, default_category, &file))
    }
}

impl Default for MemoryScanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Direct `*.md` children of `dir`, sorted by name, excluding `index.md`.
fn note_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type().is_file()
            || path.extension().is_none_or(|ext| ext != NOTE_EXTENSION)
            || entry.file_name() == INDEX_FILE_NAME
        {
            continue;
        }
        files.push(path.to_path_buf());
    }

    Ok(files)
}
