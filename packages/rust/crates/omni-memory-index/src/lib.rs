//! Omni-Memory-Index - Memory bank index generation.
//!
//! Scans `docs/memory-bank/` notes, extracts the metadata written in their
//! marker lines, and regenerates `index.md`.
//!
//! # Architecture
//!
//! ```text
//! omni-memory-index/src/
//! ├── lib.rs        # Main module and exports
//! ├── main.rs       # CLI entry point
//! ├── config.rs     # IndexConfig (base dir, output path)
//! ├── error.rs      # IndexError
//! ├── markers.rs    # Line markers, system tags, quick-search table
//! ├── types.rs      # MemoryCategory, MemoryRecord
//! ├── extractor.rs  # Note text -> MemoryRecord
//! ├── scanner.rs    # MemoryScanner over the category directories
//! ├── renderer.rs   # Records -> index.md text
//! └── pipeline.rs   # scan -> render -> write
//! ```
//!
//! # Note Format
//!
//! ```text
//! ## Fix race condition
//! > 创建时间: 2024-01-01
//! > 标签: #ecs #bug
//! **问题/背景**:
//! Workers read stale state.
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod config;
pub mod error;
pub mod extractor;
pub mod markers;
pub mod pipeline;
pub mod renderer;
pub mod scanner;
pub mod types;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::{DEFAULT_BASE_DIR, IndexConfig};
pub use error::{IndexError, Result};
pub use extractor::extract;
pub use pipeline::{build_index, generate_index, records_json};
pub use renderer::{group_by_category, group_by_system_tag, render, render_index};
pub use scanner::MemoryScanner;
pub use types::{MemoryCategory, MemoryRecord};

// ============================================================================
// Version
// ============================================================================

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
