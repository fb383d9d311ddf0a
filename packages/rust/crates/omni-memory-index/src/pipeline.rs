//! Scan -> render -> write.
//!
//! Progress lines go to the supplied writer (stdout for the binary). The
//! index is rendered fully in memory before the destination is touched.

use std::fs;
use std::io::Write;

use crate::config::IndexConfig;
use crate::error::{IndexError, Result};
use crate::renderer::render_index;
use crate::scanner::MemoryScanner;

/// Regenerate the index described by `config`.
///
/// Returns the number of indexed notes.
///
/// # Errors
///
/// Returns the first scan or write failure; nothing is written if scanning
/// fails.
pub fn generate_index(config: &IndexConfig, progress: &mut impl Write) -> Result<usize> {
    let (content, count) = build_index(config, progress)?;

    report(progress, format_args!("写入 {}...", config.output.display()));
    fs::write(&config.output, content).map_err(|source| IndexError::Write {
        path: config.output.clone(),
        source,
    })?;

    report(progress, format_args!("完成！"));
    Ok(count)
}

/// Scan and render without writing. Returns the index text and note count.
///
/// # Errors
///
/// Returns the first scan failure.
pub fn build_index(config: &IndexConfig, progress: &mut impl Write) -> Result<(String, usize)> {
    report(progress, format_args!("扫描记忆文件..."));
    let records = MemoryScanner::new().scan(config.base_dir())?;
    report(progress, format_args!("找到 {} 条记忆", records.len()));

    report(progress, format_args!("生成索引..."));
    Ok((render_index(&records), records.len()))
}

/// Scan and serialize the records as pretty JSON.
///
/// # Errors
///
/// Returns the first scan failure or a serialization error.
pub fn records_json(config: &IndexConfig) -> Result<String> {
    let records = MemoryScanner::new().scan(config.base_dir())?;
    Ok(serde_json::to_string_pretty(&records)?)
}

// Progress output is best-effort.
fn report(progress: &mut impl Write, message: std::fmt::Arguments<'_>) {
    if let Err(e) = writeln!(progress, "{message}") {
        log::warn!("Failed to write progress message: {e}");
    }
}
