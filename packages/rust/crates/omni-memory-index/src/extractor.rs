//! Note Metadata Extraction
//!
//! Line-oriented scanner over a memory note. Recognized lines are matched by
//! exact prefix after trimming; everything else is ignored.
//!
//! ```text
//! ## Fix race condition
//! > 创建时间: 2024-01-01
//! > 分类: solutions
//! > 状态: active
//! > 标签: #ecs #bug
//! **问题/背景**:
//! Workers read stale state.
//! ```

use crate::markers::{
    BOLD_FIELD_PREFIX, CATEGORY_PREFIX, CREATED_PREFIX, PROBLEM_PREFIX, STATUS_PREFIX,
    SUMMARY_MAX_CHARS, SUMMARY_MAX_LINES, TAG_MARKER, TAGS_PREFIX, TITLE_PREFIX,
};
use crate::types::MemoryRecord;

/// Extract a [`MemoryRecord`] from note text.
///
/// `default_category` is used unless the note declares a non-empty category.
/// `file` is stored as-is for link construction.
///
/// Scanning stops as soon as both a title and at least one tag are known, so
/// fields declared after that point are not captured.
#[must_use]
pub fn extract(content: &str, default_category: &str, file: &str) -> MemoryRecord {
    let mut record = MemoryRecord::new(default_category, file);
    let lines: Vec<&str> = content.split('\n').collect();

    for (i, raw) in lines.iter().enumerate() {
        let line = raw.trim();

        if let Some(title) = line.strip_prefix(TITLE_PREFIX) {
            if record.title.is_empty() {
                record.title = title.trim().to_string();
            }
        } else if line.starts_with(CREATED_PREFIX) {
            record.created = field_value(line);
        } else if line.starts_with(CATEGORY_PREFIX) {
            let category = field_value(line);
            if !category.is_empty() {
                record.category = category;
            }
        } else if line.starts_with(STATUS_PREFIX) {
            record.status = field_value(line);
        } else if line.starts_with(TAGS_PREFIX) {
            record.tags = parse_tags(&field_value(line));
        } else if line.starts_with(PROBLEM_PREFIX) {
            record.summary = capture_summary(&lines[i + 1..]);
        }

        if !record.title.is_empty() && !record.tags.is_empty() {
            break;
        }
    }

    record
}

/// Text after the first `:`, trimmed.
fn field_value(line: &str) -> String {
    line.split_once(':')
        .map(|(_, value)| value.trim().to_string())
        .unwrap_or_default()
}

fn parse_tags(value: &str) -> Vec<String> {
    value
        .split_whitespace()
        .filter(|token| token.starts_with(TAG_MARKER))
        .map(str::to_string)
        .collect()
}

/// Join up to three following lines, stopping at a blank line or a new bold
/// field, then truncate to [`SUMMARY_MAX_CHARS`].
fn capture_summary(following: &[&str]) -> String {
    following
        .iter()
        .take(SUMMARY_MAX_LINES)
        .take_while(|raw| !raw.starts_with(BOLD_FIELD_PREFIX) && !raw.trim().is_empty())
        .map(|raw| raw.trim())
        .collect::<String>()
        .chars()
        .take(SUMMARY_MAX_CHARS)
        .collect()
}
