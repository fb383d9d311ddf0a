//! Index rendering.
//!
//! Turns the scanned records into `index.md`: a header, tables grouped by
//! system tag, tables grouped by category, and the static quick-search list.
//! Both groupings are read-only projections over the finished record slice.

use std::collections::BTreeMap;

use chrono::{Local, NaiveDate};

use crate::markers::{QUICK_SEARCH, SUMMARY_DISPLAY_CHARS, TAG_MARKER};
use crate::types::{MemoryCategory, MemoryRecord};

/// Render the index stamped with today's local date.
#[must_use]
pub fn render_index(records: &[MemoryRecord]) -> String {
    render(records, Local::now().date_naive())
}

/// Render the index for `records`, stamped with `date`.
///
/// Lines are joined with `\n` and the output has no trailing newline.
#[must_use]
pub fn render(records: &[MemoryRecord], date: NaiveDate) -> String {
    let mut lines: Vec<String> = vec![
        "# 记忆库索引".to_string(),
        String::new(),
        format!("> 更新时间: {}", date.format("%Y-%m-%d")),
        format!("> 总计: {} 条记忆", records.len()),
        String::new(),
        "---".to_string(),
        String::new(),
    ];

    lines.push("## 按系统域检索\n".to_string());
    for (tag, items) in group_by_system_tag(records) {
        lines.push(format!("### {tag} ({})", items.len()));
        lines.push("| 标题 | 分类 | 内容摘要 |".to_string());
        lines.push("|------|------|----------|".to_string());
        for record in items {
            let summary: String = record.summary.chars().take(SUMMARY_DISPLAY_CHARS).collect();
            lines.push(format!(
                "| [{}]({}) | {} | {summary}... |",
                record.title,
                record.link(),
                record.category
            ));
        }
        lines.push(String::new());
    }

    lines.push("---\n".to_string());
    lines.push("## 按分类检索\n".to_string());
    for (category, items) in group_by_category(records) {
        lines.push(format!("### {category} ({})", items.len()));
        lines.push(category.display_name().to_string());
        lines.push(String::new());
        lines.push("| 标题 | 标签 |".to_string());
        lines.push("|------|------|".to_string());
        for record in items {
            lines.push(format!(
                "| [{}]({}) | {} |",
                record.title,
                record.link(),
                record.tags.join(" ")
            ));
        }
        lines.push(String::new());
    }

    lines.push("---\n".to_string());
    lines.push("## 快速搜索\n".to_string());
    lines.push("**输入关键词**：\n".to_string());
    for (keyword, target) in QUICK_SEARCH {
        lines.push(format!(
            "- {keyword} → [{target}](#{})",
            target.trim_matches(TAG_MARKER)
        ));
    }

    lines.join("\n")
}

/// Records grouped by their first system tag, tags ascending, rows sorted by
/// title. Records without a system tag are left out.
#[must_use]
pub fn group_by_system_tag(records: &[MemoryRecord]) -> BTreeMap<&str, Vec<&MemoryRecord>> {
    let mut groups: BTreeMap<&str, Vec<&MemoryRecord>> = BTreeMap::new();
    for record in records {
        if let Some(tag) = record.system_tag() {
            groups.entry(tag).or_default().push(record);
        }
    }
    for items in groups.values_mut() {
        sort_by_title(items);
    }
    groups
}

/// Non-empty fixed categories in render order, rows sorted by title.
///
/// Records whose category text is not one of the fixed categories appear in
/// no group.
#[must_use]
pub fn group_by_category(records: &[MemoryRecord]) -> Vec<(MemoryCategory, Vec<&MemoryRecord>)> {
    MemoryCategory::ALL
        .into_iter()
        .filter_map(|category| {
            let mut items: Vec<&MemoryRecord> = records
                .iter()
                .filter(|r| r.category == category.as_str())
                .collect();
            if items.is_empty() {
                return None;
            }
            sort_by_title(&mut items);
            Some((category, items))
        })
        .collect()
}

fn sort_by_title(items: &mut [&MemoryRecord]) {
    items.sort_by(|a, b| a.title.cmp(&b.title));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, category: &str, tags: &[&str]) -> MemoryRecord {
        let mut record = MemoryRecord::new(category, format!("{title}.md"));
        record.title = title.to_string();
        record.tags = tags.iter().map(|t| (*t).to_string()).collect();
        record
    }

    #[test]
    fn test_group_by_system_tag_sorted() {
        let records = vec![
            record("b", "solutions", &["#kotlin"]),
            record("a", "lessons", &["#bug", "#kotlin", "#ecs"]),
            record("c", "lessons", &["#ecs"]),
            record("d", "lessons", &["#other"]),
        ];
        let groups = group_by_system_tag(&records);

        let tags: Vec<&str> = groups.keys().copied().collect();
        assert_eq!(tags, vec!["#ecs", "#kotlin"]);
        let kotlin: Vec<&str> = groups["#kotlin"].iter().map(|r| r.title.as_str()).collect();
        assert_eq!(kotlin, vec!["a", "b"]);
        assert_eq!(groups["#ecs"].len(), 1);
    }

    #[test]
    fn test_group_by_category_skips_unknown_and_empty() {
        let records = vec![
            record("x", "preferences", &[]),
            record("y", "misc", &[]),
            record("w", "conventions", &[]),
        ];
        let groups = group_by_category(&records);

        let order: Vec<MemoryCategory> = groups.iter().map(|(c, _)| *c).collect();
        assert_eq!(
            order,
            vec![MemoryCategory::Conventions, MemoryCategory::Preferences]
        );
    }

    #[test]
    fn test_render_header_and_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let output = render(&[], date);
        assert!(output.starts_with("# 记忆库索引\n\n> 更新时间: 2024-03-09\n> 总计: 0 条记忆\n\n---\n"));
        assert!(!output.ends_with('\n'));
    }
}
