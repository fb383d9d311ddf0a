//! Tests for renderer module - index.md generation.

use chrono::NaiveDate;
use omni_memory_index::{MemoryRecord, render};

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()
}

fn record(title: &str, category: &str, file: &str, tags: &[&str], summary: &str) -> MemoryRecord {
    let mut record = MemoryRecord::new(category, file);
    record.title = title.to_string();
    record.tags = tags.iter().map(|t| (*t).to_string()).collect();
    record.summary = summary.to_string();
    record
}

const QUICK_SEARCH_SECTION: &str = "---

## 快速搜索

**输入关键词**：

- 弟子/角色 → [#角色系统](#角色系统)
- 经济/灵石 → [#经济系统](#经济系统)
- 战斗 → [#战斗系统](#战斗系统)
- 功法 → [#功法系统](#功法系统)
- 设施 → [#设施系统](#设施系统)
- ecs → [#ecs](#ecs)
- kotlin → [#kotlin](#kotlin)
- compose → [#compose](#compose)
- bug/错误 → [lessons](#lessons)";

/// Test the exact output for an empty corpus.
#[test]
fn test_render_empty_corpus() {
    let output = render(&[], date());

    let expected = format!(
        "# 记忆库索引

> 更新时间: 2024-01-02
> 总计: 0 条记忆

---

## 按系统域检索

---

## 按分类检索

{QUICK_SEARCH_SECTION}"
    );
    assert_eq!(output, expected);
}

/// Test the exact output for a single note.
#[test]
fn test_render_single_record() {
    let records = vec![record(
        "Fix race condition",
        "solutions",
        "foo.md",
        &["#ecs", "#bug"],
        "Workers read stale state.",
    )];

    let output = render(&records, date());

    let expected = format!(
        "# 记忆库索引

> 更新时间: 2024-01-02
> 总计: 1 条记忆

---

## 按系统域检索

### #ecs (1)
| 标题 | 分类 | 内容摘要 |
|------|------|----------|
| [Fix race condition](solutions/foo.md) | solutions | Workers read stale state.... |

---

## 按分类检索

### solutions (1)
问题解决方案

| 标题 | 标签 |
|------|------|
| [Fix race condition](solutions/foo.md) | #ecs #bug |

{QUICK_SEARCH_SECTION}"
    );
    assert_eq!(output, expected);
}

/// Test that a record lands in exactly one system group.
#[test]
fn test_render_single_system_group_per_record() {
    let records = vec![record(
        "Multi",
        "lessons",
        "m.md",
        &["#bug", "#kotlin", "#ecs", "#compose"],
        "",
    )];

    let output = render(&records, date());

    assert!(output.contains("### #kotlin (1)"));
    assert!(!output.contains("### #ecs"));
    assert!(!output.contains("### #compose"));
    assert_eq!(output.matches("[Multi](lessons/m.md)").count(), 2);
}

/// Test that system-domain summaries are cut at 30 characters.
#[test]
fn test_render_summary_display_truncation() {
    let summary = "abcdefghijklmnopqrstuvwxyz0123456789";
    let records = vec![record("S", "lessons", "s.md", &["#测试"], summary)];

    let output = render(&records, date());

    assert!(output.contains("| [S](lessons/s.md) | lessons | abcdefghijklmnopqrstuvwxyz0123... |"));
}

/// Test ordering of groups and rows.
#[test]
fn test_render_sorting() {
    let records = vec![
        record("Zeta", "solutions", "z.md", &["#kotlin"], ""),
        record("Alpha", "solutions", "a.md", &["#kotlin"], ""),
        record("Beta", "conventions", "b.md", &["#compose"], ""),
    ];

    let output = render(&records, date());

    let compose = output.find("### #compose (1)").unwrap();
    let kotlin = output.find("### #kotlin (2)").unwrap();
    assert!(compose < kotlin);

    let alpha = output.find("| [Alpha](solutions/a.md) | solutions |").unwrap();
    let zeta = output.find("| [Zeta](solutions/z.md) | solutions |").unwrap();
    assert!(alpha < zeta);

    let conventions = output.find("### conventions (1)").unwrap();
    let solutions = output.find("### solutions (2)").unwrap();
    assert!(conventions < solutions);
    assert!(!output.contains("### lessons"));
}

/// Test records with untagged and unknown categories.
#[test]
fn test_render_unknown_category_only_counted() {
    let records = vec![record("Odd", "misc", "o.md", &[], "")];

    let output = render(&records, date());

    assert!(output.contains("> 总计: 1 条记忆"));
    assert!(!output.contains("[Odd]"));
}
