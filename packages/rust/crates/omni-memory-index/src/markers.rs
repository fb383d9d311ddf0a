//! Line markers and static index tables.
//!
//! Centralized definitions for note parsing and the fixed index sections.

/// Note title heading: `## <title>`
pub const TITLE_PREFIX: &str = "## ";
/// Creation date line: `> 创建时间: <date>`
pub const CREATED_PREFIX: &str = "> 创建时间:";
/// Category override line: `> 分类: <category>`
pub const CATEGORY_PREFIX: &str = "> 分类:";
/// Status line: `> 状态: <status>`
pub const STATUS_PREFIX: &str = "> 状态:";
/// Tags line: `> 标签: #a #b`
pub const TAGS_PREFIX: &str = "> 标签:";
/// Problem/background field, followed by the summary text.
pub const PROBLEM_PREFIX: &str = "**问题/背景**:";
/// Any bold field start; ends summary capture.
pub const BOLD_FIELD_PREFIX: &str = "**";

/// Tag tokens start with this character.
pub const TAG_MARKER: char = '#';

/// Status used when a note does not declare one.
pub const DEFAULT_STATUS: &str = "active";

/// Number of lines after the problem marker considered for the summary.
pub const SUMMARY_MAX_LINES: usize = 3;
/// Stored summary length, in characters.
pub const SUMMARY_MAX_CHARS: usize = 50;
/// Summary length shown in the system-domain tables, in characters.
pub const SUMMARY_DISPLAY_CHARS: usize = 30;

/// Note file extension.
pub const NOTE_EXTENSION: &str = "md";
/// Generated index file name; never read back as a note.
pub const INDEX_FILE_NAME: &str = "index.md";

/// Tags that form the "by system domain" groups.
pub const SYSTEM_TAGS: &[&str] = &[
    "#角色系统",
    "#经济系统",
    "#战斗系统",
    "#功法系统",
    "#设施系统",
    "#可玩性",
    "#ecs",
    "#kotlin",
    "#compose",
    "#测试",
    "#记忆库",
    "#规范",
];

/// Keyword -> target pairs of the quick-search section, in display order.
pub const QUICK_SEARCH: &[(&str, &str)] = &[
    ("弟子/角色", "#角色系统"),
    ("经济/灵石", "#经济系统"),
    ("战斗", "#战斗系统"),
    ("功法", "#功法系统"),
    ("设施", "#设施系统"),
    ("ecs", "#ecs"),
    ("kotlin", "#kotlin"),
    ("compose", "#compose"),
    ("bug/错误", "lessons"),
];

/// Returns true if `tag` is one of [`SYSTEM_TAGS`].
#[must_use]
pub fn is_system_tag(tag: &str) -> bool {
    SYSTEM_TAGS.contains(&tag)
}
