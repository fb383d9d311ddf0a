//! Memory Bank Types
//!
//! Defines the fixed note categories and the per-note metadata record.

use serde::{Deserialize, Serialize};

/// The four memory-bank categories, one subdirectory each.
///
/// Declaration order is the scan and render order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MemoryCategory {
    /// Technical conventions and agreements
    Conventions,
    /// Problem solutions
    Solutions,
    /// Lessons learned from mistakes
    Lessons,
    /// User preferences
    Preferences,
}

impl MemoryCategory {
    /// All categories in scan/render order.
    pub const ALL: [Self; 4] = [
        Self::Conventions,
        Self::Solutions,
        Self::Lessons,
        Self::Preferences,
    ];

    /// Subdirectory name, also the category text stored on records.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Conventions => "conventions",
            Self::Solutions => "solutions",
            Self::Lessons => "lessons",
            Self::Preferences => "preferences",
        }
    }

    /// Heading text shown under the category in the index.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Conventions => "技术规范与约定",
            Self::Solutions => "问题解决方案",
            Self::Lessons => "错误教训",
            Self::Preferences => "用户偏好",
        }
    }
}

impl std::str::FromStr for MemoryCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "conventions" => Ok(Self::Conventions),
            "solutions" => Ok(Self::Solutions),
            "lessons" => Ok(Self::Lessons),
            "preferences" => Ok(Self::Preferences),
            other => Err(format!("unknown memory category: {other}")),
        }
    }
}

impl std::fmt::Display for MemoryCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata extracted from one memory note.
///
/// Built once per run by the extractor and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MemoryRecord {
    /// Note title from the first `## ` heading
    pub title: String,
    /// Category text; the containing directory unless the note overrides it
    pub category: String,
    /// `#`-prefixed tags in source order
    #[serde(default)]
    pub tags: Vec<String>,
    /// Lifecycle status
    pub status: String,
    /// Free-form creation date
    #[serde(default)]
    pub created: String,
    /// Short problem/background summary (at most 50 characters)
    #[serde(default)]
    pub summary: String,
    /// File name within the category directory
    pub file: String,
}

impl MemoryRecord {
    /// Create an empty record for `file` in `category`.
    #[must_use]
    pub fn new(category: impl Into<String>, file: impl Into<String>) -> Self {
        Self {
            title: String::new(),
            category: category.into(),
            tags: Vec::new(),
            status: crate::markers::DEFAULT_STATUS.to_string(),
            created: String::new(),
            summary: String::new(),
            file: file.into(),
        }
    }

    /// Relative link from the index to the note: `category/file`.
    #[must_use]
    pub fn link(&self) -> String {
        format!("{}/{}", self.category, self.file)
    }

    /// First tag that belongs to the system tag set, in the record's tag order.
    #[must_use]
    pub fn system_tag(&self) -> Option<&str> {
        self.tags
            .iter()
            .map(String::as_str)
            .find(|tag| crate::markers::is_system_tag(tag))
    }
}
