//! View state for the skills and projects sections.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    #[default]
    All,
    Frontend,
    Backend,
    Cloud,
    Tools,
}

impl SkillCategory {
    /// Filter chips in display order.
    pub const ALL: [SkillCategory; 5] = [
        SkillCategory::All,
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Cloud,
        SkillCategory::Tools,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SkillCategory::All => "All Skills",
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Backend => "Backend",
            SkillCategory::Cloud => "Cloud & DB",
            SkillCategory::Tools => "Tools",
        }
    }

    /// Whether an item tagged `category` shows under this filter.
    pub fn admits(&self, category: SkillCategory) -> bool {
        *self == SkillCategory::All || *self == category
    }
}

pub trait Categorized {
    fn category(&self) -> SkillCategory;
}

/// Items visible under `filter`, in their original order.
pub fn filter_by<T: Categorized>(items: &[T], filter: SkillCategory) -> Vec<&T> {
    items
        .iter()
        .filter(|item| filter.admits(item.category()))
        .collect()
}

/// Which project card, if any, shows its full description. At most one is
/// open at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProjectExpansion {
    expanded: Option<usize>,
}

impl ProjectExpansion {
    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }

    /// Open `index`, or close it if it is the open one.
    pub fn toggle(&mut self, index: usize) {
        self.expanded = if self.is_expanded(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn toggle_label(&self, index: usize) -> &'static str {
        if self.is_expanded(index) {
            "Show Less"
        } else {
            "Read More"
        }
    }
}
