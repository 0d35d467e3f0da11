use serde::{Deserialize, Serialize};

/// Number of fixed skill slots on the site.
pub const SKILL_SLOTS: u32 = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    /// Slot number, 1 through [`SKILL_SLOTS`].
    pub id: u32,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub items: Vec<String>,
}

impl Skill {
    pub fn new(id: u32, category: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            id,
            category: category.into(),
            items,
        }
    }
}
