//! Site content storage: the JSON data file and the in-memory record
//! operations applied to it between load and save.

mod profile_repo;
mod project_repo;
mod skill_repo;
mod store;

pub use profile_repo::{replace_profile, ProfileFields};
pub use project_repo::{
    delete_project, find_project, list_projects, next_project_id, save_project, ProjectFields,
    SaveOutcome,
};
pub use skill_repo::{replace_skills, SkillInput};
pub use store::{DataStore, StoreError};

/// Splits a comma-delimited form value into trimmed, non-empty entries.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
