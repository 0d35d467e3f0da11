mod document;
mod profile;
mod project;
mod skill;

pub use document::{Admin, Document};
pub use profile::Profile;
pub use project::Project;
pub use skill::{Skill, SKILL_SLOTS};
