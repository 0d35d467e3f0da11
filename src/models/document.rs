use serde::{Deserialize, Serialize};

use super::{Profile, Project, Skill};

/// Site administrator credentials.
///
/// Only used for credential comparison; there is no route that edits it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Admin {
    pub username: String,
    /// Argon2 PHC string. Older data files store this under `password`.
    #[serde(rename = "passwordHash", alias = "password")]
    pub password_hash: String,
}

/// The whole site content, stored as a single JSON document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
    pub admin: Admin,
    pub profile: Profile,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
}
