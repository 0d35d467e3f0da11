use serde::Deserialize;

use super::split_list;
use crate::models::{Document, Project};

/// Project fields as submitted by the admin form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProjectFields {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub description: String,
    /// Comma-delimited technology list.
    pub technologies: String,
    pub link: String,
    pub image: String,
}

impl ProjectFields {
    fn into_project(self, id: u64) -> Project {
        Project {
            id,
            kind: self.kind,
            title: self.title,
            description: self.description,
            technologies: split_list(&self.technologies),
            link: self.link,
            image: self.image,
        }
    }
}

/// Result of [`save_project`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// A new project was appended with this id.
    Created(u64),
    /// The existing project with this id was replaced.
    Updated(u64),
    /// No project has this id. The document was not changed.
    NotFound(u64),
}

impl SaveOutcome {
    /// Returns true if the document was modified and needs saving.
    pub fn is_changed(&self) -> bool {
        !matches!(self, SaveOutcome::NotFound(_))
    }
}

/// Projects in insertion order.
pub fn list_projects(doc: &Document) -> &[Project] {
    &doc.projects
}

pub fn find_project(doc: &Document, id: u64) -> Option<&Project> {
    doc.projects.iter().find(|p| p.id == id)
}

/// Id the next created project receives: one past the highest id, or 1.
pub fn next_project_id(doc: &Document) -> u64 {
    doc.projects.iter().map(|p| p.id).max().unwrap_or(0) + 1
}

/// Updates the project with `id` in place, or appends a new one when `id` is
/// `None`.
///
/// An `id` that matches nothing is rejected rather than treated as a create.
pub fn save_project(doc: &mut Document, id: Option<u64>, fields: ProjectFields) -> SaveOutcome {
    match id {
        Some(id) => match doc.projects.iter_mut().find(|p| p.id == id) {
            Some(existing) => {
                *existing = fields.into_project(id);
                SaveOutcome::Updated(id)
            }
            None => SaveOutcome::NotFound(id),
        },
        None => {
            let id = next_project_id(doc);
            doc.projects.push(fields.into_project(id));
            SaveOutcome::Created(id)
        }
    }
}

/// Removes the project with `id`. Returns true if one was removed.
pub fn delete_project(doc: &mut Document, id: u64) -> bool {
    let before = doc.projects.len();
    doc.projects.retain(|p| p.id != id);
    doc.projects.len() != before
}
