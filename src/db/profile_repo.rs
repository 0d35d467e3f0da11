use serde::Deserialize;

use crate::models::{Document, Profile};

/// Editable profile fields as submitted by the admin form.
///
/// Missing fields come through as empty strings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProfileFields {
    pub name: String,
    pub title: String,
    pub subtitle: String,
    pub email: String,
    pub github: String,
    pub linkedin: String,
    pub instagram: String,
    pub youtube: String,
    pub bio1: String,
    pub bio2: String,
    pub bio3: String,
}

/// Overwrites every editable profile field.
///
/// The bio is always rebuilt as three paragraphs. Keys outside the form are
/// left as they were.
pub fn replace_profile(doc: &mut Document, fields: ProfileFields) {
    let extra = std::mem::take(&mut doc.profile.extra);

    doc.profile = Profile {
        name: fields.name,
        title: fields.title,
        subtitle: fields.subtitle,
        email: fields.email,
        github: fields.github,
        linkedin: fields.linkedin,
        instagram: fields.instagram,
        youtube: fields.youtube,
        bio: vec![fields.bio1, fields.bio2, fields.bio3],
        extra,
    };
}
