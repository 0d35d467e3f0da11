use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The site owner's public profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub subtitle: String,
    pub email: String,
    pub github: String,
    pub linkedin: String,
    pub instagram: String,
    pub youtube: String,
    /// Three paragraphs once edited through the admin panel.
    pub bio: Vec<String>,
    /// Keys the admin form does not know about. Kept across edits.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_keys_survive_roundtrip() {
        let raw = json!({
            "name": "Jane",
            "bio": ["a", "b", "c"],
            "avatar": "/img/jane.png"
        });

        let profile: Profile = serde_json::from_value(raw).unwrap();
        assert_eq!(profile.name, "Jane");
        assert_eq!(profile.extra["avatar"], "/img/jane.png");

        let back = serde_json::to_value(&profile).unwrap();
        assert_eq!(back["avatar"], "/img/jane.png");
        assert_eq!(back["bio"], json!(["a", "b", "c"]));
    }
}
