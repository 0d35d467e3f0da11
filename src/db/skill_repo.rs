use std::collections::HashMap;

use super::split_list;
use crate::models::{Document, Skill, SKILL_SLOTS};

/// Raw values submitted for one skill slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillInput {
    pub category: String,
    /// Comma-delimited item list.
    pub items: String,
}

impl SkillInput {
    pub fn new(category: impl Into<String>, items: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            items: items.into(),
        }
    }

    /// Collects the slot inputs from flat form fields
    /// (`category1`, `items1`, ..., `category4`, `items4`).
    ///
    /// Always returns one input per slot; missing fields are empty.
    pub fn from_form(form: &HashMap<String, String>) -> Vec<SkillInput> {
        (1..=SKILL_SLOTS)
            .map(|slot| {
                let field = |prefix: &str| {
                    form.get(&format!("{}{}", prefix, slot))
                        .cloned()
                        .unwrap_or_default()
                };
                SkillInput {
                    category: field("category"),
                    items: field("items"),
                }
            })
            .collect()
    }
}

/// Replaces the skills with exactly [`SKILL_SLOTS`] entries built from `inputs`.
///
/// Slot `n` takes `inputs[n - 1]`; slots without an input become empty. The
/// previous skills are discarded, not merged.
pub fn replace_skills(doc: &mut Document, inputs: &[SkillInput]) {
    doc.skills = (1..=SKILL_SLOTS)
        .map(|slot| {
            let input = inputs.get(slot as usize - 1).cloned().unwrap_or_default();
            Skill::new(slot, input.category, split_list(&input.items))
        })
        .collect();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(doc: &Document) -> Vec<u32> {
        doc.skills.iter().map(|s| s.id).collect()
    }

    #[test]
    fn test_replace_skills_builds_four_slots() {
        let mut doc = Document::default();
        let inputs = vec![
            SkillInput::new("Languages", "Rust, Go"),
            SkillInput::new("Web", "HTML,CSS, ,"),
            SkillInput::new("Tools", ""),
            SkillInput::new("Other", " Git "),
        ];

        replace_skills(&mut doc, &inputs);

        assert_eq!(ids(&doc), vec![1, 2, 3, 4]);
        assert_eq!(doc.skills[0].category, "Languages");
        assert_eq!(doc.skills[0].items, vec!["Rust", "Go"]);
        assert_eq!(doc.skills[1].items, vec!["HTML", "CSS"]);
        assert!(doc.skills[2].items.is_empty());
        assert_eq!(doc.skills[3].items, vec!["Git"]);
    }

    #[test]
    fn test_replace_skills_discards_previous() {
        let mut doc = Document::default();
        doc.skills = (1..=6)
            .map(|i| Skill::new(i * 10, "stale", vec!["x".into()]))
            .collect();

        replace_skills(&mut doc, &[SkillInput::new("Fresh", "a")]);

        assert_eq!(ids(&doc), vec![1, 2, 3, 4]);
        assert_eq!(doc.skills[0].category, "Fresh");
        assert!(doc.skills[1..].iter().all(|s| s.category.is_empty()));
        assert!(doc.skills.iter().all(|s| s.category != "stale"));
    }

    #[test]
    fn test_from_form_reads_numbered_fields() {
        let mut form = HashMap::new();
        form.insert("category1".to_string(), "Languages".to_string());
        form.insert("items1".to_string(), "Rust".to_string());
        form.insert("category3".to_string(), "Tools".to_string());

        let inputs = SkillInput::from_form(&form);

        assert_eq!(inputs.len(), 4);
        assert_eq!(inputs[0], SkillInput::new("Languages", "Rust"));
        assert_eq!(inputs[1], SkillInput::default());
        assert_eq!(inputs[2], SkillInput::new("Tools", ""));
    }
}
