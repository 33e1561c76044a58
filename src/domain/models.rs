use serde_json::Value;

/// Birth details captured from the bio form.
///
/// All fields are opaque text; the form only requires them to be non-empty.
/// A profile is built once per submission and cleared on explicit reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    pub date_of_birth: String,
    pub time_of_birth: String,
    pub place_of_birth: String,
}

/// The seven report sections, as (response key, card title) pairs.
///
/// Cards are always rendered in this order, regardless of the order keys
/// appear in the model's response.
pub const REPORT_SECTIONS: [(&str, &str); 7] = [
    ("life_timeline", "Life Timeline"),
    ("strengths_weaknesses", "Strengths & Weaknesses"),
    ("career_patterns", "Career Patterns"),
    ("decision_pattern", "Decision Making Style"),
    ("relationship_dynamics", "Relationship Dynamics"),
    ("energy_map", "Energy Productivity Map"),
    ("life_learnings", "Key Life Learnings"),
];

/// A parsed analysis response.
///
/// The model's JSON is kept as-is: section values may be strings, arrays,
/// or any other JSON shape, and missing sections are simply not rendered.
/// Each new analysis replaces the previous report wholesale.
#[derive(Debug, Clone, PartialEq)]
pub struct LifeReport {
    value: Value,
}

impl LifeReport {
    pub fn new(value: Value) -> Self {
        Self { value }
    }

    /// Looks up a section by its response key.
    ///
    /// Returns `None` when the key is absent or when the parsed payload is
    /// not a JSON object at all.
    pub fn section(&self, key: &str) -> Option<&Value> {
        self.value.get(key)
    }
}

/// Body of a rendered result card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardContent {
    Paragraph(String),
    List(Vec<String>),
}

/// A titled result card, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportCard {
    pub title: String,
    pub content: CardContent,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_section_lookup() {
        let report = LifeReport::new(json!({"life_timeline": "text"}));
        assert_eq!(report.section("life_timeline"), Some(&json!("text")));
        assert_eq!(report.section("energy_map"), None);
    }

    #[test]
    fn test_section_lookup_on_non_object_payload() {
        let report = LifeReport::new(json!(["not", "an", "object"]));
        assert_eq!(report.section("life_timeline"), None);
    }

    #[test]
    fn test_report_sections_are_unique_and_ordered() {
        assert_eq!(REPORT_SECTIONS[0].0, "life_timeline");
        assert_eq!(REPORT_SECTIONS[6].0, "life_learnings");
        let mut keys: Vec<&str> = REPORT_SECTIONS.iter().map(|(key, _)| *key).collect();
        keys.dedup();
        assert_eq!(keys.len(), 7);
    }
}
