//! Prompt construction and report card shaping.
//!
//! Both halves of the analysis contract live here: the deterministic
//! prompt template sent to the generative API, and the formatting policy
//! that turns the parsed report into display cards. Everything in this
//! module is pure and independent of the network and the terminal.

use crate::domain::models::{CardContent, LifeReport, ReportCard, UserProfile, REPORT_SECTIONS};

/// Builds the natural-language instruction sent to the model.
///
/// The template embeds the four profile fields and names the seven
/// required output keys along with the exact JSON shape expected. It is a
/// contract with the remote model, not a negotiated protocol; the model
/// may or may not comply, which is why parsing is best-effort.
pub fn build_prompt(profile: &UserProfile) -> String {
    format!(
        "You are an expert life analyst. You must analyze the following user data:\n\
         Name: {name}\n\
         Date of Birth: {dob}\n\
         Time of Birth: {tob}\n\
         Place of Birth: {pob}\n\
         \n\
         You must return a raw JSON object (no markdown formatting) containing the following 7 sections as keys:\n\
         1. Life Timeline: Based on the birthdate, map out likely life milestones. Keep it data-driven and realistic.\n\
         2. Strengths & Weakness: Analyze personality traits. Show natural strengths and common weaknesses.\n\
         3. Career Patterns: Suggest 5 career paths where people with similar backgrounds statistically thrive and why.\n\
         4. Decision Pattern: Predict how someone born on this date usually makes big life decisions (logical, emotional, or impulsive?).\n\
         5. Relationship Dynamics: Outline common communication styles and relationship patterns.\n\
         6. Energy Map: Map seasonal or monthly productivity patterns.\n\
         7. Life Learnings: Summarize 3 key life lessons.\n\
         \n\
         Format the JSON strictly like this:\n\
         {{\n\
             \"life_timeline\": \"text...\",\n\
             \"strengths_weaknesses\": \"text...\",\n\
             \"career_patterns\": \"text...\",\n\
             \"decision_pattern\": \"text...\",\n\
             \"relationship_dynamics\": \"text...\",\n\
             \"energy_map\": \"text...\",\n\
             \"life_learnings\": \"text...\"\n\
         }}",
        name = profile.name,
        dob = profile.date_of_birth,
        tob = profile.time_of_birth,
        pob = profile.place_of_birth,
    )
}

/// Turns a report into display cards, in declared section order.
///
/// Sections that are absent or empty produce no card. Formatting policy:
/// - a string with list-marker lines becomes a list with markers stripped,
/// - any other string becomes a single paragraph,
/// - an array becomes a list of its elements verbatim,
/// - any other JSON shape falls back to its compact literal text.
pub fn build_cards(report: &LifeReport) -> Vec<ReportCard> {
    REPORT_SECTIONS
        .iter()
        .filter_map(|(key, title)| {
            let content = match report.section(key)? {
                serde_json::Value::Null => return None,
                serde_json::Value::String(text) => {
                    if text.trim().is_empty() {
                        return None;
                    }
                    format_text(text)
                }
                serde_json::Value::Array(items) => {
                    if items.is_empty() {
                        return None;
                    }
                    CardContent::List(items.iter().map(item_text).collect())
                }
                other => CardContent::Paragraph(other.to_string()),
            };
            Some(ReportCard {
                title: (*title).to_string(),
                content,
            })
        })
        .collect()
}

fn item_text(item: &serde_json::Value) -> String {
    match item {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Applies the text formatting policy for string sections.
///
/// A line starting with `- ` or `N. ` marks the whole value as a list:
/// blank lines are dropped and each remaining line loses its leading
/// marker. Text without marker lines stays a single paragraph.
fn format_text(text: &str) -> CardContent {
    let has_marker = text.lines().any(|line| is_marker_line(line.trim_start()));
    if !has_marker {
        return CardContent::Paragraph(text.trim().to_string());
    }

    let items = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| strip_marker(line).to_string())
        .collect();
    CardContent::List(items)
}

fn is_marker_line(line: &str) -> bool {
    if line.starts_with("- ") {
        return true;
    }
    numbered_marker(line).is_some()
}

fn strip_marker(line: &str) -> &str {
    if let Some(rest) = line.strip_prefix("- ") {
        return rest;
    }
    numbered_marker(line).unwrap_or(line)
}

/// Matches a leading `N. ` marker and returns the text after it.
fn numbered_marker(line: &str) -> Option<&str> {
    let (prefix, rest) = line.split_once(". ")?;
    if !prefix.is_empty() && prefix.chars().all(|c| c.is_ascii_digit()) {
        Some(rest)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn profile() -> UserProfile {
        UserProfile {
            name: "Ada Lovelace".to_string(),
            date_of_birth: "1815-12-10".to_string(),
            time_of_birth: "04:20".to_string(),
            place_of_birth: "London".to_string(),
        }
    }

    #[test]
    fn test_prompt_embeds_all_profile_fields() {
        let prompt = build_prompt(&profile());
        assert!(prompt.contains("Name: Ada Lovelace"));
        assert!(prompt.contains("Date of Birth: 1815-12-10"));
        assert!(prompt.contains("Time of Birth: 04:20"));
        assert!(prompt.contains("Place of Birth: London"));
    }

    #[test]
    fn test_prompt_names_all_seven_keys() {
        let prompt = build_prompt(&profile());
        for (key, _) in REPORT_SECTIONS {
            assert!(prompt.contains(key), "prompt is missing key {}", key);
        }
    }

    #[test]
    fn test_prompt_is_deterministic() {
        assert_eq!(build_prompt(&profile()), build_prompt(&profile()));
    }

    #[test]
    fn test_cards_from_marked_text_and_array() {
        let report = LifeReport::new(json!({
            "life_timeline": "- a\n- b",
            "career_patterns": ["x", "y"],
        }));

        let cards = build_cards(&report);

        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].title, "Life Timeline");
        assert_eq!(
            cards[0].content,
            CardContent::List(vec!["a".to_string(), "b".to_string()])
        );
        assert_eq!(cards[1].title, "Career Patterns");
        assert_eq!(
            cards[1].content,
            CardContent::List(vec!["x".to_string(), "y".to_string()])
        );
    }

    #[test]
    fn test_cards_follow_declared_order_not_response_order() {
        let report = LifeReport::new(json!({
            "life_learnings": "last section",
            "life_timeline": "first section",
        }));

        let cards = build_cards(&report);

        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].title, "Life Timeline");
        assert_eq!(cards[1].title, "Key Life Learnings");
    }

    #[test]
    fn test_plain_text_becomes_paragraph() {
        let report = LifeReport::new(json!({"decision_pattern": "Mostly logical."}));
        let cards = build_cards(&report);
        assert_eq!(
            cards[0].content,
            CardContent::Paragraph("Mostly logical.".to_string())
        );
    }

    #[test]
    fn test_numbered_markers_are_stripped() {
        let report = LifeReport::new(json!({
            "life_learnings": "1. patience\n2. curiosity\n10. persistence"
        }));
        let cards = build_cards(&report);
        assert_eq!(
            cards[0].content,
            CardContent::List(vec![
                "patience".to_string(),
                "curiosity".to_string(),
                "persistence".to_string(),
            ])
        );
    }

    #[test]
    fn test_blank_lines_are_dropped_from_lists() {
        let report = LifeReport::new(json!({"energy_map": "- spring\n\n- autumn\n"}));
        let cards = build_cards(&report);
        assert_eq!(
            cards[0].content,
            CardContent::List(vec!["spring".to_string(), "autumn".to_string()])
        );
    }

    #[test]
    fn test_unmarked_lines_in_a_list_are_kept_verbatim() {
        let report = LifeReport::new(json!({"energy_map": "Peaks:\n- summer"}));
        let cards = build_cards(&report);
        assert_eq!(
            cards[0].content,
            CardContent::List(vec!["Peaks:".to_string(), "summer".to_string()])
        );
    }

    #[test]
    fn test_abbreviations_do_not_trigger_list_mode() {
        let report = LifeReport::new(json!({"decision_pattern": "Mr. Smith decides slowly."}));
        let cards = build_cards(&report);
        assert_eq!(
            cards[0].content,
            CardContent::Paragraph("Mr. Smith decides slowly.".to_string())
        );
    }

    #[test]
    fn test_array_items_keep_their_markers() {
        let report = LifeReport::new(json!({"career_patterns": ["- raw item", 7]}));
        let cards = build_cards(&report);
        assert_eq!(
            cards[0].content,
            CardContent::List(vec!["- raw item".to_string(), "7".to_string()])
        );
    }

    #[test]
    fn test_other_json_shapes_fall_back_to_literal_text() {
        let report = LifeReport::new(json!({"energy_map": {"spring": "high"}}));
        let cards = build_cards(&report);
        assert_eq!(
            cards[0].content,
            CardContent::Paragraph("{\"spring\":\"high\"}".to_string())
        );
    }

    #[test]
    fn test_absent_and_empty_sections_are_omitted() {
        let report = LifeReport::new(json!({
            "life_timeline": "",
            "strengths_weaknesses": [],
            "career_patterns": null,
            "unknown_key": "ignored",
        }));
        assert!(build_cards(&report).is_empty());
    }

    #[test]
    fn test_non_object_report_renders_no_cards() {
        let report = LifeReport::new(json!([1, 2, 3]));
        assert!(build_cards(&report).is_empty());
    }
}
