use serde::{Deserialize, Serialize};

pub const PRIMARY_SKILLS: &[&str] = &["JavaScript", "React", "Node.js", "Python", "Java", "C++"];
pub const SECONDARY_SKILLS: &[&str] = &["Docker", "AWS", "CI/CD", "Git", "SQL", "MongoDB"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillSummary {
    pub primary_skills: Vec<String>,
    pub secondary_skills: Vec<String>,
    /// Primary skills the resume never mentions.
    pub missing_skills: Vec<String>,
}

fn mentioned(catalog: &[&str], text: &str, present: bool) -> Vec<String> {
    let text_lower = text.to_lowercase();
    catalog
        .iter()
        .filter(|skill| text_lower.contains(&skill.to_lowercase()) == present)
        .map(|skill| skill.to_string())
        .collect()
}

pub fn extract_primary_skills(text: &str) -> Vec<String> {
    mentioned(PRIMARY_SKILLS, text, true)
}

pub fn extract_secondary_skills(text: &str) -> Vec<String> {
    mentioned(SECONDARY_SKILLS, text, true)
}

pub fn identify_missing_skills(text: &str) -> Vec<String> {
    mentioned(PRIMARY_SKILLS, text, false)
}

pub fn summarize_skills(text: &str) -> SkillSummary {
    SkillSummary {
        primary_skills: extract_primary_skills(text),
        secondary_skills: extract_secondary_skills(text),
        missing_skills: identify_missing_skills(text),
    }
}
