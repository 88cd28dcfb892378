//! Section presence: structure score and missing-section detection.

/// Canonical resume sections, in reporting order.
pub const SECTIONS: [&str; 4] = ["Summary", "Skills", "Experience", "Education"];

const MAX_STRUCTURE_SCORE: f64 = 10.0;

/// Presence flag for each canonical section (case-insensitive substring match).
fn find_sections(text: &str) -> [bool; SECTIONS.len()] {
    let text_lower = text.to_lowercase();
    SECTIONS.map(|section| text_lower.contains(&section.to_lowercase()))
}

/// Scores the resume 0–10 by the share of canonical sections it mentions.
pub fn evaluate_structure(text: &str) -> f64 {
    let found = find_sections(text).iter().filter(|present| **present).count();
    found as f64 / SECTIONS.len() as f64 * MAX_STRUCTURE_SCORE
}

/// Canonical sections not mentioned anywhere in the text, in canonical order.
pub fn check_missing_sections(text: &str) -> Vec<String> {
    SECTIONS
        .iter()
        .zip(find_sections(text))
        .filter(|(_, present)| !present)
        .map(|(section, _)| section.to_string())
        .collect()
}
