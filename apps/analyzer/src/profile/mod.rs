//! Resume profile: contact details, summary, experience and skill coverage
//! extracted from plain resume text with deterministic pattern rules.

pub mod contact;
pub mod experience;
pub mod skills;

use serde::{Deserialize, Serialize};

use crate::profile::contact::{extract_contact, extract_summary, ContactInfo};
use crate::profile::experience::{extract_experience, total_experience_years, ExperienceEntry};
use crate::profile::skills::{summarize_skills, SkillSummary};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeProfile {
    #[serde(flatten)]
    pub contact: ContactInfo,
    pub summary: Option<String>,
    pub total_experience_years: f64,
    pub experience: Vec<ExperienceEntry>,
    pub skills: SkillSummary,
    pub word_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendations {
    pub improve_ats: bool,
    pub add_more_keywords: Vec<String>,
}

/// `current_year` closes open-ended ("present") date ranges.
pub fn build_profile(text: &str, current_year: i32) -> ResumeProfile {
    ResumeProfile {
        contact: extract_contact(text),
        summary: extract_summary(text),
        total_experience_years: total_experience_years(text, current_year),
        experience: extract_experience(text),
        skills: summarize_skills(text),
        word_count: text.split_whitespace().count(),
    }
}

pub fn generate_recommendations(profile: &ResumeProfile) -> Recommendations {
    let missing = profile.skills.missing_skills.clone();
    Recommendations {
        improve_ats: !missing.is_empty(),
        add_more_keywords: missing,
    }
}
