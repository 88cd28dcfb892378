//! Resume scoring: pluggable, trait-based scorer comparing a resume with a job description.
//!
//! Default: `KeywordResumeScorer` (pure-Rust, deterministic, no model calls).
//! `AppState` holds an `Arc<dyn ResumeScorer>`.

use std::collections::HashSet;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::analysis::tokenizer::words;
use crate::errors::AppError;

/// Baseline clarity score. There is no grammar model behind it yet.
pub const CLARITY_BASELINE: f64 = 85.0;

const CLARITY_WEIGHT: f64 = 0.4;
const KEYWORD_DENSITY_WEIGHT: f64 = 0.3;
const JOB_MATCH_WEIGHT: f64 = 0.3;

/// All scores are rounded percentages, 0 to 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub clarity_score: u32,
    pub keyword_density_score: u32,
    pub job_match_score: u32,
    pub total_score: u32,
}

#[async_trait]
pub trait ResumeScorer: Send + Sync {
    async fn score(
        &self,
        resume_text: &str,
        job_description: &str,
        keywords: &[String],
    ) -> Result<ScoreBreakdown, AppError>;
}

/// Word-overlap scorer.
///
/// 1. keyword density: keyword occurrences / resume word count × 100
/// 2. job match: Jaccard similarity of resume and job word sets × 100
/// 3. total = 0.4 × clarity + 0.3 × density + 0.3 × match
pub struct KeywordResumeScorer;

#[async_trait]
impl ResumeScorer for KeywordResumeScorer {
    async fn score(
        &self,
        resume_text: &str,
        job_description: &str,
        keywords: &[String],
    ) -> Result<ScoreBreakdown, AppError> {
        try_score_resume(resume_text, job_description, keywords)
    }
}

/// `score_resume`, rejecting a blank resume with `AppError::EmptyInput`.
pub fn try_score_resume(
    resume_text: &str,
    job_description: &str,
    keywords: &[String],
) -> Result<ScoreBreakdown, AppError> {
    if resume_text.trim().is_empty() {
        return Err(AppError::EmptyInput);
    }
    Ok(score_resume(resume_text, job_description, keywords))
}

pub fn score_resume(resume_text: &str, job_description: &str, keywords: &[String]) -> ScoreBreakdown {
    let clarity = CLARITY_BASELINE;
    let density = keyword_density(resume_text, keywords);
    let job_match = job_match_score(resume_text, job_description);

    let total =
        clarity * CLARITY_WEIGHT + density * KEYWORD_DENSITY_WEIGHT + job_match * JOB_MATCH_WEIGHT;

    ScoreBreakdown {
        clarity_score: clarity.round() as u32,
        keyword_density_score: density.round() as u32,
        job_match_score: job_match.round() as u32,
        total_score: total.round() as u32,
    }
}

/// Share of resume words that are one of `keywords`, as a percentage.
pub fn keyword_density(text: &str, keywords: &[String]) -> f64 {
    let tokens = words(text);
    if tokens.is_empty() {
        return 0.0;
    }
    let wanted: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();
    let hits = tokens
        .iter()
        .filter(|token| wanted.iter().any(|k| k == *token))
        .count();
    hits as f64 / tokens.len() as f64 * 100.0
}

/// Jaccard similarity of the two word sets, as a percentage.
pub fn job_match_score(resume_text: &str, job_description: &str) -> f64 {
    let resume: HashSet<String> = words(resume_text).into_iter().collect();
    let job: HashSet<String> = words(job_description).into_iter().collect();

    let union = resume.union(&job).count();
    if union == 0 {
        return 0.0;
    }
    resume.intersection(&job).count() as f64 / union as f64 * 100.0
}
