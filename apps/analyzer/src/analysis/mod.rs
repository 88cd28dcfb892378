// Resume text analysis: keyword extraction, section structure scoring, missing sections.
// Everything here is a pure function of its input plus the read-only `NlpPipeline`.

pub mod keywords;
pub mod sections;
pub mod stopwords;
pub mod tfidf;
pub mod tokenizer;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::keywords::extract_keywords;
use crate::analysis::sections::{check_missing_sections, evaluate_structure};
use crate::analysis::tfidf::TfIdfVectorizer;
use crate::analysis::tokenizer::{EnglishTokenizer, Tokenizer};
use crate::errors::AppError;

/// Tokenizer and term weighter, built once per process and passed to every analysis call.
pub struct NlpPipeline {
    tokenizer: Box<dyn Tokenizer>,
    vectorizer: TfIdfVectorizer,
}

impl NlpPipeline {
    pub fn new(tokenizer: Box<dyn Tokenizer>, vectorizer: TfIdfVectorizer) -> Self {
        Self {
            tokenizer,
            vectorizer,
        }
    }

    pub fn english() -> Self {
        Self::new(Box::new(EnglishTokenizer), TfIdfVectorizer::default())
    }

    pub fn tokenizer(&self) -> &dyn Tokenizer {
        self.tokenizer.as_ref()
    }

    pub fn vectorizer(&self) -> &TfIdfVectorizer {
        &self.vectorizer
    }
}

/// Output of a single analysis run. Field names are part of the CLI/HTTP contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub keywords: Vec<String>,
    /// 0.0 – 10.0
    pub structure_score: f64,
    pub missing_sections: Vec<String>,
}

/// Runs keyword extraction, structure scoring and missing-section detection.
pub fn analyze_resume(pipeline: &NlpPipeline, text: &str) -> Result<AnalysisReport, AppError> {
    if text.trim().is_empty() {
        return Err(AppError::EmptyInput);
    }

    let keywords = extract_keywords(pipeline, text);
    let structure_score = evaluate_structure(text);
    let missing_sections = check_missing_sections(text);

    debug!(
        keywords = keywords.len(),
        structure_score,
        missing = missing_sections.len(),
        "resume analyzed"
    );

    Ok(AnalysisReport {
        keywords,
        structure_score,
        missing_sections,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RESUME: &str = r#"
        Summary: Backend engineer focused on Rust and distributed systems.
        Skills: Rust, Kafka, PostgreSQL, Kubernetes
        Experience: Rust engineer at Acme (2019 - 2023), built Kafka pipelines in Rust.
        Education: BSc Computer Science
    "#;

    #[test]
    fn test_full_resume_report() {
        let pipeline = NlpPipeline::english();
        let report = analyze_resume(&pipeline, SAMPLE_RESUME).unwrap();
        assert_eq!(report.keywords[0], "rust");
        assert!(report.keywords.len() <= 10);
        assert_eq!(report.structure_score, 10.0);
        assert!(report.missing_sections.is_empty());
    }

    #[test]
    fn test_plain_sentence_report() {
        let pipeline = NlpPipeline::english();
        let report = analyze_resume(&pipeline, "I like cats and dogs.").unwrap();
        assert_eq!(report.structure_score, 0.0);
        assert_eq!(
            report.missing_sections,
            vec!["Summary", "Skills", "Experience", "Education"]
        );
        assert!(report.keywords.contains(&"cats".to_string()));
    }

    #[test]
    fn test_empty_input_is_rejected() {
        let pipeline = NlpPipeline::english();
        assert!(matches!(
            analyze_resume(&pipeline, "  \n "),
            Err(AppError::EmptyInput)
        ));
    }

    #[test]
    fn test_analysis_is_idempotent() {
        let pipeline = NlpPipeline::english();
        let first = analyze_resume(&pipeline, SAMPLE_RESUME).unwrap();
        let second = analyze_resume(&pipeline, SAMPLE_RESUME).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_report_serializes_with_camel_case_fields() {
        let report = AnalysisReport {
            keywords: vec!["rust".to_string()],
            structure_score: 7.5,
            missing_sections: vec!["Education".to_string()],
        };
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(
            json,
            r#"{"keywords":["rust"],"structureScore":7.5,"missingSections":["Education"]}"#
        );
    }
}
