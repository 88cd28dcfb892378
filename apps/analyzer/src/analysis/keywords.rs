//! Keyword extraction: top TF-IDF terms of the resume treated as a single document.

use std::cmp::Ordering;

use crate::analysis::tfidf::KeywordScore;
use crate::analysis::NlpPipeline;

pub const TOP_KEYWORDS: usize = 10;

/// Returns every candidate term with its weight, highest first.
/// Equal weights are ordered alphabetically.
pub fn rank_keywords(pipeline: &NlpPipeline, text: &str) -> Vec<KeywordScore> {
    let terms: Vec<String> = pipeline
        .tokenizer()
        .tokenize(text)
        .into_iter()
        .filter(|t| t.is_alpha && !t.is_stop)
        .map(|t| t.text.to_lowercase())
        .collect();

    let mut ranked = pipeline
        .vectorizer()
        .fit_transform(&[terms])
        .pop()
        .unwrap_or_default();

    ranked.sort_by(|a, b| match b.weight.total_cmp(&a.weight) {
        Ordering::Equal => a.term.cmp(&b.term),
        other => other,
    });
    ranked
}

/// Top `TOP_KEYWORDS` terms. Empty when the text has no alphabetic non-stopword terms.
pub fn extract_keywords(pipeline: &NlpPipeline, text: &str) -> Vec<String> {
    rank_keywords(pipeline, text)
        .into_iter()
        .take(TOP_KEYWORDS)
        .map(|s| s.term)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_most_frequent_term_ranks_first() {
        let pipeline = NlpPipeline::english();
        let keywords = extract_keywords(&pipeline, "Rust rust RUST python python golang");
        assert_eq!(keywords, vec!["rust", "python", "golang"]);
    }

    #[test]
    fn test_ties_break_alphabetically() {
        let pipeline = NlpPipeline::english();
        let keywords = extract_keywords(&pipeline, "zebra mango apple");
        assert_eq!(keywords, vec!["apple", "mango", "zebra"]);
    }

    #[test]
    fn test_caps_at_ten_terms() {
        let pipeline = NlpPipeline::english();
        let text = "alpha beta gamma delta epsilon zeta theta iota kappa lambda sigma omega";
        let keywords = extract_keywords(&pipeline, text);
        assert_eq!(keywords.len(), TOP_KEYWORDS);
    }

    #[test]
    fn test_length_equals_distinct_terms_when_below_cap() {
        let pipeline = NlpPipeline::english();
        let keywords = extract_keywords(&pipeline, "docker docker kubernetes terraform");
        assert_eq!(keywords.len(), 3);
    }

    #[test]
    fn test_stopwords_numbers_and_punctuation_excluded() {
        let pipeline = NlpPipeline::english();
        let keywords = extract_keywords(&pipeline, "I like cats and dogs. 2024!");
        assert!(keywords.contains(&"cats".to_string()));
        assert!(keywords.contains(&"dogs".to_string()));
        assert!(!keywords.iter().any(|k| k == "i" || k == "and" || k == "2024"));
        assert!(keywords.len() <= 3);
    }

    #[test]
    fn test_no_vocabulary_yields_empty_list() {
        let pipeline = NlpPipeline::english();
        assert!(extract_keywords(&pipeline, "the and of 123 !!").is_empty());
    }

    #[test]
    fn test_contractions_add_no_keywords() {
        let pipeline = NlpPipeline::english();
        let keywords = extract_keywords(
            &pipeline,
            "I'll lead teams. I won't quit, I don't stop, you've seen it.",
        );
        assert_eq!(keywords, vec!["lead", "quit", "seen", "stop", "teams"]);
    }

    #[test]
    fn test_single_letter_skills_are_keywords() {
        let pipeline = NlpPipeline::english();
        assert_eq!(extract_keywords(&pipeline, "C R Q"), vec!["c", "q", "r"]);
    }

    #[test]
    fn test_ranked_weights_are_descending() {
        let pipeline = NlpPipeline::english();
        let ranked = rank_keywords(&pipeline, "sql sql sql java java react");
        assert!(ranked.windows(2).all(|w| w[0].weight >= w[1].weight));
    }
}
