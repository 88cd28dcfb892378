//! TF-IDF term weighting over a small corpus of term lists.
//!
//! idf(t) = ln((1 + n) / (1 + df(t))) + 1, rows are L2-normalised.
//! With a single document every idf is 1.0 and weights follow raw term frequency.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::analysis::stopwords::is_stopword;

/// A term and its TF-IDF weight within one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordScore {
    pub term: String,
    pub weight: f64,
}

#[derive(Debug, Clone)]
pub struct TfIdfVectorizer {
    /// Terms shorter than this (in characters) are ignored.
    pub min_term_len: usize,
    pub drop_stopwords: bool,
}

impl Default for TfIdfVectorizer {
    fn default() -> Self {
        Self {
            min_term_len: 1,
            drop_stopwords: true,
        }
    }
}

impl TfIdfVectorizer {
    /// Weighs every document in `documents`. Each output row lists the document's terms
    /// in vocabulary (alphabetical) order; terms absent from the document are omitted.
    pub fn fit_transform<S: AsRef<str>>(&self, documents: &[Vec<S>]) -> Vec<Vec<KeywordScore>> {
        let counts: Vec<BTreeMap<String, u32>> =
            documents.iter().map(|doc| self.count_terms(doc)).collect();

        let mut document_frequency: BTreeMap<&str, u32> = BTreeMap::new();
        for doc in &counts {
            for term in doc.keys() {
                *document_frequency.entry(term.as_str()).or_insert(0) += 1;
            }
        }

        let n = documents.len() as f64;
        let idf: BTreeMap<&str, f64> = document_frequency
            .iter()
            .map(|(term, df)| (*term, ((1.0 + n) / (1.0 + *df as f64)).ln() + 1.0))
            .collect();

        counts
            .iter()
            .map(|doc| {
                let mut row: Vec<KeywordScore> = doc
                    .iter()
                    .map(|(term, count)| KeywordScore {
                        term: term.clone(),
                        weight: *count as f64 * idf.get(term.as_str()).copied().unwrap_or(1.0),
                    })
                    .collect();
                let norm = row.iter().map(|s| s.weight * s.weight).sum::<f64>().sqrt();
                if norm > 0.0 {
                    for score in &mut row {
                        score.weight /= norm;
                    }
                }
                row
            })
            .collect()
    }

    fn count_terms<S: AsRef<str>>(&self, terms: &[S]) -> BTreeMap<String, u32> {
        let mut counts = BTreeMap::new();
        for term in terms {
            let term = term.as_ref().to_lowercase();
            if term.chars().count() < self.min_term_len {
                continue;
            }
            if self.drop_stopwords && is_stopword(&term) {
                continue;
            }
            *counts.entry(term).or_insert(0) += 1;
        }
        counts
    }
}
