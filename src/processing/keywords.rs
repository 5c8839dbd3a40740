//! TF-IDF keyword extraction over a single-document corpus
//!
//! Every call fits its own vocabulary on one text, so the smoothed IDF
//! `ln((1 + n) / (1 + df)) + 1` is always 1 and the ranking signal is the
//! term count after stop-word removal. Weights are L2-normalized.

use crate::processing::text_processor::TextProcessor;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    pub term: String,
    pub weight: f64,
}

pub struct KeywordExtractor {
    processor: TextProcessor,
    top_n: usize,
}

impl KeywordExtractor {
    pub fn new(top_n: usize) -> Self {
        Self {
            processor: TextProcessor::new(),
            top_n,
        }
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }

    /// Top `top_n` terms, highest weight first
    pub fn extract(&self, text: &str) -> Vec<String> {
        self.extract_weighted(text)
            .into_iter()
            .map(|k| k.term)
            .collect()
    }

    /// Top `top_n` keywords with their normalized TF-IDF weights.
    ///
    /// Ties are broken by reverse lexical order of the term. Empty or
    /// all-stop-word text yields an empty list.
    pub fn extract_weighted(&self, text: &str) -> Vec<Keyword> {
        let mut keywords = self.weigh_terms(text);

        keywords.sort_by(|a, b| {
            b.weight
                .partial_cmp(&a.weight)
                .unwrap_or(Ordering::Equal)
                .then_with(|| b.term.cmp(&a.term))
        });
        keywords.truncate(self.top_n);
        keywords
    }

    fn weigh_terms(&self, text: &str) -> Vec<Keyword> {
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for token in self.processor.tokenize(text) {
            *counts.entry(token).or_insert(0) += 1;
        }

        // One document in the corpus, every term present in it
        let n_docs = 1.0_f64;
        let idf = ((1.0 + n_docs) / (1.0 + n_docs)).ln() + 1.0;

        let raw: Vec<(String, f64)> = counts
            .into_iter()
            .map(|(term, count)| (term, count as f64 * idf))
            .collect();

        let norm = raw.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        if norm == 0.0 {
            return Vec::new();
        }

        raw.into_iter()
            .map(|(term, weight)| Keyword { term, weight: weight / norm })
            .collect()
    }
}
