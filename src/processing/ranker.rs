//! Candidate scoring by keyword overlap and ranking

use crate::error::{Result, RankerError};
use crate::processing::document::Document;
use crate::processing::keywords::KeywordExtractor;
use crate::processing::observer::{NoopObserver, RankingObserver};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateScore {
    pub name: String,
    /// `|job ∩ candidate| / |job|`, before default substitution
    pub raw_score: f64,
    pub score: f64,
    pub masked: bool,
    pub matched_keywords: Vec<String>,
    pub keyword_count: usize,
}

/// Per-candidate scores in insertion order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreTable {
    entries: Vec<CandidateScore>,
}

impl ScoreTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the entry for `score.name`, keeping its original position
    pub fn insert(&mut self, score: CandidateScore) {
        match self.entries.iter_mut().find(|e| e.name == score.name) {
            Some(existing) => *existing = score,
            None => self.entries.push(score),
        }
    }

    pub fn get(&self, name: &str) -> Option<&CandidateScore> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn entries(&self) -> &[CandidateScore] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCandidate {
    pub rank: usize,
    pub name: String,
    pub score: f64,
    pub raw_score: f64,
    pub masked: bool,
    pub matched_keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingOutcome {
    pub job_keywords: Vec<String>,
    pub candidates: Vec<RankedCandidate>,
}

pub struct CandidateRanker<'a> {
    extractor: KeywordExtractor,
    default_score: f64,
    observer: &'a dyn RankingObserver,
}

impl<'a> CandidateRanker<'a> {
    pub fn new(extractor: KeywordExtractor, default_score: f64) -> Self {
        Self {
            extractor,
            default_score,
            observer: &NoopObserver,
        }
    }

    pub fn with_observer(mut self, observer: &'a dyn RankingObserver) -> Self {
        self.observer = observer;
        self
    }

    pub fn extractor(&self) -> &KeywordExtractor {
        &self.extractor
    }

    pub fn default_score(&self) -> f64 {
        self.default_score
    }

    /// Extract, score, mask and rank in one pass
    pub fn run(&self, job: &Document, resumes: &[Document]) -> Result<RankingOutcome> {
        let job_keywords = self.extractor.extract(&job.content);
        self.observer.job_keywords(&job_keywords);

        let mut table = self.score_candidates(&job_keywords, resumes)?;
        self.apply_default_scores(&mut table);

        Ok(RankingOutcome {
            job_keywords,
            candidates: Self::rank(table),
        })
    }

    /// Raw overlap score for every resume.
    ///
    /// Fails with [`RankerError::EmptyJobKeywords`] when there is nothing to
    /// divide by.
    pub fn score_candidates(&self, job_keywords: &[String], resumes: &[Document]) -> Result<ScoreTable> {
        if job_keywords.is_empty() {
            return Err(RankerError::EmptyJobKeywords);
        }

        let job_set: HashSet<&str> = job_keywords.iter().map(String::as_str).collect();
        let mut table = ScoreTable::new();

        for resume in resumes {
            let candidate_keywords = self.extractor.extract(&resume.content);
            self.observer.candidate_keywords(&resume.name, &candidate_keywords);

            let candidate_set: HashSet<&str> = candidate_keywords.iter().map(String::as_str).collect();
            let mut matched: Vec<String> = job_set
                .intersection(&candidate_set)
                .map(|s| s.to_string())
                .collect();
            matched.sort();

            let raw_score = matched.len() as f64 / job_keywords.len() as f64;
            self.observer.candidate_scored(&resume.name, raw_score);

            table.insert(CandidateScore {
                name: resume.name.clone(),
                raw_score,
                score: raw_score,
                masked: false,
                matched_keywords: matched,
                keyword_count: candidate_keywords.len(),
            });
        }

        Ok(table)
    }

    /// Replace zero and NaN scores with the default score.
    ///
    /// A candidate with no overlap ends up indistinguishable from one whose
    /// score could not be computed.
    pub fn apply_default_scores(&self, table: &mut ScoreTable) {
        for entry in table.entries.iter_mut() {
            if entry.raw_score == 0.0 || entry.raw_score.is_nan() {
                self.observer.score_masked(&entry.name, entry.raw_score, self.default_score);
                entry.score = self.default_score;
                entry.masked = true;
            }
        }
    }

    /// Sort by score descending; equal scores keep table order
    pub fn rank(table: ScoreTable) -> Vec<RankedCandidate> {
        let mut entries = table.entries;
        entries.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

        entries
            .into_iter()
            .enumerate()
            .map(|(i, e)| RankedCandidate {
                rank: i + 1,
                name: e.name,
                score: e.score,
                raw_score: e.raw_score,
                masked: e.masked,
                matched_keywords: e.matched_keywords,
            })
            .collect()
    }
}
