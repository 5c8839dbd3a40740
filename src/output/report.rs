//! Ranking report structures

use crate::processing::ranker::{RankedCandidate, RankingOutcome};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything a formatter needs to present one ranking run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingReport {
    pub job_description: String,
    pub job_keywords: Vec<String>,
    pub candidates: Vec<RankedCandidate>,
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub top_n: usize,
    pub default_score: f64,
    pub candidate_count: usize,
    pub masked_count: usize,
    pub tool_version: String,
}

impl RankingReport {
    pub fn from_outcome(
        job_description: impl Into<String>,
        outcome: RankingOutcome,
        top_n: usize,
        default_score: f64,
    ) -> Self {
        let masked_count = outcome.candidates.iter().filter(|c| c.masked).count();

        Self {
            job_description: job_description.into(),
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                top_n,
                default_score,
                candidate_count: outcome.candidates.len(),
                masked_count,
                tool_version: env!("CARGO_PKG_VERSION").to_string(),
            },
            job_keywords: outcome.job_keywords,
            candidates: outcome.candidates,
        }
    }

    pub fn best_candidate(&self) -> Option<&RankedCandidate> {
        self.candidates.first()
    }
}
