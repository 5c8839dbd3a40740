//! Diagnostic hooks invoked at fixed points of the ranking pipeline

use crate::processing::document::Document;
use log::{debug, info, warn};

/// Receives diagnostic events; scoring code never prints directly
pub trait RankingObserver {
    fn job_loaded(&self, _job: &Document) {}
    fn resume_loaded(&self, _resume: &Document) {}
    fn job_keywords(&self, _keywords: &[String]) {}
    fn candidate_keywords(&self, _name: &str, _keywords: &[String]) {}
    fn candidate_scored(&self, _name: &str, _score: f64) {}
    fn score_masked(&self, _name: &str, _raw_score: f64, _default_score: f64) {}
}

/// Observer that discards every event
pub struct NoopObserver;

impl RankingObserver for NoopObserver {}

/// Observer that forwards events to the `log` facade
pub struct LogObserver;

impl RankingObserver for LogObserver {
    fn job_loaded(&self, job: &Document) {
        info!("Job description loaded: {} ({} characters)", job.name, job.character_count());
        debug!("Job description: {}", job.content);
    }

    fn resume_loaded(&self, resume: &Document) {
        if resume.is_blank() {
            warn!("Loaded resume: {} (empty, will receive the default score)", resume.name);
        } else {
            info!("Loaded resume: {}", resume.name);
        }
    }

    fn job_keywords(&self, keywords: &[String]) {
        debug!("Job keywords: {:?}", keywords);
    }

    fn candidate_keywords(&self, name: &str, keywords: &[String]) {
        debug!("Candidate keywords for {}: {:?}", name, keywords);
    }

    fn candidate_scored(&self, name: &str, score: f64) {
        debug!("Candidate: {}, similarity score: {}", name, score);
    }

    fn score_masked(&self, name: &str, raw_score: f64, default_score: f64) {
        debug!("Candidate {} scored {}, replaced with default {}", name, raw_score, default_score);
    }
}
