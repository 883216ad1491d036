//! Store-backed entry points: resolve profiles, then run the engine.
//!
//! A subject that cannot be resolved fails the whole call before any scoring
//! happens. Candidate entries that fail to load are skipped and logged; one
//! bad record never denies service for the rest of the pool.

use std::sync::Arc;
use std::time::Instant;

use profile::{Profile, ProfileId};
use store::ProfileStore;
use tracing::{debug, info, warn, Level};

use crate::engine::Matcher;
use crate::metrics::metrics_recorder;
use crate::types::{MatchError, MatchOperation, Recommendation};

/// Matching service over a shared profile store.
#[derive(Clone)]
pub struct MatchService {
    store: Arc<dyn ProfileStore>,
    matcher: Matcher,
}

impl MatchService {
    pub fn new(store: Arc<dyn ProfileStore>, matcher: Matcher) -> Self {
        Self { store, matcher }
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    pub fn store(&self) -> &Arc<dyn ProfileStore> {
        &self.store
    }

    /// Whether `subject_id` and `candidate_id` match. Both must exist and
    /// must differ.
    pub fn is_match(
        &self,
        subject_id: ProfileId,
        candidate_id: ProfileId,
    ) -> Result<bool, MatchError> {
        let span = tracing::span!(
            Level::INFO,
            "matcher.is_match",
            subject_id = %subject_id,
            candidate_id = %candidate_id
        );
        let _guard = span.enter();
        let start = Instant::now();

        let result = self.is_match_inner(subject_id, candidate_id);
        let found = matches!(result, Ok(true)) as usize;
        finish(MatchOperation::Pair, start, &result, 1, found);
        result
    }

    fn is_match_inner(
        &self,
        subject_id: ProfileId,
        candidate_id: ProfileId,
    ) -> Result<bool, MatchError> {
        if subject_id == candidate_id {
            return Err(MatchError::SelfComparison(subject_id));
        }
        let subject = self.store.resolve(subject_id)?;
        let candidate = self.store.resolve(candidate_id)?;
        Ok(self.matcher.is_match(&subject, &candidate))
    }

    /// Every candidate that matches `subject_id`, in store order.
    pub fn matches(&self, subject_id: ProfileId) -> Result<Vec<Profile>, MatchError> {
        let span = tracing::span!(Level::INFO, "matcher.matches", subject_id = %subject_id);
        let _guard = span.enter();
        let start = Instant::now();

        let mut pool = 0;
        let result = self.load(subject_id).map(|(subject, candidates)| {
            pool = candidates.len();
            self.matcher.matches(&subject, &candidates)
        });
        let found = result.as_ref().map(Vec::len).unwrap_or(0);
        finish(MatchOperation::Matches, start, &result, pool, found);
        result
    }

    /// Candidates with a positive score for `subject_id`, best first.
    pub fn recommend(&self, subject_id: ProfileId) -> Result<Vec<Recommendation>, MatchError> {
        let span = tracing::span!(Level::INFO, "matcher.recommend", subject_id = %subject_id);
        let _guard = span.enter();
        let start = Instant::now();

        let mut pool = 0;
        let result = self.load(subject_id).map(|(subject, candidates)| {
            pool = candidates.len();
            self.matcher.recommend(&subject, &candidates)
        });
        let found = result.as_ref().map(Vec::len).unwrap_or(0);
        finish(MatchOperation::Recommend, start, &result, pool, found);
        result
    }

    /// Resolve the subject, then its candidate pool.
    fn load(&self, subject_id: ProfileId) -> Result<(Profile, Vec<Profile>), MatchError> {
        let subject = self.store.resolve(subject_id)?;
        let entries = self.store.list_others(subject_id)?;

        let mut candidates = Vec::with_capacity(entries.len());
        for entry in entries {
            match entry {
                Ok(candidate) if candidate.id == subject_id => {
                    warn!(subject_id = %subject_id, "subject_returned_as_candidate");
                }
                Ok(candidate) => candidates.push(candidate),
                Err(err) => {
                    warn!(subject_id = %subject_id, error = %err, "candidate_skipped");
                }
            }
        }
        debug!(subject_id = %subject_id, pool = candidates.len(), "candidates_loaded");
        Ok((subject, candidates))
    }
}

fn finish<T>(
    operation: MatchOperation,
    start: Instant,
    result: &Result<T, MatchError>,
    candidates: usize,
    results: usize,
) {
    let elapsed = start.elapsed();
    match result {
        Ok(_) => info!(
            operation = %operation,
            candidates,
            results,
            elapsed_micros = elapsed.as_micros() as u64,
            "match_success"
        ),
        Err(err) => warn!(
            operation = %operation,
            error = %err,
            elapsed_micros = elapsed.as_micros() as u64,
            "match_failure"
        ),
    }
    if let Some(recorder) = metrics_recorder() {
        recorder.record_match(operation, elapsed, candidates, results, result.is_ok());
    }
}
