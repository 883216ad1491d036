//! Match predicate and recommendation scoring.
//!
//! Everything in here is a pure function of the profile snapshots passed in:
//! no I/O, no shared state, nothing cached between calls. Concurrent calls
//! need no coordination.

use profile::Profile;
use tracing::warn;

use crate::overlap::Overlap;
use crate::types::{MatchConfig, MatchError, MatchWeights, Recommendation};


/// Whether either party's skills satisfy the other's interests.
///
/// Both directions are evaluated; neither implies the other. Identity of the
/// two profiles is the caller's concern.
pub fn is_match(subject: &Profile, candidate: &Profile) -> bool {
    subject.skills.intersects(&candidate.interests)
        || subject.interests.intersects(&candidate.skills)
}

/// Relevance score for a precomputed overlap.
pub fn score_overlap(overlap: &Overlap, weights: &MatchWeights) -> u64 {
    u64::from(weights.cross) * overlap.cross() as u64
        + u64::from(weights.common) * overlap.common() as u64
}

/// Relevance score of `candidate` for `subject`.
pub fn score(subject: &Profile, candidate: &Profile, weights: &MatchWeights) -> u64 {
    score_overlap(&Overlap::between(subject, candidate), weights)
}

/// Candidates that satisfy [`is_match`], in candidate-sequence order.
pub fn filter_matches<'a>(subject: &Profile, candidates: &'a [Profile]) -> Vec<&'a Profile> {
    candidates
        .iter()
        .filter(|candidate| is_match(subject, candidate))
        .collect()
}

/// Score every candidate, drop zero scores and order by descending score.
///
/// The sort is stable: candidates with equal scores keep their relative
/// order from `candidates`, so identical inputs always rank identically.
pub fn rank(subject: &Profile, candidates: &[Profile], weights: &MatchWeights) -> Vec<Recommendation> {
    let mut ranked: Vec<Recommendation> = candidates
        .iter()
        .filter_map(|candidate| {
            let overlap = Overlap::between(subject, candidate);
            let score = score_overlap(&overlap, weights);
            (score > 0).then(|| Recommendation {
                profile: candidate.clone(),
                score,
                overlap,
            })
        })
        .collect();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}

/// Configured front end over the pure functions above.
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    config: MatchConfig,
}

impl Matcher {
    /// Build a matcher, rejecting invalid configuration.
    pub fn new(config: MatchConfig) -> Result<Self, MatchError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn weights(&self) -> &MatchWeights {
        &self.config.weights
    }

    pub fn is_match(&self, subject: &Profile, candidate: &Profile) -> bool {
        is_match(subject, candidate)
    }

    pub fn score(&self, subject: &Profile, candidate: &Profile) -> u64 {
        score(subject, candidate, &self.config.weights)
    }

    /// Match-mode result: every qualifying candidate, in input order.
    pub fn matches(&self, subject: &Profile, candidates: &[Profile]) -> Vec<Profile> {
        filter_matches(subject, self.bounded(candidates))
            .into_iter()
            .cloned()
            .collect()
    }

    /// Recommend-mode result: positive scores, best first.
    pub fn recommend(&self, subject: &Profile, candidates: &[Profile]) -> Vec<Recommendation> {
        rank(subject, self.bounded(candidates), &self.config.weights)
    }

    /// Apply `max_candidates`, keeping the leading part of the pool.
    pub fn bounded<'a>(&self, candidates: &'a [Profile]) -> &'a [Profile] {
        match self.config.max_candidates {
            Some(max) if candidates.len() > max => {
                warn!(
                    pool = candidates.len(),
                    max_candidates = max,
                    "candidate_pool_truncated"
                );
                &candidates[..max]
            }
            _ => candidates,
        }
    }
}
