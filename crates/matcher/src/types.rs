use std::fmt;

use profile::{Profile, ProfileId};
use serde::{Deserialize, Serialize};
use store::StoreError;
use thiserror::Error;

use crate::overlap::Overlap;

/// Engine operation, used for logging and metrics labels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MatchOperation {
    /// Pairwise `is_match` check.
    Pair,
    /// Unordered match set.
    Matches,
    /// Ranked recommendations.
    Recommend,
}

impl MatchOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchOperation::Pair => "pair",
            MatchOperation::Matches => "matches",
            MatchOperation::Recommend => "recommend",
        }
    }
}

impl fmt::Display for MatchOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weights of the two overlap families in the relevance score:
/// `score = cross * cross_overlap + common * common_overlap`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchWeights {
    /// Weight for complementary (skill satisfies interest) overlap.
    #[serde(default = "MatchWeights::default_cross")]
    pub cross: u32,
    /// Weight for shared skills and shared interests.
    #[serde(default = "MatchWeights::default_common")]
    pub common: u32,
}

impl MatchWeights {
    pub const DEFAULT_CROSS: u32 = 2;
    pub const DEFAULT_COMMON: u32 = 1;

    pub(crate) fn default_cross() -> u32 {
        Self::DEFAULT_CROSS
    }

    pub(crate) fn default_common() -> u32 {
        Self::DEFAULT_COMMON
    }

    pub fn new(cross: u32, common: u32) -> Self {
        Self { cross, common }
    }
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CROSS, Self::DEFAULT_COMMON)
    }
}

/// Engine configuration.
///
/// Cheap to clone and serde-friendly so it can be embedded in higher-level
/// configs.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchConfig {
    #[serde(default)]
    pub weights: MatchWeights,
    /// Upper bound on how many candidates a single call considers. `None`
    /// means the whole pool.
    #[serde(default)]
    pub max_candidates: Option<usize>,
}

impl MatchConfig {
    pub fn with_weights(mut self, weights: MatchWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_max_candidates(mut self, max: usize) -> Self {
        self.max_candidates = Some(max);
        self
    }

    pub fn validate(&self) -> Result<(), MatchError> {
        if self.weights.cross == 0 && self.weights.common == 0 {
            return Err(MatchError::InvalidConfig(
                "weights.cross and weights.common must not both be zero".into(),
            ));
        }
        if self.max_candidates == Some(0) {
            return Err(MatchError::InvalidConfig(
                "max_candidates must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

/// One ranked candidate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Recommendation {
    pub profile: Profile,
    pub score: u64,
    pub overlap: Overlap,
}

/// Errors produced by the matching layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// A subject or explicitly requested candidate does not exist.
    #[error("profile {0} not found")]
    NotFound(ProfileId),
    /// A profile was compared with itself.
    #[error("profile {0} cannot be compared with itself")]
    SelfComparison(ProfileId),
    #[error("invalid match config: {0}")]
    InvalidConfig(String),
    /// Store failure other than a missing profile.
    #[error("store error: {0}")]
    Store(StoreError),
}

impl From<StoreError> for MatchError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => MatchError::NotFound(id),
            other => MatchError::Store(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid_with_two_to_one_weights() {
        let cfg = MatchConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.weights, MatchWeights::new(2, 1));
        assert_eq!(cfg.max_candidates, None);
    }

    #[test]
    fn zero_weights_rejected() {
        let cfg = MatchConfig::default().with_weights(MatchWeights::new(0, 0));
        match cfg.validate().expect_err("config should be invalid") {
            MatchError::InvalidConfig(msg) => assert!(msg.contains("weights")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn zero_max_candidates_rejected() {
        let cfg = MatchConfig::default().with_max_candidates(0);
        match cfg.validate().expect_err("config should be invalid") {
            MatchError::InvalidConfig(msg) => assert!(msg.contains("max_candidates")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn partial_weights_fill_defaults() {
        let cfg: MatchConfig =
            serde_json::from_value(serde_json::json!({ "weights": { "cross": 3 } })).unwrap();
        assert_eq!(cfg.weights, MatchWeights::new(3, 1));
    }

    #[test]
    fn store_not_found_maps_to_not_found() {
        let err: MatchError = StoreError::NotFound(ProfileId(4)).into();
        assert_eq!(err, MatchError::NotFound(ProfileId(4)));
        let err: MatchError = StoreError::Backend("down".into()).into();
        assert!(matches!(err, MatchError::Store(StoreError::Backend(_))));
    }
}
