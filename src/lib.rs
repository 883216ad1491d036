//! Workspace umbrella crate for PeerConnect.
//!
//! This crate stitches the profile store and the matching engine together so
//! callers can go from a YAML config to a ready-to-query [`Engine`] with a
//! single call.
//!
//! ```
//! use peerconnect::{Engine, PeerConnectConfig};
//!
//! let mut config = PeerConnectConfig::default();
//! config.store.seed_demo = true;
//!
//! let engine = Engine::from_config(&config).expect("engine");
//! let alice = engine
//!     .store()
//!     .find_by_email("alice@example.com")
//!     .expect("store")
//!     .expect("seeded");
//!
//! let names: Vec<String> = engine
//!     .recommend(alice.id)
//!     .expect("recommend")
//!     .into_iter()
//!     .map(|rec| rec.profile.full_name)
//!     .collect();
//! assert_eq!(names, ["Carol ML", "Bob Analyst"]);
//! ```

pub mod config;

pub use crate::config::{ConfigLoadError, MatchYamlConfig, PeerConnectConfig, StoreYamlConfig};
pub use matcher::{
    filter_matches, is_match, rank, score, set_match_metrics, MatchConfig, MatchError,
    MatchMetrics, MatchOperation, MatchService, MatchWeights, Matcher, Overlap, Recommendation,
};
pub use profile::{NewProfile, Profile, ProfileError, ProfileId, ProfilePatch, TagSet};
pub use store::{CandidateEntry, InMemoryStore, ProfileStore, StoreConfig, StoreError};

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use tracing::info;

/// Errors that can occur while assembling an [`Engine`].
#[derive(Debug)]
pub enum EngineError {
    Config(ConfigLoadError),
    Store(StoreError),
    Match(MatchError),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Config(err) => write!(f, "configuration failure: {err}"),
            EngineError::Store(err) => write!(f, "store initialization failure: {err}"),
            EngineError::Match(err) => write!(f, "matcher initialization failure: {err}"),
        }
    }
}

impl Error for EngineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            EngineError::Config(err) => Some(err),
            EngineError::Store(err) => Some(err),
            EngineError::Match(err) => Some(err),
        }
    }
}

impl From<ConfigLoadError> for EngineError {
    fn from(value: ConfigLoadError) -> Self {
        EngineError::Config(value)
    }
}

impl From<StoreError> for EngineError {
    fn from(value: StoreError) -> Self {
        EngineError::Store(value)
    }
}

impl From<MatchError> for EngineError {
    fn from(value: MatchError) -> Self {
        EngineError::Match(value)
    }
}

/// A profile store together with the matching service reading from it.
#[derive(Clone)]
pub struct Engine {
    store: Arc<InMemoryStore>,
    service: MatchService,
}

impl Engine {
    /// Build the store and matcher described by `config`.
    pub fn from_config(config: &PeerConnectConfig) -> Result<Self, EngineError> {
        config.validate()?;
        let matcher = Matcher::new(config.match_config())?;
        let store = Arc::new(config.store_config().build()?);
        let service = MatchService::new(store.clone(), matcher);
        info!(
            profiles = store.len()?,
            cross_weight = config.matcher.cross_weight,
            common_weight = config.matcher.common_weight,
            "engine_ready"
        );
        Ok(Self { store, service })
    }

    /// Empty in-memory engine with default weights.
    pub fn in_memory() -> Self {
        let store = Arc::new(InMemoryStore::new());
        let service = MatchService::new(store.clone(), Matcher::default());
        Self { store, service }
    }

    pub fn store(&self) -> &Arc<InMemoryStore> {
        &self.store
    }

    pub fn service(&self) -> &MatchService {
        &self.service
    }

    pub fn is_match(&self, subject: ProfileId, candidate: ProfileId) -> Result<bool, MatchError> {
        self.service.is_match(subject, candidate)
    }

    pub fn matches(&self, subject: ProfileId) -> Result<Vec<Profile>, MatchError> {
        self.service.matches(subject)
    }

    pub fn recommend(&self, subject: ProfileId) -> Result<Vec<Recommendation>, MatchError> {
        self.service.recommend(subject)
    }
}
