//! # PeerConnect Matcher (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` decides which profiles are relevant to each other based on their
//! declared skills and interests. It sits on top of the profile model
//! (`profile`) and the store adapter (`store`), and offers two result modes:
//!
//! - **Match**: a candidate qualifies when the subject's skills meet the
//!   candidate's interests, or the subject's interests meet the candidate's
//!   skills.
//! - **Recommend**: every candidate gets a non-negative score
//!   `cross_weight * cross + common_weight * common` (defaults 2 and 1);
//!   zero scores are dropped and the rest are ordered best first. Equal
//!   scores keep the store's candidate order.
//!
//! ## Core Types
//!
//! - [`Overlap`]: the four tag-intersection counts between two profiles.
//! - [`MatchWeights`] / [`MatchConfig`]: scoring weights and the optional
//!   candidate-pool bound.
//! - [`Matcher`]: pure, stateless engine over in-memory snapshots.
//! - [`MatchService`]: resolves ids through a [`store::ProfileStore`] and runs
//!   the engine.
//! - [`Recommendation`]: ranked candidate with its score and overlap.
//!
//! ## Example Usage
//!
//! ```
//! use std::sync::Arc;
//! use matcher::{MatchConfig, MatchService, Matcher};
//! use store::{seed, InMemoryStore};
//!
//! let store = InMemoryStore::new();
//! let users = seed::seed_demo(&store).expect("seed");
//!
//! let service = MatchService::new(
//!     Arc::new(store),
//!     Matcher::new(MatchConfig::default()).expect("valid config"),
//! );
//!
//! let recs = service.recommend(users[0].id).expect("recommend");
//! for rec in &recs {
//!     println!("{} score={}", rec.profile.full_name, rec.score);
//! }
//! assert_eq!(recs[0].score, 6);
//! ```
//!
//! ## Observability
//!
//! Every service call runs inside a `tracing` span (`matcher.recommend`, ...)
//! and logs a `match_success` / `match_failure` event. Install a
//! [`MatchMetrics`] implementation via [`set_match_metrics`] to additionally
//! record latency and result counts.

pub mod engine;
pub mod metrics;
pub mod overlap;
pub mod service;
pub mod types;

pub use crate::engine::{filter_matches, is_match, rank, score, score_overlap, Matcher};
pub use crate::metrics::{set_match_metrics, MatchMetrics};
pub use crate::overlap::Overlap;
pub use crate::service::MatchService;
pub use crate::types::{MatchConfig, MatchError, MatchOperation, MatchWeights, Recommendation};
