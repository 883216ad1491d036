use crate::error::ServerResult;
use crate::extract::AppPath;
use crate::state::ServerState;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use matcher::Recommendation;
use profile::{Profile, ProfileId};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Match-mode response
#[derive(Debug, Serialize, Deserialize)]
pub struct MatchesResponse {
    pub subject_id: ProfileId,
    pub total: usize,
    pub matches: Vec<Profile>,
}

/// Recommend-mode response
#[derive(Debug, Serialize, Deserialize)]
pub struct RecommendResponse {
    pub subject_id: ProfileId,
    pub total: usize,
    pub recommendations: Vec<RecommendationHit>,
}

/// Single ranked candidate
#[derive(Debug, Serialize, Deserialize)]
pub struct RecommendationHit {
    /// 1-based position in the ranking
    pub rank: usize,
    pub score: u64,
    /// Complementary overlap (skills meeting interests, both directions)
    pub cross: usize,
    /// Shared skills plus shared interests
    pub common: usize,
    pub profile: Profile,
}

impl RecommendationHit {
    fn from_ranked(rank: usize, rec: Recommendation) -> Self {
        Self {
            rank,
            score: rec.score,
            cross: rec.overlap.cross(),
            common: rec.overlap.common(),
            profile: rec.profile,
        }
    }
}

/// Pairwise check response
#[derive(Debug, Serialize, Deserialize)]
pub struct PairResponse {
    pub subject_id: ProfileId,
    pub candidate_id: ProfileId,
    pub is_match: bool,
}

/// Every user whose skills meet the subject's interests or whose interests
/// the subject's skills meet. Results follow store (id) order.
pub async fn match_users(
    State(state): State<Arc<ServerState>>,
    AppPath(user_id): AppPath<u64>,
) -> ServerResult<impl IntoResponse> {
    let subject_id = ProfileId(user_id);
    let matches = state.engine.matches(subject_id)?;

    Ok(Json(MatchesResponse {
        subject_id,
        total: matches.len(),
        matches,
    }))
}

/// Users ranked by relevance score, best first. Zero scores are omitted.
pub async fn recommend_users(
    State(state): State<Arc<ServerState>>,
    AppPath(user_id): AppPath<u64>,
) -> ServerResult<impl IntoResponse> {
    let subject_id = ProfileId(user_id);
    let recommendations: Vec<RecommendationHit> = state
        .engine
        .recommend(subject_id)?
        .into_iter()
        .enumerate()
        .map(|(i, rec)| RecommendationHit::from_ranked(i + 1, rec))
        .collect();

    Ok(Json(RecommendResponse {
        subject_id,
        total: recommendations.len(),
        recommendations,
    }))
}

/// Whether two specific users match.
pub async fn pair_match(
    State(state): State<Arc<ServerState>>,
    AppPath((user_id, candidate_id)): AppPath<(u64, u64)>,
) -> ServerResult<impl IntoResponse> {
    let subject_id = ProfileId(user_id);
    let candidate_id = ProfileId(candidate_id);
    let is_match = state.engine.is_match(subject_id, candidate_id)?;

    Ok(Json(PairResponse {
        subject_id,
        candidate_id,
        is_match,
    }))
}
