//! Route handlers
//!
//! Failures surface as a generic JSON envelope with the top-level message
//! attached; provider-specific detail stays in the logs.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use super::AppState;

#[derive(Debug, Deserialize)]
pub struct TokensQuery {
    pub chain: Option<String>,
}

pub async fn tokens_vote(
    State(state): State<AppState>,
    Query(query): Query<TokensQuery>,
) -> Response {
    let chain = query.chain.unwrap_or_else(|| state.default_chain.clone());

    match state.ranking.rank_tokens(&chain).await {
        Ok(tokens) => Json(tokens).into_response(),
        Err(e) => {
            tracing::error!(error = %e, chain, "ranking request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "API error", "details": e.to_string() })),
            )
                .into_response()
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct VoteRequest {
    pub address: Option<String>,
}

/// A missing or unparseable body lands here as `None` and is rejected the
/// same way as a body without an address.
pub async fn vote(State(state): State<AppState>, body: Option<Json<VoteRequest>>) -> Response {
    let address = body
        .and_then(|Json(request)| request.address)
        .filter(|address| !address.is_empty());

    let address = match address {
        Some(address) => address,
        None => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Token address required" })),
            )
                .into_response();
        }
    };

    match state.votes.increment(&address) {
        Ok(votes) => Json(json!({ "success": true, "votes": votes })).into_response(),
        Err(e) => {
            tracing::error!(error = %e, %address, "vote persistence failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "API error", "details": e.to_string() })),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::logo_resolver::LogoResolver;
    use crate::application::ranking::{RankingConfig, RankingService};
    use crate::domain::token::{TokenMarket, TokenProfile, VolumeStats};
    use crate::domain::vote_ledger::VoteLedger;
    use crate::ports::mocks::{MockMarketFeed, MockTrendingFeed};
    use std::sync::Arc;
    use tempfile::TempDir;

    fn test_state(trending: MockTrendingFeed, market: MockMarketFeed) -> (TempDir, AppState) {
        let dir = TempDir::new().unwrap();
        let votes = Arc::new(VoteLedger::open(dir.path().join("votes.json")).unwrap());
        let ranking = Arc::new(RankingService::new(
            Arc::new(trending),
            Arc::new(market),
            LogoResolver::disabled(),
            votes.clone(),
            RankingConfig::default(),
        ));
        (
            dir,
            AppState {
                ranking,
                votes,
                default_chain: "solana".to_string(),
            },
        )
    }

    #[tokio::test]
    async fn vote_without_address_is_rejected_without_mutation() {
        let (_dir, state) = test_state(MockTrendingFeed::new(), MockMarketFeed::new());

        let response = vote(
            State(state.clone()),
            Some(Json(VoteRequest { address: None })),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(state.votes.snapshot().is_empty());
    }

    #[tokio::test]
    async fn vote_with_empty_address_is_rejected() {
        let (_dir, state) = test_state(MockTrendingFeed::new(), MockMarketFeed::new());

        let response = vote(
            State(state.clone()),
            Some(Json(VoteRequest {
                address: Some(String::new()),
            })),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(state.votes.snapshot().is_empty());
    }

    #[tokio::test]
    async fn missing_body_is_rejected() {
        let (_dir, state) = test_state(MockTrendingFeed::new(), MockMarketFeed::new());

        let response = vote(State(state.clone()), None).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn vote_increments_and_returns_the_new_count() {
        let (_dir, state) = test_state(MockTrendingFeed::new(), MockMarketFeed::new());

        let response = vote(
            State(state.clone()),
            Some(Json(VoteRequest {
                address: Some("Mint111".to_string()),
            })),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(state.votes.get("Mint111"), 1);
    }

    #[tokio::test]
    async fn tokens_vote_uses_the_default_chain() {
        let trending = MockTrendingFeed::new().with_profiles(vec![TokenProfile {
            token_address: "Mint1".to_string(),
            chain_id: "solana".to_string(),
            ..Default::default()
        }]);
        let market = MockMarketFeed::new().with_tokens(vec![TokenMarket {
            address: "Mint1".to_string(),
            volume: Some(VolumeStats {
                h24: Some(300_000.0),
            }),
            ..Default::default()
        }]);
        let (_dir, state) = test_state(trending, market);

        let response = tokens_vote(State(state), Query(TokensQuery { chain: None })).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn feed_failure_is_a_generic_error_envelope() {
        let (_dir, state) = test_state(MockTrendingFeed::new().failing(), MockMarketFeed::new());

        let response = tokens_vote(State(state), Query(TokensQuery { chain: None })).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
