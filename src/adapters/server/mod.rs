//! HTTP adapter
//!
//! Thin axum surface over the ranking pipeline and the vote ledger:
//! - `GET /api/tokens-vote?chain=<tag>` - ranked leaderboard
//! - `POST /api/vote` - increment a token's vote count
//!
//! Every response carries permissive CORS headers; the front-end is served
//! from a different origin.

mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::{header, Method};
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::application::ranking::RankingService;
use crate::domain::vote_ledger::VoteLedger;

pub use routes::VoteRequest;

#[derive(Clone)]
pub struct AppState {
    pub ranking: Arc<RankingService>,
    pub votes: Arc<VoteLedger>,
    pub default_chain: String,
}

/// Build the router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::ORIGIN, header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route("/api/tokens-vote", get(routes::tokens_vote))
        .route("/api/vote", post(routes::vote))
        .layer(cors)
        .with_state(state)
}

/// Bind and serve until ctrl-c.
pub async fn serve(addr: SocketAddr, state: AppState) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("voteboard API listening on http://{}", listener.local_addr()?);

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c().await.ok();
    tracing::info!("Shutdown signal received");
}
