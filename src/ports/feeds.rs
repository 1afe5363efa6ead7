//! Upstream feed ports
//!
//! Trait seams over the two market-data sources the ranking pipeline
//! consumes. Adapters translate provider-specific wire formats into the
//! domain types; any transport, status, or parse failure surfaces as a
//! `FeedError` and aborts the request that needed the data.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::token::{TokenMarket, TokenProfile};

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected response status: {0}")]
    Status(u16),

    #[error("Failed to parse response: {0}")]
    Parse(String),
}

/// Discovery feed of recently trending token profiles, newest first.
#[async_trait]
pub trait TrendingFeed: Send + Sync {
    async fn latest_profiles(&self) -> Result<Vec<TokenProfile>, FeedError>;
}

/// Batch market-stats lookup for a set of token addresses on one chain.
#[async_trait]
pub trait MarketFeed: Send + Sync {
    async fn tokens_by_address(
        &self,
        chain: &str,
        addresses: &[String],
    ) -> Result<Vec<TokenMarket>, FeedError>;
}
