//! Ranking pipeline
//!
//! Per-request orchestration of the token leaderboard:
//! fetch trending profiles -> filter to the requested chain -> cap at the
//! configured count -> batch-fetch market stats for the survivors -> drop
//! anything at or below the liquidity threshold -> reconcile each pair ->
//! fill missing logos through the fallback chain -> overlay vote counts ->
//! stable sort by votes descending.
//!
//! A failure in either feed aborts the whole request with one pipeline-level
//! error; there are no retries and no partial results.

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;

use crate::application::logo_resolver::LogoResolver;
use crate::domain::reconciler::TokenReconciler;
use crate::domain::token::{TokenProfile, TokenRecord};
use crate::domain::vote_ledger::VoteLedger;
use crate::ports::feeds::{FeedError, MarketFeed, TrendingFeed};

#[derive(Debug, Clone)]
pub struct RankingConfig {
    /// Cap on trending profiles considered per request. Bounds the cost of
    /// per-token logo fallback calls, not a correctness requirement.
    pub max_profiles: usize,
    /// Strict lower bound on 24h volume in USD; entries at or below are
    /// dropped, as are entries missing volume data entirely.
    pub min_volume_24h: f64,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            max_profiles: 30,
            min_volume_24h: 200_000.0,
        }
    }
}

#[derive(Debug, Error)]
pub enum RankingError {
    #[error("Trending feed failure: {0}")]
    Trending(#[source] FeedError),

    #[error("Market feed failure: {0}")]
    Market(#[source] FeedError),
}

pub struct RankingService {
    trending: Arc<dyn TrendingFeed>,
    market: Arc<dyn MarketFeed>,
    reconciler: TokenReconciler,
    logos: LogoResolver,
    votes: Arc<VoteLedger>,
    config: RankingConfig,
}

impl RankingService {
    pub fn new(
        trending: Arc<dyn TrendingFeed>,
        market: Arc<dyn MarketFeed>,
        logos: LogoResolver,
        votes: Arc<VoteLedger>,
        config: RankingConfig,
    ) -> Self {
        Self {
            trending,
            market,
            reconciler: TokenReconciler::new(),
            logos,
            votes,
            config,
        }
    }

    /// Ranked leaderboard for one chain. Empty when the trending feed has no
    /// matching profiles, in which case the market feed is never called.
    pub async fn rank_tokens(&self, chain: &str) -> Result<Vec<TokenRecord>, RankingError> {
        let profiles = self
            .trending
            .latest_profiles()
            .await
            .map_err(RankingError::Trending)?;

        // The feed returns newest first; keep its order and cap.
        let mut chain_profiles: Vec<TokenProfile> = profiles
            .into_iter()
            .filter(|p| p.chain_id == chain)
            .collect();
        chain_profiles.truncate(self.config.max_profiles);

        if chain_profiles.is_empty() {
            return Ok(Vec::new());
        }

        let addresses: Vec<String> = chain_profiles
            .iter()
            .map(|p| p.token_address.clone())
            .collect();
        let by_address: HashMap<String, TokenProfile> = chain_profiles
            .into_iter()
            .map(|p| (p.token_address.clone(), p))
            .collect();

        let markets = self
            .market
            .tokens_by_address(chain, &addresses)
            .await
            .map_err(RankingError::Market)?;

        let mut records = Vec::new();
        for market in markets {
            // Strict greater-than; absent or unparseable volume never passes.
            let liquid = market.volume_24h() > self.config.min_volume_24h;
            if !liquid {
                continue;
            }

            // A market entry without a matching profile is tolerated: an
            // empty profile is substituted.
            let profile = by_address.get(&market.address).cloned().unwrap_or_default();
            let mut record = self.reconciler.reconcile(&market, &profile);

            if record.logo_uri.is_empty() {
                record.logo_uri = self.logos.resolve(&record.address).await.unwrap_or_default();
            }
            record.votes = self.votes.get(&record.address);

            records.push(record);
        }

        // Stable: ties keep the market-response order.
        records.sort_by(|a, b| b.votes.cmp(&a.votes));

        tracing::debug!(chain, tokens = records.len(), "ranking complete");
        Ok(records)
    }
}
