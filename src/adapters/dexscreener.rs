//! DexScreener feed client
//!
//! One HTTP client implementing both feed ports:
//! - `TrendingFeed` via `GET /token-profiles/latest/v1`
//! - `MarketFeed` via `GET /tokens/v1/{chain}/{addr,addr,...}` (one batched
//!   call per request, comma-joined address list)
//!
//! Non-2xx statuses and malformed bodies surface as `FeedError`; there are
//! no retries, a failed fetch fails the request that needed it.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::domain::token::{TokenMarket, TokenProfile};
use crate::ports::feeds::{FeedError, MarketFeed, TrendingFeed};

pub const DEFAULT_API_URL: &str = "https://api.dexscreener.com";

#[derive(Debug, Clone)]
pub struct DexScreenerClient {
    http: Client,
    api_url: String,
}

impl DexScreenerClient {
    pub fn new(api_url: impl Into<String>, timeout: Duration) -> Result<Self, FeedError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            api_url: api_url.into(),
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, FeedError> {
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status(status.as_u16()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| FeedError::Parse(e.to_string()))
    }
}

#[async_trait]
impl TrendingFeed for DexScreenerClient {
    async fn latest_profiles(&self) -> Result<Vec<TokenProfile>, FeedError> {
        let url = format!("{}/token-profiles/latest/v1", self.api_url);
        self.get_json(&url).await
    }
}

#[async_trait]
impl MarketFeed for DexScreenerClient {
    async fn tokens_by_address(
        &self,
        chain: &str,
        addresses: &[String],
    ) -> Result<Vec<TokenMarket>, FeedError> {
        if addresses.is_empty() {
            return Ok(Vec::new());
        }

        let url = format!("{}/{}", self.api_url, batch_path(chain, addresses));
        self.get_json(&url).await
    }
}

/// Relative path of the batched token lookup.
fn batch_path(chain: &str, addresses: &[String]) -> String {
    format!("tokens/v1/{}/{}", chain, addresses.join(","))
}
