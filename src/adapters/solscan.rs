//! Solscan logo lookup, the last fallback in the chain. A single GET against
//! the token metadata endpoint; Solscan answers 404 for unknown mints, so any
//! non-2xx status is treated as "no result" rather than an error.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::ports::feeds::FeedError;
use crate::ports::logo::LogoProvider;

pub const DEFAULT_API_URL: &str = "https://api.solscan.io";

#[derive(Debug, Clone)]
pub struct SolscanLogoClient {
    http: Client,
    api_url: String,
}

impl SolscanLogoClient {
    pub fn new(api_url: impl Into<String>, timeout: Duration) -> Result<Self, FeedError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            api_url: api_url.into(),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TokenMeta {
    icon: Option<String>,
}

#[async_trait]
impl LogoProvider for SolscanLogoClient {
    fn name(&self) -> &'static str {
        "solscan"
    }

    async fn resolve_logo(&self, address: &str) -> Result<Option<String>, FeedError> {
        let url = format!("{}/token/meta?tokenAddress={}", self.api_url, address);

        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Ok(None);
        }

        let meta: TokenMeta = response
            .json()
            .await
            .map_err(|e| FeedError::Parse(e.to_string()))?;

        Ok(meta.icon.filter(|icon| !icon.is_empty()))
    }
}
