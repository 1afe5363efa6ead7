//! Token data model
//!
//! Upstream records arrive in two loosely-shaped forms: `TokenProfile` from
//! the trending feed and `TokenMarket` from the batch market-data feed. Both
//! providers rename and omit fields freely, so every optional field is
//! tolerated as absent. `TokenRecord` is the canonical merged output row.

use serde::{Deserialize, Serialize};

/// Canonical output record for one token, serialized with the wire keys the
/// front-end consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenRecord {
    /// Mint address, the primary key within one response.
    pub address: String,
    /// Display name, empty when no source provides one.
    pub name: String,
    /// Ticker symbol, empty when no source provides one.
    pub symbol: String,
    /// Logo URL, empty when no source (including fallbacks) provides one.
    #[serde(rename = "logoURI")]
    pub logo_uri: String,
    /// 24-hour trading volume in USD.
    #[serde(rename = "volume24h")]
    pub volume_24h: f64,
    /// Persistent community vote count.
    pub votes: u64,
    /// Current price in USD, absent when the market feed has none.
    pub price: Option<f64>,
    /// Fully-diluted valuation in USD, absent when the market feed has none.
    pub marketcap: Option<f64>,
}

/// Nested token descriptor both feeds sometimes carry.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct BaseToken {
    pub address: Option<String>,
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub icon: Option<String>,
}

/// One entry from the trending-profile feed. Only `tokenAddress` and
/// `chainId` are consistently named; everything else shows up under a
/// grab-bag of aliases depending on how the profile was submitted.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TokenProfile {
    #[serde(rename = "tokenAddress")]
    pub token_address: String,
    #[serde(rename = "chainId")]
    pub chain_id: String,
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub icon: Option<String>,
    #[serde(rename = "logoURI")]
    pub logo_uri: Option<String>,
    pub logo: Option<String>,
    #[serde(rename = "tokenName")]
    pub token_name: Option<String>,
    #[serde(rename = "tokenSymbol")]
    pub token_symbol: Option<String>,
    #[serde(rename = "baseTokenName")]
    pub base_token_name: Option<String>,
    #[serde(rename = "baseTokenSymbol")]
    pub base_token_symbol: Option<String>,
    #[serde(rename = "baseToken")]
    pub base_token: Option<BaseToken>,
}

/// Volume breakdown from the market feed. Only the 24h bucket matters here.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct VolumeStats {
    pub h24: Option<f64>,
}

/// One entry from the batch market-data feed.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TokenMarket {
    pub address: String,
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub icon: Option<String>,
    pub volume: Option<VolumeStats>,
    pub price: Option<f64>,
    pub fdv: Option<f64>,
    #[serde(rename = "baseToken")]
    pub base_token: Option<BaseToken>,
}

impl TokenMarket {
    /// 24h volume with absent data treated as zero (below any threshold).
    pub fn volume_24h(&self) -> f64 {
        self.volume.as_ref().and_then(|v| v.h24).unwrap_or(0.0)
    }
}
