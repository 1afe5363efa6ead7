//! Recording test doubles for the feed and logo ports, used by unit and
//! integration tests. Each mock records its calls and returns a canned
//! response configured through `with_*` builders.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::token::{TokenMarket, TokenProfile};
use crate::ports::feeds::{FeedError, MarketFeed, TrendingFeed};
use crate::ports::logo::LogoProvider;

/// Mock trending feed returning a fixed profile list.
#[derive(Debug, Default)]
pub struct MockTrendingFeed {
    calls: Arc<Mutex<u32>>,
    profiles: Vec<TokenProfile>,
    fail: bool,
}

impl MockTrendingFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the profiles the feed returns.
    pub fn with_profiles(mut self, profiles: Vec<TokenProfile>) -> Self {
        self.profiles = profiles;
        self
    }

    /// Builder method to make every call fail.
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    /// Number of recorded calls.
    pub fn call_count(&self) -> u32 {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl TrendingFeed for MockTrendingFeed {
    async fn latest_profiles(&self) -> Result<Vec<TokenProfile>, FeedError> {
        *self.calls.lock().unwrap() += 1;
        if self.fail {
            return Err(FeedError::Status(500));
        }
        Ok(self.profiles.clone())
    }
}

/// Mock market feed returning a fixed market list and recording the chain
/// and address batch of each call.
#[derive(Debug, Default)]
pub struct MockMarketFeed {
    calls: Arc<Mutex<Vec<(String, Vec<String>)>>>,
    tokens: Vec<TokenMarket>,
    fail: bool,
}

impl MockMarketFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the market entries the feed returns.
    pub fn with_tokens(mut self, tokens: Vec<TokenMarket>) -> Self {
        self.tokens = tokens;
        self
    }

    /// Builder method to make every call fail.
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    /// All recorded (chain, addresses) calls.
    pub fn calls(&self) -> Vec<(String, Vec<String>)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl MarketFeed for MockMarketFeed {
    async fn tokens_by_address(
        &self,
        chain: &str,
        addresses: &[String],
    ) -> Result<Vec<TokenMarket>, FeedError> {
        self.calls
            .lock()
            .unwrap()
            .push((chain.to_string(), addresses.to_vec()));
        if self.fail {
            return Err(FeedError::Status(500));
        }
        Ok(self.tokens.clone())
    }
}

/// Mock logo provider with a fixed answer and recorded lookups.
#[derive(Debug)]
pub struct MockLogoProvider {
    name: &'static str,
    calls: Arc<Mutex<Vec<String>>>,
    logo: Option<String>,
    fail: bool,
}

impl MockLogoProvider {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            calls: Arc::new(Mutex::new(Vec::new())),
            logo: None,
            fail: false,
        }
    }

    /// Builder method to set the URL this provider resolves.
    pub fn with_logo(mut self, url: &str) -> Self {
        self.logo = Some(url.to_string());
        self
    }

    /// Builder method to make every lookup fail.
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    /// All addresses this provider was asked about.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl LogoProvider for MockLogoProvider {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn resolve_logo(&self, address: &str) -> Result<Option<String>, FeedError> {
        self.calls.lock().unwrap().push(address.to_string());
        if self.fail {
            return Err(FeedError::Status(502));
        }
        Ok(self.logo.clone())
    }
}
