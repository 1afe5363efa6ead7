//! Logo fallback chain
//!
//! Ordered list of providers tried until one yields a usable URL. This is
//! cosmetic enrichment, never load-bearing: a provider failure is logged at
//! debug level and treated exactly like an empty answer, and the chain
//! continues with the next provider.

use std::sync::Arc;

use crate::ports::logo::LogoProvider;

pub struct LogoResolver {
    providers: Vec<Arc<dyn LogoProvider>>,
}

impl LogoResolver {
    /// Chain in priority order: cheaper and more authoritative first.
    pub fn new(providers: Vec<Arc<dyn LogoProvider>>) -> Self {
        Self { providers }
    }

    /// Resolver with no providers; every lookup is "no result".
    pub fn disabled() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    pub async fn resolve(&self, address: &str) -> Option<String> {
        for provider in &self.providers {
            match provider.resolve_logo(address).await {
                Ok(Some(url)) if !url.is_empty() => {
                    tracing::debug!(provider = provider.name(), %address, "logo resolved");
                    return Some(url);
                }
                Ok(_) => continue,
                Err(e) => {
                    tracing::debug!(
                        provider = provider.name(),
                        %address,
                        error = %e,
                        "logo lookup failed"
                    );
                    continue;
                }
            }
        }

        None
    }
}
