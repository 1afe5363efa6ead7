//! Token record reconciliation
//!
//! Merges one market entry and one trending profile for the same mint into a
//! canonical `TokenRecord`. Each field resolves through an ordered candidate
//! list, first non-empty value wins: the batch market feed is the most
//! specific and most recently fetched source, the trending profile is the
//! broader discovery source. Logo fallbacks against external providers are
//! the pipeline's job and only happen when every direct field below is empty.

use super::token::{TokenMarket, TokenProfile, TokenRecord};

/// Merges market and profile records by per-field precedence.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenReconciler;

impl TokenReconciler {
    pub fn new() -> Self {
        Self
    }

    /// Build a canonical record from the two upstream shapes. Pure merge:
    /// the vote count is left at zero and no external lookups happen here.
    pub fn reconcile(&self, market: &TokenMarket, profile: &TokenProfile) -> TokenRecord {
        let profile_base = profile.base_token.as_ref();
        let market_base = market.base_token.as_ref();

        let name = first_non_empty(&[
            market.name.as_deref(),
            profile.name.as_deref(),
            profile.token_name.as_deref(),
            profile.base_token_name.as_deref(),
            profile_base.and_then(|b| b.name.as_deref()),
            market_base.and_then(|b| b.name.as_deref()),
        ]);

        let symbol = first_non_empty(&[
            market.symbol.as_deref(),
            profile.symbol.as_deref(),
            profile.token_symbol.as_deref(),
            profile.base_token_symbol.as_deref(),
            profile_base.and_then(|b| b.symbol.as_deref()),
            market_base.and_then(|b| b.symbol.as_deref()),
        ]);

        let logo_uri = first_non_empty(&[
            market.icon.as_deref(),
            profile.icon.as_deref(),
            profile.logo_uri.as_deref(),
            profile.logo.as_deref(),
            profile_base.and_then(|b| b.icon.as_deref()),
            market_base.and_then(|b| b.icon.as_deref()),
        ]);

        TokenRecord {
            address: market.address.clone(),
            name,
            symbol,
            logo_uri,
            volume_24h: market.volume_24h(),
            votes: 0,
            price: market.price,
            marketcap: market.fdv,
        }
    }
}

/// First candidate that is present and non-empty, or an empty string.
fn first_non_empty(candidates: &[Option<&str>]) -> String {
    candidates
        .iter()
        .copied()
        .flatten()
        .find(|value| !value.is_empty())
        .map(str::to_string)
        .unwrap_or_default()
}
