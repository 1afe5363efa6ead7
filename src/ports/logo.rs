//! Logo provider port
//!
//! Best-effort cosmetic enrichment: a provider either finds an image URL for
//! a mint or it doesn't. Callers treat every error the same as "no result".

use async_trait::async_trait;

use super::feeds::FeedError;

#[async_trait]
pub trait LogoProvider: Send + Sync {
    /// Short provider name used in logs.
    fn name(&self) -> &'static str;

    /// Look up a display-logo URL for a mint. `Ok(None)` means the provider
    /// answered but has no image for this token.
    async fn resolve_logo(&self, address: &str) -> Result<Option<String>, FeedError>;
}
