//! Configuration Loader
//!
//! Loads and validates configuration from TOML files matching
//! config/default.toml structure. Secrets stay out of the file: the Helius
//! API key and the listen port can be overridden from the environment.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Main configuration structure matching config/default.toml
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerSection,
    pub chain: ChainSection,
    pub ranking: RankingSection,
    pub dexscreener: DexScreenerSection,
    pub helius: HeliusSection,
    pub solscan: SolscanSection,
    pub storage: StorageSection,
}

/// HTTP server section
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSection {
    /// Listen address
    pub host: String,
    /// Listen port
    pub port: u16,
}

impl ServerSection {
    /// Get listen port with environment variable override.
    /// Checks PORT env var first, falls back to the config value.
    pub fn get_port(&self) -> u16 {
        std::env::var("PORT")
            .ok()
            .and_then(|port| port.parse().ok())
            .unwrap_or(self.port)
    }
}

/// Target chain section
#[derive(Debug, Clone, Deserialize)]
pub struct ChainSection {
    /// Chain tag used to filter the trending feed and to build batch URLs
    pub id: String,
}

/// Ranking pipeline section
#[derive(Debug, Clone, Deserialize)]
pub struct RankingSection {
    /// Cap on trending profiles considered per request
    pub max_profiles: usize,
    /// Strict lower bound on 24h volume in USD
    pub min_volume_24h: f64,
}

/// DexScreener API section
#[derive(Debug, Clone, Deserialize)]
pub struct DexScreenerSection {
    /// API base URL
    pub api_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

/// Helius RPC section (primary logo fallback)
#[derive(Debug, Clone, Deserialize)]
pub struct HeliusSection {
    /// RPC base URL
    pub rpc_url: String,
    /// API key; prefer setting HELIUS_API_KEY in the environment
    #[serde(default)]
    pub api_key: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl HeliusSection {
    /// Get API key with environment variable fallback.
    /// Uses the config value when set, otherwise HELIUS_API_KEY.
    pub fn get_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|key| !key.is_empty())
            .or_else(|| std::env::var("HELIUS_API_KEY").ok().filter(|key| !key.is_empty()))
    }
}

/// Solscan API section (secondary logo fallback)
#[derive(Debug, Clone, Deserialize)]
pub struct SolscanSection {
    /// API base URL
    pub api_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

/// Durable storage section
#[derive(Debug, Clone, Deserialize)]
pub struct StorageSection {
    /// Vote ledger snapshot path (~ is expanded)
    pub votes_file: String,
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Load configuration from a TOML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

impl Config {
    /// Validate all configuration parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.host.is_empty() {
            return Err(ConfigError::ValidationError(
                "server.host cannot be empty".to_string(),
            ));
        }

        if self.chain.id.is_empty() {
            return Err(ConfigError::ValidationError(
                "chain.id cannot be empty".to_string(),
            ));
        }

        if self.ranking.max_profiles == 0 {
            return Err(ConfigError::ValidationError(format!(
                "ranking.max_profiles must be > 0, got {}",
                self.ranking.max_profiles
            )));
        }

        if self.ranking.min_volume_24h < 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "ranking.min_volume_24h must be >= 0, got {}",
                self.ranking.min_volume_24h
            )));
        }

        if self.dexscreener.api_url.is_empty() {
            return Err(ConfigError::ValidationError(
                "dexscreener.api_url cannot be empty".to_string(),
            ));
        }

        if self.helius.rpc_url.is_empty() {
            return Err(ConfigError::ValidationError(
                "helius.rpc_url cannot be empty".to_string(),
            ));
        }

        if self.solscan.api_url.is_empty() {
            return Err(ConfigError::ValidationError(
                "solscan.api_url cannot be empty".to_string(),
            ));
        }

        if self.storage.votes_file.is_empty() {
            return Err(ConfigError::ValidationError(
                "storage.votes_file cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_CONFIG: &str = r#"
        [server]
        host = "127.0.0.1"
        port = 3001

        [chain]
        id = "solana"

        [ranking]
        max_profiles = 30
        min_volume_24h = 200000.0

        [dexscreener]
        api_url = "https://api.dexscreener.com"
        timeout_secs = 10

        [helius]
        rpc_url = "https://mainnet.helius-rpc.com"
        api_key = ""
        timeout_secs = 10

        [solscan]
        api_url = "https://api.solscan.io"
        timeout_secs = 10

        [storage]
        votes_file = "votes.json"
    "#;

    fn parse_full() -> Config {
        toml::from_str(FULL_CONFIG).unwrap()
    }

    #[test]
    fn full_config_parses_and_validates() {
        let config = parse_full();
        assert!(config.validate().is_ok());
        assert_eq!(config.server.port, 3001);
        assert_eq!(config.chain.id, "solana");
        assert_eq!(config.ranking.max_profiles, 30);
        assert_eq!(config.ranking.min_volume_24h, 200_000.0);
    }

    #[test]
    fn empty_api_key_resolves_to_none() {
        let config = parse_full();
        // Empty string in the file means "not configured" (unless the
        // environment provides one, which tests do not set).
        if std::env::var("HELIUS_API_KEY").is_err() {
            assert_eq!(config.helius.get_api_key(), None);
        }
    }

    #[test]
    fn zero_max_profiles_fails_validation() {
        let mut config = parse_full();
        config.ranking.max_profiles = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn negative_volume_threshold_fails_validation() {
        let mut config = parse_full();
        config.ranking.min_volume_24h = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn empty_chain_fails_validation() {
        let mut config = parse_full();
        config.chain.id = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn missing_section_is_a_parse_error() {
        let result: Result<Config, _> = toml::from_str("[server]\nhost = \"x\"\nport = 1");
        assert!(result.is_err());
    }
}
