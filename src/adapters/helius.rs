//! Helius logo lookup
//!
//! Primary logo fallback: a JSON-RPC 2.0 `getAsset` call against a Helius
//! RPC endpoint. The image URL is taken from the current Metaplex shape
//! (`content.links.image`) and, failing that, the legacy one
//! (`content.metadata.image`). Every field is optional on the wire; an
//! absent image is a normal "no result", not an error.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use crate::ports::feeds::FeedError;
use crate::ports::logo::LogoProvider;

pub const DEFAULT_RPC_URL: &str = "https://mainnet.helius-rpc.com";

#[derive(Debug, Clone)]
pub struct HeliusLogoClient {
    http: Client,
    rpc_url: String,
    api_key: String,
}

impl HeliusLogoClient {
    pub fn new(
        rpc_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, FeedError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            rpc_url: rpc_url.into(),
            api_key: api_key.into(),
        })
    }
}

#[async_trait]
impl LogoProvider for HeliusLogoClient {
    fn name(&self) -> &'static str {
        "helius"
    }

    async fn resolve_logo(&self, address: &str) -> Result<Option<String>, FeedError> {
        let url = format!("{}/?api-key={}", self.rpc_url, self.api_key);
        let body = json!({
            "jsonrpc": "2.0",
            "id": "1",
            "method": "getAsset",
            "params": { "id": address }
        });

        let response = self.http.post(&url).json(&body).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status(status.as_u16()));
        }

        let parsed: GetAssetResponse = response
            .json()
            .await
            .map_err(|e| FeedError::Parse(e.to_string()))?;

        Ok(extract_image(&parsed))
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct GetAssetResponse {
    result: Option<AssetResult>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AssetResult {
    content: Option<AssetContent>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AssetContent {
    links: Option<AssetLinks>,
    metadata: Option<AssetMetadata>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AssetLinks {
    image: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AssetMetadata {
    image: Option<String>,
}

/// Current Metaplex shape first, then the legacy one.
fn extract_image(response: &GetAssetResponse) -> Option<String> {
    let content = response.result.as_ref()?.content.as_ref()?;

    if let Some(url) = content.links.as_ref().and_then(|l| l.image.clone()) {
        return Some(url);
    }

    content.metadata.as_ref().and_then(|m| m.image.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(value: serde_json::Value) -> GetAssetResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn client_creation() {
        let client = HeliusLogoClient::new(DEFAULT_RPC_URL, "test-key", Duration::from_secs(10));
        assert!(client.is_ok());
    }

    #[test]
    fn extracts_image_from_links() {
        let response = parse(json!({
            "jsonrpc": "2.0",
            "id": "1",
            "result": {
                "content": {
                    "links": { "image": "https://img.example/asset.png" }
                }
            }
        }));

        assert_eq!(
            extract_image(&response).as_deref(),
            Some("https://img.example/asset.png")
        );
    }

    #[test]
    fn falls_back_to_legacy_metadata_image() {
        let response = parse(json!({
            "result": {
                "content": {
                    "metadata": { "image": "https://img.example/legacy.png" }
                }
            }
        }));

        assert_eq!(
            extract_image(&response).as_deref(),
            Some("https://img.example/legacy.png")
        );
    }

    #[test]
    fn links_image_wins_over_legacy() {
        let response = parse(json!({
            "result": {
                "content": {
                    "links": { "image": "https://img.example/current.png" },
                    "metadata": { "image": "https://img.example/legacy.png" }
                }
            }
        }));

        assert_eq!(
            extract_image(&response).as_deref(),
            Some("https://img.example/current.png")
        );
    }

    #[test]
    fn missing_pieces_yield_no_result() {
        assert_eq!(extract_image(&parse(json!({}))), None);
        assert_eq!(extract_image(&parse(json!({ "result": {} }))), None);
        assert_eq!(
            extract_image(&parse(json!({ "result": { "content": {} } }))),
            None
        );
        assert_eq!(
            extract_image(&parse(json!({
                "result": { "content": { "links": {}, "metadata": {} } }
            }))),
            None
        );
    }

    #[test]
    fn rpc_error_response_is_no_result() {
        let response = parse(json!({
            "jsonrpc": "2.0",
            "id": "1",
            "error": { "code": -32602, "message": "Invalid params" }
        }));

        assert_eq!(extract_image(&response), None);
    }
}
