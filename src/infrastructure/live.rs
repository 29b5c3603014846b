//! Live price source
//!
//! Single JSON quote per invocation from a goldapi.io-style endpoint,
//! authenticated with an `x-access-token` header. Non-2xx responses, network
//! errors, timeouts, and missing fields are all fetch failures; the caller
//! decides whether to retry.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::shared::config::SourceConfig;
use crate::shared::errors::SourceError;
use crate::shared::types::LiveQuote;

/// Seam for the live quote supplier
#[async_trait]
pub trait LivePriceSource: Send + Sync {
    async fn fetch(&self) -> Result<LiveQuote, SourceError>;
}

#[derive(Debug, Deserialize)]
struct GoldApiResponse {
    price: Option<f64>,
    open_price: Option<f64>,
}

/// HTTP client for the gold quote API
pub struct GoldApiClient {
    http_client: Client,
    url: String,
    access_token: String,
}

impl GoldApiClient {
    pub fn new(config: &SourceConfig) -> Result<Self, SourceError> {
        let http_client = Client::builder()
            .timeout(Duration::from_millis(config.fetch_timeout_ms))
            .build()
            .map_err(|e| SourceError::FetchFailed(e.to_string()))?;

        Ok(Self {
            http_client,
            url: config.api_url.clone(),
            access_token: config.access_token.clone(),
        })
    }
}

#[async_trait]
impl LivePriceSource for GoldApiClient {
    async fn fetch(&self) -> Result<LiveQuote, SourceError> {
        let response = self
            .http_client
            .get(&self.url)
            .header("x-access-token", &self.access_token)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| SourceError::FetchFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(SourceError::FetchFailed(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let body: GoldApiResponse = response
            .json()
            .await
            .map_err(|e| SourceError::FetchFailed(e.to_string()))?;

        let price = body.price.ok_or(SourceError::MissingField("price"))?;
        let open_price = body
            .open_price
            .ok_or(SourceError::MissingField("open_price"))?;

        Ok(LiveQuote { price, open_price })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_rejected() {
        let body: GoldApiResponse = serde_json::from_str(r#"{"price": 2345.1}"#).unwrap();
        assert_eq!(body.price, Some(2345.1));
        assert!(body.open_price.is_none());

        let body: GoldApiResponse = serde_json::from_str("{}").unwrap();
        assert!(body.price.is_none());
    }

    #[test]
    fn test_extra_fields_ignored() {
        let raw = r#"{"price": 2345.1, "open_price": 2330.0, "metal": "XAU", "ask": 2346.0}"#;
        let body: GoldApiResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(body.price, Some(2345.1));
        assert_eq!(body.open_price, Some(2330.0));
    }
}
