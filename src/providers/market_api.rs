use crate::core::{AppConfig, MarketDataProvider, PipelineError, RawMarketPayload};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use tracing::{debug, instrument, warn};

/// Fetches the latest listings from the configured market API in a single GET.
pub struct MarketApiProvider {
    api_url: Option<String>,
    header_name: Option<String>,
    api_key: Option<String>,
}

impl MarketApiProvider {
    pub fn new(config: &AppConfig) -> Self {
        MarketApiProvider {
            api_url: config.api_url.clone(),
            header_name: config.api_header_key_title.clone(),
            api_key: config.api_key.clone(),
        }
    }

    fn headers(header_name: &str, api_key: &str) -> Result<HeaderMap, PipelineError> {
        let name = HeaderName::from_bytes(header_name.as_bytes())
            .map_err(|e| PipelineError::InvalidHeader(format!("name '{header_name}': {e}")))?;
        let value = HeaderValue::from_str(api_key)
            .map_err(|e| PipelineError::InvalidHeader(format!("value for '{header_name}': {e}")))?;

        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static("accepts"),
            HeaderValue::from_static("application/json"),
        );
        headers.insert(name, value);
        Ok(headers)
    }
}

#[async_trait]
impl MarketDataProvider for MarketApiProvider {
    #[instrument(name = "MarketApiFetch", skip(self))]
    async fn fetch(&self) -> Result<RawMarketPayload> {
        let (api_url, header_name, api_key) = match (
            AppConfig::require(&self.api_url, "api-url"),
            AppConfig::require(&self.header_name, "api-header-key-title"),
            AppConfig::require(&self.api_key, "api-key"),
        ) {
            (Ok(url), Ok(name), Ok(key)) => (url, name, key),
            (url, name, key) => {
                let missing = [url.err(), name.err(), key.err()];
                for err in missing.iter().flatten() {
                    debug!(error = %err, "Skipping market data request");
                }
                return Ok(RawMarketPayload::empty());
            }
        };

        let headers = Self::headers(header_name, api_key)?;
        let client = reqwest::Client::builder()
            .user_agent("cryptogauge/1.0")
            .build()
            .context("Failed to build HTTP client")?;

        debug!("Requesting market data from {}", api_url);
        let response = match client.get(api_url).headers(headers).send().await {
            Ok(response) => response,
            Err(e) if e.is_builder() => {
                return Err(e).with_context(|| format!("Invalid market API URL: {api_url}"));
            }
            Err(e) => {
                warn!(error = %e, "Market data request failed, continuing with empty payload");
                return Ok(RawMarketPayload::empty());
            }
        };
        debug!(status = %response.status(), "Received market API response");

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                warn!(error = %e, "Failed to read market API response, continuing with empty payload");
                return Ok(RawMarketPayload::empty());
            }
        };

        let value: serde_json::Value =
            serde_json::from_str(&body).map_err(PipelineError::MalformedPayload)?;
        Ok(RawMarketPayload::from(value))
    }
}
