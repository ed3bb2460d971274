//! API client for the market-data backend
//!
//! Wraps the read-only endpoints with JSON decoding. Every call is a fresh
//! round trip: no retry, no caching.

use crate::models::*;
use crate::settings::ApiSettings;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// API error types
///
/// Transport failures, error statuses and undecodable bodies are kept apart
/// for logging, but callers treat them all as one failed call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("server returned {status}: {detail}")]
    Status { status: u16, detail: String },

    #[error("invalid response body: {0}")]
    Parse(String),
}

/// Read-only market data operations.
///
/// Implemented by [`TickerboardClient`]; the controller only depends on this
/// trait so that loads can be driven by an in-memory source in tests.
#[async_trait]
pub trait MarketData: Send + Sync {
    async fn get_top_gainers(&self) -> Result<TopGainers, ApiError>;

    async fn get_top_losers(&self) -> Result<TopLosers, ApiError>;

    async fn get_companies(&self) -> Result<Vec<Company>, ApiError>;

    async fn get_stock_series(&self, ticker: &str, days: u32) -> Result<Vec<SeriesPoint>, ApiError>;

    async fn get_summary(&self, ticker: &str) -> Result<StockSummary, ApiError>;

    async fn compare(&self, ticker1: &str, ticker2: &str, days: u32) -> Result<ComparisonResult, ApiError>;

    async fn get_volatility(&self, ticker: &str, days: u32) -> Result<VolatilityMetrics, ApiError>;

    async fn health_check(&self) -> Result<HealthStatus, ApiError>;
}

/// HTTP client for the backend
#[derive(Debug, Clone)]
pub struct TickerboardClient {
    base_url: String,
    client: reqwest::Client,
}

impl TickerboardClient {
    /// Create a new client with default localhost URL
    pub fn new() -> Self {
        Self::with_url(DEFAULT_BASE_URL.to_string())
    }

    /// Create a new client with custom base URL
    pub fn with_url(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Build a client from the `api` settings block, honouring the optional timeout
    pub fn from_settings(settings: &ApiSettings) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = settings.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of an endpoint below the base path. Each segment is escaped on
    /// its own, so a ticker can never add path levels or a query.
    pub fn endpoint(&self, segments: &[&str]) -> Result<reqwest::Url, ApiError> {
        let mut url = reqwest::Url::parse(&self.base_url)
            .map_err(|e| ApiError::Network(format!("invalid base URL {}: {}", self.base_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| ApiError::Network(format!("base URL {} cannot take a path", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = self.endpoint(segments)?;
        log::debug!("GET {} {:?}", url, query);

        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                detail: error_detail(&body),
            });
        }

        serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))
    }
}

impl Default for TickerboardClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MarketData for TickerboardClient {
    async fn get_top_gainers(&self) -> Result<TopGainers, ApiError> {
        self.get_json(&["top-gainers"], &[]).await
    }

    async fn get_top_losers(&self) -> Result<TopLosers, ApiError> {
        self.get_json(&["top-losers"], &[]).await
    }

    async fn get_companies(&self) -> Result<Vec<Company>, ApiError> {
        self.get_json(&["companies"], &[]).await
    }

    async fn get_stock_series(&self, ticker: &str, days: u32) -> Result<Vec<SeriesPoint>, ApiError> {
        self.get_json(&["stock", ticker], &[("days", days.to_string())])
            .await
    }

    async fn get_summary(&self, ticker: &str) -> Result<StockSummary, ApiError> {
        self.get_json(&["summary", ticker], &[]).await
    }

    async fn compare(&self, ticker1: &str, ticker2: &str, days: u32) -> Result<ComparisonResult, ApiError> {
        self.get_json(
            &["compare"],
            &[
                ("ticker1", ticker1.to_string()),
                ("ticker2", ticker2.to_string()),
                ("days", days.to_string()),
            ],
        )
        .await
    }

    async fn get_volatility(&self, ticker: &str, days: u32) -> Result<VolatilityMetrics, ApiError> {
        self.get_json(&["volatility", ticker], &[("days", days.to_string())])
            .await
    }

    async fn health_check(&self) -> Result<HealthStatus, ApiError> {
        self.get_json(&["health"], &[]).await
    }
}

/// Pull FastAPI's `{"detail": ...}` message out of an error body, falling
/// back to the raw text.
fn error_detail(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let client = TickerboardClient::with_url("http://example.test/api/".to_string());
        assert_eq!(client.base_url(), "http://example.test/api");
        assert_eq!(
            client.endpoint(&["companies"]).unwrap().as_str(),
            "http://example.test/api/companies"
        );
        assert_eq!(
            client.endpoint(&["summary", "TCS"]).unwrap().as_str(),
            "http://example.test/api/summary/TCS"
        );
    }

    #[test]
    fn test_endpoint_escapes_ticker_segment() {
        let client = TickerboardClient::with_url("http://example.test/api".to_string());
        assert_eq!(
            client.endpoint(&["summary", "BRK/A"]).unwrap().as_str(),
            "http://example.test/api/summary/BRK%2FA"
        );
        assert_eq!(
            client.endpoint(&["stock", "A?B#C"]).unwrap().as_str(),
            "http://example.test/api/stock/A%3FB%23C"
        );
        assert_eq!(
            client.endpoint(&["stock", "M&M"]).unwrap().as_str(),
            "http://example.test/api/stock/M&M"
        );
    }

    #[test]
    fn test_endpoint_on_bare_host() {
        let client = TickerboardClient::with_url("http://example.test/".to_string());
        assert_eq!(
            client.endpoint(&["health"]).unwrap().as_str(),
            "http://example.test/health"
        );
    }

    #[test]
    fn test_invalid_base_url_is_an_error() {
        let client = TickerboardClient::with_url("not a url".to_string());
        assert!(matches!(client.endpoint(&["health"]), Err(ApiError::Network(_))));
    }

    #[test]
    fn test_error_detail_extraction() {
        assert_eq!(
            error_detail(r#"{"detail": "No data found for ticker XYZ"}"#),
            "No data found for ticker XYZ"
        );
        assert_eq!(error_detail("Internal Server Error\n"), "Internal Server Error");
    }
}
