//! Envio HyperIndex property source.
//!
//! Blocksquare property tokens are indexed by Envio and exposed through a
//! Hasura-style GraphQL endpoint. Each `PropertyToken` entity carries a
//! `propertyValuation` denominated in DAI minor units (wei).
//!
//! One POST per fetch, no pagination, no retry.

mod models;
mod query;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::errors::TvlError;
use crate::models::PropertyRecord;
use crate::provider::PropertySource;

use models::{GraphQlRequest, GraphQlResponse};

pub use query::ACTIVE_PROPERTIES_QUERY;

/// Public Blocksquare indexer endpoint
pub const DEFAULT_ENDPOINT: &str = "https://indexer.hyperindex.xyz/d32ae7c/v1/graphql";

/// Source ID constant
const SOURCE_ID: &str = "ENVIO";

/// Default HTTP request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Longest body excerpt carried in an HTTP status error
const MAX_BODY_EXCERPT: usize = 512;

/// Envio GraphQL property source.
///
/// # Example
///
/// ```ignore
/// use blocksquare_tvl::provider::EnvioPropertySource;
///
/// let source = EnvioPropertySource::new();
/// let records = source.fetch_active_properties().await?;
/// ```
pub struct EnvioPropertySource {
    client: Client,
    endpoint: String,
}

impl Default for EnvioPropertySource {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvioPropertySource {
    /// Create a source for the public Blocksquare endpoint.
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT, DEFAULT_TIMEOUT)
    }

    /// Create a source for a custom endpoint and request timeout.
    pub fn with_endpoint(endpoint: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST the query and return the raw response body.
    async fn post_query(&self) -> Result<String, TvlError> {
        let request = GraphQlRequest {
            query: ACTIVE_PROPERTIES_QUERY,
        };

        debug!("Envio request: POST {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| TvlError::Transport {
                source_id: SOURCE_ID.to_string(),
                message: if e.is_timeout() {
                    format!("Request timed out: {}", e)
                } else {
                    format!("Request failed: {}", e)
                },
            })?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Envio returned HTTP {}", status);
            return Err(TvlError::HttpStatus {
                source_id: SOURCE_ID.to_string(),
                status: status.as_u16(),
                body: body.chars().take(MAX_BODY_EXCERPT).collect(),
            });
        }

        response.text().await.map_err(|e| TvlError::Transport {
            source_id: SOURCE_ID.to_string(),
            message: format!("Failed to read response: {}", e),
        })
    }

    /// Extract `data.PropertyToken` from a response body.
    fn parse_response(body: &str) -> Result<Vec<PropertyRecord>, TvlError> {
        let response: GraphQlResponse =
            serde_json::from_str(body).map_err(|e| TvlError::ResponseFormat {
                source_id: SOURCE_ID.to_string(),
                message: format!("Failed to parse response: {}", e),
            })?;

        if !response.errors.is_empty() {
            let messages: Vec<&str> = response.errors.iter().map(|e| e.message.as_str()).collect();
            return Err(TvlError::ResponseFormat {
                source_id: SOURCE_ID.to_string(),
                message: format!("GraphQL errors: {}", messages.join("; ")),
            });
        }

        response
            .data
            .and_then(|d| d.property_token)
            .ok_or_else(|| TvlError::ResponseFormat {
                source_id: SOURCE_ID.to_string(),
                message: "Missing data.PropertyToken".to_string(),
            })
    }
}

#[async_trait]
impl PropertySource for EnvioPropertySource {
    fn id(&self) -> &'static str {
        SOURCE_ID
    }

    async fn fetch_active_properties(&self) -> Result<Vec<PropertyRecord>, TvlError> {
        let body = self.post_query().await?;
        let records = Self::parse_response(&body)?;
        debug!("Envio returned {} property tokens", records.len());
        Ok(records)
    }
}
