//! # Generation API Client
//!
//! HTTP client for communicating with the presentation-generation backend.
//! Provides methods for submitting a generation, fetching result metadata,
//! building and fetching download URLs, and health monitoring.

use bytes::Bytes;
use reqwest::{Client, Url};
use std::time::Duration;
use tracing::{debug, error, info};

use crate::config::ApiEndpointConfig;
use crate::error::{ClientError, ClientResult};
use crate::types::{
    ErrorBody, GenerationRequest, GenerationResponse, HealthStatus, PresentationInfo,
};

/// Configuration for the generation API client
///
/// Injected at construction time; the client holds no process-wide state.
///
/// # Examples
///
/// ```rust
/// use pptgen_client::GenerationApiConfig;
///
/// // Basic configuration with defaults
/// let config = GenerationApiConfig::default();
/// assert_eq!(config.base_url, "http://localhost:5000/api");
/// assert_eq!(config.timeout_ms, 30000);
///
/// // Custom configuration
/// let config = GenerationApiConfig {
///     base_url: "https://pptgen.example.com/api".to_string(),
///     timeout_ms: 60000,
/// };
/// ```
#[derive(Debug, Clone)]
pub struct GenerationApiConfig {
    /// Base URL for the generation API (e.g., "<http://localhost:5000/api>")
    pub base_url: String,
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for GenerationApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000/api".to_string(),
            timeout_ms: 30000,
        }
    }
}

impl From<&ApiEndpointConfig> for GenerationApiConfig {
    fn from(config: &ApiEndpointConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            timeout_ms: config.timeout_ms,
        }
    }
}

/// HTTP client for communicating with the generation backend
///
/// Every operation is an independent round trip: no retries, no backoff,
/// no caching of results across calls. Failures are never swallowed; each
/// operation returns either the parsed success body or a [`ClientError`]
/// distinguishing transport failures from application failures.
///
/// Cancellation is structural: dropping an operation's future aborts the
/// in-flight request. There is no separate cancellation handle.
///
/// # Examples
///
/// ```rust,ignore
/// use pptgen_client::{GenerationApiClient, GenerationApiConfig};
/// use pptgen_client::types::{GenerationRequest, Template};
///
/// let client = GenerationApiClient::new(GenerationApiConfig::default())?;
///
/// let request = GenerationRequest {
///     topic: "Artificial Intelligence".to_string(),
///     template: Template::Professional.id(),
///     include_code: false,
/// };
///
/// let response = client.generate(request).await?;
/// println!("{}", response.message.unwrap_or_default());
/// ```
#[derive(Clone)]
pub struct GenerationApiClient {
    client: Client,
    config: GenerationApiConfig,
    base_url: Url,
}

impl std::fmt::Debug for GenerationApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerationApiClient")
            .field("base_url", &self.base_url.as_str())
            .field("timeout_ms", &self.config.timeout_ms)
            .finish()
    }
}

impl GenerationApiClient {
    /// Create a new generation API client with the given configuration
    ///
    /// Validates the base URL and sets up the HTTP client with the
    /// configured timeout. The base URL is normalized to a trailing-slash
    /// form so path-bearing bases (the default ends in `/api`) join
    /// correctly with operation paths.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pptgen_client::{GenerationApiClient, GenerationApiConfig};
    ///
    /// let client = GenerationApiClient::new(GenerationApiConfig::default()).unwrap();
    /// assert_eq!(client.base_url(), "http://localhost:5000/api");
    /// ```
    pub fn new(config: GenerationApiConfig) -> ClientResult<Self> {
        let trimmed = config.base_url.trim_end_matches('/');
        let base_url = Url::parse(&format!("{}/", trimmed))
            .map_err(|e| ClientError::config_error(format!("Invalid base URL: {}", e)))?;

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(format!("pptgen-client/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                ClientError::config_error(format!("Failed to create HTTP client: {}", e))
            })?;

        info!(
            base_url = %config.base_url,
            timeout_ms = config.timeout_ms,
            "Created generation API client"
        );

        Ok(Self {
            client,
            config,
            base_url,
        })
    }

    /// Submit a generation request
    ///
    /// POST /generate
    ///
    /// Sends the request as a JSON body and resolves with the parsed
    /// response body, unvalidated. A blank topic is rejected before any
    /// network call, matching the backend's own "Topic is required" rule.
    pub async fn generate(&self, request: GenerationRequest) -> ClientResult<GenerationResponse> {
        if request.topic.trim().is_empty() {
            return Err(ClientError::invalid_input("Topic is required"));
        }

        let url = self.endpoint_url("generate")?;

        debug!(
            url = %url,
            topic = %request.topic,
            template = request.template,
            include_code = request.include_code,
            "Submitting generation request"
        );

        let response = self.client.post(url).json(&request).send().await?;

        let result: GenerationResponse = self
            .handle_response(response, "submit generation", "Failed to generate presentation")
            .await?;

        info!(
            message = result.message.as_deref().unwrap_or(""),
            "Generation request accepted"
        );

        Ok(result)
    }

    /// Fetch metadata for the current generation result
    ///
    /// GET /result
    pub async fn result_info(&self) -> ClientResult<PresentationInfo> {
        let url = self.endpoint_url("result")?;

        debug!(url = %url, "Fetching presentation result info");

        let response = self.client.get(url).send().await?;

        self.handle_response(response, "fetch result info", "Failed to get presentation info")
            .await
    }

    /// Build the download URL for a generated presentation
    ///
    /// Pure and synchronous: concatenates the configured base address, the
    /// download path segment, and the identifier. The identifier is
    /// percent-encoded defensively; URL-safe identifiers pass through
    /// byte-for-byte.
    #[must_use]
    pub fn download_url(&self, presentation_id: &str) -> String {
        format!(
            "{}download/{}",
            self.base_url,
            urlencoding::encode(presentation_id)
        )
    }

    /// Download a generated presentation artifact
    ///
    /// GET /download/{presentation_id}
    ///
    /// Fetches the URL produced by [`download_url`](Self::download_url) and
    /// returns the raw artifact bytes.
    pub async fn download(&self, presentation_id: &str) -> ClientResult<Bytes> {
        let url = self.download_url(presentation_id);

        debug!(url = %url, presentation_id = %presentation_id, "Downloading presentation");

        let response = self.client.get(&url).send().await?;

        if response.status().is_success() {
            let bytes = response.bytes().await?;
            info!(
                presentation_id = %presentation_id,
                size_bytes = bytes.len(),
                "Downloaded presentation artifact"
            );
            Ok(bytes)
        } else {
            Err(self
                .api_failure(response, "download presentation", "Failed to download presentation")
                .await)
        }
    }

    /// Check if the generation API is healthy
    ///
    /// GET /health
    pub async fn health(&self) -> ClientResult<HealthStatus> {
        let url = self.endpoint_url("health")?;

        debug!(url = %url, "Checking generation API health");

        let response = self.client.get(url).send().await?;

        self.handle_response(response, "check service health", "Failed to check service health")
            .await
    }

    /// Get the configured base URL for debugging/logging
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Get the configured timeout for debugging/logging
    #[must_use]
    pub fn timeout_ms(&self) -> u64 {
        self.config.timeout_ms
    }

    // ===================================================================================
    // UTILITY METHODS
    // ===================================================================================

    /// Resolve an operation path against the normalized base URL
    fn endpoint_url(&self, path: &str) -> ClientResult<Url> {
        self.base_url
            .join(path)
            .map_err(|e| ClientError::config_error(format!("Failed to construct URL: {}", e)))
    }

    /// Handle HTTP response with success deserialization and failure normalization
    async fn handle_response<T>(
        &self,
        response: reqwest::Response,
        operation: &str,
        fallback: &str,
    ) -> ClientResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        if response.status().is_success() {
            let body = response.text().await?;
            match serde_json::from_str::<T>(&body) {
                Ok(value) => {
                    debug!("Successfully completed operation: {}", operation);
                    Ok(value)
                }
                Err(e) => {
                    error!(error = %e, "Failed to parse {} response", operation);
                    Err(e.into())
                }
            }
        } else {
            Err(self.api_failure(response, operation, fallback).await)
        }
    }

    /// Normalize a non-success response into an application error
    ///
    /// The message comes from the body's `error` field when the body is
    /// valid JSON carrying one; any other body (missing field, malformed
    /// JSON, unreadable) degrades to the operation's fallback message.
    async fn api_failure(
        &self,
        response: reqwest::Response,
        operation: &str,
        fallback: &str,
    ) -> ClientError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.error)
            .unwrap_or_else(|| fallback.to_string());

        error!(status = %status, message = %message, "Failed operation: {}", operation);
        ClientError::api_error(status.as_u16(), message)
    }
}
