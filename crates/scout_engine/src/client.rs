use std::fmt;
use std::time::Duration;

use futures_util::StreamExt;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use thiserror::Error;

use scout_core::RemoteResponse;
use scout_logging::{scout_debug, scout_info, scout_warn};

use crate::wire::{decode_response, encode_request, error_message};
use crate::{Config, ScrapeRequest};

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub connect_timeout: Duration,
    /// LLM extraction is slow; this bounds the whole request.
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(120),
            max_bytes: 16 * 1024 * 1024,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    /// The service answered but reported failure in its body.
    Api,
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    Decode,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Api => write!(f, "api error"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::Decode => write!(f, "undecodable response"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}

/// A failed remote call. Displays as its message alone, which is what ends
/// up in an error record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RemoteError {
    pub kind: FailureKind,
    pub message: String,
}

impl RemoteError {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// The hosted scraping/extraction service, seen as one call.
#[async_trait::async_trait]
pub trait ExtractionClient: Send + Sync {
    async fn fetch(&self, url: &str, request: &ScrapeRequest) -> Result<RemoteResponse, RemoteError>;
}

/// HTTP client for a Firecrawl-compatible `/v1/scrape` endpoint.
#[derive(Clone)]
pub struct FirecrawlClient {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    settings: ClientSettings,
}

impl FirecrawlClient {
    pub fn new(config: &Config, settings: ClientSettings) -> Result<Self, RemoteError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| RemoteError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self {
            client,
            endpoint: format!("{}/v1/scrape", config.api_url.trim_end_matches('/')),
            api_key: config.api_key.clone(),
            settings,
        })
    }

    async fn read_body(&self, response: reqwest::Response) -> Result<Vec<u8>, RemoteError> {
        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(too_large(self.settings.max_bytes, Some(content_len)));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(too_large(self.settings.max_bytes, Some(next_len)));
            }
            bytes.extend_from_slice(&chunk);
        }
        Ok(bytes)
    }
}

impl fmt::Debug for FirecrawlClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FirecrawlClient")
            .field("endpoint", &self.endpoint)
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

#[async_trait::async_trait]
impl ExtractionClient for FirecrawlClient {
    async fn fetch(&self, url: &str, request: &ScrapeRequest) -> Result<RemoteResponse, RemoteError> {
        url::Url::parse(url).map_err(|err| RemoteError::new(FailureKind::InvalidUrl, err.to_string()))?;
        let body = encode_request(url, request)
            .map_err(|err| RemoteError::new(FailureKind::Decode, err.to_string()))?;

        scout_info!("POST {} url={} formats={:?}", self.endpoint, url, request.formats);
        let response = self
            .client
            .post(self.endpoint.as_str())
            .bearer_auth(&self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let bytes = self.read_body(response).await?;
        scout_debug!("scrape response status={} bytes={}", status, bytes.len());
        let parsed: Option<Value> = serde_json::from_slice(&bytes).ok();

        if !status.is_success() {
            let message = parsed
                .as_ref()
                .and_then(error_message)
                .unwrap_or_else(|| status.to_string());
            scout_warn!("scrape of {} failed with {}: {}", url, status, message);
            return Err(RemoteError::new(FailureKind::HttpStatus(status.as_u16()), message));
        }

        let Some(parsed) = parsed else {
            return Err(RemoteError::new(
                FailureKind::Decode,
                "response body is not valid JSON",
            ));
        };

        let decoded = decode_response(&parsed);
        if decoded.success == Some(false) {
            if let Some(message) = error_message(&parsed) {
                scout_warn!("scrape of {} reported failure: {}", url, message);
                return Err(RemoteError::new(FailureKind::Api, message));
            }
        }
        Ok(decoded)
    }
}

fn too_large(max_bytes: u64, actual: Option<u64>) -> RemoteError {
    RemoteError::new(
        FailureKind::TooLarge { max_bytes, actual },
        "response too large",
    )
}

fn map_reqwest_error(err: reqwest::Error) -> RemoteError {
    if err.is_timeout() {
        return RemoteError::new(FailureKind::Timeout, err.to_string());
    }
    RemoteError::new(FailureKind::Network, err.to_string())
}
