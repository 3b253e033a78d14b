use std::time::Duration;

use cloner_core::CloneResult;
use cloner_logging::{cloner_info, cloner_warn};
use futures_util::StreamExt;
use reqwest::header::{HeaderValue, CONTENT_TYPE};

use crate::wire::{decode_clone_response, encode_clone_request};
use crate::{ClientError, FailureKind};

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000";
const CLONE_PATH: &str = "clone";

#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// Base address of the cloning service; `/clone` is appended.
    pub endpoint: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            connect_timeout: Duration::from_secs(10),
            // Cloning renders and scrapes a whole site server-side.
            request_timeout: Duration::from_secs(180),
            max_bytes: 32 * 1024 * 1024,
        }
    }
}

impl ClientSettings {
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }

    /// Full URL of the clone operation.
    pub fn clone_url(&self) -> Result<url::Url, ClientError> {
        let mut base = url::Url::parse(self.endpoint.trim())
            .map_err(|err| ClientError::new(FailureKind::InvalidEndpoint, err.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(ClientError::new(
                FailureKind::InvalidEndpoint,
                format!("{} cannot be a base url", self.endpoint),
            ));
        }
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.join(CLONE_PATH)
            .map_err(|err| ClientError::new(FailureKind::InvalidEndpoint, err.to_string()))
    }
}

#[async_trait::async_trait]
pub trait CloneClient: Send + Sync {
    /// Sends one clone request. `Ok` carries whatever the service decided,
    /// including service-side failures; `Err` means no usable answer arrived.
    async fn request_clone(&self, url: &str) -> Result<CloneResult, ClientError>;
}

/// Runs a clone request and folds transport and decoding failures into a
/// failed [`CloneResult`], so every request ends with something to show.
pub async fn resolve_clone(client: &dyn CloneClient, url: &str) -> CloneResult {
    match client.request_clone(url).await {
        Ok(result) => result,
        Err(err) => {
            cloner_warn!("clone request for {} failed: {}", url, err);
            err.into_clone_result()
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReqwestCloneClient {
    settings: ClientSettings,
    client: reqwest::Client,
}

impl ReqwestCloneClient {
    pub fn new(settings: ClientSettings) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ClientError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }
}

#[async_trait::async_trait]
impl CloneClient for ReqwestCloneClient {
    async fn request_clone(&self, url: &str) -> Result<CloneResult, ClientError> {
        let target = self.settings.clone_url()?;
        let body = encode_clone_request(url)?;

        let response = self
            .client
            .post(target.clone())
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        // The body decides success; the status is only logged.
        let status = response.status();
        cloner_info!("POST {} answered {}", target, status);

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(ClientError::new(
                    FailureKind::TooLarge {
                        max_bytes: self.settings.max_bytes,
                        actual: Some(content_len),
                    },
                    "response too large",
                ));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(ClientError::new(
                    FailureKind::TooLarge {
                        max_bytes: self.settings.max_bytes,
                        actual: Some(next_len),
                    },
                    "response too large",
                ));
            }
            bytes.extend_from_slice(&chunk);
        }

        decode_clone_response(&bytes).map_err(|err| {
            ClientError::new(err.kind, format!("status {status}: {}", err.message))
        })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ClientError {
    if err.is_timeout() {
        return ClientError::new(FailureKind::Timeout, err.to_string());
    }
    ClientError::new(FailureKind::Network, err.to_string())
}
