//! JSON contract with the cloning service.
//!
//! Responses are decoded in two steps: first into the flat wire shape, then
//! into the tagged [`CloneResult`]. A payload that claims success without
//! markup is rejected instead of being passed on half-filled.

use cloner_core::{CloneMetadata, CloneResult};
use cloner_logging::cloner_warn;
use serde::{Deserialize, Serialize};

use crate::{ClientError, FailureKind};

#[derive(Debug, Serialize)]
pub(crate) struct CloneRequest<'a> {
    pub url: &'a str,
}

#[derive(Debug, Deserialize)]
struct WireCloneResult {
    success: bool,
    #[serde(default)]
    html: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    metadata: Option<serde_json::Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WireMetadata {
    original_url: Option<String>,
    elements_extracted: Option<u64>,
    stylesheets_found: Option<u64>,
    has_screenshot: Option<bool>,
}

/// Encodes the request body for `url`.
pub fn encode_clone_request(url: &str) -> Result<Vec<u8>, ClientError> {
    serde_json::to_vec(&CloneRequest { url })
        .map_err(|err| ClientError::new(FailureKind::InvalidRequest, err.to_string()))
}

/// Decodes a response body into a [`CloneResult`].
pub fn decode_clone_response(body: &[u8]) -> Result<CloneResult, ClientError> {
    let wire: WireCloneResult = serde_json::from_slice(body)
        .map_err(|err| ClientError::new(FailureKind::MalformedResponse, err.to_string()))?;

    if !wire.success {
        return Ok(CloneResult::Failed { error: wire.error });
    }

    let html = wire.html.ok_or_else(|| {
        ClientError::new(
            FailureKind::MalformedResponse,
            "success response without html",
        )
    })?;
    let metadata = wire.metadata.and_then(decode_metadata);
    Ok(CloneResult::Cloned { html, metadata })
}

// Metadata is advisory: a bad shape drops it rather than failing the clone.
fn decode_metadata(value: serde_json::Value) -> Option<CloneMetadata> {
    if value.is_null() {
        return None;
    }
    match serde_json::from_value::<WireMetadata>(value) {
        Ok(meta) => Some(CloneMetadata {
            original_url: meta.original_url,
            elements_extracted: meta.elements_extracted,
            stylesheets_found: meta.stylesheets_found,
            has_screenshot: meta.has_screenshot,
        }),
        Err(err) => {
            cloner_warn!("ignoring malformed clone metadata: {}", err);
            None
        }
    }
}
