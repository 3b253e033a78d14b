/// Shown when the cloning service could not be reached at all.
pub const SERVICE_UNREACHABLE_MESSAGE: &str =
    "Failed to connect to the cloning service. Make sure the backend is running.";

/// Shown when the service answered with something that is not a clone result.
pub const MALFORMED_RESPONSE_MESSAGE: &str =
    "The cloning service returned an unexpected response.";

/// Shown for a failed clone that carries no usable error text.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong while cloning the website.";

/// Outcome of one clone operation as reported by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CloneResult {
    Cloned {
        html: String,
        metadata: Option<CloneMetadata>,
    },
    Failed {
        error: Option<String>,
    },
}

impl CloneResult {
    pub fn cloned(html: impl Into<String>, metadata: Option<CloneMetadata>) -> Self {
        CloneResult::Cloned {
            html: html.into(),
            metadata,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        CloneResult::Failed {
            error: Some(error.into()),
        }
    }

    /// Synthetic failure for requests that never produced a response.
    pub fn service_unreachable() -> Self {
        Self::failed(SERVICE_UNREACHABLE_MESSAGE)
    }

    /// Synthetic failure for responses that do not decode as a clone result.
    pub fn malformed_response() -> Self {
        Self::failed(MALFORMED_RESPONSE_MESSAGE)
    }

    pub fn success(&self) -> bool {
        matches!(self, CloneResult::Cloned { .. })
    }

    pub fn html(&self) -> Option<&str> {
        match self {
            CloneResult::Cloned { html, .. } => Some(html),
            CloneResult::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            CloneResult::Cloned { .. } => None,
            CloneResult::Failed { error } => error.as_deref(),
        }
    }

    pub fn metadata(&self) -> Option<&CloneMetadata> {
        match self {
            CloneResult::Cloned { metadata, .. } => metadata.as_ref(),
            CloneResult::Failed { .. } => None,
        }
    }
}

/// Advisory statistics about a clone. Every field may be missing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CloneMetadata {
    pub original_url: Option<String>,
    pub elements_extracted: Option<u64>,
    pub stylesheets_found: Option<u64>,
    pub has_screenshot: Option<bool>,
}

impl CloneMetadata {
    /// One-line summary of the fields present, e.g.
    /// `Elements: 3, Stylesheets: 1, Screenshot: ✗`.
    ///
    /// Returns `None` when no summary field is present.
    pub fn summary(&self) -> Option<String> {
        let mut parts = Vec::with_capacity(3);
        if let Some(elements) = self.elements_extracted {
            parts.push(format!("Elements: {elements}"));
        }
        if let Some(stylesheets) = self.stylesheets_found {
            parts.push(format!("Stylesheets: {stylesheets}"));
        }
        if let Some(has_screenshot) = self.has_screenshot {
            let mark = if has_screenshot { "✓" } else { "✗" };
            parts.push(format!("Screenshot: {mark}"));
        }
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }
}

/// How a successful result is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Preview,
    Code,
}

impl DisplayMode {
    pub fn label(self) -> &'static str {
        match self {
            DisplayMode::Preview => "Preview",
            DisplayMode::Code => "Tailwind HTML",
        }
    }
}
