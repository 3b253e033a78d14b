#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Show a transient notice to the user without touching state.
    Notify { message: String },
    /// POST the trimmed URL to the cloning service.
    RequestClone {
        request_id: crate::RequestId,
        url: String,
    },
    /// Save the current result's markup as a local file.
    ExportHtml { html: String },
}
