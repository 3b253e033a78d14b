use crate::{CloneResult, DisplayMode, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the URL input box.
    InputChanged(String),
    /// User submitted the current URL input for cloning.
    UrlSubmitted,
    /// The clone request identified by `request_id` resolved.
    CloneResolved {
        request_id: RequestId,
        result: CloneResult,
    },
    /// User picked a presentation tab.
    ModeSelected(DisplayMode),
    /// User clicked Download HTML.
    DownloadClicked,
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
