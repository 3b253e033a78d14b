use crate::view_model::{
    AppViewModel, FailurePanel, FormView, PanelBody, PanelView, SuccessPanel, TabView,
};
use crate::{CloneResult, DisplayMode, GENERIC_FAILURE_MESSAGE};

pub type RequestId = u64;

/// Lifecycle phase of the page, derived from `loading` and `result`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Success,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    url: String,
    loading: bool,
    result: Option<CloneResult>,
    mode: DisplayMode,
    in_flight: Option<RequestId>,
    next_request_id: RequestId,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn result(&self) -> Option<&CloneResult> {
        self.result.as_ref()
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn in_flight(&self) -> Option<RequestId> {
        self.in_flight
    }

    pub fn phase(&self) -> Phase {
        if self.loading {
            return Phase::Loading;
        }
        match &self.result {
            None => Phase::Idle,
            Some(result) if result.success() => Phase::Success,
            Some(_) => Phase::Failed,
        }
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            phase: self.phase(),
            form: FormView {
                url: self.url.clone(),
                enabled: !self.loading,
                button_label: if self.loading {
                    "Cloning..."
                } else {
                    "Clone Website"
                },
            },
            panel: self.panel_view(),
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_url(&mut self, url: String) {
        if self.url != url {
            self.url = url;
            self.dirty = true;
        }
    }

    pub(crate) fn begin_request(&mut self) -> RequestId {
        self.next_request_id += 1;
        let request_id = self.next_request_id;
        self.loading = true;
        self.result = None;
        self.in_flight = Some(request_id);
        self.dirty = true;
        request_id
    }

    /// Stores `result` if it answers the in-flight request. Returns `false`
    /// for stale or unsolicited resolutions, which leave state untouched.
    pub(crate) fn resolve_request(&mut self, request_id: RequestId, result: CloneResult) -> bool {
        if self.in_flight != Some(request_id) {
            return false;
        }
        self.result = Some(result);
        self.in_flight = None;
        self.loading = false;
        self.dirty = true;
        true
    }

    pub(crate) fn set_mode(&mut self, mode: DisplayMode) {
        if self.mode != mode {
            self.mode = mode;
            self.dirty = true;
        }
    }

    fn panel_view(&self) -> Option<PanelView> {
        match self.phase() {
            Phase::Idle => None,
            Phase::Loading => Some(PanelView::Busy),
            Phase::Success | Phase::Failed => self
                .result
                .as_ref()
                .map(|result| self.result_panel(result)),
        }
    }

    fn result_panel(&self, result: &CloneResult) -> PanelView {
        match result {
            CloneResult::Cloned { html, metadata } => {
                let body = match self.mode {
                    DisplayMode::Preview => PanelBody::Preview { html: html.clone() },
                    DisplayMode::Code => PanelBody::Code { text: html.clone() },
                };
                PanelView::Success(SuccessPanel {
                    heading: "Clone Generated Successfully!",
                    summary: metadata.as_ref().and_then(|m| m.summary()),
                    original_url: metadata.as_ref().and_then(|m| m.original_url.clone()),
                    tabs: [DisplayMode::Preview, DisplayMode::Code].map(|mode| TabView {
                        mode,
                        label: mode.label(),
                        active: mode == self.mode,
                    }),
                    body,
                    download_label: "Download HTML",
                })
            }
            CloneResult::Failed { error } => {
                let message = error
                    .as_deref()
                    .filter(|text| !text.trim().is_empty())
                    .unwrap_or(GENERIC_FAILURE_MESSAGE);
                PanelView::Failed(FailurePanel {
                    heading: "Clone Failed",
                    message: message.to_string(),
                })
            }
        }
    }
}
