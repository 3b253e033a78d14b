use crate::{DisplayMode, Phase};

pub const PAGE_TITLE: &str = "What would you like to scrape today?";
pub const INPUT_PLACEHOLDER: &str = "Enter website URL";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub phase: Phase,
    pub form: FormView,
    /// `None` while idle: only the form is shown.
    pub panel: Option<PanelView>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormView {
    pub url: String,
    /// False while a request is in flight.
    pub enabled: bool,
    pub button_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelView {
    Busy,
    Success(SuccessPanel),
    Failed(FailurePanel),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuccessPanel {
    pub heading: &'static str,
    pub summary: Option<String>,
    pub original_url: Option<String>,
    pub tabs: [TabView; 2],
    pub body: PanelBody,
    pub download_label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabView {
    pub mode: DisplayMode,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelBody {
    /// Markup to be shown in an isolated rendering context.
    Preview { html: String },
    /// Markup shown verbatim as text.
    Code { text: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailurePanel {
    pub heading: &'static str,
    pub message: String,
}
