//! Cloner core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod result;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use result::{
    CloneMetadata, CloneResult, DisplayMode, GENERIC_FAILURE_MESSAGE, MALFORMED_RESPONSE_MESSAGE,
    SERVICE_UNREACHABLE_MESSAGE,
};
pub use state::{AppState, Phase, RequestId};
pub use update::{update, BUSY_NOTICE, EMPTY_URL_NOTICE};
pub use view_model::{
    AppViewModel, FailurePanel, FormView, PanelBody, PanelView, SuccessPanel, TabView,
    INPUT_PLACEHOLDER, PAGE_TITLE,
};
