use cloner_logging::{cloner_debug, cloner_info, cloner_warn};

use crate::{AppState, Effect, Msg};

pub const EMPTY_URL_NOTICE: &str = "Please enter a valid URL";
pub const BUSY_NOTICE: &str = "A clone is already in progress";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            // The form is disabled while a request is in flight.
            if let Some(active) = state.in_flight() {
                cloner_debug!("input ignored, request {} still in flight", active);
                return (state, Vec::new());
            }
            state.set_url(text);
            Vec::new()
        }
        Msg::UrlSubmitted => {
            if let Some(active) = state.in_flight() {
                cloner_debug!("submit ignored, request {} still in flight", active);
                return (
                    state,
                    vec![Effect::Notify {
                        message: BUSY_NOTICE.to_string(),
                    }],
                );
            }
            let url = state.url().trim().to_owned();
            if url.is_empty() {
                return (
                    state,
                    vec![Effect::Notify {
                        message: EMPTY_URL_NOTICE.to_string(),
                    }],
                );
            }
            let request_id = state.begin_request();
            cloner_info!("request {} submitted url={}", request_id, url);
            vec![Effect::RequestClone { request_id, url }]
        }
        Msg::CloneResolved { request_id, result } => {
            let success = result.success();
            if state.resolve_request(request_id, result) {
                cloner_info!("request {} resolved success={}", request_id, success);
            } else {
                cloner_warn!("dropping resolution for stale request {}", request_id);
            }
            Vec::new()
        }
        Msg::ModeSelected(mode) => {
            state.set_mode(mode);
            Vec::new()
        }
        Msg::DownloadClicked => match state
            .result()
            .and_then(|result| result.html())
            .filter(|html| !html.is_empty())
        {
            Some(html) => vec![Effect::ExportHtml {
                html: html.to_owned(),
            }],
            None => Vec::new(),
        },
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
