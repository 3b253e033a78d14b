use cloner_core::{
    update, AppState, CloneMetadata, CloneResult, DisplayMode, Effect, Msg, PanelBody, PanelView,
    Phase, GENERIC_FAILURE_MESSAGE,
};
use pretty_assertions::assert_eq;

fn resolved(result: CloneResult) -> AppState {
    let (state, _) = update(AppState::new(), Msg::InputChanged("example.com".to_string()));
    let (state, effects) = update(state, Msg::UrlSubmitted);
    let request_id = match effects.as_slice() {
        [Effect::RequestClone { request_id, .. }] => *request_id,
        other => panic!("unexpected effects: {other:?}"),
    };
    let (state, _) = update(state, Msg::CloneResolved { request_id, result });
    state
}

fn scenario_a() -> CloneResult {
    CloneResult::cloned(
        "<p>hi</p>",
        Some(CloneMetadata {
            elements_extracted: Some(3),
            stylesheets_found: Some(1),
            has_screenshot: Some(false),
            ..CloneMetadata::default()
        }),
    )
}

fn success_panel(state: &AppState) -> cloner_core::SuccessPanel {
    match state.view().panel {
        Some(PanelView::Success(panel)) => panel,
        other => panic!("expected success panel, got {other:?}"),
    }
}

#[test]
fn loading_shows_busy_panel_and_disabled_form() {
    let (state, _) = update(AppState::new(), Msg::InputChanged("example.com".to_string()));
    let (state, _) = update(state, Msg::UrlSubmitted);
    let view = state.view();

    assert_eq!(view.phase, Phase::Loading);
    assert_eq!(view.panel, Some(PanelView::Busy));
    assert!(!view.form.enabled);
    assert_eq!(view.form.button_label, "Cloning...");
}

#[test]
fn success_shows_summary_and_preview() {
    let state = resolved(scenario_a());
    let panel = success_panel(&state);

    assert_eq!(state.view().phase, Phase::Success);
    assert_eq!(panel.heading, "Clone Generated Successfully!");
    assert_eq!(
        panel.summary.as_deref(),
        Some("Elements: 3, Stylesheets: 1, Screenshot: ✗")
    );
    assert_eq!(
        panel.body,
        PanelBody::Preview {
            html: "<p>hi</p>".to_string()
        }
    );
    assert!(panel.tabs[0].active);
    assert!(!panel.tabs[1].active);
    assert_eq!(panel.download_label, "Download HTML");
}

#[test]
fn success_without_metadata_renders_without_summary() {
    let state = resolved(CloneResult::cloned("<p>bare</p>", None));
    let panel = success_panel(&state);

    assert_eq!(panel.summary, None);
    assert_eq!(panel.original_url, None);
}

#[test]
fn original_url_is_carried_to_the_panel() {
    let state = resolved(CloneResult::cloned(
        "<p>x</p>",
        Some(CloneMetadata {
            original_url: Some("https://example.com/".to_string()),
            ..CloneMetadata::default()
        }),
    ));
    let panel = success_panel(&state);

    assert_eq!(panel.original_url.as_deref(), Some("https://example.com/"));
    assert_eq!(panel.summary, None);
}

#[test]
fn service_error_is_shown_verbatim() {
    let state = resolved(CloneResult::failed("Invalid URL"));

    match state.view().panel {
        Some(PanelView::Failed(panel)) => {
            assert_eq!(panel.heading, "Clone Failed");
            assert_eq!(panel.message, "Invalid URL");
        }
        other => panic!("expected failure panel, got {other:?}"),
    }
}

#[test]
fn service_error_keeps_surrounding_whitespace() {
    let state = resolved(CloneResult::failed("  Invalid URL\n"));

    match state.view().panel {
        Some(PanelView::Failed(panel)) => assert_eq!(panel.message, "  Invalid URL\n"),
        other => panic!("expected failure panel, got {other:?}"),
    }
}

#[test]
fn missing_or_blank_error_falls_back_to_generic_message() {
    for result in [
        CloneResult::Failed { error: None },
        CloneResult::Failed {
            error: Some("  ".to_string()),
        },
    ] {
        let state = resolved(result);
        match state.view().panel {
            Some(PanelView::Failed(panel)) => assert_eq!(panel.message, GENERIC_FAILURE_MESSAGE),
            other => panic!("expected failure panel, got {other:?}"),
        }
    }
}

#[test]
fn toggling_mode_keeps_result_and_restores_rendering() {
    let state = resolved(scenario_a());
    let original_view = state.view();
    let original_result = state.result().cloned();

    let (state, effects) = update(state, Msg::ModeSelected(DisplayMode::Code));
    assert!(effects.is_empty());
    assert_eq!(state.result().cloned(), original_result);
    let panel = success_panel(&state);
    assert_eq!(
        panel.body,
        PanelBody::Code {
            text: "<p>hi</p>".to_string()
        }
    );
    assert!(panel.tabs[1].active);

    let (state, _) = update(state, Msg::ModeSelected(DisplayMode::Preview));
    assert_eq!(state.result().cloned(), original_result);
    assert_eq!(state.view().panel, original_view.panel);
}

#[test]
fn mode_survives_new_submission() {
    let state = resolved(CloneResult::cloned("<p>one</p>", None));
    let (state, _) = update(state, Msg::ModeSelected(DisplayMode::Code));
    let (state, effects) = update(state, Msg::UrlSubmitted);
    let request_id = match effects.as_slice() {
        [Effect::RequestClone { request_id, .. }] => *request_id,
        other => panic!("unexpected effects: {other:?}"),
    };
    let (state, _) = update(
        state,
        Msg::CloneResolved {
            request_id,
            result: CloneResult::cloned("<p>two</p>", None),
        },
    );

    assert_eq!(state.mode(), DisplayMode::Code);
    assert_eq!(
        success_panel(&state).body,
        PanelBody::Code {
            text: "<p>two</p>".to_string()
        }
    );
}

#[test]
fn download_exports_current_html() {
    let state = resolved(scenario_a());
    let (next, effects) = update(state.clone(), Msg::DownloadClicked);

    assert_eq!(next, state);
    assert_eq!(
        effects,
        vec![Effect::ExportHtml {
            html: "<p>hi</p>".to_string()
        }]
    );
}

#[test]
fn download_without_html_is_noop() {
    let (idle, effects) = update(AppState::new(), Msg::DownloadClicked);
    assert!(effects.is_empty());
    assert_eq!(idle, AppState::new());

    let failed = resolved(CloneResult::failed("Invalid URL"));
    let (_, effects) = update(failed, Msg::DownloadClicked);
    assert!(effects.is_empty());
}

#[test]
fn download_with_empty_html_is_noop() {
    let state = resolved(CloneResult::cloned("", None));
    assert_eq!(state.phase(), Phase::Success);

    let (next, effects) = update(state.clone(), Msg::DownloadClicked);

    assert!(effects.is_empty());
    assert_eq!(next, state);
}
