use cloner_core::{
    AppViewModel, FailurePanel, FormView, PanelBody, PanelView, SuccessPanel, INPUT_PLACEHOLDER,
    PAGE_TITLE,
};
use cloner_engine::render_preview;

const RULE: &str = "────────────────────────────────────────────────────────────";

pub fn render_header() -> Vec<String> {
    vec![PAGE_TITLE.to_string(), RULE.to_string()]
}

/// Renders the whole page as terminal lines.
pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = vec![format_form(&view.form)];
    match &view.panel {
        None => {}
        Some(PanelView::Busy) => lines.push("Cloning the website, please wait...".to_string()),
        Some(PanelView::Success(panel)) => render_success(panel, &mut lines),
        Some(PanelView::Failed(panel)) => render_failure(panel, &mut lines),
    }
    lines
}

fn format_form(form: &FormView) -> String {
    let url = if form.url.trim().is_empty() {
        format!("<{INPUT_PLACEHOLDER}>")
    } else {
        form.url.trim().to_string()
    };
    if form.enabled {
        format!("> {url}  [{}]", form.button_label)
    } else {
        format!("> {url}  [{}] (disabled)", form.button_label)
    }
}

fn render_success(panel: &SuccessPanel, lines: &mut Vec<String>) {
    lines.push(panel.heading.to_string());
    if let Some(summary) = &panel.summary {
        lines.push(summary.clone());
    }
    if let Some(original_url) = &panel.original_url {
        lines.push(format!("Source: {original_url}"));
    }

    let tabs = panel
        .tabs
        .iter()
        .map(|tab| {
            if tab.active {
                format!("[{}]", tab.label)
            } else {
                format!(" {} ", tab.label)
            }
        })
        .collect::<Vec<_>>()
        .join(" | ");
    lines.push(format!("{tabs}    :download = {}", panel.download_label));
    lines.push(RULE.to_string());

    let body = match &panel.body {
        PanelBody::Preview { html } => render_preview(html),
        PanelBody::Code { text } => text.clone(),
    };
    lines.extend(body.lines().map(str::to_string));
    lines.push(RULE.to_string());
}

fn render_failure(panel: &FailurePanel, lines: &mut Vec<String>) {
    lines.push(panel.heading.to_string());
    lines.push(panel.message.clone());
}
