use ego_tree::NodeId;
use scraper::node::Node;
use scraper::Html;

const TRUNCATED_MARKER: &str = "\n.[truncated]";
pub const MAX_PREVIEW_CONTENT: usize = 40_960;

/// Elements that could run code or pull in another document.
const INERT_ELEMENTS: &[&str] = &[
    "script", "style", "noscript", "iframe", "frame", "object", "embed", "template",
];

/// Renders cloned markup as readable text for a terminal host.
///
/// Active content is stripped before conversion, so nothing from the clone
/// can execute in the host.
pub fn render_preview(html: &str) -> String {
    let sanitized = sanitize_html(html);
    let text = html2md::parse_html(&sanitized);
    truncate_preview(text.trim())
}

/// Removes every element listed in [`INERT_ELEMENTS`] with its subtree.
pub fn sanitize_html(html: &str) -> String {
    let mut doc = Html::parse_document(html);
    let doomed: Vec<NodeId> = doc
        .tree
        .nodes()
        .filter(|node| match node.value() {
            Node::Element(element) => INERT_ELEMENTS
                .iter()
                .any(|name| element.name().eq_ignore_ascii_case(name)),
            _ => false,
        })
        .map(|node| node.id())
        .collect();
    for id in doomed {
        if let Some(mut node) = doc.tree.get_mut(id) {
            node.detach();
        }
    }
    doc.root_element().html()
}

fn truncate_preview(text: &str) -> String {
    if text.len() <= MAX_PREVIEW_CONTENT {
        text.to_string()
    } else {
        let mut end = MAX_PREVIEW_CONTENT;
        while end > 0 && !text.is_char_boundary(end) {
            end -= 1;
        }
        let truncated = &text[..end];
        format!("{truncated}{TRUNCATED_MARKER}")
    }
}
