//! Request list markup.
//!
//! The list is described as a small node tree and only then mounted into the
//! DOM by `page.rs`. Contract strings always end up in `Text` nodes.

use cf_api_types::{NO_REQUESTS_PLACEHOLDER, RequestRowView, VOTED_INDICATOR};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Markup {
    Element {
        tag: &'static str,
        class: String,
        attrs: Vec<(&'static str, String)>,
        children: Vec<Markup>,
    },
    Text(String),
}

impl Markup {
    pub fn element(tag: &'static str) -> Self {
        Markup::Element {
            tag,
            class: String::new(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn class(mut self, value: impl Into<String>) -> Self {
        if let Markup::Element { class, .. } = &mut self {
            *class = value.into();
        }
        self
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        if let Markup::Element { attrs, .. } = &mut self {
            attrs.push((name, value.into()));
        }
        self
    }

    pub fn child(mut self, node: Markup) -> Self {
        if let Markup::Element { children, .. } = &mut self {
            children.push(node);
        }
        self
    }

    pub fn text(self, value: impl Into<String>) -> Self {
        self.child(Markup::Text(value.into()))
    }

    /// Concatenated text of this node and its descendants.
    pub fn text_content(&self) -> String {
        match self {
            Markup::Text(text) => text.clone(),
            Markup::Element { children, .. } => children.iter().map(Markup::text_content).collect(),
        }
    }
}

/// Children of `#requestsList` for the given rows.
pub fn request_list(rows: &[RequestRowView]) -> Vec<Markup> {
    if rows.is_empty() {
        return vec![
            Markup::element("p")
                .attr("style", "text-align: center; opacity: 0.7;")
                .text(NO_REQUESTS_PLACEHOLDER),
        ];
    }
    rows.iter().map(request_item).collect()
}

fn request_item(row: &RequestRowView) -> Markup {
    let header = Markup::element("div")
        .class("request-header")
        .child(Markup::element("div").class("request-title").text(row.title()))
        .child(
            Markup::element("span")
                .class(format!("status-badge {}", row.status.css_class()))
                .text(row.status.label()),
        );

    let details = Markup::element("div")
        .class("request-details")
        .child(detail_line(&[("Description", row.description.as_str())]))
        .child(detail_line(&[("Amount", row.amount.as_str())]))
        .child(detail_line(&[("Recipient", row.recipient.as_str())]))
        .child(detail_line(&[
            ("Approvals", row.approvals.as_str()),
            ("Rejections", row.rejections.as_str()),
        ]));

    let mut actions = Markup::element("div").class("request-actions");
    for action in row.actions.buttons() {
        actions = actions.child(
            Markup::element("button")
                .class(action.button_class())
                .attr("data-action", action.as_str())
                .attr("data-index", row.index.to_string())
                .text(action.label()),
        );
    }
    if row.actions.voted_indicator {
        actions = actions.child(
            Markup::element("span")
                .attr("style", "opacity: 0.7;")
                .text(VOTED_INDICATOR),
        );
    }

    Markup::element("div")
        .class("request-item")
        .child(header)
        .child(details)
        .child(actions)
}

/// `<p><strong>Label:</strong> value | <strong>Label:</strong> value</p>`
fn detail_line(fields: &[(&str, &str)]) -> Markup {
    let mut p = Markup::element("p");
    for (i, (label, value)) in fields.iter().enumerate() {
        if i > 0 {
            p = p.text(" | ");
        }
        p = p
            .child(Markup::element("strong").text(format!("{label}:")))
            .text(format!(" {value}"));
    }
    p
}
