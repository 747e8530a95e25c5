//! DOM implementation of the controller's `Page`.
//!
//! The request list is mounted from `layout::request_list`. Row buttons carry
//! `data-action` and `data-index`; a single delegated listener on
//! `#requestsList` (see `events.rs`) dispatches them.

use async_trait::async_trait;
use cf_api_types::{CampaignSummaryView, RequestRowView, Section, Severity, WalletView};
use cf_campaign_core::Page;
use gloo_timers::future::TimeoutFuture;
use tracing::error;
use wasm_bindgen::prelude::*;
use web_sys::Node;

use crate::dom::{self, Elements};
use crate::layout::{self, Markup};
use crate::status;

pub struct DomPage {
    els: Elements,
    hide_after_ms: u32,
}

impl DomPage {
    pub fn new(els: Elements, hide_after_ms: u32) -> Self {
        Self { els, hide_after_ms }
    }

    fn replace_list(&self, rows: &[RequestRowView]) -> Result<(), JsValue> {
        let list = &self.els.requests_list;
        list.set_inner_html("");
        for markup in layout::request_list(rows) {
            let node = mount(&markup)?;
            list.append_child(&node)?;
        }
        Ok(())
    }
}

/// Build the DOM subtree for `markup`.
fn mount(markup: &Markup) -> Result<Node, JsValue> {
    match markup {
        Markup::Text(text) => Ok(Node::from(dom::document().create_text_node(text))),
        Markup::Element {
            tag,
            class,
            attrs,
            children,
        } => {
            let el = dom::create_element(tag)?;
            if !class.is_empty() {
                el.set_class_name(class);
            }
            for (name, value) in attrs {
                el.set_attribute(name, value)?;
            }
            for child in children {
                let node = mount(child)?;
                el.append_child(&node)?;
            }
            Ok(Node::from(el))
        }
    }
}

#[async_trait(?Send)]
impl Page for DomPage {
    fn show_wallet(&self, wallet: &WalletView) {
        dom::set_text(&self.els.wallet_address, &wallet.short_address);
        dom::set_text(&self.els.network_name, &wallet.network_name);
    }

    fn set_section_visible(&self, section: Section, visible: bool) {
        dom::set_visible(self.els.section(section), visible);
    }

    fn render_summary(&self, summary: &CampaignSummaryView) {
        dom::set_text(&self.els.total_funds, &summary.total_funds);
        dom::set_text(&self.els.total_contributors, &summary.total_contributors);
        dom::set_text(&self.els.manager_address, &summary.manager);
    }

    fn render_requests(&self, rows: &[RequestRowView]) {
        if let Err(e) = self.replace_list(rows) {
            error!(error = ?e, "failed to render request list");
        }
    }

    fn clear_contribution_form(&self) {
        dom::clear_input(&self.els.contribute_amount);
    }

    fn clear_request_form(&self) {
        dom::clear_input(&self.els.request_description);
        dom::clear_input(&self.els.request_amount);
        dom::clear_input(&self.els.request_recipient);
    }

    fn notify(&self, message: &str, severity: Severity) {
        status::show(&self.els.status_message, message, severity, self.hide_after_ms);
    }

    fn reset(&self) {
        for section in Section::ALL {
            self.set_section_visible(section, false);
        }
        self.show_wallet(&WalletView::default());
        self.render_summary(&CampaignSummaryView::default());
        self.els.requests_list.set_inner_html("");
        self.clear_contribution_form();
        self.clear_request_form();
    }

    async fn sleep(&self, ms: u32) {
        TimeoutFuture::new(ms).await;
    }
}
