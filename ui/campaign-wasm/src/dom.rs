//! DOM element bindings.
//!
//! All fields are resolved once at startup. To add new UI elements, add a
//! field here and bind it in `Elements::bind()`.

use cf_api_types::Section;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

// ── Helpers ──

pub fn document() -> Document {
    gloo_utils::document()
}

pub fn window() -> web_sys::Window {
    gloo_utils::window()
}

pub fn by_id(id: &str) -> Option<Element> {
    document().get_element_by_id(id)
}

pub fn by_id_typed<T: JsCast>(id: &str) -> Option<T> {
    by_id(id).and_then(|e| e.dyn_into::<T>().ok())
}

pub fn set_text(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}

pub fn get_input_value(el: &HtmlInputElement) -> String {
    el.value().trim().to_string()
}

pub fn clear_input(el: &HtmlInputElement) {
    el.set_value("");
}

pub fn set_visible(el: &HtmlElement, visible: bool) {
    let _ = el
        .style()
        .set_property("display", if visible { "block" } else { "none" });
}

pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document().create_element(tag)
}

// ── Elements struct ──

/// All DOM element references used by the campaign page.
/// Clone-friendly (all inner types are reference-counted via JS GC).
#[derive(Clone)]
pub struct Elements {
    pub connect_btn: HtmlElement,

    // Wallet
    pub wallet_info: HtmlElement,
    pub wallet_address: Element,
    pub network_name: Element,

    // Campaign stats
    pub campaign_stats: HtmlElement,
    pub total_funds: Element,
    pub total_contributors: Element,
    pub manager_address: Element,

    // Contribute
    pub contribute_section: HtmlElement,
    pub contribute_amount: HtmlInputElement,
    pub contribute_btn: HtmlElement,

    // Requests
    pub requests_section: HtmlElement,
    pub requests_list: Element,

    // Create request (manager)
    pub create_request_section: HtmlElement,
    pub request_description: HtmlInputElement,
    pub request_amount: HtmlInputElement,
    pub request_recipient: HtmlInputElement,
    pub create_request_btn: HtmlElement,

    pub status_message: HtmlElement,
}

macro_rules! get_el {
    ($id:expr) => {
        by_id($id).ok_or_else(|| JsValue::from_str(&format!("missing element #{}", $id)))?
    };
}

macro_rules! get_input {
    ($id:expr) => {
        by_id_typed::<HtmlInputElement>($id)
            .ok_or_else(|| JsValue::from_str(&format!("missing input #{}", $id)))?
    };
}

macro_rules! get_html {
    ($id:expr) => {
        by_id_typed::<HtmlElement>($id)
            .ok_or_else(|| JsValue::from_str(&format!("missing html element #{}", $id)))?
    };
}

impl Elements {
    /// Resolve all DOM references. Call once after the document has loaded.
    pub fn bind() -> Result<Elements, JsValue> {
        Ok(Elements {
            connect_btn: get_html!("connectBtn"),

            wallet_info: get_html!(Section::WalletInfo.element_id()),
            wallet_address: get_el!("walletAddress"),
            network_name: get_el!("networkName"),

            campaign_stats: get_html!(Section::CampaignStats.element_id()),
            total_funds: get_el!("totalFunds"),
            total_contributors: get_el!("totalContributors"),
            manager_address: get_el!("managerAddress"),

            contribute_section: get_html!(Section::Contribute.element_id()),
            contribute_amount: get_input!("contributeAmount"),
            contribute_btn: get_html!("contributeBtn"),

            requests_section: get_html!(Section::Requests.element_id()),
            requests_list: get_el!("requestsList"),

            create_request_section: get_html!(Section::CreateRequest.element_id()),
            request_description: get_input!("requestDescription"),
            request_amount: get_input!("requestAmount"),
            request_recipient: get_input!("requestRecipient"),
            create_request_btn: get_html!("createRequestBtn"),

            status_message: get_html!("statusMessage"),
        })
    }

    pub fn section(&self, section: Section) -> &HtmlElement {
        match section {
            Section::WalletInfo => &self.wallet_info,
            Section::CampaignStats => &self.campaign_stats,
            Section::Contribute => &self.contribute_section,
            Section::Requests => &self.requests_section,
            Section::CreateRequest => &self.create_request_section,
        }
    }
}
