//! Runtime configuration.
//!
//! Priority: a global `window.CONFIG` object → `config.json` next to the page.

use cf_campaign_core::CampaignConfig;
use gloo_net::http::Request;
use js_sys::Reflect;
use wasm_bindgen::prelude::*;

use crate::dom;

const CONFIG_GLOBAL: &str = "CONFIG";
const CONFIG_URL: &str = "config.json";

pub async fn load() -> Result<CampaignConfig, String> {
    match from_global()? {
        Some(config) => Ok(config),
        None => fetch(CONFIG_URL).await,
    }
}

fn from_global() -> Result<Option<CampaignConfig>, String> {
    let value = Reflect::get(&dom::window(), &JsValue::from_str(CONFIG_GLOBAL))
        .map_err(|e| format!("{e:?}"))?;
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }
    let config: CampaignConfig =
        serde_wasm_bindgen::from_value(value).map_err(|e| format!("window.{CONFIG_GLOBAL}: {e}"))?;
    config.validate().map_err(|e| e.to_string())?;
    Ok(Some(config))
}

async fn fetch(url: &str) -> Result<CampaignConfig, String> {
    let resp = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("fetch {url}: {e}"))?;
    if !resp.ok() {
        return Err(format!("fetch {url}: HTTP {}", resp.status()));
    }
    let text = resp.text().await.map_err(|e| format!("read {url}: {e}"))?;
    CampaignConfig::from_json(&text).map_err(|e| format!("{url}: {e}"))
}
