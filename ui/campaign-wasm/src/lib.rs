//! Campaign dApp WASM Frontend
//!
//! Binds the campaign view controller to the browser: DOM elements, the
//! injected `window.ethereum` wallet, status banner and event wiring. Each
//! concern lives in its own module.

pub mod actions;
pub mod config;
pub mod dom;
pub mod events;
pub mod layout;
pub mod logging;
pub mod page;
pub mod state;
pub mod status;
pub mod wallet;

use cf_api_types::Severity;
use cf_campaign_core::Controller;
use std::rc::Rc;
use tracing::{info, warn};
use wasm_bindgen::prelude::*;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub async fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();

    init().await
}

async fn init() -> Result<(), JsValue> {
    let els = dom::Elements::bind()?;

    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            gloo_console::error!(format!("campaign config: {e}"));
            status::show(
                &els.status_message,
                &format!("Configuration error: {e}"),
                Severity::Error,
                status::DEFAULT_HIDE_MS,
            );
            return Err(JsValue::from_str(&e));
        }
    };
    logging::init(&config.log_level);

    let page = page::DomPage::new(els.clone(), config.status_hide_ms);
    if wallet::InjectedProvider::is_available() {
        info!("injected wallet detected");
    } else {
        status::show(
            &els.status_message,
            "Please install MetaMask to use this dApp",
            Severity::Error,
            config.status_hide_ms,
        );
    }

    let controller = Controller::new(Rc::new(wallet::InjectedProvider), page, config)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    state::install(Rc::new(controller));

    events::bind_events(&els)?;
    if let Err(e) = events::bind_wallet_events() {
        warn!(error = ?e, "failed to subscribe to wallet events");
    }

    Ok(())
}
