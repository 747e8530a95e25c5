//! Event binding.
//!
//! Wires the page buttons, the delegated request-row listener, and the
//! wallet's `accountsChanged` / `chainChanged` events. Async handlers run via
//! `wasm_bindgen_futures::spawn_local`.

use crate::actions;
use crate::dom::Elements;
use crate::state;
use crate::wallet::InjectedProvider;
use cf_api_types::RequestAction;
use cf_chain_client::parse_accounts;
use std::cell::Cell;
use tracing::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

/// Helper: attach an async click handler that receives the controller.
macro_rules! on_click_async {
    ($el:expr, $els:expr, $handler:expr) => {{
        let els = $els.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            let els2 = els.clone();
            let Some(ctl) = state::controller() else {
                return;
            };
            wasm_bindgen_futures::spawn_local(async move {
                $handler(&ctl, &els2).await;
            });
        }) as Box<dyn FnMut(_)>);
        $el.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }};
}

/// Bind all page event listeners. Call once after the controller is installed.
pub fn bind_events(els: &Elements) -> Result<(), JsValue> {
    // ── Wallet ──
    on_click_async!(els.connect_btn, els, actions::on_connect);

    // ── Contribute / create request ──
    on_click_async!(els.contribute_btn, els, actions::on_contribute);
    on_click_async!(els.create_request_btn, els, actions::on_create_request);

    // ── Request rows (delegated; rows are re-rendered on every refresh) ──
    {
        let cb = Closure::wrap(Box::new(move |ev: web_sys::MouseEvent| {
            let Some((action, index)) = row_action(&ev) else {
                return;
            };
            let Some(ctl) = state::controller() else {
                return;
            };
            wasm_bindgen_futures::spawn_local(async move {
                ctl.request_action(action, index).await;
            });
        }) as Box<dyn FnMut(_)>);
        els.requests_list
            .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }

    Ok(())
}

/// Resolve the `data-action` / `data-index` pair of the clicked row button.
fn row_action(ev: &web_sys::MouseEvent) -> Option<(RequestAction, u64)> {
    let target = ev.target()?.dyn_into::<Element>().ok()?;
    let button = target.closest("button[data-action]").ok()??;
    let action = RequestAction::parse(&button.get_attribute("data-action")?)?;
    let index = button.get_attribute("data-index")?.parse().ok()?;
    Some((action, index))
}

thread_local! {
    static WALLET_EVENTS_BOUND: Cell<bool> = const { Cell::new(false) };
}

/// Marks wallet listeners as registered. Returns `false` if they already were.
fn claim_wallet_events() -> bool {
    !WALLET_EVENTS_BOUND.with(|bound| bound.replace(true))
}

/// Subscribe to wallet events, at most once per page. Called at startup and
/// again after every successful connect, so a wallet injected after load is
/// still observed.
pub fn bind_wallet_events() -> Result<(), JsValue> {
    if !InjectedProvider::is_available() || !claim_wallet_events() {
        return Ok(());
    }

    InjectedProvider::on("accountsChanged", |accounts: JsValue| {
        let parsed = serde_wasm_bindgen::from_value::<serde_json::Value>(accounts)
            .ok()
            .and_then(|value| parse_accounts(&value));
        let Some(accounts) = parsed else {
            warn!("ignoring malformed accountsChanged payload");
            return;
        };
        let Some(ctl) = state::controller() else {
            return;
        };
        wasm_bindgen_futures::spawn_local(async move {
            ctl.accounts_changed(accounts).await;
        });
    })?;

    InjectedProvider::on("chainChanged", |_chain_id: JsValue| {
        if let Some(ctl) = state::controller() {
            ctl.chain_changed();
        }
    })?;

    Ok(())
}
