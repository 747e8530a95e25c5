//! Form-driven user actions.
//!
//! Each handler reads its inputs from the bound elements and hands the raw
//! text to the controller, which validates before any wallet call.

use crate::dom::{self, Elements};
use crate::events;
use crate::state::AppController;
use tracing::warn;

pub async fn on_connect(ctl: &AppController, _els: &Elements) {
    ctl.connect().await;
    if ctl.is_connected() {
        if let Err(e) = events::bind_wallet_events() {
            warn!(error = ?e, "failed to subscribe to wallet events");
        }
    }
}

pub async fn on_contribute(ctl: &AppController, els: &Elements) {
    let amount = dom::get_input_value(&els.contribute_amount);
    ctl.contribute(&amount).await;
}

pub async fn on_create_request(ctl: &AppController, els: &Elements) {
    let description = dom::get_input_value(&els.request_description);
    let amount = dom::get_input_value(&els.request_amount);
    let recipient = dom::get_input_value(&els.request_recipient);
    ctl.create_request(&description, &amount, &recipient).await;
}
