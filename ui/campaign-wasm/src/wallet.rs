//! Injected EIP-1193 provider (`window.ethereum`).
//!
//! Methods are looked up with `Reflect` at call time so a wallet that is
//! injected after page load is still picked up.

use async_trait::async_trait;
use cf_chain_client::{Eip1193, ProviderError};
use js_sys::{Function, Object, Promise, Reflect};
use serde::Serialize;
use serde_json::Value;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

const INJECTION_KEY: &str = "ethereum";

#[derive(Debug, Clone, Copy, Default)]
pub struct InjectedProvider;

impl InjectedProvider {
    pub fn is_available() -> bool {
        injected().is_some()
    }

    /// Register a wallet event listener (`accountsChanged`, `chainChanged`).
    /// The closure lives for the rest of the page.
    pub fn on(event: &str, handler: impl FnMut(JsValue) + 'static) -> Result<(), JsValue> {
        let wallet = injected().ok_or_else(|| JsValue::from_str("no injected wallet"))?;
        let on = method(&wallet, "on")?;
        let cb = Closure::<dyn FnMut(JsValue)>::new(handler);
        on.call2(&wallet, &JsValue::from_str(event), cb.as_ref())?;
        cb.forget();
        Ok(())
    }
}

#[async_trait(?Send)]
impl Eip1193 for InjectedProvider {
    async fn request(&self, method_name: &str, params: Value) -> Result<Value, ProviderError> {
        let wallet = injected()
            .ok_or_else(|| ProviderError::new(None, "No Ethereum wallet detected"))?;
        let request = method(&wallet, "request").map_err(js_error)?;

        let args = Object::new();
        Reflect::set(&args, &"method".into(), &JsValue::from_str(method_name)).map_err(js_error)?;
        let params = params
            .serialize(&Serializer::json_compatible())
            .map_err(|e| ProviderError::new(None, format!("encode params: {e}")))?;
        Reflect::set(&args, &"params".into(), &params).map_err(js_error)?;

        let promise = request.call1(&wallet, &args).map_err(js_error)?;
        let promise = promise
            .dyn_into::<Promise>()
            .map_err(|_| ProviderError::new(None, format!("{method_name} did not return a promise")))?;
        let result = JsFuture::from(promise).await.map_err(js_error)?;

        serde_wasm_bindgen::from_value(result)
            .map_err(|e| ProviderError::new(None, format!("decode {method_name} result: {e}")))
    }
}

fn injected() -> Option<JsValue> {
    let window = web_sys::window()?;
    Reflect::get(&window, &JsValue::from_str(INJECTION_KEY))
        .ok()
        .filter(|w| !w.is_undefined() && !w.is_null())
}

fn method(wallet: &JsValue, name: &str) -> Result<Function, JsValue> {
    Reflect::get(wallet, &JsValue::from_str(name))?
        .dyn_into::<Function>()
        .map_err(|_| JsValue::from_str(&format!("wallet.{name} is not a function")))
}

/// Wallet errors are plain objects `{ code, message }`; anything else is
/// stringified.
fn js_error(err: JsValue) -> ProviderError {
    let code = Reflect::get(&err, &"code".into())
        .ok()
        .and_then(|c| c.as_f64())
        .map(|c| c as i64);
    let message = Reflect::get(&err, &"message".into())
        .ok()
        .and_then(|m| m.as_string())
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{err:?}"));
    ProviderError::new(code, message)
}
