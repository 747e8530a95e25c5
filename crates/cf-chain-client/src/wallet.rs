use crate::contract::parse_quantity;
use crate::error::ChainError;
use crate::provider::Eip1193;
use alloy_primitives::Address;
use serde_json::{Value, json};
use std::rc::Rc;
use tracing::debug;

/// Hex chain identifier as `wallet_switchEthereumChain` expects it (`11155111` → `"0xaa36a7"`).
pub fn chain_id_hex(chain_id: u64) -> String {
    format!("{chain_id:#x}")
}

/// Account and network operations of the injected wallet.
pub struct WalletClient<P> {
    provider: Rc<P>,
}

impl<P> Clone for WalletClient<P> {
    fn clone(&self) -> Self {
        Self {
            provider: Rc::clone(&self.provider),
        }
    }
}

impl<P: Eip1193> WalletClient<P> {
    pub fn new(provider: Rc<P>) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &Rc<P> {
        &self.provider
    }

    /// Prompt for account access; the wallet returns the active account first.
    pub async fn request_accounts(&self) -> Result<Vec<Address>, ChainError> {
        let raw = self
            .provider
            .request("eth_requestAccounts", json!([]))
            .await?;
        parse_accounts(&raw).ok_or_else(|| ChainError::invalid("eth_requestAccounts", raw.to_string()))
    }

    pub async fn chain_id(&self) -> Result<u64, ChainError> {
        let raw = self.provider.request("eth_chainId", json!([])).await?;
        let parsed = match &raw {
            Value::String(text) => parse_quantity(text),
            Value::Number(n) => n.as_u64(),
            _ => None,
        };
        parsed.ok_or_else(|| ChainError::invalid("eth_chainId", raw.to_string()))
    }

    pub async fn switch_chain(&self, chain_id: u64) -> Result<(), ChainError> {
        let hex_id = chain_id_hex(chain_id);
        debug!(chain = %hex_id, "wallet_switchEthereumChain");
        self.provider
            .request("wallet_switchEthereumChain", json!([{ "chainId": hex_id }]))
            .await?;
        Ok(())
    }
}

/// Parse the account list carried by `eth_requestAccounts` and `accountsChanged`.
pub fn parse_accounts(raw: &Value) -> Option<Vec<Address>> {
    raw.as_array()?
        .iter()
        .map(|entry| entry.as_str()?.parse::<Address>().ok())
        .collect()
}
