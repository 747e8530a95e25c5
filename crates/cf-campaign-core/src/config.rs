//! Runtime configuration.
//!
//! Field names follow the page's global `CONFIG` object (camelCase); unknown
//! keys such as a bundled ABI are ignored.

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

pub const SEPOLIA_CHAIN_ID: u64 = 11_155_111;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid campaign config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid contract address `{0}`")]
    InvalidAddress(String),
    #[error("chain id must be non-zero")]
    InvalidChainId,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CampaignConfig {
    #[serde(alias = "address")]
    pub contract_address: String,
    #[serde(default = "default_chain_id")]
    pub chain_id: u64,
    #[serde(default = "default_network_name", alias = "sepoliaNetworkName")]
    pub network_name: String,
    #[serde(default = "default_switch_retry_delay_ms")]
    pub switch_retry_delay_ms: u32,
    #[serde(default = "default_status_hide_ms")]
    pub status_hide_ms: u32,
    #[serde(default = "default_receipt_poll_ms")]
    pub receipt_poll_ms: u32,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_chain_id() -> u64 {
    SEPOLIA_CHAIN_ID
}

fn default_network_name() -> String {
    "Sepolia Testnet".to_owned()
}

fn default_switch_retry_delay_ms() -> u32 {
    1_000
}

fn default_status_hide_ms() -> u32 {
    5_000
}

fn default_receipt_poll_ms() -> u32 {
    1_500
}

fn default_log_level() -> String {
    "info".to_owned()
}

impl CampaignConfig {
    pub fn new(contract_address: impl Into<String>) -> Self {
        Self {
            contract_address: contract_address.into(),
            chain_id: default_chain_id(),
            network_name: default_network_name(),
            switch_retry_delay_ms: default_switch_retry_delay_ms(),
            status_hide_ms: default_status_hide_ms(),
            receipt_poll_ms: default_receipt_poll_ms(),
            log_level: default_log_level(),
        }
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chain_id == 0 {
            return Err(ConfigError::InvalidChainId);
        }
        self.contract_address().map(|_| ())
    }

    pub fn contract_address(&self) -> Result<Address, ConfigError> {
        self.contract_address
            .trim()
            .parse::<Address>()
            .map_err(|_| ConfigError::InvalidAddress(self.contract_address.clone()))
    }
}
