//! Typed access to the campaign contract through an injected EIP-1193 wallet.

pub mod abi;
mod contract;
mod error;
mod provider;
pub mod units;
mod wallet;

pub use alloy_primitives::{Address, B256, U256};
pub use contract::{CampaignContract, ReceiptStatus, SpendingRequest};
pub use error::ChainError;
pub use provider::{Eip1193, ProviderError};
pub use wallet::{WalletClient, chain_id_hex, parse_accounts};
