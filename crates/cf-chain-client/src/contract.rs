use crate::abi::ICampaign;
use crate::error::ChainError;
use crate::provider::Eip1193;
use alloy_primitives::{Address, B256, U256, hex};
use alloy_sol_types::SolCall;
use serde_json::{Value, json};
use std::rc::Rc;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpendingRequest {
    pub description: String,
    pub amount: U256,
    pub recipient: Address,
    pub completed: bool,
    pub approval_count: U256,
    pub reject_count: U256,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReceiptStatus {
    Pending,
    Success,
    Reverted,
}

/// Handle to the deployed campaign contract.
pub struct CampaignContract<P> {
    provider: Rc<P>,
    address: Address,
}

impl<P> Clone for CampaignContract<P> {
    fn clone(&self) -> Self {
        Self {
            provider: Rc::clone(&self.provider),
            address: self.address,
        }
    }
}

impl<P> std::fmt::Debug for CampaignContract<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CampaignContract")
            .field("address", &self.address)
            .finish()
    }
}

impl<P: Eip1193> CampaignContract<P> {
    pub fn new(provider: Rc<P>, address: Address) -> Self {
        Self { provider, address }
    }

    // ── Reads ──

    pub async fn manager(&self) -> Result<Address, ChainError> {
        Ok(self.call(ICampaign::managerCall {}).await?._0)
    }

    pub async fn total_funds(&self) -> Result<U256, ChainError> {
        Ok(self.call(ICampaign::totalFundsCall {}).await?._0)
    }

    pub async fn total_contributors(&self) -> Result<U256, ChainError> {
        Ok(self.call(ICampaign::totalContributorsCall {}).await?._0)
    }

    pub async fn request_count(&self) -> Result<u64, ChainError> {
        let count = self.call(ICampaign::requestCountCall {}).await?._0;
        u64::try_from(count)
            .map_err(|_| ChainError::invalid("eth_call", format!("request count {count} out of range")))
    }

    pub async fn get_request(&self, index: u64) -> Result<SpendingRequest, ChainError> {
        let ret = self
            .call(ICampaign::getRequestCall {
                index: U256::from(index),
            })
            .await?;
        Ok(SpendingRequest {
            description: ret.description,
            amount: ret.amount,
            recipient: ret.recipient,
            completed: ret.completed,
            approval_count: ret.approvalCount,
            reject_count: ret.rejectCount,
        })
    }

    pub async fn has_voted(&self, index: u64, voter: Address) -> Result<bool, ChainError> {
        let ret = self
            .call(ICampaign::hasVotedCall {
                index: U256::from(index),
                voter,
            })
            .await?;
        Ok(ret._0)
    }

    // ── Transactions ──

    pub async fn contribute(&self, from: Address, value: U256) -> Result<B256, ChainError> {
        self.send(from, ICampaign::contributeCall {}, Some(value)).await
    }

    pub async fn create_request(
        &self,
        from: Address,
        description: String,
        amount: U256,
        recipient: Address,
    ) -> Result<B256, ChainError> {
        let call = ICampaign::createRequestCall {
            description,
            amount,
            recipient,
        };
        self.send(from, call, None).await
    }

    pub async fn approve_request(&self, from: Address, index: u64) -> Result<B256, ChainError> {
        let call = ICampaign::approveRequestCall {
            index: U256::from(index),
        };
        self.send(from, call, None).await
    }

    pub async fn reject_request(&self, from: Address, index: u64) -> Result<B256, ChainError> {
        let call = ICampaign::rejectRequestCall {
            index: U256::from(index),
        };
        self.send(from, call, None).await
    }

    pub async fn finalize_request(&self, from: Address, index: u64) -> Result<B256, ChainError> {
        let call = ICampaign::finalizeRequestCall {
            index: U256::from(index),
        };
        self.send(from, call, None).await
    }

    /// Look up a mined receipt. `Pending` while the wallet returns `null`.
    pub async fn receipt_status(&self, tx_hash: B256) -> Result<ReceiptStatus, ChainError> {
        let raw = self
            .provider
            .request("eth_getTransactionReceipt", json!([tx_hash.to_string()]))
            .await?;

        if raw.is_null() {
            return Ok(ReceiptStatus::Pending);
        }
        // Pre-Byzantium receipts carry no status field.
        match raw.get("status").and_then(Value::as_str) {
            None => Ok(ReceiptStatus::Success),
            Some(status) => match parse_quantity(status) {
                Some(1) => Ok(ReceiptStatus::Success),
                Some(0) => Ok(ReceiptStatus::Reverted),
                _ => Err(ChainError::invalid(
                    "eth_getTransactionReceipt",
                    format!("status {status}"),
                )),
            },
        }
    }

    async fn call<C: SolCall>(&self, call: C) -> Result<C::Return, ChainError> {
        let params = json!([
            {
                "to": self.address.to_checksum(None),
                "data": hex::encode_prefixed(call.abi_encode()),
            },
            "latest"
        ]);
        debug!(call = C::SIGNATURE, "eth_call");

        let raw = self.provider.request("eth_call", params).await?;
        let text = raw
            .as_str()
            .ok_or_else(|| ChainError::invalid("eth_call", raw.to_string()))?;
        let bytes = hex::decode(text.trim_start_matches("0x"))
            .map_err(|e| ChainError::invalid("eth_call", e.to_string()))?;

        C::abi_decode_returns(&bytes, true).map_err(|source| ChainError::Decode {
            call: C::SIGNATURE,
            source,
        })
    }

    async fn send<C: SolCall>(
        &self,
        from: Address,
        call: C,
        value: Option<U256>,
    ) -> Result<B256, ChainError> {
        let mut tx = json!({
            "from": from.to_checksum(None),
            "to": self.address.to_checksum(None),
            "data": hex::encode_prefixed(call.abi_encode()),
        });
        if let Some(value) = value {
            tx["value"] = Value::String(format!("0x{value:x}"));
        }
        debug!(call = C::SIGNATURE, from = %from, "eth_sendTransaction");

        let raw = self
            .provider
            .request("eth_sendTransaction", json!([tx]))
            .await?;
        raw.as_str()
            .and_then(|s| s.parse::<B256>().ok())
            .ok_or_else(|| ChainError::invalid("eth_sendTransaction", raw.to_string()))
    }
}

pub(crate) fn parse_quantity(text: &str) -> Option<u64> {
    let digits = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X"))?;
    u64::from_str_radix(digits, 16).ok()
}
