use async_trait::async_trait;
use serde_json::Value;

/// Code returned by `wallet_switchEthereumChain` for a chain the wallet does not know.
const UNRECOGNIZED_CHAIN: i64 = 4902;

/// Rejection reported by the wallet.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ProviderError {
    pub code: Option<i64>,
    pub message: String,
}

impl ProviderError {
    pub fn new(code: Option<i64>, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn is_unrecognized_chain(&self) -> bool {
        self.code == Some(UNRECOGNIZED_CHAIN)
    }
}

/// The `request({ method, params })` surface of an injected wallet.
///
/// Browser wallets resolve on the single JS thread, so futures are not `Send`.
#[async_trait(?Send)]
pub trait Eip1193 {
    async fn request(&self, method: &str, params: Value) -> Result<Value, ProviderError>;
}
