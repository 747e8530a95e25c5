use crate::provider::ProviderError;
use alloy_primitives::B256;

#[derive(Debug, thiserror::Error)]
pub enum ChainError {
    #[error(transparent)]
    Provider(#[from] ProviderError),
    #[error("could not decode {call} result: {source}")]
    Decode {
        call: &'static str,
        #[source]
        source: alloy_sol_types::Error,
    },
    #[error("unexpected {method} response: {detail}")]
    InvalidResponse { method: &'static str, detail: String },
    #[error("transaction {0} reverted")]
    Reverted(B256),
}

impl ChainError {
    pub(crate) fn invalid(method: &'static str, detail: impl Into<String>) -> Self {
        Self::InvalidResponse {
            method,
            detail: detail.into(),
        }
    }
}
