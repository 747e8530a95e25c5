use crate::config::ConfigError;
use crate::validate::ValidationError;
use cf_chain_client::ChainError;

#[derive(Debug, thiserror::Error)]
pub enum CampaignError {
    #[error("the wallet returned no accounts")]
    NoAccounts,
    #[error("Please connect your wallet first")]
    NotConnected,
    #[error("Please add {network} network to your wallet manually")]
    ChainUnknown { network: String },
    #[error("Please switch to {network} in your wallet manually")]
    SwitchRejected { network: String },
    #[error("wallet is on chain {actual}, expected {network} ({expected})")]
    WrongNetwork {
        network: String,
        expected: u64,
        actual: u64,
    },
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Chain(#[from] ChainError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The session this operation started under has been invalidated.
    #[error("session invalidated")]
    Cancelled,
}

impl CampaignError {
    /// Banner text for a failed action. Instructional errors stand alone,
    /// everything else is prefixed with what was being attempted.
    pub fn user_message(&self, context: &str) -> String {
        match self {
            CampaignError::NotConnected
            | CampaignError::ChainUnknown { .. }
            | CampaignError::SwitchRejected { .. }
            | CampaignError::Validation(_) => self.to_string(),
            _ => format!("{context}: {self}"),
        }
    }
}
