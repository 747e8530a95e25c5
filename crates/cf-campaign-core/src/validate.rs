//! Form input checks, applied before anything reaches the wallet.

use alloy_primitives::{Address, U256};
use cf_chain_client::units::parse_ether;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter a valid amount")]
    InvalidAmount,
    #[error("Please fill all fields")]
    MissingFields,
    #[error("Amount must be greater than 0")]
    NonPositiveAmount,
    #[error("Recipient must be a valid address")]
    InvalidRecipient,
}

/// Amount for `contribute()`, in wei.
pub fn contribution_amount(text: &str) -> Result<U256, ValidationError> {
    match parse_ether(text) {
        Ok(wei) if !wei.is_zero() => Ok(wei),
        _ => Err(ValidationError::InvalidAmount),
    }
}

/// A validated `createRequest` submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRequest {
    pub description: String,
    pub amount: U256,
    pub recipient: Address,
}

impl NewRequest {
    pub fn parse(description: &str, amount: &str, recipient: &str) -> Result<Self, ValidationError> {
        let (description, amount, recipient) = (description.trim(), amount.trim(), recipient.trim());
        if description.is_empty() || amount.is_empty() || recipient.is_empty() {
            return Err(ValidationError::MissingFields);
        }

        if amount.starts_with('-') {
            return Err(ValidationError::NonPositiveAmount);
        }
        let amount = parse_ether(amount).map_err(|_| ValidationError::InvalidAmount)?;
        if amount.is_zero() {
            return Err(ValidationError::NonPositiveAmount);
        }

        let recipient = recipient
            .parse::<Address>()
            .map_err(|_| ValidationError::InvalidRecipient)?;

        Ok(Self {
            description: description.to_owned(),
            amount,
            recipient,
        })
    }
}
