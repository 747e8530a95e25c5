use alloy_primitives::Address;
use cf_chain_client::CampaignContract;

/// A connected wallet account bound to the campaign contract.
///
/// Built by a successful connect and dropped on invalidation; `epoch` ties
/// in-flight work to the session it started under.
pub struct Session<P> {
    pub account: Address,
    pub is_manager: bool,
    pub contract: CampaignContract<P>,
    pub epoch: u64,
}

impl<P> Clone for Session<P> {
    fn clone(&self) -> Self {
        Self {
            account: self.account,
            is_manager: self.is_manager,
            contract: self.contract.clone(),
            epoch: self.epoch,
        }
    }
}

impl<P> std::fmt::Debug for Session<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("account", &self.account)
            .field("is_manager", &self.is_manager)
            .field("contract", &self.contract)
            .field("epoch", &self.epoch)
            .finish()
    }
}
