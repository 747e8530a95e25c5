//! The view controller.
//!
//! Turns button clicks and wallet events into contract calls and renders the
//! results through a [`Page`]. Shared as `Rc<Controller>` by the browser
//! crate; all interior state is `Cell`/`RefCell` and no borrow is held across
//! an await.

use crate::config::CampaignConfig;
use crate::error::CampaignError;
use crate::format;
use crate::page::Page;
use crate::policy;
use crate::session::Session;
use crate::validate::{self, NewRequest};
use alloy_primitives::{Address, B256};
use cf_api_types::{CampaignSummaryView, RequestAction, RequestRowView, Section, Severity, WalletView};
use cf_chain_client::{CampaignContract, ChainError, Eip1193, ReceiptStatus, WalletClient};
use futures::future::try_join_all;
use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::rc::Rc;
use tracing::{debug, info, warn};

const SESSION_SECTIONS: [Section; 4] = [
    Section::WalletInfo,
    Section::CampaignStats,
    Section::Contribute,
    Section::Requests,
];

pub struct Controller<P, V> {
    wallet: WalletClient<P>,
    page: V,
    config: CampaignConfig,
    contract_address: Address,
    session: RefCell<Option<Session<P>>>,
    epoch: Cell<u64>,
    /// (epoch, request index) pairs with a transaction in flight.
    in_flight: RefCell<HashSet<(u64, u64)>>,
}

impl<P: Eip1193, V: Page> Controller<P, V> {
    pub fn new(provider: Rc<P>, page: V, config: CampaignConfig) -> Result<Self, CampaignError> {
        config.validate()?;
        let contract_address = config.contract_address()?;
        Ok(Self {
            wallet: WalletClient::new(provider),
            page,
            config,
            contract_address,
            session: RefCell::new(None),
            epoch: Cell::new(0),
            in_flight: RefCell::new(HashSet::new()),
        })
    }

    pub fn page(&self) -> &V {
        &self.page
    }

    pub fn session(&self) -> Option<Session<P>> {
        self.session.borrow().clone()
    }

    pub fn is_connected(&self) -> bool {
        self.session.borrow().is_some()
    }

    // ── Wallet session ──

    /// Connect the wallet, switching networks once if needed, and populate the page.
    pub async fn connect(&self) {
        match self.try_connect().await {
            Ok(session) => info!(
                account = %session.account,
                manager = session.is_manager,
                "wallet session established"
            ),
            Err(err) => self.report("Failed to connect wallet", err),
        }
    }

    async fn try_connect(&self) -> Result<Session<P>, CampaignError> {
        let epoch = self.epoch.get();
        let network = self.config.network_name.clone();
        let mut switched = false;

        let account = loop {
            let accounts = self.wallet.request_accounts().await?;
            self.ensure_current(epoch)?;
            let account = *accounts.first().ok_or(CampaignError::NoAccounts)?;

            let chain_id = self.wallet.chain_id().await?;
            self.ensure_current(epoch)?;
            if chain_id == self.config.chain_id {
                break account;
            }
            if switched {
                return Err(CampaignError::WrongNetwork {
                    network,
                    expected: self.config.chain_id,
                    actual: chain_id,
                });
            }

            info!(actual = chain_id, expected = self.config.chain_id, "wrong network");
            self.page.notify(
                &format!("Wrong network detected. Requesting switch to {network}..."),
                Severity::Info,
            );
            match self.wallet.switch_chain(self.config.chain_id).await {
                Ok(()) => {}
                Err(ChainError::Provider(err)) if err.is_unrecognized_chain() => {
                    return Err(CampaignError::ChainUnknown { network });
                }
                Err(err) => {
                    debug!(error = %err, "network switch rejected");
                    return Err(CampaignError::SwitchRejected { network });
                }
            }

            self.page
                .notify("Network switched! Reconnecting...", Severity::Success);
            self.page.sleep(self.config.switch_retry_delay_ms).await;
            self.ensure_current(epoch)?;
            switched = true;
        };

        let contract = CampaignContract::new(Rc::clone(self.wallet.provider()), self.contract_address);
        let manager = contract.manager().await?;
        self.ensure_current(epoch)?;

        let session = Session {
            account,
            is_manager: manager == account,
            contract,
            epoch,
        };
        *self.session.borrow_mut() = Some(session.clone());

        self.page.show_wallet(&WalletView {
            short_address: format::short_address(account),
            network_name: network,
        });
        for section in SESSION_SECTIONS {
            self.page.set_section_visible(section, true);
        }
        self.page
            .set_section_visible(Section::CreateRequest, session.is_manager);

        self.refresh_summary().await;
        self.refresh_requests().await;
        self.ensure_current(epoch)?;

        self.page.notify("Connected successfully!", Severity::Success);
        Ok(session)
    }

    /// Wallet `accountsChanged` event.
    pub async fn accounts_changed(&self, accounts: Vec<Address>) {
        if !self.is_connected() {
            return;
        }
        self.invalidate();
        if accounts.is_empty() {
            self.page.notify("Please connect your wallet", Severity::Error);
        } else {
            self.connect().await;
        }
    }

    /// Wallet `chainChanged` event.
    pub fn chain_changed(&self) {
        if !self.is_connected() {
            return;
        }
        self.invalidate();
        self.page
            .notify("Network changed. Please reconnect.", Severity::Info);
    }

    /// Drop the session and reset the page in place. Work started under the
    /// old session stops at its next await.
    pub fn invalidate(&self) {
        self.epoch.set(self.epoch.get() + 1);
        self.session.borrow_mut().take();
        self.in_flight.borrow_mut().clear();
        self.page.reset();
        debug!(epoch = self.epoch.get(), "session invalidated");
    }

    // ── Campaign summary ──

    /// Re-read the campaign totals. Failures are logged, never shown.
    pub async fn refresh_summary(&self) {
        let Some(session) = self.session() else {
            return;
        };
        match self.load_summary(&session).await {
            Ok(()) | Err(CampaignError::Cancelled) => {}
            Err(err) => warn!(error = %err, "campaign summary refresh failed"),
        }
    }

    async fn load_summary(&self, session: &Session<P>) -> Result<(), CampaignError> {
        let contract = &session.contract;
        let (total_funds, total_contributors, manager) = futures::try_join!(
            contract.total_funds(),
            contract.total_contributors(),
            contract.manager(),
        )?;
        self.ensure_current(session.epoch)?;

        self.page.render_summary(&CampaignSummaryView {
            total_funds: format::ether_amount(total_funds),
            total_contributors: total_contributors.to_string(),
            manager: format::short_address(manager),
        });
        Ok(())
    }

    // ── Request list ──

    /// Re-read and re-render every spending request. Failures are logged, never shown.
    pub async fn refresh_requests(&self) {
        let Some(session) = self.session() else {
            return;
        };
        match self.load_requests(&session).await {
            Ok(()) | Err(CampaignError::Cancelled) => {}
            Err(err) => warn!(error = %err, "request list refresh failed"),
        }
    }

    async fn load_requests(&self, session: &Session<P>) -> Result<(), CampaignError> {
        let count = session.contract.request_count().await?;
        self.ensure_current(session.epoch)?;
        if count == 0 {
            self.page.render_requests(&[]);
            return Ok(());
        }

        let rows = try_join_all((0..count).map(|index| load_row(session, index))).await?;
        self.ensure_current(session.epoch)?;
        self.page.render_requests(&rows);
        Ok(())
    }

    // ── Transactions ──

    pub async fn contribute(&self, amount_text: &str) {
        if let Err(err) = self.try_contribute(amount_text).await {
            self.report("Contribution failed", err);
        }
    }

    async fn try_contribute(&self, amount_text: &str) -> Result<(), CampaignError> {
        let value = validate::contribution_amount(amount_text)?;
        let session = self.require_session()?;

        self.page.notify("Processing transaction...", Severity::Info);
        let tx = session.contract.contribute(session.account, value).await?;
        self.confirm(&session, tx).await?;

        self.page.notify("Contribution successful!", Severity::Success);
        self.page.clear_contribution_form();
        self.refresh_summary().await;
        Ok(())
    }

    pub async fn create_request(&self, description: &str, amount: &str, recipient: &str) {
        if let Err(err) = self.try_create_request(description, amount, recipient).await {
            self.report("Failed to create request", err);
        }
    }

    async fn try_create_request(
        &self,
        description: &str,
        amount: &str,
        recipient: &str,
    ) -> Result<(), CampaignError> {
        let request = NewRequest::parse(description, amount, recipient)?;
        let session = self.require_session()?;

        self.page.notify("Creating request...", Severity::Info);
        let tx = session
            .contract
            .create_request(session.account, request.description, request.amount, request.recipient)
            .await?;
        self.confirm(&session, tx).await?;

        self.page
            .notify("Request created successfully!", Severity::Success);
        self.page.clear_request_form();
        self.refresh_requests().await;
        Ok(())
    }

    pub async fn approve(&self, index: u64) {
        self.request_action(RequestAction::Approve, index).await;
    }

    pub async fn reject(&self, index: u64) {
        self.request_action(RequestAction::Reject, index).await;
    }

    pub async fn finalize(&self, index: u64) {
        self.request_action(RequestAction::Finalize, index).await;
    }

    /// Run a row action. A second action on a row whose transaction is still
    /// pending is dropped.
    pub async fn request_action(&self, action: RequestAction, index: u64) {
        let key = (self.epoch.get(), index);
        if !self.in_flight.borrow_mut().insert(key) {
            self.page.notify(
                &format!("Request #{index} already has a transaction in progress"),
                Severity::Info,
            );
            return;
        }

        let result = self.try_request_action(action, index).await;
        self.in_flight.borrow_mut().remove(&key);

        if let Err(err) = result {
            let context = match action {
                RequestAction::Approve => "Failed to approve",
                RequestAction::Reject => "Failed to reject",
                RequestAction::Finalize => "Failed to finalize",
            };
            self.report(context, err);
        }
    }

    async fn try_request_action(&self, action: RequestAction, index: u64) -> Result<(), CampaignError> {
        let session = self.require_session()?;
        let contract = &session.contract;
        let from = session.account;

        let tx = match action {
            RequestAction::Approve => {
                self.page.notify("Processing vote...", Severity::Info);
                contract.approve_request(from, index).await?
            }
            RequestAction::Reject => {
                self.page.notify("Processing vote...", Severity::Info);
                contract.reject_request(from, index).await?
            }
            RequestAction::Finalize => {
                self.page.notify("Finalizing request...", Severity::Info);
                contract.finalize_request(from, index).await?
            }
        };
        self.confirm(&session, tx).await?;

        if action == RequestAction::Finalize {
            self.page
                .notify("Request finalized and funds released!", Severity::Success);
            self.refresh_summary().await;
        } else {
            self.page
                .notify("Vote recorded successfully!", Severity::Success);
        }
        self.refresh_requests().await;
        Ok(())
    }

    /// Poll for the receipt until the transaction is mined.
    async fn confirm(&self, session: &Session<P>, tx: B256) -> Result<(), CampaignError> {
        loop {
            self.ensure_current(session.epoch)?;
            match session.contract.receipt_status(tx).await? {
                ReceiptStatus::Success => {
                    debug!(tx = %tx, "transaction confirmed");
                    return Ok(());
                }
                ReceiptStatus::Reverted => return Err(ChainError::Reverted(tx).into()),
                ReceiptStatus::Pending => self.page.sleep(self.config.receipt_poll_ms).await,
            }
        }
    }

    // ── Helpers ──

    fn require_session(&self) -> Result<Session<P>, CampaignError> {
        self.session().ok_or(CampaignError::NotConnected)
    }

    fn ensure_current(&self, epoch: u64) -> Result<(), CampaignError> {
        if self.epoch.get() == epoch {
            Ok(())
        } else {
            Err(CampaignError::Cancelled)
        }
    }

    fn report(&self, context: &str, err: CampaignError) {
        if matches!(err, CampaignError::Cancelled) {
            debug!(context, "dropped result of invalidated session");
            return;
        }
        warn!(error = %err, context, "action failed");
        self.page.notify(&err.user_message(context), Severity::Error);
    }
}

async fn load_row<P: Eip1193>(session: &Session<P>, index: u64) -> Result<RequestRowView, ChainError> {
    let contract = &session.contract;
    let (request, has_voted) = futures::try_join!(
        contract.get_request(index),
        contract.has_voted(index, session.account),
    )?;
    Ok(policy::request_row(index, &request, has_voted, session.is_manager))
}
