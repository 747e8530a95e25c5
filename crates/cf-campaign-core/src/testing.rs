//! In-memory wallet and page used by the controller tests.

use crate::page::Page;
use alloy_primitives::{Address, B256, U256, hex};
use alloy_sol_types::SolCall;
use async_trait::async_trait;
use cf_api_types::{CampaignSummaryView, RequestRowView, Section, Severity, WalletView};
use cf_chain_client::abi::ICampaign;
use cf_chain_client::units::parse_ether;
use cf_chain_client::{Eip1193, ProviderError};
use serde_json::{Value, json};
use std::cell::{Cell, RefCell};
use std::collections::HashSet;

pub const CONTRACT: &str = "0x5FbDB2315678afecb367f032d93F642f64180aa3";

pub fn account() -> Address {
    Address::repeat_byte(0xa1)
}

pub fn manager() -> Address {
    Address::repeat_byte(0xb2)
}

fn ether(amount: &str) -> U256 {
    parse_ether(amount).expect("test amount")
}

#[derive(Debug, Clone)]
pub struct MockRequest {
    pub description: String,
    pub amount: U256,
    pub recipient: Address,
    pub completed: bool,
    pub approvals: u64,
    pub rejections: u64,
    pub voted: bool,
}

impl MockRequest {
    pub fn pending(description: &str, ether_amount: u64) -> Self {
        Self {
            description: description.to_owned(),
            amount: ether(&ether_amount.to_string()),
            recipient: Address::repeat_byte(0x77),
            completed: false,
            approvals: 0,
            rejections: 0,
            voted: false,
        }
    }

    pub fn voted(mut self) -> Self {
        self.voted = true;
        self.approvals += 1;
        self
    }

    pub fn completed(mut self) -> Self {
        self.completed = true;
        self
    }
}

/// Chain and wallet state behind [`MockWallet`].
#[derive(Debug)]
pub struct MockState {
    pub installed: bool,
    pub accounts: Vec<Address>,
    pub chain_id: u64,
    pub switch_error: Option<ProviderError>,
    pub switch_changes_chain: bool,
    pub manager: Address,
    pub total_funds: U256,
    pub contributors: u64,
    pub requests: Vec<MockRequest>,
    pub send_error: Option<ProviderError>,
    /// Receipt lookups answered with `null` before the receipt appears.
    pub pending_polls: u32,
    pub receipt_status: &'static str,
    pub fail_reads: bool,
    pub sent: u8,
}

/// EIP-1193 wallet backed by an in-memory campaign contract.
pub struct MockWallet {
    pub state: RefCell<MockState>,
    pub log: RefCell<Vec<(String, Value)>>,
}

impl MockWallet {
    pub fn on_sepolia(connected: Address) -> Self {
        Self {
            state: RefCell::new(MockState {
                installed: true,
                accounts: vec![connected],
                chain_id: crate::config::SEPOLIA_CHAIN_ID,
                switch_error: None,
                switch_changes_chain: true,
                manager: manager(),
                total_funds: ether("3"),
                contributors: 2,
                requests: Vec::new(),
                send_error: None,
                pending_polls: 0,
                receipt_status: "0x1",
                fail_reads: false,
                sent: 0,
            }),
            log: RefCell::new(Vec::new()),
        }
    }

    pub fn requests_for(&self, method: &str) -> Vec<Value> {
        self.log
            .borrow()
            .iter()
            .filter(|(m, _)| m == method)
            .map(|(_, params)| params.clone())
            .collect()
    }

    /// Number of `eth_call`s whose selector matches the named contract function.
    pub fn call_count(&self, function: &str) -> usize {
        self.requests_for("eth_call")
            .iter()
            .filter(|params| {
                let data = call_data(params);
                selector_name(&data) == Some(function)
            })
            .count()
    }

    fn eth_call(&self, params: &Value) -> Result<Value, ProviderError> {
        let state = self.state.borrow();
        if state.fail_reads {
            return Err(ProviderError::new(Some(-32603), "Internal JSON-RPC error."));
        }
        let data = call_data(params);
        let revert = |e: alloy_sol_types::Error| ProviderError::new(Some(3), e.to_string());

        let encoded = match selector_name(&data) {
            Some("manager") => ICampaign::managerCall::abi_encode_returns(&(state.manager,)),
            Some("totalFunds") => ICampaign::totalFundsCall::abi_encode_returns(&(state.total_funds,)),
            Some("totalContributors") => {
                ICampaign::totalContributorsCall::abi_encode_returns(&(U256::from(state.contributors),))
            }
            Some("requestCount") => {
                ICampaign::requestCountCall::abi_encode_returns(&(U256::from(state.requests.len()),))
            }
            Some("getRequest") => {
                let call = ICampaign::getRequestCall::abi_decode(&data, true).map_err(revert)?;
                let r = lookup(&state.requests, call.index)?;
                ICampaign::getRequestCall::abi_encode_returns(&(
                    r.description.clone(),
                    r.amount,
                    r.recipient,
                    r.completed,
                    U256::from(r.approvals),
                    U256::from(r.rejections),
                ))
            }
            Some("hasVoted") => {
                let call = ICampaign::hasVotedCall::abi_decode(&data, true).map_err(revert)?;
                let r = lookup(&state.requests, call.index)?;
                ICampaign::hasVotedCall::abi_encode_returns(&(r.voted,))
            }
            _ => return Err(ProviderError::new(Some(3), "execution reverted")),
        };
        Ok(json!(hex::encode_prefixed(encoded)))
    }

    fn send_transaction(&self, params: &Value) -> Result<Value, ProviderError> {
        let mut state = self.state.borrow_mut();
        if let Some(err) = state.send_error.clone() {
            return Err(err);
        }
        let tx = &params[0];
        let data = call_data(params);
        let revert = |e: alloy_sol_types::Error| ProviderError::new(Some(3), e.to_string());

        match selector_name(&data) {
            Some("contribute") => {
                let value = tx["value"]
                    .as_str()
                    .and_then(|v| U256::from_str_radix(v.trim_start_matches("0x"), 16).ok())
                    .unwrap_or_default();
                state.total_funds += value;
                state.contributors += 1;
            }
            Some("createRequest") => {
                let call = ICampaign::createRequestCall::abi_decode(&data, true).map_err(revert)?;
                state.requests.push(MockRequest {
                    description: call.description,
                    amount: call.amount,
                    recipient: call.recipient,
                    completed: false,
                    approvals: 0,
                    rejections: 0,
                    voted: false,
                });
            }
            Some("approveRequest") => {
                let call = ICampaign::approveRequestCall::abi_decode(&data, true).map_err(revert)?;
                let r = lookup_mut(&mut state.requests, call.index)?;
                r.voted = true;
                r.approvals += 1;
            }
            Some("rejectRequest") => {
                let call = ICampaign::rejectRequestCall::abi_decode(&data, true).map_err(revert)?;
                let r = lookup_mut(&mut state.requests, call.index)?;
                r.voted = true;
                r.rejections += 1;
            }
            Some("finalizeRequest") => {
                let call = ICampaign::finalizeRequestCall::abi_decode(&data, true).map_err(revert)?;
                let r = lookup_mut(&mut state.requests, call.index)?;
                r.completed = true;
                let amount = r.amount;
                state.total_funds -= amount;
            }
            _ => return Err(ProviderError::new(Some(3), "execution reverted")),
        }

        state.sent += 1;
        Ok(json!(B256::with_last_byte(state.sent).to_string()))
    }

    fn receipt(&self) -> Value {
        let mut state = self.state.borrow_mut();
        if state.pending_polls > 0 {
            state.pending_polls -= 1;
            return Value::Null;
        }
        json!({ "status": state.receipt_status })
    }
}

#[async_trait(?Send)]
impl Eip1193 for MockWallet {
    async fn request(&self, method: &str, params: Value) -> Result<Value, ProviderError> {
        self.log.borrow_mut().push((method.to_owned(), params.clone()));
        if !self.state.borrow().installed {
            return Err(ProviderError::new(None, "No injected wallet found"));
        }

        match method {
            "eth_requestAccounts" => {
                let accounts: Vec<String> = self
                    .state
                    .borrow()
                    .accounts
                    .iter()
                    .map(|a| a.to_string().to_lowercase())
                    .collect();
                Ok(json!(accounts))
            }
            "eth_chainId" => Ok(json!(format!("{:#x}", self.state.borrow().chain_id))),
            "wallet_switchEthereumChain" => {
                let mut state = self.state.borrow_mut();
                if let Some(err) = state.switch_error.clone() {
                    return Err(err);
                }
                if state.switch_changes_chain {
                    let requested = params[0]["chainId"].as_str().unwrap_or_default();
                    state.chain_id = u64::from_str_radix(requested.trim_start_matches("0x"), 16)
                        .map_err(|e| ProviderError::new(Some(-32602), e.to_string()))?;
                }
                Ok(Value::Null)
            }
            "eth_call" => self.eth_call(&params),
            "eth_sendTransaction" => self.send_transaction(&params),
            "eth_getTransactionReceipt" => Ok(self.receipt()),
            other => Err(ProviderError::new(Some(4200), format!("{other} unsupported"))),
        }
    }
}

fn call_data(params: &Value) -> Vec<u8> {
    let text = params[0]["data"].as_str().unwrap_or_default();
    hex::decode(text.trim_start_matches("0x")).unwrap_or_default()
}

fn selector_name(data: &[u8]) -> Option<&'static str> {
    let selector: [u8; 4] = data.get(..4)?.try_into().ok()?;
    let known = [
        (ICampaign::managerCall::SELECTOR, "manager"),
        (ICampaign::totalFundsCall::SELECTOR, "totalFunds"),
        (ICampaign::totalContributorsCall::SELECTOR, "totalContributors"),
        (ICampaign::requestCountCall::SELECTOR, "requestCount"),
        (ICampaign::getRequestCall::SELECTOR, "getRequest"),
        (ICampaign::hasVotedCall::SELECTOR, "hasVoted"),
        (ICampaign::contributeCall::SELECTOR, "contribute"),
        (ICampaign::createRequestCall::SELECTOR, "createRequest"),
        (ICampaign::approveRequestCall::SELECTOR, "approveRequest"),
        (ICampaign::rejectRequestCall::SELECTOR, "rejectRequest"),
        (ICampaign::finalizeRequestCall::SELECTOR, "finalizeRequest"),
    ];
    known
        .into_iter()
        .find(|(candidate, _)| *candidate == selector)
        .map(|(_, name)| name)
}

fn lookup(requests: &[MockRequest], index: U256) -> Result<&MockRequest, ProviderError> {
    usize::try_from(index)
        .ok()
        .and_then(|i| requests.get(i))
        .ok_or_else(|| ProviderError::new(Some(3), "execution reverted: invalid request"))
}

fn lookup_mut(requests: &mut [MockRequest], index: U256) -> Result<&mut MockRequest, ProviderError> {
    usize::try_from(index)
        .ok()
        .and_then(|i| requests.get_mut(i))
        .ok_or_else(|| ProviderError::new(Some(3), "execution reverted: invalid request"))
}

/// [`Page`] that records what the controller asked it to show.
#[derive(Default)]
pub struct RecordingPage {
    pub wallet: RefCell<Option<WalletView>>,
    pub visible: RefCell<HashSet<Section>>,
    pub summary: RefCell<Option<CampaignSummaryView>>,
    pub rows: RefCell<Option<Vec<RequestRowView>>>,
    pub notices: RefCell<Vec<(String, Severity)>>,
    pub sleeps: RefCell<Vec<u32>>,
    pub contribution_cleared: Cell<bool>,
    pub request_form_cleared: Cell<bool>,
    pub resets: Cell<u32>,
}

impl RecordingPage {
    pub fn last_notice(&self) -> Option<(String, Severity)> {
        self.notices.borrow().last().cloned()
    }

    pub fn saw_notice(&self, message: &str) -> bool {
        self.notices.borrow().iter().any(|(m, _)| m == message)
    }

    pub fn is_visible(&self, section: Section) -> bool {
        self.visible.borrow().contains(&section)
    }

    pub fn placeholder_shown(&self) -> bool {
        matches!(self.rows.borrow().as_deref(), Some([]))
    }
}

#[async_trait(?Send)]
impl Page for RecordingPage {
    fn show_wallet(&self, wallet: &WalletView) {
        *self.wallet.borrow_mut() = Some(wallet.clone());
    }

    fn set_section_visible(&self, section: Section, visible: bool) {
        let mut sections = self.visible.borrow_mut();
        if visible {
            sections.insert(section);
        } else {
            sections.remove(&section);
        }
    }

    fn render_summary(&self, summary: &CampaignSummaryView) {
        *self.summary.borrow_mut() = Some(summary.clone());
    }

    fn render_requests(&self, rows: &[RequestRowView]) {
        *self.rows.borrow_mut() = Some(rows.to_vec());
    }

    fn clear_contribution_form(&self) {
        self.contribution_cleared.set(true);
    }

    fn clear_request_form(&self) {
        self.request_form_cleared.set(true);
    }

    fn notify(&self, message: &str, severity: Severity) {
        self.notices.borrow_mut().push((message.to_owned(), severity));
    }

    fn reset(&self) {
        self.resets.set(self.resets.get() + 1);
        self.visible.borrow_mut().clear();
        self.wallet.borrow_mut().take();
        self.summary.borrow_mut().take();
        self.rows.borrow_mut().take();
    }

    async fn sleep(&self, ms: u32) {
        self.sleeps.borrow_mut().push(ms);
        tokio::task::yield_now().await;
    }
}
