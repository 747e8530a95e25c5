use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }

    /// Full class attribute for the status banner.
    pub fn css_class(self) -> String {
        format!("status-message status-{}", self.as_str())
    }
}

/// Page sections that stay hidden until a wallet session exists.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    WalletInfo,
    CampaignStats,
    Contribute,
    Requests,
    CreateRequest,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::WalletInfo,
        Section::CampaignStats,
        Section::Contribute,
        Section::Requests,
        Section::CreateRequest,
    ];

    pub fn element_id(self) -> &'static str {
        match self {
            Section::WalletInfo => "walletInfo",
            Section::CampaignStats => "campaignStats",
            Section::Contribute => "contributeSection",
            Section::Requests => "requestsSection",
            Section::CreateRequest => "createRequestSection",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    Pending,
    Completed,
}

impl RequestStatus {
    pub fn from_completed(completed: bool) -> Self {
        if completed {
            RequestStatus::Completed
        } else {
            RequestStatus::Pending
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RequestStatus::Pending => "Pending",
            RequestStatus::Completed => "Completed",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            RequestStatus::Pending => "status-pending",
            RequestStatus::Completed => "status-completed",
        }
    }
}

/// Per-row contract actions a user can trigger from the request list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RequestAction {
    Approve,
    Reject,
    Finalize,
}

impl RequestAction {
    /// Value of the `data-action` attribute on row buttons.
    pub fn as_str(self) -> &'static str {
        match self {
            RequestAction::Approve => "approve",
            RequestAction::Reject => "reject",
            RequestAction::Finalize => "finalize",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        [RequestAction::Approve, RequestAction::Reject, RequestAction::Finalize]
            .into_iter()
            .find(|action| action.as_str() == value)
    }

    pub fn label(self) -> &'static str {
        match self {
            RequestAction::Approve => "Approve",
            RequestAction::Reject => "Reject",
            RequestAction::Finalize => "Finalize",
        }
    }

    pub fn button_class(self) -> &'static str {
        match self {
            RequestAction::Approve => "btn-approve",
            RequestAction::Reject => "btn-reject",
            RequestAction::Finalize => "btn-finalize",
        }
    }
}

/// Which controls the action region of a request row shows.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RowActions {
    pub vote: bool,
    pub finalize: bool,
    pub voted_indicator: bool,
}

impl RowActions {
    /// Buttons in render order.
    pub fn buttons(&self) -> Vec<RequestAction> {
        let mut buttons = Vec::with_capacity(3);
        if self.vote {
            buttons.push(RequestAction::Approve);
            buttons.push(RequestAction::Reject);
        }
        if self.finalize {
            buttons.push(RequestAction::Finalize);
        }
        buttons
    }

    pub fn is_empty(&self) -> bool {
        !self.vote && !self.finalize && !self.voted_indicator
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WalletView {
    pub short_address: String,
    pub network_name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CampaignSummaryView {
    pub total_funds: String,
    pub total_contributors: String,
    pub manager: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RequestRowView {
    pub index: u64,
    pub status: RequestStatus,
    pub description: String,
    pub amount: String,
    pub recipient: String,
    pub approvals: String,
    pub rejections: String,
    pub actions: RowActions,
}

impl RequestRowView {
    pub fn title(&self) -> String {
        format!("Request #{}", self.index)
    }
}

pub const NO_REQUESTS_PLACEHOLDER: &str = "No spending requests yet";
pub const VOTED_INDICATOR: &str = "You have voted";
