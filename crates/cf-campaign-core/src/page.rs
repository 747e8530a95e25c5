use async_trait::async_trait;
use cf_api_types::{CampaignSummaryView, RequestRowView, Section, Severity, WalletView};

/// Everything the controller needs from the hosting page: fixed display
/// fields, the request list, the status banner, and a timer.
#[async_trait(?Send)]
pub trait Page {
    fn show_wallet(&self, wallet: &WalletView);
    fn set_section_visible(&self, section: Section, visible: bool);
    fn render_summary(&self, summary: &CampaignSummaryView);
    /// Replace the request list. An empty slice shows the placeholder.
    fn render_requests(&self, rows: &[RequestRowView]);
    fn clear_contribution_form(&self);
    fn clear_request_form(&self);
    fn notify(&self, message: &str, severity: Severity);
    /// Hide every session section and blank rendered data.
    fn reset(&self);
    async fn sleep(&self, ms: u32);
}
