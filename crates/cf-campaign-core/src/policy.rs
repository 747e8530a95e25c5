//! Which controls a request row offers.

use crate::format;
use cf_api_types::{RequestRowView, RequestStatus, RowActions};
use cf_chain_client::SpendingRequest;

/// Controls for one row. Completed requests never offer anything; finalize is
/// independent of whether the manager has voted.
pub fn row_actions(completed: bool, has_voted: bool, is_manager: bool) -> RowActions {
    RowActions {
        vote: !completed && !has_voted,
        finalize: !completed && is_manager,
        voted_indicator: !completed && has_voted,
    }
}

pub fn request_row(
    index: u64,
    request: &SpendingRequest,
    has_voted: bool,
    is_manager: bool,
) -> RequestRowView {
    RequestRowView {
        index,
        status: RequestStatus::from_completed(request.completed),
        description: request.description.clone(),
        amount: format::ether_amount(request.amount),
        recipient: request.recipient.to_checksum(None),
        approvals: request.approval_count.to_string(),
        rejections: request.reject_count.to_string(),
        actions: row_actions(request.completed, has_voted, is_manager),
    }
}
