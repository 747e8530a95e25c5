//! Campaign contract ABI.

use alloy_sol_types::sol;

sol! {
    interface ICampaign {
        function manager() external view returns (address);
        function totalFunds() external view returns (uint256);
        function totalContributors() external view returns (uint256);
        function requestCount() external view returns (uint256);
        function getRequest(uint256 index) external view returns (
            string description,
            uint256 amount,
            address recipient,
            bool completed,
            uint256 approvalCount,
            uint256 rejectCount
        );
        function hasVoted(uint256 index, address voter) external view returns (bool);
        function contribute() external payable;
        function createRequest(string description, uint256 amount, address recipient) external;
        function approveRequest(uint256 index) external;
        function rejectRequest(uint256 index) external;
        function finalizeRequest(uint256 index) external;
    }
}
