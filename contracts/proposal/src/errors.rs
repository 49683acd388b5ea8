use soroban_sdk::contracterror;

use voting_lib::StrategyError;

/// Error codes for the Proposal contract.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ProposalError {
    /// `init` was called on an already-initialized proposal.
    AlreadyInitialized = 1,
    /// The caller is not the proposal owner.
    Unauthorized = 2,
    /// Metadata mutation attempted at or after `start_block`.
    WindowClosed = 3,
    /// Vote cast outside the `[start_block, end_block]` window.
    WindowNotOpen = 4,
    /// A voting window with `end_block <= start_block` was supplied.
    InvalidWindow = 5,
    /// The proposal is paused; only `unpause` is accepted.
    Paused = 6,
    /// The account has already cast a vote on this proposal.
    AlreadyVoted = 7,
    /// The chosen label is not one of the configured voting options.
    InvalidOption = 8,
    /// The strategy's eligibility gate rejected the voter.
    Ineligible = 9,
    /// The configured voting type has no casting path for this call.
    UnsupportedVotingType = 10,
    /// The balance ledger reverted or returned a malformed value.
    LedgerQueryFailed = 11,
    /// The voter holds no balance on the ledger.
    NoBalance = 12,
}

impl From<StrategyError> for ProposalError {
    fn from(err: StrategyError) -> Self {
        match err {
            StrategyError::LedgerQueryFailed => ProposalError::LedgerQueryFailed,
            StrategyError::NoBalance => ProposalError::NoBalance,
        }
    }
}
