#![no_std]
use soroban_sdk::{contracttype, String, Vec};

use voting_lib::StrategyConfig;

/// Tallying scheme a proposal is configured with.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum VotingType {
    /// Pick exactly one option; weights accumulate per option label.
    SingleChoiceVoting,
    /// Accepted as configuration only; no casting path is implemented.
    RankedChoiceVoting,
}

/// Full metadata snapshot of a proposal.
///
/// Returned by the unauthenticated query surface; before `init` every field
/// carries its type default.
#[contracttype]
#[derive(Clone, Debug)]
pub struct ProposalDetails {
    /// Opaque identifier assigned by the creator; uniqueness is a factory
    /// concern, not validated here.
    pub guid: String,
    pub title: String,
    /// Pointer to an off-chain document; not validated for well-formedness.
    pub details_uri: String,
    /// Ordered option labels; order defines the casting index. Duplicate
    /// labels are not rejected.
    pub voting_options: Vec<String>,
    /// First ledger sequence number at which votes are accepted.
    pub start_block: u32,
    /// Last ledger sequence number at which votes are accepted (inclusive).
    pub end_block: u32,
    pub voting_type: VotingType,
    pub strategy: StrategyConfig,
}
