use soroban_sdk::contracterror;

/// Failures shared by every voting-power strategy.
///
/// A ledger that traps or answers with something that is not a balance must
/// surface as `LedgerQueryFailed`; callers can then tell a broken ledger
/// apart from an account that simply does not qualify.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum StrategyError {
    /// The balance ledger reverted or returned a malformed value.
    LedgerQueryFailed = 1,
    /// The account holds no balance on the ledger.
    NoBalance = 2,
}
