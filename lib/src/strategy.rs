use soroban_sdk::{contracttype, token, Address, Env};

use crate::errors::StrategyError;
use crate::VANILLA_VOTE_POWER;

/// How a voter's weight is computed from the balance ledger.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PowerStrategy {
    /// One vote per account holding a non-zero balance.
    Vanilla,
    /// Weight equals the account's ledger balance verbatim.
    FungibleWeighted,
}

/// Strategy binding chosen at proposal configuration time.
///
/// `min_balance == 0` means no eligibility gate; any non-zero value gates
/// voting on `balance >= min_balance`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StrategyConfig {
    pub power: PowerStrategy,
    pub min_balance: u128,
}

impl StrategyConfig {
    pub fn is_eligible(
        &self,
        env: &Env,
        ledger: &Address,
        account: &Address,
    ) -> Result<bool, StrategyError> {
        if self.min_balance == 0 {
            return Ok(true);
        }
        gate_min_balance(env, ledger, account, self.min_balance)
    }

    pub fn voting_power(
        &self,
        env: &Env,
        ledger: &Address,
        account: &Address,
    ) -> Result<u128, StrategyError> {
        match self.power {
            PowerStrategy::Vanilla => vanilla_voting_power(env, ledger, account),
            PowerStrategy::FungibleWeighted => fungible_balance_voting_power(env, ledger, account),
        }
    }
}

/// Read an account balance from an untrusted ledger.
///
/// Any trapped call, conversion failure, or negative amount is reported as
/// `LedgerQueryFailed` rather than being masked as a zero balance.
pub fn query_balance(
    env: &Env,
    ledger: &Address,
    account: &Address,
) -> Result<u128, StrategyError> {
    let client = token::Client::new(env, ledger);
    match client.try_balance(account) {
        Ok(Ok(balance)) if balance >= 0 => Ok(balance as u128),
        _ => Err(StrategyError::LedgerQueryFailed),
    }
}

/// Eligibility gate: does the account hold at least `min_balance`?
pub fn gate_min_balance(
    env: &Env,
    ledger: &Address,
    account: &Address,
    min_balance: u128,
) -> Result<bool, StrategyError> {
    let balance = query_balance(env, ledger, account)?;
    Ok(balance >= min_balance)
}

/// One-account-one-vote, gated on a non-zero holding.
pub fn vanilla_voting_power(
    env: &Env,
    ledger: &Address,
    account: &Address,
) -> Result<u128, StrategyError> {
    let balance = query_balance(env, ledger, account)?;
    if balance == 0 {
        return Err(StrategyError::NoBalance);
    }
    Ok(VANILLA_VOTE_POWER)
}

/// Balance-weighted voting power.
pub fn fungible_balance_voting_power(
    env: &Env,
    ledger: &Address,
    account: &Address,
) -> Result<u128, StrategyError> {
    let balance = query_balance(env, ledger, account)?;
    if balance == 0 {
        return Err(StrategyError::NoBalance);
    }
    Ok(balance)
}
