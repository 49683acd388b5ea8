#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, contracttype, Address, Env};

use voting_lib::{strategy, StrategyError};

#[cfg(any(test, feature = "testutils"))]
mod testutils;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Balance ledger the strategies read from
    Ledger,
    /// Threshold for the min-balance gate
    MinBalance,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum StrategiesError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    /// The balance ledger reverted or returned a malformed value.
    LedgerQueryFailed = 3,
    /// The account holds no balance on the ledger.
    NoBalance = 4,
}

impl From<StrategyError> for StrategiesError {
    fn from(err: StrategyError) -> Self {
        match err {
            StrategyError::LedgerQueryFailed => StrategiesError::LedgerQueryFailed,
            StrategyError::NoBalance => StrategiesError::NoBalance,
        }
    }
}

/// Deployable wrapper over the strategy engine, bound once to a ledger and
/// a min-balance threshold.
#[contract]
pub struct Strategies;

#[contractimpl]
impl Strategies {
    pub fn init(env: Env, ledger: Address, min_balance: u128) -> Result<(), StrategiesError> {
        if env.storage().instance().has(&DataKey::Ledger) {
            return Err(StrategiesError::AlreadyInitialized);
        }
        env.storage().instance().set(&DataKey::Ledger, &ledger);
        env.storage().instance().set(&DataKey::MinBalance, &min_balance);
        Ok(())
    }

    /// Does `account` hold at least the configured minimum balance?
    pub fn gate_min_fungible_balance(env: Env, account: Address) -> Result<bool, StrategiesError> {
        let (ledger, min_balance) = Self::config(&env)?;
        Ok(strategy::gate_min_balance(&env, &ledger, &account, min_balance)?)
    }

    /// Unit weight for any account with a non-zero balance.
    pub fn vanilla_voting_power(env: Env, account: Address) -> Result<u128, StrategiesError> {
        let (ledger, _) = Self::config(&env)?;
        Ok(strategy::vanilla_voting_power(&env, &ledger, &account)?)
    }

    /// Weight equal to the account's ledger balance.
    pub fn fungible_balance_voting_power(
        env: Env,
        account: Address,
    ) -> Result<u128, StrategiesError> {
        let (ledger, _) = Self::config(&env)?;
        Ok(strategy::fungible_balance_voting_power(&env, &ledger, &account)?)
    }

    pub fn get_ledger(env: Env) -> Option<Address> {
        env.storage().instance().get(&DataKey::Ledger)
    }

    pub fn get_min_balance(env: Env) -> u128 {
        env.storage().instance().get(&DataKey::MinBalance).unwrap_or(0)
    }

    fn config(env: &Env) -> Result<(Address, u128), StrategiesError> {
        let ledger = env
            .storage()
            .instance()
            .get(&DataKey::Ledger)
            .ok_or(StrategiesError::NotInitialized)?;
        let min_balance = env
            .storage()
            .instance()
            .get(&DataKey::MinBalance)
            .unwrap_or(0);
        Ok((ledger, min_balance))
    }
}
