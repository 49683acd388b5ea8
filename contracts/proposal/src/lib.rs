#![no_std]

use soroban_sdk::{contract, contractimpl, Address, Env, String, Symbol, Vec};

mod errors;
mod storage;
mod types;


use errors::ProposalError;
use storage::*;
use types::*;
use voting_lib::StrategyConfig;

#[contract]
pub struct Proposal;

#[contractimpl]
impl Proposal {
    /// Bind owner, ledger, metadata, voting window and strategy.
    ///
    /// A proposal starts as an empty shell (typically stamped out by a
    /// factory) and accepts exactly one `init`; every later attempt fails
    /// with `AlreadyInitialized` no matter who calls.
    pub fn init(
        env: Env,
        owner: Address,
        ledger: Address,
        guid: String,
        title: String,
        details_uri: String,
        voting_options: Vec<String>,
        start_block: u32,
        end_block: u32,
        voting_type: VotingType,
        strategy: Option<StrategyConfig>,
    ) -> Result<(), ProposalError> {
        if is_initialized(&env) {
            return Err(ProposalError::AlreadyInitialized);
        }

        owner.require_auth();

        if end_block <= start_block {
            return Err(ProposalError::InvalidWindow);
        }

        set_owner(&env, &owner);
        set_ledger(&env, &ledger);
        set_guid(&env, &guid);
        storage::set_title(&env, &title);
        storage::set_details_uri(&env, &details_uri);
        storage::set_voting_options(&env, &voting_options);
        set_start_block(&env, start_block);
        set_end_block(&env, end_block);
        storage::set_voting_type(&env, &voting_type);
        set_strategy(&env, &strategy.unwrap_or(StrategyConfig {
            power: voting_lib::PowerStrategy::FungibleWeighted,
            min_balance: 0,
        }));

        env.events()
            .publish((Symbol::new(&env, "Initialized"),), owner);

        Ok(())
    }

    /// Halt all mutation except `unpause`.
    pub fn pause(env: Env, caller: Address) -> Result<(), ProposalError> {
        Self::require_owner(&env, &caller)?;

        if is_paused(&env) {
            return Err(ProposalError::Paused);
        }
        set_paused(&env, true);

        env.events().publish((Symbol::new(&env, "Paused"),), caller);

        Ok(())
    }

    pub fn unpause(env: Env, caller: Address) -> Result<(), ProposalError> {
        Self::require_owner(&env, &caller)?;

        set_paused(&env, false);

        env.events().publish((Symbol::new(&env, "Unpaused"),), caller);

        Ok(())
    }

    /* ---------------- METADATA SETTERS (pre-window only) ---------------- */

    pub fn set_title(env: Env, caller: Address, new_title: String) -> Result<(), ProposalError> {
        Self::require_mutable(&env, &caller)?;

        storage::set_title(&env, &new_title);
        Self::emit_details_updated(&env);

        Ok(())
    }

    pub fn set_details_uri(env: Env, caller: Address, new_uri: String) -> Result<(), ProposalError> {
        Self::require_mutable(&env, &caller)?;

        storage::set_details_uri(&env, &new_uri);
        Self::emit_details_updated(&env);

        Ok(())
    }

    pub fn set_voting_options(
        env: Env,
        caller: Address,
        new_options: Vec<String>,
    ) -> Result<(), ProposalError> {
        Self::require_mutable(&env, &caller)?;

        storage::set_voting_options(&env, &new_options);
        Self::emit_details_updated(&env);

        Ok(())
    }

    pub fn set_voting_period(
        env: Env,
        caller: Address,
        new_start: u32,
        new_end: u32,
    ) -> Result<(), ProposalError> {
        Self::require_mutable(&env, &caller)?;

        if new_end <= new_start {
            return Err(ProposalError::InvalidWindow);
        }
        set_start_block(&env, new_start);
        set_end_block(&env, new_end);
        Self::emit_details_updated(&env);

        Ok(())
    }

    pub fn set_voting_type(
        env: Env,
        caller: Address,
        new_type: VotingType,
    ) -> Result<(), ProposalError> {
        Self::require_mutable(&env, &caller)?;

        storage::set_voting_type(&env, &new_type);
        Self::emit_details_updated(&env);

        Ok(())
    }

    /// Atomic batch variant of the individual setters.
    ///
    /// If any validation fails the invocation is rolled back and no field
    /// is mutated.
    pub fn update_proposal_details(
        env: Env,
        caller: Address,
        guid: String,
        title: String,
        details_uri: String,
        voting_options: Vec<String>,
        start_block: u32,
        end_block: u32,
        voting_type: VotingType,
    ) -> Result<(), ProposalError> {
        Self::require_mutable(&env, &caller)?;

        if end_block <= start_block {
            return Err(ProposalError::InvalidWindow);
        }

        set_guid(&env, &guid);
        storage::set_title(&env, &title);
        storage::set_details_uri(&env, &details_uri);
        storage::set_voting_options(&env, &voting_options);
        set_start_block(&env, start_block);
        set_end_block(&env, end_block);
        storage::set_voting_type(&env, &voting_type);

        env.events()
            .publish((Symbol::new(&env, "DetailsUpdated"),), guid);

        Ok(())
    }

    /* ---------------- VOTING ---------------- */

    /// Cast a single-choice vote for `option`.
    ///
    /// Eligibility and weight come from the strategy bound at `init`; any
    /// failure of the underlying ledger query propagates as
    /// `LedgerQueryFailed` instead of being read as "not eligible".
    pub fn cast_single_choice_vote(
        env: Env,
        voter: Address,
        option: String,
    ) -> Result<(), ProposalError> {
        voter.require_auth();

        if get_voting_type(&env) != VotingType::SingleChoiceVoting {
            return Err(ProposalError::UnsupportedVotingType);
        }

        // Fresh read of the logical clock on every call.
        let height = env.ledger().sequence();
        if height < get_start_block(&env) || height > get_end_block(&env) {
            return Err(ProposalError::WindowNotOpen);
        }

        if is_paused(&env) {
            return Err(ProposalError::Paused);
        }

        if has_voted(&env, &voter) {
            return Err(ProposalError::AlreadyVoted);
        }

        let options = get_voting_options(&env);
        let mut valid = false;
        for candidate in options.iter() {
            if candidate == option {
                valid = true;
                break;
            }
        }
        if !valid {
            return Err(ProposalError::InvalidOption);
        }

        let ledger = get_ledger(&env).ok_or(ProposalError::LedgerQueryFailed)?;
        let strategy = get_strategy(&env);

        if !strategy.is_eligible(&env, &ledger, &voter)? {
            return Err(ProposalError::Ineligible);
        }
        let weight = strategy.voting_power(&env, &ledger, &voter)?;

        add_to_tally(&env, &option, weight);
        set_voted(&env, &voter);

        env.events()
            .publish((Symbol::new(&env, "VoteCast"),), (voter, option, weight));

        Ok(())
    }

    /* ---------------- QUERY FUNCTIONS ---------------- */

    pub fn get_owner(env: Env) -> Option<Address> {
        storage::get_owner(&env)
    }

    /// Full metadata snapshot; callable at any lifecycle stage, including
    /// before `init` (every field at its type default).
    pub fn get_proposal_details(env: Env) -> ProposalDetails {
        ProposalDetails {
            guid: get_guid(&env),
            title: get_title(&env),
            details_uri: storage::get_details_uri(&env),
            voting_options: storage::get_voting_options(&env),
            start_block: get_start_block(&env),
            end_block: get_end_block(&env),
            voting_type: storage::get_voting_type(&env),
            strategy: get_strategy(&env),
        }
    }

    pub fn get_details_uri(env: Env) -> String {
        storage::get_details_uri(&env)
    }

    pub fn is_paused(env: Env) -> bool {
        storage::is_paused(&env)
    }

    /// Accumulated weight for an option; 0 for options never voted on.
    pub fn get_tally(env: Env, option: String) -> u128 {
        storage::get_tally(&env, &option)
    }

    pub fn has_account_voted(env: Env, account: Address) -> bool {
        has_voted(&env, &account)
    }

    pub fn is_initialized(env: Env) -> bool {
        storage::is_initialized(&env)
    }

    /* ---------------- INTERNAL ---------------- */

    fn require_owner(env: &Env, caller: &Address) -> Result<(), ProposalError> {
        caller.require_auth();
        match storage::get_owner(env) {
            Some(owner) if owner == *caller => Ok(()),
            _ => Err(ProposalError::Unauthorized),
        }
    }

    /// Metadata may change only while not paused and strictly before the
    /// currently stored `start_block`.
    fn require_mutable(env: &Env, caller: &Address) -> Result<(), ProposalError> {
        Self::require_owner(env, caller)?;

        if is_paused(env) {
            return Err(ProposalError::Paused);
        }
        if env.ledger().sequence() >= get_start_block(env) {
            return Err(ProposalError::WindowClosed);
        }
        Ok(())
    }

    fn emit_details_updated(env: &Env) {
        env.events()
            .publish((Symbol::new(env, "DetailsUpdated"),), get_guid(env));
    }
}
