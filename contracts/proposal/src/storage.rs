#![no_std]
use soroban_sdk::{contracttype, Address, Env, String, Vec};

use voting_lib::{PowerStrategy, StrategyConfig};

use crate::types::VotingType;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Proposal owner; presence doubles as the initialized latch
    Owner,
    /// Balance ledger consulted by the voting strategies
    Ledger,
    /// Opaque proposal identifier
    Guid,
    Title,
    DetailsUri,
    VotingOptions,
    StartBlock,
    EndBlock,
    VotingType,
    /// Injected strategy selection
    Strategy,
    Paused,
    /// Accumulated weight per option label
    Tally(String),
    /// Accounts that have cast a vote
    HasVoted(Address),
}

/* ---------------- OWNER / INIT LATCH ---------------- */

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

pub fn get_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Owner)
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Owner)
}

/* ---------------- LEDGER BINDING ---------------- */

pub fn set_ledger(env: &Env, ledger: &Address) {
    env.storage().instance().set(&DataKey::Ledger, ledger);
}

pub fn get_ledger(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Ledger)
}

/* ---------------- METADATA ---------------- */

pub fn set_guid(env: &Env, guid: &String) {
    env.storage().instance().set(&DataKey::Guid, guid);
}

pub fn get_guid(env: &Env) -> String {
    env.storage()
        .instance()
        .get(&DataKey::Guid)
        .unwrap_or_else(|| String::from_str(env, ""))
}

pub fn set_title(env: &Env, title: &String) {
    env.storage().instance().set(&DataKey::Title, title);
}

pub fn get_title(env: &Env) -> String {
    env.storage()
        .instance()
        .get(&DataKey::Title)
        .unwrap_or_else(|| String::from_str(env, ""))
}

pub fn set_details_uri(env: &Env, uri: &String) {
    env.storage().instance().set(&DataKey::DetailsUri, uri);
}

pub fn get_details_uri(env: &Env) -> String {
    env.storage()
        .instance()
        .get(&DataKey::DetailsUri)
        .unwrap_or_else(|| String::from_str(env, ""))
}

pub fn set_voting_options(env: &Env, options: &Vec<String>) {
    env.storage().instance().set(&DataKey::VotingOptions, options);
}

pub fn get_voting_options(env: &Env) -> Vec<String> {
    env.storage()
        .instance()
        .get(&DataKey::VotingOptions)
        .unwrap_or_else(|| Vec::new(env))
}

pub fn set_start_block(env: &Env, start: u32) {
    env.storage().instance().set(&DataKey::StartBlock, &start);
}

pub fn get_start_block(env: &Env) -> u32 {
    env.storage().instance().get(&DataKey::StartBlock).unwrap_or(0)
}

pub fn set_end_block(env: &Env, end: u32) {
    env.storage().instance().set(&DataKey::EndBlock, &end);
}

pub fn get_end_block(env: &Env) -> u32 {
    env.storage().instance().get(&DataKey::EndBlock).unwrap_or(0)
}

pub fn set_voting_type(env: &Env, voting_type: &VotingType) {
    env.storage().instance().set(&DataKey::VotingType, voting_type);
}

pub fn get_voting_type(env: &Env) -> VotingType {
    env.storage()
        .instance()
        .get(&DataKey::VotingType)
        .unwrap_or(VotingType::SingleChoiceVoting)
}

pub fn set_strategy(env: &Env, strategy: &StrategyConfig) {
    env.storage().instance().set(&DataKey::Strategy, strategy);
}

pub fn get_strategy(env: &Env) -> StrategyConfig {
    env.storage()
        .instance()
        .get(&DataKey::Strategy)
        .unwrap_or(StrategyConfig {
            power: PowerStrategy::FungibleWeighted,
            min_balance: 0,
        })
}

/* ---------------- PAUSE FLAG ---------------- */

pub fn set_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&DataKey::Paused, &paused);
}

pub fn is_paused(env: &Env) -> bool {
    env.storage().instance().get(&DataKey::Paused).unwrap_or(false)
}

/* ---------------- TALLY / VOTE RECORD ---------------- */

pub fn get_tally(env: &Env, option: &String) -> u128 {
    env.storage()
        .instance()
        .get(&DataKey::Tally(option.clone()))
        .unwrap_or(0)
}

pub fn add_to_tally(env: &Env, option: &String, weight: u128) {
    let total = get_tally(env, option) + weight;
    env.storage()
        .instance()
        .set(&DataKey::Tally(option.clone()), &total);
}

pub fn has_voted(env: &Env, voter: &Address) -> bool {
    env.storage()
        .instance()
        .has(&DataKey::HasVoted(voter.clone()))
}

pub fn set_voted(env: &Env, voter: &Address) {
    env.storage()
        .instance()
        .set(&DataKey::HasVoted(voter.clone()), &true);
}
