#![no_std]

pub mod errors;
pub mod strategy;

pub use errors::StrategyError;
pub use strategy::{PowerStrategy, StrategyConfig};

/// Weight granted by the vanilla (one-account-one-vote) strategy.
pub const VANILLA_VOTE_POWER: u128 = 1;
