#![cfg(any(test, feature = "testutils"))]

use soroban_sdk::{contract, contractimpl, Address, Env};

/// Token whose balance query always traps.
///
/// Stands in for a deployment that does not conform to the token interface;
/// every strategy must report it as `LedgerQueryFailed`, never as a zero
/// balance.
#[contract]
pub struct CorruptToken;

#[contractimpl]
impl CorruptToken {
    pub fn balance(_env: Env, _id: Address) -> i128 {
        panic!("corrupt token")
    }
}
