use soroban_sdk::{contract, contractimpl, contracttype, Address, Env};

use super::sort_tokens;
use crate::interfaces::AmmFactory;

#[contracttype]
#[derive(Clone)]
enum FactoryKey {
    Pair(Address, Address),
}

/// Soroswap-shaped factory. Pairs are registered by the test rather than
/// deployed, since native test contracts cannot be instantiated by hash.
#[contract]
pub struct MockAmmFactory;

#[contractimpl]
impl MockAmmFactory {
    pub fn register_pair(e: Env, token_a: Address, token_b: Address, pair: Address) {
        let (token_0, token_1) = sort_tokens(&token_a, &token_b);
        e.storage()
            .instance()
            .set(&FactoryKey::Pair(token_0, token_1), &pair);
    }
}

#[contractimpl]
impl AmmFactory for MockAmmFactory {
    fn get_pair(e: Env, token_a: Address, token_b: Address) -> Address {
        let (token_0, token_1) = sort_tokens(&token_a, &token_b);
        e.storage()
            .instance()
            .get(&FactoryKey::Pair(token_0, token_1))
            .unwrap_or_else(|| panic!("pair does not exist"))
    }
}
