//! Test doubles for the external contracts the validators and the factory
//! consult: a token registry, a Soroswap-shaped factory and pair, and a pair
//! whose accessor returns garbage.

pub mod amm_factory;
pub mod garbled_pair;
pub mod pair;
pub mod registry;

pub use amm_factory::{MockAmmFactory, MockAmmFactoryClient};
pub use garbled_pair::MockGarbledPair;
pub use pair::{MockPair, MockPairClient};
pub use registry::{MockTokenRegistry, MockTokenRegistryClient};

use soroban_sdk::{Address, Env, String, Vec};

/// Registers a fresh registry with one list (id 1) containing `tokens`.
pub fn create_registry<'a>(e: &Env, tokens: &[Address]) -> MockTokenRegistryClient<'a> {
    let registry = MockTokenRegistryClient::new(e, &e.register(MockTokenRegistry, ()));
    let list_id = registry.add_list(&String::from_str(e, "test"));
    let mut listed = Vec::new(e);
    for token in tokens {
        listed.push_back(token.clone());
    }
    registry.add_tokens(&list_id, &listed);
    registry
}

/// A well-formed, non-zero account (`G...`) address.
pub fn account_address(e: &Env) -> Address {
    Address::from_str(e, "GCEZWKCA5VLDNRLN3RPRJMRZOX3Z6G5CHCGSNFHEYVXM3XOJMDS674JZ")
}

pub fn create_amm_factory<'a>(e: &Env) -> MockAmmFactoryClient<'a> {
    MockAmmFactoryClient::new(e, &e.register(MockAmmFactory, ()))
}

/// Orders two tokens the way a Soroswap factory stores them.
pub fn sort_tokens(token_a: &Address, token_b: &Address) -> (Address, Address) {
    if token_a < token_b {
        (token_a.clone(), token_b.clone())
    } else {
        (token_b.clone(), token_a.clone())
    }
}

/// Deploys an honest pair for `(token_a, token_b)` and records it in `factory`.
pub fn create_pair(
    e: &Env,
    factory: &MockAmmFactoryClient,
    token_a: &Address,
    token_b: &Address,
) -> Address {
    let pair = create_unregistered_pair(e, &factory.address, token_a, token_b);
    factory.register_pair(token_a, token_b, &pair);
    pair
}

/// A contract that answers every pair accessor correctly but that `factory`
/// never deployed.
pub fn create_unregistered_pair(
    e: &Env,
    factory: &Address,
    token_a: &Address,
    token_b: &Address,
) -> Address {
    let (token_0, token_1) = sort_tokens(token_a, token_b);
    e.register(
        MockPair,
        (Some(factory.clone()), Some(token_0), Some(token_1)),
    )
}
