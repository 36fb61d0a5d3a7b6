use soroban_sdk::{contract, contractimpl, contracttype, Address, Env};

use crate::interfaces::AmmPair;

#[contracttype]
#[derive(Clone)]
enum PairKey {
    Factory,
    Token0,
    Token1,
}

/// Pair contract whose accessors can be made to trap: any field constructed
/// as `None` panics when read.
#[contract]
pub struct MockPair;

fn read(e: &Env, key: PairKey) -> Address {
    e.storage()
        .instance()
        .get(&key)
        .unwrap_or_else(|| panic!("accessor unavailable"))
}

#[contractimpl]
impl MockPair {
    pub fn __constructor(
        e: Env,
        factory: Option<Address>,
        token_0: Option<Address>,
        token_1: Option<Address>,
    ) {
        for (key, value) in [
            (PairKey::Factory, factory),
            (PairKey::Token0, token_0),
            (PairKey::Token1, token_1),
        ] {
            if let Some(address) = value {
                e.storage().instance().set(&key, &address);
            }
        }
    }
}

#[contractimpl]
impl AmmPair for MockPair {
    fn factory(e: Env) -> Address {
        read(&e, PairKey::Factory)
    }

    fn token_0(e: Env) -> Address {
        read(&e, PairKey::Token0)
    }

    fn token_1(e: Env) -> Address {
        read(&e, PairKey::Token1)
    }
}
