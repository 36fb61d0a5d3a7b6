//! Client interfaces. The first three describe external contracts that are
//! only ever read; the last two are the seams between the factory and the
//! validators it delegates to.

use soroban_sdk::{contractclient, Address, Env, Vec};

use crate::Error;

/// List-membership oracle.
#[contractclient(name = "TokenRegistryClient")]
pub trait TokenRegistry {
    fn is_token_active(env: Env, list_id: u32, token: Address) -> bool;
}

/// Accessors exposed by a Soroswap-style pair contract.
#[contractclient(name = "AmmPairClient")]
pub trait AmmPair {
    fn factory(env: Env) -> Address;
    fn token_0(env: Env) -> Address;
    fn token_1(env: Env) -> Address;
}

/// Pair lookup on a Soroswap-style factory. Token order is irrelevant and an
/// unknown pair makes the call fail.
#[contractclient(name = "AmmFactoryClient")]
pub trait AmmFactory {
    fn get_pair(env: Env, token_a: Address, token_b: Address) -> Address;
}

#[contractclient(name = "RewardTokensValidatorClient")]
pub trait RewardTokensValidatorInterface {
    /// Accepts an ordered, non-empty vector of reward tokens or reports the
    /// first offending one.
    fn validate_tokens(env: Env, tokens: Vec<Address>) -> Result<(), Error>;
}

#[contractclient(name = "StakableTokensValidatorClient")]
pub trait StakableTokensValidatorInterface {
    fn validate_token(env: Env, token: Address) -> Result<(), Error>;

    /// Same per-element policy as `validate_token`; an empty batch is
    /// rejected and the first failure aborts the whole batch.
    fn validate_tokens(env: Env, tokens: Vec<Address>) -> Result<(), Error>;
}
