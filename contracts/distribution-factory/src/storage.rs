use distribution_common::{
    storage::{PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD},
    Error,
};
use soroban_sdk::{contracttype, Address, Env};

use crate::distribution::Distribution;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    RewardTokensValidator,
    StakableTokensValidator,
    RequireFutureStart,
    DistributionsAmount,
    Distribution(u32),
}

pub fn read_reward_tokens_validator(e: &Env) -> Result<Address, Error> {
    e.storage()
        .instance()
        .get(&DataKey::RewardTokensValidator)
        .ok_or(Error::NotConfigured)
}

pub fn write_reward_tokens_validator(e: &Env, validator: &Address) {
    e.storage()
        .instance()
        .set(&DataKey::RewardTokensValidator, validator);
}

pub fn read_stakable_tokens_validator(e: &Env) -> Result<Address, Error> {
    e.storage()
        .instance()
        .get(&DataKey::StakableTokensValidator)
        .ok_or(Error::NotConfigured)
}

pub fn write_stakable_tokens_validator(e: &Env, validator: &Address) {
    e.storage()
        .instance()
        .set(&DataKey::StakableTokensValidator, validator);
}

pub fn read_require_future_start(e: &Env) -> bool {
    e.storage()
        .instance()
        .get(&DataKey::RequireFutureStart)
        .unwrap_or(true)
}

pub fn write_require_future_start(e: &Env, required: bool) {
    e.storage()
        .instance()
        .set(&DataKey::RequireFutureStart, &required);
}

pub fn distributions_amount(e: &Env) -> u32 {
    e.storage()
        .instance()
        .get(&DataKey::DistributionsAmount)
        .unwrap_or(0)
}

pub fn read_distribution(e: &Env, index: u32) -> Result<Distribution, Error> {
    let key = DataKey::Distribution(index);
    let distribution = e
        .storage()
        .persistent()
        .get(&key)
        .ok_or(Error::DistributionNotFound)?;
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
    Ok(distribution)
}

/// Appends to the registry and returns the new entry's index. Entries are
/// never overwritten or removed.
pub fn append_distribution(e: &Env, distribution: &Distribution) -> Result<u32, Error> {
    let index = distributions_amount(e);
    let next = index.checked_add(1).ok_or(Error::MathOverflow)?;
    let key = DataKey::Distribution(index);
    e.storage().persistent().set(&key, distribution);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
    e.storage()
        .instance()
        .set(&DataKey::DistributionsAmount, &next);
    Ok(index)
}
