#![no_std]
use distribution_common::{
    address,
    interfaces::{RewardTokensValidatorClient, StakableTokensValidatorClient},
    ownership,
    storage::extend_instance_ttl,
    Error,
};
use soroban_sdk::{
    contract, contractimpl, log, panic_with_error, token::TokenClient, Address, Env, Vec,
};

pub use distribution::{Distribution, DistributionParams, RewardToken};

/// Collapses a `try_` validator call. A decodable contract error is passed
/// through untouched; anything else (trap, missing contract, undecodable
/// return) becomes `ValidatorCallFailed`.
fn delegated<T, C, I>(outcome: Result<Result<T, C>, Result<Error, I>>) -> Result<T, Error> {
    match outcome {
        Ok(Ok(value)) => Ok(value),
        Err(Ok(error)) => Err(error),
        _ => Err(Error::ValidatorCallFailed),
    }
}

#[contract]
pub struct DistributionFactory;

#[contractimpl]
impl DistributionFactory {
    /// `require_future_start` decides whether new distributions must open
    /// strictly after the ledger time they are created at.
    pub fn __constructor(
        e: Env,
        owner: Address,
        reward_tokens_validator: Address,
        stakable_tokens_validator: Address,
        require_future_start: bool,
    ) {
        if address::is_zero(&e, &reward_tokens_validator)
            || address::is_zero(&e, &stakable_tokens_validator)
        {
            panic_with_error!(&e, Error::ZeroAddress);
        }
        if let Err(error) = ownership::init_owner(&e, &owner) {
            panic_with_error!(&e, error);
        }
        storage::write_reward_tokens_validator(&e, &reward_tokens_validator);
        storage::write_stakable_tokens_validator(&e, &stakable_tokens_validator);
        storage::write_require_future_start(&e, require_future_start);
        extend_instance_ttl(&e);
    }

    /// Validates the inputs, escrows `amounts[i]` of every reward token from
    /// `caller`, and records a new initialized distribution owned by `caller`.
    ///
    /// Returns the registry index of the new distribution.
    ///
    /// # Auth
    /// `caller` must authorise this invocation AND the nested
    /// `reward_token.transfer(caller → factory, amount)` for every reward token.
    ///
    /// # Atomicity
    /// Every check, including both validators and the distribution's own
    /// initializer, runs before the first transfer. A failure at any point
    /// aborts the invocation, which also rolls back transfers already made.
    #[allow(clippy::too_many_arguments)]
    pub fn create_distribution(
        e: Env,
        caller: Address,
        reward_tokens: Vec<Address>,
        stakable_tokens: Vec<Address>,
        amounts: Vec<i128>,
        starting_timestamp: u64,
        ending_timestamp: u64,
        locked: bool,
        staking_cap: i128,
    ) -> Result<u32, Error> {
        caller.require_auth();
        extend_instance_ttl(&e);

        // ── 1. Shape ──────────────────────────────────────────────────────────
        if amounts.len() != reward_tokens.len() {
            return Err(Error::LengthMismatch);
        }

        // ── 2. Delegated token validation ─────────────────────────────────────
        let reward_validator =
            RewardTokensValidatorClient::new(&e, &storage::read_reward_tokens_validator(&e)?);
        if let Err(error) = delegated(reward_validator.try_validate_tokens(&reward_tokens)) {
            log!(&e, "reward tokens rejected", error as u32);
            return Err(error);
        }
        let stakable_validator =
            StakableTokensValidatorClient::new(&e, &storage::read_stakable_tokens_validator(&e)?);
        if let Err(error) = delegated(stakable_validator.try_validate_tokens(&stakable_tokens)) {
            log!(&e, "stakable tokens rejected", error as u32);
            return Err(error);
        }

        // ── 3. Window and per-token accounting ────────────────────────────────
        if ending_timestamp <= starting_timestamp {
            return Err(Error::InvalidTimeWindow);
        }
        let duration = ending_timestamp - starting_timestamp;
        let mut rewards: Vec<RewardToken> = Vec::new(&e);
        for (token, amount) in reward_tokens.iter().zip(amounts.iter()) {
            rewards.push_back(RewardToken::new(&e, token, amount, duration)?);
        }

        // ── 4. Stage and initialize ───────────────────────────────────────────
        let mut distribution = Distribution::uninitialized(&e, caller.clone());
        distribution.initialize(
            &e,
            DistributionParams {
                reward_tokens: rewards,
                stakable_tokens,
                starting_timestamp,
                ending_timestamp,
                locked,
                staking_cap,
            },
            storage::read_require_future_start(&e),
        )?;

        // ── 5. Escrow the rewards ─────────────────────────────────────────────
        // Transfer errors (allowance, balance, frozen trustline) surface as the
        // token's own error.
        let custody = e.current_contract_address();
        for reward in distribution.reward_tokens.iter() {
            TokenClient::new(&e, &reward.token).transfer(&caller, &custody, &reward.amount);
        }

        // ── 6. Record ─────────────────────────────────────────────────────────
        let index = storage::append_distribution(&e, &distribution)?;
        events::DistributionCreated {
            index,
            owner: caller,
            reward_tokens,
            starting_timestamp,
            ending_timestamp,
            locked,
        }
        .publish(&e);

        Ok(index)
    }

    pub fn get_distributions_amount(e: Env) -> u32 {
        storage::distributions_amount(&e)
    }

    pub fn distribution(e: Env, index: u32) -> Result<Distribution, Error> {
        storage::read_distribution(&e, index)
    }

    /// Per reward token, the part of the escrow unlocked by `timestamp`.
    pub fn released_rewards(e: Env, index: u32, timestamp: u64) -> Result<Vec<i128>, Error> {
        Ok(storage::read_distribution(&e, index)?.released_rewards(&e, timestamp))
    }

    // ── configuration ─────────────────────────────────────────────────────────

    pub fn owner(e: Env) -> Result<Address, Error> {
        ownership::read_owner(&e)
    }

    pub fn reward_tokens_validator(e: Env) -> Result<Address, Error> {
        storage::read_reward_tokens_validator(&e)
    }

    pub fn stakable_tokens_validator(e: Env) -> Result<Address, Error> {
        storage::read_stakable_tokens_validator(&e)
    }

    pub fn require_future_start(e: Env) -> bool {
        storage::read_require_future_start(&e)
    }

    /// Only affects distributions created afterwards.
    pub fn set_reward_tokens_validator(
        e: Env,
        caller: Address,
        validator: Address,
    ) -> Result<(), Error> {
        extend_instance_ttl(&e);
        ownership::require_owner(&e, &caller)?;
        address::require_non_zero(&e, &validator)?;
        storage::write_reward_tokens_validator(&e, &validator);
        events::RewardTokensValidatorUpdated { validator }.publish(&e);
        Ok(())
    }

    /// Only affects distributions created afterwards.
    pub fn set_stakable_tokens_validator(
        e: Env,
        caller: Address,
        validator: Address,
    ) -> Result<(), Error> {
        extend_instance_ttl(&e);
        ownership::require_owner(&e, &caller)?;
        address::require_non_zero(&e, &validator)?;
        storage::write_stakable_tokens_validator(&e, &validator);
        events::StakableTokensValidatorUpdated { validator }.publish(&e);
        Ok(())
    }

    pub fn set_require_future_start(e: Env, caller: Address, required: bool) -> Result<(), Error> {
        extend_instance_ttl(&e);
        ownership::require_owner(&e, &caller)?;
        storage::write_require_future_start(&e, required);
        events::FutureStartPolicyUpdated { required }.publish(&e);
        Ok(())
    }

    pub fn transfer_ownership(e: Env, caller: Address, new_owner: Address) -> Result<(), Error> {
        extend_instance_ttl(&e);
        ownership::transfer_ownership(&e, &caller, &new_owner)
    }
}

mod distribution;
mod events;
mod storage;
