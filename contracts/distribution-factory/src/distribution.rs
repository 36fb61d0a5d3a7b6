use distribution_common::Error;
use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::{contracttype, token::TokenClient, Address, Env, Map, Vec};

/// Per-token accounting fixed at creation time.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardToken {
    pub token: Address,
    /// Total reward escrowed for the whole window.
    pub amount: i128,
    /// `amount / duration`, truncated. The remainder is never streamed.
    pub per_second: i128,
    /// `10^decimals` of the token, used by the staking math to scale rewards.
    pub multiplier: i128,
}

impl RewardToken {
    /// Reads `decimals()` from the token contract and derives the rate for a
    /// window of `duration` seconds. The amount itself is checked by
    /// [`Distribution::initialize`].
    pub fn new(e: &Env, token: Address, amount: i128, duration: u64) -> Result<Self, Error> {
        let per_second = per_second_rate(amount, duration)?;
        let multiplier = decimal_multiplier(TokenClient::new(e, &token).decimals())?;
        Ok(Self {
            token,
            amount,
            per_second,
            multiplier,
        })
    }
}

pub fn per_second_rate(amount: i128, duration: u64) -> Result<i128, Error> {
    if duration == 0 {
        return Err(Error::InvalidTimeWindow);
    }
    amount
        .checked_div(i128::from(duration))
        .ok_or(Error::MathOverflow)
}

pub fn decimal_multiplier(decimals: u32) -> Result<i128, Error> {
    10_i128.checked_pow(decimals).ok_or(Error::MathOverflow)
}

/// Inputs to [`Distribution::initialize`].
pub struct DistributionParams {
    pub reward_tokens: Vec<RewardToken>,
    pub stakable_tokens: Vec<Address>,
    pub starting_timestamp: u64,
    pub ending_timestamp: u64,
    pub locked: bool,
    /// Maximum total stake; 0 means uncapped.
    pub staking_cap: i128,
}

/// One reward program. Starts uninitialized and becomes immutable once
/// [`Distribution::initialize`] succeeds.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Distribution {
    pub owner: Address,
    pub reward_tokens: Vec<RewardToken>,
    pub stakable_tokens: Vec<Address>,
    pub starting_timestamp: u64,
    pub ending_timestamp: u64,
    pub locked: bool,
    pub staking_cap: i128,
    pub initialized: bool,
}

impl Distribution {
    pub fn uninitialized(e: &Env, owner: Address) -> Self {
        Self {
            owner,
            reward_tokens: Vec::new(e),
            stakable_tokens: Vec::new(e),
            starting_timestamp: 0,
            ending_timestamp: 0,
            locked: false,
            staking_cap: 0,
            initialized: false,
        }
    }

    /// One-shot initializer. When `require_future_start` is set the window
    /// must open strictly after the current ledger timestamp.
    pub fn initialize(
        &mut self,
        e: &Env,
        params: DistributionParams,
        require_future_start: bool,
    ) -> Result<(), Error> {
        if self.initialized {
            return Err(Error::AlreadyInitialized);
        }
        if params.ending_timestamp <= params.starting_timestamp {
            return Err(Error::InvalidTimeWindow);
        }
        if require_future_start && params.starting_timestamp <= e.ledger().timestamp() {
            return Err(Error::InvalidStartingTimestamp);
        }
        if params.reward_tokens.is_empty() || params.stakable_tokens.is_empty() {
            return Err(Error::EmptyInput);
        }
        if params.staking_cap < 0 {
            return Err(Error::InvalidStakingCap);
        }

        let mut seen: Map<Address, ()> = Map::new(e);
        for reward in params.reward_tokens.iter() {
            if reward.amount <= 0 {
                return Err(Error::InvalidRewardAmount);
            }
            if seen.contains_key(reward.token.clone()) {
                return Err(Error::DuplicateRewardToken);
            }
            seen.set(reward.token, ());
        }

        self.reward_tokens = params.reward_tokens;
        self.stakable_tokens = params.stakable_tokens;
        self.starting_timestamp = params.starting_timestamp;
        self.ending_timestamp = params.ending_timestamp;
        self.locked = params.locked;
        self.staking_cap = params.staking_cap;
        self.initialized = true;
        Ok(())
    }

    pub fn duration(&self) -> u64 {
        self.ending_timestamp - self.starting_timestamp
    }

    /// Rewards unlocked by `timestamp`, one entry per reward token in order:
    /// `floor(amount * elapsed / duration)` with `elapsed` clamped to the
    /// window. Uses the exact amount rather than `per_second` so nothing is
    /// lost to the rate's truncation once the window has closed.
    pub fn released_rewards(&self, e: &Env, timestamp: u64) -> Vec<i128> {
        let mut released = Vec::new(e);
        if !self.initialized {
            return released;
        }
        let duration = i128::from(self.duration());
        let elapsed = i128::from(
            timestamp.clamp(self.starting_timestamp, self.ending_timestamp)
                - self.starting_timestamp,
        );
        for reward in self.reward_tokens.iter() {
            released.push_back(reward.amount.fixed_mul_floor(e, &elapsed, &duration));
        }
        released
    }
}
