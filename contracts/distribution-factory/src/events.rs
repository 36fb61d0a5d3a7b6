use soroban_sdk::{contractevent, Address, Vec};

/// Emitted once per successful `create_distribution`.
///
/// - topics - `["distribution_created"]`
/// - data   - `[index: u32, owner: Address, reward_tokens: Vec<Address>, starting_timestamp: u64, ending_timestamp: u64, locked: bool]`
#[contractevent(topics = ["distribution_created"])]
pub struct DistributionCreated {
    pub index: u32,
    pub owner: Address,
    pub reward_tokens: Vec<Address>,
    pub starting_timestamp: u64,
    pub ending_timestamp: u64,
    pub locked: bool,
}

/// Emitted when the owner swaps the reward-token validator.
///
/// - topics - `["reward_validator_updated"]`
/// - data   - `[validator: Address]`
#[contractevent(topics = ["reward_validator_updated"])]
pub struct RewardTokensValidatorUpdated {
    pub validator: Address,
}

/// Emitted when the owner swaps the stakable-token validator.
///
/// - topics - `["stakable_validator_updated"]`
/// - data   - `[validator: Address]`
#[contractevent(topics = ["stakable_validator_updated"])]
pub struct StakableTokensValidatorUpdated {
    pub validator: Address,
}

/// Emitted when the owner toggles whether new distributions must start in
/// the future.
///
/// - topics - `["future_start_policy_updated"]`
/// - data   - `[required: bool]`
#[contractevent(topics = ["future_start_policy_updated"])]
pub struct FutureStartPolicyUpdated {
    pub required: bool,
}
