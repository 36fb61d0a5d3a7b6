use soroban_sdk::{contractevent, Address};

/// Emitted when the trusted AMM factory is set, at construction or later by
/// the owner.
///
/// - topics - `["amm_factory_updated"]`
/// - data   - `[amm_factory: Address]`
#[contractevent(topics = ["amm_factory_updated"])]
pub struct AmmFactoryUpdated {
    pub amm_factory: Address,
}
