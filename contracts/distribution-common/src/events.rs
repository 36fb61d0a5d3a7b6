use soroban_sdk::{contractevent, Address};

/// Emitted when a contract changes hands, including the initial assignment
/// made by the constructor.
///
/// - topics - `["ownership_transferred"]`
/// - data   - `[previous_owner: Option<Address>, new_owner: Address]`
#[contractevent(topics = ["ownership_transferred"])]
pub struct OwnershipTransferred {
    pub previous_owner: Option<Address>,
    pub new_owner: Address,
}

/// Emitted whenever a validator's token-list reference is written.
///
/// - topics - `["token_list_updated"]`
/// - data   - `[registry: Address, list_id: u32]`
#[contractevent(topics = ["token_list_updated"])]
pub struct TokenListUpdated {
    pub registry: Address,
    pub list_id: u32,
}
