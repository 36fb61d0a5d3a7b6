use soroban_sdk::{contracttype, Env};

pub const DAY_IN_LEDGERS: u32 = 17_280;

pub const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;
pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;

pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;
pub const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

/// Instance keys written by the shared modules. Contract crates keep their
/// own key enums and must not reuse these variant names.
#[contracttype]
#[derive(Clone)]
pub enum CommonKey {
    Owner,
    TokenList,
}

pub fn extend_instance_ttl(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}
