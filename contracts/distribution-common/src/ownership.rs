//! Single-owner capability. Every mutating configuration entry point takes the
//! caller explicitly, requires its signature, and compares it against the
//! stored owner.

use soroban_sdk::{Address, Env};

use crate::{address, events, storage::CommonKey, Error};

pub fn read_owner(e: &Env) -> Result<Address, Error> {
    e.storage()
        .instance()
        .get(&CommonKey::Owner)
        .ok_or(Error::NotConfigured)
}

/// Constructor-time assignment. Aborts on the zero address.
pub fn init_owner(e: &Env, owner: &Address) -> Result<(), Error> {
    address::require_non_zero(e, owner)?;
    e.storage().instance().set(&CommonKey::Owner, owner);
    events::OwnershipTransferred {
        previous_owner: None,
        new_owner: owner.clone(),
    }
    .publish(e);
    Ok(())
}

pub fn require_owner(e: &Env, caller: &Address) -> Result<(), Error> {
    caller.require_auth();
    if *caller != read_owner(e)? {
        return Err(Error::Unauthorized);
    }
    Ok(())
}

pub fn transfer_ownership(e: &Env, caller: &Address, new_owner: &Address) -> Result<(), Error> {
    require_owner(e, caller)?;
    address::require_non_zero(e, new_owner)?;
    e.storage().instance().set(&CommonKey::Owner, new_owner);
    events::OwnershipTransferred {
        previous_owner: Some(caller.clone()),
        new_owner: new_owner.clone(),
    }
    .publish(e);
    Ok(())
}
