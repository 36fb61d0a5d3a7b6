use soroban_sdk::{contracttype, Address, Env};

use crate::{
    address, events, interfaces::TokenRegistryClient, ownership, storage::CommonKey, Error,
};

/// Which registry list a validator trusts. `list_id` starts at 1 because the
/// registry never hands out list 0.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenListReference {
    pub registry: Address,
    pub list_id: u32,
}

impl TokenListReference {
    pub fn new(e: &Env, registry: Address, list_id: u32) -> Result<Self, Error> {
        address::require_non_zero(e, &registry)?;
        require_valid_list_id(list_id)?;
        Ok(Self { registry, list_id })
    }

    pub fn contains(&self, e: &Env, token: &Address) -> bool {
        TokenRegistryClient::new(e, &self.registry).is_token_active(&self.list_id, token)
    }

    /// The complete policy for a plain listed token.
    pub fn require_listed(&self, e: &Env, token: &Address) -> Result<(), Error> {
        address::require_non_zero(e, token)?;
        if !self.contains(e, token) {
            return Err(Error::NotListed);
        }
        Ok(())
    }
}

pub fn require_valid_list_id(list_id: u32) -> Result<(), Error> {
    if list_id < 1 {
        return Err(Error::InvalidListId);
    }
    Ok(())
}

pub fn read(e: &Env) -> Result<TokenListReference, Error> {
    e.storage()
        .instance()
        .get(&CommonKey::TokenList)
        .ok_or(Error::NotConfigured)
}

pub fn write(e: &Env, list: &TokenListReference) {
    e.storage().instance().set(&CommonKey::TokenList, list);
    events::TokenListUpdated {
        registry: list.registry.clone(),
        list_id: list.list_id,
    }
    .publish(e);
}

pub fn set_registry(e: &Env, caller: &Address, registry: Address) -> Result<(), Error> {
    ownership::require_owner(e, caller)?;
    let current = read(e)?;
    write(e, &TokenListReference::new(e, registry, current.list_id)?);
    Ok(())
}

pub fn set_list_id(e: &Env, caller: &Address, list_id: u32) -> Result<(), Error> {
    ownership::require_owner(e, caller)?;
    let current = read(e)?;
    write(e, &TokenListReference::new(e, current.registry, list_id)?);
    Ok(())
}
