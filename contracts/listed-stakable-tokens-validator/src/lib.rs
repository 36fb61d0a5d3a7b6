#![no_std]
use distribution_common::{
    interfaces::StakableTokensValidatorInterface,
    ownership,
    storage::extend_instance_ttl,
    token_list::{self, TokenListReference},
    Error,
};
use soroban_sdk::{contract, contractimpl, log, panic_with_error, Address, Env, Vec};

/// Stakable-token strategy for programs that stake plain assets: a stakable
/// token only has to be a trusted, listed token.
#[contract]
pub struct ListedStakableTokensValidator;

#[contractimpl]
impl ListedStakableTokensValidator {
    pub fn __constructor(e: Env, owner: Address, registry: Address, list_id: u32) {
        let list = match TokenListReference::new(&e, registry, list_id) {
            Ok(list) => list,
            Err(error) => panic_with_error!(&e, error),
        };
        if let Err(error) = ownership::init_owner(&e, &owner) {
            panic_with_error!(&e, error);
        }
        token_list::write(&e, &list);
        extend_instance_ttl(&e);
    }

    pub fn owner(e: Env) -> Result<Address, Error> {
        ownership::read_owner(&e)
    }

    pub fn registry(e: Env) -> Result<Address, Error> {
        Ok(token_list::read(&e)?.registry)
    }

    pub fn list_id(e: Env) -> Result<u32, Error> {
        Ok(token_list::read(&e)?.list_id)
    }

    pub fn set_registry(e: Env, caller: Address, registry: Address) -> Result<(), Error> {
        extend_instance_ttl(&e);
        token_list::set_registry(&e, &caller, registry)
    }

    pub fn set_list_id(e: Env, caller: Address, list_id: u32) -> Result<(), Error> {
        extend_instance_ttl(&e);
        token_list::set_list_id(&e, &caller, list_id)
    }

    pub fn transfer_ownership(e: Env, caller: Address, new_owner: Address) -> Result<(), Error> {
        extend_instance_ttl(&e);
        ownership::transfer_ownership(&e, &caller, &new_owner)
    }
}

#[contractimpl]
impl StakableTokensValidatorInterface for ListedStakableTokensValidator {
    fn validate_token(e: Env, token: Address) -> Result<(), Error> {
        extend_instance_ttl(&e);
        token_list::read(&e)?.require_listed(&e, &token)
    }

    fn validate_tokens(e: Env, tokens: Vec<Address>) -> Result<(), Error> {
        extend_instance_ttl(&e);
        if tokens.is_empty() {
            return Err(Error::EmptyInput);
        }
        let list = token_list::read(&e)?;
        for token in tokens.iter() {
            if let Err(error) = list.require_listed(&e, &token) {
                log!(&e, "rejected stakable token", token);
                return Err(error);
            }
        }
        Ok(())
    }
}

mod test;
