#![no_std]
use distribution_common::{
    address,
    interfaces::{AmmFactoryClient, AmmPairClient, StakableTokensValidatorInterface},
    ownership,
    storage::extend_instance_ttl,
    token_list::{self, TokenListReference},
    Error,
};
use soroban_sdk::{contract, contractimpl, contracttype, log, panic_with_error, Address, Env, Vec};

#[contracttype]
#[derive(Clone)]
enum DataKey {
    AmmFactory,
}

fn read_amm_factory(e: &Env) -> Result<Address, Error> {
    e.storage()
        .instance()
        .get(&DataKey::AmmFactory)
        .ok_or(Error::NotConfigured)
}

fn write_amm_factory(e: &Env, amm_factory: &Address) -> Result<(), Error> {
    address::require_non_zero(e, amm_factory)?;
    e.storage().instance().set(&DataKey::AmmFactory, amm_factory);
    events::AmmFactoryUpdated {
        amm_factory: amm_factory.clone(),
    }
    .publish(e);
    Ok(())
}

/// Checks that `token` is a liquidity-pool token minted by the trusted AMM
/// factory for two listed assets.
///
/// Every accessor answer comes from the candidate itself and is therefore
/// attacker-controlled; only the factory's own pair lookup proves the
/// candidate is a real deployment. The checks run in a fixed order and each
/// failure maps to its own error.
fn validate_pair(
    e: &Env,
    list: &TokenListReference,
    trusted_factory: &Address,
    token: &Address,
) -> Result<(), Error> {
    address::require_non_zero(e, token)?;
    if !address::is_contract(token) {
        return Err(Error::FactoryLookupFailed);
    }

    let pair = AmmPairClient::new(e, token);
    let factory = match pair.try_factory() {
        Ok(Ok(factory)) => factory,
        _ => return Err(Error::FactoryLookupFailed),
    };
    if factory != *trusted_factory {
        return Err(Error::UntrustedFactory);
    }
    let token_0 = match pair.try_token_0() {
        Ok(Ok(token_0)) => token_0,
        _ => return Err(Error::Token0LookupFailed),
    };
    let token_1 = match pair.try_token_1() {
        Ok(Ok(token_1)) => token_1,
        _ => return Err(Error::Token1LookupFailed),
    };

    match AmmFactoryClient::new(e, trusted_factory).try_get_pair(&token_0, &token_1) {
        Ok(Ok(registered)) if registered == *token => {}
        _ => return Err(Error::PairNotRegistered),
    }

    if !list.contains(e, &token_0) {
        return Err(Error::Token0NotListed);
    }
    if !list.contains(e, &token_1) {
        return Err(Error::Token1NotListed);
    }
    Ok(())
}

/// Stakable-token strategy for liquidity-mining programs: the stakable token
/// must be an authentic pair of the trusted AMM whose two underlying assets
/// are both listed.
#[contract]
pub struct PairStakableTokensValidator;

#[contractimpl]
impl PairStakableTokensValidator {
    pub fn __constructor(
        e: Env,
        owner: Address,
        registry: Address,
        list_id: u32,
        amm_factory: Address,
    ) {
        let list = match TokenListReference::new(&e, registry, list_id) {
            Ok(list) => list,
            Err(error) => panic_with_error!(&e, error),
        };
        if let Err(error) = ownership::init_owner(&e, &owner) {
            panic_with_error!(&e, error);
        }
        if let Err(error) = write_amm_factory(&e, &amm_factory) {
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

    pub fn amm_factory(e: Env) -> Result<Address, Error> {
        read_amm_factory(&e)
    }

    pub fn set_registry(e: Env, caller: Address, registry: Address) -> Result<(), Error> {
        extend_instance_ttl(&e);
        token_list::set_registry(&e, &caller, registry)
    }

    pub fn set_list_id(e: Env, caller: Address, list_id: u32) -> Result<(), Error> {
        extend_instance_ttl(&e);
        token_list::set_list_id(&e, &caller, list_id)
    }

    pub fn set_amm_factory(e: Env, caller: Address, amm_factory: Address) -> Result<(), Error> {
        extend_instance_ttl(&e);
        ownership::require_owner(&e, &caller)?;
        write_amm_factory(&e, &amm_factory)
    }

    pub fn transfer_ownership(e: Env, caller: Address, new_owner: Address) -> Result<(), Error> {
        extend_instance_ttl(&e);
        ownership::transfer_ownership(&e, &caller, &new_owner)
    }
}

#[contractimpl]
impl StakableTokensValidatorInterface for PairStakableTokensValidator {
    fn validate_token(e: Env, token: Address) -> Result<(), Error> {
        extend_instance_ttl(&e);
        let list = token_list::read(&e)?;
        let trusted_factory = read_amm_factory(&e)?;
        validate_pair(&e, &list, &trusted_factory, &token)
    }

    fn validate_tokens(e: Env, tokens: Vec<Address>) -> Result<(), Error> {
        extend_instance_ttl(&e);
        if tokens.is_empty() {
            return Err(Error::EmptyInput);
        }
        let list = token_list::read(&e)?;
        let trusted_factory = read_amm_factory(&e)?;
        for token in tokens.iter() {
            if let Err(error) = validate_pair(&e, &list, &trusted_factory, &token) {
                log!(&e, "rejected stakable pair", token, error as u32);
                return Err(error);
            }
        }
        Ok(())
    }
}

mod events;
