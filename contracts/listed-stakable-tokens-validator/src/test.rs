#![cfg(test)]

use super::*;
use distribution_common::{address::zero_address, testutils::create_registry};
use soroban_sdk::{testutils::Address as _, vec, Address, Env};

fn setup<'a>(env: &Env, listed: &[Address]) -> (Address, ListedStakableTokensValidatorClient<'a>) {
    let owner = Address::generate(env);
    let registry = create_registry(env, listed);
    let validator_id = env.register(
        ListedStakableTokensValidator,
        (owner.clone(), registry.address.clone(), 1_u32),
    );
    (owner, ListedStakableTokensValidatorClient::new(env, &validator_id))
}

#[test]
#[should_panic(expected = "Error(Contract, #1)")]
fn test_constructor_rejects_zero_registry() {
    let env = Env::default();
    env.register(
        ListedStakableTokensValidator,
        (Address::generate(&env), zero_address(&env), 1_u32),
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #12)")]
fn test_constructor_rejects_list_id_zero() {
    let env = Env::default();
    env.register(
        ListedStakableTokensValidator,
        (Address::generate(&env), Address::generate(&env), 0_u32),
    );
}

#[test]
fn test_owner_gated_configuration() {
    let env = Env::default();
    env.mock_all_auths();
    let (owner, validator) = setup(&env, &[]);
    let stranger = Address::generate(&env);
    let new_registry = Address::generate(&env);

    assert_eq!(validator.owner(), owner);
    assert_eq!(
        validator.try_set_registry(&stranger, &new_registry),
        Err(Ok(Error::Unauthorized))
    );
    assert_eq!(
        validator.try_set_list_id(&stranger, &4),
        Err(Ok(Error::Unauthorized))
    );
    assert_eq!(
        validator.try_set_registry(&owner, &zero_address(&env)),
        Err(Ok(Error::ZeroAddress))
    );
    assert_eq!(
        validator.try_set_list_id(&owner, &0),
        Err(Ok(Error::InvalidListId))
    );

    validator.set_registry(&owner, &new_registry);
    validator.set_list_id(&owner, &4);
    assert_eq!(validator.registry(), new_registry);
    assert_eq!(validator.list_id(), 4);
}

#[test]
fn test_single_token_policy() {
    let env = Env::default();
    let listed = Address::generate(&env);
    let (_, validator) = setup(&env, &[listed.clone()]);

    assert_eq!(
        validator.try_validate_token(&zero_address(&env)),
        Err(Ok(Error::ZeroAddress))
    );
    assert_eq!(
        validator.try_validate_token(&Address::generate(&env)),
        Err(Ok(Error::NotListed))
    );
    assert_eq!(validator.try_validate_token(&listed), Ok(Ok(())));
}

#[test]
fn test_batch_aborts_on_first_failure() {
    let env = Env::default();
    let first = Address::generate(&env);
    let second = Address::generate(&env);
    let (_, validator) = setup(&env, &[first.clone(), second.clone()]);

    assert_eq!(
        validator.try_validate_tokens(&vec![&env]),
        Err(Ok(Error::EmptyInput))
    );
    // the zero address comes first, so its error wins over the unlisted one
    assert_eq!(
        validator.try_validate_tokens(&vec![
            &env,
            first.clone(),
            zero_address(&env),
            Address::generate(&env),
        ]),
        Err(Ok(Error::ZeroAddress))
    );
    assert_eq!(
        validator.try_validate_tokens(&vec![&env, first.clone(), Address::generate(&env)]),
        Err(Ok(Error::NotListed))
    );
    assert_eq!(
        validator.try_validate_tokens(&vec![&env, first, second]),
        Ok(Ok(()))
    );
}
