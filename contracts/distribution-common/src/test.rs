#![cfg(test)]

use soroban_sdk::{testutils::Address as _, vec, Address, Env, String};

use crate::{
    address::{self, zero_address, ZERO_ACCOUNT},
    ownership,
    testutils::{account_address, create_registry},
    token_list::{self, TokenListReference},
    Error,
};

#[test]
fn test_zero_addresses_are_recognized() {
    let env = Env::default();

    assert!(address::is_zero(&env, &zero_address(&env)));
    assert!(address::is_zero(
        &env,
        &Address::from_string(&String::from_str(&env, ZERO_ACCOUNT))
    ));
    assert!(!address::is_zero(&env, &Address::generate(&env)));
    assert_eq!(
        address::require_non_zero(&env, &zero_address(&env)),
        Err(Error::ZeroAddress)
    );
}

#[test]
fn test_token_list_reference_invariants() {
    let env = Env::default();
    let registry = Address::generate(&env);

    assert_eq!(
        TokenListReference::new(&env, zero_address(&env), 1),
        Err(Error::ZeroAddress)
    );
    assert_eq!(
        TokenListReference::new(&env, registry.clone(), 0),
        Err(Error::InvalidListId)
    );
    let list = TokenListReference::new(&env, registry.clone(), 1).unwrap();
    assert_eq!(list.registry, registry);
    assert_eq!(list.list_id, 1);
}

#[test]
fn test_require_listed_follows_registry_state() {
    let env = Env::default();
    let listed = Address::generate(&env);
    let unlisted = Address::generate(&env);
    let registry = create_registry(&env, &[listed.clone()]);
    let list = TokenListReference::new(&env, registry.address.clone(), 1).unwrap();

    assert_eq!(list.require_listed(&env, &listed), Ok(()));
    assert_eq!(list.require_listed(&env, &unlisted), Err(Error::NotListed));
    assert_eq!(
        list.require_listed(&env, &zero_address(&env)),
        Err(Error::ZeroAddress)
    );

    // a delisted token is no longer accepted
    registry.remove_tokens(&1, &vec![&env, listed.clone()]);
    assert_eq!(list.require_listed(&env, &listed), Err(Error::NotListed));

    // membership is per list
    let other = TokenListReference::new(&env, registry.address.clone(), 2).unwrap();
    assert!(!other.contains(&env, &unlisted));
}

#[test]
fn test_only_deployed_contracts_count_as_contracts() {
    let env = Env::default();
    let registry = create_registry(&env, &[]);

    assert!(address::is_contract(&registry.address));
    assert!(!address::is_contract(&account_address(&env)));
    assert!(!address::is_contract(&Address::generate(&env)));
}

// Each owner-gated call authorizes the contract frame it runs in, so every
// one of them gets its own `as_contract` block.

#[test]
fn test_owner_gating_and_transfer() {
    let env = Env::default();
    env.mock_all_auths();

    let registry = create_registry(&env, &[]);
    let owner = Address::generate(&env);
    let stranger = Address::generate(&env);
    let successor = Address::generate(&env);
    let as_registry = |f: &dyn Fn() -> Result<(), Error>| env.as_contract(&registry.address, f);

    env.as_contract(&registry.address, || {
        assert_eq!(ownership::read_owner(&env), Err(Error::NotConfigured));
        assert_eq!(
            ownership::init_owner(&env, &zero_address(&env)),
            Err(Error::ZeroAddress)
        );
        ownership::init_owner(&env, &owner).unwrap();
    });

    assert_eq!(as_registry(&|| ownership::require_owner(&env, &owner)), Ok(()));
    assert_eq!(
        as_registry(&|| ownership::require_owner(&env, &stranger)),
        Err(Error::Unauthorized)
    );
    assert_eq!(
        as_registry(&|| ownership::transfer_ownership(&env, &stranger, &successor)),
        Err(Error::Unauthorized)
    );
    assert_eq!(
        as_registry(&|| ownership::transfer_ownership(&env, &owner, &zero_address(&env))),
        Err(Error::ZeroAddress)
    );

    assert_eq!(
        as_registry(&|| ownership::transfer_ownership(&env, &owner, &successor)),
        Ok(())
    );
    env.as_contract(&registry.address, || {
        assert_eq!(ownership::read_owner(&env), Ok(successor.clone()));
    });
    assert_eq!(
        as_registry(&|| ownership::require_owner(&env, &owner)),
        Err(Error::Unauthorized)
    );
}

#[test]
fn test_token_list_setters_reenforce_invariants() {
    let env = Env::default();
    env.mock_all_auths();

    let registry = create_registry(&env, &[]);
    let owner = Address::generate(&env);
    let stranger = Address::generate(&env);
    let new_registry = Address::generate(&env);
    let as_registry = |f: &dyn Fn() -> Result<(), Error>| env.as_contract(&registry.address, f);

    env.as_contract(&registry.address, || {
        ownership::init_owner(&env, &owner).unwrap();
        token_list::write(
            &env,
            &TokenListReference::new(&env, registry.address.clone(), 1).unwrap(),
        );
    });

    assert_eq!(
        as_registry(&|| token_list::set_list_id(&env, &owner, 0)),
        Err(Error::InvalidListId)
    );
    assert_eq!(
        as_registry(&|| token_list::set_registry(&env, &owner, zero_address(&env))),
        Err(Error::ZeroAddress)
    );
    assert_eq!(
        as_registry(&|| token_list::set_list_id(&env, &stranger, 3)),
        Err(Error::Unauthorized)
    );

    assert_eq!(
        as_registry(&|| token_list::set_list_id(&env, &owner, 3)),
        Ok(())
    );
    assert_eq!(
        as_registry(&|| token_list::set_registry(&env, &owner, new_registry.clone())),
        Ok(())
    );
    let list = env.as_contract(&registry.address, || token_list::read(&env).unwrap());
    assert_eq!(list.list_id, 3);
    assert_eq!(list.registry, new_registry);
}
