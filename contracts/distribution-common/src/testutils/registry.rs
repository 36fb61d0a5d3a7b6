use soroban_sdk::{contract, contractimpl, contracttype, Address, Env, String, Vec};

use crate::interfaces::TokenRegistry;

#[contracttype]
#[derive(Clone)]
enum RegistryKey {
    ListCount,
    Active(u32, Address),
}

/// Minimal list registry: lists are numbered from 1, tokens can be added and
/// later deactivated.
#[contract]
pub struct MockTokenRegistry;

#[contractimpl]
impl MockTokenRegistry {
    pub fn add_list(e: Env, _name: String) -> u32 {
        let count: u32 = e
            .storage()
            .instance()
            .get(&RegistryKey::ListCount)
            .unwrap_or(0);
        let list_id = count + 1;
        e.storage().instance().set(&RegistryKey::ListCount, &list_id);
        list_id
    }

    pub fn add_tokens(e: Env, list_id: u32, tokens: Vec<Address>) {
        for token in tokens.iter() {
            e.storage()
                .instance()
                .set(&RegistryKey::Active(list_id, token), &true);
        }
    }

    pub fn remove_tokens(e: Env, list_id: u32, tokens: Vec<Address>) {
        for token in tokens.iter() {
            e.storage()
                .instance()
                .set(&RegistryKey::Active(list_id, token), &false);
        }
    }
}

#[contractimpl]
impl TokenRegistry for MockTokenRegistry {
    fn is_token_active(e: Env, list_id: u32, token: Address) -> bool {
        e.storage()
            .instance()
            .get(&RegistryKey::Active(list_id, token))
            .unwrap_or(false)
    }
}
