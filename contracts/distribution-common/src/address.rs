use soroban_sdk::{Address, Env, Executable, String};

use crate::Error;

/// Strkey of the all-zero ed25519 account.
pub const ZERO_ACCOUNT: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";
/// Strkey of the all-zero contract id.
pub const ZERO_CONTRACT: &str = "CAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAABSC4";

/// The all-zero contract address, used as the null address by off-chain
/// tooling that has no way to express "unset".
pub fn zero_address(e: &Env) -> Address {
    Address::from_string(&String::from_str(e, ZERO_CONTRACT))
}

pub fn is_zero(e: &Env, address: &Address) -> bool {
    *address == zero_address(e)
        || *address == Address::from_string(&String::from_str(e, ZERO_ACCOUNT))
}

pub fn require_non_zero(e: &Env, address: &Address) -> Result<(), Error> {
    if is_zero(e, address) {
        return Err(Error::ZeroAddress);
    }
    Ok(())
}

/// True only for a deployed contract. Accounts and contract ids with no
/// instance behind them cannot be invoked without aborting the caller.
pub fn is_contract(address: &Address) -> bool {
    matches!(
        address.executable(),
        Some(Executable::Wasm(_)) | Some(Executable::StellarAsset)
    )
}
