#![no_std]
//! Building blocks shared by the reward-distribution contracts: the error
//! taxonomy, owner bookkeeping, the token-list reference every validator
//! carries, and generated clients for the external contracts they consult.

pub mod address;
pub mod error;
pub mod events;
pub mod interfaces;
pub mod ownership;
pub mod storage;
pub mod token_list;

#[cfg(any(test, feature = "testutils"))]
pub mod testutils;

pub use error::Error;
pub use token_list::TokenListReference;

mod test;
