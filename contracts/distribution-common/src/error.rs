use soroban_sdk::contracterror;

/// Failure kinds shared by every contract in the workspace.
///
/// Codes are stable: a validator error surfaced through the factory keeps the
/// code it was raised with.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    ZeroAddress = 1,
    EmptyInput = 2,
    LengthMismatch = 3,
    NotListed = 4,
    Token0NotListed = 5,
    Token1NotListed = 6,
    FactoryLookupFailed = 7,
    Token0LookupFailed = 8,
    Token1LookupFailed = 9,
    UntrustedFactory = 10,
    PairNotRegistered = 11,
    InvalidListId = 12,
    InvalidTimeWindow = 13,
    AlreadyInitialized = 14,
    Unauthorized = 15,
    InvalidStartingTimestamp = 16,
    InvalidRewardAmount = 17,
    DuplicateRewardToken = 18,
    MathOverflow = 19,
    /// A delegate validator trapped without a decodable contract error.
    ValidatorCallFailed = 20,
    DistributionNotFound = 21,
    InvalidStakingCap = 22,
    /// Instance storage is missing an entry the constructor always writes.
    NotConfigured = 23,
}
