use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum WalletError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    InvalidDirectors = 3,
    InvalidPayoutTargets = 4,
    Unauthorized = 5,
    SelfApprovalForbidden = 6,
    NotFound = 7,
    AlreadyDecided = 8,
    InvalidProposal = 9,
    ThresholdNotConfigured = 10,
    InvalidOracleReading = 11,
    NothingToTransfer = 12,
    TransferFailed = 13,
    InvalidAmount = 14,
    ArithmeticOverflow = 15,
}
