use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Invalid pool params")]
    InvalidPoolParams,
    #[msg("No pending owner")]
    NoPendingOwner,
    #[msg("Pending owner mismatch")]
    PendingOwnerMismatch,
    #[msg("Invalid fee collector")]
    InvalidFeeCollector,
}
