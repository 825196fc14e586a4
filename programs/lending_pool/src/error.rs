use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Invalid token account")]
    InvalidTokenAccount,
    #[msg("Invalid debt position")]
    InvalidDebtPosition,
    #[msg("Invalid amount")]
    InvalidAmount,
    #[msg("Payment and position counts differ")]
    LengthMismatch,
    #[msg("Empty batch")]
    EmptyBatch,
    #[msg("Liquidity exceeds supply")]
    LiquidityExceedsSupply,
    #[msg("Insufficient liquidity balance")]
    InsufficientLiquidityBalance,
    #[msg("Initial liquidity too small")]
    InsufficientInitialLiquidity,
    #[msg("Collateral below minimum for this borrow")]
    CollateralBelowMinimum,
    #[msg("Invalid pool params")]
    InvalidPoolParams,
    #[msg("Invalid maturity")]
    InvalidMaturity,
    #[msg("Pool already initialized")]
    AlreadyInitialized,
    #[msg("Pool not initialized")]
    NotInitialized,
    #[msg("Pool has matured")]
    PoolMatured,
    #[msg("Pool has not matured")]
    PoolNotMatured,
    #[msg("Global pause is enabled")]
    GlobalPaused,
    #[msg("Debt above maximum")]
    DebtAboveMax,
    #[msg("Collateral paid above maximum")]
    CollateralPaidAboveMax,
    #[msg("Collateral locked above maximum")]
    CollateralLockedAboveMax,
    #[msg("Interest above maximum")]
    InterestAboveMax,
    #[msg("Asset below minimum")]
    AssetBelowMin,
    #[msg("Bond below minimum")]
    BondBelowMin,
    #[msg("Insurance below minimum")]
    InsuranceBelowMin,
    #[msg("Deadline expired")]
    DeadlineExpired,
    #[msg("Insufficient collateral")]
    InsufficientCollateral,
    #[msg("Asset in too small for requested claims")]
    InsufficientAsset,
    #[msg("Insufficient pool reserves")]
    InsufficientReserves,
    #[msg("Payment exceeds debt")]
    Overpayment,
    #[msg("Math overflow")]
    MathOverflow,
}

/// Coarse classification callers use to decide between widening bounds,
/// resubmitting later, or giving up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Input,
    State,
    Slippage,
    Deadline,
    Resource,
    Overflow,
}

impl ErrorCode {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ErrorCode::Unauthorized
            | ErrorCode::InvalidTokenAccount
            | ErrorCode::InvalidDebtPosition
            | ErrorCode::InvalidAmount
            | ErrorCode::LengthMismatch
            | ErrorCode::EmptyBatch
            | ErrorCode::LiquidityExceedsSupply
            | ErrorCode::InsufficientLiquidityBalance
            | ErrorCode::InsufficientInitialLiquidity
            | ErrorCode::CollateralBelowMinimum
            | ErrorCode::InvalidPoolParams
            | ErrorCode::InvalidMaturity => ErrorKind::Input,
            ErrorCode::AlreadyInitialized
            | ErrorCode::NotInitialized
            | ErrorCode::PoolMatured
            | ErrorCode::PoolNotMatured
            | ErrorCode::GlobalPaused => ErrorKind::State,
            ErrorCode::DebtAboveMax
            | ErrorCode::CollateralPaidAboveMax
            | ErrorCode::CollateralLockedAboveMax
            | ErrorCode::InterestAboveMax
            | ErrorCode::AssetBelowMin
            | ErrorCode::BondBelowMin
            | ErrorCode::InsuranceBelowMin => ErrorKind::Slippage,
            ErrorCode::DeadlineExpired => ErrorKind::Deadline,
            ErrorCode::InsufficientCollateral
            | ErrorCode::InsufficientAsset
            | ErrorCode::InsufficientReserves
            | ErrorCode::Overpayment => ErrorKind::Resource,
            ErrorCode::MathOverflow => ErrorKind::Overflow,
        }
    }
}

#[cfg(test)]
pub(crate) fn error_code_of(err: &anchor_lang::error::Error) -> Option<u32> {
    match err {
        anchor_lang::error::Error::AnchorError(e) => Some(e.error_code_number),
        anchor_lang::error::Error::ProgramError(_) => None,
    }
}

#[cfg(test)]
pub(crate) fn assert_error<T: std::fmt::Debug>(result: Result<T>, expected: ErrorCode) {
    let err = result.expect_err("operation should fail");
    assert_eq!(
        error_code_of(&err),
        Some(u32::from(expected)),
        "unexpected error {err:?}"
    );
}
