use anchor_lang::prelude::*;

use crate::{
    constants::{BASE, DEFAULT_PROTOCOL_FEE_BP, DEFAULT_TRANSACTION_FEE_BP, DEFAULT_YEAR_SECS},
    error::ErrorCode,
};

/// Pricing schedule of a single pool. Snapshotted into the pool at creation,
/// so later factory updates never reprice an existing market.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, InitSpace, PartialEq, Eq)]
pub struct PoolParams {
    /// Swap fee in basis points of `BASE`, retained by the pool on lend and borrow.
    pub transaction_fee_bp: u16,
    /// Share of newly minted liquidity skimmed to the fee collector.
    pub protocol_fee_bp: u16,
    /// Seconds per year used to annualise the rate reserve.
    pub year_secs: u64,
}

impl Default for PoolParams {
    fn default() -> Self {
        Self {
            transaction_fee_bp: DEFAULT_TRANSACTION_FEE_BP,
            protocol_fee_bp: DEFAULT_PROTOCOL_FEE_BP,
            year_secs: DEFAULT_YEAR_SECS,
        }
    }
}

impl PoolParams {
    pub fn validate(&self) -> Result<()> {
        require!(
            (self.transaction_fee_bp as u64) < BASE,
            ErrorCode::InvalidPoolParams
        );
        require!(
            (self.protocol_fee_bp as u64) < BASE,
            ErrorCode::InvalidPoolParams
        );
        require!(self.year_secs > 0, ErrorCode::InvalidPoolParams);
        Ok(())
    }
}
