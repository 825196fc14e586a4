use anchor_lang::prelude::*;

/// Collateralized debt owed to a pool at maturity.
#[account]
#[derive(InitSpace)]
pub struct DebtPosition {
    pub pool: Pubkey,
    pub id: u64,
    pub owner: Pubkey,
    pub debt: u64,
    pub collateral: u64,
    pub bump: u8,
}

