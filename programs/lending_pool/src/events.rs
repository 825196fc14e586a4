use anchor_lang::prelude::*;

use crate::state::PoolState;

#[event]
pub struct PoolCreated {
    pub pool: Pubkey,
    pub asset_mint: Pubkey,
    pub collateral_mint: Pubkey,
    pub maturity: i64,
    pub transaction_fee_bp: u16,
    pub protocol_fee_bp: u16,
    pub year_secs: u64,
}

#[event]
pub struct LiquidityMinted {
    pub pool: Pubkey,
    pub sender: Pubkey,
    pub receiver: Pubkey,
    pub position_id: u64,
    pub asset_in: u64,
    pub collateral_paid: u64,
    pub collateral_locked: u64,
    pub debt: u64,
    pub liquidity_out: u64,
    pub liquidity_fee: u64,
    pub bond_out: u64,
    pub insurance_out: u64,
    pub state: PoolState,
}

#[event]
pub struct LiquidityBurned {
    pub pool: Pubkey,
    pub sender: Pubkey,
    pub receiver: Pubkey,
    pub position_id: u64,
    pub liquidity_in: u64,
    pub asset_out: u64,
    pub bond_out: u64,
    pub insurance_out: u64,
    pub debt: u64,
    pub collateral_locked: u64,
    pub state: PoolState,
}

#[event]
pub struct MaturedLiquidityBurned {
    pub pool: Pubkey,
    pub sender: Pubkey,
    pub receiver: Pubkey,
    pub liquidity_in: u64,
    pub bond_out: u64,
    pub insurance_out: u64,
    pub state: PoolState,
}

#[event]
pub struct Lent {
    pub pool: Pubkey,
    pub sender: Pubkey,
    pub receiver: Pubkey,
    pub asset_in: u64,
    pub bond_out: u64,
    pub insurance_out: u64,
    pub state: PoolState,
}

#[event]
pub struct Borrowed {
    pub pool: Pubkey,
    pub sender: Pubkey,
    pub receiver: Pubkey,
    pub position_id: u64,
    pub asset_out: u64,
    pub collateral_locked: u64,
    pub debt_required: u64,
    pub state: PoolState,
}

#[event]
pub struct DebtPaid {
    pub pool: Pubkey,
    pub payer: Pubkey,
    pub owner: Pubkey,
    pub position_ids: Vec<u64>,
    /// Positions repaid in full and closed.
    pub closed_position_ids: Vec<u64>,
    pub payments: Vec<u64>,
    pub asset_in: u64,
    pub collateral_released: u64,
    pub state: PoolState,
}
