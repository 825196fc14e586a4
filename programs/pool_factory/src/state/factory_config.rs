use anchor_lang::prelude::*;

use crate::state::PoolParams;

#[account]
#[derive(InitSpace)]
pub struct FactoryConfig {
    pub owner: Pubkey,
    pub pending_owner: Option<Pubkey>,
    pub fee_collector: Pubkey,
    pub default_params: PoolParams,
    pub global_pause: bool,
    pub created_at: i64,
    pub last_updated_at: i64,
    pub bump: u8,
}
