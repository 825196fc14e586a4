use anchor_lang::prelude::*;

use crate::{
    events::FactoryInitialized,
    helpers::require_fee_collector,
    state::{FactoryConfig, PoolParams},
};

pub fn handler(
    ctx: Context<InitializeFactory>,
    owner: Pubkey,
    fee_collector: Pubkey,
    default_params: PoolParams,
) -> Result<()> {
    default_params.validate()?;
    require_fee_collector(fee_collector)?;
    let now = Clock::get()?.unix_timestamp;

    let config = &mut ctx.accounts.factory_config;
    config.owner = owner;
    config.pending_owner = None;
    config.fee_collector = fee_collector;
    config.default_params = default_params;
    config.global_pause = false;
    config.created_at = now;
    config.last_updated_at = now;
    config.bump = ctx.bumps.factory_config;

    emit!(FactoryInitialized {
        owner,
        fee_collector,
        default_params,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeFactory<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,
    #[account(
        init,
        payer = payer,
        seeds = [b"factory-config"],
        bump,
        space = 8 + FactoryConfig::INIT_SPACE,
    )]
    pub factory_config: Account<'info, FactoryConfig>,
    pub system_program: Program<'info, System>,
}
