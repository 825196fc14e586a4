use anchor_lang::prelude::*;

use crate::{
    events::FeeCollectorUpdated,
    helpers::{require_fee_collector, require_owner},
    state::FactoryConfig,
};

pub fn handler(ctx: Context<SetFeeCollector>, fee_collector: Pubkey) -> Result<()> {
    require_owner(&ctx.accounts.owner, &ctx.accounts.factory_config)?;
    require_fee_collector(fee_collector)?;

    let config = &mut ctx.accounts.factory_config;
    let previous = config.fee_collector;
    config.fee_collector = fee_collector;
    config.last_updated_at = Clock::get()?.unix_timestamp;

    emit!(FeeCollectorUpdated {
        previous,
        fee_collector,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct SetFeeCollector<'info> {
    pub owner: Signer<'info>,
    #[account(
        mut,
        seeds = [b"factory-config"],
        bump = factory_config.bump,
    )]
    pub factory_config: Account<'info, FactoryConfig>,
}
