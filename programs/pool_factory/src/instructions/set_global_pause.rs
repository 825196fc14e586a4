use anchor_lang::prelude::*;

use crate::{events::GlobalPauseSet, helpers::require_owner, state::FactoryConfig};

pub fn handler(ctx: Context<SetGlobalPause>, paused: bool) -> Result<()> {
    require_owner(&ctx.accounts.owner, &ctx.accounts.factory_config)?;

    ctx.accounts.factory_config.global_pause = paused;
    ctx.accounts.factory_config.last_updated_at = Clock::get()?.unix_timestamp;

    emit!(GlobalPauseSet {
        owner: ctx.accounts.owner.key(),
        paused,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct SetGlobalPause<'info> {
    pub owner: Signer<'info>,
    #[account(
        mut,
        seeds = [b"factory-config"],
        bump = factory_config.bump,
    )]
    pub factory_config: Account<'info, FactoryConfig>,
}
