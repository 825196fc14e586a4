use anchor_lang::prelude::*;

use crate::{events::OwnershipProposed, helpers::require_owner, state::FactoryConfig};

pub fn handler(ctx: Context<SetPendingOwner>, pending_owner: Pubkey) -> Result<()> {
    require_owner(&ctx.accounts.owner, &ctx.accounts.factory_config)?;

    let config = &mut ctx.accounts.factory_config;
    config.pending_owner = Some(pending_owner);
    config.last_updated_at = Clock::get()?.unix_timestamp;

    emit!(OwnershipProposed {
        owner: config.owner,
        pending_owner,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct SetPendingOwner<'info> {
    pub owner: Signer<'info>,
    #[account(
        mut,
        seeds = [b"factory-config"],
        bump = factory_config.bump,
    )]
    pub factory_config: Account<'info, FactoryConfig>,
}
