use anchor_lang::prelude::*;

use crate::{error::ErrorCode, events::OwnershipAccepted, state::FactoryConfig};

pub fn handler(ctx: Context<AcceptOwner>) -> Result<()> {
    let config = &mut ctx.accounts.factory_config;
    let pending_owner = config
        .pending_owner
        .ok_or_else(|| error!(ErrorCode::NoPendingOwner))?;
    require_keys_eq!(
        pending_owner,
        ctx.accounts.pending_owner.key(),
        ErrorCode::PendingOwnerMismatch
    );

    let previous = config.owner;
    config.owner = pending_owner;
    config.pending_owner = None;
    config.last_updated_at = Clock::get()?.unix_timestamp;

    emit!(OwnershipAccepted {
        previous,
        owner: pending_owner,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct AcceptOwner<'info> {
    pub pending_owner: Signer<'info>,
    #[account(
        mut,
        seeds = [b"factory-config"],
        bump = factory_config.bump,
    )]
    pub factory_config: Account<'info, FactoryConfig>,
}
