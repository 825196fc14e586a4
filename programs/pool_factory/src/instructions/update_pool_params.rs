use anchor_lang::prelude::*;

use crate::{
    events::PoolParamsUpdated,
    helpers::require_owner,
    state::{FactoryConfig, PoolParams},
};

pub fn handler(ctx: Context<UpdatePoolParams>, params: PoolParams) -> Result<()> {
    require_owner(&ctx.accounts.owner, &ctx.accounts.factory_config)?;
    params.validate()?;

    let config = &mut ctx.accounts.factory_config;
    config.default_params = params;
    config.last_updated_at = Clock::get()?.unix_timestamp;

    emit!(PoolParamsUpdated {
        owner: config.owner,
        params,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct UpdatePoolParams<'info> {
    pub owner: Signer<'info>,
    #[account(
        mut,
        seeds = [b"factory-config"],
        bump = factory_config.bump,
    )]
    pub factory_config: Account<'info, FactoryConfig>,
}
