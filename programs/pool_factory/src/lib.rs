use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod helpers;
pub mod instructions;
pub mod state;

pub use constants::*;
pub use error::*;
pub use events::*;
pub use instructions::*;
pub use state::*;

declare_id!("Dqs2wEkWi4ESHDcpfCsqXSMgjtX2ub4v9Gz13NQApvtG");

#[program]
pub mod pool_factory {
    use super::*;

    pub fn initialize_factory(
        ctx: Context<InitializeFactory>,
        owner: Pubkey,
        fee_collector: Pubkey,
        default_params: PoolParams,
    ) -> Result<()> {
        instructions::initialize_factory::handler(ctx, owner, fee_collector, default_params)
    }

    pub fn update_pool_params(ctx: Context<UpdatePoolParams>, params: PoolParams) -> Result<()> {
        instructions::update_pool_params::handler(ctx, params)
    }

    pub fn set_fee_collector(ctx: Context<SetFeeCollector>, fee_collector: Pubkey) -> Result<()> {
        instructions::set_fee_collector::handler(ctx, fee_collector)
    }

    pub fn set_pending_owner(ctx: Context<SetPendingOwner>, pending_owner: Pubkey) -> Result<()> {
        instructions::set_pending_owner::handler(ctx, pending_owner)
    }

    pub fn accept_owner(ctx: Context<AcceptOwner>) -> Result<()> {
        instructions::accept_owner::handler(ctx)
    }

    pub fn set_global_pause(ctx: Context<SetGlobalPause>, paused: bool) -> Result<()> {
        instructions::set_global_pause::handler(ctx, paused)
    }
}
