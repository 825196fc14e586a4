use anchor_lang::prelude::*;

pub mod constants;
pub mod engine;
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

declare_id!("BzujVbAsx5NpX15TSsQswFHSK3vGDFRuUNZVvazFtamA");

#[program]
pub mod lending_pool {
    use super::*;

    pub fn create_pool(ctx: Context<CreatePool>, maturity: i64) -> Result<()> {
        instructions::create_pool::handler(ctx, maturity)
    }

    pub fn mint_liquidity(
        ctx: Context<MintLiquidity>,
        asset_in: u64,
        mode: MintParams,
        deadline: i64,
    ) -> Result<()> {
        instructions::mint_liquidity::handler(ctx, asset_in, mode, deadline)
    }

    pub fn burn_liquidity(
        ctx: Context<BurnLiquidity>,
        liquidity_in: u64,
        collateral_received: u64,
        minimums: BurnMinimums,
        deadline: i64,
    ) -> Result<()> {
        instructions::burn_liquidity::handler(
            ctx,
            liquidity_in,
            collateral_received,
            minimums,
            deadline,
        )
    }

    pub fn burn_matured_liquidity(
        ctx: Context<BurnMaturedLiquidity>,
        liquidity_in: u64,
        deadline: i64,
    ) -> Result<()> {
        instructions::burn_matured_liquidity::handler(ctx, liquidity_in, deadline)
    }

    pub fn lend(
        ctx: Context<Lend>,
        asset_in: u64,
        quote: LendQuote,
        minimums: LendMinimums,
        deadline: i64,
    ) -> Result<()> {
        instructions::lend::handler(ctx, asset_in, quote, minimums, deadline)
    }

    pub fn borrow(
        ctx: Context<Borrow>,
        asset_out: u64,
        quote: BorrowQuote,
        maximums: BorrowMaximums,
        deadline: i64,
    ) -> Result<()> {
        instructions::borrow::handler(ctx, asset_out, quote, maximums, deadline)
    }

    pub fn pay<'info>(
        ctx: Context<'_, '_, 'info, 'info, Pay<'info>>,
        payments: Vec<u64>,
        deadline: i64,
    ) -> Result<()> {
        instructions::pay::handler(ctx, payments, deadline)
    }
}
