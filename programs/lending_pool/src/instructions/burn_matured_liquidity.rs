use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{
    constants::{POOL_AUTH_SEED, POOL_SEED},
    engine::burn_matured,
    error::ErrorCode,
    events::MaturedLiquidityBurned,
    helpers::{burn_from, check_deadline, mint_claims, PoolAuthority},
    state::Pool,
};

/// Redeems liquidity for the pool's remaining claims. Allowed under global pause.
pub fn handler(ctx: Context<BurnMaturedLiquidity>, liquidity_in: u64, deadline: i64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    check_deadline(now, deadline)?;
    require!(
        ctx.accounts.sender_liquidity.amount >= liquidity_in,
        ErrorCode::InsufficientLiquidityBalance
    );

    let pool = &ctx.accounts.pool;
    let outcome = burn_matured(&pool.state, pool.maturity, now, liquidity_in)?;

    let token_program = &ctx.accounts.token_program;
    burn_from(
        token_program,
        &ctx.accounts.liquidity_mint,
        &ctx.accounts.sender_liquidity,
        &ctx.accounts.sender,
        liquidity_in,
    )?;

    let authority = PoolAuthority {
        pool: pool.key(),
        bump: pool.auth_bump,
        account: &ctx.accounts.pool_auth,
    };
    mint_claims(
        token_program,
        &ctx.accounts.bond_mint,
        &ctx.accounts.receiver_bond,
        &authority,
        outcome.bond_out,
    )?;
    mint_claims(
        token_program,
        &ctx.accounts.insurance_mint,
        &ctx.accounts.receiver_insurance,
        &authority,
        outcome.insurance_out,
    )?;

    let pool_key = ctx.accounts.pool.key();
    ctx.accounts.pool.state = outcome.state;

    emit!(MaturedLiquidityBurned {
        pool: pool_key,
        sender: ctx.accounts.sender.key(),
        receiver: ctx.accounts.receiver.key(),
        liquidity_in,
        bond_out: outcome.bond_out,
        insurance_out: outcome.insurance_out,
        state: outcome.state,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct BurnMaturedLiquidity<'info> {
    pub sender: Signer<'info>,
    /// CHECK: any wallet; token accounts below are pinned to it.
    pub receiver: UncheckedAccount<'info>,
    #[account(
        mut,
        seeds = [
            POOL_SEED,
            pool.asset_mint.as_ref(),
            pool.collateral_mint.as_ref(),
            &pool.maturity.to_le_bytes(),
        ],
        bump = pool.bump,
    )]
    pub pool: Box<Account<'info, Pool>>,
    /// CHECK: pool authority PDA.
    #[account(seeds = [POOL_AUTH_SEED, pool.key().as_ref()], bump = pool.auth_bump)]
    pub pool_auth: UncheckedAccount<'info>,
    #[account(mut, address = pool.liquidity_mint)]
    pub liquidity_mint: Box<Account<'info, Mint>>,
    #[account(mut, address = pool.bond_mint)]
    pub bond_mint: Box<Account<'info, Mint>>,
    #[account(mut, address = pool.insurance_mint)]
    pub insurance_mint: Box<Account<'info, Mint>>,
    #[account(
        mut,
        constraint = sender_liquidity.mint == pool.liquidity_mint @ ErrorCode::InvalidTokenAccount,
        constraint = sender_liquidity.owner == sender.key() @ ErrorCode::Unauthorized,
    )]
    pub sender_liquidity: Box<Account<'info, TokenAccount>>,
    #[account(
        mut,
        constraint = receiver_bond.mint == pool.bond_mint @ ErrorCode::InvalidTokenAccount,
        constraint = receiver_bond.owner == receiver.key() @ ErrorCode::InvalidTokenAccount,
    )]
    pub receiver_bond: Box<Account<'info, TokenAccount>>,
    #[account(
        mut,
        constraint = receiver_insurance.mint == pool.insurance_mint @ ErrorCode::InvalidTokenAccount,
        constraint = receiver_insurance.owner == receiver.key() @ ErrorCode::InvalidTokenAccount,
    )]
    pub receiver_insurance: Box<Account<'info, TokenAccount>>,
    pub token_program: Program<'info, Token>,
}
