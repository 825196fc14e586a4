use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use pool_factory::FactoryConfig;

use crate::{
    constants::{POOL_AUTH_SEED, POOL_SEED},
    engine,
    error::ErrorCode,
    events::Lent,
    helpers::{
        check_deadline, check_lend_minimums, mint_claims, require_not_paused, transfer_in,
        PoolAuthority,
    },
    state::{LendMinimums, LendQuote, Pool},
};

pub fn handler(
    ctx: Context<Lend>,
    asset_in: u64,
    quote: LendQuote,
    minimums: LendMinimums,
    deadline: i64,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    check_deadline(now, deadline)?;
    require_not_paused(&ctx.accounts.factory_config)?;

    let pool = &ctx.accounts.pool;
    let outcome = engine::lend(
        &pool.state,
        &pool.params,
        pool.maturity,
        now,
        asset_in,
        quote,
    )?;
    check_lend_minimums(&minimums, &outcome)?;
    require!(
        ctx.accounts.sender_asset.amount >= asset_in,
        ErrorCode::InsufficientAsset
    );

    let token_program = &ctx.accounts.token_program;
    transfer_in(
        token_program,
        &ctx.accounts.sender_asset,
        &ctx.accounts.asset_vault,
        &ctx.accounts.sender,
        asset_in,
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

    emit!(Lent {
        pool: pool_key,
        sender: ctx.accounts.sender.key(),
        receiver: ctx.accounts.receiver.key(),
        asset_in,
        bond_out: outcome.bond_out,
        insurance_out: outcome.insurance_out,
        state: outcome.state,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Lend<'info> {
    pub sender: Signer<'info>,
    /// CHECK: any wallet; token accounts below are pinned to it.
    pub receiver: UncheckedAccount<'info>,
    #[account(
        seeds = [b"factory-config"],
        seeds::program = pool_factory::ID,
        bump = factory_config.bump,
    )]
    pub factory_config: Box<Account<'info, FactoryConfig>>,
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
    #[account(mut, address = pool.asset_vault)]
    pub asset_vault: Box<Account<'info, TokenAccount>>,
    #[account(mut, address = pool.bond_mint)]
    pub bond_mint: Box<Account<'info, Mint>>,
    #[account(mut, address = pool.insurance_mint)]
    pub insurance_mint: Box<Account<'info, Mint>>,
    #[account(
        mut,
        constraint = sender_asset.mint == pool.asset_mint @ ErrorCode::InvalidTokenAccount,
        constraint = sender_asset.owner == sender.key() @ ErrorCode::Unauthorized,
    )]
    pub sender_asset: Box<Account<'info, TokenAccount>>,
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
