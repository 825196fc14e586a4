use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use pool_factory::FactoryConfig;

use crate::{
    constants::{
        ASSET_VAULT_SEED, BOND_MINT_SEED, COLLATERAL_VAULT_SEED, INSURANCE_MINT_SEED,
        LIQUIDITY_MINT_SEED, POOL_AUTH_SEED, POOL_SEED,
    },
    error::ErrorCode,
    events::PoolCreated,
    helpers::require_not_paused,
    state::{Pool, PoolState},
};

pub fn handler(ctx: Context<CreatePool>, maturity: i64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    require!(maturity > now, ErrorCode::InvalidMaturity);
    require_keys_neq!(
        ctx.accounts.asset_mint.key(),
        ctx.accounts.collateral_mint.key(),
        ErrorCode::InvalidTokenAccount
    );

    let factory = &ctx.accounts.factory_config;
    require_not_paused(factory)?;
    factory
        .default_params
        .validate()
        .map_err(|_| error!(ErrorCode::InvalidPoolParams))?;

    let pool = &mut ctx.accounts.pool;
    pool.asset_mint = ctx.accounts.asset_mint.key();
    pool.collateral_mint = ctx.accounts.collateral_mint.key();
    pool.maturity = maturity;
    pool.fee_collector = factory.fee_collector;
    pool.params = factory.default_params;
    pool.asset_vault = ctx.accounts.asset_vault.key();
    pool.collateral_vault = ctx.accounts.collateral_vault.key();
    pool.liquidity_mint = ctx.accounts.liquidity_mint.key();
    pool.bond_mint = ctx.accounts.bond_mint.key();
    pool.insurance_mint = ctx.accounts.insurance_mint.key();
    pool.state = PoolState::default();
    pool.next_position_id = 0;
    pool.created_at = now;
    pool.auth_bump = ctx.bumps.pool_auth;
    pool.bump = ctx.bumps.pool;

    emit!(PoolCreated {
        pool: pool.key(),
        asset_mint: pool.asset_mint,
        collateral_mint: pool.collateral_mint,
        maturity,
        transaction_fee_bp: pool.params.transaction_fee_bp,
        protocol_fee_bp: pool.params.protocol_fee_bp,
        year_secs: pool.params.year_secs,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(maturity: i64)]
pub struct CreatePool<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,
    #[account(
        seeds = [b"factory-config"],
        seeds::program = pool_factory::ID,
        bump = factory_config.bump,
    )]
    pub factory_config: Box<Account<'info, FactoryConfig>>,
    pub asset_mint: Box<Account<'info, Mint>>,
    pub collateral_mint: Box<Account<'info, Mint>>,
    #[account(
        init,
        payer = creator,
        seeds = [
            POOL_SEED,
            asset_mint.key().as_ref(),
            collateral_mint.key().as_ref(),
            &maturity.to_le_bytes(),
        ],
        bump,
        space = 8 + Pool::INIT_SPACE,
    )]
    pub pool: Box<Account<'info, Pool>>,
    /// CHECK: PDA authority over the pool vaults and claim mints.
    #[account(seeds = [POOL_AUTH_SEED, pool.key().as_ref()], bump)]
    pub pool_auth: UncheckedAccount<'info>,
    #[account(
        init,
        payer = creator,
        seeds = [ASSET_VAULT_SEED, pool.key().as_ref()],
        bump,
        token::mint = asset_mint,
        token::authority = pool_auth,
    )]
    pub asset_vault: Box<Account<'info, TokenAccount>>,
    #[account(
        init,
        payer = creator,
        seeds = [COLLATERAL_VAULT_SEED, pool.key().as_ref()],
        bump,
        token::mint = collateral_mint,
        token::authority = pool_auth,
    )]
    pub collateral_vault: Box<Account<'info, TokenAccount>>,
    #[account(
        init,
        payer = creator,
        seeds = [LIQUIDITY_MINT_SEED, pool.key().as_ref()],
        bump,
        mint::decimals = asset_mint.decimals,
        mint::authority = pool_auth,
    )]
    pub liquidity_mint: Box<Account<'info, Mint>>,
    #[account(
        init,
        payer = creator,
        seeds = [BOND_MINT_SEED, pool.key().as_ref()],
        bump,
        mint::decimals = asset_mint.decimals,
        mint::authority = pool_auth,
    )]
    pub bond_mint: Box<Account<'info, Mint>>,
    #[account(
        init,
        payer = creator,
        seeds = [INSURANCE_MINT_SEED, pool.key().as_ref()],
        bump,
        mint::decimals = collateral_mint.decimals,
        mint::authority = pool_auth,
    )]
    pub insurance_mint: Box<Account<'info, Mint>>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}
