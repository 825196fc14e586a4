use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use pool_factory::FactoryConfig;

use crate::{
    constants::{DEBT_SEED, POOL_AUTH_SEED, POOL_SEED},
    engine::mint,
    error::ErrorCode,
    events::LiquidityMinted,
    helpers::{
        check_deadline, check_mint_bounds, math::checked_add_u64, mint_claims,
        require_not_paused, transfer_in, PoolAuthority,
    },
    state::{DebtPosition, MintParams, Pool},
};

pub fn handler(
    ctx: Context<MintLiquidity>,
    asset_in: u64,
    mode: MintParams,
    deadline: i64,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    check_deadline(now, deadline)?;
    require_not_paused(&ctx.accounts.factory_config)?;

    let pool = &ctx.accounts.pool;
    let outcome = mint(
        &pool.state,
        &pool.params,
        pool.maturity,
        now,
        asset_in,
        mode,
    )?;
    check_mint_bounds(&mode, &outcome)?;

    let collateral_in = checked_add_u64(outcome.collateral_paid, outcome.collateral_locked)?;
    require!(
        ctx.accounts.sender_asset.amount >= asset_in,
        ErrorCode::InsufficientAsset
    );
    require!(
        ctx.accounts.sender_collateral.amount >= collateral_in,
        ErrorCode::InsufficientCollateral
    );

    let token_program = &ctx.accounts.token_program;
    transfer_in(
        token_program,
        &ctx.accounts.sender_asset,
        &ctx.accounts.asset_vault,
        &ctx.accounts.sender,
        asset_in,
    )?;
    transfer_in(
        token_program,
        &ctx.accounts.sender_collateral,
        &ctx.accounts.collateral_vault,
        &ctx.accounts.sender,
        collateral_in,
    )?;

    let authority = PoolAuthority {
        pool: pool.key(),
        bump: pool.auth_bump,
        account: &ctx.accounts.pool_auth,
    };
    mint_claims(
        token_program,
        &ctx.accounts.liquidity_mint,
        &ctx.accounts.receiver_liquidity,
        &authority,
        outcome.liquidity_to_receiver,
    )?;
    mint_claims(
        token_program,
        &ctx.accounts.liquidity_mint,
        &ctx.accounts.fee_collector_liquidity,
        &authority,
        outcome.liquidity_to_fee_collector,
    )?;
    mint_claims(
        token_program,
        &ctx.accounts.bond_mint,
        &ctx.accounts.receiver_bond,
        &authority,
        outcome.bond_to_receiver,
    )?;
    mint_claims(
        token_program,
        &ctx.accounts.insurance_mint,
        &ctx.accounts.receiver_insurance,
        &authority,
        outcome.insurance_to_receiver,
    )?;

    let pool_key = ctx.accounts.pool.key();
    let pool = &mut ctx.accounts.pool;
    let position_id = pool.take_position_id()?;
    pool.state = outcome.state;

    let position = &mut ctx.accounts.debt_position;
    position.pool = pool_key;
    position.id = position_id;
    position.owner = ctx.accounts.receiver.key();
    position.debt = outcome.debt;
    position.collateral = outcome.collateral_locked;
    position.bump = ctx.bumps.debt_position;

    emit!(LiquidityMinted {
        pool: pool_key,
        sender: ctx.accounts.sender.key(),
        receiver: ctx.accounts.receiver.key(),
        position_id,
        asset_in,
        collateral_paid: outcome.collateral_paid,
        collateral_locked: outcome.collateral_locked,
        debt: outcome.debt,
        liquidity_out: outcome.liquidity_to_receiver,
        liquidity_fee: outcome.liquidity_to_fee_collector,
        bond_out: outcome.bond_to_receiver,
        insurance_out: outcome.insurance_to_receiver,
        state: outcome.state,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct MintLiquidity<'info> {
    #[account(mut)]
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
    #[account(mut, address = pool.collateral_vault)]
    pub collateral_vault: Box<Account<'info, TokenAccount>>,
    #[account(mut, address = pool.liquidity_mint)]
    pub liquidity_mint: Box<Account<'info, Mint>>,
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
        constraint = sender_collateral.mint == pool.collateral_mint @ ErrorCode::InvalidTokenAccount,
        constraint = sender_collateral.owner == sender.key() @ ErrorCode::Unauthorized,
    )]
    pub sender_collateral: Box<Account<'info, TokenAccount>>,
    #[account(
        mut,
        constraint = receiver_liquidity.mint == pool.liquidity_mint @ ErrorCode::InvalidTokenAccount,
        constraint = receiver_liquidity.owner == receiver.key() @ ErrorCode::InvalidTokenAccount,
    )]
    pub receiver_liquidity: Box<Account<'info, TokenAccount>>,
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
    #[account(
        mut,
        constraint = fee_collector_liquidity.mint == pool.liquidity_mint @ ErrorCode::InvalidTokenAccount,
        constraint = fee_collector_liquidity.owner == pool.fee_collector @ ErrorCode::InvalidTokenAccount,
    )]
    pub fee_collector_liquidity: Box<Account<'info, TokenAccount>>,
    #[account(
        init,
        payer = sender,
        seeds = [DEBT_SEED, pool.key().as_ref(), &pool.next_position_id.to_le_bytes()],
        bump,
        space = 8 + DebtPosition::INIT_SPACE,
    )]
    pub debt_position: Box<Account<'info, DebtPosition>>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}
