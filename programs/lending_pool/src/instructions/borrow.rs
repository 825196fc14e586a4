use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use pool_factory::FactoryConfig;

use crate::{
    constants::{DEBT_SEED, POOL_AUTH_SEED, POOL_SEED},
    engine,
    error::ErrorCode,
    events::Borrowed,
    helpers::{
        check_borrow_maximums, check_deadline, require_not_paused, transfer_in, transfer_out,
        PoolAuthority,
    },
    state::{BorrowMaximums, BorrowQuote, DebtPosition, Pool},
};

pub fn handler(
    ctx: Context<Borrow>,
    asset_out: u64,
    quote: BorrowQuote,
    maximums: BorrowMaximums,
    deadline: i64,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    check_deadline(now, deadline)?;
    require_not_paused(&ctx.accounts.factory_config)?;

    let pool = &ctx.accounts.pool;
    let outcome = engine::borrow(
        &pool.state,
        &pool.params,
        pool.maturity,
        now,
        asset_out,
        quote,
    )?;
    check_borrow_maximums(&maximums, &outcome)?;
    require!(
        ctx.accounts.sender_collateral.amount >= outcome.collateral_locked,
        ErrorCode::InsufficientCollateral
    );

    let token_program = &ctx.accounts.token_program;
    transfer_in(
        token_program,
        &ctx.accounts.sender_collateral,
        &ctx.accounts.collateral_vault,
        &ctx.accounts.sender,
        outcome.collateral_locked,
    )?;

    let authority = PoolAuthority {
        pool: pool.key(),
        bump: pool.auth_bump,
        account: &ctx.accounts.pool_auth,
    };
    transfer_out(
        token_program,
        &ctx.accounts.asset_vault,
        &ctx.accounts.receiver_asset,
        &authority,
        asset_out,
    )?;

    let pool_key = ctx.accounts.pool.key();
    let pool = &mut ctx.accounts.pool;
    let position_id = pool.take_position_id()?;
    pool.state = outcome.state;

    let position = &mut ctx.accounts.debt_position;
    position.pool = pool_key;
    position.id = position_id;
    position.owner = ctx.accounts.receiver.key();
    position.debt = outcome.debt_required;
    position.collateral = outcome.collateral_locked;
    position.bump = ctx.bumps.debt_position;

    emit!(Borrowed {
        pool: pool_key,
        sender: ctx.accounts.sender.key(),
        receiver: ctx.accounts.receiver.key(),
        position_id,
        asset_out,
        collateral_locked: outcome.collateral_locked,
        debt_required: outcome.debt_required,
        state: outcome.state,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Borrow<'info> {
    #[account(mut)]
    pub sender: Signer<'info>,
    /// CHECK: any wallet; receives the asset and owns the debt position.
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
    #[account(
        mut,
        constraint = sender_collateral.mint == pool.collateral_mint @ ErrorCode::InvalidTokenAccount,
        constraint = sender_collateral.owner == sender.key() @ ErrorCode::Unauthorized,
    )]
    pub sender_collateral: Box<Account<'info, TokenAccount>>,
    #[account(
        mut,
        constraint = receiver_asset.mint == pool.asset_mint @ ErrorCode::InvalidTokenAccount,
        constraint = receiver_asset.owner == receiver.key() @ ErrorCode::InvalidTokenAccount,
    )]
    pub receiver_asset: Box<Account<'info, TokenAccount>>,
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
