use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::{
    constants::{POOL_AUTH_SEED, POOL_SEED},
    engine::{self, PositionBalance},
    error::ErrorCode,
    events::DebtPaid,
    helpers::{check_deadline, transfer_in, transfer_out, PoolAuthority},
    state::{DebtPosition, Pool},
};

/// Repays debt positions passed as writable remaining accounts, in the same
/// order as `payments`. Fully repaid positions are closed and their rent goes
/// to the owner. Allowed under global pause.
pub fn handler<'info>(
    ctx: Context<'_, '_, 'info, 'info, Pay<'info>>,
    payments: Vec<u64>,
    deadline: i64,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    check_deadline(now, deadline)?;

    let pool_key = ctx.accounts.pool.key();
    let owner = ctx.accounts.receiver_collateral.owner;

    let mut positions = Vec::with_capacity(ctx.remaining_accounts.len());
    for info in ctx.remaining_accounts.iter() {
        require!(info.is_writable, ErrorCode::InvalidDebtPosition);
        require!(
            positions
                .iter()
                .all(|p: &Account<'info, DebtPosition>| p.key() != *info.key),
            ErrorCode::InvalidDebtPosition
        );
        let position = Account::<DebtPosition>::try_from(info)?;
        require_keys_eq!(position.pool, pool_key, ErrorCode::InvalidDebtPosition);
        require_keys_eq!(position.owner, owner, ErrorCode::Unauthorized);
        positions.push(position);
    }

    let balances: Vec<PositionBalance> = positions
        .iter()
        .map(|p| PositionBalance {
            debt: p.debt,
            collateral: p.collateral,
        })
        .collect();
    let pool = &ctx.accounts.pool;
    let outcome = engine::pay(&pool.state, pool.maturity, now, &balances, &payments)?;
    require!(
        ctx.accounts.payer_asset.amount >= outcome.asset_in,
        ErrorCode::InsufficientAsset
    );

    let token_program = &ctx.accounts.token_program;
    transfer_in(
        token_program,
        &ctx.accounts.payer_asset,
        &ctx.accounts.asset_vault,
        &ctx.accounts.payer,
        outcome.asset_in,
    )?;

    let authority = PoolAuthority {
        pool: pool_key,
        bump: pool.auth_bump,
        account: &ctx.accounts.pool_auth,
    };
    transfer_out(
        token_program,
        &ctx.accounts.collateral_vault,
        &ctx.accounts.receiver_collateral,
        &authority,
        outcome.collateral_released,
    )?;

    let mut position_ids = Vec::with_capacity(positions.len());
    let mut closed_position_ids = Vec::new();
    for (position, balance) in positions.iter_mut().zip(outcome.positions.iter()) {
        position.debt = balance.debt;
        position.collateral = balance.collateral;
        position_ids.push(position.id);
        if balance.is_settled() {
            position.close(ctx.accounts.owner.to_account_info())?;
            closed_position_ids.push(position.id);
        } else {
            position.exit(&crate::ID)?;
        }
    }
    ctx.accounts.pool.state = outcome.state;

    emit!(DebtPaid {
        pool: pool_key,
        payer: ctx.accounts.payer.key(),
        owner,
        position_ids,
        closed_position_ids,
        payments,
        asset_in: outcome.asset_in,
        collateral_released: outcome.collateral_released,
        state: outcome.state,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Pay<'info> {
    pub payer: Signer<'info>,
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
        constraint = payer_asset.mint == pool.asset_mint @ ErrorCode::InvalidTokenAccount,
        constraint = payer_asset.owner == payer.key() @ ErrorCode::Unauthorized,
    )]
    pub payer_asset: Box<Account<'info, TokenAccount>>,
    /// Owned by the owner of every repaid position.
    #[account(
        mut,
        constraint = receiver_collateral.mint == pool.collateral_mint @ ErrorCode::InvalidTokenAccount,
    )]
    pub receiver_collateral: Box<Account<'info, TokenAccount>>,
    /// CHECK: owner of the repaid positions, refunded the rent of settled ones.
    #[account(mut, address = receiver_collateral.owner @ ErrorCode::Unauthorized)]
    pub owner: UncheckedAccount<'info>,
    pub token_program: Program<'info, Token>,
}
