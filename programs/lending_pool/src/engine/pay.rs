use anchor_lang::prelude::*;

use crate::{
    engine::time_to_maturity,
    error::ErrorCode,
    helpers::math::{checked_add_u64, checked_sub_u64, mul_div_down, to_u64, wide},
    state::PoolState,
};

/// Debt and collateral of a position before or after a payment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PositionBalance {
    pub debt: u64,
    pub collateral: u64,
}

impl PositionBalance {
    /// Nothing left to repay; the position can be closed.
    pub fn is_settled(&self) -> bool {
        self.debt == 0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settlement {
    pub collateral_released: u64,
    pub position: PositionBalance,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PayOutcome {
    pub asset_in: u64,
    pub collateral_released: u64,
    /// Post-payment balances, in the order the positions were given.
    pub positions: Vec<PositionBalance>,
    pub state: PoolState,
}

/// Applies one payment, releasing collateral in proportion to the debt repaid.
pub fn settle_payment(position: PositionBalance, payment: u64) -> Result<Settlement> {
    require!(payment > 0, ErrorCode::InvalidAmount);
    require!(payment <= position.debt, ErrorCode::Overpayment);

    let collateral_released = to_u64(mul_div_down(
        wide(payment),
        wide(position.collateral),
        wide(position.debt),
    )?)?;

    Ok(Settlement {
        collateral_released,
        position: PositionBalance {
            debt: position.debt - payment,
            collateral: checked_sub_u64(position.collateral, collateral_released)?,
        },
    })
}

pub fn pay(
    state: &PoolState,
    maturity: i64,
    now: i64,
    positions: &[PositionBalance],
    payments: &[u64],
) -> Result<PayOutcome> {
    time_to_maturity(maturity, now)?;
    require!(
        positions.len() == payments.len(),
        ErrorCode::LengthMismatch
    );
    require!(!payments.is_empty(), ErrorCode::EmptyBatch);

    let mut asset_in = 0u64;
    let mut collateral_released = 0u64;
    let mut settled = Vec::with_capacity(positions.len());
    for (position, payment) in positions.iter().zip(payments) {
        let settlement = settle_payment(*position, *payment)?;
        asset_in = checked_add_u64(asset_in, *payment)?;
        collateral_released = checked_add_u64(collateral_released, settlement.collateral_released)?;
        settled.push(settlement.position);
    }

    let mut next = *state;
    next.asset_reserve = checked_add_u64(next.asset_reserve, asset_in)?;
    next.collateral_reserve = checked_sub_u64(next.collateral_reserve, collateral_released)
        .map_err(|_| error!(ErrorCode::InsufficientReserves))?;

    Ok(PayOutcome {
        asset_in,
        collateral_released,
        positions: settled,
        state: next,
    })
}
