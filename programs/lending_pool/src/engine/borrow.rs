use anchor_lang::prelude::*;
use pool_factory::PoolParams;

use crate::{
    constants::BASE,
    engine::time_to_maturity,
    error::ErrorCode,
    helpers::math::{
        add, checked_add_u64, checked_sub_u64, div_down, div_up, mul, mul_div_down, mul_div_up,
        sub, to_u128, to_u64, wide, U256,
    },
    state::{BorrowQuote, PoolState},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BorrowOutcome {
    pub collateral_locked: u64,
    pub interest_required: u64,
    /// `asset_out + interest_required`, owed at maturity.
    pub debt_required: u64,
    pub bond_increase: u64,
    pub rate_increase: u128,
    pub insurance_increase: u64,
    pub state: PoolState,
}

/// Floor and ceiling of `amount * reserve / remaining`.
fn max_pair(amount: U256, reserve: U256, remaining: U256) -> Result<(U256, U256)> {
    Ok((
        mul_div_down(amount, reserve, remaining)?,
        mul_div_up(amount, reserve, remaining)?,
    ))
}

/// `ceil(max_up * increase / (max - increase))`, zero for a zero increase.
fn hyperbolic_up(max: U256, max_up: U256, increase: U256) -> Result<U256> {
    if increase.is_zero() {
        return Ok(U256::zero());
    }
    require!(increase < max, ErrorCode::InsufficientReserves);
    div_up(mul(max_up, increase)?, sub(max, increase)?)
}

/// Largest `increase` with `hyperbolic_up(max, max_up, increase) <= budget`.
fn hyperbolic_inverse(max: U256, max_up: U256, budget: U256) -> Result<U256> {
    if budget.is_zero() {
        return Ok(U256::zero());
    }
    mul_div_down(budget, max, add(max_up, budget)?)
}

/// Collateral in, asset out, plus a fixed debt due at maturity. Capacity is
/// added at `BASE - fee`, so the borrower pays for more than the pool credits.
pub fn borrow(
    state: &PoolState,
    params: &PoolParams,
    maturity: i64,
    now: i64,
    asset_out: u64,
    quote: BorrowQuote,
) -> Result<BorrowOutcome> {
    let tau = wide(time_to_maturity(maturity, now)?);
    require!(asset_out > 0, ErrorCode::InvalidAmount);
    require!(state.is_initialized(), ErrorCode::NotInitialized);
    require!(
        asset_out < state.asset_reserve,
        ErrorCode::InsufficientReserves
    );

    let year = wide(params.year_secs);
    let base = wide(BASE);
    let base_minus_fee = wide(checked_sub_u64(BASE, params.transaction_fee_bp as u64)?);
    let invariant = state.invariant()?;

    let asset = wide(state.asset_reserve);
    let bond = wide(state.bond_reserve);
    let rate = wide(state.rate_reserve);
    let received = wide(asset_out);
    let asset_after = wide(state.asset_reserve - asset_out);
    // I / (asset - asset_out), rounded against the borrower.
    let target = div_up(invariant, asset_after)?;

    let (bond_max, bond_max_up) = max_pair(received, bond, asset_after)?;
    let (rate_max, rate_max_up) = max_pair(received, rate, asset_after)?;

    let (bond_increase, rate_increase) = match quote {
        BorrowQuote::ExactCollateralLocked(collateral) => {
            let extra = sub(add(wide(collateral), U256::one())?, bond_max_up)
                .map_err(|_| error!(ErrorCode::CollateralBelowMinimum))?;
            let budget = mul_div_down(div_down(mul(extra, year)?, tau)?, asset, rate)?;
            let bond_increase = hyperbolic_inverse(bond_max, bond_max_up, budget)?;

            let bond_adj = div_down(
                add(mul(bond, base)?, mul(bond_increase, base_minus_fee)?)?,
                base,
            )?;
            let rate_adj = div_up(target, bond_adj)?;
            let rate_increase = if rate_adj > rate {
                div_up(mul(sub(rate_adj, rate)?, base)?, base_minus_fee)?
            } else {
                U256::zero()
            };
            (bond_increase, rate_increase)
        }
        BorrowQuote::ExactInterestRequired(interest) => {
            let budget = div_down(mul(wide(interest), year)?, tau)?;
            let rate_increase = hyperbolic_inverse(rate_max, rate_max_up, budget)?;

            let rate_adj = div_down(
                add(mul(rate, base)?, mul(rate_increase, base_minus_fee)?)?,
                base,
            )?;
            require!(!rate_adj.is_zero(), ErrorCode::InsufficientReserves);
            let bond_adj = div_up(target, rate_adj)?;
            let bond_increase = if bond_adj > bond {
                div_up(mul(sub(bond_adj, bond)?, base)?, base_minus_fee)?
            } else {
                U256::zero()
            };
            (bond_increase, rate_increase)
        }
    };

    let collateral_premium = div_up(
        mul(
            mul_div_up(
                hyperbolic_up(bond_max, bond_max_up, bond_increase)?,
                rate,
                asset,
            )?,
            tau,
        )?,
        year,
    )?;
    let collateral_locked = sub(add(collateral_premium, bond_max_up)?, U256::one())?;
    let interest_required = div_up(
        mul(hyperbolic_up(rate_max, rate_max_up, rate_increase)?, tau)?,
        year,
    )?;
    let insurance_increase = div_up(mul(rate_increase, tau)?, year)?;

    let collateral_locked = to_u64(collateral_locked)?;
    let interest_required = to_u64(interest_required)?;
    let bond_increase = to_u64(bond_increase)?;
    let rate_increase = to_u128(rate_increase)?;
    let insurance_increase = to_u64(insurance_increase)?;

    let mut next = *state;
    next.asset_reserve -= asset_out;
    next.bond_reserve = checked_add_u64(next.bond_reserve, bond_increase)?;
    next.rate_reserve = next
        .rate_reserve
        .checked_add(rate_increase)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    next.outstanding_insurance = checked_add_u64(next.outstanding_insurance, insurance_increase)?;
    next.collateral_reserve = checked_add_u64(next.collateral_reserve, collateral_locked)?;
    next.bond_supply = checked_add_u64(next.bond_supply, bond_increase)?;
    next.insurance_supply = checked_add_u64(next.insurance_supply, insurance_increase)?;

    Ok(BorrowOutcome {
        collateral_locked,
        interest_required,
        debt_required: checked_add_u64(asset_out, interest_required)?,
        bond_increase,
        rate_increase,
        insurance_increase,
        state: next,
    })
}
