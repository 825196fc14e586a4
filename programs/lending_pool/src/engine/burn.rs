use anchor_lang::prelude::*;

use crate::{
    engine::{require_matured, time_to_maturity},
    error::ErrorCode,
    helpers::math::{checked_add_u64, checked_sub_u64, mul_div_down, mul_div_up, to_u128, to_u64, wide},
    state::PoolState,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BurnOutcome {
    pub asset_out: u64,
    pub bond_out: u64,
    pub insurance_out: u64,
    /// Debt of the position minted to the burner.
    pub debt: u64,
    pub collateral_locked: u64,
    pub state: PoolState,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MaturedBurnOutcome {
    pub bond_out: u64,
    pub insurance_out: u64,
    pub state: PoolState,
}

fn require_burnable(state: &PoolState, liquidity_in: u64) -> Result<()> {
    require!(liquidity_in > 0, ErrorCode::InvalidAmount);
    require!(state.is_initialized(), ErrorCode::NotInitialized);
    require!(
        liquidity_in <= state.liquidity_supply,
        ErrorCode::LiquidityExceedsSupply
    );
    Ok(())
}

/// Pre-maturity redemption. The withdrawn asset becomes debt of a new position
/// backed by `collateral_received`, which must cover it at the pool's bond ratio.
pub fn burn(
    state: &PoolState,
    maturity: i64,
    now: i64,
    liquidity_in: u64,
    collateral_received: u64,
) -> Result<BurnOutcome> {
    time_to_maturity(maturity, now)?;
    require_burnable(state, liquidity_in)?;

    let supply = wide(state.liquidity_supply);
    let share = |reserve: u64| -> Result<u64> {
        to_u64(mul_div_down(wide(liquidity_in), wide(reserve), supply)?)
    };

    let asset_out = share(state.asset_reserve)?;
    let bond_out = share(state.bond_reserve)?;
    let insurance_out = share(state.outstanding_insurance)?;
    let rate_decrease = to_u128(mul_div_down(
        wide(liquidity_in),
        wide(state.rate_reserve),
        supply,
    )?)?;
    require!(asset_out > 0, ErrorCode::InvalidAmount);

    let required_collateral = to_u64(mul_div_up(
        wide(asset_out),
        wide(state.bond_reserve),
        wide(state.asset_reserve),
    )?)?;
    require!(
        collateral_received >= required_collateral,
        ErrorCode::InsufficientCollateral
    );

    let mut next = *state;
    next.asset_reserve = checked_sub_u64(next.asset_reserve, asset_out)?;
    next.bond_reserve = checked_sub_u64(next.bond_reserve, bond_out)?;
    next.rate_reserve = next
        .rate_reserve
        .checked_sub(rate_decrease)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    next.outstanding_insurance = checked_sub_u64(next.outstanding_insurance, insurance_out)?;
    next.collateral_reserve = checked_add_u64(next.collateral_reserve, collateral_received)?;
    next.liquidity_supply = checked_sub_u64(next.liquidity_supply, liquidity_in)?;

    Ok(BurnOutcome {
        asset_out,
        bond_out,
        insurance_out,
        debt: asset_out,
        collateral_locked: collateral_received,
        state: next,
    })
}

/// Post-maturity redemption for the pool's remaining bond and insurance claims.
pub fn burn_matured(
    state: &PoolState,
    maturity: i64,
    now: i64,
    liquidity_in: u64,
) -> Result<MaturedBurnOutcome> {
    require_matured(maturity, now)?;
    require_burnable(state, liquidity_in)?;

    let supply = wide(state.liquidity_supply);
    let bond_out = to_u64(mul_div_down(
        wide(liquidity_in),
        wide(state.bond_reserve),
        supply,
    )?)?;
    let insurance_out = to_u64(mul_div_down(
        wide(liquidity_in),
        wide(state.outstanding_insurance),
        supply,
    )?)?;

    let mut next = *state;
    next.bond_reserve = checked_sub_u64(next.bond_reserve, bond_out)?;
    next.outstanding_insurance = checked_sub_u64(next.outstanding_insurance, insurance_out)?;
    next.liquidity_supply = checked_sub_u64(next.liquidity_supply, liquidity_in)?;

    Ok(MaturedBurnOutcome {
        bond_out,
        insurance_out,
        state: next,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        engine::{
            fixtures::{genesis_pool, params, MATURITY, NOW},
            mint,
        },
        error::assert_error,
        state::MintParams,
    };
    use proptest::prelude::*;

    #[test]
    fn matured_burn_reference_case() {
        let state = genesis_pool();
        let outcome = burn_matured(&state, MATURITY, MATURITY, 90).unwrap();
        assert_eq!(outcome.bond_out, 1);
        assert_eq!(outcome.insurance_out, 90);
        assert_eq!(outcome.state.liquidity_supply, 1_010);
        assert_eq!(outcome.state.bond_reserve, 19);
        assert_eq!(outcome.state.outstanding_insurance, 1_010);
        assert_eq!(outcome.state.asset_reserve, state.asset_reserve);
        assert_eq!(outcome.state.collateral_reserve, state.collateral_reserve);
    }

    #[test]
    fn matured_burn_before_maturity_fails() {
        assert_error(
            burn_matured(&genesis_pool(), MATURITY, MATURITY - 1, 90),
            ErrorCode::PoolNotMatured,
        );
    }

    #[test]
    fn burn_after_maturity_fails() {
        assert_error(
            burn(&genesis_pool(), MATURITY, MATURITY, 90, 1_000),
            ErrorCode::PoolMatured,
        );
    }

    #[test]
    fn burn_rejects_zero_and_excess_liquidity() {
        let state = genesis_pool();
        assert_error(burn(&state, MATURITY, NOW, 0, 0), ErrorCode::InvalidAmount);
        assert_error(
            burn(&state, MATURITY, NOW, 1_101, 1_000),
            ErrorCode::LiquidityExceedsSupply,
        );
        assert_error(
            burn_matured(&state, MATURITY, MATURITY, 1_101),
            ErrorCode::LiquidityExceedsSupply,
        );
    }

    #[test]
    fn burn_opens_collateralized_position() {
        let state = genesis_pool();
        let outcome = burn(&state, MATURITY, NOW, 99, 20).unwrap();
        // 99 * 100 / 1100 = 9
        assert_eq!(outcome.asset_out, 9);
        // 99 * 20 / 1100 = 1.8
        assert_eq!(outcome.bond_out, 1);
        assert_eq!(outcome.insurance_out, 99);
        assert_eq!(outcome.debt, 9);
        assert_eq!(outcome.collateral_locked, 20);

        let after = outcome.state;
        assert_eq!(after.asset_reserve, 91);
        assert_eq!(after.bond_reserve, 19);
        assert_eq!(after.outstanding_insurance, 1_001);
        assert_eq!(after.rate_reserve, 1_001);
        assert_eq!(after.collateral_reserve, 260);
        assert_eq!(after.liquidity_supply, 1_001);
    }

    #[test]
    fn burn_requires_enough_collateral_for_the_withdrawn_asset() {
        // 9 asset at 20 bond per 100 asset needs ceil(1.8) = 2 collateral.
        assert_error(
            burn(&genesis_pool(), MATURITY, NOW, 99, 1),
            ErrorCode::InsufficientCollateral,
        );
        assert!(burn(&genesis_pool(), MATURITY, NOW, 99, 2).is_ok());
    }

    proptest! {
        #[test]
        fn mint_then_burn_returns_no_more_than_deposited(asset_in in 1u64..1_000_000) {
            let before = genesis_pool();
            let minted = mint(
                &before,
                &params(),
                MATURITY,
                NOW,
                asset_in,
                MintParams::Proportional {
                    max_debt: u64::MAX,
                    max_collateral_paid: u64::MAX,
                    max_collateral_locked: u64::MAX,
                },
            )
            .unwrap();

            let burned = burn(
                &minted.state,
                MATURITY,
                NOW,
                minted.liquidity_to_receiver,
                u64::MAX / 2,
            );
            if let Ok(burned) = burned {
                prop_assert!(burned.asset_out <= asset_in);
                prop_assert!(burned.bond_out <= minted.collateral_paid);
                prop_assert!(
                    burned.insurance_out
                        <= minted.state.outstanding_insurance - before.outstanding_insurance
                );
            }
        }
    }
}
