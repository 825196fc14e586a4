use anchor_lang::prelude::*;
use pool_factory::PoolParams;

use crate::{
    constants::BASE,
    engine::time_to_maturity,
    error::ErrorCode,
    helpers::math::{
        add, checked_add_u64, div_down, div_up, mul, mul_div_down, sub, to_u128,
        to_u64, wide,
    },
    state::{LendQuote, PoolState},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LendOutcome {
    pub bond_out: u64,
    pub insurance_out: u64,
    pub bond_decrease: u64,
    pub rate_decrease: u128,
    pub state: PoolState,
}

/// Asset in, bond and insurance claims out. Capacity is removed at
/// `BASE + fee`, so the pool keeps more residual capacity than a fee-less
/// swap and the invariant grows.
pub fn lend(
    state: &PoolState,
    params: &PoolParams,
    maturity: i64,
    now: i64,
    asset_in: u64,
    quote: LendQuote,
) -> Result<LendOutcome> {
    let tau = wide(time_to_maturity(maturity, now)?);
    require!(asset_in > 0, ErrorCode::InvalidAmount);
    require!(state.is_initialized(), ErrorCode::NotInitialized);

    let year = wide(params.year_secs);
    let base = wide(BASE);
    let base_plus_fee = wide(BASE + params.transaction_fee_bp as u64);
    let invariant = state.invariant()?;

    let asset = wide(state.asset_reserve);
    let bond = wide(state.bond_reserve);
    let rate = wide(state.rate_reserve);
    let asset_after = add(asset, wide(asset_in))?;
    // I * BASE / (asset + asset_in), rounded against the lender.
    let scaled_target = div_up(mul(invariant, base)?, asset_after)?;

    let (bond_decrease, rate_decrease) = match quote {
        LendQuote::ExactBondOut(bond_received) => {
            require!(bond_received > 0, ErrorCode::InvalidAmount);
            let bond_decrease = div_up(
                mul(wide(bond_received), asset)?,
                add(div_down(mul(rate, tau)?, year)?, asset)?,
            )?;
            let bond_adj = div_down(
                sub(mul(bond, base)?, mul(bond_decrease, base_plus_fee)?)
                    .map_err(|_| error!(ErrorCode::InsufficientReserves))?,
                base,
            )?;
            require!(!bond_adj.is_zero(), ErrorCode::InsufficientReserves);
            let rate_adj = div_up(scaled_target, bond_adj)?;
            let rate_decrease = div_down(
                sub(mul(rate, base)?, rate_adj)
                    .map_err(|_| error!(ErrorCode::InsufficientAsset))?,
                base_plus_fee,
            )?;
            (bond_decrease, rate_decrease)
        }
        LendQuote::ExactInsuranceOut(insurance_received) => {
            require!(insurance_received > 0, ErrorCode::InvalidAmount);
            let rate_decrease = div_up(
                mul(mul(wide(insurance_received), rate)?, year)?,
                add(mul(rate, tau)?, mul(asset_after, year)?)?,
            )?;
            let rate_adj = div_down(
                sub(mul(rate, base)?, mul(rate_decrease, base_plus_fee)?)
                    .map_err(|_| error!(ErrorCode::InsufficientReserves))?,
                base,
            )?;
            require!(!rate_adj.is_zero(), ErrorCode::InsufficientReserves);
            let bond_adj = div_up(scaled_target, rate_adj)?;
            let bond_decrease = div_down(
                sub(mul(bond, base)?, bond_adj)
                    .map_err(|_| error!(ErrorCode::InsufficientAsset))?,
                base_plus_fee,
            )?;
            (bond_decrease, rate_decrease)
        }
    };

    let bond_minted = div_down(
        mul(mul_div_down(bond_decrease, rate, asset)?, tau)?,
        year,
    )?;
    let insurance_decrease = div_down(mul(rate_decrease, tau)?, year)?;
    let insurance_minted = mul_div_down(rate_decrease, asset_after, rate)?;

    let bond_decrease = to_u64(bond_decrease)?;
    let rate_decrease = to_u128(rate_decrease)?;
    let bond_minted = to_u64(bond_minted)?;
    let insurance_decrease = to_u64(insurance_decrease)?;
    let insurance_minted = to_u64(insurance_minted)?;

    let mut next = *state;
    next.asset_reserve = checked_add_u64(next.asset_reserve, asset_in)?;
    next.bond_reserve = next
        .bond_reserve
        .checked_sub(bond_decrease)
        .ok_or_else(|| error!(ErrorCode::InsufficientReserves))?;
    next.rate_reserve = next
        .rate_reserve
        .checked_sub(rate_decrease)
        .ok_or_else(|| error!(ErrorCode::InsufficientReserves))?;
    next.outstanding_insurance = next
        .outstanding_insurance
        .checked_sub(insurance_decrease)
        .ok_or_else(|| error!(ErrorCode::InsufficientReserves))?;
    next.bond_supply = checked_add_u64(next.bond_supply, bond_minted)?;
    next.insurance_supply = checked_add_u64(next.insurance_supply, insurance_minted)?;

    Ok(LendOutcome {
        bond_out: checked_add_u64(bond_decrease, bond_minted)?,
        insurance_out: checked_add_u64(insurance_decrease, insurance_minted)?,
        bond_decrease,
        rate_decrease,
        state: next,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        engine::fixtures::{deep_pool, fee_free, genesis_pool, params, MATURITY, NOW},
        error::assert_error,
    };
    use proptest::prelude::*;

    #[test]
    fn exact_bond_out_delivers_requested_bonds() {
        let state = deep_pool(&params());
        let outcome = lend(
            &state,
            &params(),
            MATURITY,
            NOW,
            1_000_000,
            LendQuote::ExactBondOut(1_050_000),
        )
        .unwrap();
        assert!(outcome.bond_out >= 1_049_999 && outcome.bond_out <= 1_050_001);
        assert!(outcome.insurance_out > 0);
        assert_eq!(outcome.state.asset_reserve, state.asset_reserve + 1_000_000);
        assert_eq!(
            outcome.state.bond_reserve,
            state.bond_reserve - outcome.bond_decrease
        );
        assert!(outcome.state.invariant().unwrap() >= state.invariant().unwrap());
    }

    #[test]
    fn exact_insurance_out_delivers_requested_insurance() {
        let state = deep_pool(&params());
        let outcome = lend(
            &state,
            &params(),
            MATURITY,
            NOW,
            1_000_000,
            LendQuote::ExactInsuranceOut(500_000),
        )
        .unwrap();
        assert!((499_998..=500_002).contains(&outcome.insurance_out));
        assert!(outcome.bond_out > 1_000_000);
        assert!(outcome.state.invariant().unwrap() >= state.invariant().unwrap());
    }

    #[test]
    fn fee_leaves_more_capacity_than_fee_free_swap() {
        let state = deep_pool(&params());
        let with_fee = lend(
            &state,
            &params(),
            MATURITY,
            NOW,
            1_000_000,
            LendQuote::ExactBondOut(1_050_000),
        )
        .unwrap();
        let without_fee = lend(
            &state,
            &fee_free(),
            MATURITY,
            NOW,
            1_000_000,
            LendQuote::ExactBondOut(1_050_000),
        )
        .unwrap();
        assert!(with_fee.state.rate_reserve > without_fee.state.rate_reserve);
        assert!(with_fee.insurance_out < without_fee.insurance_out);
    }

    #[test]
    fn asking_too_much_for_the_asset_fails() {
        let state = deep_pool(&params());
        assert_error(
            lend(
                &state,
                &params(),
                MATURITY,
                NOW,
                1_000,
                LendQuote::ExactBondOut(1_000_000),
            ),
            ErrorCode::InsufficientAsset,
        );
    }

    #[test]
    fn draining_bond_capacity_fails() {
        let state = genesis_pool();
        assert_error(
            lend(
                &state,
                &params(),
                MATURITY,
                NOW,
                1_000_000,
                LendQuote::ExactBondOut(1_000),
            ),
            ErrorCode::InsufficientReserves,
        );
    }

    #[test]
    fn zero_amounts_fail() {
        let state = genesis_pool();
        assert_error(
            lend(&state, &params(), MATURITY, NOW, 0, LendQuote::ExactBondOut(1)),
            ErrorCode::InvalidAmount,
        );
        assert_error(
            lend(&state, &params(), MATURITY, NOW, 10, LendQuote::ExactBondOut(0)),
            ErrorCode::InvalidAmount,
        );
    }

    #[test]
    fn lend_after_maturity_fails() {
        assert_error(
            lend(
                &genesis_pool(),
                &params(),
                MATURITY,
                MATURITY,
                10,
                LendQuote::ExactBondOut(10),
            ),
            ErrorCode::PoolMatured,
        );
    }

    #[test]
    fn lend_into_empty_pool_fails() {
        assert_error(
            lend(
                &PoolState::default(),
                &params(),
                MATURITY,
                NOW,
                10,
                LendQuote::ExactBondOut(10),
            ),
            ErrorCode::NotInitialized,
        );
    }

    proptest! {
        #[test]
        fn lend_never_decreases_invariant(
            asset_in in 1u64..10_000_000,
            bond_share in 1u64..10_000,
            by_insurance in any::<bool>(),
            fee in 0u16..1_000,
        ) {
            let params = PoolParams { transaction_fee_bp: fee, ..params() };
            let state = deep_pool(&params);
            let quote = if by_insurance {
                LendQuote::ExactInsuranceOut(asset_in / 10_000 * bond_share / 10 + 1)
            } else {
                LendQuote::ExactBondOut(asset_in + asset_in / 10_000 * bond_share / 100 + 1)
            };
            if let Ok(outcome) = lend(&state, &params, MATURITY, NOW, asset_in, quote) {
                prop_assert!(outcome.state.invariant().unwrap() >= state.invariant().unwrap());
            }
        }
    }
}
