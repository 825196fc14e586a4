use anchor_lang::prelude::*;
use pool_factory::PoolParams;

use crate::{
    constants::{BASE, MINIMUM_LIQUIDITY},
    engine::time_to_maturity,
    error::ErrorCode,
    helpers::math::{
        checked_add_u64, checked_sub_u64, mul_div_down, mul_div_up, to_u128, to_u64, wide,
    },
    state::{MintParams, PoolState},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MintOutcome {
    pub liquidity_to_receiver: u64,
    pub liquidity_to_fee_collector: u64,
    pub bond_to_receiver: u64,
    pub insurance_to_receiver: u64,
    pub collateral_paid: u64,
    pub collateral_locked: u64,
    /// Debt of the position minted to the receiver.
    pub debt: u64,
    pub state: PoolState,
}

struct Deltas {
    liquidity_total: u64,
    locked_liquidity: u64,
    bond_increase: u64,
    rate_increase: u128,
    insurance_increase: u64,
    bond_to_receiver: u64,
    collateral_paid: u64,
    collateral_locked: u64,
    debt: u64,
}

pub fn mint(
    state: &PoolState,
    params: &PoolParams,
    maturity: i64,
    now: i64,
    asset_in: u64,
    mode: MintParams,
) -> Result<MintOutcome> {
    let tau = time_to_maturity(maturity, now)?;
    require!(asset_in > 0, ErrorCode::InvalidAmount);
    require!(
        (params.protocol_fee_bp as u64) < BASE,
        ErrorCode::InvalidPoolParams
    );

    let deltas = match mode {
        MintParams::Genesis {
            collateral_paid,
            collateral_locked,
        } => genesis_deltas(state, params, tau, asset_in, collateral_paid, collateral_locked)?,
        MintParams::Proportional { .. } => proportional_deltas(state, asset_in)?,
    };

    let distributable = checked_sub_u64(deltas.liquidity_total, deltas.locked_liquidity)?;
    let liquidity_to_receiver = to_u64(mul_div_down(
        wide(distributable),
        wide(checked_sub_u64(BASE, params.protocol_fee_bp as u64)?),
        wide(BASE),
    )?)?;
    require!(liquidity_to_receiver > 0, ErrorCode::InvalidAmount);
    let liquidity_to_fee_collector = distributable - liquidity_to_receiver;

    let mut next = *state;
    next.asset_reserve = checked_add_u64(next.asset_reserve, asset_in)?;
    next.bond_reserve = checked_add_u64(next.bond_reserve, deltas.bond_increase)?;
    next.collateral_reserve = checked_add_u64(
        next.collateral_reserve,
        checked_add_u64(deltas.collateral_paid, deltas.collateral_locked)?,
    )?;
    next.rate_reserve = next
        .rate_reserve
        .checked_add(deltas.rate_increase)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    next.outstanding_insurance =
        checked_add_u64(next.outstanding_insurance, deltas.insurance_increase)?;
    next.liquidity_supply = checked_add_u64(next.liquidity_supply, deltas.liquidity_total)?;
    next.bond_supply = checked_add_u64(
        next.bond_supply,
        checked_add_u64(deltas.bond_increase, deltas.bond_to_receiver)?,
    )?;
    next.insurance_supply = checked_add_u64(
        next.insurance_supply,
        checked_add_u64(deltas.insurance_increase, asset_in)?,
    )?;

    Ok(MintOutcome {
        liquidity_to_receiver,
        liquidity_to_fee_collector,
        bond_to_receiver: deltas.bond_to_receiver,
        insurance_to_receiver: asset_in,
        collateral_paid: deltas.collateral_paid,
        collateral_locked: deltas.collateral_locked,
        debt: deltas.debt,
        state: next,
    })
}

fn genesis_deltas(
    state: &PoolState,
    params: &PoolParams,
    tau: u64,
    asset_in: u64,
    collateral_paid: u64,
    collateral_locked: u64,
) -> Result<Deltas> {
    require!(!state.is_initialized(), ErrorCode::AlreadyInitialized);
    require!(
        collateral_paid > 0 && collateral_locked > 0,
        ErrorCode::InvalidAmount
    );

    // The LP's own position owes what the pool insures.
    let debt = to_u64(mul_div_up(
        wide(asset_in),
        wide(collateral_locked),
        wide(collateral_paid),
    )?)?;
    let rate_reserve = to_u128(mul_div_down(
        wide(debt),
        wide(params.year_secs),
        wide(tau),
    )?)?;
    require!(rate_reserve > 0, ErrorCode::InsufficientInitialLiquidity);
    require!(
        debt > MINIMUM_LIQUIDITY,
        ErrorCode::InsufficientInitialLiquidity
    );

    Ok(Deltas {
        liquidity_total: debt,
        locked_liquidity: MINIMUM_LIQUIDITY,
        bond_increase: collateral_paid,
        rate_increase: rate_reserve,
        insurance_increase: debt,
        bond_to_receiver: collateral_locked,
        collateral_paid,
        collateral_locked,
        debt,
    })
}

fn proportional_deltas(state: &PoolState, asset_in: u64) -> Result<Deltas> {
    require!(state.is_initialized(), ErrorCode::NotInitialized);

    let asset = wide(state.asset_reserve);
    let scaled = |reserve: u64| mul_div_down(wide(reserve), wide(asset_in), asset);

    let liquidity_total = to_u64(scaled(state.liquidity_supply)?)?;
    require!(liquidity_total > 0, ErrorCode::InvalidAmount);

    let bond_increase = to_u64(scaled(state.bond_reserve)?)?;
    let collateral_paid = to_u64(mul_div_up(wide(state.bond_reserve), wide(asset_in), asset)?)?;
    let insurance_increase = to_u64(scaled(state.outstanding_insurance)?)?;
    let debt = to_u64(mul_div_up(
        wide(state.outstanding_insurance),
        wide(asset_in),
        asset,
    )?)?;
    let rate_increase = to_u128(mul_div_down(wide(state.rate_reserve), wide(asset_in), asset)?)?;
    let collateral_locked = to_u64(mul_div_up(wide(debt), wide(state.bond_reserve), asset)?)?;
    let bond_to_receiver = to_u64(mul_div_down(wide(debt), wide(state.bond_reserve), asset)?)?;

    Ok(Deltas {
        liquidity_total,
        locked_liquidity: 0,
        bond_increase,
        rate_increase,
        insurance_increase,
        bond_to_receiver,
        collateral_paid,
        collateral_locked,
        debt,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        engine::fixtures::{genesis_pool, params, MATURITY, NOW, YEAR},
        error::assert_error,
    };
    use proptest::prelude::*;

    fn proportional() -> MintParams {
        MintParams::Proportional {
            max_debt: u64::MAX,
            max_collateral_paid: u64::MAX,
            max_collateral_locked: u64::MAX,
        }
    }

    #[test]
    fn genesis_reference_deposit() {
        let outcome = mint(
            &PoolState::default(),
            &params(),
            MATURITY,
            NOW,
            100,
            MintParams::Genesis {
                collateral_paid: 20,
                collateral_locked: 220,
            },
        )
        .unwrap();

        assert_eq!(outcome.bond_to_receiver, 220);
        assert_eq!(outcome.insurance_to_receiver, 100);
        assert_eq!(outcome.liquidity_to_receiver, 99);
        assert_eq!(outcome.liquidity_to_fee_collector, 1);
        assert_eq!(outcome.debt, 1_100);
        assert_eq!(outcome.collateral_locked, 220);

        let state = outcome.state;
        assert_eq!(state.bond_supply, 240);
        assert_eq!(state.insurance_supply, 1_200);
        assert_eq!(state.liquidity_supply, 1_100);
        assert_eq!(
            state.liquidity_supply
                - outcome.liquidity_to_receiver
                - outcome.liquidity_to_fee_collector,
            MINIMUM_LIQUIDITY
        );
        assert_eq!(state.asset_reserve, 100);
        assert_eq!(state.collateral_reserve, 240);
        assert_eq!(state.bond_reserve, 20);
        assert_eq!(state.outstanding_insurance, 1_100);
        assert_eq!(state.rate_reserve, 1_100);
    }

    #[test]
    fn genesis_rate_reserve_scales_with_time_left() {
        let outcome = mint(
            &PoolState::default(),
            &params(),
            NOW + (YEAR / 2) as i64,
            NOW,
            100,
            MintParams::Genesis {
                collateral_paid: 20,
                collateral_locked: 220,
            },
        )
        .unwrap();
        assert_eq!(outcome.state.rate_reserve, 2_200);
    }

    #[test]
    fn genesis_twice_fails() {
        assert_error(
            mint(
                &genesis_pool(),
                &params(),
                MATURITY,
                NOW,
                100,
                MintParams::Genesis {
                    collateral_paid: 20,
                    collateral_locked: 220,
                },
            ),
            ErrorCode::AlreadyInitialized,
        );
    }

    #[test]
    fn genesis_rejects_zero_inputs() {
        let empty = PoolState::default();
        assert_error(
            mint(
                &empty,
                &params(),
                MATURITY,
                NOW,
                0,
                MintParams::Genesis {
                    collateral_paid: 20,
                    collateral_locked: 220,
                },
            ),
            ErrorCode::InvalidAmount,
        );
        assert_error(
            mint(
                &empty,
                &params(),
                MATURITY,
                NOW,
                100,
                MintParams::Genesis {
                    collateral_paid: 0,
                    collateral_locked: 220,
                },
            ),
            ErrorCode::InvalidAmount,
        );
        assert_error(
            mint(
                &empty,
                &params(),
                MATURITY,
                NOW,
                100,
                MintParams::Genesis {
                    collateral_paid: 20,
                    collateral_locked: 0,
                },
            ),
            ErrorCode::InvalidAmount,
        );
    }

    #[test]
    fn genesis_below_minimum_liquidity_fails() {
        assert_error(
            mint(
                &PoolState::default(),
                &params(),
                MATURITY,
                NOW,
                100,
                MintParams::Genesis {
                    collateral_paid: 100,
                    collateral_locked: 100,
                },
            ),
            ErrorCode::InsufficientInitialLiquidity,
        );
    }

    #[test]
    fn proportional_before_genesis_fails() {
        assert_error(
            mint(
                &PoolState::default(),
                &params(),
                MATURITY,
                NOW,
                100,
                proportional(),
            ),
            ErrorCode::NotInitialized,
        );
    }

    #[test]
    fn mint_after_maturity_fails() {
        assert_error(
            mint(
                &genesis_pool(),
                &params(),
                MATURITY,
                MATURITY,
                100,
                proportional(),
            ),
            ErrorCode::PoolMatured,
        );
    }

    #[test]
    fn proportional_doubles_reserves() {
        let before = genesis_pool();
        let outcome = mint(&before, &params(), MATURITY, NOW, 100, proportional()).unwrap();

        assert_eq!(outcome.liquidity_to_receiver + outcome.liquidity_to_fee_collector, 1_100);
        assert_eq!(outcome.liquidity_to_receiver, 1_096);
        assert_eq!(outcome.collateral_paid, 20);
        assert_eq!(outcome.debt, 1_100);
        assert_eq!(outcome.collateral_locked, 220);
        assert_eq!(outcome.bond_to_receiver, 220);

        let after = outcome.state;
        assert_eq!(after.asset_reserve, 200);
        assert_eq!(after.bond_reserve, 40);
        assert_eq!(after.rate_reserve, 2_200);
        assert_eq!(after.outstanding_insurance, 2_200);
        assert_eq!(after.collateral_reserve, 480);
        assert_eq!(after.liquidity_supply, 2_200);
    }

    #[test]
    fn protocol_fee_cannot_take_all_minted_liquidity() {
        let genesis = MintParams::Genesis {
            collateral_paid: 20,
            collateral_locked: 220,
        };
        let all_to_collector = PoolParams {
            protocol_fee_bp: BASE as u16,
            ..params()
        };
        assert_error(
            mint(
                &PoolState::default(),
                &all_to_collector,
                MATURITY,
                NOW,
                100,
                genesis,
            ),
            ErrorCode::InvalidPoolParams,
        );

        let highest_fee = PoolParams {
            protocol_fee_bp: (BASE - 1) as u16,
            ..params()
        };
        let outcome = mint(
            &PoolState::default(),
            &highest_fee,
            MATURITY,
            NOW,
            1_000_000,
            MintParams::Genesis {
                collateral_paid: 1_000_000,
                collateral_locked: 1_100_000,
            },
        )
        .unwrap();
        // (1_100_000 - 1_000) * 1 / 10_000
        assert_eq!(outcome.liquidity_to_receiver, 109);
        assert_eq!(outcome.liquidity_to_fee_collector, 1_098_891);

        let proportional = mint(
            &outcome.state,
            &highest_fee,
            MATURITY,
            NOW,
            1_000_000,
            proportional(),
        )
        .unwrap();
        assert!(proportional.liquidity_to_receiver > 0);
    }

    #[test]
    fn proportional_charges_round_up() {
        let before = genesis_pool();
        let outcome = mint(&before, &params(), MATURITY, NOW, 7, proportional()).unwrap();
        // 20 * 7 / 100 = 1.4
        assert_eq!(outcome.collateral_paid, 2);
        assert_eq!(outcome.state.bond_reserve, before.bond_reserve + 1);
        // 1100 * 7 / 100 = 77
        assert_eq!(outcome.debt, 77);
        // 77 * 20 / 100 = 15.4
        assert_eq!(outcome.collateral_locked, 16);
        assert_eq!(outcome.bond_to_receiver, 15);
    }

    proptest! {
        #[test]
        fn proportional_mint_never_overissues(asset_in in 1u64..1_000_000) {
            let before = genesis_pool();
            let outcome = mint(&before, &params(), MATURITY, NOW, asset_in, proportional()).unwrap();
            let after = outcome.state;
            let minted = (after.liquidity_supply - before.liquidity_supply) as u128;
            let bond_added = (after.bond_reserve - before.bond_reserve) as u128;
            let insurance_added =
                (after.outstanding_insurance - before.outstanding_insurance) as u128;

            let asset_in = asset_in as u128;
            let asset = before.asset_reserve as u128;
            prop_assert!(minted * asset <= asset_in * before.liquidity_supply as u128);
            prop_assert!(bond_added * asset <= asset_in * before.bond_reserve as u128);
            prop_assert!(insurance_added * asset <= asset_in * before.outstanding_insurance as u128);
            prop_assert!(outcome.collateral_paid as u128 * asset >= asset_in * before.bond_reserve as u128);
        }
    }
}
