use anchor_lang::prelude::*;

use crate::{
    engine::{BorrowOutcome, BurnOutcome, LendOutcome, MintOutcome},
    error::ErrorCode,
    state::{BorrowMaximums, BurnMinimums, LendMinimums, MintParams},
};

/// Fails once `now` is past the caller's deadline. The deadline itself is still valid.
pub fn check_deadline(now: i64, deadline: i64) -> Result<()> {
    require!(now <= deadline, ErrorCode::DeadlineExpired);
    Ok(())
}

pub fn require_not_paused(factory: &pool_factory::FactoryConfig) -> Result<()> {
    require!(!factory.global_pause, ErrorCode::GlobalPaused);
    Ok(())
}

/// Genesis deposits are priced by the caller's own inputs and carry no maxima.
pub fn check_mint_bounds(mode: &MintParams, outcome: &MintOutcome) -> Result<()> {
    if let MintParams::Proportional {
        max_debt,
        max_collateral_paid,
        max_collateral_locked,
    } = *mode
    {
        require!(outcome.debt <= max_debt, ErrorCode::DebtAboveMax);
        require!(
            outcome.collateral_paid <= max_collateral_paid,
            ErrorCode::CollateralPaidAboveMax
        );
        require!(
            outcome.collateral_locked <= max_collateral_locked,
            ErrorCode::CollateralLockedAboveMax
        );
    }
    Ok(())
}

pub fn check_burn_minimums(minimums: &BurnMinimums, outcome: &BurnOutcome) -> Result<()> {
    require!(
        outcome.asset_out >= minimums.min_asset,
        ErrorCode::AssetBelowMin
    );
    require!(
        outcome.bond_out >= minimums.min_bond,
        ErrorCode::BondBelowMin
    );
    require!(
        outcome.insurance_out >= minimums.min_insurance,
        ErrorCode::InsuranceBelowMin
    );
    Ok(())
}

pub fn check_lend_minimums(minimums: &LendMinimums, outcome: &LendOutcome) -> Result<()> {
    require!(
        outcome.bond_out >= minimums.min_bond,
        ErrorCode::BondBelowMin
    );
    require!(
        outcome.insurance_out >= minimums.min_insurance,
        ErrorCode::InsuranceBelowMin
    );
    Ok(())
}

pub fn check_borrow_maximums(maximums: &BorrowMaximums, outcome: &BorrowOutcome) -> Result<()> {
    require!(
        outcome.collateral_locked <= maximums.max_collateral_locked,
        ErrorCode::CollateralLockedAboveMax
    );
    require!(
        outcome.interest_required <= maximums.max_interest_required,
        ErrorCode::InterestAboveMax
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        engine::{
            borrow, burn, lend, mint,
            fixtures::{deep_pool, genesis_pool, params, MATURITY, NOW},
        },
        error::assert_error,
        state::{BorrowQuote, LendQuote},
    };

    #[test]
    fn deadline_is_inclusive() {
        assert!(check_deadline(NOW, NOW).is_ok());
        assert!(check_deadline(NOW, NOW + 1).is_ok());
        assert_error(check_deadline(NOW + 1, NOW), ErrorCode::DeadlineExpired);
    }

    #[test]
    fn proportional_mint_respects_maxima() {
        let state = genesis_pool();
        let mode = MintParams::Proportional {
            max_debt: u64::MAX,
            max_collateral_paid: u64::MAX,
            max_collateral_locked: u64::MAX,
        };
        let outcome = mint(&state, &params(), MATURITY, NOW, 100, mode).unwrap();
        assert!(check_mint_bounds(&mode, &outcome).is_ok());

        let tight = |debt, paid, locked| MintParams::Proportional {
            max_debt: debt,
            max_collateral_paid: paid,
            max_collateral_locked: locked,
        };
        assert_error(
            check_mint_bounds(
                &tight(outcome.debt - 1, u64::MAX, u64::MAX),
                &outcome,
            ),
            ErrorCode::DebtAboveMax,
        );
        assert_error(
            check_mint_bounds(
                &tight(u64::MAX, outcome.collateral_paid - 1, u64::MAX),
                &outcome,
            ),
            ErrorCode::CollateralPaidAboveMax,
        );
        assert_error(
            check_mint_bounds(
                &tight(u64::MAX, u64::MAX, outcome.collateral_locked - 1),
                &outcome,
            ),
            ErrorCode::CollateralLockedAboveMax,
        );
    }

    #[test]
    fn burn_minimums() {
        let state = genesis_pool();
        let outcome = burn(&state, MATURITY, NOW, 100, 1_000).unwrap();
        let exact = BurnMinimums {
            min_asset: outcome.asset_out,
            min_bond: outcome.bond_out,
            min_insurance: outcome.insurance_out,
        };
        assert!(check_burn_minimums(&exact, &outcome).is_ok());
        assert_error(
            check_burn_minimums(
                &BurnMinimums {
                    min_asset: outcome.asset_out + 1,
                    ..exact
                },
                &outcome,
            ),
            ErrorCode::AssetBelowMin,
        );
        assert_error(
            check_burn_minimums(
                &BurnMinimums {
                    min_insurance: outcome.insurance_out + 1,
                    ..exact
                },
                &outcome,
            ),
            ErrorCode::InsuranceBelowMin,
        );
    }

    #[test]
    fn lend_minimums() {
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
        let exact = LendMinimums {
            min_bond: outcome.bond_out,
            min_insurance: outcome.insurance_out,
        };
        assert!(check_lend_minimums(&exact, &outcome).is_ok());
        assert_error(
            check_lend_minimums(
                &LendMinimums {
                    min_bond: outcome.bond_out + 1,
                    ..exact
                },
                &outcome,
            ),
            ErrorCode::BondBelowMin,
        );
    }

    #[test]
    fn borrow_maximums() {
        let state = deep_pool(&params());
        let outcome = borrow(
            &state,
            &params(),
            MATURITY,
            NOW,
            1_000_000,
            BorrowQuote::ExactInterestRequired(100_000),
        )
        .unwrap();
        let exact = BorrowMaximums {
            max_collateral_locked: outcome.collateral_locked,
            max_interest_required: outcome.interest_required,
        };
        assert!(check_borrow_maximums(&exact, &outcome).is_ok());
        assert_error(
            check_borrow_maximums(
                &BorrowMaximums {
                    max_collateral_locked: outcome.collateral_locked - 1,
                    ..exact
                },
                &outcome,
            ),
            ErrorCode::CollateralLockedAboveMax,
        );
        assert_error(
            check_borrow_maximums(
                &BorrowMaximums {
                    max_interest_required: outcome.interest_required - 1,
                    ..exact
                },
                &outcome,
            ),
            ErrorCode::InterestAboveMax,
        );
    }
}
