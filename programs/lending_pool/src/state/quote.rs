use anchor_lang::prelude::*;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MintParams {
    /// First deposit; seeds the reserves.
    Genesis {
        collateral_paid: u64,
        collateral_locked: u64,
    },
    /// Deposit into a live pool, keeping reserve ratios.
    Proportional {
        max_debt: u64,
        max_collateral_paid: u64,
        max_collateral_locked: u64,
    },
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LendQuote {
    ExactBondOut(u64),
    ExactInsuranceOut(u64),
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum BorrowQuote {
    ExactCollateralLocked(u64),
    ExactInterestRequired(u64),
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BurnMinimums {
    pub min_asset: u64,
    pub min_bond: u64,
    pub min_insurance: u64,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LendMinimums {
    pub min_bond: u64,
    pub min_insurance: u64,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct BorrowMaximums {
    pub max_collateral_locked: u64,
    pub max_interest_required: u64,
}
