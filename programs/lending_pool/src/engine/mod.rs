//! Pricing engine. Every function here is pure: it takes a pool snapshot and
//! returns the amounts to move plus the post-operation snapshot, or an error
//! with nothing changed.

pub mod borrow;
pub mod burn;
pub mod lend;
pub mod mint;
pub mod pay;

pub use borrow::*;
pub use burn::*;
pub use lend::*;
pub use mint::*;
pub use pay::*;

use anchor_lang::prelude::*;

use crate::error::ErrorCode;

/// Seconds left until maturity; fails once the pool has matured.
pub fn time_to_maturity(maturity: i64, now: i64) -> Result<u64> {
    require!(now < maturity, ErrorCode::PoolMatured);
    let remaining = maturity
        .checked_sub(now)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    Ok(remaining as u64)
}

pub fn require_matured(maturity: i64, now: i64) -> Result<()> {
    require!(now >= maturity, ErrorCode::PoolNotMatured);
    Ok(())
}
