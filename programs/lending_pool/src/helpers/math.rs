use anchor_lang::prelude::*;

use crate::error::ErrorCode;

#[allow(clippy::assign_op_pattern, clippy::ptr_offset_with_cast)]
mod wide {
    uint::construct_uint! {
        /// 256-bit unsigned integer for reserve products.
        pub struct U256(4);
    }
}

pub use wide::U256;

pub fn wide<T: Into<U256>>(value: T) -> U256 {
    value.into()
}

pub fn mul(a: U256, b: U256) -> Result<U256> {
    a.checked_mul(b)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))
}

pub fn add(a: U256, b: U256) -> Result<U256> {
    a.checked_add(b)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))
}

pub fn sub(a: U256, b: U256) -> Result<U256> {
    a.checked_sub(b)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))
}

/// Truncating division.
pub fn div_down(a: U256, b: U256) -> Result<U256> {
    a.checked_div(b)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))
}

/// Division rounding toward positive infinity.
pub fn div_up(a: U256, b: U256) -> Result<U256> {
    let quotient = div_down(a, b)?;
    if (a % b).is_zero() {
        Ok(quotient)
    } else {
        add(quotient, U256::one())
    }
}

/// `floor(a * b / c)`
pub fn mul_div_down(a: U256, b: U256, c: U256) -> Result<U256> {
    div_down(mul(a, b)?, c)
}

/// `ceil(a * b / c)`
pub fn mul_div_up(a: U256, b: U256, c: U256) -> Result<U256> {
    div_up(mul(a, b)?, c)
}

pub fn to_u64(value: U256) -> Result<u64> {
    require!(value.bits() <= 64, ErrorCode::MathOverflow);
    Ok(value.as_u64())
}

pub fn to_u128(value: U256) -> Result<u128> {
    require!(value.bits() <= 128, ErrorCode::MathOverflow);
    Ok(value.as_u128())
}

pub fn checked_add_u64(a: u64, b: u64) -> Result<u64> {
    a.checked_add(b)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))
}

pub fn checked_sub_u64(a: u64, b: u64) -> Result<u64> {
    a.checked_sub(b)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))
}
