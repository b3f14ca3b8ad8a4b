//! Pure pricing and share arithmetic.
//!
//! Everything here is a free function of its arguments: no state, no
//! mutation, identical results for identical inputs. The pool settles
//! every operation through these functions against its live reserves;
//! callers may also use them directly to quote against reserve snapshots.

use crate::domain::{Amount, FeeRate, Price, Rounding};
use crate::error::{PoolError, Result};

/// Computes the output of a constant-product swap.
///
/// With `net = input - fee_rate.fee_on(input)`:
///
/// ```text
/// output = floor(net * output_reserve / (input_reserve + net))
/// ```
///
/// The denominator exceeds `output_reserve`'s coefficient, so the result
/// is strictly less than `output_reserve` — no single finite swap can
/// drain a reserve — and flooring keeps the reserve product from ever
/// decreasing.
///
/// # Errors
///
/// - [`PoolError::InvalidAmount`] if `input` is zero, or if the fee
///   consumes the entire input.
/// - [`PoolError::InsufficientReserve`] if either reserve is zero.
/// - [`PoolError::Overflow`] if `net * output_reserve` overflows `u128`.
pub fn output_amount(
    input: Amount,
    input_reserve: Amount,
    output_reserve: Amount,
    fee_rate: FeeRate,
) -> Result<Amount> {
    if input.is_zero() {
        return Err(PoolError::InvalidAmount("swap input must be positive"));
    }
    if input_reserve.is_zero() || output_reserve.is_zero() {
        return Err(PoolError::InsufficientReserve);
    }

    let fee = fee_rate.fee_on(input)?;
    let net = input
        .checked_sub(fee)
        .ok_or(PoolError::Overflow("fee exceeds input"))?;
    if net.is_zero() {
        return Err(PoolError::InvalidAmount("input consumed entirely by fee"));
    }

    let denominator = input_reserve
        .checked_add(net)
        .ok_or(PoolError::Overflow("swap denominator overflow"))?;

    net.mul_div(output_reserve, denominator, Rounding::Down)
        .ok_or(PoolError::Overflow("swap numerator overflow"))
}

/// Computes the asset-A deposit required to match `amount_b` at the
/// current reserve ratio: `floor(amount_b * reserve_a / reserve_b)`.
///
/// Flooring rounds the depositor's A contribution down, which nudges the
/// post-deposit ratio in the pool's favor, never the depositor's.
///
/// # Errors
///
/// - [`PoolError::InvalidAmount`] if `amount_b` is zero.
/// - [`PoolError::InsufficientReserve`] if either reserve is zero.
/// - [`PoolError::Overflow`] if the product overflows `u128`.
pub fn required_deposit(amount_b: Amount, reserve_a: Amount, reserve_b: Amount) -> Result<Amount> {
    if amount_b.is_zero() {
        return Err(PoolError::InvalidAmount("deposit must be positive"));
    }
    if reserve_a.is_zero() || reserve_b.is_zero() {
        return Err(PoolError::InsufficientReserve);
    }
    amount_b
        .mul_div(reserve_a, reserve_b, Rounding::Down)
        .ok_or(PoolError::Overflow("required deposit overflow"))
}

/// Computes the spot price `reserve_x / reserve_y`: the price of asset Y
/// denominated in asset X.
///
/// Quoting only — settlement always goes through [`output_amount`]
/// against the live reserve pair.
///
/// # Errors
///
/// Returns [`PoolError::InsufficientReserve`] if either reserve is zero.
pub fn spot_price(reserve_x: Amount, reserve_y: Amount) -> Result<Price> {
    if reserve_x.is_zero() || reserve_y.is_zero() {
        return Err(PoolError::InsufficientReserve);
    }
    Price::from_reserves(reserve_x, reserve_y)
}

/// Integer square root by Newton's method, rounding down.
///
/// Used for the geometric-mean bootstrap mint.
#[must_use]
pub(crate) const fn isqrt(n: u128) -> u128 {
    if n == 0 {
        return 0;
    }
    let mut x = n;
    let mut y = x.div_ceil(2);
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    x
}
