//! Outcome of an executed swap.

use core::fmt;

use super::{Amount, Price, SwapDirection};
use crate::error::{PoolError, Result};

/// The settled result of a swap: what went in, what came out, and the
/// fee retained by the pool.
///
/// # Invariants
///
/// - `amount_in > 0` — zero-input swaps are rejected before execution.
/// - `fee <= amount_in` — the fee is a fraction of the input.
/// - `amount_out` may be zero: a dust-sized input can floor to nothing,
///   and it is the caller's `min_output` guard that decides whether that
///   is acceptable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapOutcome {
    direction: SwapDirection,
    amount_in: Amount,
    amount_out: Amount,
    fee: Amount,
}

impl SwapOutcome {
    /// Creates a validated `SwapOutcome`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidAmount`] if `amount_in` is zero or
    /// `fee` exceeds `amount_in`.
    pub const fn new(
        direction: SwapDirection,
        amount_in: Amount,
        amount_out: Amount,
        fee: Amount,
    ) -> Result<Self> {
        if amount_in.is_zero() {
            return Err(PoolError::InvalidAmount("amount_in must be positive"));
        }
        if fee.get() > amount_in.get() {
            return Err(PoolError::InvalidAmount("fee cannot exceed amount_in"));
        }
        Ok(Self {
            direction,
            amount_in,
            amount_out,
            fee,
        })
    }

    /// The trade direction.
    #[must_use]
    pub const fn direction(&self) -> SwapDirection {
        self.direction
    }

    /// The input amount, fee included.
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// The output amount delivered to the trader.
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }

    /// The fee retained in the input reserve.
    pub const fn fee(&self) -> Amount {
        self.fee
    }

    /// The realized price, `amount_out / amount_in`.
    ///
    /// # Errors
    ///
    /// Never fails for a validated outcome; the signature matches
    /// [`Price::from_reserves`].
    pub fn effective_price(&self) -> Result<Price> {
        Price::from_reserves(self.amount_out, self.amount_in)
    }
}

impl fmt::Display for SwapOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Swap({} in={}, out={}, fee={})",
            self.direction, self.amount_in, self.amount_out, self.fee
        )
    }
}
