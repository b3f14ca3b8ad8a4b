//! Spot-price ratio between the two reserves.

use core::fmt;

use super::Amount;
use crate::error::{PoolError, Result};

/// A spot price: the instantaneous exchange ratio implied by the current
/// reserves, as a finite non-negative `f64`.
///
/// Prices are for **quoting only**. Settlement always goes through the
/// integer pricing formula in [`math`](crate::math) against the live
/// reserve pair, so a quote can never be replayed against stale state.
///
/// # Examples
///
/// ```
/// use xyk_pool::domain::{Amount, Price};
///
/// let price = Price::from_reserves(Amount::new(1_000), Amount::new(1_000)).unwrap();
/// assert_eq!(price.get(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Price(f64);

impl Price {
    /// Unit price (equal reserves).
    pub const ONE: Self = Self(1.0);

    /// Creates a `Price` from a raw `f64`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidPrice`] if the value is negative,
    /// NaN, or infinite.
    pub fn new(value: f64) -> Result<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(PoolError::InvalidPrice(
                "price must be finite and non-negative",
            ));
        }
        Ok(Self(value))
    }

    /// Returns the underlying `f64`.
    #[must_use]
    pub const fn get(&self) -> f64 {
        self.0
    }

    /// Computes `reserve_x / reserve_y` — the price of asset Y
    /// denominated in asset X.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::DivisionByZero`] if `reserve_y` is zero.
    pub fn from_reserves(reserve_x: Amount, reserve_y: Amount) -> Result<Self> {
        if reserve_y.is_zero() {
            return Err(PoolError::DivisionByZero);
        }
        #[allow(clippy::cast_precision_loss)]
        let ratio = reserve_x.get() as f64 / reserve_y.get() as f64;
        Self::new(ratio)
    }

    /// The reciprocal price (`1 / self`).
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::DivisionByZero`] if the price is zero.
    pub fn inverse(&self) -> Result<Self> {
        if self.0 == 0.0 {
            return Err(PoolError::DivisionByZero);
        }
        Self::new(1.0 / self.0)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
