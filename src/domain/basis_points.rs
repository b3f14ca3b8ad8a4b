//! Basis-point representation for percentages.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{Amount, Rounding};
use crate::error::{PoolError, Result};

/// Denominator representing 100%.
const MAX_BPS: u32 = 10_000;

/// A percentage expressed in basis points (1 bp = 0.01%, 10 000 bp = 100%).
///
/// Any `u32` constructs, but values above 10 000 are nonsensical as
/// percentages; [`is_valid_percent`](Self::is_valid_percent) checks the
/// range and [`FeeRate`](super::FeeRate) enforces it.
///
/// # Examples
///
/// ```
/// use xyk_pool::domain::BasisPoints;
///
/// let bp = BasisPoints::new(100); // 1%
/// assert!(bp.is_valid_percent());
/// assert_eq!(bp.get(), 100);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BasisPoints(u32);

impl BasisPoints {
    /// Zero basis points (0%).
    pub const ZERO: Self = Self(0);

    /// 100% expressed in basis points.
    pub const MAX_PERCENT: Self = Self(MAX_BPS);

    /// Creates a `BasisPoints` from a raw `u32`.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the underlying `u32`.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Returns `true` if the value is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if the value is in the valid percentage range
    /// (`0..=10_000`).
    #[must_use]
    pub const fn is_valid_percent(&self) -> bool {
        self.0 <= MAX_BPS
    }

    /// Computes `amount * self / 10_000` with explicit rounding.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Overflow`] if the intermediate product
    /// overflows `u128`.
    pub const fn apply(&self, amount: Amount, rounding: Rounding) -> Result<Amount> {
        match amount.mul_div(
            Amount::new(self.0 as u128),
            Amount::new(MAX_BPS as u128),
            rounding,
        ) {
            Some(v) => Ok(v),
            None => Err(PoolError::Overflow("basis points apply overflow")),
        }
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0)
    }
}
