//! Trading-fee rate applied to swap inputs.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{Amount, BasisPoints, Rounding};
use crate::error::{PoolError, Result};

/// The trading fee charged on swaps, as a fraction of the input amount.
///
/// Wraps [`BasisPoints`] restricted to the valid percentage range. The
/// fee is deducted from the input **before** the pricing formula runs
/// and stays in the input reserve, so with a non-zero rate the reserve
/// product strictly increases on every swap.
///
/// Defaults to [`FeeRate::ZERO`]: whether a pool charges a fee at all is
/// a deployment decision, not a property of the mechanism.
///
/// # Examples
///
/// ```
/// use xyk_pool::domain::{BasisPoints, FeeRate};
///
/// let fee = FeeRate::new(BasisPoints::new(100)).unwrap(); // 1%
/// assert_eq!(fee.basis_points().get(), 100);
/// assert!(FeeRate::default().is_zero());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct FeeRate(BasisPoints);

impl FeeRate {
    /// No trading fee.
    pub const ZERO: Self = Self(BasisPoints::ZERO);

    /// 1% fee, the rate the classic single-pair exchange charged.
    pub const ONE_PERCENT: Self = Self(BasisPoints::new(100));

    /// Creates a `FeeRate` from basis points.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidConfig`] if the rate is 100% or more:
    /// a fee that consumes the whole input makes every swap degenerate.
    pub const fn new(basis_points: BasisPoints) -> Result<Self> {
        if basis_points.get() >= BasisPoints::MAX_PERCENT.get() {
            return Err(PoolError::InvalidConfig("fee rate must be below 100%"));
        }
        Ok(Self(basis_points))
    }

    /// Returns the underlying [`BasisPoints`].
    #[must_use]
    pub const fn basis_points(&self) -> BasisPoints {
        self.0
    }

    /// Returns `true` if no fee is charged.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Computes the fee owed on a swap input, rounded up in the pool's
    /// favor.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Overflow`] if the intermediate product
    /// overflows.
    pub const fn fee_on(&self, input: Amount) -> Result<Amount> {
        self.0.apply(input, Rounding::Up)
    }
}

impl fmt::Display for FeeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FeeRate({})", self.0)
    }
}
