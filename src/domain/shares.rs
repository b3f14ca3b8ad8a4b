//! Liquidity-share units.

use core::fmt;

use super::{Amount, Rounding};

/// A quantity of liquidity shares — proportional ownership of the pool's
/// combined reserves.
///
/// Distinct from [`Amount`] because shares measure a fraction of the
/// pool, not a quantity of either asset. A holder of `s` shares out of
/// `total` redeems `reserve * s / total` of each reserve, floor-rounded.
///
/// # Examples
///
/// ```
/// use xyk_pool::domain::Shares;
///
/// let a = Shares::new(1_000);
/// let b = Shares::new(200);
/// assert_eq!(a.checked_add(b), Some(Shares::new(1_200)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
pub struct Shares(u128);

impl Shares {
    /// No shares.
    pub const ZERO: Self = Self(0);

    /// Creates a `Shares` from a raw `u128`.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the underlying `u128`.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if zero shares.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_add(&self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub const fn checked_sub(&self, other: Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Scales a reserve by this holding's fraction of `total`:
    /// `reserve * self / total`.
    ///
    /// Returns `None` if `total` is zero or the product overflows.
    #[must_use]
    pub const fn portion_of(
        &self,
        reserve: Amount,
        total: Shares,
        rounding: Rounding,
    ) -> Option<Amount> {
        reserve.mul_div(Amount::new(self.0), Amount::new(total.0), rounding)
    }
}

impl fmt::Display for Shares {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
