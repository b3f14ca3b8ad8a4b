//! Raw asset amount with checked arithmetic.

use core::fmt;

use super::Rounding;

/// An asset quantity in the smallest indivisible unit.
///
/// `Amount` is dimensionless: which of the pool's two assets it counts
/// is carried separately by [`Asset`](super::Asset) or
/// [`SwapDirection`](super::SwapDirection). All `u128` values are valid.
///
/// Arithmetic is checked: methods return `None` on overflow, underflow,
/// or division by zero instead of panicking, and the caller converts the
/// `None` into a [`PoolError`](crate::error::PoolError).
///
/// # Examples
///
/// ```
/// use xyk_pool::domain::{Amount, Rounding};
///
/// let reserve = Amount::new(1_000);
/// let input = Amount::new(500);
/// assert_eq!(reserve.checked_add(input), Some(Amount::new(1_500)));
/// assert_eq!(input.mul_div(reserve, Amount::new(400), Rounding::Down), Some(Amount::new(1_250)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
pub struct Amount(u128);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Maximum representable amount.
    pub const MAX: Self = Self(u128::MAX);

    /// Creates an `Amount` from a raw `u128`.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the underlying `u128`.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if the amount is zero.
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

    /// Computes `self * mul / div` with the given rounding direction.
    ///
    /// This is the shape of every pool formula: a product scaled down by
    /// a reserve or share total. Returns `None` if the intermediate
    /// product overflows `u128` or if `div` is zero.
    #[must_use]
    pub const fn mul_div(&self, mul: Self, div: Self, rounding: Rounding) -> Option<Self> {
        if div.0 == 0 {
            return None;
        }
        let product = match self.0.checked_mul(mul.0) {
            Some(v) => v,
            None => return None,
        };
        let quotient = product / div.0;
        match rounding {
            Rounding::Down => Some(Self(quotient)),
            Rounding::Up => {
                if product % div.0 != 0 {
                    // quotient < u128::MAX here because the remainder is
                    // non-zero, so the increment cannot overflow.
                    Some(Self(quotient + 1))
                } else {
                    Some(Self(quotient))
                }
            }
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
