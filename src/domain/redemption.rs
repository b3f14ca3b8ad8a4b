//! Proceeds of a liquidity withdrawal.

use core::fmt;

use super::{Amount, Shares};

/// What a provider received for burning shares: the proportional slice
/// of both reserves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Redemption {
    shares_burned: Shares,
    amount_a: Amount,
    amount_b: Amount,
}

impl Redemption {
    /// Creates a `Redemption` record.
    #[must_use]
    pub const fn new(shares_burned: Shares, amount_a: Amount, amount_b: Amount) -> Self {
        Self {
            shares_burned,
            amount_a,
            amount_b,
        }
    }

    /// Shares removed from circulation.
    #[must_use]
    pub const fn shares_burned(&self) -> Shares {
        self.shares_burned
    }

    /// Asset A returned to the provider.
    pub const fn amount_a(&self) -> Amount {
        self.amount_a
    }

    /// Asset B returned to the provider.
    pub const fn amount_b(&self) -> Amount {
        self.amount_b
    }
}

impl fmt::Display for Redemption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Redemption(shares={}, a={}, b={})",
            self.shares_burned, self.amount_a, self.amount_b
        )
    }
}
