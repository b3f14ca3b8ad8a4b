//! Trade direction across the pair.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::Asset;

/// The direction of a swap: which asset goes in and which comes out.
///
/// # Examples
///
/// ```
/// use xyk_pool::domain::{Asset, SwapDirection};
///
/// let dir = SwapDirection::AToB;
/// assert_eq!(dir.input_asset(), Asset::A);
/// assert_eq!(dir.output_asset(), Asset::B);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwapDirection {
    /// Sell asset A, receive asset B.
    AToB,
    /// Sell asset B, receive asset A.
    BToA,
}

impl SwapDirection {
    /// The asset the trader pays into the pool.
    #[must_use]
    pub const fn input_asset(&self) -> Asset {
        match self {
            Self::AToB => Asset::A,
            Self::BToA => Asset::B,
        }
    }

    /// The asset the trader receives from the pool.
    #[must_use]
    pub const fn output_asset(&self) -> Asset {
        self.input_asset().other()
    }

    /// The opposite direction.
    #[must_use]
    pub const fn reversed(&self) -> Self {
        match self {
            Self::AToB => Self::BToA,
            Self::BToA => Self::AToB,
        }
    }
}

impl fmt::Display for SwapDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AToB => write!(f, "A→B"),
            Self::BToA => write!(f, "B→A"),
        }
    }
}
