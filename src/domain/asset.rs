//! The two sides of the pool's asset pair.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Which of the pool's two assets a quantity or transfer refers to.
///
/// The pool is a singleton per asset pair; within it the assets are only
/// ever "the A side" and "the B side". Binding these labels to concrete
/// instruments is the hosting environment's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Asset {
    /// The first asset of the pair.
    A,
    /// The second asset of the pair.
    B,
}

impl Asset {
    /// Returns the other side of the pair.
    #[must_use]
    pub const fn other(&self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_flips() {
        assert_eq!(Asset::A.other(), Asset::B);
        assert_eq!(Asset::B.other(), Asset::A);
        assert_eq!(Asset::A.other().other(), Asset::A);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Asset::A), "A");
        assert_eq!(format!("{}", Asset::B), "B");
    }
}
