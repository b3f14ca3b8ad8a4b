//! Explicit rounding direction for integer division.

/// Rounding direction applied when a division truncates.
///
/// Every division in this crate takes an explicit `Rounding` so that the
/// direction of precision loss is visible at the call site. Pool
/// arithmetic rounds in the pool's favor: amounts leaving the pool round
/// [`Down`](Rounding::Down), amounts owed to the pool round
/// [`Up`](Rounding::Up).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Round towards positive infinity (ceiling).
    Up,
    /// Round towards zero (floor).
    Down,
}

impl Rounding {
    /// Returns `true` if this is [`Rounding::Up`].
    #[must_use]
    pub const fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }

    /// Returns `true` if this is [`Rounding::Down`].
    #[must_use]
    pub const fn is_down(&self) -> bool {
        matches!(self, Self::Down)
    }
}
