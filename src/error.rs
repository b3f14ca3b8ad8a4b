//! Unified error types for the pool library.
//!
//! Every fallible operation in the crate returns [`PoolError`], so a host
//! embedding the pool handles one error surface. All variants are
//! caller-correctable: a rejected operation performs no partial mutation,
//! and the pool never retries internally.

use crate::domain::{Amount, Shares};
use crate::ledger::LedgerError;

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, PoolError>;

/// Errors produced by pool operations.
///
/// The first five variants map one-to-one onto the operation
/// preconditions; [`PoolError::Overflow`] and
/// [`PoolError::DivisionByZero`] cover checked-arithmetic failures that
/// should be unreachable for realistic reserve sizes but are propagated
/// rather than panicked on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    /// A zero quantity was supplied where a positive one is required, or
    /// a requested amount is outside the range the caller authorized.
    #[error("invalid amount: {0}")]
    InvalidAmount(&'static str),

    /// A liquidity withdrawal asked for more shares than the caller holds.
    #[error("insufficient shares: requested {requested}, held {held}")]
    InsufficientShares {
        /// Shares the caller tried to redeem.
        requested: Shares,
        /// Shares the caller actually holds.
        held: Shares,
    },

    /// An operation that needs a reserve ratio ran against an empty pool.
    #[error("insufficient reserve: pool holds no liquidity")]
    InsufficientReserve,

    /// The computed swap output fell below the caller's minimum.
    #[error("slippage exceeded: output {actual} below minimum {min_output}")]
    SlippageExceeded {
        /// Caller-supplied minimum acceptable output.
        min_output: Amount,
        /// Output the pool would actually deliver.
        actual: Amount,
    },

    /// The external asset ledger refused a transfer.
    #[error("transfer failed: {0}")]
    Transfer(#[from] LedgerError),

    /// Checked arithmetic overflowed or underflowed.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// A divisor was zero.
    #[error("division by zero")]
    DivisionByZero,

    /// A price value was negative, NaN, or infinite.
    #[error("invalid price: {0}")]
    InvalidPrice(&'static str),

    /// The pool configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
}
