//! Convenience re-exports for common types.
//!
//! The prelude provides a single import to bring all commonly used items
//! into scope:
//!
//! ```rust
//! use xyk_pool::prelude::*;
//! ```

// Re-export domain types
pub use crate::domain::{
    Amount, Asset, BasisPoints, FeeRate, Price, ProviderId, Redemption, Rounding, Shares,
    SwapDirection, SwapOutcome,
};

// Re-export the pool and the ledger seam
pub use crate::ledger::{AssetLedger, InMemoryLedger, LedgerError};
pub use crate::pool::Pool;

// Re-export configuration
pub use crate::config::{BootstrapShares, PoolConfig};

// Re-export error types
pub use crate::error::{PoolError, Result};
