//! # xyk-pool
//!
//! A two-asset constant-product liquidity pool: deposit paired reserves
//! for proportional shares, redeem shares for a slice of both reserves,
//! and swap one asset for the other at prices set by the reserve ratio
//! `x * y = k`.
//!
//! The crate is a pure state machine over a host-provided asset ledger.
//! It owns the reserves, the share supply, and the pricing math; moving
//! the actual asset balances is delegated to an [`AssetLedger`]
//! implementation, with [`InMemoryLedger`] provided for in-process use.
//!
//! # Quick Start
//!
//! ```rust
//! use xyk_pool::config::PoolConfig;
//! use xyk_pool::domain::{Amount, Asset, ProviderId, SwapDirection};
//! use xyk_pool::ledger::InMemoryLedger;
//! use xyk_pool::Pool;
//!
//! // 1. A ledger with funded providers
//! let mut ledger = InMemoryLedger::new();
//! let alice = ProviderId::from_bytes([1u8; 32]);
//! let bob = ProviderId::from_bytes([2u8; 32]);
//! ledger.mint(Asset::A, &alice, Amount::new(1_000)).expect("mint");
//! ledger.mint(Asset::B, &alice, Amount::new(4_000)).expect("mint");
//! ledger.mint(Asset::A, &bob, Amount::new(10)).expect("mint");
//!
//! // 2. Bootstrap a pool; the first deposit fixes the price
//! let mut pool = Pool::new(PoolConfig::default()).expect("valid config");
//! pool.add_liquidity(&mut ledger, &alice, Amount::new(1_000), Amount::new(4_000))
//!     .expect("bootstrap");
//!
//! // 3. Quote, then swap with the quote as the slippage bound
//! let quote = pool.quote_output(Amount::new(1), SwapDirection::AToB).expect("quote");
//! let outcome = pool
//!     .swap(&mut ledger, &bob, Amount::new(1), quote, SwapDirection::AToB)
//!     .expect("swap");
//! assert_eq!(outcome.amount_out(), Amount::new(3)); // price impact: not 4
//! ```
//!
//! # Pricing
//!
//! Swaps settle by the constant-product formula with the fee taken from
//! the input before pricing:
//!
//! ```text
//! net = input - fee                      (fee rounds up)
//! out = floor(net * reserve_out / (reserve_in + net))
//! ```
//!
//! Every division rounds in the pool's favor, so the reserve product
//! never decreases across a swap and rounding residue accrues to the
//! share holders. The spot price [`Pool::spot_price`] is a quoting
//! convenience only; settlement always goes through the formula above.
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`Shares`](domain::Shares), [`FeeRate`](domain::FeeRate), [`Price`](domain::Price), etc. |
//! | [`pool`]   | The [`Pool`] state machine: deposits, redemptions, swaps, quotes |
//! | [`ledger`] | The [`AssetLedger`] seam and the [`InMemoryLedger`] implementation |
//! | [`math`]   | Pure pricing functions over raw reserve pairs |
//! | [`config`] | [`PoolConfig`](config::PoolConfig): fee rate and bootstrap share convention |
//! | [`error`]  | [`PoolError`](error::PoolError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types |

pub mod config;
pub mod domain;
pub mod error;
pub mod ledger;
pub mod math;
pub mod pool;
pub mod prelude;

#[cfg(test)]
mod proptest_properties;

pub use crate::error::{PoolError, Result};
pub use crate::ledger::{AssetLedger, InMemoryLedger};
pub use crate::pool::Pool;
