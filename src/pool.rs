//! The constant-product pool state machine.
//!
//! A [`Pool`] holds two reserves and the share ledger, and cycles between
//! two states: **Empty** (`total_shares == 0`, both reserves zero) and
//! **Funded**. The first deposit funds it and fixes the initial price;
//! removing the last share empties it again, re-establishing the
//! price-free condition.
//!
//! # Writer discipline
//!
//! Every mutating operation takes `&mut self`, so the single-writer rule
//! is enforced by the borrow checker: two mutations cannot observe the
//! same reserves concurrently. Quotes take `&self` and may run against
//! any snapshot. Hosts sharing a pool across threads wrap it in their
//! own exclusive lock.
//!
//! # Atomicity
//!
//! Reserves, `total_shares`, and the share ledger are only written after
//! every external transfer of an operation has succeeded, and they are
//! always written together. A rejected operation mutates nothing; a
//! transfer failure after a partial transfer sequence triggers a
//! compensating transfer before the error is returned.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use crate::config::{BootstrapShares, PoolConfig};
use crate::domain::{
    Amount, Asset, Price, ProviderId, Redemption, Rounding, Shares, SwapDirection, SwapOutcome,
};
use crate::error::{PoolError, Result};
use crate::ledger::AssetLedger;
use crate::math;

/// A two-asset constant-product liquidity pool.
///
/// # Examples
///
/// ```
/// use xyk_pool::config::PoolConfig;
/// use xyk_pool::domain::{Amount, Asset, ProviderId, SwapDirection};
/// use xyk_pool::ledger::InMemoryLedger;
/// use xyk_pool::Pool;
///
/// let mut ledger = InMemoryLedger::new();
/// let alice = ProviderId::from_bytes([1u8; 32]);
/// ledger.mint(Asset::A, &alice, Amount::new(1_000)).unwrap();
/// ledger.mint(Asset::B, &alice, Amount::new(500)).unwrap();
///
/// let mut pool = Pool::new(PoolConfig::default()).unwrap();
/// let shares = pool
///     .add_liquidity(&mut ledger, &alice, Amount::new(1_000), Amount::new(500))
///     .unwrap();
/// assert_eq!(pool.reserve(Asset::A), Amount::new(1_000));
/// assert_eq!(pool.shares_of(&alice), shares);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool {
    config: PoolConfig,
    reserve_a: Amount,
    reserve_b: Amount,
    total_shares: Shares,
    share_of: BTreeMap<ProviderId, Shares>,
}

impl Pool {
    /// Creates an empty pool with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidConfig`] if the configuration fails
    /// validation.
    pub fn new(config: PoolConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            reserve_a: Amount::ZERO,
            reserve_b: Amount::ZERO,
            total_shares: Shares::ZERO,
            share_of: BTreeMap::new(),
        })
    }

    /// The pool configuration.
    #[must_use]
    pub const fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// The current reserve of the given asset.
    #[must_use]
    pub const fn reserve(&self, asset: Asset) -> Amount {
        match asset {
            Asset::A => self.reserve_a,
            Asset::B => self.reserve_b,
        }
    }

    /// Total outstanding liquidity shares.
    #[must_use]
    pub const fn total_shares(&self) -> Shares {
        self.total_shares
    }

    /// The share balance of a provider (zero for unknown providers).
    #[must_use]
    pub fn shares_of(&self, provider: &ProviderId) -> Shares {
        self.share_of.get(provider).copied().unwrap_or(Shares::ZERO)
    }

    /// Returns `true` if the pool holds no liquidity.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total_shares.is_zero()
    }

    /// Deposits liquidity and mints shares to `caller`.
    ///
    /// `amount_b` is the exact asset-B deposit. On the first deposit the
    /// pool also takes exactly `max_amount_a` of asset A — the caller
    /// sets the initial price by choosing the pair of amounts. On a
    /// funded pool the pool takes the ratio-preserving amount
    /// `floor(amount_b * reserve_a / reserve_b)` instead, rejecting the
    /// call if that exceeds `max_amount_a`.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidAmount`] if `amount_b` is zero, the first
    ///   deposit omits asset A, the required asset-A amount exceeds
    ///   `max_amount_a`, or the deposit is too small to mint a share.
    /// - [`PoolError::Transfer`] if the ledger cannot pull either
    ///   deposit; the pool is left unmutated.
    pub fn add_liquidity<L: AssetLedger>(
        &mut self,
        ledger: &mut L,
        caller: &ProviderId,
        max_amount_a: Amount,
        amount_b: Amount,
    ) -> Result<Shares> {
        if amount_b.is_zero() {
            return Err(PoolError::InvalidAmount("supplied amount must be positive"));
        }

        let (amount_a, minted) = if self.is_empty() {
            if max_amount_a.is_zero() {
                return Err(PoolError::InvalidAmount(
                    "first deposit requires both assets",
                ));
            }
            (max_amount_a, self.bootstrap_mint(max_amount_a, amount_b)?)
        } else {
            let required_a = math::required_deposit(amount_b, self.reserve_a, self.reserve_b)?;
            if required_a > max_amount_a {
                return Err(PoolError::InvalidAmount(
                    "required asset A exceeds authorized maximum",
                ));
            }
            let minted = Amount::new(self.total_shares.get())
                .mul_div(amount_b, self.reserve_b, Rounding::Down)
                .ok_or(PoolError::Overflow("share mint overflow"))?;
            if minted.is_zero() {
                return Err(PoolError::InvalidAmount("deposit too small to mint shares"));
            }
            (required_a, Shares::new(minted.get()))
        };

        // Pull both deposits before touching any internal state.
        ledger.transfer_in(Asset::A, caller, amount_a)?;
        if let Err(failed) = ledger.transfer_in(Asset::B, caller, amount_b) {
            // Return the A leg; it was just debited, so the credit back
            // cannot overflow.
            if let Err(rollback) = ledger.transfer_out(Asset::A, caller, amount_a) {
                tracing::error!(error = %rollback, "compensating transfer failed");
            }
            return Err(failed.into());
        }

        let new_reserve_a = self
            .reserve_a
            .checked_add(amount_a)
            .ok_or(PoolError::Overflow("reserve A overflow on deposit"))?;
        let new_reserve_b = self
            .reserve_b
            .checked_add(amount_b)
            .ok_or(PoolError::Overflow("reserve B overflow on deposit"))?;
        let new_total = self
            .total_shares
            .checked_add(minted)
            .ok_or(PoolError::Overflow("total shares overflow"))?;
        let holding = self
            .shares_of(caller)
            .checked_add(minted)
            .ok_or(PoolError::Overflow("provider shares overflow"))?;

        self.reserve_a = new_reserve_a;
        self.reserve_b = new_reserve_b;
        self.total_shares = new_total;
        self.share_of.insert(*caller, holding);

        debug!(
            provider = %caller,
            amount_a = %amount_a,
            amount_b = %amount_b,
            minted = %minted,
            total_shares = %self.total_shares,
            "liquidity added"
        );
        Ok(minted)
    }

    /// Burns `shares` of the caller's holding and returns the
    /// proportional slice of both reserves.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidAmount`] if `shares` is zero.
    /// - [`PoolError::InsufficientShares`] if `shares` exceeds the
    ///   caller's balance.
    /// - [`PoolError::Transfer`] if the ledger cannot deliver either
    ///   asset; the pool is left unmutated.
    pub fn remove_liquidity<L: AssetLedger>(
        &mut self,
        ledger: &mut L,
        caller: &ProviderId,
        shares: Shares,
    ) -> Result<Redemption> {
        if shares.is_zero() {
            return Err(PoolError::InvalidAmount("shares to remove must be positive"));
        }
        let held = self.shares_of(caller);
        if shares > held {
            return Err(PoolError::InsufficientShares {
                requested: shares,
                held,
            });
        }

        let amount_a = shares
            .portion_of(self.reserve_a, self.total_shares, Rounding::Down)
            .ok_or(PoolError::Overflow("redemption A overflow"))?;
        let amount_b = shares
            .portion_of(self.reserve_b, self.total_shares, Rounding::Down)
            .ok_or(PoolError::Overflow("redemption B overflow"))?;

        ledger.transfer_out(Asset::A, caller, amount_a)?;
        if let Err(failed) = ledger.transfer_out(Asset::B, caller, amount_b) {
            // Reclaim the A leg; the caller was just credited, so the
            // debit back cannot lack balance.
            if let Err(rollback) = ledger.transfer_in(Asset::A, caller, amount_a) {
                tracing::error!(error = %rollback, "compensating transfer failed");
            }
            return Err(failed.into());
        }

        // Shares and reserves move together, so redemption stays exactly
        // proportional regardless of what other providers do in between.
        self.reserve_a = self
            .reserve_a
            .checked_sub(amount_a)
            .ok_or(PoolError::Overflow("reserve A underflow on redemption"))?;
        self.reserve_b = self
            .reserve_b
            .checked_sub(amount_b)
            .ok_or(PoolError::Overflow("reserve B underflow on redemption"))?;
        self.total_shares = self
            .total_shares
            .checked_sub(shares)
            .ok_or(PoolError::Overflow("total shares underflow"))?;
        let remaining = held
            .checked_sub(shares)
            .ok_or(PoolError::Overflow("provider shares underflow"))?;
        if remaining.is_zero() {
            self.share_of.remove(caller);
        } else {
            self.share_of.insert(*caller, remaining);
        }

        debug_assert!(
            !self.total_shares.is_zero()
                || (self.reserve_a.is_zero() && self.reserve_b.is_zero()),
            "removing the last share must empty both reserves"
        );

        debug!(
            provider = %caller,
            shares = %shares,
            amount_a = %amount_a,
            amount_b = %amount_b,
            total_shares = %self.total_shares,
            "liquidity removed"
        );
        Ok(Redemption::new(shares, amount_a, amount_b))
    }

    /// Executes a swap: pulls `input` of the direction's input asset,
    /// delivers the constant-product output of the other asset.
    ///
    /// The output is computed against the pre-swap reserves via
    /// [`math::output_amount`]; the full input, fee included, enters the
    /// input reserve, so the reserve product never decreases.
    ///
    /// `min_output` is the caller's slippage guard: the trade is
    /// rejected if the computed output falls below it. Callers quote
    /// first with [`quote_output`](Self::quote_output) and derive the
    /// bound from the quote.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidAmount`] if `input` is zero.
    /// - [`PoolError::InsufficientReserve`] if the pool is empty.
    /// - [`PoolError::SlippageExceeded`] if the output misses
    ///   `min_output`.
    /// - [`PoolError::Transfer`] if the ledger refuses either leg; the
    ///   pool is left unmutated.
    pub fn swap<L: AssetLedger>(
        &mut self,
        ledger: &mut L,
        caller: &ProviderId,
        input: Amount,
        min_output: Amount,
        direction: SwapDirection,
    ) -> Result<SwapOutcome> {
        let asset_in = direction.input_asset();
        let asset_out = direction.output_asset();
        let reserve_in = self.reserve(asset_in);
        let reserve_out = self.reserve(asset_out);

        let output = math::output_amount(input, reserve_in, reserve_out, self.config.fee_rate())?;
        if output < min_output {
            return Err(PoolError::SlippageExceeded {
                min_output,
                actual: output,
            });
        }
        let fee = self.config.fee_rate().fee_on(input)?;

        ledger.transfer_in(asset_in, caller, input)?;
        if let Err(failed) = ledger.transfer_out(asset_out, caller, output) {
            if let Err(rollback) = ledger.transfer_out(asset_in, caller, input) {
                tracing::error!(error = %rollback, "compensating transfer failed");
            }
            return Err(failed.into());
        }

        let new_reserve_in = reserve_in
            .checked_add(input)
            .ok_or(PoolError::Overflow("input reserve overflow on swap"))?;
        let new_reserve_out = reserve_out
            .checked_sub(output)
            .ok_or(PoolError::Overflow("output reserve underflow on swap"))?;
        match asset_in {
            Asset::A => {
                self.reserve_a = new_reserve_in;
                self.reserve_b = new_reserve_out;
            }
            Asset::B => {
                self.reserve_b = new_reserve_in;
                self.reserve_a = new_reserve_out;
            }
        }

        debug!(
            provider = %caller,
            direction = %direction,
            input = %input,
            output = %output,
            fee = %fee,
            "swap executed"
        );
        SwapOutcome::new(direction, input, output, fee)
    }

    /// Quotes the output of a swap against the current reserves without
    /// executing it.
    ///
    /// # Errors
    ///
    /// Same as [`math::output_amount`].
    pub fn quote_output(&self, input: Amount, direction: SwapDirection) -> Result<Amount> {
        let quoted = math::output_amount(
            input,
            self.reserve(direction.input_asset()),
            self.reserve(direction.output_asset()),
            self.config.fee_rate(),
        )?;
        trace!(direction = %direction, input = %input, quoted = %quoted, "quote");
        Ok(quoted)
    }

    /// The spot price of `base`, denominated in the other asset:
    /// `reserve(other) / reserve(base)`.
    ///
    /// Quoting only — never used for settlement.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InsufficientReserve`] if the pool is empty.
    pub fn spot_price(&self, base: Asset) -> Result<Price> {
        math::spot_price(self.reserve(base.other()), self.reserve(base))
    }

    /// The bootstrap share mint for the first deposit, per the
    /// configured convention.
    fn bootstrap_mint(&self, amount_a: Amount, amount_b: Amount) -> Result<Shares> {
        let minted = match self.config.bootstrap() {
            BootstrapShares::AssetA => amount_a.get(),
            BootstrapShares::AssetB => amount_b.get(),
            BootstrapShares::GeometricMean => {
                let product = amount_a
                    .get()
                    .checked_mul(amount_b.get())
                    .ok_or(PoolError::Overflow("bootstrap product overflow"))?;
                math::isqrt(product)
            }
        };
        // Both amounts are positive here, so every convention mints at
        // least one share.
        Ok(Shares::new(minted))
    }
}
