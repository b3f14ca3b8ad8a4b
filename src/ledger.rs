//! External asset-ledger capability.
//!
//! The pool never moves assets itself; it asks a ledger to. The contract
//! is narrow on purpose: `transfer_in` pulls an amount from a provider
//! into the pool's custody, `transfer_out` pushes an amount from custody
//! to a provider, and a failed transfer leaves both sides untouched so
//! the pool can keep its own state consistent.
//!
//! [`InMemoryLedger`] is a complete in-process implementation, suitable
//! for tests, demos, and single-process hosts.

use std::collections::BTreeMap;

use crate::domain::{Amount, Asset, ProviderId};

/// Errors an asset ledger can report.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    /// The source account does not hold the requested amount.
    #[error("insufficient balance: needed {needed}, available {available}")]
    InsufficientBalance {
        /// Amount the transfer required.
        needed: Amount,
        /// Amount actually available.
        available: Amount,
    },

    /// Crediting the destination would overflow its balance.
    #[error("balance overflow on credit")]
    BalanceOverflow,
}

/// A ledger holding balances of both pool assets, able to move them
/// between providers and the pool's own custody.
///
/// # Atomicity contract
///
/// Each call is all-or-nothing: on `Err`, no balance has changed. The
/// pool relies on this to commit its internal reserves only after every
/// transfer of an operation succeeded; hosts with a surrounding
/// transaction boundary satisfy it for free.
pub trait AssetLedger {
    /// Moves `amount` of `asset` from `from` into pool custody.
    ///
    /// A zero `amount` must succeed without effect.
    ///
    /// # Errors
    ///
    /// [`LedgerError::InsufficientBalance`] if `from` holds less than
    /// `amount`.
    fn transfer_in(
        &mut self,
        asset: Asset,
        from: &ProviderId,
        amount: Amount,
    ) -> Result<(), LedgerError>;

    /// Moves `amount` of `asset` from pool custody to `to`.
    ///
    /// A zero `amount` must succeed without effect.
    ///
    /// # Errors
    ///
    /// [`LedgerError::InsufficientBalance`] if custody holds less than
    /// `amount` — with a correct pool this indicates a host-level
    /// accounting bug, not a caller error.
    fn transfer_out(
        &mut self,
        asset: Asset,
        to: &ProviderId,
        amount: Amount,
    ) -> Result<(), LedgerError>;
}

/// In-process ledger backed by balance maps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryLedger {
    balances: BTreeMap<(Asset, ProviderId), Amount>,
    custody_a: Amount,
    custody_b: Amount,
}

impl InMemoryLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Credits a provider's balance, for test and demo setup.
    ///
    /// # Errors
    ///
    /// [`LedgerError::BalanceOverflow`] if the credit overflows.
    pub fn mint(
        &mut self,
        asset: Asset,
        to: &ProviderId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        let entry = self.balances.entry((asset, *to)).or_insert(Amount::ZERO);
        *entry = entry
            .checked_add(amount)
            .ok_or(LedgerError::BalanceOverflow)?;
        Ok(())
    }

    /// A provider's balance of `asset`.
    #[must_use]
    pub fn balance_of(&self, asset: Asset, provider: &ProviderId) -> Amount {
        self.balances
            .get(&(asset, *provider))
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    /// The amount of `asset` held in pool custody.
    #[must_use]
    pub const fn custody(&self, asset: Asset) -> Amount {
        match asset {
            Asset::A => self.custody_a,
            Asset::B => self.custody_b,
        }
    }

    fn custody_mut(&mut self, asset: Asset) -> &mut Amount {
        match asset {
            Asset::A => &mut self.custody_a,
            Asset::B => &mut self.custody_b,
        }
    }
}

impl AssetLedger for InMemoryLedger {
    fn transfer_in(
        &mut self,
        asset: Asset,
        from: &ProviderId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        if amount.is_zero() {
            return Ok(());
        }
        let available = self.balance_of(asset, from);
        let debited = available
            .checked_sub(amount)
            .ok_or(LedgerError::InsufficientBalance {
                needed: amount,
                available,
            })?;
        let credited = self
            .custody(asset)
            .checked_add(amount)
            .ok_or(LedgerError::BalanceOverflow)?;
        self.balances.insert((asset, *from), debited);
        *self.custody_mut(asset) = credited;
        Ok(())
    }

    fn transfer_out(
        &mut self,
        asset: Asset,
        to: &ProviderId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        if amount.is_zero() {
            return Ok(());
        }
        let held = self.custody(asset);
        let debited = held
            .checked_sub(amount)
            .ok_or(LedgerError::InsufficientBalance {
                needed: amount,
                available: held,
            })?;
        let balance = self.balance_of(asset, to);
        let credited = balance
            .checked_add(amount)
            .ok_or(LedgerError::BalanceOverflow)?;
        *self.custody_mut(asset) = debited;
        self.balances.insert((asset, *to), credited);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn alice() -> ProviderId {
        ProviderId::from_bytes([1u8; 32])
    }

    fn funded_ledger() -> InMemoryLedger {
        let mut ledger = InMemoryLedger::new();
        let Ok(()) = ledger.mint(Asset::A, &alice(), Amount::new(1_000)) else {
            panic!("mint A");
        };
        let Ok(()) = ledger.mint(Asset::B, &alice(), Amount::new(500)) else {
            panic!("mint B");
        };
        ledger
    }

    // -- transfer_in --------------------------------------------------------

    #[test]
    fn transfer_in_moves_to_custody() {
        let mut ledger = funded_ledger();
        let Ok(()) = ledger.transfer_in(Asset::A, &alice(), Amount::new(400)) else {
            panic!("expected Ok");
        };
        assert_eq!(ledger.balance_of(Asset::A, &alice()), Amount::new(600));
        assert_eq!(ledger.custody(Asset::A), Amount::new(400));
        // B side untouched
        assert_eq!(ledger.balance_of(Asset::B, &alice()), Amount::new(500));
        assert_eq!(ledger.custody(Asset::B), Amount::ZERO);
    }

    #[test]
    fn transfer_in_insufficient_balance() {
        let mut ledger = funded_ledger();
        let result = ledger.transfer_in(Asset::A, &alice(), Amount::new(1_001));
        assert_eq!(
            result,
            Err(LedgerError::InsufficientBalance {
                needed: Amount::new(1_001),
                available: Amount::new(1_000),
            })
        );
        // all-or-nothing: nothing moved
        assert_eq!(ledger.balance_of(Asset::A, &alice()), Amount::new(1_000));
        assert_eq!(ledger.custody(Asset::A), Amount::ZERO);
    }

    #[test]
    fn transfer_in_zero_is_noop() {
        let mut ledger = funded_ledger();
        let before = ledger.clone();
        let Ok(()) = ledger.transfer_in(Asset::B, &alice(), Amount::ZERO) else {
            panic!("expected Ok");
        };
        assert_eq!(ledger, before);
    }

    // -- transfer_out -------------------------------------------------------

    #[test]
    fn transfer_out_round_trip() {
        let mut ledger = funded_ledger();
        let Ok(()) = ledger.transfer_in(Asset::B, &alice(), Amount::new(500)) else {
            panic!("expected Ok");
        };
        let Ok(()) = ledger.transfer_out(Asset::B, &alice(), Amount::new(200)) else {
            panic!("expected Ok");
        };
        assert_eq!(ledger.balance_of(Asset::B, &alice()), Amount::new(200));
        assert_eq!(ledger.custody(Asset::B), Amount::new(300));
    }

    #[test]
    fn transfer_out_exceeding_custody() {
        let mut ledger = funded_ledger();
        let result = ledger.transfer_out(Asset::A, &alice(), Amount::new(1));
        assert!(matches!(
            result,
            Err(LedgerError::InsufficientBalance { .. })
        ));
    }

    #[test]
    fn unknown_provider_has_zero_balance() {
        let ledger = funded_ledger();
        let stranger = ProviderId::from_bytes([9u8; 32]);
        assert_eq!(ledger.balance_of(Asset::A, &stranger), Amount::ZERO);
    }
}
