//! Pool configuration.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::FeeRate;
use crate::error::{PoolError, Result};

/// How many shares the first deposit mints.
///
/// The proportional mint for every later deposit is derived from the
/// reserve ratio, but the bootstrap scale is a free choice — any fixed
/// convention works as long as it is applied consistently. All three
/// conventions in circulation are offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BootstrapShares {
    /// Shares equal the asset-A amount of the first deposit. The
    /// convention of the classic single-pair exchange (shares scale
    /// with the ether side).
    #[default]
    AssetA,
    /// Shares equal the asset-B amount of the first deposit.
    AssetB,
    /// Shares equal `floor(sqrt(amount_a * amount_b))`, making the
    /// bootstrap scale symmetric in the two assets.
    GeometricMean,
}

impl fmt::Display for BootstrapShares {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AssetA => write!(f, "asset-a"),
            Self::AssetB => write!(f, "asset-b"),
            Self::GeometricMean => write!(f, "geometric-mean"),
        }
    }
}

/// Immutable parameters of a pool.
///
/// A pool is born empty — reserves arrive with the first deposit — so
/// the configuration carries only the pricing and accounting knobs.
///
/// # Examples
///
/// ```
/// use xyk_pool::config::PoolConfig;
/// use xyk_pool::domain::FeeRate;
///
/// let no_fee = PoolConfig::default();
/// assert!(no_fee.fee_rate().is_zero());
///
/// let with_fee = PoolConfig::new(FeeRate::ONE_PERCENT, Default::default()).unwrap();
/// assert_eq!(with_fee.fee_rate(), FeeRate::ONE_PERCENT);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PoolConfig {
    #[serde(default)]
    fee_rate: FeeRate,
    #[serde(default)]
    bootstrap: BootstrapShares,
}

impl PoolConfig {
    /// Creates a validated `PoolConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidConfig`] if the fee rate is out of
    /// range.
    pub const fn new(fee_rate: FeeRate, bootstrap: BootstrapShares) -> Result<Self> {
        let config = Self {
            fee_rate,
            bootstrap,
        };
        match config.validate() {
            Ok(()) => Ok(config),
            Err(e) => Err(e),
        }
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidConfig`] if the fee rate reaches
    /// 100%. Deserialized configs should be validated before use, since
    /// serde bypasses the checked constructor.
    pub const fn validate(&self) -> Result<()> {
        if self.fee_rate.basis_points().get() >= 10_000 {
            return Err(PoolError::InvalidConfig("fee rate must be below 100%"));
        }
        Ok(())
    }

    /// The trading fee charged on swap inputs.
    #[must_use]
    pub const fn fee_rate(&self) -> FeeRate {
        self.fee_rate
    }

    /// The bootstrap share-minting convention.
    #[must_use]
    pub const fn bootstrap(&self) -> BootstrapShares {
        self.bootstrap
    }
}
