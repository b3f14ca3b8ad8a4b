//! Fundamental domain value types.
//!
//! Newtypes with validated constructors and checked arithmetic: amounts,
//! shares, fee rates, identities, and the small result structs returned
//! by pool operations. Every division takes an explicit
//! [`Rounding`] so the direction of precision loss is visible where it
//! happens.

mod amount;
mod asset;
mod basis_points;
mod fee_rate;
mod price;
mod provider;
mod redemption;
mod rounding;
mod shares;
mod swap_direction;
mod swap_outcome;

pub use amount::Amount;
pub use asset::Asset;
pub use basis_points::BasisPoints;
pub use fee_rate::FeeRate;
pub use price::Price;
pub use provider::ProviderId;
pub use redemption::Redemption;
pub use rounding::Rounding;
pub use shares::Shares;
pub use swap_direction::SwapDirection;
pub use swap_outcome::SwapOutcome;
