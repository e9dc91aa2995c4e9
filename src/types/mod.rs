//! Types module
//!
//! Contains the value types shared by the builder and the pricing table:
//! - `tier`: the closed set of price tiers
//! - `locale`: region codes, currency codes and locales
//! - `price`: priced values stored in the table
//! - `error`: error types for building a pricing table

pub mod error;
pub mod locale;
pub mod price;
pub mod tier;

pub use error::{PricingError, PricingResult};
pub use locale::{CurrencyCode, Locale, PriceLocale, RegionCode};
pub use price::PricedValue;
pub use tier::{Tier, UnknownTierLabel};
