//! Core pricing logic module
//!
//! This module contains the table building and lookup components:
//! - `traits` - Region-scoped query abstraction
//! - `region_resolver` - Country name to region code resolution
//! - `builder` - Pricing matrix to pricing table construction
//! - `table` - Immutable pricing table and its queries

pub mod builder;
pub mod region_resolver;
pub mod table;
pub mod traits;

pub use builder::{build, BuildConfig, PricingTableBuilder};
pub use table::{PricingTable, RegionPrices};
pub use traits::RegionScoped;
