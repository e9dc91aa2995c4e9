//! Tier Pricing Library
//! # Overview
//!
//! This library turns a store pricing matrix CSV into an in-memory table that
//! answers "what does tier X cost in region Y's currency" without re-parsing
//! the matrix on every call.
//!
//! # Architecture
//!
//! The library is organized into several key components:
//!
//! - [`types`] - Value types (Tier, RegionCode, PriceLocale, PricedValue, errors)
//! - [`core`] - Business logic components:
//!   - [`core::region_resolver`] - Country name to region code resolution
//!   - [`core::builder`] - Pricing matrix parsing into a table
//!   - [`core::table`] - Immutable lookup structure and queries
//! - [`io`] - Tokenization, cell formats, file loading and table output
//!
//! # Pricing Matrix Format
//!
//! - Row 0: locale headers at odd columns, `"Country Name (CUR)"`
//! - Row 1: price/proceeds sub-header, ignored
//! - Rows 2..: `<Tier Label>,<price>,<proceeds>,<price>,<proceeds>,...`
//!
//! Prices always use a `.` decimal point without grouping, whatever the
//! currency. A region may be priced in a currency other than its native one
//! (`"Korea, Republic of (USD)"`); the price locale records that currency
//! explicitly.
//!
//! # Failure Policy
//!
//! Building either yields a complete, non-empty table or a single
//! [`PricingError`]. Lookups never fail: a missing region or tier is `None`.

// Module declarations
pub mod core;
pub mod io;
pub mod types;

pub use crate::core::{build, BuildConfig, PricingTable, PricingTableBuilder, RegionScoped};
pub use io::{read_pricing_matrix, write_price_table_csv, MatrixProvenance, PricingMatrix};
pub use types::{
    CurrencyCode, Locale, PriceLocale, PricedValue, PricingError, PricingResult, RegionCode,
    Tier,
};
