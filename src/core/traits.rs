//! Core traits for pricing table queries
//!
//! Table lookups are keyed by region. Anything that can name a region can be
//! used to query the table: a caller's [`Locale`], the [`PriceLocale`] of a
//! price already obtained from the table, or a bare [`RegionCode`].

use crate::types::{Locale, PriceLocale, RegionCode};

/// A value that may identify a pricing region
pub trait RegionScoped {
    /// Region code used as the table key, if this value names a region
    fn region_code(&self) -> Option<&RegionCode>;
}

impl RegionScoped for Locale {
    fn region_code(&self) -> Option<&RegionCode> {
        self.region()
    }
}

impl RegionScoped for PriceLocale {
    fn region_code(&self) -> Option<&RegionCode> {
        Some(self.region())
    }
}

impl RegionScoped for RegionCode {
    fn region_code(&self) -> Option<&RegionCode> {
        Some(self)
    }
}
