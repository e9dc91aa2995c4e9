//! Pricing table
//!
//! This module provides the `PricingTable` struct, the immutable lookup
//! structure produced by the builder.
//!
//! The table is responsible for:
//! - Answering `(tier, locale)` price queries
//! - Finding the tier a known price belongs to
//! - Listing regions and their tier prices in a deterministic order
//!
//! Lookups never fail: a locale without a region, an unknown region or a
//! tier missing from the matrix all yield `None`.

use crate::core::builder;
use crate::core::traits::RegionScoped;
use crate::types::{PricedValue, PricingError, RegionCode, Tier};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

/// Tier prices of a single region, cheapest tier first
pub type RegionPrices = BTreeMap<Tier, PricedValue>;

/// Immutable `region → tier → price` lookup
///
/// Never empty. Once built the table has no write path, so it can be shared
/// between threads without synchronization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PricingTable {
    regions: BTreeMap<RegionCode, RegionPrices>,
}

impl PricingTable {
    pub(crate) fn from_regions(regions: BTreeMap<RegionCode, RegionPrices>) -> Self {
        PricingTable { regions }
    }

    /// Build a table from pricing matrix text with the default configuration
    pub fn from_csv_str(csv_text: &str) -> Result<Self, PricingError> {
        builder::build(csv_text)
    }

    /// Price of `tier` in the region of `locale`
    ///
    /// # Examples
    ///
    /// ```
    /// use tier_pricing::{Locale, PricingTable, Tier};
    ///
    /// let csv = ",\"United States (USD)\"\n,\"Price\"\nFree,\"0.00\"\nTier 1,\"0.99\"\n";
    /// let table = PricingTable::from_csv_str(csv).unwrap();
    ///
    /// let locale = Locale::parse("en_US").unwrap();
    /// let price = table.get_price(Tier::Tier1, &locale).unwrap();
    /// assert_eq!(price.amount.to_string(), "0.99");
    /// assert_eq!(price.locale.currency().as_str(), "USD");
    /// ```
    pub fn get_price<L>(&self, tier: Tier, locale: &L) -> Option<&PricedValue>
    where
        L: RegionScoped + ?Sized,
    {
        self.get_price_in_region(tier, locale.region_code()?)
    }

    /// Price of `tier` in `region`
    pub fn get_price_in_region(&self, tier: Tier, region: &RegionCode) -> Option<&PricedValue> {
        self.regions.get(region)?.get(&tier)
    }

    /// Every tier price of the region of `locale`
    pub fn prices_for<L>(&self, locale: &L) -> Option<&RegionPrices>
    where
        L: RegionScoped + ?Sized,
    {
        self.regions.get(locale.region_code()?)
    }

    /// Lowest tier priced at exactly `amount` in the region of `locale`
    pub fn find_tier<L>(&self, amount: Decimal, locale: &L) -> Option<Tier>
    where
        L: RegionScoped + ?Sized,
    {
        self.prices_for(locale)?
            .iter()
            .find(|(_, priced)| priced.amount == amount)
            .map(|(tier, _)| *tier)
    }

    /// Price in `to` of the tier that costs `amount` in `from`
    ///
    /// This matches tiers, it does not convert currencies: an amount that is
    /// not exactly a tier price in `from` yields `None`.
    pub fn equivalent_price<F, T>(&self, amount: Decimal, from: &F, to: &T) -> Option<&PricedValue>
    where
        F: RegionScoped + ?Sized,
        T: RegionScoped + ?Sized,
    {
        let tier = self.find_tier(amount, from)?;
        self.get_price(tier, to)
    }

    pub fn contains_region(&self, region: &RegionCode) -> bool {
        self.regions.contains_key(region)
    }

    /// Region codes in ascending order
    pub fn regions(&self) -> impl Iterator<Item = &RegionCode> {
        self.regions.keys()
    }

    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    /// Regions and their tier prices, ordered by region code
    pub fn iter(&self) -> impl Iterator<Item = (&RegionCode, &RegionPrices)> {
        self.regions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Locale, PriceLocale};
    use rstest::{fixture, rstest};

    #[fixture]
    fn table() -> PricingTable {
        let csv = ",\"United States (USD)\",,\"Korea, Republic of (USD)\",,\"Japan (JPY)\"\n\
                   ,\"Price\",\"Proceeds\",\"Price\",\"Proceeds\",\"Price\",\"Proceeds\"\n\
                   Free,\"0.00\",\"0.00\",\"0.00\",\"0.00\",\"0\",\"0\"\n\
                   Tier 1,\"0.99\",\"0.70\",\"0.99\",\"0.64\",\"120\",\"85\"\n\
                   Tier 2,\"1.99\",\"1.40\",\"1.99\",\"1.27\",\"250\",\"177\"\n";
        PricingTable::from_csv_str(csv).unwrap()
    }

    fn locale(identifier: &str) -> Locale {
        Locale::parse(identifier).unwrap()
    }

    fn region(code: &str) -> RegionCode {
        RegionCode::new(code).unwrap()
    }

    #[rstest]
    #[case::unknown_region(Tier::Tier1, "fr_FR")]
    #[case::no_region(Tier::Tier1, "en")]
    #[case::tier_not_in_matrix(Tier::Tier3, "en_US")]
    fn test_get_price_absent(table: PricingTable, #[case] tier: Tier, #[case] identifier: &str) {
        assert_eq!(table.get_price(tier, &locale(identifier)), None);
    }

    #[rstest]
    fn test_get_price_by_region_code(table: PricingTable) {
        let price = table.get_price(Tier::Tier2, &region("JP")).unwrap();
        assert_eq!(price.amount, Decimal::new(250, 0));
        assert_eq!(price.locale.currency().as_str(), "JPY");
    }

    #[rstest]
    fn test_get_price_by_price_locale(table: PricingTable) {
        let korea: PriceLocale = table
            .get_price(Tier::Free, &region("KR"))
            .unwrap()
            .locale
            .clone();

        let price = table.get_price(Tier::Tier2, &korea).unwrap();
        assert_eq!(price.amount, Decimal::new(199, 2));
        assert_eq!(price.locale.currency().as_str(), "USD");
    }

    #[rstest]
    fn test_regions_sorted(table: PricingTable) {
        let regions: Vec<&str> = table.regions().map(RegionCode::as_str).collect();
        assert_eq!(regions, vec!["JP", "KR", "US"]);
        assert_eq!(table.region_count(), 3);
        assert!(table.contains_region(&region("KR")));
        assert!(!table.contains_region(&region("FR")));
    }

    #[rstest]
    fn test_prices_for_lists_tiers_in_order(table: PricingTable) {
        let tiers: Vec<Tier> = table
            .prices_for(&locale("ko_KR"))
            .unwrap()
            .keys()
            .copied()
            .collect();
        assert_eq!(tiers, vec![Tier::Free, Tier::Tier1, Tier::Tier2]);
    }

    #[rstest]
    #[case(Decimal::new(99, 2), "en_US", Some(Tier::Tier1))]
    #[case(Decimal::new(199, 2), "ko_KR", Some(Tier::Tier2))]
    #[case(Decimal::new(120, 0), "ja_JP", Some(Tier::Tier1))]
    #[case(Decimal::ZERO, "ja_JP", Some(Tier::Free))]
    #[case(Decimal::new(100, 2), "en_US", None)]
    #[case(Decimal::new(99, 2), "fr_FR", None)]
    fn test_find_tier(
        table: PricingTable,
        #[case] amount: Decimal,
        #[case] identifier: &str,
        #[case] expected: Option<Tier>,
    ) {
        assert_eq!(table.find_tier(amount, &locale(identifier)), expected);
    }

    #[rstest]
    fn test_equivalent_price(table: PricingTable) {
        let price = table
            .equivalent_price(Decimal::new(199, 2), &locale("en_US"), &locale("ja_JP"))
            .unwrap();
        assert_eq!(price.amount, Decimal::new(250, 0));
        assert_eq!(price.locale.region().as_str(), "JP");

        assert_eq!(
            table.equivalent_price(Decimal::new(5, 0), &locale("en_US"), &locale("ja_JP")),
            None
        );
    }

    #[rstest]
    fn test_serializes_as_nested_maps(table: PricingTable) {
        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json["US"]["Tier 1"]["amount"], "0.99");
        assert_eq!(json["KR"]["Tier 1"]["locale"]["currency"], "USD");
        assert_eq!(json["JP"]["Free"]["locale"]["region"], "JP");
    }

    #[test]
    fn test_table_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PricingTable>();
    }
}
