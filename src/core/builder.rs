//! Pricing table builder
//!
//! This module turns pricing matrix text into a [`PricingTable`] in a single
//! pass. The matrix layout is fixed by the store's export format:
//!
//! ```text
//! ,"United States (USD)",,"Korea, Republic of (USD)",...   <- row 0: locale headers
//! ,"Price","Proceeds","Price","Proceeds",...                <- row 1: sub-header (ignored)
//! Free,"0.00","0.00","0.00","0.00",...                      <- rows 2..: one per tier
//! Tier 1,"0.99","0.70","0.99","0.64",...
//! ```
//!
//! Odd columns of the header name a region and the currency its prices are
//! in; the tier rows carry the price for that region in the same column.
//! Even columns hold developer proceeds and are never read.
//!
//! Any error aborts the whole build. There is no partial table.

use crate::core::region_resolver;
use crate::core::table::{PricingTable, RegionPrices};
use crate::io::csv_format::{parse_locale_header, parse_price};
use crate::io::tokenizer::{tokenize, tokenize_reader, MatrixRow};
use crate::types::{CurrencyCode, PriceLocale, PricedValue, PricingError, RegionCode, Tier};
use std::collections::BTreeMap;
use std::io::Read;
use tracing::{debug, info, warn};

/// Index of the locale header row
const HEADER_ROW: usize = 0;

/// Index of the first tier row (row 1 is the proceeds/price sub-header)
const FIRST_TIER_ROW: usize = 2;

/// Configuration for building pricing tables
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildConfig {
    /// Language tag attached to every constructed price locale
    pub language: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            language: PriceLocale::DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl BuildConfig {
    /// Create a new BuildConfig with a custom language tag
    ///
    /// The language must be two or three ASCII letters; anything else falls
    /// back to the default with a warning.
    pub fn new(language: &str) -> Self {
        let default = Self::default();

        let valid = (2..=3).contains(&language.len())
            && language.bytes().all(|b| b.is_ascii_alphabetic());

        let language = if valid {
            language.to_ascii_lowercase()
        } else {
            warn!(
                language,
                default = %default.language,
                "invalid price locale language, using default"
            );
            default.language
        };

        Self { language }
    }
}

/// Builds pricing tables from pricing matrix text
#[derive(Clone, Debug, Default)]
pub struct PricingTableBuilder {
    config: BuildConfig,
}

impl PricingTableBuilder {
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Build a pricing table from pricing matrix text
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input has fewer than two rows
    /// - A locale header is malformed or names an unknown country
    /// - A row label is not a known tier
    /// - A price is not a plain decimal
    /// - A header currency cannot be attached to its region
    /// - No region could be parsed
    pub fn build(&self, csv_text: &str) -> Result<PricingTable, PricingError> {
        let rows = tokenize(csv_text)?;
        self.build_from_rows(&rows)
    }

    /// Build a pricing table from a reader yielding pricing matrix bytes
    pub fn build_from_reader<R: Read>(&self, reader: R) -> Result<PricingTable, PricingError> {
        let rows = tokenize_reader(reader)?;
        self.build_from_rows(&rows)
    }

    fn build_from_rows(&self, rows: &[MatrixRow]) -> Result<PricingTable, PricingError> {
        if rows.len() < FIRST_TIER_ROW {
            return Err(PricingError::InsufficientRows { found: rows.len() });
        }

        let header = &rows[HEADER_ROW];
        let tier_rows = &rows[FIRST_TIER_ROW..];
        let mut regions: BTreeMap<RegionCode, RegionPrices> = BTreeMap::new();

        for column in (1..header.len()).step_by(2) {
            let (region, prices) =
                self.parse_region_column(column, header.cell(column), tier_rows)?;

            if prices.is_empty() {
                debug!(column, region = %region, "region column has no tier prices");
                continue;
            }

            debug!(
                column,
                region = %region,
                tiers = prices.len(),
                "parsed region column"
            );

            if regions.insert(region.clone(), prices).is_some() {
                warn!(column, region = %region, "region repeated in header, keeping last column");
            }
        }

        if regions.is_empty() {
            return Err(PricingError::NoRegionsParsed);
        }

        info!(
            regions = regions.len(),
            tier_rows = tier_rows.len(),
            "built pricing table"
        );

        Ok(PricingTable::from_regions(regions))
    }

    /// Parse the header and every tier price of one region column
    fn parse_region_column(
        &self,
        column: usize,
        header_cell: &str,
        tier_rows: &[MatrixRow],
    ) -> Result<(RegionCode, RegionPrices), PricingError> {
        let header = parse_locale_header(column, header_cell)?;

        let region = region_resolver::resolve(&header.country)
            .ok_or_else(|| PricingError::unknown_region(column, &header.country))?;

        let locale = self.price_locale(&region, &header.currency)?;

        let mut prices = RegionPrices::new();
        for row in tier_rows {
            let label = row.cell(0);
            let tier =
                Tier::from_label(label).ok_or_else(|| PricingError::unknown_tier(row.line, label))?;
            let amount = parse_price(row.line, column, row.cell(column))?;

            prices.insert(tier, PricedValue::new(amount, locale.clone()));
        }

        Ok((region, prices))
    }

    /// Attach the header currency to the region, overriding its native currency
    fn price_locale(
        &self,
        region: &RegionCode,
        currency: &str,
    ) -> Result<PriceLocale, PricingError> {
        let currency_code = CurrencyCode::new(currency).ok_or_else(|| {
            PricingError::locale_override_unsupported(region.as_str(), currency)
        })?;

        Ok(PriceLocale::new(
            &self.config.language,
            region.clone(),
            currency_code,
        ))
    }
}

/// Build a pricing table with the default configuration
pub fn build(csv_text: &str) -> Result<PricingTable, PricingError> {
    PricingTableBuilder::default().build(csv_text)
}
