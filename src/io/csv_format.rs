//! Pricing matrix cell formats and table output
//!
//! This module centralizes the cell-level format concerns:
//! - Locale header cells of the form `Country Name (CODE)`
//! - Price cells, always written with a `.` decimal point and no grouping
//! - CSV serialization of a built pricing table
//!
//! All parsing functions are pure (no I/O) for easy testing.

use crate::core::PricingTable;
use crate::types::PricingError;
use regex::Regex;
use rust_decimal::Decimal;
use std::io::Write;
use std::str::FromStr;
use std::sync::LazyLock;

static LOCALE_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([^()]+)\((\w+)\)").expect("locale header pattern is a valid regex")
});

/// Country name and currency code taken from a locale header cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleHeader {
    pub country: String,
    pub currency: String,
}

/// Parse a locale header cell such as `Korea, Republic of (USD)`
///
/// Surrounding quote characters are stripped. The cell must then contain
/// exactly one `Name (CODE)` occurrence and the name must not be blank.
pub fn parse_locale_header(column: usize, cell: &str) -> Result<LocaleHeader, PricingError> {
    let text = cell.trim().trim_matches('"');
    let mut matches = LOCALE_HEADER.captures_iter(text);

    let captures = match (matches.next(), matches.next()) {
        (Some(captures), None) => captures,
        _ => return Err(PricingError::malformed_header(column, cell)),
    };

    let country = captures.get(1).map(|m| m.as_str().trim()).unwrap_or_default();
    let currency = captures.get(2).map(|m| m.as_str().trim()).unwrap_or_default();

    if country.is_empty() || currency.is_empty() {
        return Err(PricingError::malformed_header(column, cell));
    }

    Ok(LocaleHeader {
        country: country.to_string(),
        currency: currency.to_string(),
    })
}

/// Parse a price cell under the fixed `0.99` convention
///
/// Surrounding quote characters are stripped. Only ASCII digits with at most
/// one decimal point are accepted: no sign, no grouping separators, no
/// exponent, no comma decimal separator.
pub fn parse_price(line: u64, column: usize, raw: &str) -> Result<Decimal, PricingError> {
    let value = raw.trim().trim_matches('"').trim();

    let digits = value.bytes().filter(u8::is_ascii_digit).count();
    let points = value.bytes().filter(|b| *b == b'.').count();
    if digits == 0 || points > 1 || digits + points != value.len() {
        return Err(PricingError::invalid_price(line, column, value));
    }

    Decimal::from_str(value).map_err(|_| PricingError::invalid_price(line, column, value))
}

/// Write a pricing table in CSV format
///
/// Writes rows with columns: region, tier, currency, price.
/// Rows are sorted by region code, then from the cheapest tier up, so the
/// output is deterministic.
pub fn write_price_table_csv(
    table: &PricingTable,
    output: &mut dyn Write,
) -> Result<(), PricingError> {
    use csv::Writer;

    let mut writer = Writer::from_writer(output);

    writer.write_record(["region", "tier", "currency", "price"])?;

    for (region, prices) in table.iter() {
        for (tier, priced) in prices {
            let amount = priced.amount.to_string();
            writer.write_record([
                region.as_str(),
                tier.label(),
                priced.locale.currency().as_str(),
                amount.as_str(),
            ])?;
        }
    }

    writer.flush()?;

    Ok(())
}
