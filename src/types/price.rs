//! Priced values stored in the pricing table

use super::locale::PriceLocale;
use rust_decimal::Decimal;
use serde::Serialize;

/// A tier price in a specific region and currency
///
/// The amount is never negative and is kept exactly as written in the
/// pricing matrix (`0.99` keeps its two decimal places).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PricedValue {
    /// Price in the currency of `locale`
    pub amount: Decimal,

    /// Region and currency the amount is denominated in
    pub locale: PriceLocale,
}

impl PricedValue {
    pub fn new(amount: Decimal, locale: PriceLocale) -> Self {
        PricedValue { amount, locale }
    }
}
