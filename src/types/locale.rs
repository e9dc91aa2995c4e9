//! Region, currency and locale value types
//!
//! A price is denominated in a [`PriceLocale`], an explicit
//! `(language, region, currency)` triple. Storing the currency next to the
//! region is what allows a region to be priced in a currency other than its
//! native one (for example Korea priced in USD).
//!
//! Callers query the table with a [`Locale`] parsed from a POSIX or BCP 47
//! identifier such as `en_US` or `fr-FR`.

use crate::types::PricingError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Two-letter region code (`US`, `FR`, `KR`, ...)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct RegionCode(String);

impl RegionCode {
    /// Create a region code from two ASCII letters, normalised to uppercase
    pub fn new(code: &str) -> Option<Self> {
        let code = code.trim();
        if code.len() == 2 && code.bytes().all(|b| b.is_ascii_alphabetic()) {
            Some(RegionCode(code.to_ascii_uppercase()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Three-letter currency code (`USD`, `EUR`, `CNY`, ...)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Create a currency code from three ASCII letters, normalised to uppercase
    pub fn new(code: &str) -> Option<Self> {
        let code = code.trim();
        if code.len() == 3 && code.bytes().all(|b| b.is_ascii_alphabetic()) {
            Some(CurrencyCode(code.to_ascii_uppercase()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_language_subtag(subtag: &str) -> bool {
    (2..=3).contains(&subtag.len()) && subtag.bytes().all(|b| b.is_ascii_alphabetic())
}

/// Locale a price is denominated in
///
/// Always carries a language tag; the language does not influence the price
/// but keeps the identifier a complete locale.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PriceLocale {
    language: String,
    region: RegionCode,
    currency: CurrencyCode,
}

impl PriceLocale {
    /// Language used when none is configured
    pub const DEFAULT_LANGUAGE: &'static str = "en";

    /// Create a price locale
    ///
    /// A language that is not two or three ASCII letters is replaced by
    /// [`Self::DEFAULT_LANGUAGE`] with a warning.
    pub fn new(language: &str, region: RegionCode, currency: CurrencyCode) -> Self {
        let language = if is_language_subtag(language) {
            language.to_ascii_lowercase()
        } else {
            warn!(
                language,
                region = %region,
                default = Self::DEFAULT_LANGUAGE,
                "invalid price locale language, using default"
            );
            Self::DEFAULT_LANGUAGE.to_string()
        };

        PriceLocale {
            language,
            region,
            currency,
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn region(&self) -> &RegionCode {
        &self.region
    }

    pub fn currency(&self) -> &CurrencyCode {
        &self.currency
    }

    /// Locale identifier with an explicit currency keyword, e.g. `en_KR@currency=USD`
    pub fn identifier(&self) -> String {
        format!(
            "{}_{}@currency={}",
            self.language, self.region, self.currency
        )
    }
}

impl fmt::Display for PriceLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.identifier())
    }
}

/// Caller side locale, parsed from identifiers like `en_US`, `fr-FR` or `zh_Hant_TW`
///
/// Only the language and the region are kept. Encodings (`.UTF-8`), keywords
/// (`@currency=EUR`), scripts and variants are accepted and dropped. A numeric
/// region (`es-419`) is not a two-letter region and leaves the region empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Locale {
    language: String,
    region: Option<RegionCode>,
}

impl Locale {
    pub fn parse(identifier: &str) -> Result<Self, PricingError> {
        let base = identifier
            .trim()
            .split(['@', '.'])
            .next()
            .unwrap_or_default();

        let mut subtags = base.split(['_', '-']);
        let language = subtags
            .next()
            .filter(|subtag| is_language_subtag(subtag))
            .ok_or_else(|| PricingError::invalid_locale(identifier))?
            .to_ascii_lowercase();

        let region = subtags
            .take(2)
            .find(|subtag| subtag.len() != 4)
            .and_then(RegionCode::new);

        Ok(Locale { language, region })
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn region(&self) -> Option<&RegionCode> {
        self.region.as_ref()
    }
}

impl FromStr for Locale {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::parse(s)
    }
}

impl From<&PriceLocale> for Locale {
    fn from(price_locale: &PriceLocale) -> Self {
        Locale {
            language: price_locale.language.clone(),
            region: Some(price_locale.region.clone()),
        }
    }
}
