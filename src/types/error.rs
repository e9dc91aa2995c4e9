//! Error types for the tier pricing library
//!
//! Every variant except the lookup helpers describes a build-time failure.
//! Any of them aborts the whole build: there is no partial pricing table.
//!
//! # Error Categories
//!
//! - **Input shape**: too few rows, malformed locale headers
//! - **Content**: unknown regions, unknown tiers, unparseable prices
//! - **Locale**: a header currency that cannot be attached to its region
//! - **I/O**: reading a pricing matrix file or tokenizing its bytes

use thiserror::Error;

/// Main error type for building a pricing table
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    /// The input has fewer than two rows (locale header plus sub-header)
    #[error("Pricing matrix needs at least 2 rows, found {found}")]
    InsufficientRows {
        /// Number of non-blank rows found
        found: usize,
    },

    /// A locale header cell is not of the form `Country Name (CODE)`
    #[error("Malformed locale header in column {column}: '{cell}'")]
    MalformedHeader {
        /// Zero-based column index
        column: usize,
        /// Raw header cell
        cell: String,
    },

    /// The country name of a header has no region code mapping
    #[error("Unknown region '{country}' in column {column}")]
    UnknownRegion {
        /// Zero-based column index
        column: usize,
        /// Trimmed country name taken from the header
        country: String,
    },

    /// A row label is not one of the known price tiers
    #[error("Unknown tier '{label}' at line {line}")]
    UnknownTier {
        /// One-based line number
        line: u64,
        /// Raw label from column 0
        label: String,
    },

    /// A price cell is not a plain decimal such as `0.99`
    #[error("Invalid price '{value}' at line {line}, column {column}")]
    InvalidPrice {
        /// One-based line number
        line: u64,
        /// Zero-based column index
        column: usize,
        /// Price cell after quote stripping
        value: String,
    },

    /// The header currency could not be attached to the region as a price locale
    #[error("Cannot price region {region} in currency '{currency}'")]
    LocaleOverrideUnsupported {
        /// Resolved region code
        region: String,
        /// Currency code as written in the header
        currency: String,
    },

    /// Parsing finished without producing a single region
    #[error("No regions were parsed from the pricing matrix")]
    NoRegionsParsed,

    /// A caller supplied locale identifier could not be parsed
    #[error("Invalid locale identifier '{identifier}'")]
    InvalidLocale {
        /// The rejected identifier
        identifier: String,
    },

    /// The pricing matrix could not be tokenized
    #[error("CSV error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    Csv {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the tokenizer error
        message: String,
    },

    /// The pricing matrix file could not be read
    #[error("I/O error{}: {message}", path.as_ref().map(|p| format!(" reading '{}'", p)).unwrap_or_default())]
    Io {
        /// Path being read (if known)
        path: Option<String>,
        /// Description of the I/O error
        message: String,
    },
}

/// Result alias used throughout the crate
pub type PricingResult<T> = Result<T, PricingError>;

impl From<std::io::Error> for PricingError {
    fn from(error: std::io::Error) -> Self {
        PricingError::Io {
            path: None,
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for PricingError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        PricingError::Csv {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl PricingError {
    /// Create a MalformedHeader error
    pub fn malformed_header(column: usize, cell: &str) -> Self {
        PricingError::MalformedHeader {
            column,
            cell: cell.to_string(),
        }
    }

    /// Create an UnknownRegion error
    pub fn unknown_region(column: usize, country: &str) -> Self {
        PricingError::UnknownRegion {
            column,
            country: country.to_string(),
        }
    }

    /// Create an UnknownTier error
    pub fn unknown_tier(line: u64, label: &str) -> Self {
        PricingError::UnknownTier {
            line,
            label: label.to_string(),
        }
    }

    /// Create an InvalidPrice error
    pub fn invalid_price(line: u64, column: usize, value: &str) -> Self {
        PricingError::InvalidPrice {
            line,
            column,
            value: value.to_string(),
        }
    }

    /// Create a LocaleOverrideUnsupported error
    pub fn locale_override_unsupported(region: &str, currency: &str) -> Self {
        PricingError::LocaleOverrideUnsupported {
            region: region.to_string(),
            currency: currency.to_string(),
        }
    }

    /// Create an InvalidLocale error
    pub fn invalid_locale(identifier: &str) -> Self {
        PricingError::InvalidLocale {
            identifier: identifier.to_string(),
        }
    }

    /// Create an Io error for a specific path
    pub fn io(path: &std::path::Path, error: &std::io::Error) -> Self {
        PricingError::Io {
            path: Some(path.display().to_string()),
            message: error.to_string(),
        }
    }
}
