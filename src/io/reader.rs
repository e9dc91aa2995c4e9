//! Pricing matrix file loading
//!
//! The store exports its pricing matrix as `pricing_matrix_YYYYMMDD-HHMMSS.csv`.
//! The timestamp in the file name records when the matrix was generated and
//! is kept next to the parsed table as provenance.
//!
//! ```no_run
//! use tier_pricing::io::reader::read_pricing_matrix;
//! use std::path::Path;
//!
//! let matrix = read_pricing_matrix(Path::new("pricing_matrix_20200605-053929.csv")).unwrap();
//! if let Some(provenance) = &matrix.provenance {
//!     println!("prices generated at {}", provenance.generated_at);
//! }
//! ```

use crate::core::{BuildConfig, PricingTable, PricingTableBuilder};
use crate::types::PricingError;
use chrono::NaiveDateTime;
use serde::Serialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

/// File name prefix used by pricing matrix exports
pub const PRICING_MATRIX_PREFIX: &str = "pricing_matrix_";

const TIMESTAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

/// When a pricing matrix was generated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatrixProvenance {
    pub generated_at: NaiveDateTime,
}

impl MatrixProvenance {
    /// Parse the generation timestamp out of an export file name
    ///
    /// Accepts `pricing_matrix_20200605-053929.csv` with or without the
    /// extension. Other names yield `None`.
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let stem = file_name.strip_suffix(".csv").unwrap_or(file_name);
        let timestamp = stem.strip_prefix(PRICING_MATRIX_PREFIX)?;

        NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT)
            .ok()
            .map(|generated_at| MatrixProvenance { generated_at })
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.file_name()
            .and_then(|name| name.to_str())
            .and_then(Self::from_file_name)
    }
}

/// A pricing table together with the provenance of its source file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricingMatrix {
    pub table: PricingTable,
    pub provenance: Option<MatrixProvenance>,
}

/// Read and build a pricing matrix file with the default configuration
pub fn read_pricing_matrix(path: &Path) -> Result<PricingMatrix, PricingError> {
    read_pricing_matrix_with(path, &BuildConfig::default())
}

/// Read and build a pricing matrix file
///
/// # Errors
///
/// Returns `PricingError::Io` if the file cannot be opened, `PricingError::Csv`
/// if it is not valid UTF-8, and any build error otherwise.
pub fn read_pricing_matrix_with(
    path: &Path,
    config: &BuildConfig,
) -> Result<PricingMatrix, PricingError> {
    let file = File::open(path).map_err(|e| PricingError::io(path, &e))?;

    let table =
        PricingTableBuilder::new(config.clone()).build_from_reader(BufReader::new(file))?;
    let provenance = MatrixProvenance::from_path(path);

    debug!(
        path = %path.display(),
        regions = table.region_count(),
        generated_at = ?provenance.map(|p| p.generated_at),
        "loaded pricing matrix"
    );

    Ok(PricingMatrix { table, provenance })
}
