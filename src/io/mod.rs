//! I/O module
//!
//! Handles pricing matrix tokenization, cell formats and output.
//!
//! # Components
//!
//! - `tokenizer` - Quote-aware splitting of matrix text into rows
//! - `csv_format` - Locale header and price cell parsing, table serialization
//! - `reader` - Loading pricing matrix files with their provenance

pub mod csv_format;
pub mod reader;
pub mod tokenizer;

pub use csv_format::{parse_locale_header, parse_price, write_price_table_csv, LocaleHeader};
pub use reader::{read_pricing_matrix, read_pricing_matrix_with, MatrixProvenance, PricingMatrix};
pub use tokenizer::{tokenize, tokenize_reader, MatrixRow};
