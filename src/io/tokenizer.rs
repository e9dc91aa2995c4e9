//! Quote-aware row tokenizer for pricing matrices
//!
//! Country names in the locale header can contain commas
//! (`"Korea, Republic of (USD)"`), so rows cannot be split on every comma.
//! The tokenizer delegates to `csv::Reader`, which only splits on commas
//! outside double-quoted spans and strips the quotes from quoted cells.
//!
//! # Configuration
//!
//! The reader is configured to:
//! - Treat every row as data (`has_headers(false)`), the builder interprets the header rows
//! - Allow rows of different lengths (the sub-header and tier rows may be shorter)
//! - Trim whitespace from all cells
//!
//! `csv` only opens a quoted cell when the quote is the first byte of the
//! field, so spaces and tabs between a separator and an opening quote are
//! removed before the reader sees the input. ` "Korea, Republic of (USD)"`
//! stays one cell.
//!
//! Blank lines are not rows.

use crate::types::PricingError;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::io::Read;

/// One tokenized row of a pricing matrix
#[derive(Debug, Clone)]
pub struct MatrixRow {
    /// One-based line number the row starts on
    pub line: u64,
    cells: StringRecord,
}

impl MatrixRow {
    /// Cell at `column`, or an empty string when the row is shorter
    pub fn cell(&self, column: usize) -> &str {
        self.cells.get(column).unwrap_or_default()
    }

    /// Number of cells in this row
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Tokenize pricing matrix text into rows
pub fn tokenize(input: &str) -> Result<Vec<MatrixRow>, PricingError> {
    tokenize_reader(input.as_bytes())
}

/// Tokenize a pricing matrix from any reader
///
/// Fails with `PricingError::Io` when reading fails and `PricingError::Csv`
/// when the input is not valid UTF-8.
pub fn tokenize_reader<R: Read>(mut reader: R) -> Result<Vec<MatrixRow>, PricingError> {
    let mut input = Vec::new();
    reader.read_to_end(&mut input)?;
    let input = strip_padding_before_quotes(&input);

    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(input.as_slice());

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let cells = record?;
        let line = cells
            .position()
            .map(|pos| pos.line())
            .unwrap_or(rows.len() as u64 + 1);
        rows.push(MatrixRow { line, cells });
    }

    Ok(rows)
}

/// Drop spaces and tabs that sit between a field start and an opening quote
///
/// Only ASCII bytes are inspected or removed, so UTF-8 sequences pass through
/// untouched and line breaks keep their positions.
fn strip_padding_before_quotes(input: &[u8]) -> Vec<u8> {
    let mut output = Vec::with_capacity(input.len());
    let mut in_quotes = false;
    let mut field_start = true;
    let mut i = 0;

    while i < input.len() {
        let byte = input[i];

        if in_quotes {
            if byte == b'"' {
                // "" is an escaped quote inside a quoted cell
                if input.get(i + 1) == Some(&b'"') {
                    output.extend_from_slice(b"\"\"");
                    i += 2;
                    continue;
                }
                in_quotes = false;
            }
            output.push(byte);
            i += 1;
            continue;
        }

        match byte {
            b' ' | b'\t' if field_start => {
                let padding = input[i..]
                    .iter()
                    .take_while(|b| matches!(b, b' ' | b'\t'))
                    .count();
                if input.get(i + padding) != Some(&b'"') {
                    output.extend_from_slice(&input[i..i + padding]);
                    field_start = false;
                }
                i += padding;
                continue;
            }
            b',' | b'\n' | b'\r' => field_start = true,
            b'"' if field_start => {
                in_quotes = true;
                field_start = false;
            }
            _ => field_start = false,
        }

        output.push(byte);
        i += 1;
    }

    output
}
