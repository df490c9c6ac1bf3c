//! Transaction loading from headerless CSV/TSV files

use anyhow::Context;
use std::fs;
use std::path::Path;

/// Load transactions from a headerless delimited file.
///
/// Each row is one transaction; cells are item labels. Rows may be ragged
/// (different cell counts) and cells may be blank where a spreadsheet export
/// padded short rows — blanks are dropped, as are rows left empty after that.
///
/// The delimiter is sniffed from the first line: tab-separated if it contains
/// tabs and no commas, comma-separated otherwise. A file with no usable rows
/// yields an empty transaction list, which flows through the pipeline as an
/// empty result rather than an error.
pub fn load_transactions<P: AsRef<Path>>(path: P) -> crate::Result<Vec<Vec<String>>> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file: {}", path.display()))?;

    let delimiter = sniff_delimiter(&raw);
    parse_transactions(&raw, delimiter)
        .with_context(|| format!("Failed to parse input file: {}", path.display()))
}

/// Pick tab only when the first non-empty line looks tab-separated.
fn sniff_delimiter(raw: &str) -> u8 {
    match raw.lines().find(|line| !line.trim().is_empty()) {
        Some(line) if line.contains('\t') && !line.contains(',') => b'\t',
        _ => b',',
    }
}

fn parse_transactions(raw: &str, delimiter: u8) -> crate::Result<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(raw.as_bytes());

    let mut transactions = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("Malformed record at line {}", line + 1))?;
        let transaction: Vec<String> = record
            .iter()
            .map(str::trim)
            .filter(|cell| !cell.is_empty())
            .map(String::from)
            .collect();
        if !transaction.is_empty() {
            transactions.push(transaction);
        }
    }

    Ok(transactions)
}
