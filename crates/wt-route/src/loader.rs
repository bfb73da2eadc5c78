//! CSV row loader.
//!
//! Unlike the slot loader, route uploads have no fixed schema — sites name
//! their columns freely and the caller assigns roles afterwards via
//! [`ColumnMapping`](crate::ColumnMapping).  Rows therefore load as plain
//! column→value maps keyed by the header row.

use std::io::Read;
use std::path::Path;

use crate::error::RouteResult;
use crate::row::RawRow;

/// Load raw rows from a CSV file.
pub fn load_rows_csv(path: &Path) -> RouteResult<Vec<RawRow>> {
    let file = std::fs::File::open(path)?;
    load_rows_reader(file)
}

/// Like [`load_rows_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or loading from network
/// streams.
pub fn load_rows_reader<R: Read>(reader: R) -> RouteResult<Vec<RawRow>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let headers: Vec<String> = csv_reader
        .headers()?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for result in csv_reader.records() {
        let record = result?;
        let mut row = RawRow::default();
        for (header, value) in headers.iter().zip(record.iter()) {
            // Empty cells stay absent; both shapes read as "no value".
            if !value.is_empty() {
                row.insert(header.clone(), value.to_string());
            }
        }
        rows.push(row);
    }

    Ok(rows)
}
