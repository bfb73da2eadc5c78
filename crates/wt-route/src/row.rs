//! Raw upload rows and the column-role mapping.

use rustc_hash::FxHashMap;

/// One raw tabular row: column name → cell value, all strings.
///
/// Produced by whatever ingested the upload (the bundled CSV loader, or an
/// external spreadsheet parser).  Empty cells may be present or absent —
/// both read as "no value".
pub type RawRow = FxHashMap<String, String>;

/// Which columns play which role in the upload.
///
/// `location` and `sku` are mandatory; a route without locations is
/// meaningless and SKU statistics are a first-class output.  The rest are
/// optional with documented fallbacks: no `wave` column groups every row
/// into one synthetic wave, no `time` column substitutes the row's sequence
/// index, no `aisle` column defers to the matched slot's own aisle label.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColumnMapping {
    pub location: String,
    pub sku:      String,
    pub wave:     Option<String>,
    pub time:     Option<String>,
    pub aisle:    Option<String>,
}

impl ColumnMapping {
    pub fn new(location: impl Into<String>, sku: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            sku:      sku.into(),
            wave:     None,
            time:     None,
            aisle:    None,
        }
    }

    pub fn with_wave(mut self, col: impl Into<String>) -> Self {
        self.wave = Some(col.into());
        self
    }

    pub fn with_time(mut self, col: impl Into<String>) -> Self {
        self.time = Some(col.into());
        self
    }

    pub fn with_aisle(mut self, col: impl Into<String>) -> Self {
        self.aisle = Some(col.into());
        self
    }
}

/// Fetch a cell by optional role column; `""` when the role is unmapped or
/// the cell is missing.
pub(crate) fn cell<'a>(row: &'a RawRow, col: &Option<String>) -> &'a str {
    match col {
        Some(c) => row.get(c).map(String::as_str).unwrap_or(""),
        None => "",
    }
}

/// Fetch a cell by mandatory role column.
pub(crate) fn cell_required<'a>(row: &'a RawRow, col: &str) -> &'a str {
    row.get(col).map(String::as_str).unwrap_or("")
}
