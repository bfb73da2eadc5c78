//! CSV slot loader.
//!
//! # CSV format
//!
//! One row per slot.  Header names follow the site-survey export:
//!
//! ```csv
//! location,aisle+bay,aisle,bay,row,column,zone,coord_x_val,coord_y_val
//! ID1111-2550-33,A01-B05,A01,B05,1,5,Z1,1250,300
//! ```
//!
//! Only `location` is required; missing coordinates default to 0 so a
//! partially surveyed map still loads (those slots cluster at the origin
//! rather than failing the upload).

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use wt_core::MapPoint;

use crate::error::LayoutResult;
use crate::slots::Slot;

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct SlotRecord {
    location: String,
    #[serde(rename = "aisle+bay", default)]
    aisle_bay: Option<String>,
    #[serde(default)]
    aisle: Option<String>,
    #[serde(default)]
    bay: Option<String>,
    #[serde(default)]
    row: Option<String>,
    #[serde(default)]
    column: Option<String>,
    #[serde(default)]
    zone: Option<String>,
    #[serde(default)]
    coord_x_val: Option<f32>,
    #[serde(default)]
    coord_y_val: Option<f32>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load slots from a CSV file.
pub fn load_slots_csv(path: &Path) -> LayoutResult<Vec<Slot>> {
    let file = std::fs::File::open(path)?;
    load_slots_reader(file)
}

/// Like [`load_slots_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or loading from network
/// streams.
pub fn load_slots_reader<R: Read>(reader: R) -> LayoutResult<Vec<Slot>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut slots = Vec::new();

    for result in csv_reader.deserialize::<SlotRecord>() {
        let r = result?;
        slots.push(Slot {
            location:  r.location,
            aisle_bay: r.aisle_bay.unwrap_or_default(),
            aisle:     r.aisle.unwrap_or_default(),
            bay:       r.bay.unwrap_or_default(),
            row:       r.row.unwrap_or_default(),
            column:    r.column.unwrap_or_default(),
            zone:      r.zone.unwrap_or_default(),
            pos: MapPoint::new(
                r.coord_x_val.unwrap_or(0.0),
                r.coord_y_val.unwrap_or(0.0),
            ),
        });
    }

    Ok(slots)
}
