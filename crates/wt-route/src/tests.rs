//! Unit tests for wt-route.

#[cfg(test)]
mod helpers {
    use wt_core::MapPoint;
    use wt_layout::{Slot, SlotGrid, SlotGridBuilder};

    use crate::row::RawRow;

    pub fn slot(location: &str, aisle_bay: &str, aisle: &str, x: f32, y: f32) -> Slot {
        Slot {
            location: location.to_string(),
            aisle_bay: aisle_bay.to_string(),
            aisle: aisle.to_string(),
            pos: MapPoint::new(x, y),
            ..Slot::default()
        }
    }

    /// A grid exercising all match fallbacks:
    /// - slot-level locations (`Z1-A01-01`, `Z1-A01-02`)
    /// - a bay-level location (`Z1-C03`) for bay-truncated matching
    /// - a label-only slot (`D04+B05`) reachable via `aisle_bay`
    pub fn grid() -> SlotGrid {
        let mut b = SlotGridBuilder::new();
        b.add_slot(slot("Z1-A01-01", "A01+B01", "A01", 0.0, 0.0));
        b.add_slot(slot("Z1-A01-02", "A01+B01", "A01", 0.0, 200.0));
        b.add_slot(slot("Z1-C03", "C03+B01", "C03", 500.0, 0.0));
        b.add_slot(slot("X-LBL-1", "D04+B05", "D04", 700.0, 0.0));
        b.build()
    }

    pub fn row(pairs: &[(&str, &str)]) -> RawRow {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }
}

// ── Timestamp parsing ─────────────────────────────────────────────────────────

#[cfg(test)]
mod time {
    use crate::parse_time_millis;

    #[test]
    fn rfc3339() {
        assert_eq!(parse_time_millis("1970-01-01T00:00:01+00:00"), Some(1_000));
    }

    #[test]
    fn space_separated_datetime_is_utc() {
        assert_eq!(parse_time_millis("1970-01-01 00:01:00"), Some(60_000));
        assert_eq!(parse_time_millis("1970/01/01 00:01:00"), Some(60_000));
    }

    #[test]
    fn bare_date_is_midnight() {
        assert_eq!(parse_time_millis("1970-01-02"), Some(86_400_000));
    }

    #[test]
    fn bare_integer_is_epoch_millis() {
        assert_eq!(parse_time_millis("42"), Some(42));
        assert_eq!(parse_time_millis(" 7 "), Some(7));
    }

    #[test]
    fn garbage_is_none() {
        assert_eq!(parse_time_millis(""), None);
        assert_eq!(parse_time_millis("soon"), None);
        assert_eq!(parse_time_millis("13:45"), None);
    }
}

// ── Wave route construction ───────────────────────────────────────────────────

#[cfg(test)]
mod index {
    use crate::{ColumnMapping, DEFAULT_WAVE_ID, build_wave_routes};

    use super::helpers::{grid, row};

    fn full_mapping() -> ColumnMapping {
        ColumnMapping::new("loc", "sku")
            .with_wave("wave")
            .with_time("time")
            .with_aisle("aisle")
    }

    #[test]
    fn unmatched_rows_dropped_and_counted() {
        let grid = grid();
        let rows = vec![
            row(&[("loc", "Z1-A01-01"), ("sku", "S1"), ("wave", "W1")]),
            row(&[("loc", "NOPE-9-9"), ("sku", "S2"), ("wave", "W1")]),
            row(&[("sku", "S3"), ("wave", "W1")]), // no location at all
        ];
        let set = build_wave_routes(&rows, &full_mapping(), &grid);
        assert_eq!(set.matched(), 1);
        assert_eq!(set.route("W1").unwrap().len(), 1);
    }

    #[test]
    fn empty_waves_are_absent() {
        let grid = grid();
        let rows = vec![row(&[("loc", "NOPE-9-9"), ("sku", "S1"), ("wave", "W1")])];
        let set = build_wave_routes(&rows, &full_mapping(), &grid);
        assert!(set.is_empty());
        assert!(set.route("W1").is_none());
    }

    #[test]
    fn missing_wave_column_uses_default() {
        let grid = grid();
        let mapping = ColumnMapping::new("loc", "sku");
        let rows = vec![row(&[("loc", "Z1-A01-01"), ("sku", "S1")])];
        let set = build_wave_routes(&rows, &mapping, &grid);
        assert_eq!(set.wave_ids().collect::<Vec<_>>(), vec![DEFAULT_WAVE_ID]);
    }

    #[test]
    fn match_fallback_chain() {
        let grid = grid();
        let rows = vec![
            // Exact, but wrong case.
            row(&[("loc", "z1-a01-01"), ("sku", "S"), ("wave", "W")]),
            // Unknown slot number; matches the bay-level location Z1-C03.
            row(&[("loc", "Z1-C03-17"), ("sku", "S"), ("wave", "W")]),
            // Matches only via the aisle+bay label.
            row(&[("loc", "D04+B05"), ("sku", "S"), ("wave", "W")]),
        ];
        let set = build_wave_routes(&rows, &full_mapping(), &grid);
        assert_eq!(set.matched(), 3);
        let route = set.route("W").unwrap();
        assert_eq!(grid.get(route[0].slot).location, "Z1-A01-01");
        assert_eq!(grid.get(route[1].slot).location, "Z1-C03");
        assert_eq!(grid.get(route[2].slot).location, "X-LBL-1");
        // The uploaded location is kept verbatim, not replaced by the match.
        assert_eq!(route[1].location, "Z1-C03-17");
        assert_eq!(route[1].bay_location, "Z1-C03");
    }

    #[test]
    fn aisle_falls_back_to_slot() {
        let grid = grid();
        let rows = vec![
            row(&[("loc", "Z1-A01-01"), ("sku", "S"), ("aisle", "OVERRIDE")]),
            row(&[("loc", "Z1-A01-02"), ("sku", "S")]),
        ];
        let set = build_wave_routes(&rows, &full_mapping(), &grid);
        let route = set.route(DEFAULT_WAVE_ID).unwrap();
        assert_eq!(route[0].aisle, "OVERRIDE");
        assert_eq!(route[1].aisle, "A01");
    }

    #[test]
    fn steps_sorted_by_parsed_time() {
        let grid = grid();
        let rows = vec![
            row(&[("loc", "Z1-A01-02"), ("sku", "S"), ("time", "2024-03-01 09:30:00")]),
            row(&[("loc", "Z1-A01-01"), ("sku", "S"), ("time", "2024-03-01 08:15:00")]),
        ];
        let set = build_wave_routes(&rows, &full_mapping(), &grid);
        let route = set.route(DEFAULT_WAVE_ID).unwrap();
        assert_eq!(route[0].location, "Z1-A01-01");
        assert_eq!(route[1].location, "Z1-A01-02");
    }

    #[test]
    fn unparseable_times_compare_as_strings() {
        let grid = grid();
        let rows = vec![
            row(&[("loc", "Z1-A01-01"), ("sku", "S"), ("time", "banana")]),
            row(&[("loc", "Z1-A01-02"), ("sku", "S"), ("time", "apple")]),
        ];
        let set = build_wave_routes(&rows, &full_mapping(), &grid);
        let route = set.route(DEFAULT_WAVE_ID).unwrap();
        assert_eq!(route[0].time, "apple");
        assert_eq!(route[1].time, "banana");
        // Unparseable steps keep their row index as the effective timestamp.
        assert_eq!(route[0].time_millis, None);
        assert_eq!(route[0].timestamp, 1);
    }

    #[test]
    fn missing_time_column_uses_sequence_index() {
        let grid = grid();
        let mapping = ColumnMapping::new("loc", "sku").with_wave("wave");
        let rows = vec![
            row(&[("loc", "Z1-A01-01"), ("sku", "S"), ("wave", "W")]),
            row(&[("loc", "Z1-A01-02"), ("sku", "S"), ("wave", "W")]),
        ];
        let set = build_wave_routes(&rows, &mapping, &grid);
        let route = set.route("W").unwrap();
        assert_eq!(route[0].timestamp, 0);
        assert_eq!(route[1].timestamp, 1);
        assert_eq!(route[0].time_millis, Some(0));
    }

    #[test]
    fn wave_ids_sorted() {
        let grid = grid();
        let rows = vec![
            row(&[("loc", "Z1-A01-01"), ("sku", "S"), ("wave", "W2")]),
            row(&[("loc", "Z1-A01-01"), ("sku", "S"), ("wave", "W1")]),
        ];
        let set = build_wave_routes(&rows, &full_mapping(), &grid);
        assert_eq!(set.wave_ids().collect::<Vec<_>>(), vec!["W1", "W2"]);
    }
}

// ── Global timeline ───────────────────────────────────────────────────────────

#[cfg(test)]
mod timeline {
    use crate::{ColumnMapping, build_global_timeline, build_wave_routes};

    use super::helpers::{grid, row};

    #[test]
    fn interleaves_by_timestamp_with_deterministic_ties() {
        let grid = grid();
        let mapping = ColumnMapping::new("loc", "sku")
            .with_wave("wave")
            .with_time("time");
        let rows = vec![
            row(&[("loc", "Z1-A01-01"), ("sku", "S"), ("wave", "W2"), ("time", "100")]),
            row(&[("loc", "Z1-A01-01"), ("sku", "S"), ("wave", "W1"), ("time", "200")]),
            row(&[("loc", "Z1-A01-02"), ("sku", "S"), ("wave", "W1"), ("time", "100")]),
        ];
        let set = build_wave_routes(&rows, &mapping, &grid);

        let selected = vec!["W1".to_string(), "W2".to_string()];
        let tl = build_global_timeline(&selected, &set);
        assert_eq!(tl.len(), 3);
        // t=100 tie: W1 before W2 (wave-id order); then W1's t=200.
        assert_eq!((tl[0].wave, tl[0].timestamp), (0, 100));
        assert_eq!((tl[1].wave, tl[1].timestamp), (1, 100));
        assert_eq!((tl[2].wave, tl[2].timestamp), (0, 200));
    }

    #[test]
    fn unknown_waves_contribute_nothing() {
        let grid = grid();
        let mapping = ColumnMapping::new("loc", "sku");
        let set = build_wave_routes(&[], &mapping, &grid);
        let tl = build_global_timeline(&["ghost".to_string()], &set);
        assert!(tl.is_empty());
    }
}

// ── CSV loader ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use crate::load_rows_reader;

    #[test]
    fn header_driven_rows() {
        let csv = "\
wave_no,scan_time,bin,item\n\
W1,2024-03-01 08:00:00,Z1-A01-01,SKU9\n\
W1,,Z1-A01-02,SKU7\n";
        let rows = load_rows_reader(Cursor::new(csv)).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["bin"], "Z1-A01-01");
        assert_eq!(rows[0]["scan_time"], "2024-03-01 08:00:00");
        // Empty cells stay absent.
        assert!(!rows[1].contains_key("scan_time"));
    }
}
