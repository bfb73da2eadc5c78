//! Unit tests for wt-layout.
//!
//! All tests use a hand-crafted slot layout so they run without any map file.

#[cfg(test)]
mod helpers {
    use wt_core::MapPoint;

    use crate::{AisleGraph, Slot, SlotGrid, SlotGridBuilder};

    pub fn slot(location: &str, aisle: &str, x: f32, y: f32) -> Slot {
        Slot {
            location: location.to_string(),
            aisle_bay: format!("{aisle}+B01"),
            aisle: aisle.to_string(),
            pos: MapPoint::new(x, y),
            ..Slot::default()
        }
    }

    /// Two rack pairs split by one wide gap.
    ///
    /// Distinct xs: {0, 10, 200, 210} — the 190-unit gap exceeds the
    /// vertical threshold (60), so the derived vertical lines are
    /// `[-100, 105, 310]` (boundary, interior midpoint, boundary).
    ///
    /// Distinct ys: {0, 400} — the 400-unit gap meets the horizontal
    /// threshold (320), so the horizontal lines are `[-200, 200, 600]`.
    pub fn rack_grid() -> (SlotGrid, AisleGraph) {
        let mut b = SlotGridBuilder::new();
        b.add_slot(slot("Z1-A1-01", "A1", 0.0, 0.0));
        b.add_slot(slot("Z1-A1-02", "A1", 0.0, 400.0));
        b.add_slot(slot("Z1-A2-01", "A2", 10.0, 0.0));
        b.add_slot(slot("Z1-A3-01", "A3", 200.0, 0.0));
        b.add_slot(slot("Z1-A4-01", "A4", 210.0, 0.0));
        b.add_slot(slot("Z1-A4-02", "A4", 210.0, 400.0));
        let grid = b.build();
        let graph = AisleGraph::detect(&grid);
        (grid, graph)
    }
}

// ── SlotGrid ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod grid {
    use crate::SlotGridBuilder;

    use super::helpers::{rack_grid, slot};

    #[test]
    fn empty_build() {
        let grid = SlotGridBuilder::new().build();
        assert_eq!(grid.len(), 0);
        assert!(grid.is_empty());
        assert!(grid.distinct_xs().is_empty());
    }

    #[test]
    fn distinct_coords_sorted_deduped() {
        let (grid, _) = rack_grid();
        assert_eq!(grid.distinct_xs(), &[0.0, 10.0, 200.0, 210.0]);
        assert_eq!(grid.distinct_ys(), &[0.0, 400.0]);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let (grid, _) = rack_grid();
        let id = grid.lookup_location("z1-a1-01").unwrap();
        assert_eq!(grid.get(id).location, "Z1-A1-01");
        assert_eq!(grid.lookup_label("a1+b01"), Some(id));
        assert!(grid.lookup_location("nope").is_none());
    }

    #[test]
    fn duplicate_identifier_keeps_first() {
        let mut b = SlotGridBuilder::new();
        let first = b.add_slot(slot("DUP-1-1", "A1", 0.0, 0.0));
        b.add_slot(slot("DUP-1-1", "A2", 100.0, 0.0));
        let grid = b.build();
        assert_eq!(grid.lookup_location("DUP-1-1"), Some(first));
    }

    #[test]
    fn strict_between_excludes_endpoints() {
        let (grid, _) = rack_grid();
        assert!(grid.any_x_strictly_between(0.0, 105.0)); // 10 blocks
        assert!(!grid.any_x_strictly_between(10.0, 105.0));
        assert!(!grid.any_x_strictly_between(-100.0, 0.0)); // 0 is an endpoint
        assert!(!grid.any_x_strictly_between(200.0, 210.0));
    }
}

// ── Aisle detection ───────────────────────────────────────────────────────────

#[cfg(test)]
mod aisles {
    use crate::{AisleGraph, SlotGrid, SlotGridBuilder};

    use super::helpers::{rack_grid, slot};

    #[test]
    fn interior_and_boundary_lines() {
        // xs {0, 10, 200, 210}, threshold 60 → exactly one interior vertical
        // aisle at the 10..200 midpoint, plus the two boundary aisles.
        let (_, graph) = rack_grid();
        assert_eq!(graph.vertical, vec![-100.0, 105.0, 310.0]);
        assert_eq!(graph.horizontal, vec![-200.0, 200.0, 600.0]);
    }

    #[test]
    fn lines_sorted_ascending() {
        let (_, graph) = rack_grid();
        assert!(graph.vertical.windows(2).all(|w| w[0] < w[1]));
        assert!(graph.horizontal.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn single_coordinate_gives_boundaries_only() {
        let mut b = SlotGridBuilder::new();
        b.add_slot(slot("Z-1-1", "A1", 50.0, 50.0));
        let graph = AisleGraph::detect(&b.build());
        assert_eq!(graph.vertical, vec![-50.0, 150.0]);
        assert_eq!(graph.horizontal, vec![-150.0, 250.0]);
    }

    #[test]
    fn zero_slots_gives_empty_graph() {
        let graph = AisleGraph::detect(&SlotGrid::empty());
        assert!(graph.is_empty());
    }

    #[test]
    fn horizontal_threshold_is_inclusive() {
        // A y-gap of exactly 320 counts as a cross-aisle; 319 does not.
        let mut b = SlotGridBuilder::new();
        b.add_slot(slot("Z-1-1", "A1", 0.0, 0.0));
        b.add_slot(slot("Z-1-2", "A1", 0.0, 320.0));
        let graph = AisleGraph::detect(&b.build());
        assert_eq!(graph.horizontal, vec![-200.0, 160.0, 520.0]);

        let mut b = SlotGridBuilder::new();
        b.add_slot(slot("Z-1-1", "A1", 0.0, 0.0));
        b.add_slot(slot("Z-1-2", "A1", 0.0, 319.0));
        let graph = AisleGraph::detect(&b.build());
        assert_eq!(graph.horizontal, vec![-200.0, 519.0]);
    }
}

// ── Path finding ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod path {
    use wt_core::MapPoint;

    use crate::{AisleGraph, AislePathFinder, PathModel, SlotGrid, path_length_units};

    use super::helpers::{rack_grid, slot};

    #[test]
    fn coincident_slots_yield_empty_path() {
        let (grid, graph) = rack_grid();
        let a = slot("X-1-1", "A1", 100.0, 100.0);
        let b = slot("X-1-2", "A1", 100.5, 100.9);
        let path = AislePathFinder.aisle_path(&a, &b, &graph, &grid);
        assert!(path.is_empty());
        // Length still includes the (tiny) final hop.
        let d = AislePathFinder.segment_units(&a, &b, &graph, &grid);
        assert!(d < 2.0);
    }

    #[test]
    fn obstructed_aisle_is_skipped() {
        let (grid, graph) = rack_grid();
        // x=0: the interior aisle at 105 is blocked by the column at x=10,
        // so the boundary aisle at -100 wins despite being farther than a
        // blocked line would be.
        let a = slot("X-1-1", "A1", 0.0, 0.0);
        assert_eq!(AislePathFinder.accessible_vertical(&a, &graph, &grid), Some(0));
        // x=10: the boundary at -100 is blocked by the column at x=0; the
        // interior aisle at 105 is clear.
        let b = slot("X-1-2", "A2", 10.0, 0.0);
        assert_eq!(AislePathFinder.accessible_vertical(&b, &graph, &grid), Some(1));
    }

    #[test]
    fn same_aisle_two_waypoints() {
        let (grid, graph) = rack_grid();
        let a = slot("X-1-1", "A4", 210.0, 0.0);
        let b = slot("X-1-2", "A4", 210.0, 400.0);
        let path = AislePathFinder.aisle_path(&a, &b, &graph, &grid);
        assert_eq!(
            path,
            vec![MapPoint::new(310.0, 0.0), MapPoint::new(310.0, 400.0)]
        );
    }

    #[test]
    fn cross_aisle_four_waypoints() {
        let (grid, graph) = rack_grid();
        // x=200 resolves to the aisle at 105, x=210 to the boundary at 310;
        // crossing at the horizontal aisle y=200 (inside 0..400).
        let a = slot("X-1-1", "A3", 200.0, 0.0);
        let b = slot("X-1-2", "A4", 210.0, 400.0);
        let path = AislePathFinder.aisle_path(&a, &b, &graph, &grid);
        assert_eq!(
            path,
            vec![
                MapPoint::new(105.0, 0.0),
                MapPoint::new(105.0, 200.0),
                MapPoint::new(310.0, 200.0),
                MapPoint::new(310.0, 400.0),
            ]
        );
    }

    #[test]
    fn path_length_symmetric() {
        // Travel A→B and B→A must measure identically (same aisle choices
        // per endpoint, same crossing interval).
        let (grid, graph) = rack_grid();
        let a = slot("X-1-1", "A1", 0.0, 0.0);
        let b = slot("X-1-2", "A4", 210.0, 400.0);
        let there = AislePathFinder.segment_units(&a, &b, &graph, &grid);
        let back = AislePathFinder.segment_units(&b, &a, &graph, &grid);
        assert_eq!(there, back);
    }

    #[test]
    fn crossing_prefers_line_inside_interval() {
        let (_, graph) = rack_grid();
        assert_eq!(AislePathFinder.best_horizontal(0.0, 400.0, &graph), 200.0);
        // No line inside 250..300 — nearest to the midpoint 275 is 200.
        assert_eq!(AislePathFinder.best_horizontal(250.0, 300.0, &graph), 200.0);
    }

    #[test]
    fn empty_graph_degrades_to_direct_travel() {
        let grid = SlotGrid::empty();
        let graph = AisleGraph::default();
        let a = slot("X-1-1", "A1", 0.0, 0.0);
        let b = slot("X-1-2", "A2", 30.0, 40.0);
        let path = AislePathFinder.aisle_path(&a, &b, &graph, &grid);
        // Slots' own columns stand in for aisles; length is plain Manhattan.
        let d = path_length_units(a.pos, &path, b.pos);
        assert_eq!(d, 70.0);
    }
}

// ── CSV loader ────────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "csv"))]
mod loader {
    use std::io::Cursor;

    use crate::load_slots_reader;

    #[test]
    fn loads_and_defaults_missing_coords() {
        let csv = "\
location,aisle+bay,aisle,bay,row,column,zone,coord_x_val,coord_y_val\n\
ID1-100-01,A01+B01,A01,B01,1,1,Z1,1250,300\n\
ID1-100-02,A01+B01,A01,B01,1,2,Z1,,\n";
        let slots = load_slots_reader(Cursor::new(csv)).unwrap();
        assert_eq!(slots.len(), 2);
        assert_eq!(slots[0].pos.x, 1250.0);
        assert_eq!(slots[1].pos.x, 0.0);
        assert_eq!(slots[1].pos.y, 0.0);
        assert_eq!(slots[0].aisle_bay, "A01+B01");
    }
}
