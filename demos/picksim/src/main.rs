//! picksim — smallest end-to-end example for the wavetrace workspace.
//!
//! Analyzes two picking waves over a synthetic 12-slot warehouse: builds the
//! slot grid and aisle graph, indexes the wave routes, then prints per-wave
//! metrics, the selection-wide efficiency bundle, and the heatmap/SKU/hourly
//! summaries.  Swap the inline CSVs for real exports to run at site scale.

use std::io::Cursor;

use anyhow::Result;

use wt_analytics::{
    AnalysisContext, EnhancedMetrics, HeatmapAccumulator, MetricsSweep, SelectionAnalysis,
    SkuStats, abnormal_waves, hourly_pick_counts, ideal_distance_m,
};
use wt_core::format_duration;
use wt_layout::{AisleGraph, AislePathFinder, SlotGridBuilder, load_slots_reader};
use wt_route::{ColumnMapping, build_global_timeline, build_wave_routes, load_rows_reader};

// ── Inline fixture data ───────────────────────────────────────────────────────

// Three rack columns (x = 0, 400, 800), four levels each, one wide cross
// aisle between y=300 and y=700.
const SLOTS_CSV: &str = "\
location,aisle+bay,aisle,bay,row,column,zone,coord_x_val,coord_y_val\n\
Z1-A01-01,A01+B01,A01,B01,1,1,Z1,0,0\n\
Z1-A01-02,A01+B01,A01,B01,2,1,Z1,0,100\n\
Z1-A01-03,A01+B02,A01,B02,3,1,Z1,0,700\n\
Z1-A01-04,A01+B02,A01,B02,4,1,Z1,0,800\n\
Z1-A02-01,A02+B01,A02,B01,1,2,Z1,400,0\n\
Z1-A02-02,A02+B01,A02,B01,2,2,Z1,400,100\n\
Z1-A02-03,A02+B02,A02,B02,3,2,Z1,400,700\n\
Z1-A02-04,A02+B02,A02,B02,4,2,Z1,400,800\n\
Z1-A03-01,A03+B01,A03,B01,1,3,Z1,800,0\n\
Z1-A03-02,A03+B01,A03,B01,2,3,Z1,800,100\n\
Z1-A03-03,A03+B02,A03,B02,3,3,Z1,800,700\n\
Z1-A03-04,A03+B02,A03,B02,4,3,Z1,800,800\n";

// Wave W1 backtracks to its first slot; wave W2 is a clean sweep.
const ROUTES_CSV: &str = "\
wave_no,scan_time,bin,item\n\
W1,2024-03-01 08:00:00,Z1-A01-01,SKU-RED\n\
W1,2024-03-01 08:03:30,Z1-A02-01,SKU-BLUE\n\
W1,2024-03-01 08:06:10,Z1-A02-03,SKU-RED\n\
W1,2024-03-01 08:11:45,Z1-A01-01,SKU-GREEN\n\
W2,2024-03-01 09:15:00,Z1-A03-01,SKU-BLUE\n\
W2,2024-03-01 09:17:20,Z1-A03-02,SKU-BLUE\n\
W2,2024-03-01 09:21:05,Z1-A03-04,SKU-RED\n";

fn main() -> Result<()> {
    // ── Load geometry and routes ──────────────────────────────────────────
    let mut builder = SlotGridBuilder::new();
    for slot in load_slots_reader(Cursor::new(SLOTS_CSV))? {
        builder.add_slot(slot);
    }
    let grid = builder.build();
    let graph = AisleGraph::detect(&grid);
    println!(
        "grid: {} slots, {} vertical / {} horizontal aisles",
        grid.len(),
        graph.vertical.len(),
        graph.horizontal.len()
    );

    let rows = load_rows_reader(Cursor::new(ROUTES_CSV))?;
    let mapping = ColumnMapping::new("bin", "item")
        .with_wave("wave_no")
        .with_time("scan_time");
    let set = build_wave_routes(&rows, &mapping, &grid);
    println!("routes: {} rows matched, {} waves", set.matched(), set.wave_count());

    let selected: Vec<String> = set.wave_ids().map(String::from).collect();
    let path = AislePathFinder;
    let ctx = AnalysisContext::new(&grid, &graph, &path);

    // ── Per-wave metrics ──────────────────────────────────────────────────
    let mut sweep = MetricsSweep::new(&selected);
    sweep.run_to_end(&ctx, &set);
    for m in sweep.results() {
        println!(
            "{}: {} units, {:.1} m, {} ({} revisits: {}S/{}B/{}A)",
            m.wave_id,
            m.units,
            m.total_distance_m,
            format_duration(m.total_time_secs),
            m.revisits.total(),
            m.revisits.slot,
            m.revisits.bay,
            m.revisits.aisle,
        );
    }
    for wave in abnormal_waves(sweep.results()) {
        println!("abnormal: {} ({} revisits)", wave.wave_id, wave.revisits.total());
    }

    // ── Selection-wide replay and efficiency bundle ───────────────────────
    let timeline = build_global_timeline(&selected, &set);
    let mut replay = SelectionAnalysis::new(&selected);
    replay.run_to_end(&ctx, &set, &timeline);
    let totals = replay.totals();

    let ideal = ideal_distance_m(&selected, &set, &ctx);
    let enhanced = EnhancedMetrics::derive(
        totals.total_distance_m,
        totals.total_time_secs,
        totals.revisits.total(),
        totals.steps,
        ideal,
    );
    println!(
        "selection: {:.1} m actual vs {:.1} m ideal → {:.1}% efficient, {:.1} m wasted",
        totals.total_distance_m, ideal, enhanced.path_efficiency_pct, enhanced.wasted_distance_m,
    );
    println!(
        "pace: {:.1} picks/h, {:.2} m/unit, {:.1} m/min travel",
        enhanced.picks_per_hour, enhanced.distance_per_unit_m, enhanced.travel_speed_m_per_min,
    );

    // ── Heatmap, SKU, hourly summaries ────────────────────────────────────
    let mut heatmap = HeatmapAccumulator::new(&selected, &grid);
    while !heatmap.process_chunk(&set) {
        // A UI host would yield here; the demo just loops.
    }
    println!("heatmap: hottest location visited {} times", heatmap.max_visits());

    let skus = SkuStats::from_selection(&selected, &set);
    for (sku, picks, waves) in skus.by_picks_desc() {
        println!("sku {sku}: {picks} picks across {waves} wave(s)");
    }

    let hourly = hourly_pick_counts(&selected, &set);
    for (hour, count) in hourly.iter().enumerate().filter(|&(_, &c)| c > 0) {
        println!("{hour:02}:00 — {count} picks");
    }

    Ok(())
}
