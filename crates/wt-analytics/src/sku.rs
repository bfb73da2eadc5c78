//! Per-SKU pick statistics.

use rustc_hash::{FxHashMap, FxHashSet};

use wt_route::WaveRouteSet;

/// Pick counts and wave membership per SKU across a selection.
///
/// Steps with an empty SKU cell contribute nothing.
#[derive(Default)]
pub struct SkuStats {
    picks: FxHashMap<String, u32>,
    waves: FxHashMap<String, FxHashSet<String>>,
}

impl SkuStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tally every step of the selected waves.
    pub fn from_selection(selected: &[String], set: &WaveRouteSet) -> Self {
        let mut stats = Self::new();
        for wave_id in selected {
            let Some(route) = set.route(wave_id) else {
                continue;
            };
            for step in route {
                stats.record(&step.sku, wave_id);
            }
        }
        stats
    }

    /// Tally one pick of `sku` within `wave_id`.
    pub fn record(&mut self, sku: &str, wave_id: &str) {
        if sku.is_empty() {
            return;
        }
        *self.picks.entry(sku.to_string()).or_insert(0) += 1;
        self.waves
            .entry(sku.to_string())
            .or_default()
            .insert(wave_id.to_string());
    }

    pub fn pick_count(&self, sku: &str) -> u32 {
        self.picks.get(sku).copied().unwrap_or(0)
    }

    /// How many distinct waves picked `sku`.
    pub fn wave_count(&self, sku: &str) -> usize {
        self.waves.get(sku).map_or(0, FxHashSet::len)
    }

    /// Distinct SKU count.
    pub fn len(&self) -> usize {
        self.picks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    /// `(sku, picks, wave count)` sorted by pick count descending, SKU
    /// ascending on ties for deterministic output.
    pub fn by_picks_desc(&self) -> Vec<(&str, u32, usize)> {
        let mut rows: Vec<(&str, u32, usize)> = self
            .picks
            .iter()
            .map(|(sku, &picks)| (sku.as_str(), picks, self.wave_count(sku)))
            .collect();
        rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        rows
    }
}
