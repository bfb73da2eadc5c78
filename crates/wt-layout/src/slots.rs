//! Slot records and the `SlotGrid` collection.
//!
//! # Data layout
//!
//! `SlotGrid` stores slots in a flat `Vec` indexed by `SlotId` plus three
//! derived indexes, all built once at `build()`:
//!
//! - `by_location` / `by_label`: case-folded identifier → first `SlotId`
//!   carrying it, for the route matcher's fallback chain.
//! - `distinct_xs` / `distinct_ys`: sorted deduplicated coordinate arrays.
//!   The x array answers the path finder's obstruction query ("any slot
//!   strictly between aisle line and slot?") with two binary searches; both
//!   feed aisle-graph derivation.
//!
//! Slots are immutable once built.  Analysis-derived per-slot state (visit
//! counts, highlights) lives in separate annotation vectors owned by the
//! analysis that produces it, never on `Slot` itself.

use rustc_hash::FxHashMap;

use wt_core::{MapPoint, SlotId};

// ── Slot ──────────────────────────────────────────────────────────────────────

/// One storage location.
///
/// `location` is the slot-level identifier (`ID1111-2550-33`); `aisle_bay`
/// is the composite aisle+bay label some uploads reference instead.  The
/// remaining descriptors are carried verbatim for consumers (filters,
/// tooltips) and play no role in path finding.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slot {
    pub location:  String,
    pub aisle_bay: String,
    pub aisle:     String,
    pub bay:       String,
    pub row:       String,
    pub column:    String,
    pub zone:      String,
    pub pos:       MapPoint,
}

// ── SlotGrid ──────────────────────────────────────────────────────────────────

/// The full slot collection plus lookup and coordinate indexes.
///
/// Do not construct directly; use [`SlotGridBuilder`].
pub struct SlotGrid {
    slots: Vec<Slot>,

    /// Lower-cased slot-level location → first slot carrying it.
    by_location: FxHashMap<String, SlotId>,
    /// Lower-cased aisle+bay label → first slot carrying it.
    by_label: FxHashMap<String, SlotId>,

    /// Sorted, deduplicated slot x-coordinates.
    distinct_xs: Vec<f32>,
    /// Sorted, deduplicated slot y-coordinates.
    distinct_ys: Vec<f32>,
}

impl SlotGrid {
    /// Construct an empty grid with no slots.
    ///
    /// Useful as a placeholder; every query degrades to "not found" / empty.
    pub fn empty() -> Self {
        SlotGridBuilder::new().build()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[inline]
    pub fn get(&self, id: SlotId) -> &Slot {
        &self.slots[id.index()]
    }

    #[inline]
    pub fn pos(&self, id: SlotId) -> MapPoint {
        self.slots[id.index()].pos
    }

    /// Iterator over all slots in `SlotId` order.
    pub fn iter(&self) -> impl Iterator<Item = (SlotId, &Slot)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .map(|(i, s)| (SlotId(i as u32), s))
    }

    // ── Identifier lookup ─────────────────────────────────────────────────

    /// Resolve a slot-level location, case-insensitively.
    pub fn lookup_location(&self, location: &str) -> Option<SlotId> {
        self.by_location.get(&fold(location)).copied()
    }

    /// Resolve an aisle+bay label, case-insensitively.
    pub fn lookup_label(&self, label: &str) -> Option<SlotId> {
        self.by_label.get(&fold(label)).copied()
    }

    // ── Coordinate queries ────────────────────────────────────────────────

    pub fn distinct_xs(&self) -> &[f32] {
        &self.distinct_xs
    }

    pub fn distinct_ys(&self) -> &[f32] {
        &self.distinct_ys
    }

    /// `true` if any slot's x-coordinate lies strictly inside `(lo, hi)`.
    ///
    /// The path finder's line-of-sight approximation: a slot between an
    /// aisle line and a target slot blocks horizontal access.  Endpoints are
    /// excluded, so the queried slot's own column never blocks itself.
    pub fn any_x_strictly_between(&self, lo: f32, hi: f32) -> bool {
        let start = self.distinct_xs.partition_point(|&x| x <= lo);
        start < self.distinct_xs.len() && self.distinct_xs[start] < hi
    }
}

fn fold(s: &str) -> String {
    s.trim().to_lowercase()
}

// ── SlotGridBuilder ───────────────────────────────────────────────────────────

/// Construct a [`SlotGrid`] incrementally, then call [`build`](Self::build).
///
/// `build()` sorts and deduplicates the coordinate arrays and populates the
/// identifier indexes.  When two slots share an identifier, the first one
/// added wins — matching the "first match" resolution of heterogeneous
/// uploads.
#[derive(Default)]
pub struct SlotGridBuilder {
    slots: Vec<Slot>,
}

impl SlotGridBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for the expected slot count.
    pub fn with_capacity(slots: usize) -> Self {
        Self { slots: Vec::with_capacity(slots) }
    }

    /// Add a slot and return its `SlotId` (sequential from 0).
    pub fn add_slot(&mut self, slot: Slot) -> SlotId {
        let id = SlotId(self.slots.len() as u32);
        self.slots.push(slot);
        id
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Consume the builder and produce a [`SlotGrid`].
    ///
    /// Time complexity: O(N log N) for the coordinate sorts, O(N) for the
    /// identifier indexes.
    pub fn build(self) -> SlotGrid {
        let mut by_location = FxHashMap::default();
        let mut by_label = FxHashMap::default();

        for (i, slot) in self.slots.iter().enumerate() {
            let id = SlotId(i as u32);
            if !slot.location.is_empty() {
                by_location.entry(fold(&slot.location)).or_insert(id);
            }
            if !slot.aisle_bay.is_empty() {
                by_label.entry(fold(&slot.aisle_bay)).or_insert(id);
            }
        }

        let distinct_xs = distinct_sorted(self.slots.iter().map(|s| s.pos.x));
        let distinct_ys = distinct_sorted(self.slots.iter().map(|s| s.pos.y));

        SlotGrid {
            slots: self.slots,
            by_location,
            by_label,
            distinct_xs,
            distinct_ys,
        }
    }
}

/// Sort ascending and drop exact duplicates.
fn distinct_sorted(coords: impl Iterator<Item = f32>) -> Vec<f32> {
    let mut v: Vec<f32> = coords.collect();
    v.sort_unstable_by(f32::total_cmp);
    v.dedup();
    v
}
