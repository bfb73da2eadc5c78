//! Backtrack ("revisit") detection at three spatial granularities.
//!
//! # The rule
//!
//! A key is revisited when the picker returns to it after visiting at least
//! one *other* key.  Dwelling — consecutive identical visits — is never a
//! revisit, so each history collapses consecutive duplicates as it grows.
//! The identical rule applies at slot, bay, and aisle granularity; only the
//! key fed in differs.  This single implementation serves both the
//! step-by-step replay consumer and the batch per-wave pass, so the two
//! cannot drift apart.
//!
//! Note the rule is deliberately literal: aisle sequence A→B→A counts as an
//! aisle revisit at the third step even though passing back through a shared
//! aisle may be operationally reasonable.  Stricter intent is not inferred.

use wt_route::RouteStep;

// ── Granularity ───────────────────────────────────────────────────────────────

/// The spatial level a revisit was detected at.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Granularity {
    /// Exact slot-level location.
    Slot,
    /// Bay key (location truncated to shelf level).
    Bay,
    /// Aisle label.
    Aisle,
}

impl Granularity {
    pub const ALL: [Granularity; 3] = [Granularity::Slot, Granularity::Bay, Granularity::Aisle];
}

// ── RevisitEvent ──────────────────────────────────────────────────────────────

/// One detected backtrack.  Immutable; never retracted.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RevisitEvent {
    pub wave_id:     String,
    pub granularity: Granularity,
    /// The revisited key (location, bay key, or aisle label).
    pub key:         String,
    /// 1-based index of the key's first visit in its collapsed history.
    pub first_visit: u32,
    /// The step number at which the revisit occurred (1-based, in the
    /// numbering of whichever pass drove the detector — wave-local for a
    /// batch pass, global for a timeline replay).
    pub revisit_step: u32,
}

// ── RevisitCounts ─────────────────────────────────────────────────────────────

/// Per-granularity revisit tallies.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RevisitCounts {
    pub slot:  u32,
    pub bay:   u32,
    pub aisle: u32,
}

impl RevisitCounts {
    pub fn total(self) -> u32 {
        self.slot + self.bay + self.aisle
    }
}

impl std::ops::Add for RevisitCounts {
    type Output = RevisitCounts;
    fn add(self, rhs: RevisitCounts) -> RevisitCounts {
        RevisitCounts {
            slot:  self.slot + rhs.slot,
            bay:   self.bay + rhs.bay,
            aisle: self.aisle + rhs.aisle,
        }
    }
}

// ── KeyHistory ────────────────────────────────────────────────────────────────

/// The visit history for one (wave, granularity) pair, consecutive
/// duplicates collapsed.
#[derive(Default)]
pub struct KeyHistory {
    keys: Vec<String>,
}

impl KeyHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next key; returns `Some(first_visit)` when this is a
    /// revisit.
    ///
    /// Empty keys are ignored entirely.  A key equal to the last entry is a
    /// dwell: nothing is appended and nothing fires.  Otherwise the key is
    /// appended, and if it already occurred earlier the 1-based index of
    /// that first occurrence is returned.
    pub fn observe(&mut self, key: &str) -> Option<u32> {
        if key.is_empty() {
            return None;
        }
        if self.keys.last().is_some_and(|last| last == key) {
            return None;
        }

        let first = self.keys.iter().position(|k| k == key);
        self.keys.push(key.to_string());
        first.map(|i| (i + 1) as u32)
    }

    /// Number of collapsed history entries.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

// ── RevisitDetector ───────────────────────────────────────────────────────────

/// Revisit state for one wave: three histories and their event lists.
///
/// Construct fresh per analysis pass — constructing anew *is* the reset
/// operation, so a stale pass can never leak history into a new one.
pub struct RevisitDetector {
    wave_id: String,
    slot:  KeyHistory,
    bay:   KeyHistory,
    aisle: KeyHistory,
    events: [Vec<RevisitEvent>; 3],
}

impl RevisitDetector {
    pub fn new(wave_id: impl Into<String>) -> Self {
        Self {
            wave_id: wave_id.into(),
            slot:  KeyHistory::new(),
            bay:   KeyHistory::new(),
            aisle: KeyHistory::new(),
            events: [Vec::new(), Vec::new(), Vec::new()],
        }
    }

    /// Process one route step at the given 1-based step number.
    pub fn observe_step(&mut self, step_number: u32, step: &RouteStep) {
        self.observe_keys(step_number, &step.location, &step.bay_location, &step.aisle);
    }

    /// Process one (location, bay, aisle) key triple.
    pub fn observe_keys(&mut self, step_number: u32, location: &str, bay: &str, aisle: &str) {
        for (granularity, history, key) in [
            (Granularity::Slot, &mut self.slot, location),
            (Granularity::Bay, &mut self.bay, bay),
            (Granularity::Aisle, &mut self.aisle, aisle),
        ] {
            if let Some(first_visit) = history.observe(key) {
                self.events[granularity as usize].push(RevisitEvent {
                    wave_id: self.wave_id.clone(),
                    granularity,
                    key: key.to_string(),
                    first_visit,
                    revisit_step: step_number,
                });
            }
        }
    }

    pub fn wave_id(&self) -> &str {
        &self.wave_id
    }

    /// Events at one granularity, in emission (step) order.
    pub fn events(&self, granularity: Granularity) -> &[RevisitEvent] {
        &self.events[granularity as usize]
    }

    pub fn counts(&self) -> RevisitCounts {
        RevisitCounts {
            slot:  self.events[Granularity::Slot as usize].len() as u32,
            bay:   self.events[Granularity::Bay as usize].len() as u32,
            aisle: self.events[Granularity::Aisle as usize].len() as u32,
        }
    }
}
