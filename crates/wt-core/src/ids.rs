//! Strongly typed, zero-cost identifier for storage slots.
//!
//! `SlotId` is `Copy + Ord + Hash` so it can be used as a map key and sorted
//! collection element without ceremony.  The inner integer is `pub` to allow
//! direct indexing into flat `Vec`s via `id.0 as usize`, but callers should
//! prefer the `.index()` helper for clarity.
//!
//! Wave identifiers remain plain strings: they come straight out of
//! operational uploads and have no dense index space to exploit.

use std::fmt;

/// Index of a slot in slot-grid storage.  Max ~4.3 billion slots — far
/// beyond any physical warehouse.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotId(pub u32);

impl SlotId {
    /// Sentinel meaning "no valid slot" — equivalent to `u32::MAX`.
    pub const INVALID: SlotId = SlotId(u32::MAX);

    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Default for SlotId {
    /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
    #[inline(always)]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SlotId({})", self.0)
    }
}

impl From<SlotId> for usize {
    #[inline(always)]
    fn from(id: SlotId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for SlotId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<SlotId, Self::Error> {
        u32::try_from(n).map(SlotId)
    }
}
