//! Strongly typed, zero-cost identifier wrappers.

use std::fmt;

/// Index of a wave in a session's wave arena.
///
/// Spawned waves are never removed from the arena (only from the active
/// list), so a `WaveId` held by a rider stays valid for the whole session.
/// The inner integer is `pub` to allow direct indexing into the arena `Vec`
/// via `id.0 as usize`, but callers should prefer [`WaveId::index`] for
/// clarity.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaveId(pub u32);

impl WaveId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for WaveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WaveId({})", self.0)
    }
}

impl From<WaveId> for usize {
    #[inline(always)]
    fn from(id: WaveId) -> usize {
        id.0 as usize
    }
}
