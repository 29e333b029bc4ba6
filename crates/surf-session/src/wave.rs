//! Waves: scheduled events, live entities, and the session-owned pool.
//!
//! # Ownership model
//!
//! All live waves of a session are owned by its [`WavePool`] — there is no
//! global registry.  The pool is an arena: spawned waves are pushed once and
//! never removed, while the `active` list (in spawn order) tracks which waves
//! are still moving through the lineup.  A rider holds a `WaveId` into the
//! arena, so the wave's height and speed stay addressable through a ride or
//! wipeout even after the wave has passed the shoreline and left the active
//! list.

use surf_core::WaveId;

// ── WaveEvent ─────────────────────────────────────────────────────────────────

/// One entry of the pre-generated wave schedule.
///
/// Created in bulk before the session loop starts; `spawned` is flipped once
/// the event activates.  The full schedule is retained as a record for
/// statistics.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaveEvent {
    /// Seconds into the session at which the wave appears.
    pub spawn_time: f64,
    pub height:     f64,
    pub speed:      f64,
    pub spawned:    bool,
}

impl WaveEvent {
    pub fn new(spawn_time: f64, height: f64, speed: f64) -> Self {
        Self { spawn_time, height, speed, spawned: false }
    }
}

// ── Wave ──────────────────────────────────────────────────────────────────────

/// A live wave moving from the outside toward the shore.
#[derive(Clone, Debug)]
pub struct Wave {
    /// Distance from shore; the wave is spent once this reaches 0.
    pub x:      f64,
    pub height: f64,
    /// Constant for the wave's lifetime.
    pub speed:  f64,
    /// y-coordinates of surfers currently riding this wave.
    pub occupied_y: Vec<f64>,
}

impl Wave {
    /// Instantiate a live wave from a schedule event at the spawn line.
    pub fn from_event(event: &WaveEvent, spawn_x: f64) -> Self {
        Self {
            x:          spawn_x,
            height:     event.height,
            speed:      event.speed,
            occupied_y: Vec::new(),
        }
    }

    /// Move one tick toward the shore.
    #[inline]
    pub fn advance(&mut self) {
        self.x -= self.speed;
    }

    /// `true` once the wave has reached (or passed) the shoreline.
    #[inline]
    pub fn is_spent(&self) -> bool {
        self.x <= 0.0
    }
}

// ── WavePool ──────────────────────────────────────────────────────────────────

/// Arena of all waves spawned this session plus the spawn-ordered active list.
#[derive(Debug, Default)]
pub struct WavePool {
    /// Every wave ever spawned, indexed by `WaveId`.  Never shrinks.
    pub waves:  Vec<Wave>,
    /// Waves still in the water, in spawn order.  The waiting-state scan
    /// iterates this list, so its order is behaviorally significant.
    pub active: Vec<WaveId>,
}

impl WavePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn a live wave from `event` at `spawn_x` and return its id.
    pub fn spawn(&mut self, event: &WaveEvent, spawn_x: f64) -> WaveId {
        let id = WaveId(self.waves.len() as u32);
        self.waves.push(Wave::from_event(event, spawn_x));
        self.active.push(id);
        id
    }

    /// Advance every active wave one tick, retiring spent ones.
    ///
    /// Retired waves stay in the arena; riders transition out via the
    /// `x <= 0` branch of their own state machine.
    pub fn advance_all(&mut self) {
        for &id in &self.active {
            self.waves[id.index()].advance();
        }
        let waves = &self.waves;
        self.active.retain(|id| !waves[id.index()].is_spent());
    }

    #[inline]
    pub fn wave(&self, id: WaveId) -> &Wave {
        &self.waves[id.index()]
    }

    #[inline]
    pub fn wave_mut(&mut self, id: WaveId) -> &mut Wave {
        &mut self.waves[id.index()]
    }

    /// Number of waves currently in the water.
    #[inline]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }
}
