//! The surfer agent: placement, probability model, and the four-state
//! behavioral state machine.
//!
//! # States
//!
//! ```text
//! paddling ──(reaches bp)──▶ waiting ──(attempt × pop-up)──▶ surfing
//!    ▲                                                         │
//!    │◀──(reaches shore)── wipeout ◀──(collision | wipeout draw)┘
//!    │◀────────────────(rides all the way in)──────────────────┘
//! ```
//!
//! Updates are sequential and in-place: a surfer stepped later in the tick
//! observes the already-updated positions of surfers stepped earlier.  This
//! ordering is part of the reproducibility contract and must not be
//! parallelized within a session.

use surf_core::{BehaviorTuning, BreakLayout, CoreResult, RuleType, SessionRng, WaveId};

use crate::collision;
use crate::wave::WavePool;

// ── State & counters ──────────────────────────────────────────────────────────

/// Behavioral state of a surfer.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum SurferState {
    /// Holding position at the lineup, scanning for catchable waves.
    Waiting,
    /// Moving toward the best position.
    Paddling,
    /// Riding a wave shoreward.
    Surfing,
    /// Falling; drifts shoreward until the ride resets.
    Wipeout,
}

/// Per-surfer session counters.  The key set is fixed, so this is a plain
/// record rather than a dynamic map.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RideCounters {
    pub success:    u32,
    pub collisions: u32,
    pub wipeouts:   u32,
}

// ── Surfer ────────────────────────────────────────────────────────────────────

/// A single surfer agent.  Created once at session start; persists for the
/// whole session.
#[derive(Clone, Debug)]
pub struct Surfer {
    /// Skill level in [0, 1]; 0 = beginner, 1 = pro.
    pub skill: f64,
    /// Distance from shore.
    pub x: f64,
    /// Alongshore position, fixed for the session.
    pub y: f64,
    /// Paddling speed, derived from skill.
    pub paddle_speed: f64,
    /// Ideal take-off distance from shore, derived from skill.
    pub best_position: f64,
    pub state: SurferState,
    /// Back-reference to the wave being ridden (or drifted in during a
    /// wipeout).  The pool's arena keeps the wave addressable even after it
    /// leaves the active list.
    pub riding: Option<WaveId>,
    /// Distance covered on the current wave.
    pub distance_on_wave: f64,
    /// Whether the current ride has already been counted as a success.
    pub ride_counted: bool,
    /// Tick of the most recent counted catch.
    pub last_catch_tick: Option<u32>,
    /// Total seconds spent between counted catches.
    pub waiting_time_sum: f64,
    pub counters: RideCounters,
}

impl Surfer {
    /// Place a new surfer in the lineup.
    ///
    /// y is uniform across the break; x jitters around a skill-interpolated
    /// lineup position (better surfers sit further outside) and is floored at
    /// the shoreline.
    pub fn spawn(
        skill:  f64,
        layout: &BreakLayout,
        tuning: &BehaviorTuning,
        rng:    &mut SessionRng,
    ) -> CoreResult<Self> {
        let y = rng.uniform(layout.ocean_y_min, layout.ocean_y_max)?;
        let lineup = layout.lineup_near_shore
            + skill * (layout.lineup_outside - layout.lineup_near_shore);
        let x = rng.normal(lineup, layout.placement_spread)?.max(0.0);

        let paddle_speed = tuning.paddle_speed_base + tuning.paddle_speed_coeff * skill;
        let best_position = layout.bp_min + skill * (layout.bp_max - layout.bp_min);
        let state = if (x - best_position).abs() <= tuning.catch_threshold {
            SurferState::Waiting
        } else {
            SurferState::Paddling
        };

        Ok(Self {
            skill,
            x,
            y,
            paddle_speed,
            best_position,
            state,
            riding: None,
            distance_on_wave: 0.0,
            ride_counted: false,
            last_catch_tick: None,
            waiting_time_sum: 0.0,
            counters: RideCounters::default(),
        })
    }

    // ── Probability model ─────────────────────────────────────────────────
    //
    // Heights are normalized onto the fixed model range before use, so all
    // three curves see h in [0, 1] regardless of the spot profile.

    /// Probability of going for a wave of the given height.
    ///
    /// Comfort measures how well the (normalized) height matches the
    /// surfer's skill; skilled surfers carry a small baseline interest in
    /// everything.
    pub fn prob_attempt(&self, wave_height: f64, tuning: &BehaviorTuning) -> f64 {
        let h = tuning.normalized_height(wave_height);
        let comfort = (1.0 - (h - self.skill).abs()).max(0.0);
        let baseline_interest = 0.2 * self.skill;
        let factor = 0.7 * comfort + 0.3 * baseline_interest;

        let span = tuning.attempt_rate_max - tuning.attempt_rate_min;
        (tuning.attempt_rate_min + span * factor).clamp(0.0, 1.0)
    }

    /// Probability of popping up once committed.  Taller waves punish lower
    /// skill harder.
    pub fn prob_success(&self, wave_height: f64, tuning: &BehaviorTuning) -> f64 {
        let h = tuning.normalized_height(wave_height);
        let sensitivity = 1.0 - self.skill;
        (self.skill * (1.0 - tuning.alpha_success * h * sensitivity)).clamp(0.0, 1.0)
    }

    /// Per-tick probability of falling while riding.
    pub fn prob_wipeout(&self, wave_height: f64, tuning: &BehaviorTuning) -> f64 {
        let h = tuning.normalized_height(wave_height);
        let base = 0.05 + 0.3 * h;
        (base * (1.0 - self.skill)).clamp(0.01, 0.7)
    }

    // ── State machine ─────────────────────────────────────────────────────

    /// Advance the state machine one tick.
    ///
    /// `before`/`after` are the rest of the population, split around this
    /// surfer, used for collision checks.
    #[allow(clippy::too_many_arguments)]
    pub fn step(
        &mut self,
        pool:   &mut WavePool,
        rule:   RuleType,
        tuning: &BehaviorTuning,
        now:    u32,
        before: &[Surfer],
        after:  &[Surfer],
        rng:    &mut SessionRng,
    ) {
        match self.state {
            SurferState::Waiting  => self.step_waiting(pool, rule, tuning, rng),
            SurferState::Paddling => self.step_paddling(tuning),
            SurferState::Surfing  => self.step_surfing(pool, tuning, now, before, after, rng),
            SurferState::Wipeout  => self.step_wipeout(pool),
        }
    }

    /// Scan the active waves in spawn order and try the first catchable one.
    ///
    /// At most one wave is tried per tick: the scan stops at the first wave
    /// within the catch threshold whether or not the attempt succeeds.
    fn step_waiting(
        &mut self,
        pool:   &mut WavePool,
        rule:   RuleType,
        tuning: &BehaviorTuning,
        rng:    &mut SessionRng,
    ) {
        let mut candidate: Option<WaveId> = None;
        for &id in &pool.active {
            let wave = pool.wave(id);
            if rule == RuleType::SafeDistance
                && wave
                    .occupied_y
                    .iter()
                    .any(|&oy| (self.y - oy).abs() <= tuning.safe_distance)
            {
                continue;
            }
            if (wave.x - self.x).abs() <= tuning.catch_threshold {
                candidate = Some(id);
                break;
            }
        }

        let Some(id) = candidate else { return };
        let height = pool.wave(id).height;
        if !rng.gen_bool(self.prob_attempt(height, tuning)) {
            return;
        }
        if !rng.gen_bool(self.prob_success(height, tuning)) {
            return;
        }

        self.state = SurferState::Surfing;
        self.riding = Some(id);
        self.distance_on_wave = 0.0;
        self.ride_counted = false;
        pool.wave_mut(id).occupied_y.push(self.y);
    }

    /// Move toward the best position; hand over to waiting once close.
    fn step_paddling(&mut self, tuning: &BehaviorTuning) {
        if self.x > self.best_position {
            self.x -= self.paddle_speed;
        } else {
            self.x += self.paddle_speed;
        }
        if (self.x - self.best_position).abs() <= tuning.paddle_threshold {
            self.state = SurferState::Waiting;
        }
    }

    /// Ride shoreward; end cleanly at the shoreline, otherwise check
    /// collision, then the wipeout draw, then success-distance counting.
    fn step_surfing(
        &mut self,
        pool:   &WavePool,
        tuning: &BehaviorTuning,
        now:    u32,
        before: &[Surfer],
        after:  &[Surfer],
        rng:    &mut SessionRng,
    ) {
        let Some(id) = self.riding else {
            // Invariant violation; recover by paddling back out.
            self.state = SurferState::Paddling;
            return;
        };
        let (speed, height) = {
            let wave = pool.wave(id);
            (wave.speed, wave.height)
        };

        self.x -= speed;
        self.distance_on_wave += speed;

        if self.x <= 0.0 {
            self.end_ride();
            return;
        }

        let others = before.iter().chain(after.iter());
        if collision::any_collision(self, others, tuning.collision_radius) {
            self.counters.collisions += 1;
            self.state = SurferState::Wipeout;
            return;
        }

        if rng.gen_bool(self.prob_wipeout(height, tuning)) {
            self.counters.wipeouts += 1;
            self.state = SurferState::Wipeout;
            return;
        }

        if self.distance_on_wave >= tuning.success_distance && !self.ride_counted {
            self.counters.success += 1;
            self.ride_counted = true;
            match self.last_catch_tick {
                None => self.last_catch_tick = Some(now),
                Some(prev) => {
                    self.waiting_time_sum += f64::from(now - prev);
                    self.last_catch_tick = Some(now);
                }
            }
        }
    }

    /// Drift shoreward at the bound wave's speed; reset once ashore.
    fn step_wipeout(&mut self, pool: &WavePool) {
        if let Some(id) = self.riding {
            self.x -= pool.wave(id).speed;
        }
        if self.x <= 0.0 {
            self.end_ride();
        }
    }

    /// Clear all ride state and paddle back out.
    fn end_ride(&mut self) {
        self.state = SurferState::Paddling;
        self.riding = None;
        self.distance_on_wave = 0.0;
        self.ride_counted = false;
    }
}
