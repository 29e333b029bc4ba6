//! The `Session` struct, its tick loop, and the `run_session` entry point.
//!
//! A session's live state — wave pool, surfer population, retained schedule,
//! tick counter — is exclusively owned by its `Session` value.  Nothing is
//! shared globally, so independent Monte-Carlo repetitions can run
//! concurrently, each with its own seeded [`SessionRng`].

use surf_core::{CoreResult, RuleType, SessionMode, SessionRng, SimParams, SpotLevel, SpotProfile};

use crate::error::{SessionError, SessionResult};
use crate::observer::{NoopObserver, SessionObserver};
use crate::population::generate_skills;
use crate::schedule::build_schedule;
use crate::stats::{compute_stats, SessionStatistics};
use crate::surfer::{Surfer, SurferState};
use crate::wave::{WaveEvent, WavePool};

/// Default session length: one simulated hour.
pub const DEFAULT_SESSION_DURATION_SECS: u32 = 3_600;

// ── SessionRequest ────────────────────────────────────────────────────────────

/// Everything a caller specifies for one session.
///
/// Construct with [`SessionRequest::new`] and override fields as needed:
///
/// ```rust,ignore
/// let req = SessionRequest {
///     mode: SessionMode::Experiment,
///     beginner_ratio: Some(0.4),
///     ..SessionRequest::new(SpotLevel::Mixed, RuleType::SafeDistance)
/// };
/// ```
#[derive(Clone, Debug)]
pub struct SessionRequest {
    pub spot: SpotLevel,
    pub rule: RuleType,
    pub mode: SessionMode,
    /// Required iff `mode` is experiment; forbidden in realistic mode.
    pub beginner_ratio: Option<f64>,
    /// Overrides the drawn (realistic) or configured (experiment) crowd size.
    pub num_surfers: Option<usize>,
    pub duration_secs: u32,
    /// Overrides the tier profile for wave-schedule generation only;
    /// population draws always use the tier's built-in profile.
    pub profile: Option<SpotProfile>,
    /// Pre-built wave schedule; generated from the profile when absent.
    pub schedule: Option<Vec<WaveEvent>>,
}

impl SessionRequest {
    /// A realistic-mode request with the default duration and no overrides.
    pub fn new(spot: SpotLevel, rule: RuleType) -> Self {
        Self {
            spot,
            rule,
            mode:           SessionMode::Realistic,
            beginner_ratio: None,
            num_surfers:    None,
            duration_secs:  DEFAULT_SESSION_DURATION_SECS,
            profile:        None,
            schedule:       None,
        }
    }

    /// Check mode/ratio consistency.  Mismatches are surfaced to the caller,
    /// never silently corrected.
    pub fn validate(&self) -> SessionResult<()> {
        match (self.mode, self.beginner_ratio) {
            (SessionMode::Realistic, Some(_)) => Err(SessionError::RatioNotAllowed),
            (SessionMode::Experiment, None) => Err(SessionError::RatioRequired),
            (_, Some(r)) if !(0.0..=1.0).contains(&r) => Err(SessionError::RatioOutOfRange(r)),
            _ => Ok(()),
        }
    }
}

// ── Session ───────────────────────────────────────────────────────────────────

/// One live session: the tick loop's exclusively-owned state.
pub struct Session {
    spot:           SpotLevel,
    rule:           RuleType,
    beginner_ratio: Option<f64>,
    duration_secs:  u32,
    params:         SimParams,
    /// All waves of this session; the pool's active list is the collection
    /// surfers scan while waiting.
    pub pool: WavePool,
    /// The population, stepped in index order every tick.
    pub surfers: Vec<Surfer>,
    schedule: Vec<WaveEvent>,
    now: u32,
}

impl Session {
    /// Validate the request and materialize the initial session state.
    ///
    /// Draw order is fixed for reproducibility: crowd size, then skills,
    /// then per-surfer placement, then the wave schedule.
    pub fn new(
        req:    &SessionRequest,
        params: &SimParams,
        rng:    &mut SessionRng,
    ) -> SessionResult<Self> {
        req.validate()?;

        let tier_profile = req.spot.profile();
        let skills = generate_skills(
            &tier_profile,
            req.mode,
            req.beginner_ratio,
            req.num_surfers,
            &params.experiment,
            rng,
        )?;
        let surfers = skills
            .iter()
            .map(|&skill| Surfer::spawn(skill, &params.layout, &params.behavior, rng))
            .collect::<CoreResult<Vec<_>>>()?;

        let schedule = match &req.schedule {
            Some(events) => events.clone(),
            None => {
                let wave_profile = req.profile.as_ref().unwrap_or(&tier_profile);
                build_schedule(req.duration_secs, Some(wave_profile), &params.arrival, rng)
            }
        };

        Ok(Self {
            spot:           req.spot,
            rule:           req.rule,
            beginner_ratio: req.beginner_ratio,
            duration_secs:  req.duration_secs,
            params:         *params,
            pool:           WavePool::new(),
            surfers,
            schedule,
            now: 0,
        })
    }

    /// The current tick (seconds into the session).
    #[inline]
    pub fn tick(&self) -> u32 {
        self.now
    }

    /// Number of surfers currently riding a wave.
    pub fn riders(&self) -> usize {
        self.surfers
            .iter()
            .filter(|s| s.state == SurferState::Surfing)
            .count()
    }

    /// Advance the session one tick:
    ///
    /// (a) activate schedule events whose spawn time has arrived,
    /// (b) advance every live wave, retiring spent ones,
    /// (c) step every surfer in index order against the active collection.
    ///
    /// Later surfers observe earlier surfers' already-updated positions —
    /// sequential in-place updates are part of the reproducibility contract.
    pub fn advance_tick(&mut self, rng: &mut SessionRng) {
        let t = f64::from(self.now);
        for event in &mut self.schedule {
            if !event.spawned && event.spawn_time <= t {
                self.pool.spawn(event, self.params.layout.ocean_x_max);
                event.spawned = true;
            }
        }

        self.pool.advance_all();

        for i in 0..self.surfers.len() {
            let (before, rest) = self.surfers.split_at_mut(i);
            let Some((me, after)) = rest.split_first_mut() else {
                break;
            };
            me.step(
                &mut self.pool,
                self.rule,
                &self.params.behavior,
                self.now,
                before,
                after,
                rng,
            );
        }

        self.now += 1;
    }

    /// Reduce the final state into the session record.
    pub fn finish(&self) -> SessionStatistics {
        compute_stats(
            &self.surfers,
            &self.schedule,
            self.spot,
            self.beginner_ratio,
            self.duration_secs,
        )
    }
}

// ── Entry points ──────────────────────────────────────────────────────────────

/// Execute one full session and return its statistics record.
///
/// This is the pure core entry point consumed by the Monte-Carlo wrapper and
/// the terminal app.
pub fn run_session(
    req:    &SessionRequest,
    params: &SimParams,
    rng:    &mut SessionRng,
) -> SessionResult<SessionStatistics> {
    run_session_observed(req, params, rng, &mut NoopObserver)
}

/// [`run_session`] with observer callbacks at every tick boundary.
pub fn run_session_observed<O: SessionObserver>(
    req:      &SessionRequest,
    params:   &SimParams,
    rng:      &mut SessionRng,
    observer: &mut O,
) -> SessionResult<SessionStatistics> {
    let mut session = Session::new(req, params, rng)?;

    for _ in 0..req.duration_secs {
        let t = session.tick();
        observer.on_tick_start(t);
        session.advance_tick(rng);
        observer.on_tick_end(t, session.pool.active_count(), session.riders());
    }

    let stats = session.finish();
    observer.on_session_end(&stats);
    Ok(stats)
}
