//! Initial skill-population generation.
//!
//! Two mutually exclusive modes:
//!
//! - **realistic** — crowd size drawn from the tier's Normal (unless
//!   supplied), skills i.i.d. from the tier's Beta.
//! - **experiment** — fixed crowd split into a beginner band and an advanced
//!   band by an explicit ratio, shuffled before assignment.
//!
//! Mode/ratio mismatches are rejected upstream by
//! [`SessionRequest::validate`][crate::SessionRequest::validate]; this module
//! re-checks the experiment-mode requirement so it cannot be bypassed.

use surf_core::{ExperimentConf, SessionMode, SessionRng, SpotProfile};

use crate::error::{SessionError, SessionResult};

/// Bounds applied to a drawn realistic-mode crowd size.
pub const REALISTIC_CROWD_MIN: usize = 10;
pub const REALISTIC_CROWD_MAX: usize = 150;

/// Generate the skill vector for a session's population.
///
/// `num_surfers` overrides the drawn (realistic) or configured (experiment)
/// crowd size.  All returned skills lie in [0, 1].
pub fn generate_skills(
    profile:        &SpotProfile,
    mode:           SessionMode,
    beginner_ratio: Option<f64>,
    num_surfers:    Option<usize>,
    experiment:     &ExperimentConf,
    rng:            &mut SessionRng,
) -> SessionResult<Vec<f64>> {
    match mode {
        SessionMode::Realistic => realistic(profile, num_surfers, rng),
        SessionMode::Experiment => {
            let ratio = beginner_ratio.ok_or(SessionError::RatioRequired)?;
            experiment_split(ratio, num_surfers, experiment, rng)
        }
    }
}

fn realistic(
    profile:     &SpotProfile,
    num_surfers: Option<usize>,
    rng:         &mut SessionRng,
) -> SessionResult<Vec<f64>> {
    let n = match num_surfers {
        Some(n) => n,
        None => {
            // Truncate toward zero before clamping so a sub-10 draw lands on
            // the floor rather than rounding up past it.
            let drawn = rng.normal(profile.crowd.mean, profile.crowd.std)? as i64;
            drawn.clamp(REALISTIC_CROWD_MIN as i64, REALISTIC_CROWD_MAX as i64) as usize
        }
    };

    let mut skills = Vec::with_capacity(n);
    for _ in 0..n {
        skills.push(rng.beta(profile.skill.alpha, profile.skill.beta)?);
    }
    Ok(skills)
}

fn experiment_split(
    ratio:       f64,
    num_surfers: Option<usize>,
    conf:        &ExperimentConf,
    rng:         &mut SessionRng,
) -> SessionResult<Vec<f64>> {
    let n = num_surfers.unwrap_or(conf.num_surfer_fixed);
    let n_beginner = ((n as f64) * ratio).round().min(n as f64) as usize;
    let n_advanced = n - n_beginner;

    let mut skills = Vec::with_capacity(n);
    let (lo, hi) = conf.beginner_skill;
    for _ in 0..n_beginner {
        skills.push(rng.uniform(lo, hi)?);
    }
    let (lo, hi) = conf.advanced_skill;
    for _ in 0..n_advanced {
        skills.push(rng.uniform(lo, hi)?);
    }

    // Order of assignment only; the agents are otherwise independent.
    rng.shuffle(&mut skills);
    Ok(skills)
}
