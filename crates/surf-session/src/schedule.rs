//! Wave-arrival generation.
//!
//! Wave sets arrive as a renewal process with gamma-distributed inter-set
//! intervals; each set carries a Poisson-distributed number of waves spread
//! over a short uniform window.  Heights are lognormal, clipped into the
//! profile's bounds; speeds are uniform per wave.

use surf_core::{CoreResult, SessionRng, SpotProfile, WavesetArrival};

use crate::wave::WaveEvent;

/// Seconds after the set time within which its waves spawn.
const SET_SPREAD_SECS: std::ops::Range<f64> = 3.0..8.0;

/// Generate the full wave schedule for a session.
///
/// Events are emitted in generation order (ascending set times, offsets
/// unsorted within a set) with `spawned = false`.
///
/// An absent or degenerate profile, or a zero duration, yields an empty
/// schedule — never an error.
pub fn build_schedule(
    duration_secs: u32,
    profile:       Option<&SpotProfile>,
    arrival:       &WavesetArrival,
    rng:           &mut SessionRng,
) -> Vec<WaveEvent> {
    let Some(profile) = profile else {
        return Vec::new();
    };
    if !profile.is_usable() || !arrival.is_usable() {
        return Vec::new();
    }
    sample_schedule(duration_secs, profile, arrival, rng).unwrap_or_default()
}

fn sample_schedule(
    duration_secs: u32,
    profile:       &SpotProfile,
    arrival:       &WavesetArrival,
    rng:           &mut SessionRng,
) -> CoreResult<Vec<WaveEvent>> {
    let duration = f64::from(duration_secs);
    let height = &profile.wave_height;
    let mut events = Vec::new();

    let mut t = 0.0;
    while t < duration {
        t += rng.gamma(arrival.shape, arrival.scale)?;
        if t > duration {
            break;
        }

        let set_size = rng.poisson(profile.lambda_set)?;
        for _ in 0..set_size {
            let spawn_time = t + rng.gen_range(SET_SPREAD_SECS);
            if spawn_time >= duration {
                // The rest of this set would land past the session end.
                break;
            }

            let h = rng.lognormal(height.mu, height.sigma)?;
            let clipped = h.max(height.min).min(height.max);
            let speed = rng.uniform(profile.wave_speed.min, profile.wave_speed.max)?;
            events.push(WaveEvent::new(spawn_time, clipped, speed));
        }
    }

    Ok(events)
}
