//! End-of-session statistics: the Gini fairness index and the derived
//! per-session record.

use surf_core::SpotLevel;

use crate::surfer::Surfer;
use crate::wave::WaveEvent;

// ── Gini index ────────────────────────────────────────────────────────────────

/// Gini inequality index of a nonnegative vector.
///
/// 0.0 = perfectly equal, 1.0 = maximally unequal.  Empty, single-element,
/// and all-zero vectors are all perfectly equal.  Negative entries (which
/// cannot occur for count data) are shifted up by the minimum defensively.
pub fn gini(values: &[f64]) -> f64 {
    if values.iter().all(|&v| v == 0.0) {
        return 0.0;
    }

    let mut x = values.to_vec();
    let min = x.iter().copied().fold(f64::INFINITY, f64::min);
    if min < 0.0 {
        for v in &mut x {
            *v -= min;
        }
    }

    let n = x.len();
    let mean = x.iter().sum::<f64>() / n as f64;
    if mean == 0.0 {
        return 0.0;
    }

    let mut diff_sum = 0.0;
    for &a in &x {
        for &b in &x {
            diff_sum += (a - b).abs();
        }
    }
    diff_sum / (2.0 * (n * n) as f64 * mean)
}

// ── SessionStatistics ─────────────────────────────────────────────────────────

/// Read-only snapshot computed once at session end.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionStatistics {
    pub spot_level:     SpotLevel,
    pub n_surfers:      usize,
    /// Only set for experiment-mode sessions.
    pub beginner_ratio: Option<f64>,
    /// Length of the full wave schedule (spawned or not).
    pub wave_counts:    usize,
    pub avg_success_count:   f64,
    pub avg_collision_count: f64,
    /// Mean seconds between counted catches, with a full-session-duration
    /// penalty substituted for surfers who never logged a second catch.
    pub avg_waiting_time: f64,
    /// Gini index over per-surfer success counts.
    pub fairness: f64,
}

/// Reduce the final surfer set and retained schedule into one record.
pub fn compute_stats(
    surfers:        &[Surfer],
    schedule:       &[WaveEvent],
    spot_level:     SpotLevel,
    beginner_ratio: Option<f64>,
    duration_secs:  u32,
) -> SessionStatistics {
    let n = surfers.len();
    let duration = f64::from(duration_secs);

    let success_counts: Vec<f64> = surfers.iter().map(|s| f64::from(s.counters.success)).collect();
    let fairness = gini(&success_counts);

    let total_success: u64 = surfers.iter().map(|s| u64::from(s.counters.success)).sum();
    let total_collisions: u64 = surfers.iter().map(|s| u64::from(s.counters.collisions)).sum();

    // A surfer who never waited between catches is treated as having waited
    // the maximum possible time.
    let wait_sum: f64 = surfers
        .iter()
        .map(|s| if s.waiting_time_sum > 0.0 { s.waiting_time_sum } else { duration })
        .sum();

    let avg_waiting_time = if total_success > 0 {
        wait_sum / total_success as f64
    } else if n == 0 {
        0.0
    } else {
        duration
    };

    SessionStatistics {
        spot_level,
        n_surfers: n,
        beginner_ratio,
        wave_counts: schedule.len(),
        avg_success_count:   if n > 0 { total_success as f64 / n as f64 } else { 0.0 },
        avg_collision_count: if n > 0 { total_collisions as f64 / n as f64 } else { 0.0 },
        avg_waiting_time,
        fairness,
    }
}
