//! Plain data row types written by output backends.

use surf_mc::McOutcome;
use surf_session::SessionStatistics;

/// One Monte-Carlo run's metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct RunRow {
    pub run:        u32,
    pub spot_level: String,
    pub n_surfers:  u32,
    pub wave_counts: u32,
    pub avg_success_count:   f64,
    pub avg_collision_count: f64,
    pub avg_waiting_time:    f64,
    pub fairness:            f64,
}

impl RunRow {
    /// Build the row for run index `run` from its session record.
    pub fn from_stats(run: u32, stats: &SessionStatistics) -> Self {
        Self {
            run,
            spot_level:  stats.spot_level.as_str().to_owned(),
            n_surfers:   stats.n_surfers as u32,
            wave_counts: stats.wave_counts as u32,
            avg_success_count:   stats.avg_success_count,
            avg_collision_count: stats.avg_collision_count,
            avg_waiting_time:    stats.avg_waiting_time,
            fairness:            stats.fairness,
        }
    }

    /// One row per run of a batch, in run order.
    pub fn from_outcome(outcome: &McOutcome) -> Vec<Self> {
        outcome
            .runs
            .iter()
            .enumerate()
            .map(|(i, stats)| Self::from_stats(i as u32, stats))
            .collect()
    }
}

/// One aggregated metric: its batch mean and sample standard deviation.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub metric: &'static str,
    pub mean:   f64,
    pub std:    f64,
}

impl SummaryRow {
    /// One row per numeric metric, in column order.
    pub fn from_outcome(outcome: &McOutcome) -> Vec<Self> {
        outcome
            .mean
            .fields()
            .iter()
            .zip(outcome.std.fields())
            .map(|(&(metric, mean), (_, std))| Self { metric, mean, std })
            .collect()
    }
}
