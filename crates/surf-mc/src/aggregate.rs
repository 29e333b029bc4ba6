//! Per-metric reduction of a batch of session records.

use surf_session::SessionStatistics;

/// One value per numeric column of [`SessionStatistics`].
///
/// Produced twice per batch: once holding means, once holding sample
/// standard deviations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MetricSummary {
    pub n_surfers:           f64,
    pub wave_counts:         f64,
    pub avg_success_count:   f64,
    pub avg_collision_count: f64,
    pub avg_waiting_time:    f64,
    pub fairness:            f64,
}

impl MetricSummary {
    /// Column means across `runs`.
    pub fn mean_of(runs: &[SessionStatistics]) -> Self {
        Self::reduce(runs, mean)
    }

    /// Column sample standard deviations (n−1) across `runs`.
    ///
    /// Defined as 0.0 for batches of fewer than two runs.
    pub fn std_of(runs: &[SessionStatistics]) -> Self {
        Self::reduce(runs, sample_std)
    }

    /// `(name, value)` pairs in column order, for reports and CSV rows.
    pub fn fields(&self) -> [(&'static str, f64); 6] {
        [
            ("n_surfers",           self.n_surfers),
            ("wave_counts",         self.wave_counts),
            ("avg_success_count",   self.avg_success_count),
            ("avg_collision_count", self.avg_collision_count),
            ("avg_waiting_time",    self.avg_waiting_time),
            ("fairness",            self.fairness),
        ]
    }

    fn reduce(runs: &[SessionStatistics], f: fn(&[f64]) -> f64) -> Self {
        let column = |get: fn(&SessionStatistics) -> f64| -> f64 {
            let values: Vec<f64> = runs.iter().map(get).collect();
            f(&values)
        };
        Self {
            n_surfers:           column(|s| s.n_surfers as f64),
            wave_counts:         column(|s| s.wave_counts as f64),
            avg_success_count:   column(|s| s.avg_success_count),
            avg_collision_count: column(|s| s.avg_collision_count),
            avg_waiting_time:    column(|s| s.avg_waiting_time),
            fairness:            column(|s| s.fairness),
        }
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

fn sample_std(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    let var = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    var.sqrt()
}
