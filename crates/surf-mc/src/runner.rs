//! The batch runner.

use surf_core::{SessionRng, SimParams};
use surf_session::{run_session, SessionRequest, SessionStatistics};

use crate::aggregate::MetricSummary;
use crate::error::{McError, McResult};

/// The result of one Monte-Carlo batch.
#[derive(Debug)]
pub struct McOutcome {
    /// Per-run statistics, in run order.
    pub runs: Vec<SessionStatistics>,
    pub mean: MetricSummary,
    pub std:  MetricSummary,
}

/// Execute `runs` independent sessions and aggregate their statistics.
///
/// Run `i` draws from `SessionRng::for_run(seed, i)`, so the batch is
/// reproducible regardless of execution order or thread count.  Invalid
/// requests fail on the first run without silent correction.
pub fn run_many(
    req:    &SessionRequest,
    params: &SimParams,
    runs:   usize,
    seed:   u64,
) -> McResult<McOutcome> {
    if runs == 0 {
        return Err(McError::NoRuns);
    }

    let results = execute(req, params, runs, seed)?;
    Ok(McOutcome {
        mean: MetricSummary::mean_of(&results),
        std:  MetricSummary::std_of(&results),
        runs: results,
    })
}

#[cfg(not(feature = "parallel"))]
fn execute(
    req:    &SessionRequest,
    params: &SimParams,
    runs:   usize,
    seed:   u64,
) -> McResult<Vec<SessionStatistics>> {
    (0..runs)
        .map(|i| {
            let mut rng = SessionRng::for_run(seed, i as u64);
            run_session(req, params, &mut rng).map_err(McError::from)
        })
        .collect()
}

#[cfg(feature = "parallel")]
fn execute(
    req:    &SessionRequest,
    params: &SimParams,
    runs:   usize,
    seed:   u64,
) -> McResult<Vec<SessionStatistics>> {
    use rayon::prelude::*;

    (0..runs)
        .into_par_iter()
        .map(|i| {
            let mut rng = SessionRng::for_run(seed, i as u64);
            run_session(req, params, &mut rng).map_err(McError::from)
        })
        .collect()
}
