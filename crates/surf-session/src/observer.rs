//! Session observer trait for progress reporting.

use crate::stats::SessionStatistics;

/// Callbacks invoked by [`run_session_observed`][crate::run_session_observed]
/// at tick boundaries.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u32 }
///
/// impl SessionObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: u32, active_waves: usize, riders: usize) {
///         if tick % self.interval == 0 {
///             println!("t={tick}: {active_waves} waves, {riders} riding");
///         }
///     }
/// }
/// ```
pub trait SessionObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: u32) {}

    /// Called at the end of each tick with the number of waves still in the
    /// water and the number of surfers currently riding.
    fn on_tick_end(&mut self, _tick: u32, _active_waves: usize, _riders: usize) {}

    /// Called once after the final tick with the computed statistics.
    fn on_session_end(&mut self, _stats: &SessionStatistics) {}
}

/// A [`SessionObserver`] that does nothing.  Use when you need to run a
/// session but don't want progress callbacks.
pub struct NoopObserver;

impl SessionObserver for NoopObserver {}
