//! `surf-session` — the per-session simulation engine.
//!
//! One session simulates a fixed number of one-second ticks during which a
//! population of surfers competes for a stochastically generated stream of
//! waves under a right-of-way rule.  The engine is pure with respect to its
//! inputs: a [`SessionRequest`], a [`surf_core::SimParams`] bundle, and one
//! seeded [`surf_core::SessionRng`] fully determine the returned
//! [`SessionStatistics`].
//!
//! # Crate layout
//!
//! | Module         | Contents                                                |
//! |----------------|---------------------------------------------------------|
//! | [`schedule`]   | Wave-arrival generation (`build_schedule`)              |
//! | [`wave`]       | `WaveEvent`, `Wave`, session-owned `WavePool`           |
//! | [`population`] | Realistic / experiment skill rosters                    |
//! | [`surfer`]     | `Surfer` state machine and probability model            |
//! | [`collision`]  | Pairwise collision predicate                            |
//! | [`stats`]      | Gini index and end-of-session reduction                 |
//! | [`session`]    | `Session` tick loop and the `run_session` entry point   |
//! | [`observer`]   | `SessionObserver` progress hooks                        |
//! | [`error`]      | `SessionError`, `SessionResult`                         |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use surf_core::{RuleType, SessionRng, SimParams, SpotLevel};
//! use surf_session::{run_session, SessionRequest};
//!
//! let req = SessionRequest::new(SpotLevel::Mixed, RuleType::SafeDistance);
//! let stats = run_session(&req, &SimParams::default(), &mut SessionRng::new(42))?;
//! println!("{:.2} rides/surfer", stats.avg_success_count);
//! ```

pub mod collision;
pub mod error;
pub mod observer;
pub mod population;
pub mod schedule;
pub mod session;
pub mod stats;
pub mod surfer;
pub mod wave;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{SessionError, SessionResult};
pub use observer::{NoopObserver, SessionObserver};
pub use schedule::build_schedule;
pub use session::{run_session, run_session_observed, Session, SessionRequest,
                  DEFAULT_SESSION_DURATION_SECS};
pub use stats::{compute_stats, gini, SessionStatistics};
pub use surfer::{RideCounters, Surfer, SurferState};
pub use wave::{Wave, WaveEvent, WavePool};
