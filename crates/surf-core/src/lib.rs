//! `surf-core` — foundational types for the surf-break crowding simulator.
//!
//! This crate is a dependency of every other `surf-*` crate.  It intentionally
//! has no `surf-*` dependencies and minimal external ones (only `rand`,
//! `rand_distr`, and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`config`]   | `SpotProfile`, `SpotLevel`, `RuleType`, `SessionMode`, tuning tables |
//! | [`ids`]      | `WaveId`                                                  |
//! | [`rng`]      | `SessionRng` (one seeded draw stream per session)         |
//! | [`error`]    | `CoreError`, `CoreResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                      |
//! |---------|-------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public config types.  |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{
    BehaviorTuning, BreakLayout, CrowdConf, ExperimentConf, RuleType, SessionMode, SimParams,
    SkillConf, SpotLevel, SpotProfile, WaveHeightConf, WaveSpeedConf, WavesetArrival,
};
pub use error::{CoreError, CoreResult};
pub use ids::WaveId;
pub use rng::SessionRng;
