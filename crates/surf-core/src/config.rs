//! Parameter tables for the simulator.
//!
//! # Layout
//!
//! Parameters split into two groups, mirroring how they are consumed:
//!
//! - **Per-tier statistics** ([`SpotProfile`]): the distributions a given
//!   break draws waves and crowds from.  One immutable instance per
//!   [`SpotLevel`], selected at session start.
//! - **Global knobs** ([`SimParams`]): break geometry, behavioral thresholds,
//!   wave-set arrival process, and experiment-mode settings.  `Default` is the
//!   canonical parameterization; applications may override any field.
//!
//! All distances are meters, all times seconds, all speeds m/s.

use std::fmt;
use std::str::FromStr;

use crate::CoreError;

// ── Per-tier statistical configuration ────────────────────────────────────────

/// Lognormal wave-height parameters plus hard clip bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaveHeightConf {
    pub min:   f64,
    pub max:   f64,
    pub mu:    f64,
    pub sigma: f64,
}

/// Beta-distribution shape parameters for the skill draw.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillConf {
    pub alpha: f64,
    pub beta:  f64,
}

/// Normal-distribution parameters for the realistic-mode crowd size.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CrowdConf {
    pub mean: f64,
    pub std:  f64,
}

/// Uniform bounds for the per-wave speed draw.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaveSpeedConf {
    pub min: f64,
    pub max: f64,
}

/// Immutable per-difficulty-tier parameters.  Never mutated after selection.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpotProfile {
    pub wave_height: WaveHeightConf,
    pub skill:       SkillConf,
    pub crowd:       CrowdConf,
    pub wave_speed:  WaveSpeedConf,
    /// Mean wave count per set (Poisson).
    pub lambda_set:  f64,
}

impl SpotProfile {
    /// `true` if every parameter is sane enough to sample from.
    ///
    /// A failing profile is treated as degenerate-but-valid input: schedule
    /// generation yields an empty schedule rather than an error.
    pub fn is_usable(&self) -> bool {
        let h = &self.wave_height;
        let s = &self.wave_speed;
        h.min.is_finite()
            && h.max.is_finite()
            && h.min <= h.max
            && h.mu.is_finite()
            && h.sigma.is_finite()
            && h.sigma >= 0.0
            && s.min.is_finite()
            && s.max.is_finite()
            && s.min <= s.max
            && self.lambda_set.is_finite()
            && self.lambda_set > 0.0
    }
}

// ── Difficulty tiers ──────────────────────────────────────────────────────────

/// The difficulty tier of a break, selecting one built-in [`SpotProfile`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpotLevel {
    #[default]
    Beginner,
    Mixed,
    Advanced,
}

impl SpotLevel {
    /// The built-in statistical profile for this tier.
    pub fn profile(self) -> SpotProfile {
        match self {
            SpotLevel::Beginner => SpotProfile {
                wave_height: WaveHeightConf { min: 0.3, max: 1.2, mu: -0.5, sigma: 0.4 },
                skill:       SkillConf { alpha: 2.0, beta: 8.0 },
                crowd:       CrowdConf { mean: 70.0, std: 20.0 },
                wave_speed:  WaveSpeedConf { min: 2.0, max: 4.0 },
                lambda_set:  3.5,
            },
            SpotLevel::Mixed => SpotProfile {
                wave_height: WaveHeightConf { min: 0.8, max: 2.0, mu: 0.25, sigma: 0.35 },
                skill:       SkillConf { alpha: 5.0, beta: 5.0 },
                crowd:       CrowdConf { mean: 40.0, std: 30.0 },
                wave_speed:  WaveSpeedConf { min: 3.5, max: 5.5 },
                lambda_set:  4.5,
            },
            SpotLevel::Advanced => SpotProfile {
                wave_height: WaveHeightConf { min: 1.0, max: 3.5, mu: 0.7, sigma: 0.4 },
                skill:       SkillConf { alpha: 8.0, beta: 2.0 },
                crowd:       CrowdConf { mean: 30.0, std: 10.0 },
                wave_speed:  WaveSpeedConf { min: 4.5, max: 7.5 },
                lambda_set:  5.5,
            },
        }
    }

    /// Human-readable label, useful for CSV column values and prompts.
    pub fn as_str(self) -> &'static str {
        match self {
            SpotLevel::Beginner => "beginner",
            SpotLevel::Mixed    => "mixed",
            SpotLevel::Advanced => "advanced",
        }
    }
}

impl fmt::Display for SpotLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpotLevel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "beginner" => Ok(SpotLevel::Beginner),
            "mixed"    => Ok(SpotLevel::Mixed),
            "advanced" => Ok(SpotLevel::Advanced),
            other => Err(CoreError::Config(format!("unknown spot level: {other:?}"))),
        }
    }
}

// ── Right-of-way rules ────────────────────────────────────────────────────────

/// The right-of-way rule surfers follow when catching waves.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RuleType {
    /// Anyone may go for any wave.
    #[default]
    FreeForAll,
    /// A wave is off-limits if an occupant is already riding within the safe
    /// radius of the candidate's y-position.
    SafeDistance,
}

impl RuleType {
    pub fn as_str(self) -> &'static str {
        match self {
            RuleType::FreeForAll   => "free_for_all",
            RuleType::SafeDistance => "safe_distance",
        }
    }
}

impl fmt::Display for RuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "free_for_all" => Ok(RuleType::FreeForAll),
            "safe_distance" | "safe_distance_rule" => Ok(RuleType::SafeDistance),
            other => Err(CoreError::Config(format!("unknown rule type: {other:?}"))),
        }
    }
}

// ── Population modes ──────────────────────────────────────────────────────────

/// How the initial skill population is generated.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SessionMode {
    /// Crowd size and skills drawn from the tier's statistical profile.
    #[default]
    Realistic,
    /// Fixed crowd split into beginner/advanced bands by an explicit ratio.
    Experiment,
}

impl SessionMode {
    pub fn as_str(self) -> &'static str {
        match self {
            SessionMode::Realistic  => "realistic",
            SessionMode::Experiment => "experiment",
        }
    }
}

impl fmt::Display for SessionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SessionMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "realistic"  => Ok(SessionMode::Realistic),
            "experiment" => Ok(SessionMode::Experiment),
            other => Err(CoreError::Config(format!("unknown session mode: {other:?}"))),
        }
    }
}

/// Lowercase and fold dashes/spaces to underscores so prompt input like
/// `safe-distance-rule` parses.
fn normalize(s: &str) -> String {
    s.trim().to_ascii_lowercase().replace(['-', ' '], "_")
}

// ── Global tuning tables ──────────────────────────────────────────────────────

/// Gamma parameters for the inter-set arrival interval.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WavesetArrival {
    pub shape: f64,
    pub scale: f64,
}

impl Default for WavesetArrival {
    fn default() -> Self {
        Self { shape: 2.0, scale: 3.0 }
    }
}

impl WavesetArrival {
    pub fn is_usable(&self) -> bool {
        self.shape.is_finite() && self.shape > 0.0 && self.scale.is_finite() && self.scale > 0.0
    }
}

/// Physical geometry of the break and lineup.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BreakLayout {
    /// Alongshore ocean bounds; surfer y is drawn uniformly in this band.
    pub ocean_y_min: f64,
    pub ocean_y_max: f64,
    /// Waves spawn at this distance from shore and travel toward x = 0.
    pub ocean_x_max: f64,
    /// Lineup x for a zero-skill surfer.
    pub lineup_near_shore: f64,
    /// Lineup x for a max-skill surfer.
    pub lineup_outside: f64,
    /// Best-position range; a surfer's bp interpolates this by skill.
    pub bp_min: f64,
    pub bp_max: f64,
    /// Std-dev of the Normal jitter around the skill-interpolated start x.
    pub placement_spread: f64,
}

impl Default for BreakLayout {
    fn default() -> Self {
        Self {
            ocean_y_min:       -50.0,
            ocean_y_max:       50.0,
            ocean_x_max:       150.0,
            lineup_near_shore: 10.0,
            lineup_outside:    90.0,
            bp_min:            30.0,
            bp_max:            80.0,
            placement_spread:  5.0,
        }
    }
}

/// Distance thresholds and probability-model constants for surfer behavior.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BehaviorTuning {
    /// Ride distance required to count as a successful ride.
    pub success_distance: f64,
    /// Radius of the safe-distance right-of-way rule.
    pub safe_distance: f64,
    /// Distance to bp at which paddling hands over to waiting.
    pub paddle_threshold: f64,
    /// Max distance to a wave peak to attempt catching it.
    pub catch_threshold: f64,
    /// Two surfers closer than this (and not both floating) collide.
    pub collision_radius: f64,
    /// Lower bound of the attempt-probability map.
    pub attempt_rate_min: f64,
    /// Upper bound of the attempt-probability map.
    pub attempt_rate_max: f64,
    /// Impact of wave height on pop-up success (0 to 1).
    pub alpha_success: f64,
    /// Fixed wave-height normalization range for the probability model,
    /// independent of any spot profile's height bounds.
    pub height_norm_min: f64,
    pub height_norm_max: f64,
    /// Paddle speed is `base + coeff * skill`.
    pub paddle_speed_base:  f64,
    pub paddle_speed_coeff: f64,
}

impl Default for BehaviorTuning {
    fn default() -> Self {
        Self {
            success_distance:   10.0,
            safe_distance:      10.0,
            paddle_threshold:   5.0,
            catch_threshold:    2.0,
            collision_radius:   3.0,
            attempt_rate_min:   0.1,
            attempt_rate_max:   0.9,
            alpha_success:      1.0,
            height_norm_min:    0.5,
            height_norm_max:    3.0,
            paddle_speed_base:  0.8,
            paddle_speed_coeff: 0.1,
        }
    }
}

impl BehaviorTuning {
    /// Normalize a wave height into [0, 1] on the fixed model range.
    #[inline]
    pub fn normalized_height(&self, height: f64) -> f64 {
        let span = self.height_norm_max - self.height_norm_min;
        ((height - self.height_norm_min) / span).clamp(0.0, 1.0)
    }
}

/// Experiment-mode population settings (ignored in realistic mode).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ExperimentConf {
    /// Crowd size when the caller does not supply one.
    pub num_surfer_fixed: usize,
    /// Uniform skill range for the beginner share.
    pub beginner_skill: (f64, f64),
    /// Uniform skill range for the remainder.
    pub advanced_skill: (f64, f64),
}

impl Default for ExperimentConf {
    fn default() -> Self {
        Self {
            num_surfer_fixed: 80,
            beginner_skill:   (0.0, 0.3),
            advanced_skill:   (0.7, 1.0),
        }
    }
}

/// The full bundle of global knobs threaded through the engine.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimParams {
    pub layout:     BreakLayout,
    pub behavior:   BehaviorTuning,
    pub arrival:    WavesetArrival,
    pub experiment: ExperimentConf,
}
