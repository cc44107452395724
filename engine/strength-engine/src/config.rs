use roster_core::Position;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// League scoring preset. The preset sets the per-reception bonus applied on
/// top of the raw projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoringPreset {
    Standard,
    HalfPpr,
    Ppr,
}

impl ScoringPreset {
    /// Bonus points per estimated reception.
    pub fn reception_bonus(&self) -> f64 {
        match self {
            ScoringPreset::Standard => 0.0,
            ScoringPreset::HalfPpr => 0.5,
            ScoringPreset::Ppr => 1.0,
        }
    }
}

/// Configuration for the strength engine.
///
/// Defaults to raw mode: plain summation of projected points with no
/// positional weighting, so the engine stays the single source of truth for
/// raw projections. [`ScoringConfig::weighted`] enables the league-style
/// position weights and reception bonuses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Per-position score multipliers
    pub position_weights: HashMap<Position, f64>,

    /// Weight for positions not in the map
    pub default_weight: f64,

    /// Scoring preset controlling the reception bonus
    pub scoring_preset: ScoringPreset,

    /// Estimated receptions per game by position, used with PPR presets
    pub reception_estimates: HashMap<Position, f64>,

    /// Starter slots allowed per position
    pub starter_limits: HashMap<Position, u32>,

    /// Limit for positions not in the map
    pub default_limit: u32,

    /// Minimum projected-point edge before a trade favors one side
    pub fairness_epsilon: f64,

    /// Bench-to-starter strength ratio below which depth is flagged as thin
    pub thin_depth_ratio: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self::raw()
    }
}

impl ScoringConfig {
    /// Raw mode: scores are exactly the projected points.
    pub fn raw() -> Self {
        Self {
            position_weights: HashMap::new(),
            default_weight: 1.0,
            scoring_preset: ScoringPreset::Standard,
            reception_estimates: HashMap::new(),
            starter_limits: Self::default_starter_limits(),
            default_limit: 1,
            fairness_epsilon: 1.0,
            thin_depth_ratio: 0.30,
        }
    }

    /// League-style weighting: positional multipliers plus PPR reception
    /// bonuses.
    pub fn weighted() -> Self {
        let mut position_weights = HashMap::new();
        position_weights.insert(Position::QB, 1.00);
        position_weights.insert(Position::RB, 1.08);
        position_weights.insert(Position::WR, 1.08);
        position_weights.insert(Position::TE, 1.00);
        position_weights.insert(Position::K, 0.45);
        position_weights.insert(Position::DST, 0.65);

        let mut reception_estimates = HashMap::new();
        reception_estimates.insert(Position::RB, 3.5);
        reception_estimates.insert(Position::WR, 6.0);
        reception_estimates.insert(Position::TE, 4.5);

        Self {
            position_weights,
            default_weight: 1.0,
            scoring_preset: ScoringPreset::Ppr,
            reception_estimates,
            ..Self::raw()
        }
    }

    fn default_starter_limits() -> HashMap<Position, u32> {
        let mut limits = HashMap::new();
        limits.insert(Position::QB, 1);
        limits.insert(Position::RB, 2);
        limits.insert(Position::WR, 2);
        limits.insert(Position::TE, 1);
        limits.insert(Position::K, 1);
        limits.insert(Position::DST, 1);
        limits
    }

    /// Load configuration overrides from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(preset) = std::env::var("STRENGTH_PRESET") {
            match preset.to_lowercase().as_str() {
                "standard" => config.scoring_preset = ScoringPreset::Standard,
                "half-ppr" | "half_ppr" => config.scoring_preset = ScoringPreset::HalfPpr,
                "ppr" => config.scoring_preset = ScoringPreset::Ppr,
                _ => {}
            }
        }

        if let Ok(epsilon) = std::env::var("STRENGTH_FAIRNESS_EPSILON") {
            config.fairness_epsilon = epsilon.parse().unwrap_or(1.0);
        }

        if let Ok(ratio) = std::env::var("STRENGTH_THIN_DEPTH_RATIO") {
            config.thin_depth_ratio = ratio.parse().unwrap_or(0.30);
        }

        config
    }

    /// Score multiplier for a position.
    pub fn position_weight(&self, position: Position) -> f64 {
        self.position_weights.get(&position).copied().unwrap_or(self.default_weight)
    }

    /// Estimated receptions per game for a position.
    pub fn reception_estimate(&self, position: Position) -> f64 {
        self.reception_estimates.get(&position).copied().unwrap_or(0.0)
    }

    /// Starter slots allowed for a position.
    pub fn starter_limit(&self, position: Position) -> u32 {
        self.starter_limits.get(&position).copied().unwrap_or(self.default_limit)
    }
}
