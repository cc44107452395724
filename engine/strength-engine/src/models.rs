use chrono::{DateTime, Utc};
use roster_core::{PlayerId, Position, RosterId, Week};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Starter and bench aggregate for one position.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PositionScore {
    pub starter: f64,
    pub bench: f64,
}

impl PositionScore {
    pub fn total(&self) -> f64 {
        self.starter + self.bench
    }
}

/// Aggregate strength of one roster at one week, bucketed by position and
/// starter/bench role. Recomputed on demand, never persisted here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub week: Week,
    pub positions: HashMap<Position, PositionScore>,
    pub starter_total: f64,
    pub bench_total: f64,

    /// Rostered players with no projection for this week. Zero contribution,
    /// reported so the caller can warn about incomplete data.
    pub missing_projections: Vec<PlayerId>,

    /// Roster slots whose player id is absent from the catalog. Zero
    /// contribution; flagged distinctly since it suggests stale roster data.
    pub missing_players: Vec<PlayerId>,
}

impl ScoreBreakdown {
    pub fn empty(week: Week) -> Self {
        Self {
            week,
            positions: HashMap::new(),
            starter_total: 0.0,
            bench_total: 0.0,
            missing_projections: Vec::new(),
            missing_players: Vec::new(),
        }
    }

    /// Aggregate for a position; zero when no player at the position scored.
    pub fn position(&self, position: Position) -> PositionScore {
        self.positions.get(&position).copied().unwrap_or_default()
    }

    pub fn total(&self) -> f64 {
        self.starter_total + self.bench_total
    }

    /// True when any slot contributed zero for data-completeness reasons.
    pub fn has_missing_data(&self) -> bool {
        !self.missing_projections.is_empty() || !self.missing_players.is_empty()
    }
}

/// One point on a roster's strength-over-weeks series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengthSnapshot {
    pub roster_id: RosterId,
    pub week: Week,
    pub starter_total: f64,
    pub bench_total: f64,
    pub recorded_at: DateTime<Utc>,
}

/// One side of a proposed trade: the roster and the players it gives up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeSide {
    pub roster_id: RosterId,
    pub gives: Vec<PlayerId>,
}

impl TradeSide {
    pub fn new(roster_id: RosterId, gives: Vec<PlayerId>) -> Self {
        Self { roster_id, gives }
    }
}

/// A proposed player exchange between two rosters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeProposal {
    pub side_a: TradeSide,
    pub side_b: TradeSide,
}

/// Which side a trade favors, judged against the fairness epsilon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeRecommendation {
    FavorsA,
    FavorsB,
    Balanced,
}

/// Outcome of evaluating a trade proposal. Derived, not persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeVerdict {
    /// Net strength change for side A: value received minus value given
    pub delta_a: f64,
    /// Net strength change for side B
    pub delta_b: f64,
    /// |delta_a| / (|delta_a| + |delta_b|); 0.5 means perfectly balanced
    pub fairness_ratio: f64,
    pub recommendation: TradeRecommendation,
    /// Traded players with no projection for the evaluated week
    pub missing_projections: Vec<PlayerId>,
    /// Traded players absent from the catalog entirely; flagged apart from
    /// missing projections since it suggests stale roster data
    pub missing_players: Vec<PlayerId>,
}

/// A suggested bench-to-starter swap, advisory only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineupSuggestion {
    pub bench_player: PlayerId,
    pub starter_player: PlayerId,
    pub projected_gain: f64,
}

/// A starter count exceeding the configured limit for a position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineupViolation {
    pub position: Position,
    pub current: u32,
    pub limit: u32,
    pub excess: u32,
}

/// Result of validating a lineup against the starter limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineupValidation {
    pub valid: bool,
    pub violations: Vec<LineupViolation>,
    pub starter_counts: HashMap<Position, u32>,
}

/// Overall call on a before/after roster comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeDecision {
    Accept,
    Neutral,
    Reject,
}

/// Starter and bench strength movement for one position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionDelta {
    pub position: Position,
    pub starter_delta: f64,
    pub bench_delta: f64,
}

/// Before/after comparison of a roster, used to judge a completed or
/// hypothetical trade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeReport {
    pub before_starter: f64,
    pub before_bench: f64,
    pub after_starter: f64,
    pub after_bench: f64,
    /// Change in starter strength; the number the decision is made on
    pub delta_total: f64,
    /// Positions whose starter or bench strength moved
    pub position_deltas: Vec<PositionDelta>,
    /// Positions where bench strength fell below the thin-depth ratio
    pub thin_positions: Vec<Position>,
    /// Positions where the bench outscores the starters
    pub surplus_positions: Vec<Position>,
    /// Positions with a starter requirement but no starter set
    pub missing_starters: Vec<Position>,
    pub decision: TradeDecision,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_breakdown_serializes_for_chart_consumers() {
        let mut breakdown = ScoreBreakdown::empty(4);
        breakdown.positions.insert(Position::QB, PositionScore { starter: 22.0, bench: 24.0 });
        breakdown.starter_total = 22.0;
        breakdown.bench_total = 24.0;
        breakdown.missing_projections.push(7);

        let json = serde_json::to_string(&breakdown).unwrap();
        // Position keys come out as plain strings
        assert!(json.contains("\"QB\""));

        let parsed: ScoreBreakdown = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, breakdown);
        assert_eq!(parsed.position(Position::QB).bench, 24.0);
    }

    #[test]
    fn trade_verdict_serializes_for_ui_consumers() {
        let verdict = TradeVerdict {
            delta_a: -2.5,
            delta_b: 2.5,
            fairness_ratio: 0.5,
            recommendation: TradeRecommendation::FavorsB,
            missing_projections: vec![3],
            missing_players: Vec::new(),
        };

        let json = serde_json::to_string(&verdict).unwrap();
        assert!(json.contains("\"FavorsB\""));

        let parsed: TradeVerdict = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, verdict);
    }
}
