//! Team Strength & Trade Evaluation Engine
//!
//! Turns raw player projections and roster composition into strength scores,
//! position breakdowns, strength history series, trade fairness verdicts, and
//! lineup recommendations. Every operation is a pure function over immutable
//! inputs; the only mutable state is the [`StrengthHistory`] snapshot store.
//!
//! Transport, storage, auth, and presentation live in the surrounding
//! application. This crate consumes their records and returns derived values.

pub mod calculator;
pub mod config;
pub mod error;
pub mod history;
pub mod models;
pub mod recommend;
pub mod trade;

pub use calculator::ScoreCalculator;
pub use config::{ScoringConfig, ScoringPreset};
pub use error::{EngineError, Result};
pub use history::StrengthHistory;
pub use models::{
    LineupSuggestion, LineupValidation, LineupViolation, PositionDelta, PositionScore,
    ScoreBreakdown, StrengthSnapshot, TradeDecision, TradeProposal, TradeRecommendation,
    TradeReport, TradeSide, TradeVerdict,
};
pub use recommend::Recommender;
pub use trade::TradeEvaluator;
