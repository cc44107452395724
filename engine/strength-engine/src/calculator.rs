use crate::config::ScoringConfig;
use crate::models::{LineupValidation, LineupViolation, PositionScore, ScoreBreakdown};
use roster_core::{PlayerCatalog, Position, ProjectionTable, Roster, SlotRole, Week};
use std::collections::HashMap;
use tracing::debug;

/// Score calculator for roster strength.
///
/// All methods are pure functions over the supplied reference data; the
/// calculator itself only carries configuration.
pub struct ScoreCalculator {
    config: ScoringConfig,
}

impl ScoreCalculator {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Contribution score for one player given their weekly projection.
    ///
    /// score = projection * position_weight + est_receptions * reception_bonus
    ///
    /// With the raw (default) config this is exactly the projection.
    pub fn player_score(&self, position: Position, projection: f64) -> f64 {
        let weighted = projection * self.config.position_weight(position);
        let bonus =
            self.config.reception_estimate(position) * self.config.scoring_preset.reception_bonus();
        weighted + bonus
    }

    /// Score every slot on a roster for a week and bucket the contributions
    /// by (position, role).
    ///
    /// Missing data never fails the call: a slot whose player is absent from
    /// the catalog, or whose player has no projection for the week,
    /// contributes zero and is recorded in the breakdown's diagnostics. An
    /// empty roster yields an all-zero breakdown with empty diagnostics,
    /// which keeps it distinguishable from a week where projections were
    /// simply missing.
    pub fn score_roster(
        &self,
        roster: &Roster,
        catalog: &PlayerCatalog,
        projections: &ProjectionTable,
        week: Week,
    ) -> ScoreBreakdown {
        let mut breakdown = ScoreBreakdown::empty(week);

        for slot in roster.slots() {
            let Some(player) = catalog.get(slot.player_id) else {
                debug!("slot references unknown player {}, scoring as zero", slot.player_id);
                breakdown.missing_players.push(slot.player_id);
                continue;
            };

            let Some(projection) = projections.get(slot.player_id, week) else {
                debug!(
                    "no week {} projection for {} ({}), scoring as zero",
                    week, player.name, player.player_id
                );
                breakdown.missing_projections.push(slot.player_id);
                continue;
            };

            let score = self.player_score(player.position, projection);
            let bucket = breakdown.positions.entry(player.position).or_default();
            match slot.role {
                SlotRole::Starter => {
                    bucket.starter += score;
                    breakdown.starter_total += score;
                }
                SlotRole::Bench => {
                    bucket.bench += score;
                    breakdown.bench_total += score;
                }
            }
        }

        debug!(
            "scored roster {} week {}: starters {:.2}, bench {:.2}",
            roster.roster_id, week, breakdown.starter_total, breakdown.bench_total
        );

        breakdown
    }

    /// Restructure a breakdown into the fixed canonical position order for
    /// chart consumers. Every position appears, zero-filled where the roster
    /// had no contribution. No additional computation.
    pub fn build_breakdown(&self, score: &ScoreBreakdown) -> Vec<(Position, PositionScore)> {
        Position::ALL.iter().map(|&pos| (pos, score.position(pos))).collect()
    }

    /// Validate starter counts against the configured per-position limits.
    /// Advisory: violations never block scoring.
    pub fn validate_lineup(&self, roster: &Roster, catalog: &PlayerCatalog) -> LineupValidation {
        let mut starter_counts: HashMap<Position, u32> = HashMap::new();
        for slot in roster.starters() {
            if let Some(player) = catalog.get(slot.player_id) {
                *starter_counts.entry(player.position).or_insert(0) += 1;
            }
        }

        let mut violations = Vec::new();
        for pos in Position::ALL {
            let current = starter_counts.get(&pos).copied().unwrap_or(0);
            let limit = self.config.starter_limit(pos);
            if current > limit {
                violations.push(LineupViolation {
                    position: pos,
                    current,
                    limit,
                    excess: current - limit,
                });
            }
        }

        LineupValidation { valid: violations.is_empty(), violations, starter_counts }
    }

    /// Whether another starter at the given position would stay within the
    /// configured limit.
    pub fn can_add_starter(
        &self,
        roster: &Roster,
        catalog: &PlayerCatalog,
        position: Position,
    ) -> bool {
        let validation = self.validate_lineup(roster, catalog);
        let current = validation.starter_counts.get(&position).copied().unwrap_or(0);
        current < self.config.starter_limit(position)
    }
}
