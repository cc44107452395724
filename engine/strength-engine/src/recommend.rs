use crate::calculator::ScoreCalculator;
use crate::config::ScoringConfig;
use crate::models::{LineupSuggestion, PositionDelta, TradeDecision, TradeReport};
use roster_core::{PlayerCatalog, PlayerId, Position, ProjectionTable, Roster, SlotRole, Week};
use std::collections::HashMap;
use tracing::debug;

/// Generates advisory roster moves from the scoring engine's outputs.
///
/// Nothing here mutates a roster; the caller decides whether to apply a
/// suggestion.
pub struct Recommender {
    calculator: ScoreCalculator,
}

/// Scored slot, grouped per position while building recommendations.
struct ScoredSlot {
    player_id: PlayerId,
    role: SlotRole,
    score: f64,
}

impl Recommender {
    pub fn new(config: ScoringConfig) -> Self {
        Self { calculator: ScoreCalculator::new(config) }
    }

    /// Bench-to-starter swaps worth making: for every bench player who
    /// outscores the weakest starter at the same position, propose the swap.
    /// Ordered descending by projected gain; ties broken by bench player id
    /// so repeated calls return the same sequence.
    ///
    /// Players with no projection for the week score zero, so an unprojected
    /// bench player is never promoted over a projected starter.
    pub fn recommend_lineup_changes(
        &self,
        roster: &Roster,
        catalog: &PlayerCatalog,
        projections: &ProjectionTable,
        week: Week,
    ) -> Vec<LineupSuggestion> {
        let by_position = self.scored_by_position(roster, catalog, projections, week);
        let mut suggestions = Vec::new();

        for slots in by_position.values() {
            let weakest_starter = slots
                .iter()
                .filter(|s| s.role == SlotRole::Starter)
                .min_by(|a, b| a.score.total_cmp(&b.score));
            let Some(weakest) = weakest_starter else { continue };

            for bench in slots.iter().filter(|s| s.role == SlotRole::Bench) {
                if bench.score > weakest.score {
                    suggestions.push(LineupSuggestion {
                        bench_player: bench.player_id,
                        starter_player: weakest.player_id,
                        projected_gain: bench.score - weakest.score,
                    });
                }
            }
        }

        suggestions.sort_by(|a, b| {
            b.projected_gain
                .total_cmp(&a.projected_gain)
                .then(a.bench_player.cmp(&b.bench_player))
        });
        debug!("generated {} lineup suggestions for roster {}", suggestions.len(), roster.roster_id);
        suggestions
    }

    /// Lowest-scored bench players, ascending: the first candidates to cut
    /// for a waiver pickup.
    pub fn drop_candidates(
        &self,
        roster: &Roster,
        catalog: &PlayerCatalog,
        projections: &ProjectionTable,
        week: Week,
        limit: usize,
    ) -> Vec<(PlayerId, f64)> {
        let mut candidates: Vec<(PlayerId, f64)> = roster
            .bench()
            .map(|slot| (slot.player_id, self.slot_score(slot.player_id, catalog, projections, week)))
            .collect();
        candidates.sort_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)));
        candidates.truncate(limit);
        candidates
    }

    /// Compare a roster before and after a (hypothetical or completed) trade
    /// and summarize what moved: totals, per-position deltas, depth flags,
    /// missing starters, and an accept/neutral/reject call on the starter
    /// strength change.
    pub fn trade_report(
        &self,
        before: &Roster,
        after: &Roster,
        catalog: &PlayerCatalog,
        projections: &ProjectionTable,
        week: Week,
    ) -> TradeReport {
        let before_score = self.calculator.score_roster(before, catalog, projections, week);
        let after_score = self.calculator.score_roster(after, catalog, projections, week);
        let delta_total = after_score.starter_total - before_score.starter_total;

        let mut position_deltas = Vec::new();
        let mut thin_positions = Vec::new();
        let mut surplus_positions = Vec::new();
        for pos in Position::ALL {
            let b = before_score.position(pos);
            let a = after_score.position(pos);
            let starter_delta = a.starter - b.starter;
            let bench_delta = a.bench - b.bench;
            if starter_delta != 0.0 || bench_delta != 0.0 {
                position_deltas.push(PositionDelta { position: pos, starter_delta, bench_delta });
            }

            let ratio = self.calculator.config().thin_depth_ratio;
            if a.starter > 0.0 && a.bench < ratio * a.starter {
                thin_positions.push(pos);
            }
            if a.bench > a.starter {
                surplus_positions.push(pos);
            }
        }

        let validation = self.calculator.validate_lineup(after, catalog);
        let missing_starters: Vec<Position> = Position::ALL
            .into_iter()
            .filter(|&pos| {
                self.calculator.config().starter_limit(pos) > 0
                    && validation.starter_counts.get(&pos).copied().unwrap_or(0) == 0
            })
            .collect();

        let epsilon = self.calculator.config().fairness_epsilon;
        let decision = if delta_total > epsilon {
            TradeDecision::Accept
        } else if delta_total < -epsilon {
            TradeDecision::Reject
        } else {
            TradeDecision::Neutral
        };

        TradeReport {
            before_starter: before_score.starter_total,
            before_bench: before_score.bench_total,
            after_starter: after_score.starter_total,
            after_bench: after_score.bench_total,
            delta_total,
            position_deltas,
            thin_positions,
            surplus_positions,
            missing_starters,
            decision,
        }
    }

    fn scored_by_position(
        &self,
        roster: &Roster,
        catalog: &PlayerCatalog,
        projections: &ProjectionTable,
        week: Week,
    ) -> HashMap<Position, Vec<ScoredSlot>> {
        let mut by_position: HashMap<Position, Vec<ScoredSlot>> = HashMap::new();
        for slot in roster.slots() {
            let Some(player) = catalog.get(slot.player_id) else { continue };
            let score = self.slot_score(slot.player_id, catalog, projections, week);
            by_position.entry(player.position).or_default().push(ScoredSlot {
                player_id: slot.player_id,
                role: slot.role,
                score,
            });
        }
        by_position
    }

    fn slot_score(
        &self,
        player_id: PlayerId,
        catalog: &PlayerCatalog,
        projections: &ProjectionTable,
        week: Week,
    ) -> f64 {
        catalog
            .get(player_id)
            .and_then(|player| {
                projections
                    .get(player_id, week)
                    .map(|points| self.calculator.player_score(player.position, points))
            })
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::{Player, Projection, RosterSlot};

    fn catalog() -> PlayerCatalog {
        PlayerCatalog::from_players(vec![
            Player::new(1, "Starter QB", Position::QB, "BAL"),
            Player::new(2, "Bench QB", Position::QB, "BUF"),
            Player::new(3, "Starter RB", Position::RB, "PHI"),
            Player::new(4, "Bench RB One", Position::RB, "SF"),
            Player::new(5, "Bench RB Two", Position::RB, "DAL"),
            Player::new(6, "Starter WR", Position::WR, "MIN"),
        ])
        .unwrap()
    }

    fn projections_for(points: &[(PlayerId, f64)], week: Week) -> ProjectionTable {
        let mut table = ProjectionTable::new();
        for &(id, pts) in points {
            table.insert(Projection::new(id, week, pts)).unwrap();
        }
        table
    }

    #[test]
    fn bench_outscoring_starter_yields_one_swap() {
        let roster =
            Roster::with_slots(1, vec![RosterSlot::starter(1), RosterSlot::bench(2)]).unwrap();
        let projections = projections_for(&[(1, 20.0), (2, 25.0)], 4);
        let recommender = Recommender::new(ScoringConfig::raw());

        let suggestions =
            recommender.recommend_lineup_changes(&roster, &catalog(), &projections, 4);

        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].bench_player, 2);
        assert_eq!(suggestions[0].starter_player, 1);
        assert_eq!(suggestions[0].projected_gain, 5.0);
    }

    #[test]
    fn suggestions_ordered_by_descending_gain() {
        let roster = Roster::with_slots(
            1,
            vec![
                RosterSlot::starter(1),
                RosterSlot::bench(2),
                RosterSlot::starter(3),
                RosterSlot::bench(4),
            ],
        )
        .unwrap();
        // QB swap gains 2.0, RB swap gains 7.5
        let projections = projections_for(&[(1, 20.0), (2, 22.0), (3, 10.0), (4, 17.5)], 4);
        let recommender = Recommender::new(ScoringConfig::raw());

        let suggestions =
            recommender.recommend_lineup_changes(&roster, &catalog(), &projections, 4);

        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].bench_player, 4);
        assert_eq!(suggestions[0].projected_gain, 7.5);
        assert_eq!(suggestions[1].bench_player, 2);
    }

    #[test]
    fn weaker_bench_players_are_not_suggested() {
        let roster =
            Roster::with_slots(1, vec![RosterSlot::starter(1), RosterSlot::bench(2)]).unwrap();
        let projections = projections_for(&[(1, 25.0), (2, 20.0)], 4);
        let recommender = Recommender::new(ScoringConfig::raw());

        let suggestions =
            recommender.recommend_lineup_changes(&roster, &catalog(), &projections, 4);
        assert!(suggestions.is_empty());
    }

    #[test]
    fn unprojected_bench_is_never_promoted() {
        let roster =
            Roster::with_slots(1, vec![RosterSlot::starter(1), RosterSlot::bench(2)]).unwrap();
        let projections = projections_for(&[(1, 12.0)], 4);
        let recommender = Recommender::new(ScoringConfig::raw());

        let suggestions =
            recommender.recommend_lineup_changes(&roster, &catalog(), &projections, 4);
        assert!(suggestions.is_empty());
    }

    #[test]
    fn drop_candidates_ascend_and_respect_limit() {
        let roster = Roster::with_slots(
            1,
            vec![RosterSlot::starter(1), RosterSlot::bench(2), RosterSlot::bench(4), RosterSlot::bench(5)],
        )
        .unwrap();
        let projections = projections_for(&[(1, 20.0), (2, 18.0), (4, 6.0), (5, 11.0)], 4);
        let recommender = Recommender::new(ScoringConfig::raw());

        let drops = recommender.drop_candidates(&roster, &catalog(), &projections, 4, 2);

        assert_eq!(drops.len(), 2);
        assert_eq!(drops[0], (4, 6.0));
        assert_eq!(drops[1], (5, 11.0));
    }

    #[test]
    fn losing_trade_is_rejected_with_position_deltas() {
        let before =
            Roster::with_slots(1, vec![RosterSlot::starter(3), RosterSlot::starter(6)]).unwrap();
        // After the trade the RB starter is a weaker player
        let after =
            Roster::with_slots(1, vec![RosterSlot::starter(4), RosterSlot::starter(6)]).unwrap();
        let projections = projections_for(&[(3, 18.0), (4, 9.0), (6, 15.0)], 4);
        let recommender = Recommender::new(ScoringConfig::raw());

        let report = recommender.trade_report(&before, &after, &catalog(), &projections, 4);

        assert_eq!(report.decision, TradeDecision::Reject);
        assert_eq!(report.delta_total, -9.0);
        assert_eq!(report.position_deltas.len(), 1);
        assert_eq!(report.position_deltas[0].position, Position::RB);
        assert_eq!(report.position_deltas[0].starter_delta, -9.0);
        // No QB starter on either roster
        assert!(report.missing_starters.contains(&Position::QB));
    }

    #[test]
    fn depth_flags_thin_and_surplus_positions() {
        let before = Roster::with_slots(
            1,
            vec![RosterSlot::starter(3), RosterSlot::starter(1), RosterSlot::bench(2)],
        )
        .unwrap();
        let after = before.clone();
        // RB starter 18.0 with no RB bench at all: thin.
        // QB starter 10.0 with QB bench 25.0: surplus.
        let projections = projections_for(&[(3, 18.0), (1, 10.0), (2, 25.0)], 4);
        let recommender = Recommender::new(ScoringConfig::raw());

        let report = recommender.trade_report(&before, &after, &catalog(), &projections, 4);

        assert_eq!(report.decision, TradeDecision::Neutral);
        assert!(report.thin_positions.contains(&Position::RB));
        assert!(report.surplus_positions.contains(&Position::QB));
        assert!(!report.thin_positions.contains(&Position::QB));
    }
}
