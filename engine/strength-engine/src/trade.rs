use crate::calculator::ScoreCalculator;
use crate::config::ScoringConfig;
use crate::error::{EngineError, Result};
use crate::models::{TradeProposal, TradeRecommendation, TradeSide, TradeVerdict};
use roster_core::{PlayerCatalog, PlayerId, ProjectionTable, Roster, Week};
use std::collections::HashSet;
use tracing::{info, warn};

/// Evaluates trade proposals for fairness.
///
/// Player values come from the same scoring path as roster strength, so the
/// verdict and the strength scores never disagree about what a player is
/// worth.
pub struct TradeEvaluator {
    calculator: ScoreCalculator,
}

impl TradeEvaluator {
    pub fn new(config: ScoringConfig) -> Self {
        Self { calculator: ScoreCalculator::new(config) }
    }

    /// Evaluate a proposal against the two rosters it names, using the given
    /// week's projections for both sides.
    ///
    /// Structural problems (empty side, overlapping players, a given player
    /// not on its stated roster) fail with [`EngineError::InvalidTrade`]
    /// before any scoring happens. Missing projections for traded players
    /// contribute zero and are reported on the verdict; they never abort the
    /// evaluation.
    pub fn evaluate(
        &self,
        proposal: &TradeProposal,
        roster_a: &Roster,
        roster_b: &Roster,
        catalog: &PlayerCatalog,
        projections: &ProjectionTable,
        week: Week,
    ) -> Result<TradeVerdict> {
        self.validate(proposal, roster_a, roster_b)?;

        let mut missing_projections = Vec::new();
        let mut missing_players = Vec::new();
        let a_gives = self.side_value(
            &proposal.side_a,
            catalog,
            projections,
            week,
            &mut missing_projections,
            &mut missing_players,
        );
        let b_gives = self.side_value(
            &proposal.side_b,
            catalog,
            projections,
            week,
            &mut missing_projections,
            &mut missing_players,
        );

        // Receiving minus giving, with both sides valued at the same week.
        // delta_a == -delta_b holds exactly under that condition.
        let delta_a = b_gives - a_gives;
        let delta_b = a_gives - b_gives;

        let denominator = delta_a.abs() + delta_b.abs();
        let fairness_ratio =
            if denominator == 0.0 { 0.5 } else { delta_a.abs() / denominator };

        let epsilon = self.calculator.config().fairness_epsilon;
        let recommendation = if delta_a > delta_b + epsilon {
            TradeRecommendation::FavorsA
        } else if delta_b > delta_a + epsilon {
            TradeRecommendation::FavorsB
        } else {
            TradeRecommendation::Balanced
        };

        if !missing_projections.is_empty() {
            warn!(
                "trade evaluated with {} unprojected players for week {}: {:?}",
                missing_projections.len(),
                week,
                missing_projections
            );
        }
        if !missing_players.is_empty() {
            warn!("trade references players missing from the catalog: {:?}", missing_players);
        }
        info!(
            "trade roster {} vs {}: delta_a {:+.2}, delta_b {:+.2}, ratio {:.3}, {:?}",
            roster_a.roster_id, roster_b.roster_id, delta_a, delta_b, fairness_ratio, recommendation
        );

        Ok(TradeVerdict {
            delta_a,
            delta_b,
            fairness_ratio,
            recommendation,
            missing_projections,
            missing_players,
        })
    }

    fn validate(
        &self,
        proposal: &TradeProposal,
        roster_a: &Roster,
        roster_b: &Roster,
    ) -> Result<()> {
        if proposal.side_a.roster_id != roster_a.roster_id
            || proposal.side_b.roster_id != roster_b.roster_id
        {
            return Err(EngineError::InvalidTrade(
                "proposal roster ids do not match the supplied rosters".to_string(),
            ));
        }

        if proposal.side_a.gives.is_empty() || proposal.side_b.gives.is_empty() {
            return Err(EngineError::InvalidTrade(
                "both sides must give at least one player".to_string(),
            ));
        }

        let set_a: HashSet<PlayerId> = proposal.side_a.gives.iter().copied().collect();
        let set_b: HashSet<PlayerId> = proposal.side_b.gives.iter().copied().collect();
        if set_a.len() != proposal.side_a.gives.len() || set_b.len() != proposal.side_b.gives.len()
        {
            return Err(EngineError::InvalidTrade(
                "a player is listed more than once on one side".to_string(),
            ));
        }
        if let Some(shared) = set_a.intersection(&set_b).next() {
            return Err(EngineError::InvalidTrade(format!(
                "player {shared} appears on both sides"
            )));
        }

        for &player_id in &proposal.side_a.gives {
            if !roster_a.contains(player_id) {
                return Err(EngineError::InvalidTrade(format!(
                    "player {player_id} is not on roster {}",
                    roster_a.roster_id
                )));
            }
        }
        for &player_id in &proposal.side_b.gives {
            if !roster_b.contains(player_id) {
                return Err(EngineError::InvalidTrade(format!(
                    "player {player_id} is not on roster {}",
                    roster_b.roster_id
                )));
            }
        }

        Ok(())
    }

    /// Total projected value a side gives up. Players without a projection
    /// contribute zero, as do players missing from the catalog entirely;
    /// each case is collected into its own diagnostic list on the verdict.
    fn side_value(
        &self,
        side: &TradeSide,
        catalog: &PlayerCatalog,
        projections: &ProjectionTable,
        week: Week,
        missing_projections: &mut Vec<PlayerId>,
        missing_players: &mut Vec<PlayerId>,
    ) -> f64 {
        let mut value = 0.0;
        for &player_id in &side.gives {
            let Some(player) = catalog.get(player_id) else {
                missing_players.push(player_id);
                continue;
            };
            match projections.get(player_id, week) {
                Some(points) => value += self.calculator.player_score(player.position, points),
                None => missing_projections.push(player_id),
            }
        }
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::{Player, Position, Projection, RosterSlot};

    fn test_catalog() -> PlayerCatalog {
        PlayerCatalog::from_players(vec![
            Player::new(1, "Lamar Jackson", Position::QB, "BAL"),
            Player::new(2, "Josh Allen", Position::QB, "BUF"),
            Player::new(3, "Derrick Henry", Position::RB, "BAL"),
            Player::new(4, "Saquon Barkley", Position::RB, "PHI"),
        ])
        .unwrap()
    }

    fn rosters() -> (Roster, Roster) {
        let a = Roster::with_slots(10, vec![RosterSlot::starter(1), RosterSlot::bench(3)]).unwrap();
        let b = Roster::with_slots(20, vec![RosterSlot::starter(2), RosterSlot::bench(4)]).unwrap();
        (a, b)
    }

    fn projections_for(points: &[(PlayerId, f64)], week: Week) -> ProjectionTable {
        let mut table = ProjectionTable::new();
        for &(id, pts) in points {
            table.insert(Projection::new(id, week, pts)).unwrap();
        }
        table
    }

    fn proposal(a_gives: Vec<PlayerId>, b_gives: Vec<PlayerId>) -> TradeProposal {
        TradeProposal {
            side_a: TradeSide::new(10, a_gives),
            side_b: TradeSide::new(20, b_gives),
        }
    }

    #[test]
    fn equal_value_trade_is_balanced() {
        let (a, b) = rosters();
        let catalog = test_catalog();
        let projections = projections_for(&[(1, 10.0), (2, 10.0)], 4);
        let evaluator = TradeEvaluator::new(ScoringConfig::raw());

        let verdict =
            evaluator.evaluate(&proposal(vec![1], vec![2]), &a, &b, &catalog, &projections, 4).unwrap();

        assert_eq!(verdict.delta_a, 0.0);
        assert_eq!(verdict.delta_b, 0.0);
        assert_eq!(verdict.recommendation, TradeRecommendation::Balanced);
        assert!((verdict.fairness_ratio - 0.5).abs() < 1e-9);
        assert!(verdict.missing_projections.is_empty());
    }

    #[test]
    fn deltas_are_exact_negations() {
        let (a, b) = rosters();
        let catalog = test_catalog();
        let projections = projections_for(&[(1, 22.0), (3, 17.5), (2, 24.0)], 4);
        let evaluator = TradeEvaluator::new(ScoringConfig::raw());

        let verdict = evaluator
            .evaluate(&proposal(vec![1, 3], vec![2]), &a, &b, &catalog, &projections, 4)
            .unwrap();

        assert_eq!(verdict.delta_a, -verdict.delta_b);
        // A gives 39.5, receives 24.0
        assert_eq!(verdict.delta_a, 24.0 - 39.5);
    }

    #[test]
    fn lopsided_trade_favors_the_gaining_side() {
        let (a, b) = rosters();
        let catalog = test_catalog();
        let projections = projections_for(&[(1, 8.0), (2, 24.0)], 4);
        let evaluator = TradeEvaluator::new(ScoringConfig::raw());

        let verdict =
            evaluator.evaluate(&proposal(vec![1], vec![2]), &a, &b, &catalog, &projections, 4).unwrap();

        // A gives 8, receives 24: A comes out ahead
        assert_eq!(verdict.recommendation, TradeRecommendation::FavorsA);
        assert!(verdict.delta_a > 0.0);
        assert!((verdict.fairness_ratio - 0.5).abs() < 1e-9);
    }

    #[test]
    fn near_equal_trade_within_epsilon_is_balanced() {
        let (a, b) = rosters();
        let catalog = test_catalog();
        let projections = projections_for(&[(1, 20.0), (2, 20.4)], 4);
        let evaluator = TradeEvaluator::new(ScoringConfig::raw()); // epsilon 1.0

        let verdict =
            evaluator.evaluate(&proposal(vec![1], vec![2]), &a, &b, &catalog, &projections, 4).unwrap();

        assert_eq!(verdict.recommendation, TradeRecommendation::Balanced);
    }

    #[test]
    fn empty_side_is_invalid() {
        let (a, b) = rosters();
        let catalog = test_catalog();
        let projections = ProjectionTable::new();
        let evaluator = TradeEvaluator::new(ScoringConfig::raw());

        let err = evaluator
            .evaluate(&proposal(vec![1], vec![]), &a, &b, &catalog, &projections, 4)
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidTrade(_)));
    }

    #[test]
    fn player_on_both_sides_is_invalid() {
        let (mut a, b) = rosters();
        a.insert_slot(RosterSlot::bench(2)).unwrap();
        let catalog = test_catalog();
        let projections = ProjectionTable::new();
        let evaluator = TradeEvaluator::new(ScoringConfig::raw());

        let err = evaluator
            .evaluate(&proposal(vec![2], vec![2]), &a, &b, &catalog, &projections, 4)
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidTrade(_)));
    }

    #[test]
    fn player_off_stated_roster_is_invalid() {
        let (a, b) = rosters();
        let catalog = test_catalog();
        // Player 4 is on roster B, not A
        let projections = projections_for(&[(4, 15.0), (2, 15.0)], 4);
        let evaluator = TradeEvaluator::new(ScoringConfig::raw());

        let err = evaluator
            .evaluate(&proposal(vec![4], vec![2]), &a, &b, &catalog, &projections, 4)
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidTrade(_)));
    }

    #[test]
    fn missing_projection_degrades_to_zero_with_diagnostic() {
        let (a, b) = rosters();
        let catalog = test_catalog();
        // Only side B's player has a projection
        let projections = projections_for(&[(2, 24.0)], 4);
        let evaluator = TradeEvaluator::new(ScoringConfig::raw());

        let verdict =
            evaluator.evaluate(&proposal(vec![1], vec![2]), &a, &b, &catalog, &projections, 4).unwrap();

        assert_eq!(verdict.missing_projections, vec![1]);
        assert!(verdict.missing_players.is_empty());
        assert_eq!(verdict.delta_a, 24.0);
        assert_eq!(verdict.recommendation, TradeRecommendation::FavorsA);
    }

    #[test]
    fn uncataloged_player_is_flagged_apart_from_missing_projections() {
        let (mut a, b) = rosters();
        // Player 99 occupies a slot but is unknown to the catalog
        a.insert_slot(RosterSlot::bench(99)).unwrap();
        let catalog = test_catalog();
        let projections = projections_for(&[(1, 10.0), (2, 24.0)], 4);
        let evaluator = TradeEvaluator::new(ScoringConfig::raw());

        let verdict = evaluator
            .evaluate(&proposal(vec![1, 99], vec![2]), &a, &b, &catalog, &projections, 4)
            .unwrap();

        assert_eq!(verdict.missing_players, vec![99]);
        assert!(verdict.missing_projections.is_empty());
        // The unknown player contributes zero, never aborting the evaluation
        assert_eq!(verdict.delta_a, 24.0 - 10.0);
    }
}
