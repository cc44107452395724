use anyhow::Result;
use roster_core::{Player, PlayerCatalog, Position, Projection, ProjectionTable, Roster, RosterSlot};
use strength_engine::{
    Recommender, ScoreCalculator, ScoringConfig, StrengthHistory, TradeEvaluator, TradeProposal,
    TradeSide,
};
use tracing::info;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    println!("🏈 Strength engine demo");

    // Load a catalog file when given one, otherwise use the built-in sample
    let catalog = match std::env::args().nth(1) {
        Some(path) => PlayerCatalog::load_from_file(path)?,
        None => sample_catalog()?,
    };
    info!("Catalog holds {} players", catalog.len());

    let week = 4;
    let projections = sample_projections(week)?;
    let my_roster = Roster::with_slots(
        1,
        vec![
            RosterSlot::starter(1),
            RosterSlot::starter(3),
            RosterSlot::starter(5),
            RosterSlot::bench(2),
            RosterSlot::bench(4),
        ],
    )?;
    let other_roster =
        Roster::with_slots(2, vec![RosterSlot::starter(6), RosterSlot::bench(7)])?;

    let config = ScoringConfig::from_env();
    let calculator = ScoreCalculator::new(config.clone());

    // Score the roster and print the position breakdown
    let score = calculator.score_roster(&my_roster, &catalog, &projections, week);
    println!(
        "Week {} strength: starters {:.2}, bench {:.2}",
        week, score.starter_total, score.bench_total
    );
    for (position, bucket) in calculator.build_breakdown(&score) {
        println!("  {:>3}: starter {:7.2}  bench {:7.2}", position, bucket.starter, bucket.bench);
    }
    if score.has_missing_data() {
        println!(
            "  ⚠ missing projections for {:?}, unknown players {:?}",
            score.missing_projections, score.missing_players
        );
    }

    // Record the week and show the series
    let mut history = StrengthHistory::new();
    history.record_breakdown(my_roster.roster_id, &score);
    for snapshot in history.history(my_roster.roster_id) {
        println!(
            "  history week {}: {:.2} / {:.2}",
            snapshot.week, snapshot.starter_total, snapshot.bench_total
        );
    }

    // Suggested lineup moves
    let recommender = Recommender::new(config.clone());
    for suggestion in
        recommender.recommend_lineup_changes(&my_roster, &catalog, &projections, week)
    {
        println!(
            "  swap in {} for {} (+{:.2})",
            suggestion.bench_player, suggestion.starter_player, suggestion.projected_gain
        );
    }

    // Evaluate a sample one-for-one trade
    let proposal = TradeProposal {
        side_a: TradeSide::new(my_roster.roster_id, vec![4]),
        side_b: TradeSide::new(other_roster.roster_id, vec![7]),
    };
    let evaluator = TradeEvaluator::new(config);
    let verdict =
        evaluator.evaluate(&proposal, &my_roster, &other_roster, &catalog, &projections, week)?;
    println!(
        "Trade verdict: delta_a {:+.2}, delta_b {:+.2}, ratio {:.3}, {:?}",
        verdict.delta_a, verdict.delta_b, verdict.fairness_ratio, verdict.recommendation
    );

    println!("✅ Done");
    Ok(())
}

fn sample_catalog() -> Result<PlayerCatalog> {
    Ok(PlayerCatalog::from_players(vec![
        Player::new(1, "Lamar Jackson", Position::QB, "BAL"),
        Player::new(2, "Josh Allen", Position::QB, "BUF"),
        Player::new(3, "Derrick Henry", Position::RB, "BAL"),
        Player::new(4, "Saquon Barkley", Position::RB, "PHI"),
        Player::new(5, "Justin Jefferson", Position::WR, "MIN"),
        Player::new(6, "CeeDee Lamb", Position::WR, "DAL"),
        Player::new(7, "Bijan Robinson", Position::RB, "ATL"),
    ])?)
}

fn sample_projections(week: u32) -> Result<ProjectionTable> {
    let mut table = ProjectionTable::new();
    table.insert_all(vec![
        Projection::new(1, week, 22.4),
        Projection::new(2, week, 23.9),
        Projection::new(3, week, 17.1),
        Projection::new(4, week, 19.6),
        Projection::new(5, week, 18.8),
        Projection::new(6, week, 17.9),
        Projection::new(7, week, 16.2),
    ])?;
    Ok(table)
}
