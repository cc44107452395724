use crate::{PlayerId, Result, RosterError, Week};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A projected point total for one player in one week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    pub player_id: PlayerId,
    pub week: Week,
    /// Projected fantasy points, non-negative
    pub points: f64,
}

impl Projection {
    pub fn new(player_id: PlayerId, week: Week, points: f64) -> Self {
        Self { player_id, week, points }
    }
}

/// In-memory projection store keyed by (player, week).
///
/// One value per key: re-inserting the same (player, week) overwrites the
/// earlier value, matching how projection re-syncs behave upstream.
#[derive(Debug, Clone, Default)]
pub struct ProjectionTable {
    points: HashMap<(PlayerId, Week), f64>,
}

impl ProjectionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the projection for (player, week). Rejects
    /// negative or non-finite point values.
    pub fn insert(&mut self, projection: Projection) -> Result<()> {
        if !projection.points.is_finite() || projection.points < 0.0 {
            return Err(RosterError::NegativeProjection {
                player_id: projection.player_id,
                week: projection.week,
                points: projection.points,
            });
        }
        self.points.insert((projection.player_id, projection.week), projection.points);
        Ok(())
    }

    /// Bulk insert; stops at the first invalid projection.
    pub fn insert_all(&mut self, projections: impl IntoIterator<Item = Projection>) -> Result<()> {
        for projection in projections {
            self.insert(projection)?;
        }
        Ok(())
    }

    /// Projected points for a player in a week, if ingested.
    pub fn get(&self, player_id: PlayerId, week: Week) -> Option<f64> {
        self.points.get(&(player_id, week)).copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
