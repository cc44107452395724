use crate::{Player, PlayerId, ProjectionTable, Result, RosterError, Week};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

/// On-disk catalog document produced by the ingestion layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDocument {
    /// Season year
    pub season: String,
    /// When this data was last updated
    pub last_updated: DateTime<Utc>,
    /// List of players
    pub players: Vec<Player>,
}

/// Player Catalog - in-memory index of reference player data.
///
/// Loaded once from the ingestion layer's JSON document and then read-only.
/// The engine looks players up by id while scoring; name lookup and search
/// exist for the surrounding application.
#[derive(Debug, Clone, Default)]
pub struct PlayerCatalog {
    /// Map from player id to Player
    players_by_id: HashMap<PlayerId, Player>,

    /// Map from player name to player id (for quick lookup)
    ids_by_name: HashMap<String, PlayerId>,
}

impl PlayerCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from a player list, rejecting duplicate ids.
    pub fn from_players(players: impl IntoIterator<Item = Player>) -> Result<Self> {
        let mut catalog = Self::new();
        for player in players {
            if catalog.players_by_id.contains_key(&player.player_id) {
                return Err(RosterError::DuplicatePlayer(player.player_id));
            }
            catalog.ids_by_name.insert(player.name.clone(), player.player_id);
            catalog.players_by_id.insert(player.player_id, player);
        }
        Ok(catalog)
    }

    /// Load a catalog document from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        info!("Loading player catalog from: {:?}", path.as_ref());

        let json_content = std::fs::read_to_string(&path)?;
        let document: CatalogDocument = serde_json::from_str(&json_content)?;

        info!("Loaded {} players for season {}", document.players.len(), document.season);
        Self::from_players(document.players)
    }

    /// Get a player by id.
    pub fn get(&self, player_id: PlayerId) -> Option<&Player> {
        self.players_by_id.get(&player_id)
    }

    /// Get a player by exact name.
    pub fn get_by_name(&self, name: &str) -> Option<&Player> {
        self.ids_by_name.get(name).and_then(|id| self.players_by_id.get(id))
    }

    /// Search for players by partial name match, case insensitive.
    pub fn search(&self, query: &str) -> Vec<&Player> {
        let query_lower = query.to_lowercase();
        self.players_by_id
            .values()
            .filter(|player| player.name.to_lowercase().contains(&query_lower))
            .collect()
    }

    /// Top N players by projected points for a week. Players without a
    /// projection for the week are skipped.
    pub fn top_players(
        &self,
        projections: &ProjectionTable,
        week: Week,
        limit: usize,
    ) -> Vec<(&Player, f64)> {
        let mut ranked: Vec<(&Player, f64)> = self
            .players_by_id
            .values()
            .filter_map(|player| {
                projections.get(player.player_id, week).map(|points| (player, points))
            })
            .collect();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        ranked.truncate(limit);
        ranked
    }

    pub fn len(&self) -> usize {
        self.players_by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players_by_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Position, Projection};

    fn test_players() -> Vec<Player> {
        vec![
            Player::new(1, "Lamar Jackson", Position::QB, "BAL"),
            Player::new(2, "Josh Allen", Position::QB, "BUF"),
            Player::new(3, "Justin Jefferson", Position::WR, "MIN"),
        ]
    }

    #[test]
    fn lookup_by_id_and_name() {
        let catalog = PlayerCatalog::from_players(test_players()).unwrap();

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.get(1).unwrap().name, "Lamar Jackson");
        assert_eq!(catalog.get_by_name("Josh Allen").unwrap().player_id, 2);
        assert!(catalog.get(99).is_none());
    }

    #[test]
    fn search_is_case_insensitive() {
        let catalog = PlayerCatalog::from_players(test_players()).unwrap();

        let results = catalog.search("jefferson");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Justin Jefferson");
    }

    #[test]
    fn rejects_duplicate_ids() {
        let mut players = test_players();
        players.push(Player::new(1, "Lamar Jackson", Position::QB, "BAL"));

        let err = PlayerCatalog::from_players(players).unwrap_err();
        assert!(matches!(err, RosterError::DuplicatePlayer(1)));
    }

    #[test]
    fn top_players_ranks_by_week_projection() {
        let catalog = PlayerCatalog::from_players(test_players()).unwrap();
        let mut projections = ProjectionTable::new();
        projections.insert(Projection::new(1, 4, 22.1)).unwrap();
        projections.insert(Projection::new(2, 4, 23.4)).unwrap();
        // Player 3 has no week 4 projection and is skipped

        let top = catalog.top_players(&projections, 4, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].0.player_id, 2);
        assert_eq!(top[1].0.player_id, 1);
    }
}
