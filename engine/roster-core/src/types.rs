use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable numeric player id assigned by the ingestion layer.
pub type PlayerId = u32;

/// Roster identifier assigned by the roster-management layer.
pub type RosterId = u32;

/// NFL week number (1-based).
pub type Week = u32;

/// Fantasy-relevant positions.
///
/// Serialized as the uppercase abbreviation; `D/ST` and `DEF` are accepted
/// on input since projection providers disagree on the defense label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
    K,
    #[serde(alias = "D/ST", alias = "DEF")]
    DST,
}

impl Position {
    /// Canonical display ordering. Every per-position output iterates in
    /// this order so repeated calls render consistently.
    pub const ALL: [Position; 6] =
        [Position::QB, Position::RB, Position::WR, Position::TE, Position::K, Position::DST];

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
            Position::K => "K",
            Position::DST => "DST",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = crate::RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "QB" => Ok(Position::QB),
            "RB" => Ok(Position::RB),
            "WR" => Ok(Position::WR),
            "TE" => Ok(Position::TE),
            "K" => Ok(Position::K),
            "DST" | "D/ST" | "DEF" => Ok(Position::DST),
            other => Err(crate::RosterError::UnknownPosition(other.to_string())),
        }
    }
}

/// A fantasy football player. Immutable reference data once ingested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Stable provider id (e.g. Sleeper player id mapped to u32)
    pub player_id: PlayerId,

    /// Full name (e.g. "Lamar Jackson")
    pub name: String,

    /// Position (QB, RB, WR, TE, K, DST)
    pub position: Position,

    /// Team abbreviation (e.g. "BAL")
    pub team: String,
}

impl Player {
    pub fn new(
        player_id: PlayerId,
        name: impl Into<String>,
        position: Position,
        team: impl Into<String>,
    ) -> Self {
        Self { player_id, name: name.into(), position, team: team.into() }
    }
}
