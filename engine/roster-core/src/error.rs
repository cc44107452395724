//! Error types for roster reference data.

use crate::{PlayerId, Week};
use thiserror::Error;

/// Result type for roster-core operations.
pub type Result<T> = std::result::Result<T, RosterError>;

/// Errors raised while assembling reference data.
///
/// These cover structural problems in supplied inputs. Missing projections
/// or unknown player ids at scoring time are diagnostics on the engine side,
/// not errors here.
#[derive(Error, Debug)]
pub enum RosterError {
    #[error("player {0} already has a roster slot")]
    DuplicateSlot(PlayerId),

    #[error("player {0} appears more than once in the catalog")]
    DuplicatePlayer(PlayerId),

    #[error("negative projection {points} for player {player_id} week {week}")]
    NegativeProjection { player_id: PlayerId, week: Week, points: f64 },

    #[error("unknown position: {0}")]
    UnknownPosition(String),

    #[error("failed to read catalog file: {0}")]
    CatalogLoad(#[from] std::io::Error),

    #[error("failed to parse catalog file: {0}")]
    CatalogParse(#[from] serde_json::Error),
}
