//! Error types for the strength engine.

use thiserror::Error;

/// Result type for strength engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors that can occur in the strength engine.
///
/// Only structural problems fail a call. Incomplete projection data never
/// does; it degrades to zero contribution and is reported as diagnostics on
/// the result.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("invalid trade: {0}")]
    InvalidTrade(String),

    #[error(transparent)]
    Roster(#[from] roster_core::RosterError),
}
