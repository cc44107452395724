//! Roster reference data for the strength engine.
//!
//! This crate owns the value types the engine computes over: players and
//! positions, weekly projections, and roster slot assignments. It holds no
//! long-lived state beyond in-memory indexes; persistence and identity
//! management belong to the surrounding application.

mod catalog;
mod error;
mod projections;
mod roster;
mod types;

pub use catalog::{CatalogDocument, PlayerCatalog};
pub use error::{Result, RosterError};
pub use projections::{Projection, ProjectionTable};
pub use roster::{Roster, RosterSlot, SlotRole};
pub use types::{Player, PlayerId, Position, RosterId, Week};
