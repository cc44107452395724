use crate::{PlayerId, Result, RosterError, RosterId};
use serde::{Deserialize, Serialize};

/// Whether a rostered player is in the starting lineup or on the bench.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotRole {
    Starter,
    Bench,
}

/// One roster assignment: a player and the role they fill.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RosterSlot {
    pub player_id: PlayerId,
    pub role: SlotRole,
}

impl RosterSlot {
    pub fn starter(player_id: PlayerId) -> Self {
        Self { player_id, role: SlotRole::Starter }
    }

    pub fn bench(player_id: PlayerId) -> Self {
        Self { player_id, role: SlotRole::Bench }
    }
}

/// A team's full set of rostered players.
///
/// Slot order carries no meaning; a player id appears at most once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    pub roster_id: RosterId,
    slots: Vec<RosterSlot>,
}

impl Roster {
    pub fn new(roster_id: RosterId) -> Self {
        Self { roster_id, slots: Vec::new() }
    }

    /// Build a roster from a slot list, rejecting duplicate player ids.
    pub fn with_slots(roster_id: RosterId, slots: Vec<RosterSlot>) -> Result<Self> {
        let mut roster = Self::new(roster_id);
        for slot in slots {
            roster.insert_slot(slot)?;
        }
        Ok(roster)
    }

    /// Add a slot; a player already on the roster is rejected.
    pub fn insert_slot(&mut self, slot: RosterSlot) -> Result<()> {
        if self.contains(slot.player_id) {
            return Err(RosterError::DuplicateSlot(slot.player_id));
        }
        self.slots.push(slot);
        Ok(())
    }

    pub fn contains(&self, player_id: PlayerId) -> bool {
        self.slots.iter().any(|s| s.player_id == player_id)
    }

    /// Role of a rostered player, if present.
    pub fn role_of(&self, player_id: PlayerId) -> Option<SlotRole> {
        self.slots.iter().find(|s| s.player_id == player_id).map(|s| s.role)
    }

    pub fn slots(&self) -> &[RosterSlot] {
        &self.slots
    }

    pub fn starters(&self) -> impl Iterator<Item = &RosterSlot> {
        self.slots.iter().filter(|s| s.role == SlotRole::Starter)
    }

    pub fn bench(&self) -> impl Iterator<Item = &RosterSlot> {
        self.slots.iter().filter(|s| s.role == SlotRole::Bench)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
