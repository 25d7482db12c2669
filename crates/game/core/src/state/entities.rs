use bounded_vector::BoundedVec;

use super::{ActorState, EntityId, Position};
use crate::config::GameConfig;

/// Aggregate state for every actor on the map.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntitiesState {
    pub player: ActorState,
    pub npcs: BoundedVec<ActorState, 0, { GameConfig::MAX_NPCS }>,
}

impl EntitiesState {
    /// Returns a reference to an actor by ID (player or NPC).
    pub fn actor(&self, id: EntityId) -> Option<&ActorState> {
        if self.player.id == id {
            return Some(&self.player);
        }
        self.npcs.iter().find(|actor| actor.id == id)
    }

    /// Returns a mutable reference to an actor by ID (player or NPC).
    pub fn actor_mut(&mut self, id: EntityId) -> Option<&mut ActorState> {
        if self.player.id == id {
            return Some(&mut self.player);
        }
        self.npcs.iter_mut().find(|actor| actor.id == id)
    }

    /// Returns an iterator over all actors (player + NPCs).
    pub fn all_actors(&self) -> impl Iterator<Item = &ActorState> {
        std::iter::once(&self.player).chain(self.npcs.iter())
    }

    /// Returns the living actor occupying `position`, if any.
    pub fn living_actor_at(&self, position: Position) -> Option<&ActorState> {
        self.all_actors()
            .find(|actor| actor.position == position && actor.is_alive())
    }

    /// Returns a mutable reference to the living actor at `position`.
    pub fn living_actor_at_mut(&mut self, position: Position) -> Option<&mut ActorState> {
        if self.player.position == position && self.player.is_alive() {
            return Some(&mut self.player);
        }
        self.npcs
            .iter_mut()
            .find(|actor| actor.position == position && actor.is_alive())
    }

    /// True if a movement-blocking entity occupies `position`.
    pub fn blocks_at(&self, position: Position) -> bool {
        self.all_actors()
            .any(|actor| actor.position == position && actor.blocks_movement)
    }
}
