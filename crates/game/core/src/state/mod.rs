//! Authoritative game state representation.
//!
//! This module owns the data structures that describe actors, turn
//! bookkeeping, and the visibility overlay. The embedding simulation
//! mutates this state exclusively through [`crate::engine::execute`] and
//! the AI entry points in [`crate::ai`].
mod actor;
mod common;
mod entities;
mod turn;
mod world;

pub use bounded_vector::BoundedVec;

pub use actor::{ActorState, ActorStats};
pub use common::{EntityId, Position, ResourceMeter, Tick};
pub use entities::EntitiesState;
pub use turn::TurnState;
pub use world::{VisionGrid, WorldState};

use crate::env::MapOracle;

/// Canonical snapshot of the deterministic game state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// RNG seed for deterministic random generation.
    ///
    /// Set once at game initialization and never modified. Combined with
    /// `turn.nonce` to give each random event a unique seed.
    pub game_seed: u64,

    /// Turn bookkeeping.
    pub turn: TurnState,
    /// All actors currently placed on the map.
    pub entities: EntitiesState,
    /// Runtime overlays layered on top of the static map.
    pub world: WorldState,
}

impl GameState {
    /// Creates a fresh state from the provided sub-components.
    pub fn new(game_seed: u64, entities: EntitiesState, world: WorldState) -> Self {
        Self {
            game_seed,
            turn: TurnState::default(),
            entities,
            world,
        }
    }

    /// Determines whether a tile can be entered, considering terrain
    /// passability and occupancy.
    pub fn can_enter<M>(&self, map: &M, position: Position) -> bool
    where
        M: MapOracle + ?Sized,
    {
        map.tile(position)
            .map(|tile| tile.is_passable())
            .unwrap_or(false)
            && !self.entities.blocks_at(position)
    }
}
