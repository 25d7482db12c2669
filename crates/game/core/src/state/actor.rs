use super::{EntityId, Position, ResourceMeter};
use crate::ai::AiState;

/// Flat combat statistics consumed by melee resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorStats {
    pub attack: u32,
    pub defense: u32,
}

impl ActorStats {
    pub fn new(attack: u32, defense: u32) -> Self {
        Self { attack, defense }
    }
}

/// Complete actor state: identity, position, vitals, and the owned AI slot.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorState {
    pub id: EntityId,

    /// Display name used by combat and status messages.
    pub name: String,

    pub position: Position,
    pub hp: ResourceMeter,
    pub stats: ActorStats,

    /// Whether other entities may enter this actor's cell. Flipped off by
    /// the external death handling when the actor becomes a corpse.
    pub blocks_movement: bool,

    /// Owned decision state. `None` means the actor is inert: the scheduler
    /// skips it.
    pub ai: Option<AiState>,
}

impl ActorState {
    /// Creates a living, movement-blocking actor with full hit points and
    /// no AI.
    pub fn new(
        id: EntityId,
        name: impl Into<String>,
        position: Position,
        max_hp: u32,
        stats: ActorStats,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            position,
            hp: ResourceMeter::at_max(max_hp),
            stats,
            blocks_movement: true,
            ai: None,
        }
    }

    /// Installs an AI state (builder pattern).
    #[must_use]
    pub fn with_ai(mut self, ai: AiState) -> Self {
        self.ai = Some(ai);
        self
    }

    pub fn is_alive(&self) -> bool {
        !self.hp.is_depleted()
    }
}
