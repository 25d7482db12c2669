//! Action domain - primitive, atomic turn effects.
//!
//! Actions are pure effects with no decision logic: the AI layer (or the
//! player's input handling) picks one, and the engine drives it through the
//! three-phase transition pipeline. Exactly one action consumes a turn.
//!
//! - `Wait`: no-op
//! - `Move`: one step in an 8-way direction
//! - `Melee`: attack the living actor on an adjacent cell
//! - `Bump`: melee if the destination is held by a living actor, move
//!   otherwise

mod bump;
mod melee;
mod movement;
mod wait;

pub use bump::{BumpAction, BumpError};
pub use melee::{MeleeAction, MeleeError};
pub use movement::{Direction, MoveAction, MoveError};
pub use wait::WaitAction;

use crate::env::GameEnv;
use crate::messages::MessageSink;
use crate::state::{EntityId, GameState};

/// Defines how a concrete action variant mutates game state.
///
/// Validation reads the state **before** mutation; `apply` performs it and
/// may narrate through the message sink.
pub trait ActionTransition {
    type Error;

    /// Returns the entity performing this action.
    fn actor(&self) -> EntityId;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the action by mutating the game state directly.
    fn apply(
        &self,
        state: &mut GameState,
        env: &GameEnv<'_>,
        messages: &mut dyn MessageSink,
    ) -> Result<(), Self::Error>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(&self, _state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Top-level action enum dispatched by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Wait(WaitAction),
    Move(MoveAction),
    Melee(MeleeAction),
    Bump(BumpAction),
}

impl Action {
    /// Returns the entity ID performing this action.
    pub fn actor(&self) -> EntityId {
        match self {
            Action::Wait(action) => action.actor(),
            Action::Move(action) => action.actor(),
            Action::Melee(action) => action.actor(),
            Action::Bump(action) => action.actor(),
        }
    }

    /// Returns the snake_case string representation of the action.
    ///
    /// Used for logging and diagnostics.
    pub fn as_snake_case(&self) -> &'static str {
        match self {
            Action::Wait(_) => "wait",
            Action::Move(_) => "move",
            Action::Melee(_) => "melee",
            Action::Bump(_) => "bump",
        }
    }
}

impl From<WaitAction> for Action {
    fn from(action: WaitAction) -> Self {
        Self::Wait(action)
    }
}

impl From<MoveAction> for Action {
    fn from(action: MoveAction) -> Self {
        Self::Move(action)
    }
}

impl From<MeleeAction> for Action {
    fn from(action: MeleeAction) -> Self {
        Self::Melee(action)
    }
}

impl From<BumpAction> for Action {
    fn from(action: BumpAction) -> Self {
        Self::Bump(action)
    }
}
