//! Per-actor decision layer.
//!
//! Each AI-controlled actor owns an [`AiState`] in its `ai` slot. Once per
//! turn the scheduler calls [`take_turn`], which detaches the state, lets it
//! decide and execute exactly one action, and re-installs (or replaces) it.
//! Everything a decision reads is handed in explicitly through
//! [`TurnContext`]; the core keeps no ambient state.
//!
//! Two behaviors exist:
//! - [`HostileAi`]: pursues the player along a cached route
//! - [`ConfusedAi`]: temporary override that stumbles randomly and restores
//!   the captured previous state when the effect expires

mod confused;
mod costs;
mod hostile;

pub use confused::ConfusedAi;
pub use costs::travel_costs;
pub use hostile::HostileAi;

use crate::action::Action;
use crate::config::GameConfig;
use crate::engine::{self, ExecuteError};
use crate::env::{GameEnv, OracleError};
use crate::messages::MessageSink;
use crate::state::{EntityId, GameState};

/// Polymorphic per-actor decision state.
///
/// A tagged variant rather than a trait object: AI state stays `Clone`,
/// comparable, and plainly serializable, which the owned-slot swap on
/// confusion and save games both want.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AiState {
    Hostile(HostileAi),
    Confused(ConfusedAi),
}

impl AiState {
    /// Fresh pursuit state for a newly spawned actor.
    pub fn hostile(actor: EntityId) -> Self {
        Self::Hostile(HostileAi::new(actor))
    }

    /// The actor this state was constructed for. Fixed for the lifetime of
    /// the state.
    pub fn actor(&self) -> EntityId {
        match self {
            AiState::Hostile(ai) => ai.actor(),
            AiState::Confused(ai) => ai.actor(),
        }
    }

    /// Decides and executes this actor's turn.
    ///
    /// Exactly one action is performed per call; the returned transition
    /// tells the owning slot what to hold afterwards.
    pub fn perform(&mut self, ctx: &mut TurnContext<'_>) -> Result<AiTransition, TurnError> {
        match self {
            AiState::Hostile(ai) => ai.perform(ctx),
            AiState::Confused(ai) => ai.perform(ctx),
        }
    }
}

/// What the owning AI slot should hold after a `perform()` call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AiTransition {
    /// Keep the current state.
    Retain,
    /// Swap in a replacement; `None` leaves the actor inert.
    Replace(Option<AiState>),
}

/// Everything a decision can touch during one turn.
///
/// Explicit references keep the core testable in isolation from the rest of
/// the simulation; nothing here is global.
pub struct TurnContext<'a> {
    pub state: &'a mut GameState,
    pub env: GameEnv<'a>,
    pub config: &'a GameConfig,
    pub messages: &'a mut dyn MessageSink,
    /// Decision ordinal used to individualize RNG seeds.
    pub nonce: u64,
}

/// Errors surfaced while running an AI turn.
///
/// Recoverable "impossible action" failures never reach this type; they are
/// absorbed inside the turn as a wasted move.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TurnError {
    #[error("actor {0} not found")]
    ActorNotFound(EntityId),

    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error(transparent)]
    Action(#[from] ExecuteError),
}

/// Runs one full decision turn for `actor`.
///
/// This is the sole entry point the turn scheduler calls for an
/// AI-controlled actor. Actors without an AI state skip their turn. The
/// actor's AI is detached for the duration of the call and re-installed (or
/// replaced, when a status effect expires) afterwards.
pub fn take_turn(
    actor: EntityId,
    state: &mut GameState,
    env: GameEnv<'_>,
    config: &GameConfig,
    messages: &mut dyn MessageSink,
) -> Result<(), TurnError> {
    let Some(actor_state) = state.entities.actor_mut(actor) else {
        return Err(TurnError::ActorNotFound(actor));
    };
    let Some(mut ai) = actor_state.ai.take() else {
        tracing::debug!("{} is inert, skipping turn", actor);
        return Ok(());
    };

    let nonce = state.turn.next_nonce();
    let mut ctx = TurnContext {
        state: &mut *state,
        env,
        config,
        messages: &mut *messages,
        nonce,
    };

    let transition = match ai.perform(&mut ctx) {
        Ok(transition) => transition,
        Err(err) => {
            reinstall(state, actor, Some(ai));
            return Err(err);
        }
    };

    match transition {
        AiTransition::Retain => reinstall(state, actor, Some(ai)),
        AiTransition::Replace(next) => reinstall(state, actor, next),
    }
    Ok(())
}

/// Installs a confusion override on `actor`, capturing its current AI as
/// the state to restore when the effect expires.
pub fn inflict_confusion(
    actor: EntityId,
    turns: u32,
    state: &mut GameState,
) -> Result<(), TurnError> {
    let Some(actor_state) = state.entities.actor_mut(actor) else {
        return Err(TurnError::ActorNotFound(actor));
    };
    let previous = actor_state.ai.take();
    actor_state.ai = Some(AiState::Confused(ConfusedAi::new(actor, previous, turns)));
    Ok(())
}

fn reinstall(state: &mut GameState, actor: EntityId, ai: Option<AiState>) {
    // the actor can only vanish if an action removed it mid-turn; nothing
    // left to re-install onto in that case
    if let Some(actor_state) = state.entities.actor_mut(actor) {
        actor_state.ai = ai;
    }
}

/// Executes a decided action, absorbing recoverable failures as a spent
/// turn.
pub(crate) fn dispatch(ctx: &mut TurnContext<'_>, action: &Action) -> Result<(), TurnError> {
    match engine::execute(ctx.state, &ctx.env, ctx.messages, action) {
        Ok(()) => Ok(()),
        Err(err) if err.is_impossible() => {
            tracing::debug!(
                "{} tried an impossible {}: {}",
                action.actor(),
                action.as_snake_case(),
                err
            );
            Ok(())
        }
        Err(err) => Err(TurnError::Action(err)),
    }
}
