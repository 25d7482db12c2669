//! Action execution pipeline.
//!
//! All state mutations flow through the three-phase transition pipeline:
//! pre_validate → apply → post_validate. Both player input and AI decisions
//! use the same [`execute`] path, and failures carry the phase that
//! produced them.

use crate::action::{
    Action, ActionTransition, BumpAction, MeleeAction, MoveAction, WaitAction,
};
use crate::env::GameEnv;
use crate::error::{ErrorSeverity, GameError};
use crate::messages::MessageSink;
use crate::state::GameState;

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Errors surfaced while executing an action through the pipeline.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExecuteError {
    #[error("wait action failed: {0}")]
    Wait(TransitionPhaseError<<WaitAction as ActionTransition>::Error>),

    #[error("move action failed: {0}")]
    Move(TransitionPhaseError<<MoveAction as ActionTransition>::Error>),

    #[error("melee action failed: {0}")]
    Melee(TransitionPhaseError<<MeleeAction as ActionTransition>::Error>),

    #[error("bump action failed: {0}")]
    Bump(TransitionPhaseError<<BumpAction as ActionTransition>::Error>),
}

impl ExecuteError {
    /// True for expected "impossible action" failures - walking into a
    /// wall, attacking empty space. Callers treat these as a consumed turn,
    /// never as a fault.
    pub fn is_impossible(&self) -> bool {
        self.severity().is_recoverable()
    }
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            ExecuteError::Wait(err) => err.error.severity(),
            ExecuteError::Move(err) => err.error.severity(),
            ExecuteError::Melee(err) => err.error.severity(),
            ExecuteError::Bump(err) => err.error.severity(),
        }
    }
}

/// Executes an action by routing it through the transition pipeline.
pub fn execute(
    state: &mut GameState,
    env: &GameEnv<'_>,
    messages: &mut dyn MessageSink,
    action: &Action,
) -> Result<(), ExecuteError> {
    match action {
        Action::Wait(action) => {
            drive_transition(action, state, env, messages).map_err(ExecuteError::Wait)
        }
        Action::Move(action) => {
            drive_transition(action, state, env, messages).map_err(ExecuteError::Move)
        }
        Action::Melee(action) => {
            drive_transition(action, state, env, messages).map_err(ExecuteError::Melee)
        }
        Action::Bump(action) => {
            drive_transition(action, state, env, messages).map_err(ExecuteError::Bump)
        }
    }
}

#[inline]
fn drive_transition<T>(
    transition: &T,
    state: &mut GameState,
    env: &GameEnv<'_>,
    messages: &mut dyn MessageSink,
) -> Result<(), TransitionPhaseError<T::Error>>
where
    T: ActionTransition,
{
    transition
        .pre_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    transition
        .apply(state, env, messages)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))
}
