use crate::action::{ActionTransition, Direction, MeleeAction, MeleeError, MoveAction, MoveError};
use crate::env::GameEnv;
use crate::error::{ErrorSeverity, GameError};
use crate::messages::MessageSink;
use crate::state::{EntityId, GameState};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BumpError {
    #[error("bump melee failed: {0}")]
    Melee(#[from] MeleeError),

    #[error("bump move failed: {0}")]
    Move(#[from] MoveError),
}

impl GameError for BumpError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            BumpError::Melee(err) => err.severity(),
            BumpError::Move(err) => err.severity(),
        }
    }
}

/// Composite step: melee if a living actor holds the destination cell,
/// movement otherwise.
///
/// This is the single entry point confusion-driven random movement uses, so
/// a confused actor attacking whatever it lurches into is intended behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BumpAction {
    pub actor: EntityId,
    pub direction: Direction,
}

enum Resolved {
    Melee(MeleeAction),
    Move(MoveAction),
}

impl BumpAction {
    pub fn new(actor: EntityId, direction: Direction) -> Self {
        Self { actor, direction }
    }

    fn resolve(&self, state: &GameState) -> Result<Resolved, BumpError> {
        let actor_state = state
            .entities
            .actor(self.actor)
            .ok_or(MoveError::ActorNotFound(self.actor))?;
        let (dx, dy) = self.direction.delta();
        let destination = actor_state.position.offset(dx, dy);

        if state.entities.living_actor_at(destination).is_some() {
            Ok(Resolved::Melee(MeleeAction::new(self.actor, self.direction)))
        } else {
            Ok(Resolved::Move(MoveAction::new(self.actor, self.direction)))
        }
    }
}

impl ActionTransition for BumpAction {
    type Error = BumpError;

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        match self.resolve(state)? {
            Resolved::Melee(melee) => melee.pre_validate(state, env).map_err(BumpError::from),
            Resolved::Move(movement) => movement.pre_validate(state, env).map_err(BumpError::from),
        }
    }

    fn apply(
        &self,
        state: &mut GameState,
        env: &GameEnv<'_>,
        messages: &mut dyn MessageSink,
    ) -> Result<(), Self::Error> {
        match self.resolve(state)? {
            Resolved::Melee(melee) => melee.apply(state, env, messages).map_err(BumpError::from),
            Resolved::Move(movement) => movement
                .apply(state, env, messages)
                .map_err(BumpError::from),
        }
    }
}
