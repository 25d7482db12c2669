use crate::action::ActionTransition;
use crate::env::GameEnv;
use crate::error::NeverError;
use crate::messages::MessageSink;
use crate::state::{EntityId, GameState};

/// No-op action: always succeeds and consumes the turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WaitAction {
    pub actor: EntityId,
}

impl WaitAction {
    pub fn new(actor: EntityId) -> Self {
        Self { actor }
    }
}

impl ActionTransition for WaitAction {
    type Error = NeverError;

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn apply(
        &self,
        _state: &mut GameState,
        _env: &GameEnv<'_>,
        _messages: &mut dyn MessageSink,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
}
