use crate::action::{ActionTransition, Direction};
use crate::combat;
use crate::env::GameEnv;
use crate::error::{ErrorSeverity, GameError};
use crate::messages::MessageSink;
use crate::state::{EntityId, GameState, Position};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MeleeError {
    #[error("actor {0} not found")]
    ActorNotFound(EntityId),

    #[error("nothing to attack at {target:?}")]
    NothingToAttack { target: Position },
}

impl GameError for MeleeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            MeleeError::ActorNotFound(_) => ErrorSeverity::Validation,
            MeleeError::NothingToAttack { .. } => ErrorSeverity::Recoverable,
        }
    }
}

/// Melee attack against whatever living actor occupies the adjacent cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MeleeAction {
    pub actor: EntityId,
    pub direction: Direction,
}

impl MeleeAction {
    pub fn new(actor: EntityId, direction: Direction) -> Self {
        Self { actor, direction }
    }

    fn target_from(&self, origin: Position) -> Position {
        let (dx, dy) = self.direction.delta();
        origin.offset(dx, dy)
    }
}

impl ActionTransition for MeleeAction {
    type Error = MeleeError;

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let actor_state = state
            .entities
            .actor(self.actor)
            .ok_or(MeleeError::ActorNotFound(self.actor))?;

        let target = self.target_from(actor_state.position);
        if state.entities.living_actor_at(target).is_none() {
            return Err(MeleeError::NothingToAttack { target });
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut GameState,
        _env: &GameEnv<'_>,
        messages: &mut dyn MessageSink,
    ) -> Result<(), Self::Error> {
        let attacker = state
            .entities
            .actor(self.actor)
            .ok_or(MeleeError::ActorNotFound(self.actor))?;
        let attacker_name = attacker.name.clone();
        let attack = attacker.stats.attack;
        let target = self.target_from(attacker.position);

        let defender = state
            .entities
            .living_actor_at_mut(target)
            .ok_or(MeleeError::NothingToAttack { target })?;

        let damage = combat::calculate_damage(attack, defender.stats.defense);
        if damage > 0 {
            combat::apply_damage(&mut defender.hp, damage);
            messages.push(format!(
                "{} attacks {} for {} hit points.",
                attacker_name, defender.name, damage
            ));
        } else {
            messages.push(format!(
                "{} attacks {} but does no damage.",
                attacker_name, defender.name
            ));
        }
        Ok(())
    }
}
