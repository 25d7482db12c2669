use super::{AiState, AiTransition, TurnContext, TurnError};
use crate::action::{Action, BumpAction, Direction};
use crate::env::compute_seed;
use crate::state::EntityId;

/// Confusion status behavior.
///
/// A temporary override installed by an external effect: the actor stumbles
/// in a random direction each turn, attacking whatever it lurches into, and
/// reverts to the captured previous state once the effect has run its
/// course. The revert itself consumes a turn.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConfusedAi {
    actor: EntityId,

    /// The AI to restore on expiry. `None` reverts the actor to inert.
    previous: Option<Box<AiState>>,

    turns_remaining: u32,
}

impl ConfusedAi {
    pub fn new(actor: EntityId, previous: Option<AiState>, turns_remaining: u32) -> Self {
        Self {
            actor,
            previous: previous.map(Box::new),
            turns_remaining,
        }
    }

    pub fn actor(&self) -> EntityId {
        self.actor
    }

    pub fn turns_remaining(&self) -> u32 {
        self.turns_remaining
    }

    /// The state that will be restored when the effect expires.
    pub fn previous(&self) -> Option<&AiState> {
        self.previous.as_deref()
    }

    pub(super) fn perform(&mut self, ctx: &mut TurnContext<'_>) -> Result<AiTransition, TurnError> {
        if self.turns_remaining == 0 {
            let Some(actor_state) = ctx.state.entities.actor(self.actor) else {
                return Err(TurnError::ActorNotFound(self.actor));
            };
            ctx.messages
                .push(format!("The {} is no longer confused", actor_state.name));
            tracing::debug!("{} recovered from confusion", self.actor);
            // move the captured state back out; the revert is the whole
            // turn, the restored AI does not also act
            return Ok(AiTransition::Replace(
                self.previous.take().map(|previous| *previous),
            ));
        }

        self.turns_remaining -= 1;

        let seed = compute_seed(ctx.state.game_seed, ctx.nonce, self.actor);
        let rng = ctx.env.rng()?;
        let direction = Direction::ALL[rng.pick_index(seed, Direction::ALL.len())];
        tracing::debug!("{} stumbles {}", self.actor, direction);

        // may move, may attack a bystander, may just bump into a wall and
        // waste the turn
        super::dispatch(ctx, &Action::Bump(BumpAction::new(self.actor, direction)))?;
        Ok(AiTransition::Retain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{inflict_confusion, take_turn};
    use crate::config::GameConfig;
    use crate::env::{Env, GameEnv, GridMap, MapOracle, PcgRng};
    use crate::messages::MessageLog;
    use crate::state::{
        ActorState, ActorStats, EntitiesState, GameState, Position, WorldState,
    };

    const ORC: EntityId = EntityId(1);

    fn world() -> (GridMap, GameState) {
        let map = GridMap::open(9, 9);
        let mut entities = EntitiesState::default();
        entities.player = ActorState::new(
            EntityId::PLAYER,
            "Player",
            Position::new(8, 8),
            30,
            ActorStats::new(5, 2),
        );
        entities
            .npcs
            .push(
                ActorState::new(ORC, "Orc", Position::new(4, 4), 10, ActorStats::new(3, 0))
                    .with_ai(AiState::hostile(ORC)),
            )
            .unwrap();
        let world = WorldState::new(map.dimensions());
        (map, GameState::new(99, entities, world))
    }

    fn run_turn(map: &GridMap, state: &mut GameState, log: &mut MessageLog) {
        let rng = PcgRng;
        let env: GameEnv = Env::with_all(map, &rng);
        take_turn(ORC, state, env, &GameConfig::default(), log).unwrap();
    }

    fn confusion_turns(state: &GameState) -> Option<u32> {
        match state.entities.actor(ORC).unwrap().ai.as_ref() {
            Some(AiState::Confused(ai)) => Some(ai.turns_remaining()),
            _ => None,
        }
    }

    #[test]
    fn counter_decrements_by_exactly_one_per_call() {
        let (map, mut state) = world();
        inflict_confusion(ORC, 3, &mut state).unwrap();
        let mut log = MessageLog::new();

        run_turn(&map, &mut state, &mut log);
        assert_eq!(confusion_turns(&state), Some(2));
        run_turn(&map, &mut state, &mut log);
        assert_eq!(confusion_turns(&state), Some(1));
        run_turn(&map, &mut state, &mut log);
        assert_eq!(confusion_turns(&state), Some(0));
        // stumbling may narrate an accidental attack, but never the notice
        assert!(
            log.entries()
                .iter()
                .all(|entry| !entry.contains("no longer confused"))
        );
    }

    #[test]
    fn expiry_reverts_with_one_message_and_no_movement() {
        let (map, mut state) = world();
        inflict_confusion(ORC, 0, &mut state).unwrap();
        let mut log = MessageLog::new();

        let before = state.entities.actor(ORC).unwrap().position;
        run_turn(&map, &mut state, &mut log);

        assert_eq!(state.entities.actor(ORC).unwrap().position, before);
        assert_eq!(log.entries(), ["The Orc is no longer confused"]);
        assert!(matches!(
            state.entities.actor(ORC).unwrap().ai,
            Some(AiState::Hostile(_))
        ));
    }

    #[test]
    fn expiry_with_no_previous_ai_leaves_the_actor_inert() {
        let (map, mut state) = world();
        state.entities.actor_mut(ORC).unwrap().ai = None;
        inflict_confusion(ORC, 0, &mut state).unwrap();
        let mut log = MessageLog::new();

        run_turn(&map, &mut state, &mut log);

        assert!(state.entities.actor(ORC).unwrap().ai.is_none());
        assert_eq!(log.entries().len(), 1);
    }

    #[test]
    fn confused_turns_move_or_bump_but_never_revert_early() {
        let (map, mut state) = world();
        inflict_confusion(ORC, 5, &mut state).unwrap();
        let mut log = MessageLog::new();

        for _ in 0..5 {
            run_turn(&map, &mut state, &mut log);
            assert!(confusion_turns(&state).is_some());
        }
        // the stumbling itself never emits the expiry notice
        let notices = |log: &MessageLog| {
            log.entries()
                .iter()
                .filter(|entry| entry.contains("no longer confused"))
                .count()
        };
        assert_eq!(notices(&log), 0);

        // sixth call: the counter is spent, so the orc snaps out of it
        run_turn(&map, &mut state, &mut log);
        assert_eq!(confusion_turns(&state), None);
        assert_eq!(notices(&log), 1);
    }

    #[test]
    fn stumbling_is_deterministic_for_a_fixed_seed() {
        let (map, mut state_a) = world();
        let (_, mut state_b) = world();
        inflict_confusion(ORC, 4, &mut state_a).unwrap();
        inflict_confusion(ORC, 4, &mut state_b).unwrap();
        let mut log_a = MessageLog::new();
        let mut log_b = MessageLog::new();

        for _ in 0..4 {
            run_turn(&map, &mut state_a, &mut log_a);
            run_turn(&map, &mut state_b, &mut log_b);
            assert_eq!(
                state_a.entities.actor(ORC).unwrap().position,
                state_b.entities.actor(ORC).unwrap().position
            );
        }
        assert_eq!(log_a, log_b);
    }
}
