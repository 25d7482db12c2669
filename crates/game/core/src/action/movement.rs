use crate::action::ActionTransition;
use crate::env::{GameEnv, OracleError};
use crate::error::{ErrorSeverity, GameError};
use crate::messages::MessageSink;
use crate::state::{EntityId, GameState, Position};

/// One of the eight unit grid directions, clockwise from north.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// All eight directions, clockwise from north. The confusion roll
    /// indexes into this array, so the order is part of the determinism
    /// contract.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::NorthEast => (1, 1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, -1),
            Direction::South => (0, -1),
            Direction::SouthWest => (-1, -1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, 1),
        }
    }

    /// Direction of a single grid step, if `(dx, dy)` is one.
    pub fn from_delta(dx: i32, dy: i32) -> Option<Direction> {
        match (dx, dy) {
            (0, 1) => Some(Direction::North),
            (1, 1) => Some(Direction::NorthEast),
            (1, 0) => Some(Direction::East),
            (1, -1) => Some(Direction::SouthEast),
            (0, -1) => Some(Direction::South),
            (-1, -1) => Some(Direction::SouthWest),
            (-1, 0) => Some(Direction::West),
            (-1, 1) => Some(Direction::NorthWest),
            _ => None,
        }
    }

    /// Direction that steps from `from` toward `to` (signum on both axes).
    /// `None` when the positions coincide.
    pub fn toward(from: Position, to: Position) -> Option<Direction> {
        Self::from_delta((to.x - from.x).signum(), (to.y - from.y).signum())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error("actor {0} not found")]
    ActorNotFound(EntityId),

    #[error("destination {destination:?} is out of bounds")]
    OutOfBounds { destination: Position },

    #[error("destination {destination:?} is blocked")]
    Blocked { destination: Position },

    #[error("destination {destination:?} is occupied")]
    Occupied { destination: Position },
}

impl GameError for MoveError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            MoveError::Oracle(err) => err.severity(),
            MoveError::ActorNotFound(_) => ErrorSeverity::Validation,
            MoveError::OutOfBounds { .. }
            | MoveError::Blocked { .. }
            | MoveError::Occupied { .. } => ErrorSeverity::Recoverable,
        }
    }
}

/// Single-step movement in one of the eight grid directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveAction {
    pub actor: EntityId,
    pub direction: Direction,
}

impl MoveAction {
    pub fn new(actor: EntityId, direction: Direction) -> Self {
        Self { actor, direction }
    }

    fn destination_from(&self, origin: Position) -> Position {
        let (dx, dy) = self.direction.delta();
        origin.offset(dx, dy)
    }
}

impl ActionTransition for MoveAction {
    type Error = MoveError;

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let actor_state = state
            .entities
            .actor(self.actor)
            .ok_or(MoveError::ActorNotFound(self.actor))?;

        let map = env.map()?;
        let destination = self.destination_from(actor_state.position);
        if !map.contains(destination) {
            return Err(MoveError::OutOfBounds { destination });
        }

        let passable = map
            .tile(destination)
            .map(|tile| tile.is_passable())
            .unwrap_or(false);
        if !passable {
            return Err(MoveError::Blocked { destination });
        }

        if state.entities.blocks_at(destination) {
            return Err(MoveError::Occupied { destination });
        }

        Ok(())
    }

    fn apply(
        &self,
        state: &mut GameState,
        _env: &GameEnv<'_>,
        _messages: &mut dyn MessageSink,
    ) -> Result<(), Self::Error> {
        let actor_state = state
            .entities
            .actor_mut(self.actor)
            .ok_or(MoveError::ActorNotFound(self.actor))?;
        actor_state.position = self.destination_from(actor_state.position);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_round_trips_through_from_delta() {
        for direction in Direction::ALL {
            let (dx, dy) = direction.delta();
            assert_eq!(Direction::from_delta(dx, dy), Some(direction));
        }
        assert_eq!(Direction::from_delta(0, 0), None);
        assert_eq!(Direction::from_delta(2, 0), None);
    }

    #[test]
    fn toward_uses_signum_on_both_axes() {
        let from = Position::new(3, 3);
        assert_eq!(
            Direction::toward(from, Position::new(9, 3)),
            Some(Direction::East)
        );
        assert_eq!(
            Direction::toward(from, Position::new(0, 0)),
            Some(Direction::SouthWest)
        );
        assert_eq!(Direction::toward(from, from), None);
    }

    #[test]
    fn direction_names_serialize_snake_case() {
        assert_eq!(Direction::NorthWest.to_string(), "north_west");
        assert_eq!("south_east".parse::<Direction>(), Ok(Direction::SouthEast));
    }
}
