use std::collections::VecDeque;

use grid_path::{Cell, Pathfinder};

use super::{AiTransition, TurnContext, TurnError, costs};
use crate::action::{Action, Direction, MeleeAction, MoveAction, WaitAction};
use crate::config::GameConfig;
use crate::state::{EntityId, Position};

/// Hostile pursuit behavior.
///
/// While its own cell is visible the actor hunts the player directly:
/// melee when adjacent, otherwise a freshly computed route. When the actor
/// falls out of sight it coasts along the last known route until the route
/// runs dry, then idles.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HostileAi {
    actor: EntityId,

    /// Cached route toward the player's last pathed position; front = next
    /// step. Empty when no route is known or needed.
    path: VecDeque<Position>,
}

impl HostileAi {
    pub fn new(actor: EntityId) -> Self {
        Self {
            actor,
            path: VecDeque::new(),
        }
    }

    pub fn actor(&self) -> EntityId {
        self.actor
    }

    /// The cached route. Waypoints reflect the cost grid at the time they
    /// were computed; staleness self-corrects through recomputation.
    pub fn path(&self) -> &VecDeque<Position> {
        &self.path
    }

    pub(super) fn perform(&mut self, ctx: &mut TurnContext<'_>) -> Result<AiTransition, TurnError> {
        let Some(me) = ctx.state.entities.actor(self.actor) else {
            return Err(TurnError::ActorNotFound(self.actor));
        };
        let position = me.position;
        let target = ctx.state.entities.player.position;
        let distance = position.chebyshev_distance(target);

        if ctx.state.world.visible.is_visible(position) {
            if distance <= 1 {
                // adjacent and seen: strike, leaving the cached path alone
                if let Some(direction) = Direction::toward(position, target) {
                    tracing::debug!("{} is adjacent to the player, attacking", self.actor);
                    super::dispatch(ctx, &Action::Melee(MeleeAction::new(self.actor, direction)))?;
                    return Ok(AiTransition::Retain);
                }
                // sharing the player's cell should not happen; wait it out
                super::dispatch(ctx, &Action::Wait(WaitAction::new(self.actor)))?;
                return Ok(AiTransition::Retain);
            }

            // seen but not adjacent: always a fresh route, even over a live one
            self.path = self.route_to(ctx, position, target)?;
            tracing::debug!(
                "{} re-pathed toward the player, {} steps",
                self.actor,
                self.path.len()
            );
        }

        if let Some(next) = self.path.pop_front() {
            let (dx, dy) = position.delta_to(next);
            if let Some(direction) = Direction::from_delta(dx, dy) {
                super::dispatch(ctx, &Action::Move(MoveAction::new(self.actor, direction)))?;
                return Ok(AiTransition::Retain);
            }
            // the next waypoint is no longer adjacent (the actor was moved
            // by something else); the rest of the route is useless too
            tracing::debug!("{} dropped a stale route", self.actor);
            self.path.clear();
        }

        super::dispatch(ctx, &Action::Wait(WaitAction::new(self.actor)))?;
        Ok(AiTransition::Retain)
    }

    fn route_to(
        &self,
        ctx: &TurnContext<'_>,
        from: Position,
        to: Position,
    ) -> Result<VecDeque<Position>, TurnError> {
        let map = ctx.env.map()?;
        let costs = costs::travel_costs(map, &ctx.state.entities, ctx.config);
        let finder =
            Pathfinder::with_factors(&costs, GameConfig::CARDINAL_STEP, GameConfig::DIAGONAL_STEP);
        let route = finder.path_to(Cell::new(from.x, from.y), Cell::new(to.x, to.y));
        Ok(route
            .into_iter()
            .map(|cell| Position::new(cell.x, cell.y))
            .collect())
    }
}
