//! Traversal cost model over the static map and current entity set.

use grid_path::{Cell, CostGrid};

use crate::config::GameConfig;
use crate::env::MapOracle;
use crate::state::{EntitiesState, Position};

/// Derives the per-cell traversal costs pathfinding runs on.
///
/// Impassable terrain costs 0 (a hard block); walkable cells cost 1; every
/// movement-blocking entity standing on a nonzero-cost cell adds
/// `config.blocker_cost`, once per entity, so stacked blockers get
/// progressively more expensive without ever becoming walls.
///
/// Recomputed fresh for every pathfinding request - entities move
/// mid-turn, and the grid is cheap next to a full search over it.
pub fn travel_costs<M>(map: &M, entities: &EntitiesState, config: &GameConfig) -> CostGrid
where
    M: MapOracle + ?Sized,
{
    let dimensions = map.dimensions();
    let mut costs = CostGrid::new(dimensions.width, dimensions.height);

    for y in 0..dimensions.height as i32 {
        for x in 0..dimensions.width as i32 {
            let passable = map
                .tile(Position::new(x, y))
                .map(|tile| tile.is_passable())
                .unwrap_or(false);
            if !passable {
                costs.set_cost(Cell::new(x, y), 0);
            }
        }
    }

    for entity in entities.all_actors() {
        let cell = Cell::new(entity.position.x, entity.position.y);
        if entity.blocks_movement && !costs.is_blocked(cell) {
            costs.add_cost(cell, config.blocker_cost);
        }
    }

    costs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{GridMap, TerrainKind};
    use crate::state::{ActorState, ActorStats, EntityId};

    fn blocker(id: u32, x: i32, y: i32) -> ActorState {
        ActorState::new(
            EntityId(id),
            "orc",
            Position::new(x, y),
            10,
            ActorStats::default(),
        )
    }

    #[test]
    fn walls_cost_zero_regardless_of_occupancy() {
        let mut map = GridMap::open(4, 4);
        map.set_terrain(Position::new(1, 1), TerrainKind::Wall);

        let mut entities = EntitiesState::default();
        entities.player = blocker(0, 1, 1); // standing on the wall cell

        let costs = travel_costs(&map, &entities, &GameConfig::default());
        assert_eq!(costs.cost(Cell::new(1, 1)), 0);
    }

    #[test]
    fn open_unoccupied_cells_cost_one() {
        let map = GridMap::open(4, 4);
        let mut entities = EntitiesState::default();
        entities.player = blocker(0, 0, 0);

        let costs = travel_costs(&map, &entities, &GameConfig::default());
        assert_eq!(costs.cost(Cell::new(2, 2)), 1);
    }

    #[test]
    fn each_blocker_adds_its_surcharge() {
        let map = GridMap::open(4, 4);
        let mut entities = EntitiesState::default();
        entities.player = blocker(0, 3, 3);
        entities.npcs.push(blocker(1, 2, 2)).unwrap();
        entities.npcs.push(blocker(2, 2, 2)).unwrap();

        let costs = travel_costs(&map, &entities, &GameConfig::default());
        assert_eq!(costs.cost(Cell::new(3, 3)), 11);
        // two blockers stacked on one cell accumulate additively
        assert_eq!(costs.cost(Cell::new(2, 2)), 21);
    }

    #[test]
    fn non_blocking_entities_do_not_surcharge() {
        let map = GridMap::open(4, 4);
        let mut entities = EntitiesState::default();
        entities.player = blocker(0, 3, 3);
        let mut corpse = blocker(1, 2, 2);
        corpse.blocks_movement = false;
        entities.npcs.push(corpse).unwrap();

        let costs = travel_costs(&map, &entities, &GameConfig::default());
        assert_eq!(costs.cost(Cell::new(2, 2)), 1);
    }
}
