use grid_path::{Cell, Pathfinder};
use undercroft_core::{
    ActorState, ActorStats, AiState, EntitiesState, EntityId, Env, GameConfig, GameEnv, GameState,
    GridMap, MapOracle, MessageLog, PcgRng, Position, TerrainKind, WorldState, inflict_confusion,
    take_turn, travel_costs,
};

const ORC: EntityId = EntityId(1);

fn player(position: Position) -> ActorState {
    ActorState::new(
        EntityId::PLAYER,
        "Player",
        position,
        30,
        ActorStats::new(5, 2),
    )
}

fn orc(position: Position) -> ActorState {
    ActorState::new(ORC, "Orc", position, 10, ActorStats::new(3, 0)).with_ai(AiState::hostile(ORC))
}

fn game(map: &GridMap, orc_at: Position, player_at: Position) -> GameState {
    let mut entities = EntitiesState::default();
    entities.player = player(player_at);
    entities.npcs.push(orc(orc_at)).unwrap();
    GameState::new(0, entities, WorldState::new(map.dimensions()))
}

fn orc_turn(map: &GridMap, state: &mut GameState, log: &mut MessageLog) {
    let rng = PcgRng;
    let env: GameEnv = Env::with_all(map, &rng);
    take_turn(ORC, state, env, &GameConfig::default(), log).unwrap();
}

fn cached_path(state: &GameState) -> Vec<Position> {
    match state.entities.actor(ORC).unwrap().ai.as_ref() {
        Some(AiState::Hostile(ai)) => ai.path().iter().copied().collect(),
        other => panic!("expected hostile ai, got {other:?}"),
    }
}

// Scenario A: open 5x5, no obstacles - the route from corner to corner is
// four diagonal steps.
#[test]
fn open_grid_route_is_all_diagonals() {
    let costs = grid_path::CostGrid::new(5, 5);
    let finder =
        Pathfinder::with_factors(&costs, GameConfig::CARDINAL_STEP, GameConfig::DIAGONAL_STEP);
    let route = finder.path_to(Cell::new(0, 0), Cell::new(4, 4));

    assert_eq!(route.len(), 4);
    assert_eq!(
        route,
        vec![
            Cell::new(1, 1),
            Cell::new(2, 2),
            Cell::new(3, 3),
            Cell::new(4, 4),
        ]
    );
}

// Scenario B: a 3x1 corridor with a blocking entity in the middle. The
// blocker surcharges its cell to 11 rather than walling it off, so the
// route still runs straight through at length 2.
#[test]
fn corridor_blocker_is_crossed_not_avoided() {
    let map = GridMap::open(3, 1);
    let mut state = game(&map, Position::new(0, 0), Position::new(2, 0));
    state
        .entities
        .npcs
        .push(ActorState::new(
            EntityId(2),
            "Troll",
            Position::new(1, 0),
            16,
            ActorStats::new(4, 1),
        ))
        .unwrap();

    let costs = travel_costs(&map, &state.entities, &GameConfig::default());
    assert_eq!(costs.cost(Cell::new(1, 0)), 11);

    let finder =
        Pathfinder::with_factors(&costs, GameConfig::CARDINAL_STEP, GameConfig::DIAGONAL_STEP);
    let route = finder.path_to(Cell::new(0, 0), Cell::new(2, 0));
    assert_eq!(route, vec![Cell::new(1, 0), Cell::new(2, 0)]);
}

// Scenario C: adjacent and visible - the orc attacks, and the cached path
// from the previous turn survives untouched.
#[test]
fn adjacent_orc_attacks_and_keeps_its_path() {
    let mut map = GridMap::open(4, 2);
    for x in 0..4 {
        map.set_terrain(Position::new(x, 1), TerrainKind::Wall);
    }
    let mut state = game(&map, Position::new(0, 0), Position::new(2, 0));
    state.world.visible.reveal_all();
    let mut log = MessageLog::new();

    // first turn walks the corridor and caches the rest of the route
    orc_turn(&map, &mut state, &mut log);
    assert_eq!(
        state.entities.actor(ORC).unwrap().position,
        Position::new(1, 0)
    );
    let before = cached_path(&state);
    assert_eq!(before, vec![Position::new(2, 0)]);

    // second turn: distance 1, so melee - no movement, no path change
    orc_turn(&map, &mut state, &mut log);
    assert_eq!(
        state.entities.actor(ORC).unwrap().position,
        Position::new(1, 0)
    );
    assert_eq!(cached_path(&state), before);
    assert_eq!(state.entities.player.hp.current, 29);
    assert_eq!(log.entries().last().unwrap(), "Orc attacks Player for 1 hit points.");
}

// Scenario D: confusion expiry - one notice, no movement, previous AI
// restored, all in a single call.
#[test]
fn confusion_expiry_reverts_in_place() {
    let map = GridMap::open(6, 6);
    let mut state = game(&map, Position::new(2, 2), Position::new(5, 5));
    inflict_confusion(ORC, 0, &mut state).unwrap();
    let mut log = MessageLog::new();

    let before = state.entities.actor(ORC).unwrap().position;
    orc_turn(&map, &mut state, &mut log);

    assert_eq!(state.entities.actor(ORC).unwrap().position, before);
    assert_eq!(log.entries(), ["The Orc is no longer confused"]);
    assert!(matches!(
        state.entities.actor(ORC).unwrap().ai,
        Some(AiState::Hostile(_))
    ));
}

// A confused actor spends its turns stumbling, then reverts and resumes
// the hunt: the full status-effect lifecycle in one pass.
#[test]
fn confusion_lifecycle_returns_to_pursuit() {
    let map = GridMap::open(9, 9);
    let mut state = game(&map, Position::new(4, 4), Position::new(8, 8));
    state.world.visible.reveal_all();
    inflict_confusion(ORC, 2, &mut state).unwrap();
    let mut log = MessageLog::new();

    // two stumbling turns, then the expiry turn
    orc_turn(&map, &mut state, &mut log);
    orc_turn(&map, &mut state, &mut log);
    orc_turn(&map, &mut state, &mut log);
    assert!(matches!(
        state.entities.actor(ORC).unwrap().ai,
        Some(AiState::Hostile(_))
    ));

    // back on the hunt: the next turn closes in on the player
    let before = state
        .entities
        .actor(ORC)
        .unwrap()
        .position
        .chebyshev_distance(state.entities.player.position);
    orc_turn(&map, &mut state, &mut log);
    let after = state
        .entities
        .actor(ORC)
        .unwrap()
        .position
        .chebyshev_distance(state.entities.player.position);
    assert!(after < before);
}

// Pursuit across an open room ends with the orc trading blows instead of
// swapping cells with the player.
#[test]
fn pursuit_closes_distance_and_ends_in_melee() {
    let map = GridMap::open(7, 7);
    let mut state = game(&map, Position::new(0, 0), Position::new(5, 5));
    state.world.visible.reveal_all();
    let mut log = MessageLog::new();

    for _ in 0..12 {
        orc_turn(&map, &mut state, &mut log);
    }

    // the orc is parked next to the player, not on top of it
    let orc_position = state.entities.actor(ORC).unwrap().position;
    assert_eq!(orc_position.chebyshev_distance(Position::new(5, 5)), 1);
    assert!(state.entities.player.hp.current < 30);
}
