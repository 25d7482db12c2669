//! Deterministic decision and movement core for a turn-based grid game.
//!
//! `undercroft-core` owns the per-actor AI state machine, the primitive
//! turn actions it drives, and the traversal cost model feeding the
//! `grid-path` search. The surrounding simulation (rendering, map
//! generation, field of view, inventory, death handling) lives elsewhere
//! and talks to this core through the oracle traits in [`env`], the message
//! sink in [`messages`], and the entry points in [`ai`].
pub mod action;
pub mod ai;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod messages;
pub mod state;

pub use action::{
    Action, ActionTransition, BumpAction, BumpError, Direction, MeleeAction, MeleeError,
    MoveAction, MoveError, WaitAction,
};
pub use ai::{
    AiState, AiTransition, ConfusedAi, HostileAi, TurnContext, TurnError, inflict_confusion,
    take_turn, travel_costs,
};
pub use config::GameConfig;
pub use engine::{ExecuteError, TransitionPhase, TransitionPhaseError, execute};
pub use env::{
    Env, GameEnv, GridMap, MapDimensions, MapOracle, OracleError, PcgRng, RngOracle, StaticTile,
    TerrainKind, compute_seed,
};
pub use error::{ErrorSeverity, GameError, NeverError};
pub use messages::{MessageLog, MessageSink};
pub use state::{
    ActorState, ActorStats, EntitiesState, EntityId, GameState, Position, ResourceMeter, Tick,
    TurnState, VisionGrid, WorldState,
};
