/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Extra traversal cost a movement-blocking entity adds to its cell.
    ///
    /// A lower number means more enemies will crowd behind each other in
    /// hallways; a higher number means enemies will take longer paths in
    /// order to surround the player.
    pub blocker_cost: u32,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of NPCs placed on one map.
    pub const MAX_NPCS: usize = 32;

    // ===== pathfinding step factors =====
    /// Relative cost of a cardinal step.
    pub const CARDINAL_STEP: u32 = 2;
    /// Relative cost of a diagonal step. At 1.5x the cardinal factor, a
    /// diagonal beats two cardinal steps but loses to one, which keeps
    /// routes from zig-zagging through tight spaces.
    pub const DIAGONAL_STEP: u32 = 3;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_BLOCKER_COST: u32 = 10;

    pub fn new() -> Self {
        Self {
            blocker_cost: Self::DEFAULT_BLOCKER_COST,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
