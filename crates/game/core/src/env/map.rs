use crate::state::Position;

/// Static map oracle exposing immutable layout information.
///
/// The map generator and tile storage live outside this core; all it needs
/// from them is the grid bounds and per-tile walkability.
pub trait MapOracle: Send + Sync {
    fn dimensions(&self) -> MapDimensions;
    fn tile(&self, position: Position) -> Option<StaticTile>;

    fn contains(&self, position: Position) -> bool {
        self.dimensions().contains(position)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub width: u32,
    pub height: u32,
}

impl MapDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
    }
}

/// Immutable descriptor for a tile in the static layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StaticTile {
    terrain: TerrainKind,
}

impl StaticTile {
    pub const fn new(terrain: TerrainKind) -> Self {
        Self { terrain }
    }

    pub fn terrain(self) -> TerrainKind {
        self.terrain
    }

    pub fn is_passable(self) -> bool {
        self.terrain.is_passable()
    }
}

/// Canonical terrain classes for static map tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TerrainKind {
    Floor,
    Wall,
}

impl TerrainKind {
    pub fn is_passable(self) -> bool {
        matches!(self, TerrainKind::Floor)
    }
}

/// Dense tile storage implementing [`MapOracle`].
///
/// Suitable for tests and simple embedders; a real dungeon layer can keep
/// its own storage and implement the oracle directly.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridMap {
    dimensions: MapDimensions,
    tiles: Vec<StaticTile>,
}

impl GridMap {
    /// Creates an all-floor map.
    pub fn open(width: u32, height: u32) -> Self {
        Self {
            dimensions: MapDimensions::new(width, height),
            tiles: vec![StaticTile::new(TerrainKind::Floor); (width * height) as usize],
        }
    }

    /// Overwrites the terrain at `position`. Out-of-bounds writes are
    /// ignored.
    pub fn set_terrain(&mut self, position: Position, terrain: TerrainKind) {
        if let Some(idx) = self.index(position) {
            self.tiles[idx] = StaticTile::new(terrain);
        }
    }

    fn index(&self, position: Position) -> Option<usize> {
        if !self.dimensions.contains(position) {
            return None;
        }
        Some((position.y as u32 * self.dimensions.width + position.x as u32) as usize)
    }
}

impl MapOracle for GridMap {
    fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    fn tile(&self, position: Position) -> Option<StaticTile> {
        self.index(position).map(|idx| self.tiles[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_map_is_all_floor() {
        let map = GridMap::open(3, 3);
        assert!(map.tile(Position::new(2, 2)).unwrap().is_passable());
        assert!(map.contains(Position::new(0, 0)));
        assert!(!map.contains(Position::new(3, 0)));
    }

    #[test]
    fn walls_are_impassable() {
        let mut map = GridMap::open(3, 3);
        map.set_terrain(Position::new(1, 1), TerrainKind::Wall);
        assert!(!map.tile(Position::new(1, 1)).unwrap().is_passable());
        assert_eq!(map.tile(Position::new(5, 5)), None);
    }
}
