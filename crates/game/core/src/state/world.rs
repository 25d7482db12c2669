use super::Position;
use crate::env::MapDimensions;

/// Per-cell visibility overlay.
///
/// Recomputed each turn by the embedding field-of-view system; this core
/// only reads it. Out-of-bounds cells read as not visible.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisionGrid {
    width: u32,
    height: u32,
    cells: Vec<bool>,
}

impl VisionGrid {
    /// Creates a grid with every cell unseen.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![false; (width * height) as usize],
        }
    }

    pub fn is_visible(&self, position: Position) -> bool {
        self.index(position)
            .map(|idx| self.cells[idx])
            .unwrap_or(false)
    }

    /// Sets a single cell. Out-of-bounds writes are ignored.
    pub fn set_visible(&mut self, position: Position, visible: bool) {
        if let Some(idx) = self.index(position) {
            self.cells[idx] = visible;
        }
    }

    /// Marks the whole grid seen.
    pub fn reveal_all(&mut self) {
        self.cells.fill(true);
    }

    /// Marks the whole grid unseen.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    fn index(&self, position: Position) -> Option<usize> {
        if position.x < 0
            || position.y < 0
            || position.x >= self.width as i32
            || position.y >= self.height as i32
        {
            return None;
        }
        Some((position.y as u32 * self.width + position.x as u32) as usize)
    }
}

/// Runtime world data layered on top of the static map.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldState {
    pub visible: VisionGrid,
}

impl WorldState {
    pub fn new(dimensions: MapDimensions) -> Self {
        Self {
            visible: VisionGrid::new(dimensions.width, dimensions.height),
        }
    }
}
