//! Visible and explored tile matrices consumed by the renderer.

use super::Position;
use crate::env::MapDimensions;

/// Row-major `visible`/`explored` flags sized to the map.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibilityMap {
    dimensions: MapDimensions,
    visible: Vec<bool>,
    explored: Vec<bool>,
}

impl VisibilityMap {
    pub fn new(dimensions: MapDimensions) -> Self {
        let len = dimensions.area();
        Self {
            dimensions,
            visible: vec![false; len],
            explored: vec![false; len],
        }
    }

    pub fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    pub fn is_visible(&self, position: Position) -> bool {
        self.dimensions
            .index_of(position)
            .is_some_and(|index| self.visible[index])
    }

    pub fn is_explored(&self, position: Position) -> bool {
        self.dimensions
            .index_of(position)
            .is_some_and(|index| self.explored[index])
    }

    /// Marks a tile visible. Out-of-bounds positions are ignored.
    pub fn set_visible(&mut self, position: Position, visible: bool) {
        if let Some(index) = self.dimensions.index_of(position) {
            self.visible[index] = visible;
        }
    }

    pub fn clear_visible(&mut self) {
        self.visible.fill(false);
    }

    /// Folds the current visible set into the explored set.
    pub fn merge_explored(&mut self) {
        for (explored, visible) in self.explored.iter_mut().zip(&self.visible) {
            *explored |= *visible;
        }
    }

    pub fn visible_count(&self) -> usize {
        self.visible.iter().filter(|visible| **visible).count()
    }
}
