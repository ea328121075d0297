//! Predecessor bookkeeping and path reconstruction.

use std::collections::HashMap;

use pathviz_core::Point;

use crate::error::SearchError;
use crate::traits::TerrainModel;

/// For every reached cell, the cell it was discovered or relaxed from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Predecessors {
    map: HashMap<Point, Point>,
}

impl Predecessors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `cell` was reached from `from`, replacing any earlier
    /// entry.
    pub fn insert(&mut self, cell: Point, from: Point) {
        self.map.insert(cell, from);
    }

    pub fn get(&self, cell: Point) -> Option<Point> {
        self.map.get(&cell).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Multiplier applied to the destination cost of a diagonal step
/// (an approximation of √2).
pub const DIAGONAL_COST: f64 = 1.41;

/// Rebuild the route `start ..= end` by walking predecessors back from `end`.
///
/// Fails with [`SearchError::BrokenChain`] if a cell other than `start` has
/// no predecessor, or if the walk loops without reaching `start`.
pub fn reconstruct(
    predecessors: &Predecessors,
    start: Point,
    end: Point,
) -> Result<Vec<Point>, SearchError> {
    let mut path = vec![end];
    let mut current = end;
    while current != start {
        let prev = predecessors
            .get(current)
            .ok_or(SearchError::BrokenChain { at: current })?;
        // A chain longer than the map has entries must revisit a cell.
        if path.len() > predecessors.len() {
            return Err(SearchError::BrokenChain { at: current });
        }
        path.push(prev);
        current = prev;
    }
    path.reverse();
    Ok(path)
}

/// Cost of stepping from `from` into the adjacent cell `to`: the destination
/// cell's cost, times [`DIAGONAL_COST`] when both coordinates change.
#[inline]
pub fn step_cost<T: TerrainModel + ?Sized>(terrain: &T, from: Point, to: Point) -> f64 {
    let base = terrain.cost_of(to);
    if from.is_diagonal_to(to) {
        base * DIAGONAL_COST
    } else {
        base
    }
}

/// Summed [`step_cost`] along `path`.
pub fn path_cost<T: TerrainModel + ?Sized>(terrain: &T, path: &[Point]) -> f64 {
    path.windows(2).map(|w| step_cost(terrain, w[0], w[1])).sum()
}
