use pathviz_core::{Grid, Point};

use crate::traits::TerrainModel;

// ---------------------------------------------------------------------------
// SearchSpace
// ---------------------------------------------------------------------------

/// Grid plus a per-cell cost snapshot taken when a run starts.
///
/// A run reads costs only from here, so repainting the board while a run is
/// suspended cannot change that run's behaviour.
#[derive(Debug, Clone)]
pub(crate) struct SearchSpace {
    pub(crate) grid: Grid,
    pub(crate) width: usize,
    costs: Vec<f64>,
}

impl SearchSpace {
    /// Snapshot the cost of every cell of `grid`.
    pub(crate) fn capture<T: TerrainModel + ?Sized>(grid: &Grid, terrain: &T) -> Self {
        let width = grid.width() as usize;
        let mut costs = vec![f64::INFINITY; grid.len()];
        for p in grid.bounds() {
            let i = p.y as usize * width + p.x as usize;
            costs[i] = if terrain.is_blocked(p) {
                f64::INFINITY
            } else {
                terrain.cost_of(p)
            };
        }
        Self {
            grid: *grid,
            width,
            costs,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.costs.len()
    }

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if !self.grid.contains(p) {
            return None;
        }
        Some(p.y as usize * self.width + p.x as usize)
    }

    #[inline]
    pub(crate) fn is_blocked(&self, p: Point) -> bool {
        self.idx(p).is_none_or(|i| self.costs[i] == f64::INFINITY)
    }
}

impl TerrainModel for SearchSpace {
    fn cost_of(&self, p: Point) -> f64 {
        self.idx(p).map_or(f64::INFINITY, |i| self.costs[i])
    }
}
