//! The fixed-size lattice searched by every algorithm.

use crate::geom::{Point, Range, RangeIter};

/// A `width × height` lattice anchored at the origin.
///
/// `Grid` only answers adjacency questions; what a cell costs lives in the
/// terrain layer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    bounds: Range,
}

impl Grid {
    /// Create a grid. Negative dimensions are treated as zero.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            bounds: Range::new(0, 0, width.max(0), height.max(0)),
        }
    }

    /// The grid rectangle.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.bounds.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    /// Whether `p` names a cell of this grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// In-bounds neighbours of `p`, in [`Point::DIRECTIONS`] order.
    ///
    /// Offsets falling outside the grid are skipped; there is no error case.
    pub fn neighbors(&self, p: Point) -> impl Iterator<Item = Point> {
        let bounds = self.bounds;
        p.neighbors_8().into_iter().filter(move |&n| bounds.contains(n))
    }

    /// Every cell, column by column (`x` outer, `y` inner).
    ///
    /// This is the enumeration order Dijkstra scans its unvisited set in.
    pub fn cells(&self) -> RangeIter {
        self.bounds.iter_columns()
    }
}
