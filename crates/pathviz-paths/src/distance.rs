use pathviz_core::Point;

/// Manhattan (L1) distance between two points.
///
/// This is the A* heuristic. Under 8-directional movement it overestimates
/// diagonal runs (2 versus 1.41 per step), so A* paths can be costlier than
/// Dijkstra's.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Chebyshev (L∞) distance: the 8-directional hop count on an open grid.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}
