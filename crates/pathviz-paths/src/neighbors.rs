use pathviz_core::Point;

use crate::space::SearchSpace;

/// Reusable neighbour buffer.
///
/// Keeps one allocation alive across expansions of a run.
#[derive(Debug)]
pub(crate) struct Neighbors {
    buf: Vec<Point>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    pub(crate) fn new() -> Self {
        Self {
            buf: Vec::with_capacity(8),
        }
    }

    /// In-bounds, non-blocked neighbours of `p`, in direction order.
    pub(crate) fn open(&mut self, space: &SearchSpace, p: Point) -> &[Point] {
        self.buf.clear();
        self.buf
            .extend(space.grid.neighbors(p).filter(|&n| !space.is_blocked(n)));
        &self.buf
    }
}
