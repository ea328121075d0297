use pathviz_core::Point;

use crate::distance::manhattan;
use crate::frontier::Expansion;
use crate::neighbors::Neighbors;
use crate::path::{Predecessors, step_cost};
use crate::space::SearchSpace;

/// Heuristic estimate of the remaining cost from `from` to `to`.
///
/// Manhattan distance, which is not admissible for diagonal moves; see
/// [`manhattan`].
#[inline]
fn estimate(from: Point, to: Point) -> f64 {
    f64::from(manhattan(from, to))
}

/// A* frontier: an insertion-ordered open list plus a closed set.
///
/// Each expansion takes the open cell with the smallest `f = g + h`; among
/// equal scores the one inserted first wins.
#[derive(Debug)]
pub(crate) struct AStar {
    open: Vec<Point>,
    in_open: Vec<bool>,
    closed: Vec<bool>,
    g: Vec<f64>,
    f: Vec<f64>,
    preds: Predecessors,
    end: Point,
}

impl AStar {
    pub(crate) fn new(space: &SearchSpace, start: Point, end: Point) -> Self {
        let n = space.len();
        let mut g = vec![f64::INFINITY; n];
        let mut f = vec![f64::INFINITY; n];
        let mut in_open = vec![false; n];
        if let Some(si) = space.idx(start) {
            g[si] = 0.0;
            f[si] = estimate(start, end);
            in_open[si] = true;
        }
        Self {
            open: vec![start],
            in_open,
            closed: vec![false; n],
            g,
            f,
            preds: Predecessors::new(),
            end,
        }
    }

    /// Position in `open` of the first cell with minimum `f`.
    fn best(&self, space: &SearchSpace) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (pos, &p) in self.open.iter().enumerate() {
            let Some(i) = space.idx(p) else {
                continue;
            };
            let f = self.f[i];
            if best.is_none_or(|(_, bf)| f < bf) {
                best = Some((pos, f));
            }
        }
        best.map(|(pos, _)| pos)
    }

    pub(crate) fn expand(&mut self, space: &SearchSpace, nbuf: &mut Neighbors) -> Expansion {
        let Some(pos) = self.best(space) else {
            return Expansion::Exhausted;
        };
        let current = self.open[pos];
        if current == self.end {
            return Expansion::Reached;
        }
        let Some(ci) = space.idx(current) else {
            return Expansion::Exhausted;
        };

        self.open.remove(pos);
        self.in_open[ci] = false;
        self.closed[ci] = true;
        let current_g = self.g[ci];

        for &np in nbuf.open(space, current) {
            let Some(ni) = space.idx(np) else {
                continue;
            };
            if self.closed[ni] {
                continue;
            }
            let tentative = current_g + step_cost(space, current, np);
            if !self.in_open[ni] {
                self.open.push(np);
                self.in_open[ni] = true;
            } else if tentative >= self.g[ni] {
                continue;
            }
            self.preds.insert(np, current);
            self.g[ni] = tentative;
            self.f[ni] = tentative + estimate(np, self.end);
        }
        Expansion::Expanded(current)
    }

    pub(crate) fn predecessors(&self) -> &Predecessors {
        &self.preds
    }
}
