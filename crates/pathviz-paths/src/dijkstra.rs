use pathviz_core::Point;

use crate::frontier::Expansion;
use crate::neighbors::Neighbors;
use crate::path::{Predecessors, step_cost};
use crate::space::SearchSpace;

/// Dijkstra frontier over an explicit unvisited list.
///
/// The list starts as every cell in column-major order. Each expansion scans
/// it for the smallest tentative distance; among equal distances the one
/// found first in the list wins.
#[derive(Debug)]
pub(crate) struct Dijkstra {
    unvisited: Vec<Point>,
    done: Vec<bool>,
    dist: Vec<f64>,
    preds: Predecessors,
    end: Point,
}

impl Dijkstra {
    pub(crate) fn new(space: &SearchSpace, start: Point, end: Point) -> Self {
        let mut dist = vec![f64::INFINITY; space.len()];
        if let Some(si) = space.idx(start) {
            dist[si] = 0.0;
        }
        Self {
            unvisited: space.grid.cells().collect(),
            done: vec![false; space.len()],
            dist,
            preds: Predecessors::new(),
            end,
        }
    }

    /// Position in `unvisited` of the first cell with minimum distance.
    fn closest(&self, space: &SearchSpace) -> Option<(usize, f64)> {
        let mut best: Option<(usize, f64)> = None;
        for (pos, &p) in self.unvisited.iter().enumerate() {
            let Some(i) = space.idx(p) else {
                continue;
            };
            let d = self.dist[i];
            if best.is_none_or(|(_, bd)| d < bd) {
                best = Some((pos, d));
            }
        }
        best
    }

    pub(crate) fn expand(&mut self, space: &SearchSpace, nbuf: &mut Neighbors) -> Expansion {
        let Some((pos, current_dist)) = self.closest(space) else {
            return Expansion::Exhausted;
        };
        // Whatever is left cannot be reached from the start.
        if current_dist == f64::INFINITY {
            return Expansion::Exhausted;
        }
        let current = self.unvisited.remove(pos);
        if let Some(ci) = space.idx(current) {
            self.done[ci] = true;
        }
        if current == self.end {
            return Expansion::Reached;
        }

        for &np in nbuf.open(space, current) {
            let Some(ni) = space.idx(np) else {
                continue;
            };
            if self.done[ni] {
                continue;
            }
            let tentative = current_dist + step_cost(space, current, np);
            if tentative < self.dist[ni] {
                self.dist[ni] = tentative;
                self.preds.insert(np, current);
            }
        }
        Expansion::Expanded(current)
    }

    pub(crate) fn predecessors(&self) -> &Predecessors {
        &self.preds
    }
}
