use pathviz_core::Point;

use crate::frontier::Expansion;
use crate::neighbors::Neighbors;
use crate::path::Predecessors;
use crate::space::SearchSpace;

/// Depth-first frontier: a LIFO stack, cells marked visited when pushed.
///
/// All unvisited neighbours of a cell are pushed before the next pop, so the
/// last neighbour in direction order is expanded first. This is not the
/// order a recursive depth-first walk would produce.
#[derive(Debug)]
pub(crate) struct Dfs {
    stack: Vec<Point>,
    visited: Vec<bool>,
    preds: Predecessors,
    end: Point,
}

impl Dfs {
    pub(crate) fn new(space: &SearchSpace, start: Point, end: Point) -> Self {
        let mut visited = vec![false; space.len()];
        if let Some(si) = space.idx(start) {
            visited[si] = true;
        }
        Self {
            stack: vec![start],
            visited,
            preds: Predecessors::new(),
            end,
        }
    }

    pub(crate) fn expand(&mut self, space: &SearchSpace, nbuf: &mut Neighbors) -> Expansion {
        let Some(current) = self.stack.pop() else {
            return Expansion::Exhausted;
        };
        if current == self.end {
            return Expansion::Reached;
        }

        for &np in nbuf.open(space, current) {
            let Some(ni) = space.idx(np) else {
                continue;
            };
            if self.visited[ni] {
                continue;
            }
            self.visited[ni] = true;
            self.preds.insert(np, current);
            self.stack.push(np);
        }
        Expansion::Expanded(current)
    }

    pub(crate) fn predecessors(&self) -> &Predecessors {
        &self.preds
    }
}
