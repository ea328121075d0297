use std::collections::VecDeque;

use pathviz_core::Point;

use crate::frontier::Expansion;
use crate::neighbors::Neighbors;
use crate::path::Predecessors;
use crate::space::SearchSpace;

/// Breadth-first frontier: a FIFO queue, cells marked visited when enqueued.
///
/// Terrain cost is ignored; only blocking matters. The path found is
/// shortest by 8-directional hop count.
#[derive(Debug)]
pub(crate) struct Bfs {
    queue: VecDeque<Point>,
    visited: Vec<bool>,
    preds: Predecessors,
    end: Point,
}

impl Bfs {
    pub(crate) fn new(space: &SearchSpace, start: Point, end: Point) -> Self {
        let mut visited = vec![false; space.len()];
        if let Some(si) = space.idx(start) {
            visited[si] = true;
        }
        Self {
            queue: VecDeque::from([start]),
            visited,
            preds: Predecessors::new(),
            end,
        }
    }

    pub(crate) fn expand(&mut self, space: &SearchSpace, nbuf: &mut Neighbors) -> Expansion {
        let Some(current) = self.queue.pop_front() else {
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
            self.queue.push_back(np);
        }
        Expansion::Expanded(current)
    }

    pub(crate) fn predecessors(&self) -> &Predecessors {
        &self.preds
    }
}
