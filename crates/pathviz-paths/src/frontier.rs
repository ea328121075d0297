use pathviz_core::Point;

use crate::algorithm::Algorithm;
use crate::astar::AStar;
use crate::bfs::Bfs;
use crate::dfs::Dfs;
use crate::dijkstra::Dijkstra;
use crate::neighbors::Neighbors;
use crate::path::Predecessors;
use crate::space::SearchSpace;

/// What a single expansion step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Expansion {
    /// `cell` was taken off the frontier and its neighbours processed.
    Expanded(Point),
    /// The end cell came off the frontier.
    Reached,
    /// Nothing reachable is left.
    Exhausted,
}

/// Per-algorithm frontier state of one run.
#[derive(Debug)]
pub(crate) enum Frontier {
    Bfs(Bfs),
    Dfs(Dfs),
    Dijkstra(Dijkstra),
    AStar(AStar),
}

impl Frontier {
    pub(crate) fn new(algorithm: Algorithm, space: &SearchSpace, start: Point, end: Point) -> Self {
        match algorithm {
            Algorithm::Bfs => Self::Bfs(Bfs::new(space, start, end)),
            Algorithm::Dfs => Self::Dfs(Dfs::new(space, start, end)),
            Algorithm::Dijkstra => Self::Dijkstra(Dijkstra::new(space, start, end)),
            Algorithm::AStar => Self::AStar(AStar::new(space, start, end)),
        }
    }

    /// Advance by exactly one frontier pop.
    pub(crate) fn expand(&mut self, space: &SearchSpace, nbuf: &mut Neighbors) -> Expansion {
        match self {
            Self::Bfs(s) => s.expand(space, nbuf),
            Self::Dfs(s) => s.expand(space, nbuf),
            Self::Dijkstra(s) => s.expand(space, nbuf),
            Self::AStar(s) => s.expand(space, nbuf),
        }
    }

    pub(crate) fn predecessors(&self) -> &Predecessors {
        match self {
            Self::Bfs(s) => s.predecessors(),
            Self::Dfs(s) => s.predecessors(),
            Self::Dijkstra(s) => s.predecessors(),
            Self::AStar(s) => s.predecessors(),
        }
    }
}
