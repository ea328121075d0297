//! Stepwise, cancelable graph search over weighted grids.
//!
//! Four strategies explore a [`Grid`](pathviz_core::Grid) one frontier pop
//! at a time:
//!
//! | [`Algorithm`] | Frontier | Orders by |
//! |---|---|---|
//! | `Bfs` | FIFO queue | hop count |
//! | `Dfs` | LIFO stack | push order |
//! | `Dijkstra` | unvisited list, linear scan | accumulated cost |
//! | `AStar` | open list, linear scan | cost + Manhattan estimate |
//!
//! Costs come from an injected [`TerrainModel`]. Stepping into a cell pays
//! that cell's cost, times [`DIAGONAL_COST`] on diagonal moves. BFS and DFS
//! only look at whether a cell is blocked.
//!
//! A [`Run`] is a suspended search yielding [`SearchEvent`]s; a
//! [`RunController`] owns at most one of them and replaces it whenever a new
//! search starts.

mod algorithm;
mod astar;
mod bfs;
mod controller;
mod dfs;
mod dijkstra;
mod distance;
mod error;
mod frontier;
mod neighbors;
mod path;
mod run;
mod space;
mod traits;

#[cfg(test)]
mod scenarios;

pub use algorithm::{Algorithm, ParseAlgorithmError};
pub use controller::{RunConfig, RunController, RunId, RunState};
pub use distance::{chebyshev, manhattan};
pub use error::SearchError;
pub use path::{DIAGONAL_COST, Predecessors, path_cost, reconstruct, step_cost};
pub use run::{Outcome, Run, RunStats, SearchEvent, find_path};
pub use traits::TerrainModel;

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use pathviz_core::Point;
    use std::time::Duration;

    #[test]
    fn event_round_trip() {
        let done = SearchEvent::Done(Outcome::Found {
            path: vec![Point::new(0, 0), Point::new(1, 1)],
            cost: 1.41,
        });
        let json = serde_json::to_string(&done).unwrap();
        let back: SearchEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, done);
    }

    #[test]
    fn run_config_defaults_missing_fields() {
        let cfg: RunConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.step_delay, Duration::from_millis(20));
        let json = serde_json::to_string(&RunConfig {
            step_delay: Duration::from_millis(150),
        })
        .unwrap();
        let back: RunConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.step_delay, Duration::from_millis(150));
    }
}
