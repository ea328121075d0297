//! Cross-algorithm checks on fixed boards and seeded random ones.

use pathviz_core::{Board, BoardConfig, Grid, Point, TerrainRegistry, WALL};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

use crate::{
    Algorithm, Outcome, Run, RunController, SearchError, SearchEvent, TerrainModel, chebyshev,
    find_path, step_cost,
};

const EPS: f64 = 1e-9;

fn p(x: i32, y: i32) -> Point {
    Point::new(x, y)
}

fn board(w: i32, h: i32, start: Point, end: Point) -> Board {
    Board::new(BoardConfig {
        width: w,
        height: h,
        start,
        end,
    })
    .unwrap()
}

/// Plain per-cell costs, endpoints included.
struct CostGrid {
    width: i32,
    costs: Vec<f64>,
}

impl TerrainModel for CostGrid {
    fn cost_of(&self, p: Point) -> f64 {
        self.costs[(p.y * self.width + p.x) as usize]
    }
}

/// Cheapest cost from `start` to every cell by repeated relaxation.
fn reference_costs<T: TerrainModel>(grid: &Grid, terrain: &T, start: Point) -> Vec<f64> {
    let w = grid.width();
    let idx = |p: Point| (p.y * w + p.x) as usize;
    let mut dist = vec![f64::INFINITY; grid.len()];
    dist[idx(start)] = 0.0;
    let mut changed = true;
    while changed {
        changed = false;
        for c in grid.cells() {
            let dc = dist[idx(c)];
            if dc == f64::INFINITY {
                continue;
            }
            for n in grid.neighbors(c) {
                if terrain.is_blocked(n) {
                    continue;
                }
                let nd = dc + step_cost(terrain, c, n);
                if nd < dist[idx(n)] - EPS {
                    dist[idx(n)] = nd;
                    changed = true;
                }
            }
        }
    }
    dist
}

fn random_board(rng: &mut StdRng) -> Board {
    const PALETTE: [&str; 7] = ["Normal", "Normal", "Water", "Mud", "Lava", "Sand", WALL];
    let w = rng.random_range(2..9);
    let h = rng.random_range(2..9);
    let start = p(rng.random_range(0..w), rng.random_range(0..h));
    let mut end = start;
    while end == start {
        end = p(rng.random_range(0..w), rng.random_range(0..h));
    }
    let mut b = board(w, h, start, end);
    for c in Grid::new(w, h).cells() {
        b.paint(c, PALETTE[rng.random_range(0..PALETTE.len())]);
    }
    b
}

fn assert_valid_path<T: TerrainModel>(path: &[Point], start: Point, end: Point, terrain: &T) {
    assert_eq!(path.first(), Some(&start));
    assert_eq!(path.last(), Some(&end));
    for w in path.windows(2) {
        assert_eq!(chebyshev(w[0], w[1]), 1, "{} -> {} is not a step", w[0], w[1]);
    }
    for &c in &path[1..path.len() - 1] {
        assert!(!terrain.is_blocked(c), "path crosses blocked {c}");
    }
}

// ---------------------------------------------------------------------------
// Fixed 3×3 boards
// ---------------------------------------------------------------------------

#[test]
fn open_3x3_takes_the_diagonal() {
    let reg = TerrainRegistry::default();
    let b = board(3, 3, p(0, 0), p(2, 2));
    let view = b.view(&reg);
    for a in [Algorithm::Bfs, Algorithm::Dijkstra, Algorithm::AStar] {
        let outcome = find_path(a, b.start(), b.end(), b.grid(), &view).unwrap();
        assert_eq!(outcome.path(), Some(&[p(0, 0), p(1, 1), p(2, 2)][..]), "{a}");
    }
}

#[test]
fn walled_center_forces_a_detour() {
    let reg = TerrainRegistry::default();
    let mut b = board(3, 3, p(0, 0), p(2, 2));
    b.paint(p(1, 1), WALL);
    let view = b.view(&reg);
    for a in Algorithm::ALL {
        let run = Run::start(a, b.start(), b.end(), b.grid(), &view).unwrap();
        let events: Vec<_> = run.collect::<Result<_, _>>().unwrap();
        assert!(
            !events
                .iter()
                .any(|e| matches!(e, SearchEvent::Visit(c) | SearchEvent::Path(c) if *c == p(1, 1))),
            "{a} touched the wall"
        );
        let Some(SearchEvent::Done(Outcome::Found { path, .. })) = events.last() else {
            panic!("{a} found no path");
        };
        assert!(!path.contains(&p(1, 1)));
        let steps = path.len() - 1;
        assert!((3..=4).contains(&steps), "{a} took {steps} steps");
        assert_valid_path(path, b.start(), b.end(), &view);
    }
}

#[test]
fn weighted_detour_matches_expected_routes() {
    let reg = TerrainRegistry::default();
    let mut b = board(3, 3, p(0, 0), p(2, 2));
    b.paint(p(1, 1), WALL);
    let view = b.view(&reg);
    let dijkstra = find_path(Algorithm::Dijkstra, b.start(), b.end(), b.grid(), &view).unwrap();
    assert_eq!(dijkstra.path(), Some(&[p(0, 0), p(0, 1), p(1, 2), p(2, 2)][..]));
    assert!((dijkstra.cost().unwrap() - 3.41).abs() < EPS);
    let astar = find_path(Algorithm::AStar, b.start(), b.end(), b.grid(), &view).unwrap();
    assert_eq!(astar, dijkstra);
}

#[test]
fn out_of_bounds_or_equal_endpoints_emit_nothing() {
    let reg = TerrainRegistry::default();
    let b = board(3, 3, p(0, 0), p(2, 2));
    let view = b.view(&reg);
    let mut ctl = RunController::default();
    for (s, e) in [(p(0, 0), p(0, 0)), (p(0, 0), p(3, 3)), (p(-1, 2), p(2, 2))] {
        for a in Algorithm::ALL {
            assert_eq!(
                ctl.start(a, s, e, b.grid(), &view),
                Err(SearchError::InvalidEndpoints { start: s, end: e })
            );
            assert!(ctl.next_event().is_none());
        }
    }
}

// ---------------------------------------------------------------------------
// Heuristic admissibility
// ---------------------------------------------------------------------------

/// Manhattan charges 2 for a diagonal that costs 1.41 on Normal ground, so
/// A* commits to the straight route through water before the cheaper
/// diagonal dogleg is ever expanded.
#[test]
fn manhattan_heuristic_can_cost_astar_optimality() {
    let reg = TerrainRegistry::default();
    let mut b = board(3, 2, p(0, 0), p(2, 0));
    b.paint(p(1, 0), "Water");
    let view = b.view(&reg);

    let dijkstra = find_path(Algorithm::Dijkstra, b.start(), b.end(), b.grid(), &view).unwrap();
    let astar = find_path(Algorithm::AStar, b.start(), b.end(), b.grid(), &view).unwrap();

    assert_eq!(dijkstra.path(), Some(&[p(0, 0), p(1, 1), p(2, 0)][..]));
    assert!((dijkstra.cost().unwrap() - 2.82).abs() < EPS);
    assert_eq!(astar.path(), Some(&[p(0, 0), p(1, 0), p(2, 0)][..]));
    assert!((astar.cost().unwrap() - 3.0).abs() < EPS);
}

/// With every cell costing at least 2, no diagonal step is cheaper than the
/// Manhattan distance it covers, and A* matches Dijkstra.
#[test]
fn astar_matches_dijkstra_when_heuristic_never_overestimates() {
    let mut rng = StdRng::seed_from_u64(7);
    const COSTS: [f64; 5] = [2.0, 3.0, 4.0, 5.0, f64::INFINITY];
    for _ in 0..60 {
        let (w, h) = (rng.random_range(2..9), rng.random_range(2..9));
        let grid = Grid::new(w, h);
        let terrain = CostGrid {
            width: w,
            costs: (0..grid.len())
                .map(|_| COSTS[rng.random_range(0..COSTS.len())])
                .collect(),
        };
        let start = p(rng.random_range(0..w), rng.random_range(0..h));
        let end = p(rng.random_range(0..w), rng.random_range(0..h));
        if start == end {
            continue;
        }
        let d = find_path(Algorithm::Dijkstra, start, end, &grid, &terrain).unwrap();
        let a = find_path(Algorithm::AStar, start, end, &grid, &terrain).unwrap();
        match (d.cost(), a.cost()) {
            (Some(dc), Some(ac)) => assert!((dc - ac).abs() < EPS, "dijkstra {dc} vs A* {ac}"),
            (None, None) => {}
            other => panic!("reachability disagrees: {other:?}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Seeded random boards
// ---------------------------------------------------------------------------

#[test]
fn bfs_hop_count_on_open_grids() {
    let reg = TerrainRegistry::default();
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..50 {
        let (w, h) = (rng.random_range(2..12), rng.random_range(2..12));
        let start = p(rng.random_range(0..w), rng.random_range(0..h));
        let end = p(rng.random_range(0..w), rng.random_range(0..h));
        if start == end {
            continue;
        }
        let b = board(w, h, start, end);
        let outcome = find_path(Algorithm::Bfs, start, end, b.grid(), &b.view(&reg)).unwrap();
        let path = outcome.path().unwrap();
        assert_eq!(path.len() as i32 - 1, chebyshev(start, end));
    }
}

#[test]
fn dijkstra_is_optimal_and_paths_are_valid() {
    let reg = TerrainRegistry::default();
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..80 {
        let b = random_board(&mut rng);
        let view = b.view(&reg);
        let best = reference_costs(b.grid(), &view, b.start());
        let target = best[(b.end().y * b.grid().width() + b.end().x) as usize];

        for a in Algorithm::ALL {
            let events: Vec<_> = Run::start(a, b.start(), b.end(), b.grid(), &view)
                .unwrap()
                .collect::<Result<_, _>>()
                .unwrap();
            for e in &events {
                if let SearchEvent::Visit(c) = e {
                    assert!(!view.is_blocked(*c), "{a} visited blocked {c}");
                    assert!(*c != b.start() && *c != b.end());
                }
            }
            let Some(SearchEvent::Done(outcome)) = events.last() else {
                panic!("{a} ended without Done");
            };
            match outcome {
                Outcome::Found { path, cost } => {
                    assert!(target.is_finite(), "{a} found a path to an unreachable end");
                    assert_valid_path(path, b.start(), b.end(), &view);
                    assert!(*cost >= target - EPS);
                    if a == Algorithm::Dijkstra {
                        assert!((cost - target).abs() < EPS, "dijkstra {cost} vs best {target}");
                    }
                }
                Outcome::NotFound => {
                    assert!(target.is_infinite(), "{a} missed a reachable end");
                }
            }
        }
    }
}
