//! The painted board: per-cell terrain labels plus the start/end markers.

use std::fmt;

use crate::geom::Point;
use crate::grid::Grid;
use crate::terrain::{NORMAL, TerrainRegistry, TerrainType};

/// Board dimensions and initial marker positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BoardConfig {
    pub width: i32,
    pub height: i32,
    pub start: Point,
    pub end: Point,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            start: Point::new(0, 0),
            end: Point::new(1, 0),
        }
    }
}

/// Errors for marker placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// The position is outside the grid.
    OutOfBounds(Point),
    /// The position already holds the other marker.
    Occupied(Point),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds(p) => write!(f, "position {p} is outside the board"),
            Self::Occupied(p) => write!(f, "position {p} already holds the other marker"),
        }
    }
}

impl std::error::Error for BoardError {}

/// A grid whose cells each carry a terrain name, with distinct start and end
/// cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    grid: Grid,
    labels: Vec<String>,
    start: Point,
    end: Point,
}

impl Board {
    /// Create an all-[`NORMAL`] board.
    ///
    /// Fails if either marker lies outside the grid, or if they coincide.
    pub fn new(config: BoardConfig) -> Result<Self, BoardError> {
        let grid = Grid::new(config.width, config.height);
        for p in [config.start, config.end] {
            if !grid.contains(p) {
                return Err(BoardError::OutOfBounds(p));
            }
        }
        if config.start == config.end {
            return Err(BoardError::Occupied(config.end));
        }
        Ok(Self {
            grid,
            labels: vec![NORMAL.to_string(); grid.len()],
            start: config.start,
            end: config.end,
        })
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Point {
        self.end
    }

    /// Whether `p` holds the start or the end marker.
    #[inline]
    pub fn is_marker(&self, p: Point) -> bool {
        p == self.start || p == self.end
    }

    fn idx(&self, p: Point) -> Option<usize> {
        if !self.grid.contains(p) {
            return None;
        }
        Some((p.y * self.grid.width() + p.x) as usize)
    }

    /// The terrain name painted at `p`, or `None` outside the grid.
    pub fn label(&self, p: Point) -> Option<&str> {
        self.idx(p).map(|i| self.labels[i].as_str())
    }

    /// Paint terrain `name` onto `p`.
    ///
    /// Marker cells and out-of-bounds positions are left alone and `false`
    /// is returned.
    pub fn paint(&mut self, p: Point, name: &str) -> bool {
        if self.is_marker(p) {
            return false;
        }
        let Some(i) = self.idx(p) else {
            return false;
        };
        name.clone_into(&mut self.labels[i]);
        true
    }

    /// Move the start marker to `p`. On error the marker stays put.
    pub fn move_start(&mut self, p: Point) -> Result<(), BoardError> {
        self.check_drop(p, self.end)?;
        self.start = p;
        Ok(())
    }

    /// Move the end marker to `p`. On error the marker stays put.
    pub fn move_end(&mut self, p: Point) -> Result<(), BoardError> {
        self.check_drop(p, self.start)?;
        self.end = p;
        Ok(())
    }

    fn check_drop(&self, p: Point, other: Point) -> Result<(), BoardError> {
        let err = if !self.grid.contains(p) {
            BoardError::OutOfBounds(p)
        } else if p == other {
            BoardError::Occupied(p)
        } else {
            return Ok(());
        };
        log::warn!("marker drop rejected: {err}");
        Err(err)
    }

    /// Reset every cell except the two markers to [`NORMAL`].
    ///
    /// Returns the number of cells whose label changed; calling it again
    /// right away returns 0.
    pub fn clear(&mut self) -> usize {
        let mut changed = 0;
        for p in self.grid.cells() {
            if self.is_marker(p) {
                continue;
            }
            let Some(i) = self.idx(p) else {
                continue;
            };
            if self.labels[i] != NORMAL {
                NORMAL.clone_into(&mut self.labels[i]);
                changed += 1;
            }
        }
        log::debug!("board cleared, {changed} cells reset");
        changed
    }

    /// Pair the board with a registry to resolve cell costs.
    pub fn view<'a>(&'a self, registry: &'a TerrainRegistry) -> TerrainView<'a> {
        TerrainView {
            board: self,
            registry,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        let config = BoardConfig::default();
        let grid = Grid::new(config.width, config.height);
        Self {
            grid,
            labels: vec![NORMAL.to_string(); grid.len()],
            start: config.start,
            end: config.end,
        }
    }
}

/// Read-only terrain lookup over a [`Board`] and a [`TerrainRegistry`].
#[derive(Debug, Clone, Copy)]
pub struct TerrainView<'a> {
    board: &'a Board,
    registry: &'a TerrainRegistry,
}

impl<'a> TerrainView<'a> {
    pub fn board(&self) -> &'a Board {
        self.board
    }

    /// The terrain at `p`, or `None` outside the grid. Unknown labels
    /// resolve to the default terrain.
    pub fn terrain_at(&self, p: Point) -> Option<&'a TerrainType> {
        self.board.label(p).map(|name| self.registry.get(name))
    }

    /// Traversal cost of entering `p`; `+∞` outside the grid.
    pub fn cost_at(&self, p: Point) -> f64 {
        self.terrain_at(p).map_or(f64::INFINITY, |t| t.cost)
    }
}
