//! **pathviz-core** — grid, terrain and board types for the pathfinding
//! visualizer.
//!
//! This crate holds the long-lived state a search reads from: the lattice
//! ([`Grid`]), the terrain catalogue ([`TerrainRegistry`]) and the painted
//! [`Board`] with its start/end markers. The search engine itself lives in
//! `pathviz-paths`.

pub mod board;
pub mod geom;
pub mod grid;
pub mod style;
pub mod terrain;

pub use board::{Board, BoardConfig, BoardError, TerrainView};
pub use geom::{Point, Range};
pub use grid::Grid;
pub use style::Color;
pub use terrain::{NORMAL, TerrainError, TerrainRegistry, TerrainType, WALL};
