use std::fmt;

use pathviz_core::Point;

/// Errors raised by the search engine.
///
/// Running out of frontier is not an error; it ends the run with
/// [`Outcome::NotFound`](crate::Outcome::NotFound).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// Start equals end, or either lies outside the grid. No run is created.
    InvalidEndpoints { start: Point, end: Point },
    /// Walking the predecessor map back from the end hit a cell with no
    /// recorded predecessor (or a cycle) before reaching the start.
    BrokenChain { at: Point },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEndpoints { start, end } => {
                write!(f, "invalid endpoints: start {start}, end {end}")
            }
            Self::BrokenChain { at } => {
                write!(f, "broken predecessor chain at {at}")
            }
        }
    }
}

impl std::error::Error for SearchError {}
