use pathviz_core::{Point, TerrainView};

/// Read-only cost lookup the engine is injected with.
///
/// The engine never sees terrain names or colours, only what entering a cell
/// costs.
pub trait TerrainModel {
    /// Cost of entering `p`: a positive real, or `+∞` for blocking terrain.
    fn cost_of(&self, p: Point) -> f64;

    /// Whether `p` can never be entered.
    fn is_blocked(&self, p: Point) -> bool {
        self.cost_of(p) == f64::INFINITY
    }
}

impl TerrainModel for TerrainView<'_> {
    fn cost_of(&self, p: Point) -> f64 {
        self.cost_at(p)
    }
}

impl<T: TerrainModel + ?Sized> TerrainModel for &T {
    fn cost_of(&self, p: Point) -> f64 {
        (**self).cost_of(p)
    }

    fn is_blocked(&self, p: Point) -> bool {
        (**self).is_blocked(p)
    }
}
