//! Terrain types and the name-keyed [`TerrainRegistry`].
//!
//! A terrain is a named cost profile. A cost of `+∞` marks the terrain as
//! blocking; every finite cost must be strictly positive. The registry always
//! holds a [`NORMAL`] terrain of cost 1, which is what unknown names resolve
//! to.

use std::collections::HashMap;
use std::fmt;

use crate::style::Color;

/// Name of the default terrain. Always present, never removable.
pub const NORMAL: &str = "Normal";

/// Name of the blocking terrain in the default catalogue.
pub const WALL: &str = "Wall";

/// A named traversal-cost profile with a display colour.
#[derive(Debug, Clone, PartialEq)]
pub struct TerrainType {
    pub name: String,
    pub cost: f64,
    pub color: Color,
}

impl TerrainType {
    /// Create a new terrain type. No validation happens here; see
    /// [`TerrainRegistry::add`].
    pub fn new(name: impl Into<String>, cost: f64, color: Color) -> Self {
        Self {
            name: name.into(),
            cost,
            color,
        }
    }

    /// Whether the terrain cannot be entered at all.
    #[inline]
    pub fn is_blocking(&self) -> bool {
        self.cost == f64::INFINITY
    }
}

/// Errors returned when defining or removing terrain types.
#[derive(Debug, Clone, PartialEq)]
pub enum TerrainError {
    /// The name was empty after trimming whitespace.
    EmptyName,
    /// A terrain with this name is already registered.
    Duplicate(String),
    /// The cost was unparsable, NaN, zero or negative.
    InvalidCost(String),
    /// The terrain cannot be removed (the default terrain).
    NotRemovable(String),
    /// No terrain with this name is registered.
    Unknown(String),
}

impl fmt::Display for TerrainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => f.write_str("terrain name cannot be empty"),
            Self::Duplicate(name) => write!(f, "terrain '{name}' already exists"),
            Self::InvalidCost(text) => write!(f, "invalid terrain cost '{text}'"),
            Self::NotRemovable(name) => write!(f, "terrain '{name}' cannot be removed"),
            Self::Unknown(name) => write!(f, "unknown terrain '{name}'"),
        }
    }
}

impl std::error::Error for TerrainError {}

/// Insertion-ordered mapping from terrain name to [`TerrainType`].
///
/// Order only matters for menus; lookups are by name.
#[derive(Debug, Clone)]
pub struct TerrainRegistry {
    types: Vec<TerrainType>,
    index: HashMap<String, usize>,
}

impl TerrainRegistry {
    /// A registry holding only the [`NORMAL`] terrain.
    pub fn new() -> Self {
        let normal = TerrainType::new(NORMAL, 1.0, Color::from_unit(0.4415, 0.1990, 0.3892));
        let mut index = HashMap::new();
        index.insert(normal.name.clone(), 0);
        Self {
            types: vec![normal],
            index,
        }
    }

    /// Register a new terrain type.
    ///
    /// The name is trimmed. Fails on an empty name, a name already in use, or
    /// a cost that is NaN or not strictly positive.
    pub fn add(&mut self, mut terrain: TerrainType) -> Result<(), TerrainError> {
        let trimmed = terrain.name.trim();
        if trimmed.is_empty() {
            return Err(TerrainError::EmptyName);
        }
        if trimmed.len() != terrain.name.len() {
            terrain.name = trimmed.to_string();
        }
        if self.index.contains_key(&terrain.name) {
            return Err(TerrainError::Duplicate(terrain.name));
        }
        if terrain.cost.is_nan() || terrain.cost <= 0.0 {
            return Err(TerrainError::InvalidCost(terrain.cost.to_string()));
        }
        self.push(terrain);
        Ok(())
    }

    fn push(&mut self, terrain: TerrainType) {
        self.index.insert(terrain.name.clone(), self.types.len());
        self.types.push(terrain);
    }

    /// Parse `cost` (e.g. `"2.5"` or `"inf"`) and register the terrain.
    pub fn add_parsed(&mut self, name: &str, cost: &str, color: Color) -> Result<(), TerrainError> {
        cost.trim()
            .parse::<f64>()
            .map_err(|_| TerrainError::InvalidCost(cost.to_string()))
            .and_then(|parsed| self.add(TerrainType::new(name, parsed, color)))
            .inspect_err(|e| log::warn!("rejected terrain definition: {e}"))
    }

    /// Remove a terrain type. [`NORMAL`] cannot be removed.
    ///
    /// Cells still labelled with the removed name resolve to [`NORMAL`]
    /// afterwards.
    pub fn remove(&mut self, name: &str) -> Result<TerrainType, TerrainError> {
        if name == NORMAL {
            return Err(TerrainError::NotRemovable(name.to_string()));
        }
        let i = self
            .index
            .remove(name)
            .ok_or_else(|| TerrainError::Unknown(name.to_string()))?;
        let removed = self.types.remove(i);
        for slot in self.index.values_mut() {
            if *slot > i {
                *slot -= 1;
            }
        }
        Ok(removed)
    }

    /// Look up a terrain by name, falling back to [`NORMAL`].
    pub fn get(&self, name: &str) -> &TerrainType {
        self.lookup(name).unwrap_or_else(|| self.normal())
    }

    /// Look up a terrain by name without the fallback.
    pub fn lookup(&self, name: &str) -> Option<&TerrainType> {
        self.index.get(name).map(|&i| &self.types[i])
    }

    /// The default terrain.
    pub fn normal(&self) -> &TerrainType {
        &self.types[self.index[NORMAL]]
    }

    /// Whether `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Terrain types in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &TerrainType> {
        self.types.iter()
    }

    /// Number of registered terrain types (always at least 1).
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Always `false`; the default terrain is never removed.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Default for TerrainRegistry {
    /// The stock catalogue: Normal, Wall, Water, Mud, Lava, Sand.
    fn default() -> Self {
        let mut reg = Self::new();
        let stock = [
            TerrainType::new(WALL, f64::INFINITY, Color::WHITE),
            TerrainType::new("Water", 2.0, Color::BLUE),
            TerrainType::new("Mud", 3.0, Color::from_unit(0.5, 0.25, 0.0)),
            TerrainType::new("Lava", 4.0, Color::RED),
            TerrainType::new("Sand", 5.0, Color::GRAY),
        ];
        for t in stock {
            reg.push(t);
        }
        reg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalogue_order() {
        let reg = TerrainRegistry::default();
        let names: Vec<_> = reg.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["Normal", "Wall", "Water", "Mud", "Lava", "Sand"]);
        assert!(reg.get(WALL).is_blocking());
        assert_eq!(reg.get("Mud").cost, 3.0);
        assert_eq!(reg.normal().cost, 1.0);
    }

    #[test]
    fn unknown_name_falls_back_to_normal() {
        let reg = TerrainRegistry::default();
        assert_eq!(reg.get("Swamp").name, NORMAL);
        assert!(reg.lookup("Swamp").is_none());
    }

    #[test]
    fn add_rejects_bad_definitions() {
        let mut reg = TerrainRegistry::default();
        assert_eq!(
            reg.add(TerrainType::new("   ", 2.0, Color::BLACK)),
            Err(TerrainError::EmptyName)
        );
        assert_eq!(
            reg.add(TerrainType::new("Water", 9.0, Color::BLACK)),
            Err(TerrainError::Duplicate("Water".into()))
        );
        assert!(matches!(
            reg.add(TerrainType::new("Ice", 0.0, Color::BLACK)),
            Err(TerrainError::InvalidCost(_))
        ));
        assert!(matches!(
            reg.add(TerrainType::new("Ice", f64::NAN, Color::BLACK)),
            Err(TerrainError::InvalidCost(_))
        ));
        assert_eq!(reg.len(), 6);
    }

    #[test]
    fn add_trims_name() {
        let mut reg = TerrainRegistry::new();
        reg.add(TerrainType::new("  Ice ", 1.5, Color::CYAN)).unwrap();
        assert!(reg.contains("Ice"));
        assert_eq!(
            reg.add(TerrainType::new("Ice", 2.0, Color::CYAN)),
            Err(TerrainError::Duplicate("Ice".into()))
        );
    }

    #[test]
    fn add_parsed_accepts_infinity() {
        let mut reg = TerrainRegistry::new();
        reg.add_parsed("Chasm", "inf", Color::BLACK).unwrap();
        reg.add_parsed("Grass", " 1.25 ", Color::BLACK).unwrap();
        assert!(reg.get("Chasm").is_blocking());
        assert_eq!(reg.get("Grass").cost, 1.25);
        assert_eq!(
            reg.add_parsed("Bog", "heavy", Color::BLACK),
            Err(TerrainError::InvalidCost("heavy".into()))
        );
    }

    #[test]
    fn remove_keeps_normal() {
        let mut reg = TerrainRegistry::default();
        assert_eq!(
            reg.remove(NORMAL),
            Err(TerrainError::NotRemovable(NORMAL.into()))
        );
        let water = reg.remove("Water").unwrap();
        assert_eq!(water.cost, 2.0);
        assert_eq!(reg.get("Water").name, NORMAL);
        // Index of later entries stays consistent.
        assert_eq!(reg.get("Sand").cost, 5.0);
        assert_eq!(reg.get("Mud").cost, 3.0);
        assert_eq!(
            reg.remove("Water"),
            Err(TerrainError::Unknown("Water".into()))
        );
    }

    #[test]
    fn stock_entries_are_indexed() {
        let mut reg = TerrainRegistry::default();
        assert_eq!(reg.len(), 6);
        for name in ["Normal", "Wall", "Water", "Mud", "Lava", "Sand"] {
            assert_eq!(reg.lookup(name).map(|t| t.name.as_str()), Some(name));
            assert_eq!(
                reg.add(TerrainType::new(name, 2.0, Color::BLACK)),
                Err(TerrainError::Duplicate(name.into()))
            );
        }
        assert_eq!(reg.remove("Sand").map(|t| t.cost), Ok(5.0));
        assert!(!reg.contains("Sand"));
        assert_eq!(reg.get("Lava").cost, 4.0);
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            TerrainError::Duplicate("Mud".into()).to_string(),
            "terrain 'Mud' already exists"
        );
        assert_eq!(
            TerrainError::InvalidCost("-1".into()).to_string(),
            "invalid terrain cost '-1'"
        );
        assert_eq!(
            TerrainError::NotRemovable(NORMAL.into()).to_string(),
            "terrain 'Normal' cannot be removed"
        );
        assert_eq!(
            TerrainError::Unknown("Swamp".into()).to_string(),
            "unknown terrain 'Swamp'"
        );
    }
}
