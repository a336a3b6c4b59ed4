//! Grid lookup: resolving point identifiers to positions and labels
//!
//! [`GridLookup`] is the seam between a route and whatever grid it is drawn on.
//! [`GridWorld`] is the stock implementation: a 5x5 table of points laid out around
//! a reference position.
//!
//! ```text
//!   A B C D E      north
//!   F G H I J
//!   K L M N O      M = reference position
//!   P Q R S T
//!   U V W X Y      south
//! ```

use crate::{NamedPoint, PointName, Position, utils};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of columns (and rows) in a [`GridWorld`]
const GRID_SIZE: usize = 5;

/// Resolves validated point identifiers to positions and display labels.
///
/// Implementations must be total over the identifier alphabet.
pub trait GridLookup {
    /// Position of the given grid point
    fn position(&self, point: PointName) -> Position;

    /// Display label of the given grid point
    fn label(&self, point: PointName) -> String;

    /// Resolve a point into a [`NamedPoint`]
    fn resolve(&self, point: PointName) -> NamedPoint {
        NamedPoint::new(self.position(point), self.label(point))
    }
}

/// Configuration for a [`GridWorld`]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridConfig {
    /// Position of the centre point `M`
    pub reference: Position,
    /// Distance in meters between neighbouring columns and rows
    pub horizontal_grid_unit: f64,
    /// Elevation gain in meters per ring towards the centre
    pub vertical_grid_unit: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            reference: Position::new(52.914051, -1.18706, 50.0),
            horizontal_grid_unit: 1000.0,
            vertical_grid_unit: 100.0,
        }
    }
}

/// Fixed 5x5 grid of points around a reference position.
///
/// All positions are computed once at construction, lookups are table reads.
/// The outer ring sits at the reference elevation and every ring closer to the
/// centre is one vertical grid unit higher.
#[derive(Debug, Clone)]
pub struct GridWorld {
    config: GridConfig,
    positions: [Position; PointName::COUNT],
}

#[cfg_attr(feature = "profiling", profiling::all_functions)]
impl GridWorld {
    pub fn new(config: GridConfig) -> Self {
        let mut positions = [Position::default(); PointName::COUNT];
        for point in PointName::all() {
            positions[point.index()] = Self::compute_position(&config, point);
        }
        tracing::debug!(
            "Built grid around ({}, {}) with {} m spacing",
            config.reference.latitude(),
            config.reference.longitude(),
            config.horizontal_grid_unit
        );
        Self { config, positions }
    }

    fn compute_position(config: &GridConfig, point: PointName) -> Position {
        let centre = (GRID_SIZE / 2) as i64;
        let row = (point.index() / GRID_SIZE) as i64;
        let col = (point.index() % GRID_SIZE) as i64;

        // Rows count southwards, columns eastwards
        let east_m = (col - centre) as f64 * config.horizontal_grid_unit;
        let north_m = (centre - row) as f64 * config.horizontal_grid_unit;

        let ring = (row - centre).abs().max((col - centre).abs());
        let height = (centre - ring) as f64 * config.vertical_grid_unit;

        let flat = utils::offset_position(&config.reference, east_m, north_m);
        Position::new(
            flat.latitude(),
            flat.longitude(),
            config.reference.elevation() + height,
        )
    }

    #[inline]
    pub fn config(&self) -> &GridConfig {
        &self.config
    }
}

impl Default for GridWorld {
    fn default() -> Self {
        Self::new(GridConfig::default())
    }
}

impl GridLookup for GridWorld {
    #[inline]
    fn position(&self, point: PointName) -> Position {
        self.positions[point.index()]
    }

    fn label(&self, point: PointName) -> String {
        point.to_string()
    }
}
