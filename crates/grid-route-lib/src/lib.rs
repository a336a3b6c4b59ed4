//! Grid Route Library - Letter-Encoded Routes and Waypoint Serialization
//!
//! This library turns a compact route encoding (a sequence of single-letter grid point
//! identifiers) into an ordered list of named geographic points, and serializes that list
//! either as a GPX document or as NMEA `$GPWPL` waypoint sentences.
//!
//! # Architecture
//!
//! - **[`Route`]**: Immutable, validated route string plus its resolved points
//! - **[`GridLookup`]**: Maps a [`PointName`] to a position and a display label
//! - **[`GridWorld`]**: Fixed 5x5 grid table built around a reference position
//! - **[`encoder`]**: GPX markup and NMEA sentence serialization
//!
//! # Example
//!
//! ```rust
//! use grid_route_lib::{GridWorld, Route};
//!
//! let grid = GridWorld::default();
//! let route = Route::new("AMY", &grid).unwrap();
//! assert_eq!(route.len(), 3);
//! assert_eq!(route.to_nmea().lines().count(), 3);
//! ```

pub mod encoder;
mod grid;
mod model;
mod route;
pub mod utils;
mod xml;

// Public API exports
pub use encoder::nmea::{Axis, CoordinateEncoding, CoordinateFields, encode_coordinate};
pub use grid::{GridConfig, GridLookup, GridWorld};
pub use model::{NamedPoint, PointName, Position};
pub use route::Route;

/// Error types for route construction and export
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    #[error("Invalid point sequence {character:?} at index {index}, cannot construct Route")]
    InvalidRoute { character: char, index: usize },

    #[error("GPX writing error: {0}")]
    GpxWrite(#[from] gpx::errors::GpxError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RouteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_exports() {
        // Verify that all public types are accessible
        let _: fn() -> GridWorld = GridWorld::default;
        let _: fn(GridConfig) -> GridWorld = GridWorld::new;
        let _: fn() -> Position = Position::default;
    }

    #[test]
    fn test_invalid_route_message() {
        let err = RouteError::InvalidRoute {
            character: '1',
            index: 1,
        };
        assert_eq!(
            err.to_string(),
            "Invalid point sequence '1' at index 1, cannot construct Route"
        );
    }
}
