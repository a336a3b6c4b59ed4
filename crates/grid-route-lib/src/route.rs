//! Route storage and validation module
//!
//! This module provides the `Route` struct: a validated route string together with
//! the named points it expands to on a grid.

use crate::encoder::{self, nmea::CoordinateEncoding};
use crate::{GridLookup, NamedPoint, PointName, Result, RouteError};
use std::fmt;
use std::io::Write;

/// An ordered list of named points derived from a letter-encoded route string
///
/// The point list is resolved eagerly during construction and never changes afterwards.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// The original route string
    route_string: String,
    /// One resolved point per character of `route_string`, in order
    points: Vec<NamedPoint>,
}

#[cfg_attr(feature = "profiling", profiling::all_functions)]
impl Route {
    /// Create a new Route from a route string and a grid
    ///
    /// # Arguments
    /// * `route_string` - Sequence of point identifiers (`'A'..='Y'`), may be empty
    /// * `grid` - Grid used to resolve each identifier into a named point
    ///
    /// # Returns
    /// The Route on success, or [`RouteError::InvalidRoute`] naming the first
    /// character outside the identifier alphabet
    pub fn new(route_string: impl Into<String>, grid: &impl GridLookup) -> Result<Self> {
        let route_string = route_string.into();
        let names = Self::parse_point_names(&route_string)?;

        let points: Vec<NamedPoint> = names.into_iter().map(|name| grid.resolve(name)).collect();

        tracing::debug!(
            "Constructed route {:?} with {} points",
            route_string,
            points.len()
        );

        Ok(Route {
            route_string,
            points,
        })
    }

    /// Validate every character before anything is resolved
    fn parse_point_names(route_string: &str) -> Result<Vec<PointName>> {
        route_string
            .chars()
            .enumerate()
            .map(|(index, character)| {
                PointName::try_from(character).map_err(|_| {
                    tracing::warn!(
                        "Rejecting route {:?}: invalid point {:?} at index {}",
                        route_string,
                        character,
                        index
                    );
                    RouteError::InvalidRoute { character, index }
                })
            })
            .collect()
    }

    /// The original route string, verbatim
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.route_string
    }

    /// Borrow the resolved points
    #[inline]
    pub fn points(&self) -> &[NamedPoint] {
        &self.points
    }

    /// Copy of the resolved points
    pub fn to_points(&self) -> Vec<NamedPoint> {
        self.points.clone()
    }

    /// Number of points in the route
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Serialize the route as a GPX document string
    pub fn to_gpx(&self) -> String {
        encoder::gpx::encode_gpx(&self.points)
    }

    /// Serialize the route as `$GPWPL` sentences using the default encoding
    pub fn to_nmea(&self) -> String {
        self.to_nmea_with(CoordinateEncoding::default())
    }

    /// Serialize the route as `$GPWPL` sentences using the given coordinate encoding
    pub fn to_nmea_with(&self, encoding: CoordinateEncoding) -> String {
        encoder::nmea::encode_nmea(&self.points, encoding)
    }

    /// Convert the route into a `gpx` crate document
    pub fn to_gpx_document(&self) -> gpx::Gpx {
        encoder::gpx::to_gpx_document(&self.points)
    }

    /// Write the route as a GPX document using the `gpx` crate writer
    pub fn write_gpx_document<W: Write>(&self, writer: W) -> Result<()> {
        gpx::write(&self.to_gpx_document(), writer)?;
        Ok(())
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.route_string)
    }
}
