//! Core value types shared by the route model and the encoders

use crate::{Result, RouteError};
use std::fmt;

/// A geographic position in decimal degrees with an elevation in meters
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    latitude: f64,
    longitude: f64,
    elevation: f64,
}

impl Position {
    pub fn new(latitude: f64, longitude: f64, elevation: f64) -> Self {
        Self {
            latitude,
            longitude,
            elevation,
        }
    }

    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    #[inline]
    pub fn elevation(&self) -> f64 {
        self.elevation
    }

    /// Horizontal component as a `geo::Point` (x = longitude, y = latitude)
    #[inline]
    pub fn to_point(&self) -> geo::Point<f64> {
        geo::Point::new(self.longitude, self.latitude)
    }
}

/// A position plus a short display label
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NamedPoint {
    pub position: Position,
    pub name: String,
}

impl NamedPoint {
    pub fn new(position: Position, name: impl Into<String>) -> Self {
        Self {
            position,
            name: name.into(),
        }
    }
}

/// A validated grid point identifier in the inclusive range `'A'..='Y'`
///
/// `'Z'` directly follows the valid block and is reserved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointName(char);

impl PointName {
    pub const FIRST: char = 'A';
    pub const LAST: char = 'Y';
    /// Number of identifiers in the alphabet
    pub const COUNT: usize = (Self::LAST as usize) - (Self::FIRST as usize) + 1;

    /// Whether `c` is part of the identifier alphabet
    #[inline]
    pub fn is_valid(c: char) -> bool {
        (Self::FIRST..=Self::LAST).contains(&c)
    }

    /// Iterate over the whole alphabet in order
    pub fn all() -> impl Iterator<Item = PointName> {
        (Self::FIRST..=Self::LAST).map(PointName)
    }

    #[inline]
    pub fn as_char(self) -> char {
        self.0
    }

    /// Zero-based position in the alphabet (`A` = 0, `Y` = 24)
    #[inline]
    pub fn index(self) -> usize {
        (self.0 as usize) - (Self::FIRST as usize)
    }
}

impl TryFrom<char> for PointName {
    type Error = RouteError;

    fn try_from(c: char) -> Result<Self> {
        if Self::is_valid(c) {
            Ok(PointName(c))
        } else {
            Err(RouteError::InvalidRoute {
                character: c,
                index: 0,
            })
        }
    }
}

impl fmt::Display for PointName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
