//! Utility functions for coordinate conversions on a spherical earth

use crate::Position;

/// Mean Earth radius in meters
pub const EARTH_RADIUS_M: f64 = 6371000.0;

/// Convert a north/south offset in meters to a latitude delta in degrees
#[inline(always)]
pub fn meters_to_latitude_delta(north_m: f64) -> f64 {
    (north_m / EARTH_RADIUS_M).to_degrees()
}

/// Convert an east/west offset in meters to a longitude delta in degrees
///
/// # Arguments
/// * `east_m` - Offset in meters, positive towards the east
/// * `latitude` - Latitude in degrees at which the offset is measured
///
/// # Returns
/// The longitude delta in degrees (grows towards the poles)
#[inline(always)]
pub fn meters_to_longitude_delta(east_m: f64, latitude: f64) -> f64 {
    let parallel_radius = EARTH_RADIUS_M * latitude.to_radians().cos();
    (east_m / parallel_radius).to_degrees()
}

/// Move a position by a metric offset, keeping elevation unchanged
///
/// Uses the local flat-earth approximation, which is accurate for offsets of a few
/// kilometers away from the poles.
#[inline]
pub fn offset_position(origin: &Position, east_m: f64, north_m: f64) -> Position {
    Position::new(
        origin.latitude() + meters_to_latitude_delta(north_m),
        origin.longitude() + meters_to_longitude_delta(east_m, origin.latitude()),
        origin.elevation(),
    )
}

/// Calculate the Haversine distance between two positions in meters
#[inline]
pub fn haversine_distance(p1: &Position, p2: &Position) -> f64 {
    let lat1 = p1.latitude().to_radians();
    let lat2 = p2.latitude().to_radians();
    let delta_lat = (p2.latitude() - p1.latitude()).to_radians();
    let delta_lon = (p2.longitude() - p1.longitude()).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}
