//! Serialization of named point lists
//!
//! - [`gpx`]: GPX 1.1 route document (`<rte>` with one `<rtept>` per point)
//! - [`nmea`]: one `$GPWPL` waypoint sentence per point
//!
//! Both encoders are total: any point list, including an empty one, serializes.

pub mod gpx;
pub mod nmea;
