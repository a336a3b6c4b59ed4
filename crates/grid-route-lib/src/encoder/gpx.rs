//! GPX route serialization

use crate::NamedPoint;
use crate::xml::XmlGenerator;

/// Value of the `creator` attribute on the root element
pub const GPX_CREATOR: &str = "grid-route";
const GPX_NAMESPACE: &str = "http://www.topografix.com/GPX/1/1";

/// Serialize points as a GPX document with a single route
///
/// Coordinates and elevations use the shortest decimal text that reads back to the
/// same `f64` (`50.5`, `-10`, `100`).
pub fn encode_gpx(points: &[NamedPoint]) -> String {
    let mut gpx = XmlGenerator::new();

    gpx.declaration();
    gpx.open_element(
        "gpx",
        &[
            ("version", "1.1".to_string()),
            ("creator", GPX_CREATOR.to_string()),
            ("xmlns", GPX_NAMESPACE.to_string()),
        ],
    );

    gpx.open_element("rte", &[]);

    for point in points {
        let attributes = [
            ("lat", point.position.latitude().to_string()),
            ("lon", point.position.longitude().to_string()),
        ];

        gpx.open_element("rtept", &attributes);
        gpx.element("name", &[], &point.name);
        gpx.element("ele", &[], &point.position.elevation().to_string());
        gpx.close_element(); // rtept
    }

    gpx.close_all_and_extract()
}

/// Convert points into a `gpx` crate document holding a single route
pub fn to_gpx_document(points: &[NamedPoint]) -> gpx::Gpx {
    let route = gpx::Route {
        points: points.iter().map(to_waypoint).collect(),
        ..Default::default()
    };

    gpx::Gpx {
        version: gpx::GpxVersion::Gpx11,
        creator: Some(GPX_CREATOR.to_string()),
        routes: vec![route],
        ..Default::default()
    }
}

fn to_waypoint(point: &NamedPoint) -> gpx::Waypoint {
    let mut waypoint = gpx::Waypoint::new(point.position.to_point());
    waypoint.name = Some(point.name.clone());
    waypoint.elevation = Some(point.position.elevation());
    waypoint
}
