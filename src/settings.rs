use crate::cli::{get_env, parse_args};
use clap::{Parser, ValueEnum};
use grid_route_lib::{CoordinateEncoding, GridConfig, Position};
use std::path::PathBuf;

/// Output format of the exported route
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// GPX 1.1 document with a single route
    Gpx,
    /// One `$GPWPL` waypoint sentence per point
    Nmea,
}

/// Coordinate encoding used for NMEA output
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// Compatibility encoding (two-digit degrees, rounded-degree remainder)
    Legacy,
    /// Conventional DDMM.mm / DDDMM.mm
    Standard,
}

impl From<Encoding> for CoordinateEncoding {
    fn from(encoding: Encoding) -> Self {
        match encoding {
            Encoding::Legacy => CoordinateEncoding::Legacy,
            Encoding::Standard => CoordinateEncoding::Standard,
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
/// Grid Route - Convert letter-encoded grid routes into GPX or NMEA waypoints
pub struct Settings {
    /// Route as a sequence of grid point letters (A-Y)
    #[clap(value_name = "ROUTE")]
    pub route: String,

    /// Output format
    #[clap(short, long, value_enum, default_value_t = OutputFormat::Nmea)]
    pub format: OutputFormat,

    /// Coordinate encoding for NMEA output
    #[clap(short, long, value_enum, default_value_t = Encoding::Legacy)]
    pub encoding: Encoding,

    /// Latitude of the grid centre in degrees [env: GRID_ROUTE_REFERENCE_LAT]
    #[clap(long, allow_hyphen_values = true)]
    pub reference_lat: Option<f64>,

    /// Longitude of the grid centre in degrees [env: GRID_ROUTE_REFERENCE_LON]
    #[clap(long, allow_hyphen_values = true)]
    pub reference_lon: Option<f64>,

    /// Elevation of the grid centre in meters [env: GRID_ROUTE_REFERENCE_ELE]
    #[clap(long, allow_hyphen_values = true)]
    pub reference_ele: Option<f64>,

    /// Distance between neighbouring grid points in meters [env: GRID_ROUTE_HORIZONTAL_UNIT]
    #[clap(long)]
    pub horizontal_unit: Option<f64>,

    /// Elevation step per grid ring in meters [env: GRID_ROUTE_VERTICAL_UNIT]
    #[clap(long)]
    pub vertical_unit: Option<f64>,

    /// Write the output to a file instead of stdout
    #[clap(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl Settings {
    /// Parse settings from the command line, exiting with usage on error
    pub fn from_cli() -> Self {
        match parse_args::<Settings>() {
            Ok(args) => args,
            Err(e) => e.exit(),
        }
    }

    /// Grid configuration: flag, then environment variable, then default
    pub fn grid_config(&self) -> GridConfig {
        let defaults = GridConfig::default();
        let pick = |flag: Option<f64>, key: &str, default: f64| {
            flag.or_else(|| get_env(key)).unwrap_or(default)
        };

        GridConfig {
            reference: Position::new(
                pick(
                    self.reference_lat,
                    "GRID_ROUTE_REFERENCE_LAT",
                    defaults.reference.latitude(),
                ),
                pick(
                    self.reference_lon,
                    "GRID_ROUTE_REFERENCE_LON",
                    defaults.reference.longitude(),
                ),
                pick(
                    self.reference_ele,
                    "GRID_ROUTE_REFERENCE_ELE",
                    defaults.reference.elevation(),
                ),
            ),
            horizontal_grid_unit: pick(
                self.horizontal_unit,
                "GRID_ROUTE_HORIZONTAL_UNIT",
                defaults.horizontal_grid_unit,
            ),
            vertical_grid_unit: pick(
                self.vertical_unit,
                "GRID_ROUTE_VERTICAL_UNIT",
                defaults.vertical_grid_unit,
            ),
        }
    }
}
