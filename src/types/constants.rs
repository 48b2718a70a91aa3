//! Geographic and Web Mercator constants shared across the crate.

use std::f64::consts::PI;

/// WGS84 semi-major axis (equatorial radius) in meters.
pub const EARTH_RADIUS: f64 = 6_378_137.0;

/// Half the extent of the Web Mercator plane in meters (EARTH_RADIUS * PI).
pub const MAX_EXTENT: f64 = 20_037_508.342789244;

/// Maximum latitude in degrees representable in Web Mercator (EPSG:3857).
///
/// Equals `atan(sinh(PI))` in degrees.
pub const MAX_LAT: f64 = 85.051_128_779_806_59;

/// Maximum longitude in degrees.
pub const MAX_LON: f64 = 180.0;

/// Degrees-to-radians conversion factor.
pub const DEG_TO_RAD: f64 = PI / 180.0;

/// Radians-to-degrees conversion factor.
pub const RAD_TO_DEG: f64 = 180.0 / PI;

/// Number of zoom levels covered by the precomputed scale tables (zoom 0 to 29).
pub const ZOOM_LEVELS: usize = 30;

/// Default tile edge length in pixels.
pub const DEFAULT_TILE_SIZE: u32 = 256;
