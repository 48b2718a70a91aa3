use crate::types::{DEG_TO_RAD, EARTH_RADIUS, MercatorPoint};
use std::f64::consts::FRAC_PI_4;
use std::fmt::Debug;

/// A geographic coordinate in degrees (EPSG:4326).
///
/// # Examples
/// ```
/// use tilemath::LonLat;
///
/// let coord = LonLat::new(13.4, 52.5);
/// assert_eq!(coord.lon, 13.4);
/// assert_eq!(coord.lat, 52.5);
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct LonLat {
	pub lon: f64,
	pub lat: f64,
}

impl LonLat {
	pub fn new(lon: f64, lat: f64) -> LonLat {
		LonLat { lon, lat }
	}

	/// Projects this coordinate to Web Mercator meters (EPSG:900913).
	///
	/// Uses the spherical formulation; no clamping is applied, so latitudes
	/// near the poles produce y values far beyond the Mercator plane and
	/// latitudes beyond ±90° degenerate to NaN.
	///
	/// # Examples
	/// ```
	/// use tilemath::LonLat;
	///
	/// let m = LonLat::new(180.0, 0.0).to_mercator();
	/// assert_eq!(m.x, 20037508.342789244);
	/// assert!(m.y.abs() < 1e-9);
	/// ```
	#[must_use]
	pub fn to_mercator(&self) -> MercatorPoint {
		MercatorPoint::new(
			EARTH_RADIUS * self.lon * DEG_TO_RAD,
			EARTH_RADIUS * (FRAC_PI_4 + 0.5 * self.lat * DEG_TO_RAD).tan().ln(),
		)
	}

	pub fn as_array(&self) -> [f64; 2] {
		[self.lon, self.lat]
	}

	pub fn as_tuple(&self) -> (f64, f64) {
		(self.lon, self.lat)
	}
}

impl Debug for LonLat {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "LonLat({}, {})", self.lon, self.lat)
	}
}

impl From<[f64; 2]> for LonLat {
	fn from(input: [f64; 2]) -> Self {
		LonLat::new(input[0], input[1])
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::types::MAX_LAT;

	#[test]
	fn forward_equator_and_edges() {
		assert_eq!(LonLat::new(180.0, 0.0).to_mercator().x, 20037508.342789244);
		assert_eq!(LonLat::new(-180.0, 0.0).to_mercator().x, -20037508.342789244);
		assert_eq!(LonLat::new(0.0, -MAX_LAT).to_mercator().y, -20037508.342789236);
	}

	#[test]
	fn forward_does_not_clamp() {
		// the pole overshoots the Mercator plane by an order of magnitude
		assert!(LonLat::new(0.0, 90.0).to_mercator().y > 2.0e8);
		assert!(LonLat::new(0.0, 91.0).to_mercator().y.is_nan());
		assert!(LonLat::new(270.0, 0.0).to_mercator().x > 20037508.35);
	}

	#[test]
	fn accessors() {
		let coord = LonLat::from([-73.98, 40.75]);
		assert_eq!(coord.as_array(), [-73.98, 40.75]);
		assert_eq!(coord.as_tuple(), (-73.98, 40.75));
		assert_eq!(format!("{coord:?}"), "LonLat(-73.98, 40.75)");
	}
}
