use crate::types::{EARTH_RADIUS, LonLat, RAD_TO_DEG};
use std::f64::consts::FRAC_PI_2;
use std::fmt::Debug;

/// A point on the Web Mercator plane in meters (EPSG:900913).
#[derive(Clone, Copy, PartialEq)]
pub struct MercatorPoint {
	pub x: f64,
	pub y: f64,
}

impl MercatorPoint {
	pub fn new(x: f64, y: f64) -> MercatorPoint {
		MercatorPoint { x, y }
	}

	/// Unprojects this point back to geographic degrees (EPSG:4326).
	///
	/// Exact inverse of [`LonLat::to_mercator`] up to floating-point error.
	///
	/// # Examples
	/// ```
	/// use tilemath::MercatorPoint;
	///
	/// let coord = MercatorPoint::new(0.0, 0.0).to_lon_lat();
	/// assert_eq!(coord.lon, 0.0);
	/// assert_eq!(coord.lat, 0.0);
	/// ```
	#[must_use]
	pub fn to_lon_lat(&self) -> LonLat {
		LonLat::new(
			self.x * RAD_TO_DEG / EARTH_RADIUS,
			(FRAC_PI_2 - 2.0 * (-self.y / EARTH_RADIUS).exp().atan()) * RAD_TO_DEG,
		)
	}

	pub fn as_array(&self) -> [f64; 2] {
		[self.x, self.y]
	}

	pub fn as_tuple(&self) -> (f64, f64) {
		(self.x, self.y)
	}
}

impl Debug for MercatorPoint {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "MercatorPoint({}, {})", self.x, self.y)
	}
}

impl From<[f64; 2]> for MercatorPoint {
	fn from(input: [f64; 2]) -> Self {
		MercatorPoint::new(input[0], input[1])
	}
}
