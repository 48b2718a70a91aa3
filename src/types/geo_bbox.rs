use crate::types::{LonLat, MercatorBBox};
use anyhow::{Result, ensure};
use std::fmt::Debug;

/// A geographic bounding box in degrees (EPSG:4326), stored as
/// `west, south, east, north`.
///
/// Values are taken as-is: the permissive numeric contract of this crate
/// means degenerate or out-of-range boxes flow through the math unchanged
/// instead of failing. Structural validation (exactly four values) happens
/// in the `TryFrom` conversions.
///
/// # Examples
/// ```
/// use tilemath::GeoBBox;
///
/// let bbox = GeoBBox::new(-10.0, -5.0, 10.0, 5.0);
/// assert_eq!(bbox.as_tuple(), (-10.0, -5.0, 10.0, 5.0));
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct GeoBBox {
	pub x_min: f64,
	pub y_min: f64,
	pub x_max: f64,
	pub y_max: f64,
}

impl GeoBBox {
	pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> GeoBBox {
		GeoBBox {
			x_min,
			y_min,
			x_max,
			y_max,
		}
	}

	/// Builds a bounding box from its lower-left and upper-right corners.
	pub fn from_corners(sw: &LonLat, ne: &LonLat) -> GeoBBox {
		GeoBBox::new(sw.lon, sw.lat, ne.lon, ne.lat)
	}

	/// Splits the box into its lower-left and upper-right corners.
	pub fn as_corners(&self) -> (LonLat, LonLat) {
		(
			LonLat::new(self.x_min, self.y_min),
			LonLat::new(self.x_max, self.y_max),
		)
	}

	/// Projects both corners to Web Mercator meters (EPSG:900913).
	///
	/// # Examples
	/// ```
	/// use tilemath::GeoBBox;
	///
	/// let m = GeoBBox::new(-180.0, 0.0, 180.0, 0.0).to_mercator();
	/// assert_eq!(m.x_min, -20037508.342789244);
	/// assert_eq!(m.x_max, 20037508.342789244);
	/// ```
	#[must_use]
	pub fn to_mercator(&self) -> MercatorBBox {
		let (sw, ne) = self.as_corners();
		let min = sw.to_mercator();
		let max = ne.to_mercator();
		MercatorBBox::new(min.x, min.y, max.x, max.y)
	}

	pub fn as_vec(&self) -> Vec<f64> {
		vec![self.x_min, self.y_min, self.x_max, self.y_max]
	}

	pub fn as_array(&self) -> [f64; 4] {
		[self.x_min, self.y_min, self.x_max, self.y_max]
	}

	pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
		(self.x_min, self.y_min, self.x_max, self.y_max)
	}
}

impl Debug for GeoBBox {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"GeoBBox({}, {}, {}, {})",
			self.x_min, self.y_min, self.x_max, self.y_max
		)
	}
}

impl From<[f64; 4]> for GeoBBox {
	fn from(input: [f64; 4]) -> Self {
		GeoBBox::new(input[0], input[1], input[2], input[3])
	}
}

impl TryFrom<Vec<f64>> for GeoBBox {
	type Error = anyhow::Error;

	/// Attempts to build a `GeoBBox` from a `Vec<f64>` with exactly four
	/// elements `[west, south, east, north]`.
	///
	/// # Errors
	///
	/// Returns an error if the length is not exactly four.
	fn try_from(input: Vec<f64>) -> Result<Self> {
		ensure!(
			input.len() == 4,
			"GeoBBox must have 4 elements (x_min, y_min, x_max, y_max), got {}",
			input.len()
		);
		Ok(GeoBBox::new(input[0], input[1], input[2], input[3]))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn creation_and_accessors() {
		let bbox = GeoBBox::new(-10.0, -5.0, 10.0, 5.0);
		assert_eq!(bbox.as_vec(), vec![-10.0, -5.0, 10.0, 5.0]);
		assert_eq!(bbox.as_array(), [-10.0, -5.0, 10.0, 5.0]);
		assert_eq!(bbox.as_tuple(), (-10.0, -5.0, 10.0, 5.0));
		assert_eq!(format!("{bbox:?}"), "GeoBBox(-10, -5, 10, 5)");
	}

	#[test]
	fn corners_roundtrip() {
		let bbox = GeoBBox::new(-10.0, -5.0, 10.0, 5.0);
		let (sw, ne) = bbox.as_corners();
		assert_eq!(GeoBBox::from_corners(&sw, &ne), bbox);
	}

	#[test]
	fn try_from_vec_valid() {
		let bbox = GeoBBox::try_from(vec![-10.0, -5.0, 10.0, 5.0]).unwrap();
		assert_eq!(bbox.as_tuple(), (-10.0, -5.0, 10.0, 5.0));
	}

	#[test]
	fn try_from_vec_invalid_length() {
		assert!(GeoBBox::try_from(vec![-10.0, -5.0, 10.0]).is_err());
		assert!(GeoBBox::try_from(vec![0.0; 5]).is_err());
	}

	#[test]
	fn degenerate_boxes_are_not_rejected() {
		// the numeric contract is permissive; swapped bounds stay as given
		let bbox = GeoBBox::new(10.0, 5.0, -10.0, -5.0);
		assert_eq!(bbox.as_tuple(), (10.0, 5.0, -10.0, -5.0));
	}

	#[test]
	fn to_mercator_world_edges() {
		let m = GeoBBox::new(-180.0, 0.0, 180.0, 0.0).to_mercator();
		assert_eq!(m.x_min, -20037508.342789244);
		assert_eq!(m.x_max, 20037508.342789244);
	}
}
