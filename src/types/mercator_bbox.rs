use crate::types::{GeoBBox, MercatorPoint};
use anyhow::{Result, ensure};
use std::fmt::Debug;

/// A bounding box on the Web Mercator plane in meters (EPSG:900913), stored
/// as `x_min, y_min, x_max, y_max`.
///
/// Like [`GeoBBox`], values are taken as-is; only the `TryFrom` conversions
/// validate structure.
#[derive(Clone, Copy, PartialEq)]
pub struct MercatorBBox {
	pub x_min: f64,
	pub y_min: f64,
	pub x_max: f64,
	pub y_max: f64,
}

impl MercatorBBox {
	pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> MercatorBBox {
		MercatorBBox {
			x_min,
			y_min,
			x_max,
			y_max,
		}
	}

	/// Splits the box into its lower-left and upper-right corners.
	pub fn as_corners(&self) -> (MercatorPoint, MercatorPoint) {
		(
			MercatorPoint::new(self.x_min, self.y_min),
			MercatorPoint::new(self.x_max, self.y_max),
		)
	}

	/// Unprojects both corners back to geographic degrees (EPSG:4326).
	///
	/// # Examples
	/// ```
	/// use tilemath::MercatorBBox;
	///
	/// let geo = MercatorBBox::new(0.0, 0.0, 20037508.342789244, 0.0).to_geo();
	/// assert!((geo.x_max - 180.0).abs() < 1e-9);
	/// ```
	#[must_use]
	pub fn to_geo(&self) -> GeoBBox {
		let (sw, ne) = self.as_corners();
		let min = sw.to_lon_lat();
		let max = ne.to_lon_lat();
		GeoBBox::new(min.lon, min.lat, max.lon, max.lat)
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

impl Debug for MercatorBBox {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"MercatorBBox({}, {}, {}, {})",
			self.x_min, self.y_min, self.x_max, self.y_max
		)
	}
}

impl From<[f64; 4]> for MercatorBBox {
	fn from(input: [f64; 4]) -> Self {
		MercatorBBox::new(input[0], input[1], input[2], input[3])
	}
}

impl TryFrom<Vec<f64>> for MercatorBBox {
	type Error = anyhow::Error;

	/// Attempts to build a `MercatorBBox` from a `Vec<f64>` with exactly four
	/// elements.
	///
	/// # Errors
	///
	/// Returns an error if the length is not exactly four.
	fn try_from(input: Vec<f64>) -> Result<Self> {
		ensure!(
			input.len() == 4,
			"MercatorBBox must have 4 elements (x_min, y_min, x_max, y_max), got {}",
			input.len()
		);
		Ok(MercatorBBox::new(input[0], input[1], input[2], input[3]))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_abs_diff_eq;

	#[test]
	fn geo_roundtrip() {
		let geo = GeoBBox::new(-10.0, -5.0, 10.0, 5.0);
		let back = geo.to_mercator().to_geo();
		assert_abs_diff_eq!(back.x_min, geo.x_min, epsilon = 1e-6);
		assert_abs_diff_eq!(back.y_min, geo.y_min, epsilon = 1e-6);
		assert_abs_diff_eq!(back.x_max, geo.x_max, epsilon = 1e-6);
		assert_abs_diff_eq!(back.y_max, geo.y_max, epsilon = 1e-6);
	}

	#[test]
	fn try_from_vec_invalid_length() {
		assert!(MercatorBBox::try_from(vec![1.0, 2.0]).is_err());
	}

	#[test]
	fn debug_format() {
		let bbox = MercatorBBox::new(0.0, 0.0, 1.5, 2.5);
		assert_eq!(format!("{bbox:?}"), "MercatorBBox(0, 0, 1.5, 2.5)");
	}
}
