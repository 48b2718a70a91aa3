use crate::types::{GeoBBox, MercatorBBox, Srs};

/// A bounding box tagged with the spatial reference system its values are in.
///
/// Carrying the tag with the data makes reprojection self-describing:
/// converting a box to the system it already uses is the identity, and it is
/// impossible to apply the wrong transform to a box by mislabeling it.
///
/// # Examples
/// ```
/// use tilemath::{GeoBBox, Srs, SrsBBox};
///
/// let bbox = SrsBBox::Wgs84(GeoBBox::new(-180.0, 0.0, 180.0, 0.0));
/// assert_eq!(bbox.srs(), Srs::Wgs84);
///
/// let mercator = bbox.convert(Srs::WebMercator);
/// assert_eq!(mercator.srs(), Srs::WebMercator);
/// assert_eq!(mercator.as_array()[2], 20037508.342789244);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SrsBBox {
	Wgs84(GeoBBox),
	WebMercator(MercatorBBox),
}

impl SrsBBox {
	/// The spatial reference system the values are expressed in.
	pub fn srs(&self) -> Srs {
		match self {
			SrsBBox::Wgs84(_) => Srs::Wgs84,
			SrsBBox::WebMercator(_) => Srs::WebMercator,
		}
	}

	/// Returns the box in geographic degrees, unprojecting if necessary.
	#[must_use]
	pub fn to_geo(&self) -> GeoBBox {
		match self {
			SrsBBox::Wgs84(bbox) => *bbox,
			SrsBBox::WebMercator(bbox) => bbox.to_geo(),
		}
	}

	/// Returns the box in Web Mercator meters, projecting if necessary.
	#[must_use]
	pub fn to_mercator(&self) -> MercatorBBox {
		match self {
			SrsBBox::Wgs84(bbox) => bbox.to_mercator(),
			SrsBBox::WebMercator(bbox) => *bbox,
		}
	}

	/// Reprojects the box into `target`; a no-op if it is already there.
	#[must_use]
	pub fn convert(&self, target: Srs) -> SrsBBox {
		match target {
			Srs::Wgs84 => SrsBBox::Wgs84(self.to_geo()),
			Srs::WebMercator => SrsBBox::WebMercator(self.to_mercator()),
		}
	}

	/// The four values in `[x_min, y_min, x_max, y_max]` order.
	pub fn as_array(&self) -> [f64; 4] {
		match self {
			SrsBBox::Wgs84(bbox) => bbox.as_array(),
			SrsBBox::WebMercator(bbox) => bbox.as_array(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_abs_diff_eq;

	#[test]
	fn convert_to_same_srs_is_identity() {
		let geo = SrsBBox::Wgs84(GeoBBox::new(-10.0, -5.0, 10.0, 5.0));
		assert_eq!(geo.convert(Srs::Wgs84), geo);

		let mercator = geo.convert(Srs::WebMercator);
		assert_eq!(mercator.convert(Srs::WebMercator), mercator);
	}

	#[test]
	fn convert_roundtrip() {
		let geo = SrsBBox::Wgs84(GeoBBox::new(-10.0, -5.0, 10.0, 5.0));
		let back = geo.convert(Srs::WebMercator).convert(Srs::Wgs84);
		for (got, expected) in back.as_array().iter().zip(geo.as_array()) {
			assert_abs_diff_eq!(*got, expected, epsilon = 1e-6);
		}
	}

	#[test]
	fn srs_tag_matches_variant() {
		assert_eq!(SrsBBox::Wgs84(GeoBBox::new(0.0, 0.0, 0.0, 0.0)).srs(), Srs::Wgs84);
		assert_eq!(
			SrsBBox::WebMercator(MercatorBBox::new(0.0, 0.0, 0.0, 0.0)).srs(),
			Srs::WebMercator
		);
	}
}
