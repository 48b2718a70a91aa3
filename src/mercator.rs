//! Spherical Mercator conversions between geographic coordinates, projected
//! pixels and tile bounding boxes.
//!
//! # Examples
//!
//! ```
//! use tilemath::{LonLat, Srs, SphericalMercator};
//!
//! let mercator = SphericalMercator::default();
//!
//! // 0°,0° sits in the middle of the single zoom-0 tile
//! let px = mercator.px(&LonLat::new(0.0, 0.0), 0);
//! assert_eq!(px.as_tuple(), (128.0, 128.0));
//!
//! // the world tile spans the full Mercator latitude range
//! let bbox = mercator.bbox(0, 0, 0, false, Srs::Wgs84).to_geo();
//! assert_eq!(
//! 	bbox.as_tuple(),
//! 	(-180.0, -85.05112877980659, 180.0, 85.05112877980659)
//! );
//! ```

use crate::types::{DEFAULT_TILE_SIZE, GeoBBox, LonLat, Pixel, Srs, SrsBBox, TileBounds, ZOOM_LEVELS};
use crate::zoom_table::ZoomConstants;
use anyhow::{Result, ensure};
use std::f64::consts::FRAC_PI_2;
use std::fmt::Debug;
use std::sync::Arc;

/// Mirrors a tile row between XYZ (top-down) and TMS (bottom-up) numbering.
///
/// The flip is its own inverse: applying it twice returns the original row.
pub fn flip_row(zoom: u8, row: i64) -> i64 {
	((1i64 << zoom) - 1) - row
}

/// Converter between geographic coordinates, projected pixel positions and
/// tile bounding boxes for one tile size.
///
/// The converter itself is stateless; it holds the tile size and a shared
/// reference to the per-zoom scale table for that size. Zoom levels 0 to 29
/// are supported; passing a larger zoom to the plain methods panics on the
/// table lookup, while the `try_*` variants fail with a descriptive error.
pub struct SphericalMercator {
	tile_size: u32,
	constants: Arc<ZoomConstants>,
}

impl SphericalMercator {
	/// Creates a converter for the given tile size (pixels per tile edge at
	/// zoom 0).
	///
	/// # Errors
	///
	/// Fails if `tile_size` is zero.
	pub fn new(tile_size: u32) -> Result<SphericalMercator> {
		ensure!(tile_size > 0, "tile size must be positive");
		Ok(SphericalMercator {
			tile_size,
			constants: ZoomConstants::shared(tile_size),
		})
	}

	/// The tile edge length in pixels this converter was built with.
	pub fn tile_size(&self) -> u32 {
		self.tile_size
	}

	/// Projects a geographic coordinate to the pixel grid of `zoom`.
	///
	/// The sine of the latitude is clamped to ±0.9999 to keep the
	/// logarithmic term finite near the poles, and the rounded result is
	/// clamped down to the world extent where that overshoots past the
	/// south or east edge. Pixels north or west of the grid stay negative.
	///
	/// # Examples
	/// ```
	/// use tilemath::{LonLat, SphericalMercator};
	///
	/// let mercator = SphericalMercator::default();
	/// assert_eq!(mercator.px(&LonLat::new(0.0, 0.0), 2).as_tuple(), (512.0, 512.0));
	/// assert_eq!(mercator.px(&LonLat::new(-180.0, 0.0), 2).as_tuple(), (0.0, 512.0));
	/// ```
	pub fn px(&self, coord: &LonLat, zoom: u8) -> Pixel {
		let c = &self.constants;
		let center = c.center_px(zoom);
		let world = c.world_px(zoom);
		let f = (coord.lat.to_radians().sin()).clamp(-0.9999, 0.9999);
		let mut x = (center + coord.lon * c.px_per_deg(zoom)).round();
		let mut y = (center + 0.5 * ((1.0 + f) / (1.0 - f)).ln() * -c.px_per_rad(zoom)).round();
		if x > world {
			x = world;
		}
		if y > world {
			y = world;
		}
		Pixel::new(x, y)
	}

	/// Unprojects a pixel position on the grid of `zoom` back to degrees.
	///
	/// Exact inverse of [`px`](Self::px) up to the pixel rounding.
	pub fn ll(&self, pixel: &Pixel, zoom: u8) -> LonLat {
		let c = &self.constants;
		let g = (pixel.y - c.center_px(zoom)) / -c.px_per_rad(zoom);
		let lon = (pixel.x - c.center_px(zoom)) / c.px_per_deg(zoom);
		let lat = (2.0 * g.exp().atan() - FRAC_PI_2).to_degrees();
		LonLat::new(lon, lat)
	}

	/// Returns the bounding box of the tile (x, y) at `zoom` in the
	/// requested spatial reference system.
	///
	/// With `tms_style` the row index is interpreted bottom-up before the
	/// lookup.
	///
	/// # Examples
	/// ```
	/// use tilemath::{Srs, SphericalMercator};
	///
	/// let mercator = SphericalMercator::default();
	/// let bbox = mercator.bbox(1, 1, 1, false, Srs::Wgs84).to_geo();
	/// assert_eq!(bbox.as_tuple(), (0.0, -85.05112877980659, 180.0, 0.0));
	/// ```
	pub fn bbox(&self, x: i64, y: i64, zoom: u8, tms_style: bool, srs: Srs) -> SrsBBox {
		let row = if tms_style { flip_row(zoom, y) } else { y };
		let size = f64::from(self.tile_size);

		// pixel y grows downward: the lower-left corner is one tile row below
		let lower_left = Pixel::new(x as f64 * size, (row + 1) as f64 * size);
		let upper_right = Pixel::new((x + 1) as f64 * size, row as f64 * size);

		let sw = self.ll(&lower_left, zoom);
		let ne = self.ll(&upper_right, zoom);
		let geo = GeoBBox::from_corners(&sw, &ne);

		match srs {
			Srs::Wgs84 => SrsBBox::Wgs84(geo),
			Srs::WebMercator => SrsBBox::WebMercator(geo.to_mercator()),
		}
	}

	/// Returns the range of tiles at `zoom` touched by a bounding box.
	///
	/// A Web Mercator box is unprojected to degrees first. The minimum
	/// bounds are clamped to ≥ 0; the maximum bounds are not, so a box
	/// entirely off the north or west edge yields negative maxima. With
	/// `tms_style` the rows of the result are flipped to bottom-up
	/// numbering.
	///
	/// # Examples
	/// ```
	/// use tilemath::{GeoBBox, SrsBBox, SphericalMercator};
	///
	/// let mercator = SphericalMercator::default();
	/// let bbox = SrsBBox::Wgs84(GeoBBox::new(0.0, -85.05112877980659, 180.0, 0.0));
	/// let bounds = mercator.xyz(&bbox, 1, false);
	/// assert_eq!(bounds.as_tuple(), (1, 1, 1, 1));
	/// ```
	pub fn xyz(&self, bbox: &SrsBBox, zoom: u8, tms_style: bool) -> TileBounds {
		let geo = bbox.to_geo();
		let size = f64::from(self.tile_size);
		let (sw, ne) = geo.as_corners();
		let px_ll = self.px(&sw, zoom);
		let px_ur = self.px(&ne, zoom);

		let x0 = (px_ll.x / size).floor();
		let x1 = ((px_ur.x - 1.0) / size).floor();
		let y0 = (px_ur.y / size).floor();
		let y1 = ((px_ll.y - 1.0) / size).floor();

		let mut bounds = TileBounds::new(
			x0.min(x1).max(0.0) as i64,
			y0.min(y1).max(0.0) as i64,
			x0.max(x1) as i64,
			y0.max(y1) as i64,
		);

		if tms_style {
			// the second flip reads the row flipped by the first
			bounds.y_min = flip_row(zoom, bounds.y_max);
			bounds.y_max = flip_row(zoom, bounds.y_min);
		}
		bounds
	}

	/// Fallible [`px`](Self::px) that rejects zoom levels outside the table.
	pub fn try_px(&self, coord: &LonLat, zoom: u8) -> Result<Pixel> {
		check_zoom(zoom)?;
		Ok(self.px(coord, zoom))
	}

	/// Fallible [`ll`](Self::ll) that rejects zoom levels outside the table.
	pub fn try_ll(&self, pixel: &Pixel, zoom: u8) -> Result<LonLat> {
		check_zoom(zoom)?;
		Ok(self.ll(pixel, zoom))
	}

	/// Fallible [`bbox`](Self::bbox) that rejects zoom levels outside the table.
	pub fn try_bbox(&self, x: i64, y: i64, zoom: u8, tms_style: bool, srs: Srs) -> Result<SrsBBox> {
		check_zoom(zoom)?;
		Ok(self.bbox(x, y, zoom, tms_style, srs))
	}

	/// Fallible [`xyz`](Self::xyz) that rejects zoom levels outside the table.
	pub fn try_xyz(&self, bbox: &SrsBBox, zoom: u8, tms_style: bool) -> Result<TileBounds> {
		check_zoom(zoom)?;
		Ok(self.xyz(bbox, zoom, tms_style))
	}
}

fn check_zoom(zoom: u8) -> Result<()> {
	ensure!(
		(zoom as usize) < ZOOM_LEVELS,
		"zoom ({zoom}) must be below {ZOOM_LEVELS}"
	);
	Ok(())
}

impl Default for SphericalMercator {
	/// A converter for the standard 256 pixel tiles.
	fn default() -> Self {
		SphericalMercator {
			tile_size: DEFAULT_TILE_SIZE,
			constants: ZoomConstants::shared(DEFAULT_TILE_SIZE),
		}
	}
}

impl Debug for SphericalMercator {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "SphericalMercator({})", self.tile_size)
	}
}
