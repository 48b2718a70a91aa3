//! Precomputed per-zoom scale tables for pixel ↔ lon/lat conversion.
//!
//! Each [`ZoomConstants`] holds, for every zoom level 0–29, the four scale
//! factors of the projected pixel grid at that level. Tables are derived
//! from the tile size alone, so a process-wide registry shares one table per
//! distinct tile size for the lifetime of the process.

use crate::types::ZOOM_LEVELS;
use lazy_static::lazy_static;
use log::trace;
use std::{
	collections::HashMap,
	f64::consts::TAU,
	sync::{Arc, Mutex},
};

lazy_static! {
	static ref TABLES: Mutex<HashMap<u32, Arc<ZoomConstants>>> = Mutex::new(HashMap::new());
}

/// Scale constants for every zoom level, derived from a tile size.
///
/// For zoom level `z` with tile size `s`, the world is `s * 2^z` pixels wide:
/// - `px_per_deg[z]`: pixels per degree of longitude (`s * 2^z / 360`)
/// - `px_per_rad[z]`: pixels per radian of the Mercator y term (`s * 2^z / 2π`)
/// - `center_px[z]`: pixel coordinate of 0°,0° (`s * 2^z / 2`)
/// - `world_px[z]`: full pixel extent of the world (`s * 2^z`)
///
/// # Examples
/// ```
/// use tilemath::ZoomConstants;
///
/// let table = ZoomConstants::shared(256);
/// assert_eq!(table.world_px(0), 256.0);
/// assert_eq!(table.center_px(3), 1024.0);
/// ```
#[derive(Debug, PartialEq)]
pub struct ZoomConstants {
	px_per_deg: [f64; ZOOM_LEVELS],
	px_per_rad: [f64; ZOOM_LEVELS],
	center_px: [f64; ZOOM_LEVELS],
	world_px: [f64; ZOOM_LEVELS],
}

impl ZoomConstants {
	fn compute(tile_size: u32) -> ZoomConstants {
		let mut table = ZoomConstants {
			px_per_deg: [0.0; ZOOM_LEVELS],
			px_per_rad: [0.0; ZOOM_LEVELS],
			center_px: [0.0; ZOOM_LEVELS],
			world_px: [0.0; ZOOM_LEVELS],
		};
		let mut size = f64::from(tile_size);
		for zoom in 0..ZOOM_LEVELS {
			table.px_per_deg[zoom] = size / 360.0;
			table.px_per_rad[zoom] = size / TAU;
			table.center_px[zoom] = size / 2.0;
			table.world_px[zoom] = size;
			size *= 2.0;
		}
		table
	}

	/// Returns the shared table for `tile_size`, computing it on first use.
	///
	/// Repeated calls with the same size hand out the same allocation; the
	/// table for a size is computed at most once per process.
	pub fn shared(tile_size: u32) -> Arc<ZoomConstants> {
		let mut tables = TABLES.lock().unwrap();
		Arc::clone(tables.entry(tile_size).or_insert_with(|| {
			trace!("computing zoom scale table for tile size {tile_size}");
			Arc::new(ZoomConstants::compute(tile_size))
		}))
	}

	/// Pixels per degree of longitude at `zoom`.
	pub fn px_per_deg(&self, zoom: u8) -> f64 {
		self.px_per_deg[zoom as usize]
	}

	/// Pixels per radian of the Mercator y term at `zoom`.
	pub fn px_per_rad(&self, zoom: u8) -> f64 {
		self.px_per_rad[zoom as usize]
	}

	/// Pixel coordinate of the projection origin (0°,0°) at `zoom`.
	pub fn center_px(&self, zoom: u8) -> f64 {
		self.center_px[zoom as usize]
	}

	/// Full pixel extent of the world at `zoom`.
	pub fn world_px(&self, zoom: u8) -> f64 {
		self.world_px[zoom as usize]
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::f64::consts::TAU;

	#[test]
	fn zoom_zero_matches_tile_size() {
		let table = ZoomConstants::shared(256);
		assert_eq!(table.px_per_deg(0), 256.0 / 360.0);
		assert_eq!(table.px_per_rad(0), 256.0 / TAU);
		assert_eq!(table.center_px(0), 128.0);
		assert_eq!(table.world_px(0), 256.0);
	}

	#[test]
	fn every_level_doubles() {
		let table = ZoomConstants::shared(256);
		for zoom in 0..(ZOOM_LEVELS as u8 - 1) {
			assert_eq!(table.px_per_deg(zoom + 1), 2.0 * table.px_per_deg(zoom));
			assert_eq!(table.px_per_rad(zoom + 1), 2.0 * table.px_per_rad(zoom));
			assert_eq!(table.center_px(zoom + 1), 2.0 * table.center_px(zoom));
			assert_eq!(table.world_px(zoom + 1), 2.0 * table.world_px(zoom));
		}
	}

	#[test]
	fn registry_is_idempotent() {
		let first = ZoomConstants::shared(512);
		let second = ZoomConstants::shared(512);
		assert!(Arc::ptr_eq(&first, &second));
		assert_eq!(*first, *second);
	}

	#[test]
	fn distinct_sizes_get_distinct_tables() {
		let small = ZoomConstants::shared(256);
		let large = ZoomConstants::shared(1024);
		assert!(!Arc::ptr_eq(&small, &large));
		assert_eq!(large.world_px(0), small.world_px(2));
	}

	#[test]
	#[should_panic(expected = "index out of bounds")]
	fn zoom_beyond_table_panics() {
		ZoomConstants::shared(256).world_px(30);
	}
}
