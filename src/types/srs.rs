use anyhow::{Result, bail};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Spatial reference system of a coordinate or bounding box.
///
/// Only the two systems of the web tiling ecosystem are supported:
/// geographic degrees (EPSG:4326) and Web Mercator meters (EPSG:3857,
/// historically EPSG:900913).
///
/// # Examples
/// ```
/// use tilemath::Srs;
///
/// assert_eq!(Srs::parse_str("900913").unwrap(), Srs::WebMercator);
/// assert_eq!(Srs::parse_str("wgs84").unwrap(), Srs::Wgs84);
/// assert_eq!(Srs::WebMercator.as_str(), "900913");
/// assert!(Srs::parse_str("27700").is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Srs {
	/// Geographic longitude/latitude in degrees (EPSG:4326).
	Wgs84,
	/// Web Mercator x/y in meters (EPSG:900913 / EPSG:3857).
	WebMercator,
}

impl Srs {
	/// Returns the canonical tag used by tile servers for this system.
	pub fn as_str(&self) -> &str {
		match self {
			Srs::Wgs84 => "4326",
			Srs::WebMercator => "900913",
		}
	}

	/// Parses an SRS tag (case-insensitive, with or without an `EPSG:` prefix).
	///
	/// Accepts `4326`, `WGS84`, `900913` and `3857`.
	pub fn parse_str(value: &str) -> Result<Self> {
		Ok(match value.trim().to_uppercase().trim_start_matches("EPSG:") {
			"4326" | "WGS84" => Srs::Wgs84,
			"900913" | "3857" => Srs::WebMercator,
			_ => bail!("unknown spatial reference system: \"{value}\""),
		})
	}
}

impl Display for Srs {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Srs {
	type Err = anyhow::Error;

	fn from_str(value: &str) -> Result<Self> {
		Srs::parse_str(value)
	}
}
