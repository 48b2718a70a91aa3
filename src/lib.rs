//! Spherical Mercator math for web map tiling.
//!
//! Converts between the three coordinate spaces of the tile ecosystem:
//! geographic longitude/latitude (EPSG:4326), projected pixel positions at a
//! zoom level, and tile bounding boxes in either degrees or Web Mercator
//! meters (EPSG:900913/3857). The math is a small set of closed-form
//! transforms plus one precomputed scale table per tile size, shared
//! process-wide.
//!
//! # Examples
//!
//! ```
//! use tilemath::{LonLat, Srs, SphericalMercator};
//!
//! let mercator = SphericalMercator::default();
//!
//! // lon/lat to pixel and back
//! let px = mercator.px(&LonLat::new(13.4, 52.5), 5);
//! let ll = mercator.ll(&px, 5);
//!
//! // which tiles does a bounding box touch at zoom 3?
//! let bbox = mercator.bbox(2, 2, 3, false, Srs::Wgs84);
//! let bounds = mercator.xyz(&bbox, 3, false);
//! assert_eq!(bounds.as_tuple(), (2, 2, 2, 2));
//! ```

pub mod mercator;
pub mod types;
pub mod zoom_table;

pub use crate::{mercator::*, types::*, zoom_table::*};
