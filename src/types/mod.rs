//! Coordinate points, bounding boxes, SRS selectors, and shared constants.

mod constants;
pub use constants::*;

mod geo_bbox;
pub use geo_bbox::*;

mod lon_lat;
pub use lon_lat::*;

mod mercator_bbox;
pub use mercator_bbox::*;

mod mercator_point;
pub use mercator_point::*;

mod pixel;
pub use pixel::*;

mod srs;
pub use srs::*;

mod srs_bbox;
pub use srs_bbox::*;

mod tile_bounds;
pub use tile_bounds::*;
