mod bbox;
mod parse;

pub use bbox::{bbox_corners, cell_dimensions, clamp_to_world};
pub use parse::{parse_geojson, parse_geometry, parse_wkt};
