//! # geohash-rs
//!
//! Geohash encoding, decoding and cell adjacency. There are four main entry
//! points.
//!
//! ### 1. Codec functions
//!
//! ```
//! use geohash_rs::{decode, encode};
//!
//! # fn main() -> Result<(), geohash_rs::GeohashError> {
//! let geohash = encode(57.64911, 10.40744, 11)?;
//! assert_eq!(geohash, "u4pruydqqvj");
//!
//! // min is (west, south), max is (east, north)
//! let bbox = decode(&geohash)?;
//! assert!(bbox.min().y <= 57.64911 && 57.64911 <= bbox.max().y);
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. Adjacency
//!
//! ```
//! use geohash_rs::{Direction, GeohashCache, adjacent, neighbors};
//!
//! # fn main() -> Result<(), geohash_rs::GeohashError> {
//! assert_eq!(adjacent("ub", Direction::Right)?, "v0");
//!
//! // N, NE, E, SE, S, SW, W, NW
//! let ring = neighbors("ezs42")?;
//! assert_eq!(ring[4], "ezs40");
//!
//! // Memoized lookups go through an explicit cache value
//! let cache = GeohashCache::new();
//! assert_eq!(cache.neighbors("ezs42")?, ring);
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. `GeohashCell` and `GeohashGrid`
//!
//! ```
//! use geohash_rs::{GeohashCell, GeohashGrid};
//! use geo_types::point;
//!
//! # fn main() -> Result<(), geohash_rs::GeohashError> {
//! let cell = GeohashCell::from_coord(&(-5.6, 42.6), 5)?;
//! let polygon = cell.to_polygon();
//!
//! let grid = GeohashGrid::builder()
//!     .precision(5)
//!     .extent(-5.7, 42.5, -5.5, 42.7)
//!     .build()?;
//! assert!(grid.get_cell_at(&point! { x: -5.6, y: 42.6 }).is_some());
//! # Ok(())
//! # }
//! ```
//!
//! ### 4. `CsvToGeohash` - CSV File Conversion
//!
//! CSV conversion and GeoJSON export live in [`io`], behind the default `io`
//! feature.
//!
//! ```no_run
//! # #[cfg(feature = "io")]
//! # {
//! use geohash_rs::{CsvGeohashConfig, CsvToGeohash, GeometryFormat};
//!
//! let config = CsvGeohashConfig::from_coords("Latitude", "Longitude", 8)
//!     .with_cell_geometry(GeometryFormat::GeoJson);
//!
//! "input.csv".to_geohash_csv("output.csv", &config).unwrap();
//! # }
//! ```

pub mod cell;
pub mod coord;
pub mod error;
pub mod geom;
pub mod grid;
pub mod index;
#[cfg(feature = "io")]
pub mod io;

pub use cell::GeohashCell;
pub use coord::Coordinate;
pub use error::GeohashError;
pub use geom::{bbox_corners, cell_dimensions, clamp_to_world, parse_geometry};
pub use grid::{GeohashGrid, GeohashGridBuilder};
pub use index::{
    BASE32, DEFAULT_PRECISION, Direction, GeohashCache, RING_PATH, adjacent, decode,
    decode_binary, encode, encode_binary, neighbors, walk,
};
#[cfg(feature = "io")]
pub use io::{
    CoordinateSource, CsvGeohashConfig, CsvToGeohash, GeohashCellsToGeoJson, GeometryFormat,
    csv_to_geohash_csv,
};

pub use geo_types;

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::point;
    use std::collections::HashSet;

    #[test]
    fn test_end_to_end_workflow() -> Result<(), GeohashError> {
        let geohash = encode(57.64911, 10.40744, DEFAULT_PRECISION)?;
        assert_eq!(geohash.len(), DEFAULT_PRECISION);

        let cell = GeohashCell::from_geohash(&geohash)?;
        assert!(cell.contains(&point! { x: 10.40744, y: 57.64911 }));

        let ring = neighbors(&geohash)?;
        let cache = GeohashCache::new();
        assert_eq!(cache.neighbors(&geohash)?, ring);

        let sides = [
            (0, Direction::Top),
            (2, Direction::Right),
            (4, Direction::Bottom),
            (6, Direction::Left),
        ];
        for (n, direction) in sides {
            assert_eq!(ring[n], adjacent(&geohash, direction)?);
        }
        Ok(())
    }

    #[test]
    fn test_neighbors_surround_cell() -> Result<(), GeohashError> {
        let cell = GeohashCell::from_lat_lon(40.7128, -74.0060, 7)?;
        let ring = cell.neighbors()?;

        // north-east shares the north-east corner, south-west the south-west one
        assert_eq!(ring[1].west(), cell.east());
        assert_eq!(ring[1].south(), cell.north());
        assert_eq!(ring[5].east(), cell.west());
        assert_eq!(ring[5].north(), cell.south());
        Ok(())
    }

    #[test]
    fn test_binary_and_coordinate_codecs_agree() -> Result<(), GeohashError> {
        // 5 bits per symbol: "u" is 11010, "4" is 00100
        assert_eq!(encode_binary("1101000100")?, "u4");
        assert_eq!(decode_binary("1101000100")?, decode("u4")?);
        Ok(())
    }

    #[test]
    fn test_grid_cells_are_neighbors_of_each_other() -> Result<(), GeohashError> {
        let grid = GeohashGrid::from_extent(-0.2, 51.45, -0.05, 51.55, 5)?;
        let ids: HashSet<&str> = grid.iter().map(|c| c.geohash.as_str()).collect();

        for cell in grid.iter() {
            let linked = neighbors(&cell.geohash)?
                .iter()
                .filter(|n| ids.contains(n.as_str()))
                .count();
            assert!(linked >= 1 || grid.len() == 1);
        }
        Ok(())
    }

    #[test]
    fn test_corner_convention() -> Result<(), GeohashError> {
        let [[south, west], [north, east]] = bbox_corners(&decode("ezs42")?);
        assert!(south < north);
        assert!(west < east);
        assert!((42.6 - south) > 0.0 && (north - 42.6) > 0.0);
        assert!((-5.6 - west) > 0.0 && (east - -5.6) > 0.0);
        Ok(())
    }
}
