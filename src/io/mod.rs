pub mod csv;
pub mod geojson;

pub use self::csv::{
    CoordinateSource, CsvGeohashConfig, CsvToGeohash, GeometryFormat, csv_to_geohash_csv,
};
pub use self::geojson::GeohashCellsToGeoJson;
