use crate::cell::GeohashCell;
use crate::error::GeohashError;
use geojson::{Feature, FeatureCollection, JsonObject, feature::Id};
use rayon::prelude::*;

/// Trait for converting collections of [`GeohashCell`]s to GeoJSON.
///
/// Implemented for `[GeohashCell]` (and so for `Vec<GeohashCell>`).
pub trait GeohashCellsToGeoJson {
    /// Converts cells to a FeatureCollection of cell rectangles, with the
    /// geohash as feature id and `geohash`/`precision` properties.
    fn to_feature_collection(&self) -> FeatureCollection;
    /// Serializes [`to_feature_collection`](Self::to_feature_collection) to a string.
    fn to_geojson_string(&self) -> Result<String, GeohashError>;
}

fn cell_to_feature(cell: &GeohashCell) -> Feature {
    let mut properties = JsonObject::new();
    properties.insert("geohash".to_string(), cell.geohash.clone().into());
    properties.insert("precision".to_string(), cell.precision.into());

    Feature {
        bbox: Some(vec![cell.west(), cell.south(), cell.east(), cell.north()]),
        geometry: Some(geojson::Geometry::from(&cell.to_polygon())),
        id: Some(Id::String(cell.geohash.clone())),
        properties: Some(properties),
        foreign_members: None,
    }
}

impl GeohashCellsToGeoJson for [GeohashCell] {
    fn to_feature_collection(&self) -> FeatureCollection {
        let features: Vec<Feature> = self.par_iter().map(cell_to_feature).collect();
        FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        }
    }

    fn to_geojson_string(&self) -> Result<String, GeohashError> {
        serde_json::to_string(&self.to_feature_collection())
            .map_err(|e| GeohashError::IoError(e.to_string()))
    }
}
