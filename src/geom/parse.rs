use crate::error::GeohashError;
use geo_types::{Geometry, GeometryCollection};
use geojson::GeoJson;
use std::str::FromStr;
use wkt::Wkt;

/// Parses a geometry string, auto-detecting WKT or GeoJSON format.
///
/// GeoJSON is detected by a leading `{`, everything else is tried as WKT.
/// Coordinates are read as longitude/latitude.
pub fn parse_geometry(s: &str) -> Result<Geometry<f64>, GeohashError> {
    let trimmed = s.trim();
    if trimmed.starts_with('{') {
        parse_geojson(trimmed)
    } else {
        parse_wkt(trimmed)
    }
}

/// Parses a GeoJSON string into a `geo_types::Geometry`.
///
/// A `FeatureCollection` becomes a `GeometryCollection` of its feature
/// geometries; features without geometry are skipped.
pub fn parse_geojson(s: &str) -> Result<Geometry<f64>, GeohashError> {
    let geojson: GeoJson = s
        .parse()
        .map_err(|e: geojson::Error| GeohashError::GeometryParseError(e.to_string()))?;

    match geojson {
        GeoJson::Geometry(geom) => to_geo(geom),
        GeoJson::Feature(feat) => feat
            .geometry
            .ok_or_else(|| GeohashError::GeometryParseError("Feature has no geometry".to_string()))
            .and_then(to_geo),
        GeoJson::FeatureCollection(fc) => {
            let geometries = fc
                .features
                .into_iter()
                .filter_map(|feat| feat.geometry)
                .map(to_geo)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Geometry::GeometryCollection(GeometryCollection::new_from(
                geometries,
            )))
        }
    }
}

fn to_geo(geom: geojson::Geometry) -> Result<Geometry<f64>, GeohashError> {
    Geometry::try_from(geom).map_err(|e| GeohashError::GeometryParseError(e.to_string()))
}

/// Parses a WKT string into a `geo_types::Geometry`.
pub fn parse_wkt(s: &str) -> Result<Geometry<f64>, GeohashError> {
    let wkt: Wkt<f64> =
        Wkt::from_str(s).map_err(|e| GeohashError::GeometryParseError(e.to_string()))?;

    wkt.try_into().map_err(|_| {
        GeohashError::GeometryParseError("Failed to convert WKT to geometry".to_string())
    })
}
