use crate::cell::GeohashCell;
use crate::error::GeohashError;
use crate::geom::parse_geometry;
use log::warn;
use std::collections::HashSet;
use std::fs::File;
use std::path::Path;

enum SourceIndices {
    Geometry(usize),
    Coordinates { lat_idx: usize, lon_idx: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryFormat {
    /// Well-Known Text format (e.g., "POLYGON((...))")
    Wkt,
    /// GeoJSON format
    GeoJson,
}

#[derive(Debug, Clone)]
pub enum CoordinateSource {
    /// A single column containing WKT or GeoJSON geometry in lon/lat order
    GeometryColumn(String),
    /// Separate latitude and longitude columns
    CoordinateColumns {
        lat_column: String,
        lon_column: String,
    },
}

#[derive(Debug, Clone)]
pub struct CsvGeohashConfig {
    pub source: CoordinateSource,
    pub exclude_columns: Vec<String>,
    pub precision: usize,
    pub include_cell_geometry: Option<GeometryFormat>,
}

impl CsvGeohashConfig {
    /// Create config for a CSV with a geometry column (WKT or GeoJSON).
    ///
    /// # Example
    /// ```
    /// use geohash_rs::CsvGeohashConfig;
    ///
    /// let config = CsvGeohashConfig::new("geometry", 8);
    /// ```
    pub fn new(geometry_column: impl Into<String>, precision: usize) -> Self {
        Self {
            source: CoordinateSource::GeometryColumn(geometry_column.into()),
            exclude_columns: Vec::new(),
            precision,
            include_cell_geometry: None,
        }
    }

    /// Create config for a CSV with separate latitude/longitude columns.
    ///
    /// # Example
    /// ```
    /// use geohash_rs::CsvGeohashConfig;
    ///
    /// let config = CsvGeohashConfig::from_coords("Latitude", "Longitude", 8);
    /// ```
    pub fn from_coords(
        lat_column: impl Into<String>,
        lon_column: impl Into<String>,
        precision: usize,
    ) -> Self {
        Self {
            source: CoordinateSource::CoordinateColumns {
                lat_column: lat_column.into(),
                lon_column: lon_column.into(),
            },
            exclude_columns: Vec::new(),
            precision,
            include_cell_geometry: None,
        }
    }

    pub fn exclude(mut self, columns: Vec<String>) -> Self {
        self.exclude_columns = columns;
        self
    }

    // Include the cell rectangle in the output.
    pub fn with_cell_geometry(mut self, format: GeometryFormat) -> Self {
        self.include_cell_geometry = Some(format);
        self
    }
}

pub trait CsvToGeohash {
    fn to_geohash_csv(
        &self,
        output_path: impl AsRef<Path>,
        config: &CsvGeohashConfig,
    ) -> Result<(), GeohashError>;
}

impl<P: AsRef<Path>> CsvToGeohash for P {
    fn to_geohash_csv(
        &self,
        output_path: impl AsRef<Path>,
        config: &CsvGeohashConfig,
    ) -> Result<(), GeohashError> {
        csv_to_geohash_csv(self, output_path, config)
    }
}

fn polygon_to_wkt(polygon: &geo_types::Polygon<f64>) -> String {
    use wkt::ToWkt;
    polygon.wkt_string()
}

fn polygon_to_geojson(polygon: &geo_types::Polygon<f64>) -> String {
    let geom = geojson::Geometry::from(polygon);
    geom.to_string()
}

fn column_index(
    headers: &csv::StringRecord,
    name: &str,
    role: &str,
) -> Result<usize, GeohashError> {
    if name.is_empty() {
        return Err(GeohashError::CsvError(format!(
            "{} column name cannot be empty",
            role
        )));
    }
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| GeohashError::CsvError(format!("{} column '{}' not found", role, name)))
}

fn parse_coordinate(
    record: &csv::StringRecord,
    idx: usize,
    role: &str,
) -> Result<f64, GeohashError> {
    let raw = record
        .get(idx)
        .ok_or_else(|| GeohashError::CsvError(format!("Missing {} column at index {}", role, idx)))?
        .trim();
    raw.parse()
        .map_err(|_| GeohashError::CsvError(format!("Invalid {}: '{}'", role, raw)))
}

/// Converts a CSV file with geometry or coordinate columns to a CSV file
/// with a leading `geohash` column.
///
/// Rows whose geometry yields several cells (lines, collections) are
/// repeated once per cell. Source coordinate columns are dropped from the
/// output. Streams output to keep memory flat for large files.
///
/// # Example with geometry column (WKT or GeoJSON)
///
/// ```no_run
/// use geohash_rs::{csv_to_geohash_csv, CsvGeohashConfig, GeometryFormat};
///
/// let config = CsvGeohashConfig::new("Geo Shape", 7)
///     .exclude(vec!["Geo Point".into()])
///     .with_cell_geometry(GeometryFormat::Wkt);
///
/// csv_to_geohash_csv("input.csv", "output.csv", &config).unwrap();
/// ```
///
/// # Example with coordinate columns
///
/// ```no_run
/// use geohash_rs::{csv_to_geohash_csv, CsvGeohashConfig};
///
/// let config = CsvGeohashConfig::from_coords("Latitude", "Longitude", 9);
///
/// csv_to_geohash_csv("bus_stops.csv", "output.csv", &config).unwrap();
/// ```
pub fn csv_to_geohash_csv(
    csv_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    config: &CsvGeohashConfig,
) -> Result<(), GeohashError> {
    if config.precision < 1 {
        return Err(GeohashError::InvalidArgument(format!(
            "Precision must be at least 1, got {}",
            config.precision
        )));
    }

    let file = File::open(csv_path).map_err(|e| GeohashError::CsvError(e.to_string()))?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| GeohashError::CsvError(e.to_string()))?
        .clone();

    let (source_indices, mut exclude_indices) = match &config.source {
        CoordinateSource::GeometryColumn(col) => {
            let idx = column_index(&headers, col, "Geometry")?;
            (SourceIndices::Geometry(idx), HashSet::from([idx]))
        }
        CoordinateSource::CoordinateColumns {
            lat_column,
            lon_column,
        } => {
            let lat_idx = column_index(&headers, lat_column, "Latitude")?;
            let lon_idx = column_index(&headers, lon_column, "Longitude")?;
            (
                SourceIndices::Coordinates { lat_idx, lon_idx },
                HashSet::from([lat_idx, lon_idx]),
            )
        }
    };

    for col_name in &config.exclude_columns {
        if let Some(idx) = headers.iter().position(|h| h == col_name) {
            exclude_indices.insert(idx);
        }
    }

    let out_file = File::create(output_path).map_err(|e| GeohashError::IoError(e.to_string()))?;
    let mut writer = csv::Writer::from_writer(out_file);

    let mut header_row: Vec<&str> = vec!["geohash"];
    if config.include_cell_geometry.is_some() {
        header_row.push("cell_geometry");
    }
    for (i, h) in headers.iter().enumerate() {
        if !exclude_indices.contains(&i) {
            header_row.push(h);
        }
    }
    writer
        .write_record(&header_row)
        .map_err(|e| GeohashError::CsvError(e.to_string()))?;

    for (line, result) in reader.records().enumerate() {
        let record = result.map_err(|e| GeohashError::CsvError(e.to_string()))?;

        let cells = match &source_indices {
            SourceIndices::Geometry(idx) => {
                let geom_str = record.get(*idx).ok_or_else(|| {
                    GeohashError::CsvError(format!("Missing geometry column at index {}", idx))
                })?;
                let geom = parse_geometry(geom_str)?;
                GeohashCell::from_geometry(geom, config.precision)?
            }
            SourceIndices::Coordinates { lat_idx, lon_idx } => {
                let lat = parse_coordinate(&record, *lat_idx, "latitude")?;
                let lon = parse_coordinate(&record, *lon_idx, "longitude")?;
                vec![GeohashCell::from_lat_lon(lat, lon, config.precision)?]
            }
        };

        if cells.is_empty() {
            warn!("record {} produced no geohash cells, skipping", line + 1);
        }

        for cell in cells {
            let mut row: Vec<String> = vec![cell.geohash.clone()];

            if let Some(format) = config.include_cell_geometry {
                let polygon = cell.to_polygon();
                let geom_str = match format {
                    GeometryFormat::Wkt => polygon_to_wkt(&polygon),
                    GeometryFormat::GeoJson => polygon_to_geojson(&polygon),
                };
                row.push(geom_str);
            }

            for (i, field) in record.iter().enumerate() {
                if !exclude_indices.contains(&i) {
                    row.push(field.to_string());
                }
            }
            writer
                .write_record(&row)
                .map_err(|e| GeohashError::CsvError(e.to_string()))?;
        }
    }

    writer
        .flush()
        .map_err(|e| GeohashError::CsvError(e.to_string()))?;

    Ok(())
}
