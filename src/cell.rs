use crate::coord::Coordinate;
use crate::error::GeohashError;
use crate::geom::cell_dimensions;
use crate::index::{BASE32, Direction, adjacent, decode, encode, neighbors};
use geo::{Centroid, Intersects};
use geo_types::{Coord, Geometry, LineString, Point, Polygon, Rect};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::HashSet;

// Upper bound on samples taken along one line segment.
const MAX_SEGMENT_SAMPLES: f64 = (1u64 << 24) as f64;

/// A single geohash cell.
///
/// Bundles the geohash string with the bounding box it decodes to. The box
/// uses `x` for longitude and `y` for latitude, so `bbox.min()` is the
/// south-west corner and `bbox.max()` the north-east corner.
///
/// # Example
///
/// ```
/// use geohash_rs::GeohashCell;
///
/// # fn main() -> Result<(), geohash_rs::GeohashError> {
/// let cell = GeohashCell::from_lat_lon(57.64911, 10.40744, 11)?;
/// assert_eq!(cell.geohash, "u4pruydqqvj");
/// println!("Center: ({}, {})", cell.center().x(), cell.center().y());
///
/// // Convert the cell to a polygon for GIS operations
/// let polygon = cell.to_polygon();
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeohashCell {
    /// Lowercase geohash string
    pub geohash: String,
    /// Cell extent in longitude/latitude degrees
    pub bbox: Rect<f64>,
    /// Number of symbols in the geohash
    pub precision: usize,
}

impl GeohashCell {
    /// Create a GeohashCell from a geohash string (case-insensitive)
    ///
    /// # Example
    /// ```
    /// use geohash_rs::GeohashCell;
    ///
    /// # fn main() -> Result<(), geohash_rs::GeohashError> {
    /// let cell = GeohashCell::from_geohash("EZS42")?;
    /// assert_eq!(cell.geohash, "ezs42");
    /// assert_eq!(cell.precision, 5);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_geohash(geohash: &str) -> Result<Self, GeohashError> {
        let bbox = decode(geohash)?;
        let geohash = geohash.to_ascii_lowercase();
        let precision = geohash.chars().count();

        Ok(Self {
            geohash,
            bbox,
            precision,
        })
    }

    /// Create a GeohashCell from a latitude/longitude pair
    pub fn from_lat_lon(
        latitude: f64,
        longitude: f64,
        precision: usize,
    ) -> Result<Self, GeohashError> {
        let geohash = encode(latitude, longitude, precision)?;
        let bbox = decode(&geohash)?;

        Ok(Self {
            geohash,
            bbox,
            precision,
        })
    }

    /// Create a GeohashCell from anything implementing [`Coordinate`]
    ///
    /// # Example
    /// ```
    /// use geohash_rs::GeohashCell;
    /// use geo_types::Point;
    ///
    /// # fn main() -> Result<(), geohash_rs::GeohashError> {
    /// // From a (lon, lat) tuple
    /// let cell = GeohashCell::from_coord(&(-5.6, 42.6), 5)?;
    /// // From Point
    /// let same = GeohashCell::from_coord(&Point::new(-5.6, 42.6), 5)?;
    /// assert_eq!(cell.geohash, "ezs42");
    /// assert_eq!(cell, same);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_coord(coord: &impl Coordinate, precision: usize) -> Result<Self, GeohashError> {
        Self::from_lat_lon(coord.latitude(), coord.longitude(), precision)
    }

    /// Encode many coordinates in parallel, preserving input order.
    pub fn from_coords<C>(coords: &[C], precision: usize) -> Result<Vec<Self>, GeohashError>
    where
        C: Coordinate + Sync,
    {
        coords
            .par_iter()
            .map(|coord| Self::from_coord(coord, precision))
            .collect()
    }

    /// Create GeohashCells covering a LineString.
    ///
    /// Samples each segment at half the smaller cell dimension and returns the
    /// unique cells hit, in the order they are first reached.
    ///
    /// Returns `InvalidArgument` for non-finite vertices, or when a segment
    /// would need more than 2^24 samples at this precision.
    pub fn from_line_string(
        line: &LineString<f64>,
        precision: usize,
    ) -> Result<Vec<Self>, GeohashError> {
        let (width, height) = cell_dimensions(precision)?;
        let step_size = width.min(height) * 0.5;

        if let Some(c) = line.0.iter().find(|c| !c.x.is_finite() || !c.y.is_finite()) {
            return Err(GeohashError::InvalidArgument(format!(
                "line vertex ({}, {}) is not finite",
                c.x, c.y
            )));
        }

        let mut seen: HashSet<String> = HashSet::new();
        let mut cells: Vec<GeohashCell> = Vec::new();

        let mut visit = |c: Coord<f64>| -> Result<(), GeohashError> {
            let geohash = encode(c.y, c.x, precision)?;
            if seen.insert(geohash.clone()) {
                cells.push(Self::from_geohash(&geohash)?);
            }
            Ok(())
        };

        if line.0.len() == 1 {
            visit(line.0[0])?;
        }

        for window in line.0.windows(2) {
            let start = window[0];
            let end = window[1];

            let dx = end.x - start.x;
            let dy = end.y - start.y;
            let segment_length = (dx * dx + dy * dy).sqrt();
            let samples = (segment_length / step_size).ceil();
            if !samples.is_finite() || samples > MAX_SEGMENT_SAMPLES {
                return Err(GeohashError::InvalidArgument(format!(
                    "segment of length {} is too long to sample at precision {}",
                    segment_length, precision
                )));
            }
            let steps = samples as usize;

            for i in 0..=steps {
                let t = if steps == 0 {
                    0.0
                } else {
                    i as f64 / steps as f64
                };
                visit(Coord {
                    x: start.x + t * dx,
                    y: start.y + t * dy,
                })?;
            }
        }

        Ok(cells)
    }

    /// Create GeohashCells from an arbitrary `geo_types::Geometry`.
    ///
    /// Points produce their containing cell, polygons the cell of their
    /// centroid, and lines every cell they pass through. Collections are
    /// flattened. Empty polygons produce no cells.
    pub fn from_geometry(
        geom: Geometry<f64>,
        precision: usize,
    ) -> Result<Vec<Self>, GeohashError> {
        match geom {
            Geometry::Point(pt) => Ok(vec![Self::from_coord(&pt, precision)?]),
            Geometry::MultiPoint(mp) => mp
                .0
                .iter()
                .map(|pt| Self::from_coord(pt, precision))
                .collect(),
            Geometry::Line(line) => {
                Self::from_line_string(&LineString::new(vec![line.start, line.end]), precision)
            }
            Geometry::LineString(line) => Self::from_line_string(&line, precision),
            Geometry::MultiLineString(mls) => {
                let mut all_cells = Vec::new();
                for line in &mls.0 {
                    all_cells.extend(Self::from_line_string(line, precision)?);
                }
                Ok(all_cells)
            }
            Geometry::Polygon(poly) => match poly.centroid() {
                Some(centroid) => Ok(vec![Self::from_coord(&centroid, precision)?]),
                None => Ok(vec![]),
            },
            Geometry::MultiPolygon(mp) => mp
                .0
                .iter()
                .filter_map(|poly| poly.centroid())
                .map(|centroid| Self::from_coord(&centroid, precision))
                .collect(),
            Geometry::GeometryCollection(gc) => {
                let mut all_cells = Vec::new();
                for g in gc.0 {
                    all_cells.extend(Self::from_geometry(g, precision)?);
                }
                Ok(all_cells)
            }
            _ => Err(GeohashError::GeometryParseError(
                "Unsupported geometry type".to_string(),
            )),
        }
    }

    /// Returns the center of the cell as a `(lon, lat)` point.
    pub fn center(&self) -> Point<f64> {
        self.bbox.center().into()
    }

    pub fn north(&self) -> f64 {
        self.bbox.max().y
    }

    pub fn south(&self) -> f64 {
        self.bbox.min().y
    }

    pub fn east(&self) -> f64 {
        self.bbox.max().x
    }

    pub fn west(&self) -> f64 {
        self.bbox.min().x
    }

    /// Returns true when the point lies inside the cell or on its edge.
    pub fn contains(&self, point: &Point<f64>) -> bool {
        self.bbox.intersects(&point.0)
    }

    /// Converts this cell to a rectangular polygon.
    ///
    /// Returns a `geo_types::Polygon` suitable for spatial operations or
    /// GeoJSON export.
    pub fn to_polygon(&self) -> Polygon<f64> {
        self.bbox.to_polygon()
    }

    /// The cell next to this one in `direction`.
    pub fn adjacent(&self, direction: Direction) -> Result<Self, GeohashError> {
        Self::from_geohash(&adjacent(&self.geohash, direction)?)
    }

    /// The eight surrounding cells, ordered N, NE, E, SE, S, SW, W, NW.
    pub fn neighbors(&self) -> Result<Vec<Self>, GeohashError> {
        neighbors(&self.geohash)?
            .iter()
            .map(|geohash| Self::from_geohash(geohash))
            .collect()
    }

    /// The enclosing cell one symbol shorter, or `None` at precision 1.
    pub fn parent(&self) -> Option<Self> {
        if self.precision <= 1 {
            return None;
        }
        let geohash = &self.geohash[..self.geohash.len() - 1];
        Self::from_geohash(geohash).ok()
    }

    /// The 32 cells one symbol longer, in alphabet order.
    pub fn children(&self) -> Result<Vec<Self>, GeohashError> {
        BASE32
            .iter()
            .map(|&symbol| {
                let mut geohash = String::with_capacity(self.precision + 1);
                geohash.push_str(&self.geohash);
                geohash.push(symbol as char);
                Self::from_geohash(&geohash)
            })
            .collect()
    }
}
