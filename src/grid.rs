use crate::cell::GeohashCell;
use crate::error::GeohashError;
use crate::geom::clamp_to_world;
use crate::index::{Direction, encode};
use geo_types::{Point, Polygon, Rect, coord};
use log::debug;

/// Every geohash cell of one precision that overlaps a rectangular extent.
///
/// Cells are stored row by row, south to north, each row west to east.
///
/// # Example
/// ```
/// use geohash_rs::GeohashGrid;
/// use geo_types::point;
///
/// # fn main() -> Result<(), geohash_rs::GeohashError> {
/// let grid = GeohashGrid::builder()
///     .precision(5)
///     .extent(-5.65, 42.58, -5.55, 42.63)
///     .build()?;
///
/// let cell = grid.get_cell_at(&point! { x: -5.6, y: 42.6 });
/// assert_eq!(cell.map(|c| c.geohash.as_str()), Some("ezs42"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct GeohashGrid {
    cells: Vec<GeohashCell>,
    precision: usize,
}

impl GeohashGrid {
    pub fn builder() -> GeohashGridBuilder {
        GeohashGridBuilder::new()
    }

    /// Builds the grid covering `[min_lon, max_lon] x [min_lat, max_lat]`.
    ///
    /// The extent is clipped to the world bounds first.
    pub fn from_extent(
        min_lon: f64,
        min_lat: f64,
        max_lon: f64,
        max_lat: f64,
        precision: usize,
    ) -> Result<Self, GeohashError> {
        let cells = generate_cells_for_extent(min_lon, min_lat, max_lon, max_lat, precision)?;
        Ok(Self { cells, precision })
    }

    pub fn from_rect(rect: &Rect<f64>, precision: usize) -> Result<Self, GeohashError> {
        Self::from_extent(
            rect.min().x,
            rect.min().y,
            rect.max().x,
            rect.max().y,
            precision,
        )
    }

    pub fn precision(&self) -> usize {
        self.precision
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[GeohashCell] {
        &self.cells
    }

    pub fn iter(&self) -> impl Iterator<Item = &GeohashCell> {
        self.cells.iter()
    }

    /// The grid cell containing `point`, if the point falls inside the grid.
    pub fn get_cell_at(&self, point: &Point<f64>) -> Option<&GeohashCell> {
        let geohash = encode(point.y(), point.x(), self.precision).ok()?;
        self.cells.iter().find(|cell| cell.geohash == geohash)
    }

    pub fn to_polygons(&self) -> Vec<Polygon<f64>> {
        self.cells.iter().map(|cell| cell.to_polygon()).collect()
    }

    pub fn filter<F>(&self, predicate: F) -> Vec<&GeohashCell>
    where
        F: Fn(&GeohashCell) -> bool,
    {
        self.cells.iter().filter(|cell| predicate(cell)).collect()
    }
}

#[derive(Debug, Default)]
pub struct GeohashGridBuilder {
    precision: Option<usize>,
    extent: Option<Rect<f64>>,
}

impl GeohashGridBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }

    pub fn extent(mut self, min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> Self {
        self.extent = Some(Rect::new(
            coord! { x: min_lon, y: min_lat },
            coord! { x: max_lon, y: max_lat },
        ));
        self
    }

    pub fn rect(mut self, rect: &Rect<f64>) -> Self {
        self.extent = Some(*rect);
        self
    }

    pub fn build(self) -> Result<GeohashGrid, GeohashError> {
        let precision = self
            .precision
            .ok_or_else(|| GeohashError::InvalidArgument("precision must be set".to_string()))?;
        let extent = self
            .extent
            .ok_or_else(|| GeohashError::InvalidArgument("extent must be set".to_string()))?;

        GeohashGrid::from_rect(&extent, precision)
    }
}

// Starts from the south-west cell and steps east across each row, then north
// to the next row. Both loops stop on the cell whose far edge reaches the
// extent, so stepping never wraps past the antimeridian or a pole.
fn generate_cells_for_extent(
    min_lon: f64,
    min_lat: f64,
    max_lon: f64,
    max_lat: f64,
    precision: usize,
) -> Result<Vec<GeohashCell>, GeohashError> {
    if [min_lon, min_lat, max_lon, max_lat].iter().any(|v| !v.is_finite()) {
        return Err(GeohashError::InvalidArgument(format!(
            "extent ({}, {}, {}, {}) is not finite",
            min_lon, min_lat, max_lon, max_lat
        )));
    }

    let extent = clamp_to_world(&Rect::new(
        coord! { x: min_lon, y: min_lat },
        coord! { x: max_lon, y: max_lat },
    ));

    let mut cells = Vec::new();
    let mut row_start = seed_cell(&extent, precision)?;

    loop {
        let mut cell = row_start.clone();
        loop {
            let reached_east = cell.east() >= extent.max().x;
            let next = if reached_east {
                None
            } else {
                Some(cell.adjacent(Direction::Right)?)
            };
            cells.push(cell);
            match next {
                Some(next) => cell = next,
                None => break,
            }
        }

        if row_start.north() >= extent.max().y {
            break;
        }
        row_start = row_start.adjacent(Direction::Top)?;
    }

    debug!(
        "generated {} cells at precision {} for {:?}",
        cells.len(),
        precision,
        extent
    );
    Ok(cells)
}

// The encoder puts a point on a cell line into the cell below it, so a
// minimum corner on a line lands in a cell that only touches the extent.
fn seed_cell(extent: &Rect<f64>, precision: usize) -> Result<GeohashCell, GeohashError> {
    let (min, max) = (extent.min(), extent.max());
    let mut cell = GeohashCell::from_lat_lon(min.y, min.x, precision)?;

    while cell.east() <= min.x && min.x < max.x {
        cell = cell.adjacent(Direction::Right)?;
    }
    while cell.north() <= min.y && min.y < max.y {
        cell = cell.adjacent(Direction::Top)?;
    }
    Ok(cell)
}
