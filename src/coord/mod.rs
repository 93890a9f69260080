use geo_types::{Coord, Point};

/// Trait for types that can provide a longitude/latitude pair.
///
/// Implemented for `(f64, f64)` tuples in `(lon, lat)` order,
/// `geo_types::Point<f64>` and `geo_types::Coord<f64>`, following the
/// `x = longitude`, `y = latitude` convention of the geo ecosystem.
pub trait Coordinate {
    /// Returns the x-coordinate (longitude).
    fn x(&self) -> f64;
    /// Returns the y-coordinate (latitude).
    fn y(&self) -> f64;

    fn longitude(&self) -> f64 {
        self.x()
    }

    fn latitude(&self) -> f64 {
        self.y()
    }
}

impl Coordinate for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }
    fn y(&self) -> f64 {
        self.1
    }
}

impl Coordinate for Point<f64> {
    fn x(&self) -> f64 {
        Point::x(*self)
    }
    fn y(&self) -> f64 {
        Point::y(*self)
    }
}

impl Coordinate for Coord<f64> {
    fn x(&self) -> f64 {
        self.x
    }
    fn y(&self) -> f64 {
        self.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::coord;

    #[test]
    fn test_coordinate_trait_tuple() {
        let tuple = (10.40744, 57.64911);
        assert_eq!(tuple.longitude(), 10.40744);
        assert_eq!(tuple.latitude(), 57.64911);
    }

    #[test]
    fn test_coordinate_trait_point() {
        let point = Point::new(10.40744, 57.64911);
        assert_eq!(point.longitude(), 10.40744);
        assert_eq!(point.latitude(), 57.64911);
    }

    #[test]
    fn test_coordinate_trait_coord() {
        let c = coord! { x: -0.1, y: 51.5 };
        assert_eq!(Coordinate::x(&c), -0.1);
        assert_eq!(Coordinate::y(&c), 51.5);
    }
}
