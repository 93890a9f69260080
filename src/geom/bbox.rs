use crate::error::GeohashError;
use crate::index::{BITS_PER_SYMBOL, LAT_BOUNDS, LON_BOUNDS};
use geo_types::{Rect, coord};

/// Returns a cell box as `[[south, west], [north, east]]`.
///
/// This is the array layout produced by classic geohash libraries; it is the
/// transpose of the per-axis `[min, max]` intervals built during decoding.
///
/// # Example
/// ```
/// use geohash_rs::{bbox_corners, decode};
///
/// let [[south, west], [north, east]] = bbox_corners(&decode("u").unwrap());
/// assert_eq!((south, west, north, east), (45.0, 0.0, 90.0, 45.0));
/// ```
pub fn bbox_corners(bbox: &Rect<f64>) -> [[f64; 2]; 2] {
    [
        [bbox.min().y, bbox.min().x],
        [bbox.max().y, bbox.max().x],
    ]
}

/// Clips a longitude/latitude rectangle to the world bounds.
pub fn clamp_to_world(rect: &Rect<f64>) -> Rect<f64> {
    Rect::new(
        coord! {
            x: rect.min().x.clamp(LON_BOUNDS[0], LON_BOUNDS[1]),
            y: rect.min().y.clamp(LAT_BOUNDS[0], LAT_BOUNDS[1]),
        },
        coord! {
            x: rect.max().x.clamp(LON_BOUNDS[0], LON_BOUNDS[1]),
            y: rect.max().y.clamp(LAT_BOUNDS[0], LAT_BOUNDS[1]),
        },
    )
}

/// Width and height in degrees, `(longitude span, latitude span)`, of every
/// cell at `precision`.
///
/// Longitude receives the extra bit when `5 * precision` is odd.
pub fn cell_dimensions(precision: usize) -> Result<(f64, f64), GeohashError> {
    if precision < 1 {
        return Err(GeohashError::InvalidArgument(format!(
            "Precision must be at least 1, got {}",
            precision
        )));
    }

    let bits = precision * BITS_PER_SYMBOL;
    let lon_bits = bits.div_ceil(2) as i32;
    let lat_bits = (bits / 2) as i32;

    let width = (LON_BOUNDS[1] - LON_BOUNDS[0]) / 2f64.powi(lon_bits);
    let height = (LAT_BOUNDS[1] - LAT_BOUNDS[0]) / 2f64.powi(lat_bits);
    Ok((width, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::{decode, encode};

    #[test]
    fn test_bbox_corners_order() -> Result<(), GeohashError> {
        let corners = bbox_corners(&decode("ezs42")?);
        assert_eq!(corners[0], [42.5830078125, -5.625]);
        assert_eq!(corners[1], [42.626953125, -5.5810546875]);
        Ok(())
    }

    #[test]
    fn test_cell_dimensions_match_decoded_cells() -> Result<(), GeohashError> {
        for precision in 1..=12 {
            let bbox = decode(&encode(-33.8688, 151.2093, precision)?)?;
            let (width, height) = cell_dimensions(precision)?;
            assert_eq!(bbox.width(), width);
            assert_eq!(bbox.height(), height);
        }
        Ok(())
    }

    #[test]
    fn test_cell_dimensions_zero_precision() {
        assert!(cell_dimensions(0).is_err());
    }

    #[test]
    fn test_clamp_to_world() {
        let rect = Rect::new(coord! { x: -200.0, y: -95.0 }, coord! { x: 10.0, y: 91.0 });
        let clamped = clamp_to_world(&rect);
        assert_eq!(clamped.min(), coord! { x: -180.0, y: -90.0 });
        assert_eq!(clamped.max(), coord! { x: 10.0, y: 90.0 });
    }
}
