use crate::error::GeohashError;
use crate::index::constants::{
    BASE32, BITS_PER_SYMBOL, INVALID_SYMBOL, LAT_BOUNDS, LON_BOUNDS, SYMBOL_VALUES,
};
use geo_types::{Rect, coord};

/// Looks up the 5-bit value of a geohash symbol, ignoring case.
pub(crate) fn symbol_value(c: char) -> Result<u8, GeohashError> {
    let lower = c.to_ascii_lowercase();
    if lower.is_ascii() {
        let value = SYMBOL_VALUES[lower as usize];
        if value != INVALID_SYMBOL {
            return Ok(value);
        }
    }
    Err(GeohashError::InvalidCharacter(c))
}

pub(crate) fn symbol_char(value: u8) -> char {
    BASE32[value as usize] as char
}

// Axis refined by bit `j` of symbol `i`: 0 = latitude, 1 = longitude.
// Symbol 0 starts on longitude and the start alternates with each symbol.
fn axis(i: usize, j: usize) -> usize {
    (!i & 1) ^ (j & 1)
}

/// Decodes a geohash into the bounding box of the cell it denotes.
///
/// The box is returned as a `Rect` whose `min` corner is `(west, south)` and
/// whose `max` corner is `(east, north)`, with `x` the longitude and `y` the
/// latitude. See [`bbox_corners`](crate::geom::bbox_corners) for the
/// `[[south, west], [north, east]]` array form.
///
/// # Example
/// ```
/// use geohash_rs::decode;
///
/// let bbox = decode("ezs42").unwrap();
/// assert_eq!(bbox.min().y, 42.5830078125);
/// assert_eq!(bbox.min().x, -5.625);
/// assert_eq!(bbox.max().y, 42.626953125);
/// assert_eq!(bbox.max().x, -5.5810546875);
/// ```
///
/// # Errors
///
/// - [`GeohashError::InvalidArgument`] - The geohash is empty
/// - [`GeohashError::InvalidCharacter`] - A symbol is outside the base-32 alphabet
pub fn decode(geohash: &str) -> Result<Rect<f64>, GeohashError> {
    if geohash.is_empty() {
        return Err(GeohashError::InvalidArgument(
            "Geohash must not be empty".to_string(),
        ));
    }

    let mut bounds = [LAT_BOUNDS, LON_BOUNDS];

    for (i, c) in geohash.chars().enumerate() {
        let value = symbol_value(c)?;

        for j in 0..BITS_PER_SYMBOL {
            let bit = (value >> (BITS_PER_SYMBOL - 1 - j)) & 1;
            let k = axis(i, j);
            // bit 1 keeps the upper half, so the lower bound moves up
            bounds[k][(bit ^ 1) as usize] = (bounds[k][0] + bounds[k][1]) / 2.0;
        }
    }

    Ok(Rect::new(
        coord! { x: bounds[1][0], y: bounds[0][0] },
        coord! { x: bounds[1][1], y: bounds[0][1] },
    ))
}

/// Encodes a latitude/longitude pair into a geohash of `precision` symbols.
///
/// Each symbol halves the cell five times, alternating longitude and
/// latitude. A coordinate lying exactly on a bisection line falls into the
/// lower (south or west) half.
///
/// # Example
/// ```
/// use geohash_rs::{encode, DEFAULT_PRECISION};
///
/// let geohash = encode(57.64911, 10.40744, 11).unwrap();
/// assert_eq!(geohash, "u4pruydqqvj");
///
/// let full = encode(57.64911, 10.40744, DEFAULT_PRECISION).unwrap();
/// assert!(full.starts_with("u4pruydqqvj"));
/// ```
///
/// # Errors
///
/// - [`GeohashError::InvalidArgument`] - `precision` is zero
pub fn encode(latitude: f64, longitude: f64, precision: usize) -> Result<String, GeohashError> {
    if precision < 1 {
        return Err(GeohashError::InvalidArgument(format!(
            "Precision must be at least 1, got {}",
            precision
        )));
    }

    let target = [latitude, longitude];
    let mut bounds = [LAT_BOUNDS, LON_BOUNDS];
    let mut geohash = String::with_capacity(precision);

    for i in 0..precision {
        let mut value = 0u8;

        for j in 0..BITS_PER_SYMBOL {
            let k = axis(i, j);
            let mid = (bounds[k][0] + bounds[k][1]) / 2.0;
            let bit = u8::from(target[k] > mid);
            bounds[k][(bit ^ 1) as usize] = mid;
            value |= bit << (BITS_PER_SYMBOL - 1 - j);
        }

        geohash.push(symbol_char(value));
    }

    Ok(geohash)
}
