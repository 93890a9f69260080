use crate::error::GeohashError;
use crate::index::codec::{symbol_char, symbol_value};
use crate::index::constants::{BORDERS, NEIGHBORS};
use crate::index::direction::Direction;

/// Path that circles a cell clockwise starting from its northern neighbor.
///
/// ```text
/// 8   1 - 2
/// |   |   |
/// 7   B   3
/// |       |
/// 6 - 5 - 4
/// ```
pub const RING_PATH: [Direction; 8] = [
    Direction::Top,
    Direction::Right,
    Direction::Bottom,
    Direction::Bottom,
    Direction::Left,
    Direction::Left,
    Direction::Top,
    Direction::Top,
];

/// Computes the geohash of the cell next to `geohash` in `direction`.
///
/// The trailing symbol is replaced through the neighbor table for the
/// direction and the current length parity. When the trailing symbol sits on
/// the edge of its parent cell the step carries into the parent, one symbol
/// further left, until a symbol is reached that does not sit on a border.
/// Stepping off the edge of the map wraps around to the opposite side.
///
/// # Example
/// ```
/// use geohash_rs::{adjacent, Direction};
///
/// assert_eq!(adjacent("ezs42", Direction::Right).unwrap(), "ezs43");
/// // '0' is on the western border of "u", so the step moves into "g"
/// assert_eq!(adjacent("u0", Direction::Left).unwrap(), "gb");
/// ```
///
/// # Errors
///
/// - [`GeohashError::InvalidArgument`] - The geohash is empty
/// - [`GeohashError::InvalidCharacter`] - A symbol is outside the base-32 alphabet
pub fn adjacent(geohash: &str, direction: Direction) -> Result<String, GeohashError> {
    if geohash.is_empty() {
        return Err(GeohashError::InvalidArgument(
            "Geohash must not be empty".to_string(),
        ));
    }

    let values = geohash
        .chars()
        .map(symbol_value)
        .collect::<Result<Vec<u8>, _>>()?;
    let row = direction.index();

    // Replacement symbols, collected from the end of the geohash backwards.
    let mut carried = Vec::with_capacity(values.len());
    let mut head_len = values.len();

    while head_len > 0 {
        let last = values[head_len - 1];
        let parity = head_len % 2;
        carried.push(NEIGHBORS[row][parity][last as usize]);
        head_len -= 1;

        if BORDERS[row][parity] & (1u32 << last) == 0 {
            break;
        }
    }

    Ok(values[..head_len]
        .iter()
        .chain(carried.iter().rev())
        .map(|&value| symbol_char(value))
        .collect())
}

/// Steps from `base` along `path`, each step starting from the previous result.
///
/// Returns every intermediate geohash, in path order.
///
/// # Example
/// ```
/// use geohash_rs::{walk, Direction};
///
/// let steps = walk("ezs42", &[Direction::Right, Direction::Right]).unwrap();
/// assert_eq!(steps, vec!["ezs43", "ezs46"]);
/// ```
pub fn walk(base: &str, path: &[Direction]) -> Result<Vec<String>, GeohashError> {
    let mut current = base.to_string();
    path.iter()
        .map(|&direction| {
            current = adjacent(&current, direction)?;
            Ok(current.clone())
        })
        .collect()
}

/// Computes the eight cells surrounding `geohash`.
///
/// The result is ordered north, north-east, east, south-east, south,
/// south-west, west, north-west, following [`RING_PATH`].
///
/// Near the poles the ring wraps across the map like every other step, so
/// single-symbol cells in the top or bottom row get neighbors from the
/// opposite row.
///
/// # Example
/// ```
/// use geohash_rs::neighbors;
///
/// let ring = neighbors("ezs42").unwrap();
/// assert_eq!(ring[0], "ezs48");
/// assert_eq!(ring[2], "ezs43");
/// assert_eq!(ring[6], "ezefr");
/// ```
pub fn neighbors(geohash: &str) -> Result<[String; 8], GeohashError> {
    into_ring(walk(geohash, &RING_PATH)?)
}

pub(crate) fn into_ring(steps: Vec<String>) -> Result<[String; 8], GeohashError> {
    steps.try_into().map_err(|steps: Vec<String>| {
        GeohashError::InvalidArgument(format!("ring walk produced {} cells", steps.len()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::codec::{decode, encode};
    use std::collections::HashSet;

    const SAMPLES: [&str; 10] = [
        "u", "s", "z", "0", "u0", "ub", "ezs42", "gbsuv", "dqcjqcp", "u4pruydqqvj",
    ];

    #[test]
    fn test_adjacent_simple_steps() -> Result<(), GeohashError> {
        assert_eq!(adjacent("ezs42", Direction::Right)?, "ezs43");
        assert_eq!(adjacent("ezs42", Direction::Left)?, "ezefr");
        assert_eq!(adjacent("ezs42", Direction::Top)?, "ezs48");
        assert_eq!(adjacent("ezs42", Direction::Bottom)?, "ezs40");
        assert_eq!(adjacent("u0", Direction::Right)?, "u2");
        Ok(())
    }

    #[test]
    fn test_adjacent_carries_into_parent() -> Result<(), GeohashError> {
        assert_eq!(adjacent("u0", Direction::Left)?, "gb");
        assert_eq!(adjacent("u0", Direction::Bottom)?, "sp");
        assert_eq!(adjacent("ub", Direction::Right)?, "v0");
        assert_eq!(adjacent("dqcjqcp", Direction::Right)?, "dqcjr10");
        Ok(())
    }

    #[test]
    fn test_adjacent_single_symbol_border() -> Result<(), GeohashError> {
        // 'z' is on every relevant border; the result is the mapped symbol alone
        assert_eq!(adjacent("z", Direction::Right)?, "b");
        assert_eq!(adjacent("z", Direction::Top)?, "p");
        assert_eq!(adjacent("0", Direction::Left)?, "p");
        assert_eq!(adjacent("0", Direction::Bottom)?, "b");
        Ok(())
    }

    #[test]
    fn test_adjacent_normalizes_case() -> Result<(), GeohashError> {
        assert_eq!(adjacent("EZS42", Direction::Right)?, "ezs43");
        Ok(())
    }

    #[test]
    fn test_adjacent_errors() {
        assert!(matches!(
            adjacent("", Direction::Top),
            Err(GeohashError::InvalidArgument(_))
        ));
        assert_eq!(
            adjacent("ezs4i", Direction::Top),
            Err(GeohashError::InvalidCharacter('i'))
        );
    }

    #[test]
    fn test_adjacent_inverse() -> Result<(), GeohashError> {
        for geohash in SAMPLES {
            for direction in Direction::ALL {
                let there = adjacent(geohash, direction)?;
                assert_eq!(adjacent(&there, direction.opposite())?, geohash);
            }
        }
        Ok(())
    }

    #[test]
    fn test_adjacent_cell_shares_edge() -> Result<(), GeohashError> {
        let geohash = encode(40.7128, -74.0060, 7)?;
        let origin = decode(&geohash)?;

        let east = decode(&adjacent(&geohash, Direction::Right)?)?;
        assert_eq!(east.min().x, origin.max().x);
        assert_eq!(east.min().y, origin.min().y);

        let north = decode(&adjacent(&geohash, Direction::Top)?)?;
        assert_eq!(north.min().y, origin.max().y);
        assert_eq!(north.min().x, origin.min().x);
        Ok(())
    }

    #[test]
    fn test_neighbors_reference() -> Result<(), GeohashError> {
        let ring = neighbors("ezs42")?;
        assert_eq!(
            ring,
            ["ezs48", "ezs49", "ezs43", "ezs41", "ezs40", "ezefp", "ezefr", "ezefx"]
        );

        let ring = neighbors("u0")?;
        assert_eq!(ring, ["u1", "u3", "u2", "sr", "sp", "ez", "gb", "gc"]);
        Ok(())
    }

    #[test]
    fn test_neighbors_are_distinct() -> Result<(), GeohashError> {
        for geohash in SAMPLES {
            let ring = neighbors(geohash)?;
            let unique: HashSet<&String> = ring.iter().collect();
            assert_eq!(unique.len(), 8, "duplicates around {}", geohash);
            assert!(!ring.iter().any(|n| n == geohash));
        }
        Ok(())
    }

    #[test]
    fn test_neighbors_match_walk() -> Result<(), GeohashError> {
        let ring = neighbors("gbsuv")?;
        let steps = walk("gbsuv", &RING_PATH)?;
        assert_eq!(ring.to_vec(), steps);
        Ok(())
    }

    #[test]
    fn test_into_ring_requires_eight_steps() -> Result<(), GeohashError> {
        let ring = into_ring(walk("u0", &RING_PATH)?)?;
        assert_eq!(ring, neighbors("u0")?);

        let short = walk("u0", &RING_PATH[..3])?;
        assert!(matches!(
            into_ring(short),
            Err(GeohashError::InvalidArgument(_))
        ));
        Ok(())
    }

    #[test]
    fn test_walk_empty_path() -> Result<(), GeohashError> {
        assert!(walk("ezs42", &[])?.is_empty());
        Ok(())
    }

    #[test]
    fn test_walk_round_trip_returns_home() -> Result<(), GeohashError> {
        let path = [
            Direction::Right,
            Direction::Top,
            Direction::Left,
            Direction::Bottom,
        ];
        let steps = walk("u4pruydqqvj", &path)?;
        assert_eq!(steps.last().map(String::as_str), Some("u4pruydqqvj"));
        Ok(())
    }
}
