use crate::error::GeohashError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A compass step from one geohash cell to the next.
///
/// Parses from `right`/`east`/`e`, `left`/`west`/`w`, `top`/`north`/`n`
/// and `bottom`/`south`/`s`, ignoring case.
///
/// # Example
/// ```
/// use geohash_rs::Direction;
///
/// let dir: Direction = "north".parse().unwrap();
/// assert_eq!(dir, Direction::Top);
/// assert_eq!(dir.opposite(), Direction::Bottom);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// East
    Right,
    /// West
    Left,
    /// North
    Top,
    /// South
    Bottom,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Top,
        Direction::Bottom,
    ];

    /// Row of the adjacency tables for this direction.
    pub(crate) fn index(self) -> usize {
        match self {
            Direction::Right => 0,
            Direction::Left => 1,
            Direction::Top => 2,
            Direction::Bottom => 3,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Right => Direction::Left,
            Direction::Left => Direction::Right,
            Direction::Top => Direction::Bottom,
            Direction::Bottom => Direction::Top,
        }
    }
}

impl FromStr for Direction {
    type Err = GeohashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "right" | "east" | "e" => Ok(Direction::Right),
            "left" | "west" | "w" => Ok(Direction::Left),
            "top" | "north" | "n" => Ok(Direction::Top),
            "bottom" | "south" | "s" => Ok(Direction::Bottom),
            _ => Err(GeohashError::InvalidArgument(format!(
                "Unknown direction '{}'",
                s
            ))),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Right => "right",
            Direction::Left => "left",
            Direction::Top => "top",
            Direction::Bottom => "bottom",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() -> Result<(), GeohashError> {
        assert_eq!("right".parse::<Direction>()?, Direction::Right);
        assert_eq!("East".parse::<Direction>()?, Direction::Right);
        assert_eq!("w".parse::<Direction>()?, Direction::Left);
        assert_eq!(" NORTH ".parse::<Direction>()?, Direction::Top);
        assert_eq!("bottom".parse::<Direction>()?, Direction::Bottom);
        Ok(())
    }

    #[test]
    fn test_parse_unknown_direction() {
        let result = "up".parse::<Direction>();
        assert!(matches!(result, Err(GeohashError::InvalidArgument(_))));
    }

    #[test]
    fn test_display_round_trips_through_parse() -> Result<(), GeohashError> {
        for dir in Direction::ALL {
            assert_eq!(dir.to_string().parse::<Direction>()?, dir);
        }
        Ok(())
    }

    #[test]
    fn test_opposite_is_involution() {
        for dir in Direction::ALL {
            assert_ne!(dir.opposite(), dir);
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }
}
