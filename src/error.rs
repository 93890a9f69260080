/// Error type for geohash-rs operations.
#[derive(Debug, PartialEq)]
pub enum GeohashError {
    /// A symbol outside the expected alphabet (base-32 for geohashes, `0`/`1` for bit strings).
    InvalidCharacter(char),
    /// An argument the algorithm cannot work with (empty geohash, zero precision, unknown direction).
    InvalidArgument(String),
    /// File I/O or serialization error.
    IoError(String),
    /// CSV parsing or reading error.
    CsvError(String),
    /// Failed to parse or convert a geometry (GeoJSON or WKT).
    GeometryParseError(String),
}

impl std::fmt::Display for GeohashError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeohashError::InvalidCharacter(c) => write!(f, "Invalid character: {:?}", c),
            GeohashError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            GeohashError::IoError(msg) => write!(f, "IO error: {}", msg),
            GeohashError::CsvError(msg) => write!(f, "CSV error: {}", msg),
            GeohashError::GeometryParseError(msg) => write!(f, "Geometry parse error: {}", msg),
        }
    }
}

impl std::error::Error for GeohashError {}
