mod adjacency;
mod binary;
mod cache;
mod codec;
pub mod constants;
mod direction;

pub use adjacency::{RING_PATH, adjacent, neighbors, walk};
pub use binary::{decode_binary, encode_binary};
pub use cache::GeohashCache;
pub use codec::{decode, encode};
pub use constants::{
    BASE32, BITS_PER_SYMBOL, DEFAULT_PRECISION, LAT_BOUNDS, LON_BOUNDS,
};
pub use direction::Direction;
