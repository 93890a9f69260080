/// Base-32 alphabet of geohash symbols, in value order
pub const BASE32: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

/// Number of bits carried by each geohash symbol
pub const BITS_PER_SYMBOL: usize = 5;

/// Precision used when the caller does not ask for one
pub const DEFAULT_PRECISION: usize = 12;

/// Latitude range of the full coordinate space [min, max]
pub const LAT_BOUNDS: [f64; 2] = [-90.0, 90.0];

/// Longitude range of the full coordinate space [min, max]
pub const LON_BOUNDS: [f64; 2] = [-180.0, 180.0];

pub(crate) const INVALID_SYMBOL: u8 = u8::MAX;

/// ASCII byte to symbol value, `INVALID_SYMBOL` for bytes outside the alphabet
pub(crate) const SYMBOL_VALUES: [u8; 128] = build_symbol_values();

// Rows are [even length, odd length]; directions follow `Direction::index`:
// right, left, top, bottom.
const NEIGHBOR_SYMBOLS: [[&[u8; 32]; 2]; 4] = [
    [
        b"bc01fg45238967deuvhjyznpkmstqrwx",
        b"p0r21436x8zb9dcf5h7kjnmqesgutwvy",
    ],
    [
        b"238967debc01fg45kmstqrwxuvhjyznp",
        b"14365h7k9dcfesgujnmqp0r2twvyx8zb",
    ],
    [
        b"p0r21436x8zb9dcf5h7kjnmqesgutwvy",
        b"bc01fg45238967deuvhjyznpkmstqrwx",
    ],
    [
        b"14365h7k9dcfesgujnmqp0r2twvyx8zb",
        b"238967debc01fg45kmstqrwxuvhjyznp",
    ],
];

const BORDER_SYMBOLS: [[&[u8]; 2]; 4] = [
    [b"bcfguvyz", b"prxz"],
    [b"0145hjnp", b"028b"],
    [b"prxz", b"bcfguvyz"],
    [b"028b", b"0145hjnp"],
];

/// `NEIGHBORS[direction][parity][v]` is the value of the symbol replacing a
/// trailing symbol of value `v` when stepping one cell in `direction`.
pub(crate) const NEIGHBORS: [[[u8; 32]; 2]; 4] = build_neighbors();

/// `BORDERS[direction][parity]` has bit `v` set when a trailing symbol of
/// value `v` sits on the edge of its parent cell in `direction`.
pub(crate) const BORDERS: [[u32; 2]; 4] = build_borders();

const fn build_symbol_values() -> [u8; 128] {
    let mut values = [INVALID_SYMBOL; 128];
    let mut i = 0;
    while i < BASE32.len() {
        values[BASE32[i] as usize] = i as u8;
        i += 1;
    }
    values
}

// The replacement for a trailing symbol is the alphabet entry at that
// symbol's position within the neighbor row.
const fn build_neighbors() -> [[[u8; 32]; 2]; 4] {
    let values = build_symbol_values();
    let mut table = [[[0u8; 32]; 2]; 4];
    let mut direction = 0;
    while direction < 4 {
        let mut parity = 0;
        while parity < 2 {
            let row = NEIGHBOR_SYMBOLS[direction][parity];
            let mut position = 0;
            while position < 32 {
                let value = values[row[position] as usize];
                table[direction][parity][value as usize] = position as u8;
                position += 1;
            }
            parity += 1;
        }
        direction += 1;
    }
    table
}

const fn build_borders() -> [[u32; 2]; 4] {
    let values = build_symbol_values();
    let mut table = [[0u32; 2]; 4];
    let mut direction = 0;
    while direction < 4 {
        let mut parity = 0;
        while parity < 2 {
            let symbols = BORDER_SYMBOLS[direction][parity];
            let mut i = 0;
            while i < symbols.len() {
                table[direction][parity] |= 1u32 << values[symbols[i] as usize];
                i += 1;
            }
            parity += 1;
        }
        direction += 1;
    }
    table
}
