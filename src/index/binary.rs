use crate::error::GeohashError;
use crate::index::codec::{decode, symbol_char};
use crate::index::constants::BITS_PER_SYMBOL;
use geo_types::Rect;

/// Encodes a string of `0`/`1` bits into a geohash.
///
/// Bits are taken five at a time, most significant first. A trailing group
/// shorter than five bits is padded on the right with zero bits, so
/// `"1"` encodes like `"10000"`.
///
/// # Example
/// ```
/// use geohash_rs::encode_binary;
///
/// assert_eq!(encode_binary("0110111001").unwrap(), "et");
/// assert_eq!(encode_binary("1").unwrap(), "h");
/// ```
///
/// # Errors
///
/// - [`GeohashError::InvalidArgument`] - The bit string is empty
/// - [`GeohashError::InvalidCharacter`] - A character other than `0` or `1`
pub fn encode_binary(bits: &str) -> Result<String, GeohashError> {
    if bits.is_empty() {
        return Err(GeohashError::InvalidArgument(
            "Bit string must not be empty".to_string(),
        ));
    }

    let digits = bits
        .chars()
        .map(|c| match c {
            '0' => Ok(0u8),
            '1' => Ok(1u8),
            other => Err(GeohashError::InvalidCharacter(other)),
        })
        .collect::<Result<Vec<u8>, _>>()?;

    Ok(digits
        .chunks(BITS_PER_SYMBOL)
        .map(|group| {
            let value = group
                .iter()
                .enumerate()
                .fold(0u8, |acc, (i, &bit)| acc | bit << (BITS_PER_SYMBOL - 1 - i));
            symbol_char(value)
        })
        .collect())
}

/// Decodes a string of `0`/`1` bits straight into a bounding box.
///
/// Equivalent to [`decode`]`(`[`encode_binary`]`(bits))`.
pub fn decode_binary(bits: &str) -> Result<Rect<f64>, GeohashError> {
    decode(&encode_binary(bits)?)
}
