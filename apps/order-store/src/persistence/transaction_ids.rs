//! Encoding of the ordered transaction-id list into a single scalar column.
//!
//! Table backends have no native list column, so the ids an order has matched
//! under are joined into one delimited string. Encoding is a plain join with
//! no escaping: an id that itself contains [`DELIMITER`] cannot round-trip
//! and will be split on decode. Transaction ids are engine-generated and
//! never contain the delimiter, so no escaping scheme is defined.

/// Separator between transaction ids in the encoded column.
pub const DELIMITER: char = ',';

/// Encode an ordered id list into the column representation.
///
/// The empty list encodes to the empty string.
#[must_use]
pub fn encode(ids: &[String]) -> String {
    ids.join(&DELIMITER.to_string())
}

/// Decode an encoded column back into the ordered id list.
///
/// Decoding is best-effort: empty tokens produced by leading, trailing, or
/// doubled delimiters are dropped rather than rejected, since the list is
/// diagnostic data. Order and duplicates are preserved. An empty or blank
/// input decodes to an empty list.
#[must_use]
pub fn decode(encoded: &str) -> Vec<String> {
    encoded
        .split(DELIMITER)
        .filter(|token| !token.is_empty())
        .map(ToString::to_string)
        .collect()
}
