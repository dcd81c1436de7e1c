//! Log truncation
//!
//! Collection responses from the demo API run to tens of kilobytes; debug logs
//! only keep a prefix of each body.

/// Maximum number of characters kept from a logged body.
const TRUNCATE_LIMIT: usize = 256;

/// Truncate a response body for logging.
///
/// Bodies within the limit are returned unchanged. Longer bodies keep the
/// first `TRUNCATE_LIMIT` characters followed by the total byte length.
pub fn truncate_for_log(s: &str) -> String {
    match s.char_indices().nth(TRUNCATE_LIMIT) {
        None => s.to_string(),
        Some((cut, _)) => format!("{}... [truncated, total {} bytes]", &s[..cut], s.len()),
    }
}
