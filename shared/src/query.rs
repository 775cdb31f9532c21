//! Query string parsing for page URLs.
//!
//! Mirrors `application/x-www-form-urlencoded` decoding as browsers apply it to
//! `location.search`, except that undecodable input is reported as an error
//! instead of being patched with replacement characters.

use crate::error::{Result, SharedError};
use log::trace;

/// Parses a query string (with or without the leading `?`) into ordered key/value pairs.
///
/// Empty segments (`a=1&&b=2`) are skipped and a segment without `=` yields an
/// empty value. Any pair that does not decode to UTF-8 fails the whole parse.
pub fn parse_query(query: &str) -> Result<Vec<(String, String)>> {
    let query = query.strip_prefix('?').unwrap_or(query);
    trace!("Parsing query string: {:?}", query);

    query
        .split('&')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let (key, value) = segment.split_once('=').unwrap_or((segment, ""));
            Ok((decode_component(key)?, decode_component(value)?))
        })
        .collect()
}

/// Returns the first value for `name`, if any.
///
/// Only pairs whose key is `name` have to decode; undecodable pairs elsewhere
/// in the query are skipped, as `URLSearchParams.get` would.
pub fn query_param(query: &str, name: &str) -> Result<Option<String>> {
    let query = query.strip_prefix('?').unwrap_or(query);

    for segment in query.split('&').filter(|segment| !segment.is_empty()) {
        let (key, value) = segment.split_once('=').unwrap_or((segment, ""));
        match decode_component(key) {
            Ok(key) if key == name => return decode_component(value).map(Some),
            Ok(_) => {}
            Err(e) => trace!("Skipping undecodable query key: {}", e),
        }
    }
    Ok(None)
}

fn decode_component(raw: &str) -> Result<String> {
    // '+' must become a space before percent escapes are expanded so that %2B survives
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|decoded| decoded.into_owned())
        .map_err(|e| SharedError::MalformedQuery(format!("{}: {}", raw, e)))
}
