//! Query-string construction
//!
//! Optional parameters the caller did not supply are dropped before encoding,
//! so they never reach the wire as empty values.

use crate::error::{RestError, RestResult};

/// Keep only the candidate entries that carry a value
///
/// Insertion order is preserved.
///
/// ```
/// use ftx_rest::query::query_object;
///
/// let query = query_object([("a", Some(1)), ("b", None), ("c", None), ("d", Some(2))]);
/// assert_eq!(query, vec![("a", "1".to_string()), ("d", "2".to_string())]);
/// ```
pub fn query_object<K, V, I>(candidates: I) -> Vec<(K, String)>
where
    I: IntoIterator<Item = (K, Option<V>)>,
    V: ToString,
{
    candidates
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v.to_string())))
        .collect()
}

/// URL-encode pairs as `key=value&key2=value2`
pub fn query_string<K: AsRef<str>>(pairs: &[(K, String)]) -> RestResult<String> {
    let pairs: Vec<(&str, &str)> = pairs
        .iter()
        .map(|(key, value)| (key.as_ref(), value.as_str()))
        .collect();

    serde_urlencoded::to_string(&pairs).map_err(|e| RestError::invalid(e.to_string()))
}

/// Append the encoded query to `path`, or return `path` unchanged when no pair survives
pub fn with_query<K: AsRef<str>>(path: &str, pairs: &[(K, String)]) -> RestResult<String> {
    if pairs.is_empty() {
        return Ok(path.to_string());
    }

    Ok(format!("{}?{}", path, query_string(pairs)?))
}
