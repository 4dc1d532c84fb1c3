//! URL string helpers
//!
//! Literal-string manipulation of link targets. Base URLs are frequently
//! relative (`/books?sort=name`), so these helpers never round-trip through
//! [`url::Url`], which would reject or normalize them. Absence of a query or
//! fragment is never an error.

use crate::types::ParamMap;
use url::form_urlencoded;

/// Remove the fragment (and its `#` marker) from a URL.
///
/// Both an empty fragment (`/items#`) and a named one (`/items#top`) are
/// dropped.
pub fn strip_fragment(url: &str) -> &str {
    match url.find('#') {
        Some(idx) => &url[..idx],
        None => url,
    }
}

/// Split a fragment-free URL into the part before `?` and its query string.
///
/// Returns `None` for the query when there is no `?` or the query is empty.
pub fn split_query(url: &str) -> (&str, Option<&str>) {
    match url.split_once('?') {
        Some((base, query)) if !query.is_empty() => (base, Some(query)),
        Some((base, _)) => (base, None),
        None => (url, None),
    }
}

/// Decode a query string into an ordered map.
///
/// Repeated keys keep the position of their first occurrence and the value
/// of their last.
pub fn parse_query(query: &str) -> ParamMap {
    let mut args = ParamMap::new();
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        args.insert(key.into_owned(), value.into_owned());
    }
    args
}

/// Encode an ordered map as an `application/x-www-form-urlencoded` query.
pub fn build_query(args: &ParamMap) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(args)
        .finish()
}

/// Set `param=value` in the query string of `url`.
///
/// The fragment is dropped. An existing `param` is overwritten in place,
/// otherwise it is appended after the existing arguments.
pub fn set_query_param(url: &str, param: &str, value: &str) -> String {
    let url = strip_fragment(url);
    match split_query(url) {
        (base, None) => format!("{base}?{param}={value}"),
        (base, Some(query)) => {
            let mut args = parse_query(query);
            args.insert(param.to_string(), value.to_string());
            format!("{base}?{}", build_query(&args))
        }
    }
}

/// Replace the first literal occurrence of `token` in `url` with `value`.
///
/// This is a plain substring match: the token is not required to be a
/// delimited path segment.
pub fn replace_placeholder(url: &str, token: &str, value: &str) -> String {
    if token.is_empty() {
        return url.to_string();
    }
    url.replacen(token, value, 1)
}
