use percent_encoding::{percent_decode_str, percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::{LinkError, Result};

/// Characters left untouched in a path segment: the RFC 3986 unreserved set.
/// Everything else, including `/`-safe characters like `(`, `)` and `@`, is encoded.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// The pieces of an absolute URL, borrowed from the input string
#[derive(Debug, PartialEq, Eq)]
struct Parts<'a> {
    scheme: &'a str,
    host: &'a str,
    path: &'a str,
    query: Option<&'a str>,
    fragment: Option<&'a str>,
}

fn split(url: &str) -> Option<Parts<'_>> {
    let (scheme, rest) = url.split_once("://")?;
    if scheme.is_empty() {
        return None;
    }

    let (rest, fragment) = match rest.split_once('#') {
        Some((before, frag)) => (before, Some(frag)),
        None => (rest, None),
    };
    let (rest, query) = match rest.split_once('?') {
        Some((before, q)) => (before, Some(q)),
        None => (rest, None),
    };
    let (host, path) = match rest.find('/') {
        Some(pos) => rest.split_at(pos),
        None => (rest, ""),
    };
    if host.is_empty() {
        return None;
    }

    Some(Parts {
        scheme,
        host,
        path,
        query: query.filter(|q| !q.is_empty()),
        fragment: fragment.filter(|f| !f.is_empty()),
    })
}

/// Percent-encode one path segment.
///
/// The segment is decoded first so `%20` stays `%20` instead of becoming `%2520`.
pub fn encode_segment(segment: &str) -> String {
    let raw: Vec<u8> = percent_decode_str(segment).collect();
    percent_encode(&raw, SEGMENT).to_string()
}

/// Percent-encode every path segment of `url` and reassemble it.
///
/// Query and fragment are reattached verbatim, and only when present and
/// non-empty in the input. Idempotent: `normalize(normalize(x)) == normalize(x)`.
pub fn normalize(url: &str) -> Result<String> {
    let parts = split(url.trim())
        .ok_or_else(|| LinkError::invalid_url(format!("'{}' is not an absolute URL", url)))?;

    let path = parts
        .path
        .split('/')
        .map(|segment| {
            if segment.is_empty() {
                String::new()
            } else {
                encode_segment(segment)
            }
        })
        .collect::<Vec<_>>()
        .join("/");

    let mut out = format!("{}://{}{}", parts.scheme, parts.host, path);
    if let Some(query) = parts.query {
        out.push('?');
        out.push_str(query);
    }
    if let Some(fragment) = parts.fragment {
        out.push('#');
        out.push_str(fragment);
    }

    Ok(out)
}
