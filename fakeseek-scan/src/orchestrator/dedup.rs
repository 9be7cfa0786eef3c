//! Optional cross-query deduplication by normalised link.
//!
//! By default every occurrence of a link is scored and counted, even when
//! several queries return it. With `dedup_by_link` enabled the scanner keeps
//! only the first occurrence, comparing links after [`normalize_link`].

use std::collections::HashSet;

use url::Url;

/// Query parameters that never identify a page.
const TRACKING_PARAMS: &[&str] = &[
    "utm_source",
    "utm_medium",
    "utm_campaign",
    "utm_term",
    "utm_content",
    "fbclid",
    "gclid",
    "ved",
    "sa",
    "usg",
];

/// Canonicalise a link for equality comparison.
///
/// Scheme and host are lowercased by the parser; default ports, fragments,
/// tracking parameters and a trailing path slash are dropped, and remaining
/// query parameters are sorted. Unparseable links are returned trimmed.
pub fn normalize_link(raw: &str) -> String {
    let Ok(mut url) = Url::parse(raw.trim()) else {
        return raw.trim().to_owned();
    };

    url.set_fragment(None);
    if matches!(
        (url.scheme(), url.port()),
        ("http", Some(80)) | ("https", Some(443))
    ) {
        let _ = url.set_port(None);
    }

    let mut params: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| !TRACKING_PARAMS.contains(&key.to_ascii_lowercase().as_str()))
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    params.sort();
    if params.is_empty() {
        url.set_query(None);
    } else {
        url.query_pairs_mut().clear().extend_pairs(params);
    }

    let path = url.path().to_owned();
    if path.len() > 1 && path.ends_with('/') {
        url.set_path(path.trim_end_matches('/'));
    }

    url.to_string()
}

/// Tracks links already recorded in one scan.
#[derive(Debug, Default)]
pub struct SeenLinks {
    seen: HashSet<String>,
}

impl SeenLinks {
    /// Record `link`. Returns `true` if it had not been seen before.
    pub fn insert(&mut self, link: &str) -> bool {
        self.seen.insert(normalize_link(link))
    }

    /// Number of distinct links recorded.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Returns `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
