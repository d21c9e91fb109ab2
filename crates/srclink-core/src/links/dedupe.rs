//! Query-insensitive deduplication of URL candidates.

use std::collections::HashSet;

/// Part of `url` before its first `?`.
pub fn base_path(url: &str) -> &str {
    url.split_once('?').map_or(url, |(base, _)| base)
}

/// Keeps the first URL seen for each distinct base path, in original order.
///
/// The retained value is the full original URL, query string included.
pub fn dedupe_by_base<S: AsRef<str>>(urls: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for url in urls {
        let url: &str = url.as_ref();
        if seen.insert(base_path(url)) {
            out.push(url.to_string());
        }
    }
    tracing::trace!(
        input = urls.len(),
        kept = out.len(),
        "deduplicated links by base path"
    );
    out
}

/// Drops exact repeats, keeping first occurrences.
pub(crate) fn dedupe_exact(urls: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    urls.into_iter()
        .filter(|url| seen.insert(url.clone()))
        .collect()
}
