//! Structured-vs-extracted source resolution.

use serde::Serialize;
use std::collections::HashSet;

use crate::response::SourceRecord;

use super::dedupe::{dedupe_by_base, dedupe_exact};
use super::extract::extract_links;
use super::label::{display_label, DisplayOptions};
use super::normalize::normalize_url;

/// Where a resolved source came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceOrigin {
    /// Link field of a backend-provided source record.
    Structured,
    /// Found in the answer text.
    Extracted,
}

/// A display-ready source link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedSource {
    /// Canonical URL; hyperlink target and copy payload.
    pub url: String,
    pub label: String,
    /// Filename reported by the backend, when the link came from a record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub origin: SourceOrigin,
}

/// Extracts, deduplicates and normalizes every link found in `text`.
pub fn canonical_links(text: &str) -> Vec<String> {
    let extracted = extract_links(text);
    let unique = dedupe_by_base(&extracted);
    let canonical = unique
        .iter()
        .map(|url| normalize_url(url))
        .filter(|url| !url.is_empty())
        .collect();
    dedupe_exact(canonical)
}

/// Resolves the sources to show for an answer.
///
/// Usable links on backend `records` win; the answer text is only scanned
/// when no record carries one.
pub fn resolve_sources(
    raw_text: &str,
    records: &[SourceRecord],
    opts: &DisplayOptions,
) -> Vec<ResolvedSource> {
    let structured = from_records(records, opts);
    if !structured.is_empty() {
        tracing::debug!(count = structured.len(), "using structured sources");
        return structured;
    }

    let sources: Vec<ResolvedSource> = canonical_links(raw_text)
        .into_iter()
        .map(|url| ResolvedSource {
            label: display_label(&url, opts),
            url,
            title: None,
            origin: SourceOrigin::Extracted,
        })
        .collect();
    tracing::debug!(count = sources.len(), "using sources extracted from answer text");
    sources
}

fn from_records(records: &[SourceRecord], opts: &DisplayOptions) -> Vec<ResolvedSource> {
    let usable: Vec<(&str, Option<&str>)> = records
        .iter()
        .filter_map(|r| r.usable_link().map(|link| (link, r.filename.as_deref())))
        .collect();
    let links: Vec<&str> = usable.iter().map(|(link, _)| *link).collect();

    let mut seen = HashSet::new();
    dedupe_by_base(&links)
        .into_iter()
        .filter_map(|link| {
            let url = normalize_url(&link);
            if url.is_empty() || !seen.insert(url.clone()) {
                return None;
            }
            let title = usable
                .iter()
                .find(|(l, _)| *l == link)
                .and_then(|(_, title)| title.map(str::to_string));
            Some(ResolvedSource {
                label: display_label(&url, opts),
                url,
                title,
                origin: SourceOrigin::Structured,
            })
        })
        .collect()
}
