//! Canonicalization of extracted URL candidates.
//!
//! Never fails: input that cannot be parsed as a URL comes back as a
//! best-effort trimmed string.

use regex::Regex;
use std::sync::OnceLock;
use url::Url;

/// Filename substituted for empty `download=` values and bare `/download` paths.
pub const DOWNLOAD_PLACEHOLDER: &str = "source.pdf";

/// Invisible characters that ride along with copied links.
const ZERO_WIDTH: &[char] = &['\u{200B}', '\u{200C}', '\u{200D}', '\u{2060}', '\u{FEFF}'];
const TRAILING_DASHES: &[char] = &['\u{2014}', '\u{2013}'];
const TRAILING_PUNCT: &[char] = &[')', ',', '.', '?', '!', ';', ':'];

fn scheme_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://").expect("scheme pattern"))
}

/// Normalizes one URL candidate into an absolute URL string.
///
/// # Examples
///
/// - `"example.com/page."` → `"https://example.com/page"`
/// - `"https://x.test/file?download="` → `"https://x.test/file?download=source.pdf"`
/// - `"https://x.test/report/download"` → `"https://x.test/report/download/source.pdf"`
pub fn normalize_url(raw: &str) -> String {
    let mut s = raw.trim_matches(|c: char| c.is_whitespace() || ZERO_WIDTH.contains(&c));

    if let Some(inner) = s.strip_prefix('<').and_then(|rest| rest.strip_suffix('>')) {
        s = inner;
    }

    let s = s
        .trim_end_matches(TRAILING_DASHES)
        .trim_end_matches(TRAILING_PUNCT);
    if s.is_empty() {
        return String::new();
    }

    let candidate = with_scheme(s);
    let mut url = match Url::parse(&candidate) {
        Ok(url) => url,
        Err(e) => {
            tracing::debug!(input = raw, error = %e, "url parse failed; keeping trimmed text");
            return candidate.trim_end_matches(&['"', ','][..]).to_string();
        }
    };

    fill_empty_download_param(&mut url);
    fill_download_path(&mut url);
    let normalized = url.to_string();
    tracing::trace!(input = raw, %normalized, "url normalized");
    normalized
}

fn with_scheme(s: &str) -> String {
    if scheme_re().is_match(s) {
        s.to_string()
    } else if s.starts_with("//") {
        format!("https:{s}")
    } else {
        format!("https://{s}")
    }
}

/// `?download=` with an empty value becomes `?download=source.pdf`.
fn fill_empty_download_param(url: &mut Url) {
    let needs_fill = url
        .query_pairs()
        .any(|(key, value)| key == "download" && value.is_empty());
    if !needs_fill {
        return;
    }

    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(key, value)| {
            let value = if key == "download" && value.is_empty() {
                DOWNLOAD_PLACEHOLDER.to_string()
            } else {
                value.into_owned()
            };
            (key.into_owned(), value)
        })
        .collect();
    url.query_pairs_mut().clear().extend_pairs(pairs);
}

/// A path ending in `/download` (or `/download/`) gets `/source.pdf` appended.
fn fill_download_path(url: &mut Url) {
    let path = url.path();
    let trimmed = path.strip_suffix('/').unwrap_or(path);
    if !trimmed.ends_with("/download") {
        return;
    }
    let new_path = format!("{trimmed}/{DOWNLOAD_PLACEHOLDER}");
    url.set_path(&new_path);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adds_scheme_and_strips_period() {
        assert_eq!(normalize_url("example.com/page."), "https://example.com/page");
    }

    #[test]
    fn empty_download_param_filled() {
        let out = normalize_url("https://x.test/file?download=");
        let url = Url::parse(&out).unwrap();
        let value = url
            .query_pairs()
            .find(|(k, _)| k == "download")
            .map(|(_, v)| v.into_owned());
        assert_eq!(value.as_deref(), Some("source.pdf"));
        assert_eq!(out, "https://x.test/file?download=source.pdf");
    }

    #[test]
    fn other_query_pairs_survive_download_fill() {
        assert_eq!(
            normalize_url("https://x.test/f?id=7&download=&lang=en"),
            "https://x.test/f?id=7&download=source.pdf&lang=en"
        );
    }

    #[test]
    fn nonempty_download_param_untouched() {
        assert_eq!(
            normalize_url("https://x.test/f?download=a.pdf"),
            "https://x.test/f?download=a.pdf"
        );
    }

    #[test]
    fn download_path_gets_filename() {
        assert_eq!(
            normalize_url("https://x.test/report/download"),
            "https://x.test/report/download/source.pdf"
        );
        assert_eq!(
            normalize_url("https://x.test/report/download/"),
            "https://x.test/report/download/source.pdf"
        );
    }

    #[test]
    fn download_suffix_must_be_whole_segment() {
        assert_eq!(
            normalize_url("https://x.test/predownload"),
            "https://x.test/predownload"
        );
    }

    #[test]
    fn strips_wrapper_invisibles_and_dashes() {
        assert_eq!(
            normalize_url("\u{200B} <https://x.test/a>\u{FEFF} "),
            "https://x.test/a"
        );
        assert_eq!(normalize_url("https://x.test/a\u{2014}"), "https://x.test/a");
        assert_eq!(normalize_url("https://x.test/a).\u{2013}"), "https://x.test/a");
    }

    #[test]
    fn protocol_relative_gets_https() {
        assert_eq!(normalize_url("//x.test/a"), "https://x.test/a");
    }

    #[test]
    fn keeps_explicit_scheme() {
        assert_eq!(normalize_url("http://x.test/a;"), "http://x.test/a");
        assert_eq!(normalize_url("ftp://x.test/file"), "ftp://x.test/file");
    }

    #[test]
    fn unparseable_input_degrades() {
        assert_eq!(normalize_url("http://exa mple.com\","), "http://exa mple.com");
        assert_eq!(normalize_url(""), "");
        assert_eq!(normalize_url(" .,; "), "");
    }

    #[test]
    fn idempotent_on_normalized_output() {
        for input in [
            "example.com/page.",
            "https://x.test/file?download=",
            "https://x.test/report/download/",
            "https://x.test/a?b=1&c=2",
            "http://x.test/",
        ] {
            let once = normalize_url(input);
            assert_eq!(normalize_url(&once), once, "input: {input}");
        }
    }
}
