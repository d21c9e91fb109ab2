//! Removal of redundant `.pdf` filename labels placed right before links.

use regex::Regex;
use std::sync::OnceLock;

fn filename_before_link_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)(^|[\s(])[\w.\-]{3,}\.pdf(\s*,?\s*https?://)").expect("filename pattern")
    })
}

/// Drops `name.pdf` tokens that are immediately followed (after optional
/// comma and whitespace) by an `http(s)://` URL. The separator is kept.
///
/// A token must start the text or follow whitespace or `(`, so a `.pdf`
/// path segment inside a preceding link is left alone.
pub fn strip_filenames_before_links(text: &str) -> String {
    filename_before_link_re()
        .replace_all(text, "${1}${2}")
        .into_owned()
}
