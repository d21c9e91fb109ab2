//! Removal of the trailing "Sources:" block the model appends to answers.

use regex::Regex;
use std::sync::OnceLock;

fn sources_line_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?im)^[ \t]*sources:").expect("sources line pattern"))
}

/// Returns the trimmed text before the first line starting with `Sources:`
/// (any case), or the whole trimmed text when there is none.
pub fn strip_sources_block(text: &str) -> String {
    match sources_line_re().find(text) {
        Some(m) => text[..m.start()].trim().to_string(),
        None => text.trim().to_string(),
    }
}
