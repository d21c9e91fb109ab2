//! URL candidate extraction from free-form answer text.

use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Trailing characters dropped from whitespace-split fallback tokens.
const FALLBACK_TRIM: &[char] = &['"', ',', '.', ';', ':'];

fn markdown_link_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\[[^\]]*\]\((https?://[^)\s]+)\)").expect("markdown link pattern")
    })
}

fn bare_url_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"https?://[^\s)]+").expect("bare url pattern"))
}

/// Ordered, exact-match deduplicated list of URL candidates.
#[derive(Default)]
struct Collected {
    seen: HashSet<String>,
    urls: Vec<String>,
}

impl Collected {
    fn push(&mut self, url: &str) {
        if self.seen.insert(url.to_string()) {
            self.urls.push(url.to_string());
        }
    }
}

/// Extracts URL candidates from `text` in first-seen order.
///
/// Markdown `[label](url)` targets come first, then bare `http(s)://` runs not
/// already collected. Only when both passes find nothing does it fall back to
/// whitespace tokens starting with `http` (any case), with trailing `",.;:`
/// removed.
pub fn extract_links(text: &str) -> Vec<String> {
    let mut out = Collected::default();
    if text.is_empty() {
        return out.urls;
    }

    for caps in markdown_link_re().captures_iter(text) {
        if let Some(m) = caps.get(1) {
            out.push(m.as_str());
        }
    }
    let markdown = out.urls.len();

    for m in bare_url_re().find_iter(text) {
        out.push(m.as_str());
    }
    tracing::trace!(
        markdown,
        bare = out.urls.len() - markdown,
        "regex link passes done"
    );

    if out.urls.is_empty() && !text.trim().is_empty() {
        for token in text.split_whitespace() {
            if !token.to_lowercase().starts_with("http") {
                continue;
            }
            let token = token.trim_end_matches(FALLBACK_TRIM);
            if !token.is_empty() {
                out.push(token);
            }
        }
        tracing::debug!(found = out.urls.len(), "whitespace link fallback used");
    }

    out.urls
}
