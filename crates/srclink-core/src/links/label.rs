//! Short display labels for canonical URLs.

use url::Url;

/// Bounds for the configurable path threshold.
pub const MIN_PATH_CHARS: usize = 15;
pub const MAX_PATH_CHARS: usize = 28;

const ELLIPSIS: char = '…';

/// Truncation thresholds used when building display labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Paths longer than this many characters are cut with an ellipsis.
    pub path_max: usize,
    /// Character budget for labels of URLs that do not parse.
    pub fallback_max: usize,
}

impl DisplayOptions {
    /// Builds options with `path_max` clamped into the supported range.
    pub fn new(path_max: usize, fallback_max: usize) -> Self {
        let clamped = path_max.clamp(MIN_PATH_CHARS, MAX_PATH_CHARS);
        if clamped != path_max {
            tracing::warn!(
                requested = path_max,
                used = clamped,
                "display path_max out of range; clamped"
            );
        }
        Self {
            path_max: clamped,
            fallback_max,
        }
    }
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            path_max: 24,
            fallback_max: 40,
        }
    }
}

/// Renders `url` as host (without `www.`) plus a possibly truncated path.
///
/// Presentation only; the hyperlink target stays the full URL.
pub fn display_label(url: &str, opts: &DisplayOptions) -> String {
    let parsed = match Url::parse(url) {
        Ok(u) if u.host_str().is_some() => u,
        _ => {
            tracing::trace!(url, "label from unparsed url");
            return truncate_chars(url, opts.fallback_max);
        }
    };
    let host = parsed.host_str().unwrap_or_default();
    let host = host.strip_prefix("www.").unwrap_or(host);
    let path = match parsed.path() {
        "/" => "",
        p => p,
    };
    let label = match parsed.port() {
        Some(port) => format!("{host}:{port}{}", truncate_chars(path, opts.path_max)),
        None => format!("{host}{}", truncate_chars(path, opts.path_max)),
    };
    tracing::trace!(url, %label, "display label built");
    label
}

fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((cut, _)) => {
            let mut out = s[..cut].to_string();
            out.push(ELLIPSIS);
            out
        }
        None => s.to_string(),
    }
}
