//! Source-link pipeline: raw answer text in, display-ready canonical URLs out.
//!
//! Stages run in order: extraction, base-path deduplication, normalization,
//! labelling. Every stage is a pure function over strings and degrades
//! instead of failing.

mod dedupe;
mod extract;
mod label;
mod normalize;
mod resolve;

pub use dedupe::{base_path, dedupe_by_base};
pub use extract::extract_links;
pub use label::{display_label, DisplayOptions, MAX_PATH_CHARS, MIN_PATH_CHARS};
pub use normalize::{normalize_url, DOWNLOAD_PLACEHOLDER};
pub use resolve::{canonical_links, resolve_sources, ResolvedSource, SourceOrigin};
