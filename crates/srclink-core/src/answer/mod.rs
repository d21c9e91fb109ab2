//! Cleanup of raw answer text before display.

mod filenames;
mod sources_block;

pub use filenames::strip_filenames_before_links;
pub use sources_block::strip_sources_block;

/// Answer text as shown to the user: the sources block removed and,
/// when `strip_filenames` is set, filename labels before links dropped.
pub fn clean_answer(raw: &str, strip_filenames: bool) -> String {
    let body = strip_sources_block(raw);
    if strip_filenames {
        strip_filenames_before_links(&body)
    } else {
        body
    }
}
