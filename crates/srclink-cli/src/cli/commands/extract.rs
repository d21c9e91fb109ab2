//! `srclink extract [path]` – list canonical source links in answer text.

use anyhow::Result;
use srclink_core::config::SrclinkConfig;
use srclink_core::links::{canonical_links, display_label};
use std::path::Path;

use crate::cli::input::read_input;

pub fn run_extract(path: Option<&Path>, cfg: &SrclinkConfig) -> Result<()> {
    let text = read_input(path)?;
    let links = canonical_links(&text);
    tracing::info!(count = links.len(), "extracted source links");
    if links.is_empty() {
        println!("No sources found.");
        return Ok(());
    }
    let opts = cfg.display_options();
    for url in links {
        println!("{}\t{}", display_label(&url, &opts), url);
    }
    Ok(())
}
