//! `srclink clean [path]` – answer text without the sources block.

use anyhow::Result;
use srclink_core::answer::clean_answer;
use srclink_core::config::SrclinkConfig;
use std::path::Path;

use crate::cli::input::read_input;

pub fn run_clean(path: Option<&Path>, cfg: &SrclinkConfig) -> Result<()> {
    let text = read_input(path)?;
    println!("{}", clean_answer(&text, cfg.strip_filenames));
    Ok(())
}
