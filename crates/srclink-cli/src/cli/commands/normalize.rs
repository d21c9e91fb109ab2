//! `srclink normalize <url>...` – canonical form and label per URL.

use srclink_core::config::SrclinkConfig;
use srclink_core::links::{display_label, normalize_url};

pub fn run_normalize(urls: &[String], cfg: &SrclinkConfig) {
    let opts = cfg.display_options();
    for raw in urls {
        let url = normalize_url(raw);
        println!("{}\t{}", url, display_label(&url, &opts));
    }
}
