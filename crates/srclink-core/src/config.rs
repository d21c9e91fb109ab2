use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::links::DisplayOptions;
use crate::session::AnswerOptions;

/// Label truncation settings (`[display]` section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// URL paths longer than this many characters are shortened (15..=28).
    pub path_max: usize,
    /// Character budget for labels of links that do not parse as URLs.
    pub fallback_max: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        let d = DisplayOptions::default();
        Self {
            path_max: d.path_max,
            fallback_max: d.fallback_max,
        }
    }
}

/// Global configuration loaded from `~/.config/srclink/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SrclinkConfig {
    /// Whether answer sources start out expanded.
    pub show_sources: bool,
    /// Drop `name.pdf` labels sitting right before their links.
    pub strip_filenames: bool,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Default for SrclinkConfig {
    fn default() -> Self {
        Self {
            show_sources: true,
            strip_filenames: true,
            display: DisplayConfig::default(),
        }
    }
}

impl SrclinkConfig {
    pub fn display_options(&self) -> DisplayOptions {
        DisplayOptions::new(self.display.path_max, self.display.fallback_max)
    }

    pub fn answer_options(&self) -> AnswerOptions {
        AnswerOptions {
            display: self.display_options(),
            show_sources: self.show_sources,
            strip_filenames: self.strip_filenames,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("srclink")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SrclinkConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SrclinkConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

/// Load configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<SrclinkConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let cfg: SrclinkConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
