//! Match configuration persistence
//!
//! [`MatchConfig`] lives in `match.json` inside the platform config directory
//! (e.g. `~/.config/chess3d/match.json`). Loading never fails: a missing or
//! unreadable file falls back to defaults and the reason is logged.

use crate::core::config::MatchConfig;
use anyhow::Context;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Config filename
const CONFIG_FILENAME: &str = "match.json";

/// Path of `match.json` in the user's config directory, or the working
/// directory when no config directory can be resolved
pub fn config_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "chess3d", "Chess3D") {
        proj_dirs.config_dir().join(CONFIG_FILENAME)
    } else {
        PathBuf::from(CONFIG_FILENAME)
    }
}

/// Load the match config from `path` (default location when `None`)
pub fn load_config(path: Option<&Path>) -> MatchConfig {
    let path = path.map(Path::to_path_buf).unwrap_or_else(config_path);

    if !path.exists() {
        info!("[CONFIG] No config file found at {:?}. Using defaults.", path);
        return MatchConfig::default();
    }

    match read_config(&path) {
        Ok(config) => {
            info!("[CONFIG] Loaded match config from {:?}", path);
            config
        }
        Err(e) => {
            warn!("[CONFIG] {:#}. Using defaults.", e);
            MatchConfig::default()
        }
    }
}

fn read_config(path: &Path) -> anyhow::Result<MatchConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file at {path:?}"))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse config file at {path:?}"))
}

/// Write `config` as pretty JSON, creating the directory if needed
pub fn save_config(config: &MatchConfig, path: Option<&Path>) -> anyhow::Result<PathBuf> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(config_path);

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory at {parent:?}"))?;
        }
    }

    let json = serde_json::to_string_pretty(config).context("Failed to serialize match config")?;
    fs::write(&path, json).with_context(|| format!("Failed to write config file at {path:?}"))?;
    info!("[CONFIG] Saved match config to {:?}", path);
    Ok(path)
}
