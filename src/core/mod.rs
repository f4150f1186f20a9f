//! Core module - match configuration and its persistence
//!
//! - [`config`] - the [`MatchConfig`] resource every match is built from
//! - [`settings_persistence`] - JSON load/save under the platform config dir

pub mod config;
pub mod settings_persistence;

pub use config::MatchConfig;
pub use settings_persistence::{config_path, load_config, save_config};
