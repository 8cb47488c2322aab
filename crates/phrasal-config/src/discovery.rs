//! Configuration file discovery.
//!
//! Discovers `.phrasal.toml` files by walking up the directory tree from a
//! starting point, then appending the global `~/.phrasal.toml` if present.

use std::path::{Path, PathBuf};

use directories::BaseDirs;
use log::debug;

use crate::parse::is_root_config;

/// The configuration filename.
pub const CONFIG_FILENAME: &str = ".phrasal.toml";

/// Discovers all configuration files relevant to the given directory.
///
/// Returns paths in precedence order: closest to `cwd` first, global
/// (`~/.phrasal.toml`) last. Walking stops at a file that sets `root = true`,
/// in which case the global file is not consulted either.
pub fn discover_config_files(cwd: &Path) -> Vec<PathBuf> {
    let mut configs = Vec::new();

    for dir in cwd.ancestors() {
        let path = dir.join(CONFIG_FILENAME);
        if !path.is_file() {
            continue;
        }
        let stop = is_root_config(&path);
        configs.push(path);
        if stop {
            debug!("{} sets root = true; not searching further", dir.display());
            return configs;
        }
    }

    if let Some(global) = global_config_path().filter(|p| p.is_file() && !configs.contains(p)) {
        configs.push(global);
    }

    debug!("discovered {} config file(s) from {}", configs.len(), cwd.display());
    configs
}

/// Returns the path to the global configuration file (`~/.phrasal.toml`).
///
/// Returns `None` if the home directory cannot be determined.
pub fn global_config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().join(CONFIG_FILENAME))
}

/// Checks if a path is the global configuration file.
pub fn is_global_config(path: &Path) -> bool {
    global_config_path().is_some_and(|global| path == global)
}
