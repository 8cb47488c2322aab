//! Starter files written by `phrasal init`.
//!
//! The files under `templates/` are complete configs documenting every
//! setting at its default. `init` writes them with each setting disabled, so a
//! fresh file changes nothing until the user uncomments a line.

/// Project-level starter config.
const LOCAL: &str = include_str!("../templates/config.toml");

/// Starter config for `~/.phrasal.toml`.
const GLOBAL: &str = include_str!("../templates/config-global.toml");

/// Returns the starter file for a project directory.
pub fn local_template() -> String {
    disable_settings(LOCAL)
}

/// Returns the starter file for the global config.
pub fn global_template() -> String {
    disable_settings(GLOBAL)
}

/// Prefixes settings and section headers with `# `.
///
/// Comment lines and blank lines pass through unchanged.
fn disable_settings(source: &str) -> String {
    source
        .lines()
        .map(|line| {
            if line.is_empty() || line.starts_with('#') {
                format!("{line}\n")
            } else {
                format!("# {line}\n")
            }
        })
        .collect()
}
