//! Implementation of `phrasal config`.

use std::process::ExitCode;

use phrasal_config::is_global_config;

use crate::cli::context::CommandContext;

/// Shows the contributing config files and the effective settings.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let config = &ctx.config;

    if config.files.is_empty() {
        println!("# no configuration files found; showing defaults");
    } else {
        println!("# config files (highest precedence first):");
        for path in &config.files {
            let scope = if is_global_config(path) { "global" } else { "local" };
            println!("#   {} ({scope})", path.display());
        }
        if let Some(root) = &config.config_root {
            println!("# config root: {}", root.display());
        }
    }
    println!();

    match config.settings_to_toml() {
        Ok(toml) => {
            print!("{toml}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
