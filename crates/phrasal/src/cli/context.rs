//! Shared context for running CLI commands.

use std::{env, fmt, path::PathBuf, process::ExitCode};

use phrasal_config::Config;

/// Working directory and merged configuration for one CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Merged configuration; defaults when no file was found or loading was skipped.
    pub config: Config,
}

impl CommandContext {
    /// Resolves the working directory and loads the configuration around it.
    pub fn load() -> Result<Self, ExitCode> {
        let cwd = working_dir()?;
        let config = Config::load(&cwd)
            .map_err(|e| fail(format_args!("failed to load configuration: {e}")))?;
        Ok(Self { cwd, config })
    }

    /// Resolves the working directory and uses default settings.
    ///
    /// For `init` and `check`, which must keep working when a config file on
    /// the path is broken.
    pub fn load_cwd_only() -> Result<Self, ExitCode> {
        Ok(Self {
            cwd: working_dir()?,
            config: Config::default(),
        })
    }
}

/// Returns the current working directory.
fn working_dir() -> Result<PathBuf, ExitCode> {
    env::current_dir().map_err(|e| fail(format_args!("could not determine current directory: {e}")))
}

/// Reports an error on stderr and returns the failing exit code.
fn fail(message: fmt::Arguments<'_>) -> ExitCode {
    eprintln!("error: {message}");
    ExitCode::FAILURE
}
