//! Logger setup.

use env_logger::{Builder, Env};
use log::{LevelFilter, debug};

/// Maps the `-v` count to a log level.
pub fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Initializes logging to stderr.
///
/// `RUST_LOG` takes precedence over the verbosity flag when it is set.
pub fn init(verbose: u8) {
    let mut builder = Builder::new();
    builder.filter_level(level_for(verbose));
    builder.parse_env(Env::default());
    builder.format_timestamp(None);
    // A second init (e.g. in tests) keeps the first logger.
    if let Err(e) = builder.try_init() {
        debug!("logger already initialized: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for(0), LevelFilter::Warn);
        assert_eq!(level_for(1), LevelFilter::Debug);
        assert_eq!(level_for(2), LevelFilter::Trace);
        assert_eq!(level_for(9), LevelFilter::Trace);
    }
}
