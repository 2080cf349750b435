//! `env_logger` setup.
//!
//! | Flag(s)   | Level |
//! |-----------|-------|
//! | (none)    | WARN  |
//! | `-v`      | INFO  |
//! | `-vv`     | DEBUG |
//! | `-vvv`    | TRACE |
//! | `--quiet` | ERROR |
//!
//! `RUST_LOG`, when set, overrides the flags.

use log::LevelFilter;

/// Maps verbosity flags to a level filter.
pub fn level_for(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }

    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Installs the global logger. Later calls are ignored.
pub fn init(verbose: u8, quiet: bool) {
    let result = env_logger::Builder::new()
        .filter_level(level_for(verbose, quiet))
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .try_init();

    if result.is_err() {
        log::debug!("Logger already initialised");
    }
}
