// crates/cli/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod args;
pub mod config;
pub mod error;
pub mod input;
pub mod options;
pub mod presentation;
pub mod run;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Installs the stderr logger.
///
/// The level starts at `error` and each `-v` raises it one step; `RUST_LOG`
/// takes precedence when set.
pub fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Error,
        1 => log::LevelFilter::Warn,
        2 => log::LevelFilter::Info,
        3 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    // A logger may already be installed when embedded in tests.
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .try_init();
}
