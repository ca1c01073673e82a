//! Diagnostics for the `shiftrota` binary.
//!
//! The schedule itself is the only thing written to stdout, so piping it into
//! a file or `jq` stays clean; every log line goes to stderr.  Without `-v`
//! only warnings show, which is where failed holiday lookups are reported.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Library and binary targets whose events are shown.
const CRATE_TARGETS: &[&str] = &["shiftrota", "rota_core", "rota_time", "rota_shifts"];

/// `-v` count to level: none = warn, `-v` = info (config and summary),
/// `-vv` = debug (per-schedule parameters), `-vvv` = trace.
fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Filter directives raising only our own crates to `level`, so
/// dependencies stay quiet.
fn directives(level: LevelFilter) -> String {
    let level = level.to_string().to_ascii_lowercase();
    CRATE_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Install the stderr subscriber.  `RUST_LOG`, when set, replaces the
/// `-v` mapping entirely.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directives(level_for(verbosity))));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
