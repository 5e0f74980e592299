//! Logging setup for the binary.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the binary. Events go to stderr so stdout stays clean for the report.
//!
//! Level priority: `RUST_LOG` > `--debug` > [`DEFAULT_LOG_LEVEL`].

use tracing_subscriber::EnvFilter;

/// Filter used when neither `RUST_LOG` nor `--debug` is given.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Picks the filter directive for the given environment and flag.
pub fn filter_directive(rust_log: Option<&str>, debug_flag: bool) -> &str {
    match rust_log {
        Some(directive) if !directive.trim().is_empty() => directive,
        _ if debug_flag => "debug",
        _ => DEFAULT_LOG_LEVEL,
    }
}

/// Initialise the global subscriber.
///
/// `debug_flag` is true when the user passed `--debug`.
pub fn init(debug_flag: bool) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = EnvFilter::new(filter_directive(rust_log.as_deref(), debug_flag));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(debug_flag)
        .compact()
        .init();

    tracing::debug!(
        app = env!("CARGO_PKG_NAME"),
        version = env!("CARGO_PKG_VERSION"),
        "Logging initialised"
    );
}
