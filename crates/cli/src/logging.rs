// crates/cli/src/logging.rs
use tracing_subscriber::EnvFilter;

/// Install the stderr logger. `RUST_LOG` overrides the verbosity flags.
///
/// The engine logs through the `log` facade; the subscriber's `tracing-log`
/// bridge picks those records up.
pub fn init(verbose: u8, quiet: bool) {
    let default_level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
