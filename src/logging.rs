// src/logging.rs
use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive, e.g. `pac_optimizer_core=trace`.
pub const LOG_ENV: &str = "PAC_OPTIMIZER_LOG";

const VERBOSE_DIRECTIVE: &str =
    "warn,pac_optimizer=debug,pac_optimizer_core=debug,pac_optimizer_infra=debug";

/// Install the stderr subscriber. `log` records from the library crates are
/// bridged through `tracing-log`.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| default_filter(verbose));

    // A second init (e.g. from tests) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}

fn default_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_DIRECTIVE)
    } else {
        EnvFilter::new("warn")
    }
}
