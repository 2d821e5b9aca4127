use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive, e.g. `KARYO_LOG=debug`.
pub const LOG_ENV_VAR: &str = "KARYO_LOG";

///
/// Install the global subscriber. Logs go to stderr so that stdout stays clean
/// for JSON output.
///
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
