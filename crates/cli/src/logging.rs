use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `debug`).
pub const LOG_ENV: &str = "GOLD_LEDGER_LOG";

/// Install the global subscriber. Logs go to stderr so they never mix
/// with the table on stdout. Defaults to `warn` when `GOLD_LEDGER_LOG`
/// is unset or invalid.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
