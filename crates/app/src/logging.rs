use tracing_subscriber::EnvFilter;

/// Install the global subscriber, filtered by `RUST_LOG`
///
/// Logs go to stderr; stdout only carries timestamps.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
