use tracing_subscriber::EnvFilter;

/// Sends `tracing` output to stderr so it never mixes with the console.
///
/// `RUST_LOG` takes precedence; without it `level` (e.g. `warn`, `debug`,
/// `hotelier=debug`) is used.
pub fn setup_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
