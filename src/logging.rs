use tracing_subscriber::EnvFilter;

/// Structured logs on stderr, filtered by `RUST_LOG` (default `info`).
///
/// Stdout stays free for command output such as the region list.
pub fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
