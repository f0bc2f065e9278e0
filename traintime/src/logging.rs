use tracing_subscriber::{EnvFilter, fmt};

/// Install the global subscriber. Call once at program start.
///
/// `RUST_LOG` overrides the default `info` level. Output goes to stderr so
/// stdout carries only the board.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
