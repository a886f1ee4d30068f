use tracing_subscriber::EnvFilter;

fn default_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Diagnostics go to stderr; `RUST_LOG` wins over `-v`.
pub fn init(verbosity: u8) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_level(verbosity))),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
